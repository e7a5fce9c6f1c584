// Licensed to the Apache Software Foundation (ASF) under one
// or more contributor license agreements.  See the NOTICE file
// distributed with this work for additional information
// regarding copyright ownership.  The ASF licenses this file
// to you under the Apache License, Version 2.0 (the
// "License"); you may not use this file except in compliance
// with the License.  You may obtain a copy of the License at
//
//   http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing,
// software distributed under the License is distributed on an
// "AS IS" BASIS, WITHOUT WARRANTIES OR CONDITIONS OF ANY
// KIND, either express or implied.  See the License for the
// specific language governing permissions and limitations
// under the License.

/// Configuration for a binary wire session.
///
/// A `WireConfig` is constructed once, handed to the wire at construction
/// time, and never mutated for the lifetime of that session. The three
/// flags are independent; `field_less` disables key framing entirely
/// regardless of the other two.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WireConfig {
    fixed_width: bool,
    numeric_fields_only: bool,
    field_less: bool,
}

impl WireConfig {
    /// Creates a config with all flags off: compact encoding, textual
    /// field keys.
    pub fn new() -> Self {
        Self::default()
    }

    /// Every value of a given declared type occupies the same number of
    /// bytes regardless of magnitude, so a same-type rewrite never changes
    /// the stream's length. Off, values take their shortest representation.
    pub fn fixed_width(mut self, yes: bool) -> Self {
        self.fixed_width = yes;
        self
    }

    /// Field keys written by identity are serialized as their numeric code,
    /// discarding the name. Lossy: a name-capturing read of such a stream
    /// yields an empty name.
    pub fn numeric_fields_only(mut self, yes: bool) -> Self {
        self.numeric_fields_only = yes;
        self
    }

    /// No key framing at all: a pure positional value stream.
    pub fn field_less(mut self, yes: bool) -> Self {
        self.field_less = yes;
        self
    }

    #[inline(always)]
    pub fn is_fixed_width(&self) -> bool {
        self.fixed_width
    }

    #[inline(always)]
    pub fn is_numeric_fields_only(&self) -> bool {
        self.numeric_fields_only
    }

    #[inline(always)]
    pub fn is_field_less(&self) -> bool {
        self.field_less
    }
}
