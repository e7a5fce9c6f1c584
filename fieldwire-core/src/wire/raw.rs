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

use crate::buffer::Bytes;
use crate::codec::{value, KeyQuery, KeyRef, ValueRef, ValueSlot};
use crate::error::Error;
use crate::wire::Wire;

/// A pure positional value stream with no field framing at all: the lowest
/// overhead and the highest schema coupling. Producer and consumer must
/// agree on strict field order; there is no validation, renaming tolerance,
/// or optional-field skipping.
pub struct RawWire<'b> {
    bytes: &'b mut Bytes,
    fixed_width: bool,
}

impl<'b> RawWire<'b> {
    pub fn new(bytes: &'b mut Bytes, fixed_width: bool) -> Self {
        RawWire { bytes, fixed_width }
    }

    pub fn bytes(&mut self) -> &mut Bytes {
        self.bytes
    }

    /// Replays every value of the readable region onto another wire as an
    /// anonymous field stream.
    pub fn copy_to<W: Wire>(&mut self, target: &mut W) -> Result<(), Error> {
        let mut scratch = String::new();
        while self.bytes.remaining() > 0 {
            let found = value::read_value_ref(self.bytes, &mut scratch)?;
            target.emit_key(KeyRef::Anonymous);
            target.emit_value(found);
        }
        Ok(())
    }
}

impl Wire for RawWire<'_> {
    fn emit_key(&mut self, _key: KeyRef<'_>) {}

    fn emit_value(&mut self, value: ValueRef<'_>) {
        value::write_value(self.bytes, self.fixed_width, &value);
    }

    fn consume_key(&mut self, query: KeyQuery<'_, '_>) -> Result<(), Error> {
        // No key bytes exist; a capture has nothing to recover.
        if let KeyQuery::Capture(sink) = query {
            sink.clear();
        }
        Ok(())
    }

    fn consume_value(&mut self, slot: ValueSlot<'_>) -> Result<(), Error> {
        if self.bytes.remaining() == 0 {
            return Ok(());
        }
        value::read_value(self.bytes, slot)
    }

    fn remaining(&self) -> usize {
        self.bytes.remaining()
    }

    fn clear(&mut self) {
        self.bytes.clear();
    }

    fn flip(&mut self) {
        self.bytes.flip();
    }
}
