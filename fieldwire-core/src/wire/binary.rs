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

use std::fmt;

use crate::buffer::Bytes;
use crate::codec::{key, value, KeyQuery, KeyRef, ValueRef, ValueSlot};
use crate::config::WireConfig;
use crate::error::Error;
use crate::types::is_key_marker;
use crate::wire::Wire;

/// The binary codec session: field key framing plus value framing over one
/// byte cursor, under one immutable configuration.
///
/// The wire holds no state besides the cursor and its configuration; it is
/// reused across write/read cycles via [`Wire::clear`] and [`Wire::flip`]
/// rather than recreated. Not safe for concurrent use; pool one wire per
/// thread or serialize access externally.
pub struct BinaryWire<'b> {
    bytes: &'b mut Bytes,
    config: WireConfig,
}

impl<'b> BinaryWire<'b> {
    pub fn new(bytes: &'b mut Bytes, config: WireConfig) -> Self {
        BinaryWire { bytes, config }
    }

    pub fn config(&self) -> WireConfig {
        self.config
    }

    /// The bound cursor, for position inspection and in-place patching.
    pub fn bytes(&mut self) -> &mut Bytes {
        self.bytes
    }

    /// Replays every (key, value) pair of the readable region onto another
    /// wire, e.g. a [`crate::wire::TextWire`] for verification. Key and
    /// value markers are disjoint, so key-only fields and field-less
    /// streams replay correctly. Small-form integers carry no declared
    /// width and replay as int64.
    pub fn copy_to<W: Wire>(&mut self, target: &mut W) -> Result<(), Error> {
        let mut scratch = String::new();
        while self.bytes.remaining() > 0 {
            let marker = self.bytes.peek_u8()?;
            if is_key_marker(marker) {
                let found = key::read_key_ref(self.bytes, &mut scratch)?;
                target.emit_key(found);
            } else {
                let found = value::read_value_ref(self.bytes, &mut scratch)?;
                target.emit_value(found);
            }
        }
        Ok(())
    }
}

impl Wire for BinaryWire<'_> {
    fn emit_key(&mut self, key: KeyRef<'_>) {
        if self.config.is_field_less() {
            return;
        }
        key::write_key(self.bytes, &key);
    }

    fn emit_value(&mut self, value: ValueRef<'_>) {
        value::write_value(self.bytes, self.config.is_fixed_width(), &value);
    }

    fn consume_key(&mut self, query: KeyQuery<'_, '_>) -> Result<(), Error> {
        if self.config.is_field_less() {
            // No key framing on the wire; a capture has nothing to recover.
            if let KeyQuery::Capture(sink) = query {
                sink.clear();
            }
            return Ok(());
        }
        if self.bytes.remaining() == 0 {
            return Ok(());
        }
        key::consume_key(self.bytes, query)
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

    fn uses_numeric_keys(&self) -> bool {
        self.config.is_numeric_fields_only()
    }
}

impl fmt::Debug for BinaryWire<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[read: {}, write: {}]",
            self.bytes.read_position(),
            self.bytes.write_position()
        )?;
        for b in self.bytes.as_slice() {
            write!(f, " {b:02x}")?;
        }
        Ok(())
    }
}
