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

//! Marker byte layout.
//!
//! Every encoded key or value leads with exactly one marker byte. Three
//! ranges encode their operand inline, the rest are discrete codes:
//!
//! | bytes          | meaning                                        |
//! |----------------|------------------------------------------------|
//! | `0x00..=0x7F`  | small non-negative integer, marker is the value |
//! | `0x91`         | float64, 8-byte IEEE-754 payload               |
//! | `0xA2..=0xA5`  | int8 / int16 / int32 / int64                   |
//! | `0xA6..=0xA8`  | uint8 / uint16 / uint32                        |
//! | `0xB6`         | type name, varuint32 length + UTF-8            |
//! | `0xB7`         | long field name, varuint32 length + UTF-8      |
//! | `0xB8`         | long text, varuint32 length + UTF-8            |
//! | `0xB9`         | numeric field key, varuint32 code              |
//! | `0xBB`         | explicit no-value placeholder                  |
//! | `0xC0..=0xDF`  | short field name, length `marker - 0xC0`       |
//! | `0xE0..=0xFF`  | short text, length `marker - 0xE0`             |
//!
//! Key markers (`0xB7`, `0xB9`, `0xC0..=0xDF`) and value markers are
//! disjoint, so a stream can be replayed without schema knowledge.

use num_enum::{IntoPrimitive, TryFromPrimitive};

/// Discrete marker byte codes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum WireCode {
    Float64 = 0x91,
    Int8 = 0xA2,
    Int16 = 0xA3,
    Int32 = 0xA4,
    Int64 = 0xA5,
    Uint8 = 0xA6,
    Uint16 = 0xA7,
    Uint32 = 0xA8,
    TypeName = 0xB6,
    FieldNameLong = 0xB7,
    TextLong = 0xB8,
    FieldNumber = 0xB9,
    NoValue = 0xBB,
}

/// Largest value carried inline by a small-integer marker.
pub const SMALL_INT_MAX: u8 = 0x7F;

/// Base of the short field name range; `FIELD_NAME_BASE` alone is the
/// blank/anonymous key.
pub const FIELD_NAME_BASE: u8 = 0xC0;

/// Base of the short text range.
pub const TEXT_BASE: u8 = 0xE0;

/// Longest byte length served by the short forms (field names and text);
/// anything longer takes the long, length-prefixed form.
pub const SHORT_FORM_MAX_LEN: usize = 0x1F;

/// True for markers that open a field key rather than a value.
#[inline]
pub fn is_key_marker(marker: u8) -> bool {
    (FIELD_NAME_BASE..TEXT_BASE).contains(&marker)
        || marker == WireCode::FieldNameLong as u8
        || marker == WireCode::FieldNumber as u8
}
