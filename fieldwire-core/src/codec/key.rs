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

//! Field key framing and the key-matching contract.
//!
//! A blank/anonymous key matches any expected key on read; a numeric key
//! matches by code; a textual key matches by name. The framing of a name
//! depends only on its byte length, never on its content.

use crate::buffer::Bytes;
use crate::error::Error;
use crate::types::{WireCode, FIELD_NAME_BASE, SHORT_FORM_MAX_LEN, TEXT_BASE};

/// A field identity an application declares once: a textual name plus the
/// numeric code used when the wire serializes keys numerically.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WireKey<'a> {
    name: &'a str,
    code: u32,
}

impl<'a> WireKey<'a> {
    pub const fn new(name: &'a str, code: u32) -> Self {
        WireKey { name, code }
    }

    pub const fn name(&self) -> &'a str {
        self.name
    }

    pub const fn code(&self) -> u32 {
        self.code
    }
}

/// A field key as it appears on the wire.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyRef<'a> {
    /// No identifying data; position alone determines meaning.
    Anonymous,
    /// A numeric field code.
    Code(u32),
    /// A textual field name.
    Name(&'a str),
}

/// What a read wants done with the key it consumes.
#[derive(Debug)]
pub enum KeyQuery<'a, 'k> {
    /// Consume without validating identity. Never fails on a well-formed key.
    Any,
    /// Consume and copy a textual name into the sink; numeric and anonymous
    /// keys leave it empty (numeric streams carry no recoverable name).
    Capture(&'a mut String),
    /// Consume and require a match; a blank key matches anything.
    Expect(&'a WireKey<'k>),
}

/// Encodes one key. Anonymous keys are a bare blank marker.
pub(crate) fn write_key(bytes: &mut Bytes, key: &KeyRef<'_>) {
    match *key {
        KeyRef::Anonymous => bytes.write_u8(FIELD_NAME_BASE),
        KeyRef::Code(code) => {
            bytes.write_u8(WireCode::FieldNumber.into());
            bytes.write_varuint32(code);
        }
        KeyRef::Name(name) => {
            if name.len() <= SHORT_FORM_MAX_LEN {
                bytes.write_u8(FIELD_NAME_BASE + name.len() as u8);
            } else {
                bytes.write_u8(WireCode::FieldNameLong.into());
                bytes.write_varuint32(name.len() as u32);
            }
            bytes.write_bytes(name.as_bytes());
        }
    }
}

/// Consumes one key from the stream and resolves the caller's intent.
///
/// On a mismatch the key bytes stay consumed; recovery proceeds from the
/// next unread byte.
pub(crate) fn consume_key(bytes: &mut Bytes, query: KeyQuery<'_, '_>) -> Result<(), Error> {
    let marker = bytes.read_u8()?;
    let found = if marker == FIELD_NAME_BASE {
        KeyRef::Anonymous
    } else if (FIELD_NAME_BASE..TEXT_BASE).contains(&marker) {
        let len = (marker - FIELD_NAME_BASE) as usize;
        KeyRef::Name(read_name(bytes, len)?)
    } else if marker == WireCode::FieldNameLong as u8 {
        let len = bytes.read_varuint32()? as usize;
        KeyRef::Name(read_name(bytes, len)?)
    } else if marker == WireCode::FieldNumber as u8 {
        KeyRef::Code(bytes.read_varuint32()?)
    } else {
        return Err(Error::malformed_stream(format!(
            "expected a field key marker, found 0x{marker:02X}"
        )));
    };
    resolve_query(found, query)
}

/// Self-describing decode for stream replay, borrowing names from `scratch`.
pub(crate) fn read_key_ref<'a>(
    bytes: &mut Bytes,
    scratch: &'a mut String,
) -> Result<KeyRef<'a>, Error> {
    let marker = bytes.read_u8()?;
    if marker == FIELD_NAME_BASE {
        return Ok(KeyRef::Anonymous);
    }
    if (FIELD_NAME_BASE..TEXT_BASE).contains(&marker) {
        let len = (marker - FIELD_NAME_BASE) as usize;
        let name = read_name(bytes, len)?;
        scratch.clear();
        scratch.push_str(name);
        return Ok(KeyRef::Name(scratch));
    }
    if marker == WireCode::FieldNameLong as u8 {
        let len = bytes.read_varuint32()? as usize;
        let name = read_name(bytes, len)?;
        scratch.clear();
        scratch.push_str(name);
        return Ok(KeyRef::Name(scratch));
    }
    if marker == WireCode::FieldNumber as u8 {
        return Ok(KeyRef::Code(bytes.read_varuint32()?));
    }
    Err(Error::malformed_stream(format!(
        "expected a field key marker, found 0x{marker:02X}"
    )))
}

/// Applies the matching contract to a decoded key. Shared by the binary
/// and text wires.
pub(crate) fn resolve_query(found: KeyRef<'_>, query: KeyQuery<'_, '_>) -> Result<(), Error> {
    match query {
        KeyQuery::Any => Ok(()),
        KeyQuery::Capture(sink) => {
            sink.clear();
            if let KeyRef::Name(name) = found {
                sink.push_str(name);
            }
            Ok(())
        }
        KeyQuery::Expect(key) => match found {
            KeyRef::Anonymous => Ok(()),
            KeyRef::Code(code) if code == key.code() => Ok(()),
            KeyRef::Name(name) if name == key.name() => Ok(()),
            other => Err(Error::field_mismatch(format!(
                "expected \"{}\" (code {}), found {}",
                key.name(),
                key.code(),
                describe(&other)
            ))),
        },
    }
}

fn describe(key: &KeyRef<'_>) -> String {
    match key {
        KeyRef::Anonymous => "a blank key".to_string(),
        KeyRef::Code(code) => format!("code {code}"),
        KeyRef::Name(name) => format!("\"{name}\""),
    }
}

fn read_name(bytes: &mut Bytes, len: usize) -> Result<&str, Error> {
    let raw = bytes.read_bytes(len)?;
    std::str::from_utf8(raw).map_err(|_| Error::malformed_stream("invalid UTF-8 in field name"))
}
