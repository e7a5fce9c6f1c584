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

//! The text mirror: a canonical, deterministic, human-readable rendering
//! of the same logical field/value sequence, for debugging and
//! cross-format verification — not for production wire traffic.
//!
//! Canonical form: a key renders as `name: ` (quoted when empty, longer
//! than the short-form threshold, all digits, or containing characters
//! that would break tokenizing), a numeric key as `code: `, an anonymous
//! key as `"": `. Scalars render minimally and end with a newline; text
//! follows the same quoting rule as names; a type name renders `!Name `
//! with a trailing space; the explicit no-value renders `~`. The read
//! side parses exactly this canonical form, driven by the kind the caller
//! requests — it is not a general-purpose text parser.

use std::borrow::Cow;

use crate::buffer::Bytes;
use crate::codec::{key, value, KeyQuery, KeyRef, ValueRef, ValueSlot};
use crate::error::Error;
use crate::types::SHORT_FORM_MAX_LEN;
use crate::wire::Wire;

pub struct TextWire<'b> {
    bytes: &'b mut Bytes,
}

enum ParsedKey {
    Anonymous,
    Code(u32),
    Name(String),
}

impl<'b> TextWire<'b> {
    pub fn new(bytes: &'b mut Bytes) -> Self {
        TextWire { bytes }
    }

    pub fn bytes(&mut self) -> &mut Bytes {
        self.bytes
    }

    /// The full rendered region as text.
    pub fn as_text(&self) -> Cow<'_, str> {
        String::from_utf8_lossy(self.bytes.as_slice())
    }

    fn push(&mut self, s: &str) {
        self.bytes.write_bytes(s.as_bytes());
    }

    fn push_quoted(&mut self, s: &str) {
        self.bytes.write_u8(b'"');
        for c in s.chars() {
            match c {
                '"' => self.push("\\\""),
                '\\' => self.push("\\\\"),
                '\n' => self.push("\\n"),
                '\r' => self.push("\\r"),
                '\t' => self.push("\\t"),
                _ => {
                    let mut buf = [0u8; 4];
                    self.push(c.encode_utf8(&mut buf));
                }
            }
        }
        self.bytes.write_u8(b'"');
    }

    fn push_name_or_quoted(&mut self, s: &str) {
        if needs_quoting(s) {
            self.push_quoted(s);
        } else {
            self.push(s);
        }
    }

    fn skip_separators(&mut self) {
        while let Ok(b' ') | Ok(b'\n') = self.bytes.peek_u8() {
            let _ = self.bytes.read_u8();
        }
    }

    /// Consumes at most one delimiter after a quoted token.
    fn eat_delimiter(&mut self) {
        if let Ok(b' ') | Ok(b'\n') = self.bytes.peek_u8() {
            let _ = self.bytes.read_u8();
        }
    }

    fn parse_quoted_into(&mut self, sink: &mut String) -> Result<(), Error> {
        // opening quote, already peeked by the caller
        self.bytes.read_u8()?;
        let mut buf = Vec::new();
        loop {
            match self.bytes.read_u8()? {
                b'"' => break,
                b'\\' => {
                    let escaped = match self.bytes.read_u8()? {
                        b'n' => b'\n',
                        b'r' => b'\r',
                        b't' => b'\t',
                        b'"' => b'"',
                        b'\\' => b'\\',
                        other => {
                            return Err(Error::malformed_stream(format!(
                                "unknown escape '\\{}'",
                                other as char
                            )))
                        }
                    };
                    buf.push(escaped);
                }
                other => buf.push(other),
            }
        }
        sink.clear();
        sink.push_str(to_utf8(&buf)?);
        Ok(())
    }

    /// One whitespace-delimited token; consumes the trailing delimiter.
    fn scalar_token(&mut self) -> Result<String, Error> {
        self.skip_separators();
        let mut buf = Vec::new();
        while self.bytes.remaining() > 0 {
            let b = self.bytes.read_u8()?;
            if b == b' ' || b == b'\n' {
                break;
            }
            buf.push(b);
        }
        Ok(to_utf8(&buf)?.to_string())
    }

    fn parse_key(&mut self) -> Result<ParsedKey, Error> {
        let mut name = String::new();
        if self.bytes.peek_u8()? == b'"' {
            self.parse_quoted_into(&mut name)?;
        } else {
            let mut buf = Vec::new();
            loop {
                let b = self.bytes.read_u8()?;
                if b == b':' {
                    self.eat_delimiter();
                    let tok = to_utf8(&buf)?;
                    if !tok.is_empty() && tok.bytes().all(|b| b.is_ascii_digit()) {
                        let code = tok.parse().map_err(|_| {
                            Error::malformed_stream(format!("numeric key {tok} out of range"))
                        })?;
                        return Ok(ParsedKey::Code(code));
                    }
                    return Ok(ParsedKey::Name(tok.to_string()));
                }
                buf.push(b);
            }
        }
        if self.bytes.read_u8()? != b':' {
            return Err(Error::malformed_stream("expected ':' after field name"));
        }
        self.eat_delimiter();
        if name.is_empty() {
            Ok(ParsedKey::Anonymous)
        } else {
            Ok(ParsedKey::Name(name))
        }
    }
}

impl Wire for TextWire<'_> {
    fn emit_key(&mut self, key: KeyRef<'_>) {
        match key {
            KeyRef::Anonymous => self.push("\"\": "),
            KeyRef::Code(code) => {
                let rendered = code.to_string();
                self.push(&rendered);
                self.push(": ");
            }
            KeyRef::Name(name) => {
                self.push_name_or_quoted(name);
                self.push(": ");
            }
        }
    }

    fn emit_value(&mut self, value: ValueRef<'_>) {
        let rendered = match value {
            ValueRef::I8(v) => v.to_string(),
            ValueRef::I16(v) => v.to_string(),
            ValueRef::I32(v) => v.to_string(),
            ValueRef::I64(v) => v.to_string(),
            ValueRef::U8(v) => v.to_string(),
            ValueRef::U16(v) => v.to_string(),
            ValueRef::U32(v) => v.to_string(),
            ValueRef::F64(v) => v.to_string(),
            ValueRef::Text(s) => {
                self.push_name_or_quoted(s);
                self.push("\n");
                return;
            }
            ValueRef::TypeName(s) => {
                self.push("!");
                self.push(s);
                self.push(" ");
                return;
            }
            ValueRef::NoValue => "~".to_string(),
        };
        self.push(&rendered);
        self.push("\n");
    }

    fn consume_key(&mut self, query: KeyQuery<'_, '_>) -> Result<(), Error> {
        self.skip_separators();
        if self.bytes.remaining() == 0 {
            return Ok(());
        }
        let parsed = self.parse_key()?;
        let found = match &parsed {
            ParsedKey::Anonymous => KeyRef::Anonymous,
            ParsedKey::Code(code) => KeyRef::Code(*code),
            ParsedKey::Name(name) => KeyRef::Name(name),
        };
        key::resolve_query(found, query)
    }

    fn consume_value(&mut self, slot: ValueSlot<'_>) -> Result<(), Error> {
        self.skip_separators();
        if self.bytes.remaining() == 0 {
            return Ok(());
        }
        match slot {
            ValueSlot::Text(sink) => {
                if self.bytes.peek_u8()? == b'"' {
                    let mut parsed = String::new();
                    self.parse_quoted_into(&mut parsed)?;
                    self.eat_delimiter();
                    sink.clear();
                    sink.push_str(&parsed);
                    return Ok(());
                }
                let tok = self.scalar_token()?;
                if tok == "~" {
                    return Ok(());
                }
                sink.clear();
                sink.push_str(&tok);
                Ok(())
            }
            ValueSlot::TypeName(sink) => {
                let tok = self.scalar_token()?;
                if tok == "~" {
                    return Ok(());
                }
                let name = tok.strip_prefix('!').ok_or_else(|| {
                    Error::type_mismatch(format!("expected a type name, found \"{tok}\""))
                })?;
                sink.clear();
                sink.push_str(name);
                Ok(())
            }
            ValueSlot::F64(out) => {
                let tok = self.scalar_token()?;
                if tok == "~" {
                    return Ok(());
                }
                *out = tok.parse().map_err(|_| {
                    Error::type_mismatch(format!("expected a float64, found \"{tok}\""))
                })?;
                Ok(())
            }
            int_slot => {
                let tok = self.scalar_token()?;
                if tok == "~" {
                    return Ok(());
                }
                let v: i64 = tok.parse().map_err(|_| {
                    Error::type_mismatch(format!("expected an integer, found \"{tok}\""))
                })?;
                value::store_int(int_slot, v)
            }
        }
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

/// Whether a name or text value needs the quoted form to tokenize back.
fn needs_quoting(s: &str) -> bool {
    s.is_empty()
        || s.len() > SHORT_FORM_MAX_LEN
        || s == "~"
        || s.starts_with('!')
        || s.bytes().all(|b| b.is_ascii_digit())
        || s.chars()
            .any(|c| c.is_control() || matches!(c, ' ' | '"' | '\\' | ':'))
}

fn to_utf8(raw: &[u8]) -> Result<&str, Error> {
    std::str::from_utf8(raw).map_err(|_| Error::malformed_stream("invalid UTF-8 in text stream"))
}
