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

//! Value encode/decode: one marker byte, then the payload.
//!
//! The compact discipline picks the narrowest representation that holds
//! the value exactly; the choice is reversible because the decoder learns
//! the payload width from the marker alone. The fixed discipline always
//! uses the declared type's marker and width, which keeps re-encoding a
//! same-type value length-stable. Float64 has no compact form; text and
//! type names use the same short/long framing under both disciplines.

use crate::buffer::Bytes;
use crate::error::Error;
use crate::types::{WireCode, FIELD_NAME_BASE, SHORT_FORM_MAX_LEN, SMALL_INT_MAX, TEXT_BASE};

/// A value to be emitted onto a wire, tagged with its declared type.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ValueRef<'a> {
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    U8(u8),
    U16(u16),
    U32(u32),
    F64(f64),
    Text(&'a str),
    TypeName(&'a str),
    NoValue,
}

/// Caller-owned storage a value is decoded into.
///
/// Scalar slots are plain out-parameters; text slots are cleared and
/// refilled, so a reused `String` keeps its capacity across records.
#[derive(Debug)]
pub enum ValueSlot<'a> {
    I8(&'a mut i8),
    I16(&'a mut i16),
    I32(&'a mut i32),
    I64(&'a mut i64),
    U8(&'a mut u8),
    U16(&'a mut u16),
    U32(&'a mut u32),
    F64(&'a mut f64),
    Text(&'a mut String),
    TypeName(&'a mut String),
}

impl ValueSlot<'_> {
    pub(crate) fn kind(&self) -> &'static str {
        match self {
            ValueSlot::I8(_) => "int8",
            ValueSlot::I16(_) => "int16",
            ValueSlot::I32(_) => "int32",
            ValueSlot::I64(_) => "int64",
            ValueSlot::U8(_) => "uint8",
            ValueSlot::U16(_) => "uint16",
            ValueSlot::U32(_) => "uint32",
            ValueSlot::F64(_) => "float64",
            ValueSlot::Text(_) => "text",
            ValueSlot::TypeName(_) => "type name",
        }
    }
}

/// Encodes one value. Appending to the cursor cannot fail.
pub(crate) fn write_value(bytes: &mut Bytes, fixed: bool, value: &ValueRef<'_>) {
    match *value {
        ValueRef::I8(v) => {
            if fixed {
                bytes.write_u8(WireCode::Int8.into());
                bytes.write_i8(v);
            } else {
                write_compact_int(bytes, v as i64);
            }
        }
        ValueRef::I16(v) => {
            if fixed {
                bytes.write_u8(WireCode::Int16.into());
                bytes.write_i16(v);
            } else {
                write_compact_int(bytes, v as i64);
            }
        }
        ValueRef::I32(v) => {
            if fixed {
                bytes.write_u8(WireCode::Int32.into());
                bytes.write_i32(v);
            } else {
                write_compact_int(bytes, v as i64);
            }
        }
        ValueRef::I64(v) => {
            if fixed {
                bytes.write_u8(WireCode::Int64.into());
                bytes.write_i64(v);
            } else {
                write_compact_int(bytes, v);
            }
        }
        ValueRef::U8(v) => {
            if fixed {
                bytes.write_u8(WireCode::Uint8.into());
                bytes.write_u8(v);
            } else {
                write_compact_uint(bytes, v as u32);
            }
        }
        ValueRef::U16(v) => {
            if fixed {
                bytes.write_u8(WireCode::Uint16.into());
                bytes.write_u16(v);
            } else {
                write_compact_uint(bytes, v as u32);
            }
        }
        ValueRef::U32(v) => {
            if fixed {
                bytes.write_u8(WireCode::Uint32.into());
                bytes.write_u32(v);
            } else {
                write_compact_uint(bytes, v);
            }
        }
        ValueRef::F64(v) => {
            bytes.write_u8(WireCode::Float64.into());
            bytes.write_f64(v);
        }
        ValueRef::Text(s) => write_text(bytes, s),
        ValueRef::TypeName(s) => {
            bytes.write_u8(WireCode::TypeName.into());
            bytes.write_varuint32(s.len() as u32);
            bytes.write_bytes(s.as_bytes());
        }
        ValueRef::NoValue => bytes.write_u8(WireCode::NoValue.into()),
    }
}

/// Narrowest signed representation: small form for 0..=127, then the
/// int8/int16/int32/int64 chain.
fn write_compact_int(bytes: &mut Bytes, v: i64) {
    if (0..=SMALL_INT_MAX as i64).contains(&v) {
        bytes.write_u8(v as u8);
    } else if (i8::MIN as i64..=i8::MAX as i64).contains(&v) {
        bytes.write_u8(WireCode::Int8.into());
        bytes.write_i8(v as i8);
    } else if (i16::MIN as i64..=i16::MAX as i64).contains(&v) {
        bytes.write_u8(WireCode::Int16.into());
        bytes.write_i16(v as i16);
    } else if (i32::MIN as i64..=i32::MAX as i64).contains(&v) {
        bytes.write_u8(WireCode::Int32.into());
        bytes.write_i32(v as i32);
    } else {
        bytes.write_u8(WireCode::Int64.into());
        bytes.write_i64(v);
    }
}

/// Narrowest unsigned representation: small form, then uint8/uint16/uint32.
fn write_compact_uint(bytes: &mut Bytes, v: u32) {
    if v <= SMALL_INT_MAX as u32 {
        bytes.write_u8(v as u8);
    } else if v <= u8::MAX as u32 {
        bytes.write_u8(WireCode::Uint8.into());
        bytes.write_u8(v as u8);
    } else if v <= u16::MAX as u32 {
        bytes.write_u8(WireCode::Uint16.into());
        bytes.write_u16(v as u16);
    } else {
        bytes.write_u8(WireCode::Uint32.into());
        bytes.write_u32(v);
    }
}

fn write_text(bytes: &mut Bytes, s: &str) {
    if s.len() <= SHORT_FORM_MAX_LEN {
        bytes.write_u8(TEXT_BASE + s.len() as u8);
    } else {
        bytes.write_u8(WireCode::TextLong.into());
        bytes.write_varuint32(s.len() as u32);
    }
    bytes.write_bytes(s.as_bytes());
}

/// Decodes one value into `slot`. The caller is responsible for the
/// safe-over-read check; here an exhausted cursor mid-value is malformed.
pub(crate) fn read_value(bytes: &mut Bytes, slot: ValueSlot<'_>) -> Result<(), Error> {
    let marker = bytes.read_u8()?;
    if marker <= SMALL_INT_MAX {
        return store_int(slot, marker as i64);
    }
    if marker >= TEXT_BASE {
        let len = (marker - TEXT_BASE) as usize;
        return store_text(bytes, len, slot);
    }
    if marker >= FIELD_NAME_BASE {
        return Err(Error::malformed_stream(format!(
            "field key marker 0x{marker:02X} where a value was expected"
        )));
    }
    match WireCode::try_from(marker) {
        Ok(WireCode::Int8) => {
            let v = bytes.read_i8()?;
            store_int(slot, v as i64)
        }
        Ok(WireCode::Int16) => {
            let v = bytes.read_i16()?;
            store_int(slot, v as i64)
        }
        Ok(WireCode::Int32) => {
            let v = bytes.read_i32()?;
            store_int(slot, v as i64)
        }
        Ok(WireCode::Int64) => {
            let v = bytes.read_i64()?;
            store_int(slot, v)
        }
        Ok(WireCode::Uint8) => {
            let v = bytes.read_u8()?;
            store_int(slot, v as i64)
        }
        Ok(WireCode::Uint16) => {
            let v = bytes.read_u16()?;
            store_int(slot, v as i64)
        }
        Ok(WireCode::Uint32) => {
            let v = bytes.read_u32()?;
            store_int(slot, v as i64)
        }
        Ok(WireCode::Float64) => {
            let v = bytes.read_f64()?;
            match slot {
                ValueSlot::F64(out) => {
                    *out = v;
                    Ok(())
                }
                other => Err(Error::type_mismatch(format!(
                    "float64 value read into {} sink",
                    other.kind()
                ))),
            }
        }
        Ok(WireCode::TextLong) => {
            let len = bytes.read_varuint32()? as usize;
            store_text(bytes, len, slot)
        }
        Ok(WireCode::TypeName) => {
            let len = bytes.read_varuint32()? as usize;
            let name = read_utf8(bytes, len)?;
            match slot {
                ValueSlot::TypeName(sink) => {
                    sink.clear();
                    sink.push_str(name);
                    Ok(())
                }
                other => Err(Error::type_mismatch(format!(
                    "type name read into {} sink",
                    other.kind()
                ))),
            }
        }
        // Explicit no-value: consumed, every sink left untouched.
        Ok(WireCode::NoValue) => Ok(()),
        Ok(WireCode::FieldNameLong) | Ok(WireCode::FieldNumber) => Err(Error::malformed_stream(
            format!("field key marker 0x{marker:02X} where a value was expected"),
        )),
        Err(_) => Err(Error::malformed_stream(format!(
            "unrecognized marker byte 0x{marker:02X}"
        ))),
    }
}

/// Self-describing decode for stream replay: yields the value as written,
/// borrowing text payloads from `scratch`. Small-form integers carry no
/// declared width and replay as int64.
pub(crate) fn read_value_ref<'a>(
    bytes: &mut Bytes,
    scratch: &'a mut String,
) -> Result<ValueRef<'a>, Error> {
    let marker = bytes.read_u8()?;
    if marker <= SMALL_INT_MAX {
        return Ok(ValueRef::I64(marker as i64));
    }
    if marker >= TEXT_BASE {
        let len = (marker - TEXT_BASE) as usize;
        copy_utf8(bytes, len, scratch)?;
        return Ok(ValueRef::Text(scratch));
    }
    if marker >= FIELD_NAME_BASE {
        return Err(Error::malformed_stream(format!(
            "field key marker 0x{marker:02X} where a value was expected"
        )));
    }
    match WireCode::try_from(marker) {
        Ok(WireCode::Int8) => Ok(ValueRef::I8(bytes.read_i8()?)),
        Ok(WireCode::Int16) => Ok(ValueRef::I16(bytes.read_i16()?)),
        Ok(WireCode::Int32) => Ok(ValueRef::I32(bytes.read_i32()?)),
        Ok(WireCode::Int64) => Ok(ValueRef::I64(bytes.read_i64()?)),
        Ok(WireCode::Uint8) => Ok(ValueRef::U8(bytes.read_u8()?)),
        Ok(WireCode::Uint16) => Ok(ValueRef::U16(bytes.read_u16()?)),
        Ok(WireCode::Uint32) => Ok(ValueRef::U32(bytes.read_u32()?)),
        Ok(WireCode::Float64) => Ok(ValueRef::F64(bytes.read_f64()?)),
        Ok(WireCode::TextLong) => {
            let len = bytes.read_varuint32()? as usize;
            copy_utf8(bytes, len, scratch)?;
            Ok(ValueRef::Text(scratch))
        }
        Ok(WireCode::TypeName) => {
            let len = bytes.read_varuint32()? as usize;
            copy_utf8(bytes, len, scratch)?;
            Ok(ValueRef::TypeName(scratch))
        }
        Ok(WireCode::NoValue) => Ok(ValueRef::NoValue),
        Ok(WireCode::FieldNameLong) | Ok(WireCode::FieldNumber) => Err(Error::malformed_stream(
            format!("field key marker 0x{marker:02X} where a value was expected"),
        )),
        Err(_) => Err(Error::malformed_stream(format!(
            "unrecognized marker byte 0x{marker:02X}"
        ))),
    }
}

/// Stores a decoded integer, range-checked against the sink's type.
pub(crate) fn store_int(slot: ValueSlot<'_>, v: i64) -> Result<(), Error> {
    fn overflow(kind: &str, v: i64) -> Error {
        Error::type_mismatch(format!("integer {v} does not fit {kind} sink"))
    }
    match slot {
        ValueSlot::I8(out) => *out = i8::try_from(v).map_err(|_| overflow("int8", v))?,
        ValueSlot::I16(out) => *out = i16::try_from(v).map_err(|_| overflow("int16", v))?,
        ValueSlot::I32(out) => *out = i32::try_from(v).map_err(|_| overflow("int32", v))?,
        ValueSlot::I64(out) => *out = v,
        ValueSlot::U8(out) => *out = u8::try_from(v).map_err(|_| overflow("uint8", v))?,
        ValueSlot::U16(out) => *out = u16::try_from(v).map_err(|_| overflow("uint16", v))?,
        ValueSlot::U32(out) => *out = u32::try_from(v).map_err(|_| overflow("uint32", v))?,
        other => {
            return Err(Error::type_mismatch(format!(
                "integer value read into {} sink",
                other.kind()
            )))
        }
    }
    Ok(())
}

fn store_text(bytes: &mut Bytes, len: usize, slot: ValueSlot<'_>) -> Result<(), Error> {
    let text = read_utf8(bytes, len)?;
    match slot {
        ValueSlot::Text(sink) => {
            sink.clear();
            sink.push_str(text);
            Ok(())
        }
        other => Err(Error::type_mismatch(format!(
            "text value read into {} sink",
            other.kind()
        ))),
    }
}

fn read_utf8(bytes: &mut Bytes, len: usize) -> Result<&str, Error> {
    let raw = bytes.read_bytes(len)?;
    std::str::from_utf8(raw).map_err(|_| Error::malformed_stream("invalid UTF-8 in text payload"))
}

fn copy_utf8(bytes: &mut Bytes, len: usize, scratch: &mut String) -> Result<(), Error> {
    let text = read_utf8(bytes, len)?;
    scratch.clear();
    scratch.push_str(text);
    Ok(())
}
