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

//! Wire sessions: the fluent field-oriented read/write API shared by the
//! binary, raw, and text wires.
//!
//! A record is a plain concatenation of (key, value) pairs with no record
//! terminator; writing a field is one key emission followed by at most one
//! value emission, and reading mirrors that. The [`Wire`] trait carries the
//! four primitive operations each wire implements; everything an
//! application touches — [`Wire::write`], [`Wire::read_key`], the
//! [`ValueOut`]/[`ValueIn`] proxies — is provided on top of them.

pub mod binary;
pub mod raw;
pub mod text;

use crate::codec::{KeyQuery, KeyRef, ValueRef, ValueSlot, WireKey};
use crate::error::Error;
use crate::marshal::Marshallable;

pub use binary::BinaryWire;
pub use raw::RawWire;
pub use text::TextWire;

/// A configured codec session bound to one byte cursor.
///
/// Write-side operations are infallible (the cursor grows on demand); the
/// read side returns `Result`. Reading with zero bytes remaining is never
/// an error: key reads become no-ops and value reads leave every sink
/// untouched, so a reader may probe for optional trailing fields without
/// its own remaining-byte accounting.
pub trait Wire {
    /// Emits one field key. In a field-less session this writes nothing.
    fn emit_key(&mut self, key: KeyRef<'_>);

    /// Emits one value under the session's encoding discipline.
    fn emit_value(&mut self, value: ValueRef<'_>);

    /// Consumes one field key, resolving the caller's intent: blank read,
    /// name capture, or expected-key validation.
    fn consume_key(&mut self, query: KeyQuery<'_, '_>) -> Result<(), Error>;

    /// Consumes one value into caller-owned storage.
    fn consume_value(&mut self, slot: ValueSlot<'_>) -> Result<(), Error>;

    /// Readable bytes left in the bound cursor.
    fn remaining(&self) -> usize;

    /// Resets both cursor positions, discarding prior content.
    fn clear(&mut self);

    /// Ends the written region and rewinds the read cursor.
    fn flip(&mut self);

    /// Whether keys written by identity serialize as their numeric code.
    fn uses_numeric_keys(&self) -> bool {
        false
    }

    /// Writes a blank/anonymous field; the value read back under any
    /// expected key will match.
    fn write(&mut self) -> ValueOut<'_, Self>
    where
        Self: Sized,
    {
        self.emit_key(KeyRef::Anonymous);
        ValueOut { wire: self }
    }

    /// Writes a field under its declared identity: the numeric code when
    /// the session serializes keys numerically, the name otherwise.
    fn write_key<'w>(&'w mut self, key: &WireKey<'_>) -> ValueOut<'w, Self>
    where
        Self: Sized,
    {
        if self.uses_numeric_keys() {
            self.emit_key(KeyRef::Code(key.code()));
        } else {
            self.emit_key(KeyRef::Name(key.name()));
        }
        ValueOut { wire: self }
    }

    /// Writes a field under an explicit per-record name. The name is
    /// always serialized textually, even in a numeric-keys session.
    fn write_named<'w>(&'w mut self, name: &str) -> ValueOut<'w, Self>
    where
        Self: Sized,
    {
        self.emit_key(KeyRef::Name(name));
        ValueOut { wire: self }
    }

    /// Blank read: consumes whatever key is present without validating
    /// identity. Supports positional consumption when the caller already
    /// knows field order.
    fn read(&mut self) -> Result<ValueIn<'_, Self>, Error>
    where
        Self: Sized,
    {
        self.consume_key(KeyQuery::Any)?;
        Ok(ValueIn { wire: self })
    }

    /// Expected-key read: fails with [`Error::FieldMismatch`] unless the
    /// encountered key matches `expected` or is blank.
    fn read_key<'w>(&'w mut self, expected: &WireKey<'_>) -> Result<ValueIn<'w, Self>, Error>
    where
        Self: Sized,
    {
        self.consume_key(KeyQuery::Expect(expected))?;
        Ok(ValueIn { wire: self })
    }

    /// Capturing read: consumes the key and copies its textual name into
    /// `name`; numeric and anonymous keys yield an empty name.
    fn read_into<'w>(&'w mut self, name: &mut String) -> Result<ValueIn<'w, Self>, Error>
    where
        Self: Sized,
    {
        self.consume_key(KeyQuery::Capture(name))?;
        Ok(ValueIn { wire: self })
    }

    /// Writes an application value's fields in its canonical order.
    fn write_marshallable<M: Marshallable>(&mut self, value: &M)
    where
        Self: Sized,
    {
        value.write_fields(self);
    }

    /// Reads an application value's fields in its canonical order.
    fn read_marshallable<M: Marshallable>(&mut self, value: &mut M) -> Result<(), Error>
    where
        Self: Sized,
    {
        value.read_fields(self)
    }
}

/// Write-side proxy for the value of one field. Dropping it without
/// calling a value method leaves a key-only field.
pub struct ValueOut<'w, W: Wire> {
    wire: &'w mut W,
}

impl<W: Wire> ValueOut<'_, W> {
    pub fn int8(self, v: i8) {
        self.wire.emit_value(ValueRef::I8(v));
    }

    pub fn int16(self, v: i16) {
        self.wire.emit_value(ValueRef::I16(v));
    }

    pub fn int32(self, v: i32) {
        self.wire.emit_value(ValueRef::I32(v));
    }

    pub fn int64(self, v: i64) {
        self.wire.emit_value(ValueRef::I64(v));
    }

    pub fn uint8(self, v: u8) {
        self.wire.emit_value(ValueRef::U8(v));
    }

    pub fn uint16(self, v: u16) {
        self.wire.emit_value(ValueRef::U16(v));
    }

    pub fn uint32(self, v: u32) {
        self.wire.emit_value(ValueRef::U32(v));
    }

    pub fn float64(self, v: f64) {
        self.wire.emit_value(ValueRef::F64(v));
    }

    pub fn text(self, v: &str) {
        self.wire.emit_value(ValueRef::Text(v));
    }

    pub fn type_name(self, v: &str) {
        self.wire.emit_value(ValueRef::TypeName(v));
    }

    /// Writes the explicit no-value placeholder.
    pub fn none(self) {
        self.wire.emit_value(ValueRef::NoValue);
    }
}

/// Read-side proxy for the value of one field. Consuming it enforces at
/// most one value read per key read. Scalar accessors return the kind's
/// default when the cursor is exhausted (safe over-read).
pub struct ValueIn<'w, W: Wire> {
    wire: &'w mut W,
}

impl<W: Wire> core::fmt::Debug for ValueIn<'_, W> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ValueIn").finish_non_exhaustive()
    }
}

impl<W: Wire> ValueIn<'_, W> {
    pub fn int8(self) -> Result<i8, Error> {
        let mut v = 0;
        self.wire.consume_value(ValueSlot::I8(&mut v))?;
        Ok(v)
    }

    pub fn int16(self) -> Result<i16, Error> {
        let mut v = 0;
        self.wire.consume_value(ValueSlot::I16(&mut v))?;
        Ok(v)
    }

    pub fn int32(self) -> Result<i32, Error> {
        let mut v = 0;
        self.wire.consume_value(ValueSlot::I32(&mut v))?;
        Ok(v)
    }

    pub fn int64(self) -> Result<i64, Error> {
        let mut v = 0;
        self.wire.consume_value(ValueSlot::I64(&mut v))?;
        Ok(v)
    }

    pub fn uint8(self) -> Result<u8, Error> {
        let mut v = 0;
        self.wire.consume_value(ValueSlot::U8(&mut v))?;
        Ok(v)
    }

    pub fn uint16(self) -> Result<u16, Error> {
        let mut v = 0;
        self.wire.consume_value(ValueSlot::U16(&mut v))?;
        Ok(v)
    }

    pub fn uint32(self) -> Result<u32, Error> {
        let mut v = 0;
        self.wire.consume_value(ValueSlot::U32(&mut v))?;
        Ok(v)
    }

    pub fn float64(self) -> Result<f64, Error> {
        let mut v = 0.0;
        self.wire.consume_value(ValueSlot::F64(&mut v))?;
        Ok(v)
    }

    /// Decodes a text value into `sink`, clearing it first. The sink keeps
    /// its capacity across records.
    pub fn text(self, sink: &mut String) -> Result<(), Error> {
        self.wire.consume_value(ValueSlot::Text(sink))
    }

    /// Decodes a type name into `sink`, clearing it first.
    pub fn type_name(self, sink: &mut String) -> Result<(), Error> {
        self.wire.consume_value(ValueSlot::TypeName(sink))
    }
}
