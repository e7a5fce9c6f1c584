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

use byteorder::{ByteOrder, LittleEndian, WriteBytesExt};

use crate::error::Error;

/// A growable byte buffer with independent write and read cursors.
///
/// Writes always append at the write position (the end of the filled
/// region) and grow capacity as needed. Reads advance the read position,
/// bounded by the read limit established by [`Bytes::flip`]. A `Bytes`
/// instance is meant to be owned by the caller and reused across many
/// encode/decode cycles via [`Bytes::clear`] rather than reallocated.
///
/// All multi-byte values use little-endian byte order.
#[derive(Default)]
pub struct Bytes {
    bf: Vec<u8>,
    read_pos: usize,
    limit: usize,
}

impl Bytes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Bytes {
            bf: Vec::with_capacity(capacity),
            read_pos: 0,
            limit: 0,
        }
    }

    /// Discards all content and resets both cursors, keeping capacity.
    pub fn clear(&mut self) {
        self.bf.clear();
        self.read_pos = 0;
        self.limit = 0;
    }

    /// Sets the read limit to the current write position and rewinds the
    /// read cursor, switching the buffer from append mode to read mode.
    pub fn flip(&mut self) {
        self.limit = self.bf.len();
        self.read_pos = 0;
    }

    /// Readable bytes left before the read limit.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.limit - self.read_pos
    }

    #[inline]
    pub fn write_position(&self) -> usize {
        self.bf.len()
    }

    #[inline]
    pub fn read_position(&self) -> usize {
        self.read_pos
    }

    pub fn is_empty(&self) -> bool {
        self.bf.is_empty()
    }

    /// The whole filled region, independent of the read cursor.
    pub fn as_slice(&self) -> &[u8] {
        &self.bf
    }

    /// Overwrites previously written bytes in place. The target range must
    /// lie entirely within the filled region.
    ///
    /// # Panics
    ///
    /// Panics if `offset + data.len()` exceeds the write position.
    pub fn set_bytes(&mut self, offset: usize, data: &[u8]) {
        self.bf[offset..offset + data.len()].copy_from_slice(data);
    }

    pub fn write_bytes(&mut self, v: &[u8]) {
        self.bf.extend_from_slice(v);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.bf.write_u8(value).unwrap();
    }

    pub fn write_i8(&mut self, value: i8) {
        self.bf.write_i8(value).unwrap();
    }

    pub fn write_u16(&mut self, value: u16) {
        self.bf.write_u16::<LittleEndian>(value).unwrap();
    }

    pub fn write_i16(&mut self, value: i16) {
        self.bf.write_i16::<LittleEndian>(value).unwrap();
    }

    pub fn write_u32(&mut self, value: u32) {
        self.bf.write_u32::<LittleEndian>(value).unwrap();
    }

    pub fn write_i32(&mut self, value: i32) {
        self.bf.write_i32::<LittleEndian>(value).unwrap();
    }

    pub fn write_u64(&mut self, value: u64) {
        self.bf.write_u64::<LittleEndian>(value).unwrap();
    }

    pub fn write_i64(&mut self, value: i64) {
        self.bf.write_i64::<LittleEndian>(value).unwrap();
    }

    pub fn write_f64(&mut self, value: f64) {
        self.bf.write_f64::<LittleEndian>(value).unwrap();
    }

    /// Writes an unsigned 32-bit integer in LEB128 form, 1 to 5 bytes.
    pub fn write_varuint32(&mut self, value: u32) {
        if value < 0x80 {
            self.write_u8(value as u8);
        } else if value < 0x4000 {
            self.write_u8((value as u8 & 0x7F) | 0x80);
            self.write_u8((value >> 7) as u8);
        } else if value < 0x20_0000 {
            self.write_u8((value as u8 & 0x7F) | 0x80);
            self.write_u8(((value >> 7) as u8 & 0x7F) | 0x80);
            self.write_u8((value >> 14) as u8);
        } else if value < 0x1000_0000 {
            self.write_u8((value as u8 & 0x7F) | 0x80);
            self.write_u8(((value >> 7) as u8 & 0x7F) | 0x80);
            self.write_u8(((value >> 14) as u8 & 0x7F) | 0x80);
            self.write_u8((value >> 21) as u8);
        } else {
            self.write_u8((value as u8 & 0x7F) | 0x80);
            self.write_u8(((value >> 7) as u8 & 0x7F) | 0x80);
            self.write_u8(((value >> 14) as u8 & 0x7F) | 0x80);
            self.write_u8(((value >> 21) as u8 & 0x7F) | 0x80);
            self.write_u8((value >> 28) as u8);
        }
    }

    #[inline]
    fn ensure_readable(&self, needed: usize) -> Result<(), Error> {
        if self.read_pos + needed > self.limit {
            return Err(Error::malformed_stream(format!(
                "unexpected end of stream: need {} bytes, {} remaining",
                needed,
                self.remaining()
            )));
        }
        Ok(())
    }

    /// Returns the next byte without advancing the read cursor.
    pub fn peek_u8(&self) -> Result<u8, Error> {
        self.ensure_readable(1)?;
        Ok(self.bf[self.read_pos])
    }

    pub fn read_u8(&mut self) -> Result<u8, Error> {
        self.ensure_readable(1)?;
        let v = self.bf[self.read_pos];
        self.read_pos += 1;
        Ok(v)
    }

    pub fn read_i8(&mut self) -> Result<i8, Error> {
        Ok(self.read_u8()? as i8)
    }

    pub fn read_u16(&mut self) -> Result<u16, Error> {
        self.ensure_readable(2)?;
        let v = LittleEndian::read_u16(&self.bf[self.read_pos..]);
        self.read_pos += 2;
        Ok(v)
    }

    pub fn read_i16(&mut self) -> Result<i16, Error> {
        Ok(self.read_u16()? as i16)
    }

    pub fn read_u32(&mut self) -> Result<u32, Error> {
        self.ensure_readable(4)?;
        let v = LittleEndian::read_u32(&self.bf[self.read_pos..]);
        self.read_pos += 4;
        Ok(v)
    }

    pub fn read_i32(&mut self) -> Result<i32, Error> {
        Ok(self.read_u32()? as i32)
    }

    pub fn read_u64(&mut self) -> Result<u64, Error> {
        self.ensure_readable(8)?;
        let v = LittleEndian::read_u64(&self.bf[self.read_pos..]);
        self.read_pos += 8;
        Ok(v)
    }

    pub fn read_i64(&mut self) -> Result<i64, Error> {
        Ok(self.read_u64()? as i64)
    }

    pub fn read_f64(&mut self) -> Result<f64, Error> {
        self.ensure_readable(8)?;
        let v = LittleEndian::read_f64(&self.bf[self.read_pos..]);
        self.read_pos += 8;
        Ok(v)
    }

    pub fn read_bytes(&mut self, len: usize) -> Result<&[u8], Error> {
        self.ensure_readable(len)?;
        let s = &self.bf[self.read_pos..self.read_pos + len];
        self.read_pos += len;
        Ok(s)
    }

    pub fn read_varuint32(&mut self) -> Result<u32, Error> {
        let mut result = 0u32;
        let mut shift = 0;
        loop {
            let b = self.read_u8()?;
            result |= ((b & 0x7F) as u32) << shift;
            if b & 0x80 == 0 {
                return Ok(result);
            }
            shift += 7;
            if shift >= 35 {
                return Err(Error::malformed_stream("varuint32 longer than 5 bytes"));
            }
        }
    }
}
