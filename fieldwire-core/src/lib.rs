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

//! # Fieldwire Core
//!
//! Core implementation of the fieldwire record codec: typed field/value
//! pairs encoded into a compact, self-describing byte stream and back,
//! with an equivalent human-readable text rendering of the same logical
//! data for debugging and cross-format verification.
//!
//! ## Architecture
//!
//! - **`buffer`**: the growable byte cursor with independent read/write
//!   positions, reused across cycles via `clear`/`flip`
//! - **`types`**: the closed set of marker bytes that make the stream
//!   self-describing
//! - **`codec`**: value framing and field key framing over the cursor
//! - **`wire`**: the `Wire` sessions — binary, raw (positional, no key
//!   framing), and the text mirror
//! - **`config`**: the immutable per-session flag triple
//! - **`marshal`**: the contract application value objects implement
//! - **`error`**: error handling
//!
//! ## Encoding disciplines
//!
//! A session is either *compact* — every value takes its shortest
//! representation — or *fixed-width* — every value of a declared type takes
//! the same number of bytes regardless of magnitude, so a same-type
//! rewrite of a previously written field never shifts the stream. The
//! discipline is chosen at wire construction and never varies within a
//! session.
//!
//! ## Usage
//!
//! This crate is typically used through the `fieldwire` facade crate.
//!
//! ```rust
//! use fieldwire_core::buffer::Bytes;
//! use fieldwire_core::codec::WireKey;
//! use fieldwire_core::config::WireConfig;
//! use fieldwire_core::error::Error;
//! use fieldwire_core::wire::{BinaryWire, Wire};
//!
//! const FIELD1: WireKey<'static> = WireKey::new("field1", 1);
//!
//! # fn main() -> Result<(), Error> {
//! let mut bytes = Bytes::new();
//! let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
//! wire.write_key(&FIELD1).int32(42);
//! wire.flip();
//! assert_eq!(wire.read_key(&FIELD1)?.int32()?, 42);
//! # Ok(())
//! # }
//! ```

pub mod buffer;
pub mod codec;
pub mod config;
pub mod error;
pub mod marshal;
pub mod types;
pub mod wire;
