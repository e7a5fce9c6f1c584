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

//! # Fieldwire
//!
//! Fieldwire is a self-describing record serialization codec for
//! low-latency messaging and persistence: typed field/value pairs become a
//! compact byte stream and back, with buffer reuse and optional in-place
//! mutability as first-order concerns, plus an equivalent human-readable
//! text rendering of the same logical data.
//!
//! ## Choosing a wire
//!
//! - [`BinaryWire`] — the production codec. Three independent flags on
//!   [`WireConfig`] select the session's behavior: `fixed_width` trades
//!   stream size for safe in-place rewrites, `numeric_fields_only` trades
//!   recoverable field names for shorter keys, `field_less` drops key
//!   framing entirely.
//! - [`RawWire`] — a pure positional value stream, lowest overhead,
//!   highest schema coupling.
//! - [`TextWire`] — the canonical text mirror, for debugging and for
//!   pinning codec semantics in tests via [`BinaryWire::copy_to`].
//!
//! ## Field addressing
//!
//! A field is written anonymously, by a [`WireKey`] identity (name plus
//! numeric code), or under an explicit per-record name. On read, a blank
//! key on either side matches anything: producers may write positional,
//! unlabelled records while consumers optionally validate against named
//! schemas — or skip validation entirely by reading blank.
//!
//! ```rust
//! use fieldwire::{BinaryWire, Bytes, Error, Wire, WireConfig, WireKey};
//!
//! const NAME: WireKey<'static> = WireKey::new("name", 1);
//! const RETRIES: WireKey<'static> = WireKey::new("retries", 2);
//!
//! # fn main() -> Result<(), Error> {
//! let mut bytes = Bytes::with_capacity(256);
//! let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
//!
//! wire.write_key(&NAME).text("engine-a");
//! wire.write_key(&RETRIES).uint8(3);
//! wire.flip();
//!
//! let mut name = String::new();
//! wire.read_key(&NAME)?.text(&mut name)?;
//! let retries = wire.read_key(&RETRIES)?.uint8()?;
//! assert_eq!((name.as_str(), retries), ("engine-a", 3));
//! # Ok(())
//! # }
//! ```

pub use fieldwire_core::buffer::Bytes;
pub use fieldwire_core::codec::{KeyQuery, KeyRef, ValueRef, ValueSlot, WireKey};
pub use fieldwire_core::config::WireConfig;
pub use fieldwire_core::error::Error;
pub use fieldwire_core::marshal::Marshallable;
pub use fieldwire_core::types::WireCode;
pub use fieldwire_core::wire::{BinaryWire, RawWire, TextWire, ValueIn, ValueOut, Wire};
