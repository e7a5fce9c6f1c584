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

//! Error types for wire encoding and decoding.
//!
//! Error constructors sit on the hot decode path, so they follow the same
//! discipline as successful reads: `#[cold]` constructors keep the error
//! branches out of the way of LLVM's optimization of the common case, and
//! `#[track_caller]` preserves the construction site for debugging.

use std::borrow::Cow;

use thiserror::Error;

/// Set `FIELDWIRE_PANIC_ON_ERROR=1` at compile time to panic at the exact
/// location an error is created, with a full backtrace.
pub const PANIC_ON_ERROR: bool = option_env!("FIELDWIRE_PANIC_ON_ERROR").is_some();

/// Error type for wire encode/decode operations.
///
/// Construct variants through the static constructor functions
/// ([`Error::malformed_stream`], [`Error::type_mismatch`],
/// [`Error::field_mismatch`]) rather than directly; the constructors apply
/// the `FIELDWIRE_PANIC_ON_ERROR` debugging switch and accept anything
/// convertible into a `Cow<'static, str>`.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// An unrecognized or structurally invalid marker byte was encountered.
    /// Decoding cannot continue at this stream position.
    #[error("malformed stream: {0}")]
    MalformedStream(Cow<'static, str>),

    /// A decode was requested for a kind incompatible with the marker
    /// actually present. The field's bytes remain consumed; the session
    /// should be treated as desynchronized unless the caller controls the
    /// exact layout.
    #[error("type mismatch: {0}")]
    TypeMismatch(Cow<'static, str>),

    /// An expected-key read found a different, non-blank key. Recoverable:
    /// the caller may fall back to a blank read, which resumes at the next
    /// unread byte.
    #[error("field mismatch: {0}")]
    FieldMismatch(Cow<'static, str>),
}

impl Error {
    /// Creates a new [`Error::MalformedStream`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn malformed_stream<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::MalformedStream(s.into());
        if PANIC_ON_ERROR {
            panic!("FIELDWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::TypeMismatch`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn type_mismatch<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::TypeMismatch(s.into());
        if PANIC_ON_ERROR {
            panic!("FIELDWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }

    /// Creates a new [`Error::FieldMismatch`].
    #[inline(always)]
    #[cold]
    #[track_caller]
    pub fn field_mismatch<S: Into<Cow<'static, str>>>(s: S) -> Self {
        let err = Error::FieldMismatch(s.into());
        if PANIC_ON_ERROR {
            panic!("FIELDWIRE_PANIC_ON_ERROR: {}", err);
        }
        err
    }
}
