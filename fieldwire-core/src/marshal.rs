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

use crate::error::Error;
use crate::wire::Wire;

/// The contract between an application value type and a wire.
///
/// `write_fields` pushes the value's fields in its canonical order;
/// `read_fields` performs the symmetric reads in the same order. Field
/// order is the type's contract with itself — the codec neither reorders
/// nor validates it beyond the key-matching rules, so a reader is free to
/// use blank reads, expected-key reads, or a mix.
pub trait Marshallable {
    fn write_fields<W: Wire>(&self, wire: &mut W);

    fn read_fields<W: Wire>(&mut self, wire: &mut W) -> Result<(), Error>;
}
