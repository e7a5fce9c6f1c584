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

use fieldwire::{Bytes, RawWire, TextWire, Wire, WireKey};

const FIELD1: WireKey<'static> = WireKey::new("field1", 1);

#[test]
fn positional_round_trip() {
    for fixed in [false, true] {
        let mut bytes = Bytes::with_capacity(128);
        let mut wire = RawWire::new(&mut bytes, fixed);
        wire.write().int32(100_000);
        wire.write().text("Hello");
        wire.write().float64(2.5);
        wire.flip();

        let mut sink = String::new();
        assert_eq!(wire.read().unwrap().int32().unwrap(), 100_000);
        wire.read().unwrap().text(&mut sink).unwrap();
        assert_eq!(sink, "Hello");
        assert_eq!(wire.read().unwrap().float64().unwrap(), 2.5);
        assert_eq!(wire.remaining(), 0);
        // safe to read too much
        wire.read().unwrap();
    }
}

#[test]
fn keys_are_never_framed() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = RawWire::new(&mut bytes, false);
    wire.write_key(&FIELD1).int8(1);
    // one small-int byte and nothing else
    assert_eq!(wire.bytes().write_position(), 1);
    wire.flip();
    // an expected-key read degrades to a positional read
    assert_eq!(wire.read_key(&FIELD1).unwrap().int8().unwrap(), 1);
}

#[test]
fn captured_names_are_empty() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = RawWire::new(&mut bytes, false);
    wire.write_named("ignored").int8(4);
    wire.flip();

    let mut name = String::from("stale");
    assert_eq!(wire.read_into(&mut name).unwrap().int8().unwrap(), 4);
    assert_eq!(name, "");
}

#[test]
fn copy_to_text_renders_anonymous_fields() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = RawWire::new(&mut bytes, false);
    wire.write().int8(1);
    wire.write().text("Hello");
    wire.flip();

    let mut text_bytes = Bytes::with_capacity(128);
    let mut text = TextWire::new(&mut text_bytes);
    wire.copy_to(&mut text).unwrap();
    assert_eq!(text.as_text(), "\"\": 1\n\"\": Hello\n");
}
