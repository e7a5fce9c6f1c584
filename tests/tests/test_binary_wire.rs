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

use fieldwire::{BinaryWire, Bytes, Error, Wire, WireConfig, WireKey};

const FIELD1: WireKey<'static> = WireKey::new("field1", 1);
const FIELD2: WireKey<'static> = WireKey::new("field2", 2);
const FIELD3: WireKey<'static> = WireKey::new("field3", 3);

fn configs() -> Vec<WireConfig> {
    vec![
        WireConfig::new(),
        WireConfig::new().fixed_width(true),
        WireConfig::new().numeric_fields_only(true),
        WireConfig::new().fixed_width(true).numeric_fields_only(true),
        WireConfig::new().field_less(true),
        WireConfig::new().field_less(true).fixed_width(true),
    ]
}

macro_rules! scalar_wire_test {
    ($name:ident, $method:ident, $ty:ty) => {
        #[test]
        fn $name() {
            for config in configs() {
                let mut bytes = Bytes::with_capacity(256);
                let mut wire = BinaryWire::new(&mut bytes, config);
                wire.write().$method(1 as $ty);
                wire.write_key(&FIELD1).$method(2 as $ty);
                wire.write_named("Test").$method(3 as $ty);
                wire.flip();
                for expected in 1..=3 {
                    assert_eq!(wire.read().unwrap().$method().unwrap(), expected as $ty);
                }
                assert_eq!(wire.remaining(), 0);
                // safe to read too much
                wire.read().unwrap();
            }
        }
    };
}

scalar_wire_test!(int8, int8, i8);
scalar_wire_test!(int16, int16, i16);
scalar_wire_test!(int32, int32, i32);
scalar_wire_test!(int64, int64, i64);
scalar_wire_test!(uint8, uint8, u8);
scalar_wire_test!(uint16, uint16, u16);
scalar_wire_test!(uint32, uint32, u32);
scalar_wire_test!(float64, float64, f64);

#[test]
fn int64_boundary_round_trip() {
    let values = [
        0i64,
        1,
        -1,
        127,
        128,
        -128,
        -129,
        i16::MAX as i64,
        i16::MIN as i64,
        i32::MAX as i64,
        i32::MIN as i64,
        i64::MAX,
        i64::MIN,
    ];
    for config in configs() {
        let mut bytes = Bytes::with_capacity(256);
        let mut wire = BinaryWire::new(&mut bytes, config);
        for &v in &values {
            wire.clear();
            wire.write().int64(v);
            wire.flip();
            assert_eq!(wire.read().unwrap().int64().unwrap(), v);
            assert_eq!(wire.remaining(), 0);
        }
    }
}

#[test]
fn unsigned_boundary_round_trip() {
    for config in configs() {
        let mut bytes = Bytes::with_capacity(256);
        let mut wire = BinaryWire::new(&mut bytes, config);
        for v in [0u32, 1, 127, 128, 255, 256, 65_535, 65_536, u32::MAX] {
            wire.clear();
            wire.write().uint32(v);
            wire.flip();
            assert_eq!(wire.read().unwrap().uint32().unwrap(), v);
        }
        for v in [0u8, 1, 127, 128, u8::MAX] {
            wire.clear();
            wire.write().uint8(v);
            wire.flip();
            assert_eq!(wire.read().unwrap().uint8().unwrap(), v);
        }
    }
}

#[test]
fn float64_boundary_round_trip() {
    let values = [
        0.0f64,
        1.0,
        -2.5,
        f64::MIN_POSITIVE,
        f64::MAX,
        f64::MIN,
        f64::INFINITY,
    ];
    for config in configs() {
        let mut bytes = Bytes::with_capacity(256);
        let mut wire = BinaryWire::new(&mut bytes, config);
        for &v in &values {
            wire.clear();
            wire.write().float64(v);
            wire.flip();
            assert_eq!(wire.read().unwrap().float64().unwrap(), v);
        }
    }
}

#[test]
fn text_round_trip() {
    let values = [
        String::new(),
        "Hello".to_string(),
        "x".repeat(31), // longest short form
        "x".repeat(32), // one byte over, long form
        "x".repeat(56),
        "héllo wörld ✓".to_string(),
    ];
    for config in configs() {
        let mut bytes = Bytes::with_capacity(256);
        let mut wire = BinaryWire::new(&mut bytes, config);
        let mut sink = String::new();
        for v in &values {
            wire.clear();
            wire.write().text(v);
            wire.flip();
            wire.read().unwrap().text(&mut sink).unwrap();
            assert_eq!(&sink, v);
            assert_eq!(wire.remaining(), 0);
        }
    }
}

#[test]
fn type_name_round_trip() {
    let long = "com.example.deeply.nested.package.WithAVeryLongTypeNameIndeed".repeat(2);
    for config in configs() {
        let mut bytes = Bytes::with_capacity(512);
        let mut wire = BinaryWire::new(&mut bytes, config);
        wire.write().type_name("MyType");
        wire.write_key(&FIELD1).type_name("AlsoMyType");
        wire.write_named("Test").type_name(&long);
        wire.flip();
        let mut sink = String::new();
        for expected in ["MyType", "AlsoMyType", long.as_str()] {
            wire.read().unwrap().type_name(&mut sink).unwrap();
            assert_eq!(sink, expected);
        }
        assert_eq!(wire.remaining(), 0);
    }
}

#[test]
fn key_only_fields() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write();
    wire.write();
    wire.write();
    wire.flip();
    // one blank marker per field
    assert_eq!(wire.remaining(), 3);
    wire.read().unwrap();
    wire.read().unwrap();
    wire.read().unwrap();
    assert_eq!(wire.remaining(), 0);
    // safe to read too much
    wire.read().unwrap();
}

#[test]
fn named_keys_shrink_to_codes_in_numeric_mode() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write_key(&FIELD1);
    wire.write_key(&FIELD2);
    wire.write_key(&FIELD3);
    let named_len = wire.bytes().write_position();

    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new().numeric_fields_only(true));
    wire.write_key(&FIELD1);
    wire.write_key(&FIELD2);
    wire.write_key(&FIELD3);
    let numeric_len = wire.bytes().write_position();

    // marker + 6 name bytes each, versus marker + 1 code byte each
    assert_eq!(named_len, 21);
    assert_eq!(numeric_len, 6);
}

#[test]
fn blank_key_matches_any_expected_key() {
    for config in [
        WireConfig::new(),
        WireConfig::new().numeric_fields_only(true),
    ] {
        let mut bytes = Bytes::with_capacity(64);
        let mut wire = BinaryWire::new(&mut bytes, config);
        wire.write().int8(42);
        wire.flip();
        assert_eq!(wire.read_key(&FIELD3).unwrap().int8().unwrap(), 42);
    }
}

#[test]
fn mismatching_key_fails_then_recovers_blank() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write();
    wire.write_key(&FIELD1);
    wire.write_named("Test");
    wire.flip();

    // blank matches anything, then field1 matches itself
    wire.read_key(&FIELD1).unwrap();
    wire.read_key(&FIELD1).unwrap();
    // "Test" is not field1
    let err = wire.read_key(&FIELD1).unwrap_err();
    assert!(matches!(err, Error::FieldMismatch(_)));
    // the offending key was consumed; the fallback read is a safe no-op
    assert_eq!(wire.remaining(), 0);
    wire.read().unwrap();
}

#[test]
fn mismatch_recovery_resumes_at_the_value() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write_key(&FIELD1).int8(1);
    wire.write_key(&FIELD2).int8(2);
    wire.flip();

    let err = wire.read_key(&FIELD2).unwrap_err();
    assert!(matches!(err, Error::FieldMismatch(_)));
    // field1's key is gone but its value is still there
    assert_eq!(wire.read().unwrap().int8().unwrap(), 1);
    assert_eq!(wire.read_key(&FIELD2).unwrap().int8().unwrap(), 2);
    assert_eq!(wire.remaining(), 0);
}

#[test]
fn capturing_read_does_not_validate() {
    let mut bytes = Bytes::with_capacity(128);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    let long_name = "Long field name which runs well past the short form, Bye";
    wire.write();
    wire.write_key(&FIELD1);
    wire.write_named(long_name);
    wire.flip();

    let mut name = String::new();
    wire.read_into(&mut name).unwrap();
    assert_eq!(name, "");
    wire.read_into(&mut name).unwrap();
    assert_eq!(name, "field1");
    wire.read_into(&mut name).unwrap();
    assert_eq!(name, long_name);
    assert_eq!(wire.remaining(), 0);
}

#[test]
fn numeric_mode_capture_is_lossy() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new().numeric_fields_only(true));
    wire.write_key(&FIELD1).int8(7);
    wire.flip();

    let mut name = String::from("stale");
    let value = wire.read_into(&mut name).unwrap().int8().unwrap();
    // the stream carries only the code; the name is not recoverable
    assert_eq!(name, "");
    assert_eq!(value, 7);
}

#[test]
fn explicit_name_survives_numeric_mode() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new().numeric_fields_only(true));
    wire.write_named("Test").int8(9);
    wire.flip();

    let mut name = String::new();
    assert_eq!(wire.read_into(&mut name).unwrap().int8().unwrap(), 9);
    assert_eq!(name, "Test");
}

#[test]
fn over_read_leaves_sinks_untouched() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write_key(&FIELD1).int8(1);
    wire.flip();
    assert_eq!(wire.read().unwrap().int8().unwrap(), 1);
    assert_eq!(wire.remaining(), 0);

    let mut name = String::from("untouched");
    let mut text = String::from("untouched");
    wire.read_into(&mut name).unwrap().text(&mut text).unwrap();
    assert_eq!(name, "untouched");
    assert_eq!(text, "untouched");
    assert_eq!(wire.remaining(), 0);
}

#[test]
fn explicit_no_value_reads_as_default() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write_key(&FIELD1).none();
    wire.write_key(&FIELD2).int8(5);
    wire.flip();
    assert_eq!(wire.read_key(&FIELD1).unwrap().int8().unwrap(), 0);
    assert_eq!(wire.read_key(&FIELD2).unwrap().int8().unwrap(), 5);
    assert_eq!(wire.remaining(), 0);
}

#[test]
fn fixed_width_is_length_invariant_compact_is_not() {
    fn encoded_len(config: WireConfig, v: i32) -> usize {
        let mut bytes = Bytes::with_capacity(64);
        let mut wire = BinaryWire::new(&mut bytes, config.field_less(true));
        wire.write().int32(v);
        wire.bytes().write_position()
    }

    let fixed = WireConfig::new().fixed_width(true);
    assert_eq!(encoded_len(fixed, 1), encoded_len(fixed, i32::MAX));
    assert_eq!(encoded_len(fixed, 1), encoded_len(fixed, i32::MIN));

    let compact = WireConfig::new();
    assert!(encoded_len(compact, 1) < encoded_len(compact, i32::MAX));
}

#[test]
fn fixed_width_allows_in_place_patch() {
    let fixed = WireConfig::new().fixed_width(true);
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, fixed);
    wire.write_key(&FIELD1).int32(1);
    let field_len = wire.bytes().write_position();
    // marker + 4 payload bytes at the tail of the field
    let value_offset = field_len - 5;

    let mut patch = Bytes::with_capacity(8);
    BinaryWire::new(&mut patch, fixed.field_less(true))
        .write()
        .int32(900_000);
    assert_eq!(patch.write_position(), 5);

    wire.bytes().set_bytes(value_offset, patch.as_slice());
    wire.flip();
    assert_eq!(wire.read_key(&FIELD1).unwrap().int32().unwrap(), 900_000);
}

#[test]
fn field_less_stream_carries_no_key_bytes() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new().field_less(true));
    wire.write_key(&FIELD1).int8(1);
    // a single small-int byte, no key framing
    assert_eq!(wire.bytes().write_position(), 1);
    wire.flip();
    // expected-key reads are silently positional in a field-less session
    assert_eq!(wire.read_key(&FIELD2).unwrap().int8().unwrap(), 1);
}

#[test]
fn copy_to_replays_onto_another_discipline() {
    let mut src_bytes = Bytes::with_capacity(128);
    let mut src = BinaryWire::new(&mut src_bytes, WireConfig::new());
    src.write_key(&FIELD1).int32(100_000);
    src.write_key(&FIELD2).text("hi");
    src.write_named("Test").float64(2.5);
    src.flip();

    let mut dst_bytes = Bytes::with_capacity(128);
    let mut dst = BinaryWire::new(
        &mut dst_bytes,
        WireConfig::new().fixed_width(true).numeric_fields_only(true),
    );
    src.copy_to(&mut dst).unwrap();
    dst.flip();

    let mut sink = String::new();
    assert_eq!(dst.read_key(&FIELD1).unwrap().int32().unwrap(), 100_000);
    dst.read_key(&FIELD2).unwrap().text(&mut sink).unwrap();
    assert_eq!(sink, "hi");
    assert_eq!(dst.read_key(&FIELD3).unwrap().float64().unwrap(), 2.5);
    assert_eq!(dst.remaining(), 0);
}

#[test]
fn reading_text_as_integer_is_a_type_mismatch() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write().text("Hello");
    wire.flip();
    let err = wire.read().unwrap().int32().unwrap_err();
    assert!(matches!(err, Error::TypeMismatch(_)));
}

#[test]
fn narrowing_overflow_is_a_type_mismatch() {
    for config in [WireConfig::new(), WireConfig::new().fixed_width(true)] {
        let mut bytes = Bytes::with_capacity(64);
        let mut wire = BinaryWire::new(&mut bytes, config);
        wire.write().int16(300);
        wire.flip();
        let err = wire.read().unwrap().int8().unwrap_err();
        assert!(matches!(err, Error::TypeMismatch(_)));
    }
}

#[test]
fn widening_integer_reads_are_fine() {
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write().int8(-5);
    wire.write().uint16(40_000);
    wire.flip();
    assert_eq!(wire.read().unwrap().int64().unwrap(), -5);
    assert_eq!(wire.read().unwrap().int64().unwrap(), 40_000);
}

#[test]
fn unassigned_marker_is_malformed() {
    let mut bytes = Bytes::with_capacity(64);
    bytes.write_u8(0x90);
    bytes.flip();
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new().field_less(true));
    let err = wire.read().unwrap().int8().unwrap_err();
    assert!(matches!(err, Error::MalformedStream(_)));
}

#[test]
fn truncated_payload_is_malformed() {
    let mut bytes = Bytes::with_capacity(64);
    {
        let mut wire = BinaryWire::new(&mut bytes, WireConfig::new().field_less(true));
        wire.write().int64(1 << 40);
    }
    // chop the last payload byte off the readable region
    let full = bytes.as_slice().to_vec();
    let mut truncated = Bytes::with_capacity(64);
    truncated.write_bytes(&full[..full.len() - 1]);
    truncated.flip();
    let mut wire = BinaryWire::new(&mut truncated, WireConfig::new().field_less(true));
    let err = wire.read().unwrap().int64().unwrap_err();
    assert!(matches!(err, Error::MalformedStream(_)));
}

#[test]
fn compact_sequence_of_small_ints() {
    // three anonymous fields, values 1..3, then positional read-back
    let mut bytes = Bytes::with_capacity(64);
    let mut wire = BinaryWire::new(&mut bytes, WireConfig::new());
    wire.write().int8(1);
    wire.write().int8(2);
    wire.write().int8(3);
    wire.flip();
    for expected in 1..=3 {
        assert_eq!(wire.read().unwrap().int8().unwrap(), expected);
    }
    assert_eq!(wire.remaining(), 0);
}
