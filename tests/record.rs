//! Record-level behavior: a `TriState` field inside a serde record, with and
//! without the omit-on-zero policy.

use serde::{Deserialize, Serialize};
use tristate::TriState;

#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
/// A PATCH-style record: absent fields are dropped from output, explicit nulls
/// are kept. The plain `y` field is here to check the two policies coexist.
struct Patch {
    #[serde(default, skip_serializing_if = "TriState::is_zero")]
    x: TriState<String>,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    y: String,
}

#[derive(Serialize, Deserialize, Debug, PartialEq, Default)]
/// The same field with the omit policy off: every state encodes something.
struct Plain {
    #[serde(default)]
    x: TriState<String>,
}

#[test]
fn decode_null_key() {
    let p: Patch = serde_json::from_str(r#"{"x":null}"#).unwrap();
    assert!(p.x.is_defined());
    assert!(p.x.is_null());
}

#[test]
fn decode_blank_key() {
    let p: Patch = serde_json::from_str(r#"{"x":""}"#).unwrap();
    assert!(p.x.is_defined());
    assert!(p.x.is_present());
    assert_eq!(p.x.value_or_zero(), "");
}

#[test]
fn decode_missing_key() {
    let p: Patch = serde_json::from_str("{}").unwrap();
    assert!(!p.x.is_defined());
    assert!(!p.x.is_present());
    assert!(p.x.is_zero());
}

#[test]
fn encode_value() {
    let p = Patch {
        x: TriState::from_value("foo".to_string()),
        ..Patch::default()
    };
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":"foo"}"#);
}

#[test]
fn encode_blank_value_is_not_omitted() {
    let p = Patch {
        x: TriState::new(String::new(), true),
        ..Patch::default()
    };
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":""}"#);
}

#[test]
fn encode_null_is_not_omitted() {
    let p = Patch {
        x: TriState::new(String::new(), false),
        y: "hi".to_string(),
    };
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"x":null,"y":"hi"}"#);
}

#[test]
fn encode_absent_is_omitted() {
    let p = Patch {
        y: "hello".to_string(),
        ..Patch::default()
    };
    assert_eq!(serde_json::to_string(&p).unwrap(), r#"{"y":"hello"}"#);
}

#[test]
fn omit_on_zero_scenario() {
    // from_option(None) is a deliberate null: kept in the output
    let cleared = Patch {
        x: TriState::from_option(None),
        ..Patch::default()
    };
    assert_eq!(serde_json::to_string(&cleared).unwrap(), r#"{"x":null}"#);

    // an untouched field is absent: dropped from the output
    let untouched = Patch::default();
    assert_eq!(serde_json::to_string(&untouched).unwrap(), "{}");

    // a blank value is a value: encoded as "", not omitted, not null
    let blanked = Patch {
        x: TriState::from_value(String::new()),
        ..Patch::default()
    };
    assert_eq!(serde_json::to_string(&blanked).unwrap(), r#"{"x":""}"#);
}

#[test]
fn null_round_trip_without_omit() {
    let dec: Plain = serde_json::from_str(r#"{"x":null}"#).unwrap();
    assert!(dec.x.is_null());
    assert_eq!(serde_json::to_string(&dec).unwrap(), r#"{"x":null}"#);

    // with the omit policy off, even an absent field encodes as null
    let absent = Plain::default();
    assert_eq!(serde_json::to_string(&absent).unwrap(), r#"{"x":null}"#);
}

#[test]
fn present_round_trip() {
    let orig = Plain {
        x: TriState::from_value("foo".to_string()),
    };
    let enc = serde_json::to_string(&orig).unwrap();
    assert_eq!(enc, r#"{"x":"foo"}"#);

    let dec: Plain = serde_json::from_str(&enc).unwrap();
    assert_eq!(dec, orig);
}

#[test]
fn malformed_field_fails_the_record() {
    let dec: Result<Patch, _> = serde_json::from_str(r#"{"x":3}"#);
    assert!(dec.is_err());
}
