//! Contract tests for the configuration interface and its example
//! implementations.
//!
//! The reusable mechanic mirrors the contract's guarantees: an instance
//! built from a mapping reports that exact mapping, each value serialized
//! individually matches the expected JSON, the full JSON dump matches, and
//! rebuilding from the instance's own mapping yields an equal mapping.

use chrono::{NaiveDate, NaiveDateTime};
use groundwork::errors::Error;
use groundwork::interface::{Configurable, SimpleCase, SimpleCaseWithSerializer};
use groundwork::value::{ConfigMap, Value};

fn new_year_2020() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2020, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Shared mechanic for any implementation: dict fidelity, per-value
/// serialization, JSON dump, and round-trip reconstruction.
fn check_implementation<T: Configurable>(dict: ConfigMap, json: &str) {
    let instance = T::from_dict(dict.clone()).unwrap();

    // Configuration returned as a dict equals the original.
    assert_eq!(instance.to_dict(), dict);

    // Each value run through the chain equals the expected JSON value.
    let reference: serde_json::Value = serde_json::from_str(json).unwrap();
    let serializer = instance.serializer();
    for (key, value) in &dict {
        assert_eq!(serializer.encode(value).unwrap(), reference[key]);
    }

    // Full JSON dump equals the expected document.
    let dumped: serde_json::Value = serde_json::from_str(&instance.to_json().unwrap()).unwrap();
    assert_eq!(dumped, reference);

    // A new instance created from the configuration reports the same one.
    let rebuilt = T::from_dict(instance.to_dict()).unwrap();
    assert_eq!(rebuilt.to_dict(), instance.to_dict());
}

#[test]
fn test_simple_case() {
    check_implementation::<SimpleCase>(
        ConfigMap::from([("value".to_string(), Value::from("Hello World!"))]),
        r#"{"value": "Hello World!"}"#,
    );
}

#[test]
fn test_simple_case_with_no_serializer() {
    let dict = ConfigMap::from([("value".to_string(), Value::from(new_year_2020()))]);
    let instance = SimpleCase::from_dict(dict.clone()).unwrap();

    // The mapping itself is fine; only the JSON dump fails.
    assert_eq!(instance.to_dict(), dict);
    assert_eq!(
        instance.to_json().unwrap_err(),
        Error::Encode { kind: "datetime" }
    );
}

#[test]
fn test_simple_case_with_serializer() {
    check_implementation::<SimpleCaseWithSerializer>(
        ConfigMap::from([("value".to_string(), Value::from(new_year_2020()))]),
        r#"{"value": "2020-01-01T00:00:00"}"#,
    );
}

#[test]
fn test_to_json_exact_text() {
    let case = SimpleCaseWithSerializer::new(new_year_2020());
    assert_eq!(
        case.to_json().unwrap(),
        r#"{"value":"2020-01-01T00:00:00"}"#
    );

    let case = SimpleCase::new("Hello World!");
    assert_eq!(case.to_json().unwrap(), r#"{"value":"Hello World!"}"#);
}

#[test]
fn test_round_trip_is_idempotent() {
    let case = SimpleCase::new(Value::Array(vec![
        Value::Null,
        Value::from(1i64),
        Value::from("two"),
    ]));

    let once = SimpleCase::from_dict(case.to_dict()).unwrap();
    let twice = SimpleCase::from_dict(once.to_dict()).unwrap();
    assert_eq!(once, case);
    assert_eq!(twice.to_dict(), case.to_dict());
}
