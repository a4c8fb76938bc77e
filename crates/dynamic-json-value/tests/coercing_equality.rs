use dynamic_json_value::{deep_equal, JsonValue};
use serde_json::json;

fn lit(value: serde_json::Value) -> JsonValue {
    JsonValue::from_literal(value)
}

#[test]
fn test_integer_and_boolean() {
    assert!(JsonValue::Integer(1).seems_equal(&JsonValue::Boolean(true)));
    assert!(JsonValue::Integer(0).seems_equal(&JsonValue::Boolean(false)));
    assert!(!JsonValue::Integer(0).seems_equal(&JsonValue::Boolean(true)));
    assert_ne!(JsonValue::Integer(1), JsonValue::Boolean(true));
}

#[test]
fn test_string_and_integer() {
    assert!(JsonValue::from("5").seems_equal(&JsonValue::Integer(5)));
    assert!(!JsonValue::from("5.0").seems_equal(&JsonValue::Integer(5)));
    assert!(!JsonValue::from(" 5").seems_equal(&JsonValue::Integer(5)));
}

#[test]
fn test_seems_equal_is_symmetric_on_scalars() {
    let pairs = [
        (JsonValue::Integer(2), JsonValue::Float(2.0)),
        (JsonValue::Integer(2), JsonValue::from("2")),
        (JsonValue::Integer(1), JsonValue::Boolean(true)),
        (JsonValue::from("x"), JsonValue::from("y")),
        (JsonValue::Null, JsonValue::Boolean(false)),
    ];
    for (a, b) in &pairs {
        assert_eq!(a.seems_equal(b), b.seems_equal(a), "{a} vs {b}");
    }
}

#[test]
fn test_strict_equality_implies_seems_equal() {
    let docs = [
        lit(json!({"a": [1, 2.5, "x", null, {"b": false}]})),
        lit(json!([])),
        lit(json!("text")),
        JsonValue::Null,
    ];
    for doc in &docs {
        assert!(deep_equal(doc, doc));
        assert!(doc.seems_equal(doc));
        assert!(doc.almost_equal(doc, 0.0));
    }
}

#[test]
fn test_nested_documents() {
    let stored = lit(json!({"user": {"id": "42", "active": 1, "score": 9}}));
    let wanted = lit(json!({"user": {"id": 42, "active": true, "score": 9.0}}));
    assert!(stored.seems_equal(&wanted));
    assert!(stored != wanted);

    let other = lit(json!({"user": {"id": 43, "active": true, "score": 9.0}}));
    assert!(!stored.seems_equal(&other));
}

#[test]
fn test_arrays_compare_lengths() {
    assert!(!lit(json!([1, 2])).seems_equal(&lit(json!([1, 3]))));
    assert!(!lit(json!([1])).seems_equal(&lit(json!([1, 1]))));
    assert!(!lit(json!([1, 2])).seems_equal(&lit(json!([1, 2, 3]))));
    assert!(!lit(json!([1, 2, 3])).almost_equal(&lit(json!([1, 2])), 10.0));
    assert!(lit(json!([1, "2"])).seems_equal(&lit(json!([true, 2]))));
}

#[test]
fn test_almost_equal_delta() {
    let reading = lit(json!({"t": 21.49}));
    assert!(reading.almost_equal(&lit(json!({"t": 21.5})), 0.05));
    assert!(!reading.almost_equal(&lit(json!({"t": 21.6})), 0.05));
    assert!(reading.almost_equal(&lit(json!({"t": 21})), 0.5));
}
