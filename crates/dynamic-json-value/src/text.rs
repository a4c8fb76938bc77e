//! Text encoding/decoding and the bridge to `serde_json`.
//!
//! Decoding is permissive: malformed input produces [`JsonValue::Null`]
//! instead of an error. Encoding only accepts object roots; every other root
//! produces `None`.

use std::fmt;

use serde::de::DeserializeOwned;
use serde::ser::{SerializeMap, SerializeSeq};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Number, Value};
use tracing::debug;

use crate::value::JsonValue;

impl JsonValue {
    /// Parse UTF-8 JSON text. Malformed input yields `Null`.
    ///
    /// # Example
    ///
    /// ```
    /// use dynamic_json_value::JsonValue;
    ///
    /// let value = JsonValue::from_text(r#"{"a": [1, 2.5, "x"]}"#);
    /// assert_eq!(value.get("a").and_then(|a| a.get_index(1)), Some(&JsonValue::Float(2.5)));
    ///
    /// assert!(JsonValue::from_text("{not json").is_null());
    /// ```
    pub fn from_text(text: impl AsRef<[u8]>) -> Self {
        match serde_json::from_slice::<JsonValue>(text.as_ref()) {
            Ok(value) => value,
            Err(err) => {
                debug!(error = %err, "malformed JSON text decoded as null");
                JsonValue::Null
            }
        }
    }

    /// Build a value from a `serde_json::json!` literal without a text round trip.
    pub fn from_literal(literal: Value) -> Self {
        JsonValue::from(literal)
    }

    /// Encode a statically typed record. `None` if the record does not map to JSON.
    pub fn from_serializable<T: Serialize + ?Sized>(record: &T) -> Option<Self> {
        match serde_json::to_value(record) {
            Ok(value) => Some(JsonValue::from(value)),
            Err(err) => {
                debug!(error = %err, "record could not be encoded as JSON");
                None
            }
        }
    }

    /// Pretty-printed JSON text.
    ///
    /// Only object roots are encoded. Arrays, scalars and `Null` yield
    /// `None`, as does any object holding a non-finite float.
    pub fn to_text(&self) -> Option<String> {
        self.encodable_root()?;
        serde_json::to_string_pretty(self).ok()
    }

    /// Same as [`JsonValue::to_text`], without whitespace.
    pub fn to_text_compact(&self) -> Option<String> {
        self.encodable_root()?;
        serde_json::to_string(self).ok()
    }

    /// Pretty-printed UTF-8 bytes, with the same root policy as [`JsonValue::to_text`].
    pub fn to_bytes(&self) -> Option<Vec<u8>> {
        self.to_text().map(String::into_bytes)
    }

    /// Decode into a statically typed record by way of [`JsonValue::to_text`].
    ///
    /// Yields `None` when the value cannot be encoded or the record does not
    /// match its shape.
    pub fn decode_as<T: DeserializeOwned>(&self) -> Option<T> {
        let text = self.to_text()?;
        match serde_json::from_str(&text) {
            Ok(record) => Some(record),
            Err(err) => {
                debug!(error = %err, "JSON value does not match the requested record");
                None
            }
        }
    }

    fn encodable_root(&self) -> Option<()> {
        if !self.is_object() {
            debug!(kind = %self.kind(), "refusing to encode a non-object root");
            return None;
        }
        if !self.is_finite() {
            debug!("refusing to encode a document holding a non-finite float");
            return None;
        }
        Some(())
    }

    fn is_finite(&self) -> bool {
        match self {
            JsonValue::Float(n) => n.is_finite(),
            JsonValue::Array(items) => items.iter().all(JsonValue::is_finite),
            JsonValue::Object(map) => map.values().all(JsonValue::is_finite),
            _ => true,
        }
    }
}

impl From<Value> for JsonValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => JsonValue::Null,
            Value::Bool(b) => JsonValue::Boolean(b),
            Value::Number(n) => match n.as_i64() {
                Some(i) => JsonValue::Integer(i),
                None => n.as_f64().map_or(JsonValue::Null, JsonValue::Float),
            },
            Value::String(s) => JsonValue::String(s),
            Value::Array(items) => JsonValue::Array(items.into_iter().map(JsonValue::from).collect()),
            Value::Object(map) => JsonValue::Object(
                map.into_iter()
                    .map(|(k, v)| (k, JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<&JsonValue> for Value {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Integer(n) => Value::Number(Number::from(*n)),
            // Non-finite floats have no JSON spelling.
            JsonValue::Float(n) => Number::from_f64(*n).map_or(Value::Null, Value::Number),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Boolean(b) => Value::Bool(*b),
            JsonValue::Array(items) => Value::Array(items.iter().map(Value::from).collect()),
            JsonValue::Object(map) => Value::Object(
                map.iter()
                    .map(|(k, v)| (k.clone(), Value::from(v)))
                    .collect(),
            ),
            JsonValue::Null => Value::Null,
        }
    }
}

impl From<JsonValue> for Value {
    fn from(value: JsonValue) -> Self {
        Value::from(&value)
    }
}

impl Serialize for JsonValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            JsonValue::Integer(n) => serializer.serialize_i64(*n),
            JsonValue::Float(n) => serializer.serialize_f64(*n),
            JsonValue::String(s) => serializer.serialize_str(s),
            JsonValue::Boolean(b) => serializer.serialize_bool(*b),
            JsonValue::Array(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            JsonValue::Object(map) => {
                let mut members = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    members.serialize_entry(key, value)?;
                }
                members.end()
            }
            JsonValue::Null => serializer.serialize_unit(),
        }
    }
}

impl<'de> Deserialize<'de> for JsonValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(JsonValue::from)
    }
}

/// Compact JSON. Unlike [`JsonValue::to_text`] this renders every root.
impl fmt::Display for JsonValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = serde_json::to_string(self).map_err(|_| fmt::Error)?;
        f.write_str(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, PartialEq, serde::Deserialize, serde::Serialize)]
    struct Person {
        name: String,
        age: u32,
    }

    #[test]
    fn test_from_text_kinds() {
        let value = JsonValue::from_text(r#"{"i": 1, "f": 1.0, "s": "x", "b": true, "n": null, "a": [], "o": {}}"#);
        assert_eq!(value.get("i"), Some(&JsonValue::Integer(1)));
        assert_eq!(value.get("f"), Some(&JsonValue::Float(1.0)));
        assert_eq!(value.get("s"), Some(&JsonValue::from("x")));
        assert_eq!(value.get("b"), Some(&JsonValue::Boolean(true)));
        assert_eq!(value.get("n"), Some(&JsonValue::Null));
        assert_eq!(value.get("a"), Some(&JsonValue::Array(vec![])));
        assert!(value.get("o").is_some_and(JsonValue::is_empty_object));
    }

    #[test]
    fn test_from_text_malformed_is_null() {
        assert!(JsonValue::from_text("").is_null());
        assert!(JsonValue::from_text("{\"a\": }").is_null());
        assert!(JsonValue::from_text([0xff_u8, 0xfe]).is_null());
    }

    #[test]
    fn test_from_text_scalar_root() {
        assert_eq!(JsonValue::from_text("42"), JsonValue::Integer(42));
        assert_eq!(JsonValue::from_text("[1]"), JsonValue::from(vec![1]));
    }

    #[test]
    fn test_to_text_object_root_only() {
        let object = JsonValue::from_literal(json!({"a": 1}));
        assert!(object.to_text().is_some());
        assert_eq!(object.to_text_compact().as_deref(), Some(r#"{"a":1}"#));

        assert_eq!(JsonValue::from_literal(json!([1, 2])).to_text(), None);
        assert_eq!(JsonValue::from(1).to_text(), None);
        assert_eq!(JsonValue::Null.to_text(), None);
        assert_eq!(JsonValue::from("x").to_bytes(), None);
    }

    #[test]
    fn test_to_text_keeps_null_members() {
        let object = JsonValue::from_literal(json!({"a": null}));
        let text = object.to_text().unwrap();
        assert_eq!(JsonValue::from_text(&text), object);
    }

    #[test]
    fn test_to_text_rejects_non_finite() {
        let object: JsonValue = [("x", f64::NAN)].into_iter().collect();
        assert_eq!(object.to_text(), None);
    }

    #[test]
    fn test_to_text_preserves_member_order() {
        let object = JsonValue::from_text(r#"{"z": 1, "a": 2}"#);
        assert_eq!(object.to_text_compact().as_deref(), Some(r#"{"z":1,"a":2}"#));
    }

    #[test]
    fn test_decode_as_record() {
        let value = JsonValue::from_literal(json!({"name": "Mom", "age": 50}));
        let person: Option<Person> = value.decode_as();
        assert_eq!(
            person,
            Some(Person {
                name: "Mom".to_string(),
                age: 50
            })
        );

        let wrong = JsonValue::from_literal(json!({"name": 1}));
        assert_eq!(wrong.decode_as::<Person>(), None);

        let array = JsonValue::from_literal(json!([{"name": "Mom", "age": 50}]));
        assert_eq!(array.decode_as::<Vec<Person>>(), None);
    }

    #[test]
    fn test_from_serializable() {
        let person = Person {
            name: "Dad".to_string(),
            age: 60,
        };
        let value = JsonValue::from_serializable(&person).unwrap();
        assert_eq!(value.get("age"), Some(&JsonValue::Integer(60)));
    }

    #[test]
    fn test_serde_value_bridge() {
        let literal = json!({"a": [1, 2.5, null, true, "s"]});
        let value = JsonValue::from(literal.clone());
        assert_eq!(Value::from(&value), literal);

        let nan = JsonValue::Float(f64::NAN);
        assert_eq!(Value::from(nan), Value::Null);
    }

    #[test]
    fn test_large_unsigned_becomes_float() {
        let value = JsonValue::from_text(u64::MAX.to_string());
        assert_eq!(value.kind(), crate::JsonKind::Float);
    }

    #[test]
    fn test_display_is_compact_for_any_root() {
        assert_eq!(JsonValue::from(vec![1, 2]).to_string(), "[1,2]");
        assert_eq!(JsonValue::Null.to_string(), "null");
        assert_eq!(JsonValue::from("q").to_string(), "\"q\"");
    }
}
