//! Equality and ordering for [`JsonValue`].
//!
//! Three flavours are provided:
//!
//! - strict structural equality (`==`), where tags must match and object
//!   member order is ignored;
//! - coercing equality ([`JsonValue::seems_equal`]), where some cross-kind
//!   scalar pairs compare equal after conversion;
//! - tolerant equality ([`JsonValue::almost_equal`]), coercing equality where
//!   comparisons involving a float succeed within a delta.

use std::cmp::Ordering;

use crate::value::{JsonMap, JsonValue};

/// Performs a deep equality check between two values.
///
/// Arrays compare element by element, objects compare by key regardless of
/// member order, and different tags are never equal.
///
/// ```
/// use dynamic_json_value::{deep_equal, JsonValue};
///
/// let a = JsonValue::from_text(r#"{"a": 1, "b": [1, 2]}"#);
/// let b = JsonValue::from_text(r#"{"b": [1, 2], "a": 1}"#);
/// let c = JsonValue::from_text(r#"{"a": 1, "b": [2, 1]}"#);
///
/// assert!(deep_equal(&a, &b));
/// assert!(!deep_equal(&a, &c));
/// ```
pub fn deep_equal(a: &JsonValue, b: &JsonValue) -> bool {
    match (a, b) {
        (JsonValue::Null, JsonValue::Null) => true,
        (JsonValue::Integer(a), JsonValue::Integer(b)) => a == b,
        (JsonValue::Float(a), JsonValue::Float(b)) => a == b,
        (JsonValue::String(a), JsonValue::String(b)) => a == b,
        (JsonValue::Boolean(a), JsonValue::Boolean(b)) => a == b,
        (JsonValue::Array(a), JsonValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| deep_equal(a, b))
        }
        (JsonValue::Object(a), JsonValue::Object(b)) => members_equal(a, b, deep_equal),
        _ => false,
    }
}

fn members_equal(
    a: &JsonMap,
    b: &JsonMap,
    eq: impl Fn(&JsonValue, &JsonValue) -> bool,
) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.iter()
        .all(|(key, value)| b.get(key).is_some_and(|other| eq(value, other)))
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        deep_equal(self, other)
    }
}

impl JsonValue {
    /// Coercing equality.
    ///
    /// Besides strict equality, the following cross-kind pairs are equal
    /// when their converted forms match:
    ///
    /// - `Integer` and `Float`, comparing the integer as a float;
    /// - `Integer` and `String`, comparing the integer's decimal spelling;
    /// - `Integer` and `Boolean`, with `true` as `1` and `false` as `0`.
    ///
    /// Arrays of the same length and objects with the same keys compare
    /// their elements coercingly. Arrays of different lengths are never
    /// equal, even when the shorter one is a coercing prefix of the other.
    ///
    /// ```
    /// use dynamic_json_value::JsonValue;
    ///
    /// assert!(JsonValue::Integer(1).seems_equal(&JsonValue::Boolean(true)));
    /// assert!(JsonValue::from("5").seems_equal(&JsonValue::Integer(5)));
    /// assert!(!JsonValue::from(vec![1, 2]).seems_equal(&JsonValue::from(vec![1, 3])));
    /// assert!(!JsonValue::from(vec![1, 2]).seems_equal(&JsonValue::from(vec![1, 2, 3])));
    /// ```
    pub fn seems_equal(&self, other: &JsonValue) -> bool {
        coerced_equal(self, other, &|a: f64, b: f64| a == b)
    }

    /// Coercing equality where any numeric pair involving a float is equal
    /// when the two numbers are at most `number_delta` apart.
    ///
    /// Integer pairs are still compared exactly.
    pub fn almost_equal(&self, other: &JsonValue, number_delta: f64) -> bool {
        let delta = number_delta.abs();
        coerced_equal(self, other, &|a: f64, b: f64| (a - b).abs() <= delta)
    }
}

#[allow(clippy::cast_precision_loss)]
fn coerced_equal(a: &JsonValue, b: &JsonValue, floats: &dyn Fn(f64, f64) -> bool) -> bool {
    match (a, b) {
        (JsonValue::Integer(a), JsonValue::Integer(b)) => a == b,
        (JsonValue::Float(a), JsonValue::Float(b)) => floats(*a, *b),
        (JsonValue::Integer(i), JsonValue::Float(f)) | (JsonValue::Float(f), JsonValue::Integer(i)) => {
            floats(*i as f64, *f)
        }
        (JsonValue::Integer(i), JsonValue::String(s)) | (JsonValue::String(s), JsonValue::Integer(i)) => {
            i.to_string() == *s
        }
        (JsonValue::Integer(i), JsonValue::Boolean(b)) | (JsonValue::Boolean(b), JsonValue::Integer(i)) => {
            *i == i64::from(*b)
        }
        (JsonValue::Array(a), JsonValue::Array(b)) => {
            a.len() == b.len() && a.iter().zip(b).all(|(a, b)| coerced_equal(a, b, floats))
        }
        (JsonValue::Object(a), JsonValue::Object(b)) => {
            members_equal(a, b, |a, b| coerced_equal(a, b, floats))
        }
        _ => deep_equal(a, b),
    }
}

/// Same-kind scalars order naturally (`false < true`). `Null` is only
/// comparable with `Null`, and arrays or objects only compare as `Equal`
/// when they are equal. Every other pair is unordered.
impl PartialOrd for JsonValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (JsonValue::Integer(a), JsonValue::Integer(b)) => a.partial_cmp(b),
            (JsonValue::Float(a), JsonValue::Float(b)) => a.partial_cmp(b),
            (JsonValue::String(a), JsonValue::String(b)) => a.partial_cmp(b),
            (JsonValue::Boolean(a), JsonValue::Boolean(b)) => a.partial_cmp(b),
            (JsonValue::Null, JsonValue::Null) => Some(Ordering::Equal),
            (JsonValue::Array(_), JsonValue::Array(_)) | (JsonValue::Object(_), JsonValue::Object(_))
                if self == other =>
            {
                Some(Ordering::Equal)
            }
            _ => None,
        }
    }
}

macro_rules! eq_integer {
    ($($ty:ty),+) => {
        $(
            impl PartialEq<$ty> for JsonValue {
                fn eq(&self, other: &$ty) -> bool {
                    self.as_integer() == Some(i64::from(*other))
                }
            }
        )+
    };
}

eq_integer!(i32, i64, u32);

impl PartialEq<f64> for JsonValue {
    fn eq(&self, other: &f64) -> bool {
        self.as_float() == Some(*other)
    }
}

impl PartialEq<bool> for JsonValue {
    fn eq(&self, other: &bool) -> bool {
        self.as_boolean() == Some(*other)
    }
}

impl PartialEq<str> for JsonValue {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == Some(other)
    }
}

impl PartialEq<&str> for JsonValue {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == Some(*other)
    }
}

impl PartialEq<String> for JsonValue {
    fn eq(&self, other: &String) -> bool {
        self.as_str() == Some(other.as_str())
    }
}
