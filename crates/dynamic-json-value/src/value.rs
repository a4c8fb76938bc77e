//! The JSON value model.

use std::fmt;

use indexmap::IndexMap;
use tracing::debug;

/// Members of a JSON object.
///
/// Keys are unique. Iteration follows insertion order, but equality does not
/// depend on it (see [`crate::equal`]).
pub type JsonMap = IndexMap<String, JsonValue>;

/// A JSON value.
///
/// A `JsonValue` is always built bottom-up, either from decoded text or by
/// composing smaller values, so it can never contain itself.
///
/// # Example
///
/// ```
/// use dynamic_json_value::{JsonMap, JsonValue};
///
/// let mut person = JsonMap::new();
/// person.insert("name".to_string(), JsonValue::from("Daniel"));
/// person.insert("age".to_string(), JsonValue::from(25));
/// let value = JsonValue::Object(person);
///
/// assert_eq!(value.get("age").and_then(JsonValue::as_integer), Some(25));
/// assert!(value.get("missing").is_none());
/// ```
#[derive(Debug, Clone, Default)]
pub enum JsonValue {
    Integer(i64),
    Float(f64),
    String(String),
    Boolean(bool),
    Array(Vec<JsonValue>),
    Object(JsonMap),
    #[default]
    Null,
}

/// The tag of a [`JsonValue`], without its payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JsonKind {
    Integer,
    Float,
    String,
    Boolean,
    Array,
    Object,
    Null,
}

impl JsonKind {
    pub fn describe(self) -> &'static str {
        match self {
            JsonKind::Integer => "integer",
            JsonKind::Float => "float",
            JsonKind::String => "string",
            JsonKind::Boolean => "boolean",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
            JsonKind::Null => "null",
        }
    }
}

impl fmt::Display for JsonKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// A document root that is statically known to be an array or an object.
///
/// Useful when a literal must be a valid serialization root.
#[derive(Debug, Clone, PartialEq)]
pub enum JsonRoot {
    Array(Vec<JsonValue>),
    Object(JsonMap),
}

impl JsonValue {
    pub const fn null() -> Self {
        JsonValue::Null
    }

    pub fn kind(&self) -> JsonKind {
        match self {
            JsonValue::Integer(_) => JsonKind::Integer,
            JsonValue::Float(_) => JsonKind::Float,
            JsonValue::String(_) => JsonKind::String,
            JsonValue::Boolean(_) => JsonKind::Boolean,
            JsonValue::Array(_) => JsonKind::Array,
            JsonValue::Object(_) => JsonKind::Object,
            JsonValue::Null => JsonKind::Null,
        }
    }

    /// Returns the integer payload. A `Float` never satisfies this accessor.
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            JsonValue::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns the float payload. An `Integer` is not widened.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            JsonValue::Float(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            JsonValue::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            JsonValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[JsonValue]> {
        match self {
            JsonValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_object(&self) -> Option<&JsonMap> {
        match self {
            JsonValue::Object(map) => Some(map),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, JsonValue::Null)
    }

    pub fn is_object(&self) -> bool {
        matches!(self, JsonValue::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self, JsonValue::Array(_))
    }

    /// Check if this is an object without members.
    ///
    /// Arrays, scalars and `Null` are never "empty" in this sense.
    pub fn is_empty_object(&self) -> bool {
        matches!(self, JsonValue::Object(map) if map.is_empty())
    }

    /// Look up an object member. `None` for missing keys and non-objects.
    pub fn get(&self, key: &str) -> Option<&JsonValue> {
        self.as_object()?.get(key)
    }

    /// Look up an array element. `None` when out of range or not an array.
    pub fn get_index(&self, index: usize) -> Option<&JsonValue> {
        self.as_array()?.get(index)
    }

    /// Insert or overwrite an object member.
    ///
    /// When `self` is not an object it is replaced wholesale by the
    /// single-member object `{key: value}`. Writing a member into a scalar,
    /// array or `Null` therefore discards the previous value; this is how a
    /// first write creates nested structure.
    pub fn set_member(&mut self, key: impl Into<String>, value: JsonValue) {
        let key = key.into();
        match self {
            JsonValue::Object(map) => {
                map.insert(key, value);
            }
            other => {
                debug!(key = %key, kind = %other.kind(), "member write replaces non-object value");
                let mut map = JsonMap::with_capacity(1);
                map.insert(key, value);
                *other = JsonValue::Object(map);
            }
        }
    }

    /// Overwrite an array element in place.
    ///
    /// Returns `false` and leaves `self` untouched when `self` is not an
    /// array or `index` is out of range.
    pub fn set_index(&mut self, index: usize, value: JsonValue) -> bool {
        match self {
            JsonValue::Array(items) => match items.get_mut(index) {
                Some(slot) => {
                    *slot = value;
                    true
                }
                None => {
                    debug!(index, len = items.len(), "index write out of range, dropped");
                    false
                }
            },
            other => {
                debug!(index, kind = %other.kind(), "index write on non-array, dropped");
                false
            }
        }
    }
}

impl AsRef<JsonValue> for JsonValue {
    fn as_ref(&self) -> &JsonValue {
        self
    }
}

impl From<JsonRoot> for JsonValue {
    fn from(root: JsonRoot) -> Self {
        match root {
            JsonRoot::Array(items) => JsonValue::Array(items),
            JsonRoot::Object(map) => JsonValue::Object(map),
        }
    }
}

macro_rules! from_integer {
    ($($ty:ty),+) => {
        $(
            impl From<$ty> for JsonValue {
                fn from(n: $ty) -> Self {
                    JsonValue::Integer(i64::from(n))
                }
            }
        )+
    };
}

from_integer!(i8, i16, i32, i64, u8, u16, u32);

impl From<f64> for JsonValue {
    fn from(n: f64) -> Self {
        JsonValue::Float(n)
    }
}

impl From<f32> for JsonValue {
    fn from(n: f32) -> Self {
        JsonValue::Float(f64::from(n))
    }
}

impl From<bool> for JsonValue {
    fn from(b: bool) -> Self {
        JsonValue::Boolean(b)
    }
}

impl From<String> for JsonValue {
    fn from(s: String) -> Self {
        JsonValue::String(s)
    }
}

impl From<&str> for JsonValue {
    fn from(s: &str) -> Self {
        JsonValue::String(s.to_owned())
    }
}

impl From<()> for JsonValue {
    fn from((): ()) -> Self {
        JsonValue::Null
    }
}

impl From<JsonMap> for JsonValue {
    fn from(map: JsonMap) -> Self {
        JsonValue::Object(map)
    }
}

impl<T: Into<JsonValue>> From<Vec<T>> for JsonValue {
    fn from(items: Vec<T>) -> Self {
        JsonValue::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<JsonValue>> From<Option<T>> for JsonValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(JsonValue::Null, Into::into)
    }
}

impl<T: Into<JsonValue>> FromIterator<T> for JsonValue {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        JsonValue::Array(iter.into_iter().map(Into::into).collect())
    }
}

impl<K: Into<String>, V: Into<JsonValue>> FromIterator<(K, V)> for JsonValue {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        JsonValue::Object(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}
