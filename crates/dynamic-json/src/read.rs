//! Read access shared by every view, and the read-only view itself.

use std::fmt;

use dynamic_json_path::{self as path, KeyPath};
use dynamic_json_value::{FromJsonValue, JsonKind, JsonMap, JsonRoot, JsonValue};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::ViewError;

/// Navigation and typed access over a [`JsonValue`].
///
/// Navigation is total: `member` and `path` always return a view, over
/// `Null` when nothing is found. Only `index` can fail, for positions past
/// the end of an array.
pub trait JsonRead {
    /// The value this view currently denotes.
    fn value(&self) -> &JsonValue;

    /// Look up an object member. A missing key or a non-object yields a `Null` view.
    fn member(&self, name: &str) -> ReadOnlyView {
        ReadOnlyView::new(path::member(self.value(), name).clone())
    }

    /// Look up an array element.
    ///
    /// # Errors
    ///
    /// `ViewError::Path` with `PathError::IndexOutOfRange` when `index` is
    /// past the end of an array. A non-array yields a `Null` view instead.
    fn index(&self, index: usize) -> Result<ReadOnlyView, ViewError> {
        let found = path::resolve_index(self.value(), index)?;
        Ok(ReadOnlyView::new(found.clone()))
    }

    /// Bounds-checked `index`: `None` instead of an error.
    fn get(&self, index: usize) -> Option<ReadOnlyView> {
        self.index(index).ok()
    }

    /// Resolve a dot-delimited string, a key list or a [`path::StaticPath`].
    fn path<P: KeyPath + ?Sized>(&self, key_path: &P) -> ReadOnlyView {
        ReadOnlyView::new(key_path.resolve(self.value()).clone())
    }

    /// Decode into a statically typed record. `None` on any failure.
    fn decode_as<T: DeserializeOwned>(&self) -> Option<T> {
        self.value().decode_as()
    }

    fn as_integer(&self) -> Option<i64> {
        self.value().as_integer()
    }

    fn as_float(&self) -> Option<f64> {
        self.value().as_float()
    }

    fn as_str(&self) -> Option<&str> {
        self.value().as_str()
    }

    fn as_boolean(&self) -> Option<bool> {
        self.value().as_boolean()
    }

    fn as_array(&self) -> Option<&[JsonValue]> {
        self.value().as_array()
    }

    fn as_object(&self) -> Option<&JsonMap> {
        self.value().as_object()
    }

    fn is_null(&self) -> bool {
        self.value().is_null()
    }

    /// True only for an object without members.
    fn is_empty(&self) -> bool {
        self.value().is_empty_object()
    }

    fn kind(&self) -> JsonKind {
        self.value().kind()
    }

    fn to_text(&self) -> Option<String> {
        self.value().to_text()
    }

    fn to_text_compact(&self) -> Option<String> {
        self.value().to_text_compact()
    }

    fn array_values<T: FromJsonValue>(&self) -> Option<Vec<Option<T>>> {
        self.value().array_values()
    }

    fn compact_array_values<T: FromJsonValue>(&self) -> Option<Vec<T>> {
        self.value().compact_array_values()
    }

    /// A read-only copy of the current value.
    fn snapshot(&self) -> ReadOnlyView {
        ReadOnlyView::new(self.value().clone())
    }

    fn seems_equal<R: AsRef<JsonValue> + ?Sized>(&self, other: &R) -> bool {
        self.value().seems_equal(other.as_ref())
    }

    fn almost_equal<R: AsRef<JsonValue> + ?Sized>(&self, other: &R, number_delta: f64) -> bool {
        self.value().almost_equal(other.as_ref(), number_delta)
    }
}

/// A view over an immutable snapshot of a JSON value.
///
/// Child views copy the sub-value they denote, so a `ReadOnlyView` never
/// observes later changes to the document it came from.
///
/// # Example
///
/// ```
/// use dynamic_json::{JsonRead, ReadOnlyView};
///
/// let doc = ReadOnlyView::from_text(r#"{"user": {"name": "Ada", "tags": ["x", "y"]}}"#);
///
/// assert_eq!(doc.path("user.name").as_str(), Some("Ada"));
/// assert_eq!(doc.member("user").member("tags").index(1).unwrap(), "y");
/// assert!(doc.member("user").member("tags").index(2).is_err());
/// assert!(doc.member("nobody").member("name").is_null());
/// ```
#[derive(Debug, Clone, Default, PartialEq, PartialOrd)]
pub struct ReadOnlyView {
    current: JsonValue,
}

impl ReadOnlyView {
    pub fn new(value: JsonValue) -> Self {
        Self { current: value }
    }

    pub fn null() -> Self {
        Self::new(JsonValue::Null)
    }

    /// Decode JSON text. Malformed text gives a `Null` view.
    pub fn from_text(text: impl AsRef<[u8]>) -> Self {
        Self::new(JsonValue::from_text(text))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(bytes)
    }

    pub fn from_literal(literal: serde_json::Value) -> Self {
        Self::new(JsonValue::from_literal(literal))
    }

    /// Encode a typed record. A record that does not map to JSON gives a `Null` view.
    pub fn from_record<T: Serialize + ?Sized>(record: &T) -> Self {
        Self::new(JsonValue::from_serializable(record).unwrap_or_default())
    }

    pub fn into_value(self) -> JsonValue {
        self.current
    }
}

impl JsonRead for ReadOnlyView {
    fn value(&self) -> &JsonValue {
        &self.current
    }
}

impl From<JsonValue> for ReadOnlyView {
    fn from(value: JsonValue) -> Self {
        Self::new(value)
    }
}

impl From<JsonRoot> for ReadOnlyView {
    fn from(root: JsonRoot) -> Self {
        Self::new(root.into())
    }
}

impl From<ReadOnlyView> for JsonValue {
    fn from(view: ReadOnlyView) -> Self {
        view.current
    }
}

impl From<&ReadOnlyView> for JsonValue {
    fn from(view: &ReadOnlyView) -> Self {
        view.current.clone()
    }
}

impl AsRef<JsonValue> for ReadOnlyView {
    fn as_ref(&self) -> &JsonValue {
        &self.current
    }
}

impl PartialEq<JsonValue> for ReadOnlyView {
    fn eq(&self, other: &JsonValue) -> bool {
        self.current == *other
    }
}

/// Compact JSON for any root.
impl fmt::Display for ReadOnlyView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}

/// Compares a view's value against plain scalars. The tag must match exactly.
macro_rules! view_scalar_eq {
    ($view:ty => $($scalar:ty),+) => {
        $(
            impl PartialEq<$scalar> for $view {
                fn eq(&self, other: &$scalar) -> bool {
                    *JsonRead::value(self) == *other
                }
            }
        )+
    };
}

pub(crate) use view_scalar_eq;

view_scalar_eq!(ReadOnlyView => i32, i64, u32, f64, bool, &str, String);
