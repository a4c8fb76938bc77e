//! Typed extraction of array elements.

use crate::value::JsonValue;

/// Types that can be read out of a single [`JsonValue`] without conversion.
pub trait FromJsonValue: Sized {
    fn from_json_value(value: &JsonValue) -> Option<Self>;
}

impl FromJsonValue for i64 {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_integer()
    }
}

impl FromJsonValue for f64 {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_float()
    }
}

impl FromJsonValue for bool {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_boolean()
    }
}

impl FromJsonValue for String {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        value.as_str().map(str::to_owned)
    }
}

impl FromJsonValue for JsonValue {
    fn from_json_value(value: &JsonValue) -> Option<Self> {
        Some(value.clone())
    }
}

impl JsonValue {
    /// Every element read as `T`, keeping positions: an element of another
    /// kind becomes `None`. `None` overall if this is not an array.
    ///
    /// ```
    /// use dynamic_json_value::JsonValue;
    ///
    /// let value = JsonValue::from_text(r#"[1, "two", 3]"#);
    /// assert_eq!(value.array_values::<i64>(), Some(vec![Some(1), None, Some(3)]));
    /// assert_eq!(value.compact_array_values::<i64>(), Some(vec![1, 3]));
    /// assert_eq!(JsonValue::from(1).array_values::<i64>(), None);
    /// ```
    pub fn array_values<T: FromJsonValue>(&self) -> Option<Vec<Option<T>>> {
        Some(self.as_array()?.iter().map(T::from_json_value).collect())
    }

    /// The elements that are a `T`, skipping the rest. `None` if this is not
    /// an array.
    pub fn compact_array_values<T: FromJsonValue>(&self) -> Option<Vec<T>> {
        Some(self.as_array()?.iter().filter_map(T::from_json_value).collect())
    }
}
