//! Key and index lookup.

use dynamic_json_value::JsonValue;
use tracing::debug;

use crate::PathError;

/// Separator between the segments of a string path.
pub const DELIMITER: char = '.';

static NULL: JsonValue = JsonValue::Null;

/// Look up `key` in an object.
///
/// Yields `Null` when the key is absent or `value` is not an object. Both
/// cases are reported as debug events, never as errors.
pub fn member<'v>(value: &'v JsonValue, key: &str) -> &'v JsonValue {
    match value {
        JsonValue::Object(map) => match map.get(key) {
            Some(found) => found,
            None => {
                debug!(key, "member not found");
                &NULL
            }
        },
        other => {
            debug!(key, kind = %other.kind(), "member lookup on non-object");
            &NULL
        }
    }
}

/// Look up position `index` in an array.
///
/// An index past the end is an error. Indexing into anything other than an
/// array yields `Null`.
///
/// # Example
///
/// ```
/// use dynamic_json_path::{resolve_index, PathError};
/// use dynamic_json_value::JsonValue;
///
/// let doc = JsonValue::from_text("[10, 20]");
/// assert_eq!(resolve_index(&doc, 1), Ok(&JsonValue::Integer(20)));
/// assert_eq!(resolve_index(&doc, 2), Err(PathError::IndexOutOfRange { index: 2, len: 2 }));
///
/// let scalar = JsonValue::from(5);
/// assert_eq!(resolve_index(&scalar, 0), Ok(&JsonValue::Null));
/// ```
pub fn resolve_index(value: &JsonValue, index: usize) -> Result<&JsonValue, PathError> {
    match value {
        JsonValue::Array(items) => items.get(index).ok_or_else(|| {
            debug!(index, len = items.len(), "index read out of range");
            PathError::IndexOutOfRange {
                index,
                len: items.len(),
            }
        }),
        other => {
            debug!(index, kind = %other.kind(), "index lookup on non-array");
            Ok(&NULL)
        }
    }
}

/// Walk `keys` from `root`, one object member at a time.
///
/// An empty key list or an empty key resolves to `Null`, as does any step
/// through a missing key or a non-object value. Nothing is created along the
/// way.
pub fn resolve_keys<'v, S: AsRef<str>>(root: &'v JsonValue, keys: &[S]) -> &'v JsonValue {
    if keys.is_empty() {
        debug!("empty path resolves to null");
        return &NULL;
    }
    if let Some(position) = keys.iter().position(|key| key.as_ref().is_empty()) {
        debug!(position, "path with an empty segment resolves to null");
        return &NULL;
    }
    let mut current = root;
    for key in keys {
        current = member(current, key.as_ref());
        if current.is_null() {
            break;
        }
    }
    current
}

/// Split a dot-delimited path. `None` when the path or any segment is empty.
///
/// ```
/// use dynamic_json_path::split_path;
///
/// assert_eq!(split_path("a.b"), Some(vec!["a", "b"]));
/// assert_eq!(split_path("a..b"), None);
/// assert_eq!(split_path("."), None);
/// assert_eq!(split_path(""), None);
/// ```
pub fn split_path(path: &str) -> Option<Vec<&str>> {
    if path.is_empty() {
        return None;
    }
    let segments: Vec<&str> = path.split(DELIMITER).collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        return None;
    }
    Some(segments)
}

/// Anything that names a sequence of object keys.
pub trait KeyPath {
    /// The keys of this path, or `None` if it cannot name a member.
    fn segments(&self) -> Option<Vec<&str>>;

    fn resolve<'v>(&self, root: &'v JsonValue) -> &'v JsonValue {
        match self.segments() {
            Some(segments) => resolve_keys(root, segments.as_slice()),
            None => {
                debug!("malformed path resolves to null");
                &NULL
            }
        }
    }
}

impl KeyPath for str {
    fn segments(&self) -> Option<Vec<&str>> {
        split_path(self)
    }
}

impl KeyPath for String {
    fn segments(&self) -> Option<Vec<&str>> {
        split_path(self)
    }
}

impl<S: AsRef<str>> KeyPath for [S] {
    fn segments(&self) -> Option<Vec<&str>> {
        Some(self.iter().map(AsRef::as_ref).collect())
    }
}

impl<S: AsRef<str>> KeyPath for Vec<S> {
    fn segments(&self) -> Option<Vec<&str>> {
        self.as_slice().segments()
    }
}

impl<S: AsRef<str>, const N: usize> KeyPath for [S; N] {
    fn segments(&self) -> Option<Vec<&str>> {
        self.as_slice().segments()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc() -> JsonValue {
        JsonValue::from_literal(json!({
            "a": {"b": {"c": 1}},
            "list": [1, 2, 3],
            "s": "text",
            "n": null
        }))
    }

    #[test]
    fn test_member() {
        let doc = doc();
        assert_eq!(member(&doc, "s"), &JsonValue::from("text"));
        assert!(member(&doc, "missing").is_null());
        assert!(member(member(&doc, "s"), "x").is_null());
        assert!(member(&doc, "n").is_null());
    }

    #[test]
    fn test_resolve_index() {
        let doc = doc();
        let list = member(&doc, "list");
        assert_eq!(resolve_index(list, 0), Ok(&JsonValue::Integer(1)));
        assert_eq!(
            resolve_index(list, 3),
            Err(PathError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert_eq!(resolve_index(&doc, 0), Ok(&JsonValue::Null));
    }

    #[test]
    fn test_resolve_keys() {
        let doc = doc();
        assert_eq!(resolve_keys(&doc, &["a", "b", "c"]), &JsonValue::Integer(1));
        assert!(resolve_keys(&doc, &["a", "x", "y"]).is_null());
        assert!(resolve_keys(&doc, &["s", "length"]).is_null());
        assert!(resolve_keys::<&str>(&doc, &[]).is_null());
        assert!(resolve_keys(&doc, &["a", ""]).is_null());
        assert!(resolve_keys(&doc, &["", "a"]).is_null());
    }

    #[test]
    fn test_resolve_does_not_index_arrays() {
        let doc = doc();
        assert!("list.0".resolve(&doc).is_null());
    }

    #[test]
    fn test_string_paths() {
        let doc = doc();
        assert_eq!("a.b.c".resolve(&doc), &JsonValue::Integer(1));
        assert_eq!("a.b".resolve(&doc), &JsonValue::from_literal(json!({"c": 1})));
        assert!("a.x.y".resolve(&doc).is_null());
        assert!("".resolve(&doc).is_null());
        assert!("...".resolve(&doc).is_null());
        assert!("a.".resolve(&doc).is_null());
        assert!(".a".resolve(&doc).is_null());
        assert_eq!(String::from("s").resolve(&doc), &JsonValue::from("text"));
    }

    #[test]
    fn test_key_lists() {
        let doc = doc();
        assert_eq!(["a", "b", "c"].resolve(&doc), &JsonValue::Integer(1));
        let keys = vec!["a".to_string(), "b".to_string()];
        assert_eq!(keys.resolve(&doc), &JsonValue::from_literal(json!({"c": 1})));
        assert!(Vec::<String>::new().resolve(&doc).is_null());
    }

    #[test]
    fn test_keys_containing_delimiter() {
        let doc = JsonValue::from_literal(json!({"a.b": 1}));
        assert!("a.b".resolve(&doc).is_null());
        assert_eq!(["a.b"].resolve(&doc), &JsonValue::Integer(1));
    }
}
