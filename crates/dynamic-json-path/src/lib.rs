//! Key path resolution over [`JsonValue`] trees.
//!
//! A path is a sequence of object keys. It can be written as a dot-delimited
//! string (`"a.b.c"`), as a list of keys, or as a [`StaticPath`] that is
//! validated once and then replayed.
//!
//! Resolution is total: a missing key, a non-object intermediate value or a
//! malformed path all resolve to `Null`. Array indexing is the one exception,
//! see [`resolve_index`].
//!
//! # Example
//!
//! ```
//! use dynamic_json_path::{dyn_path, resolve_keys, KeyPath};
//! use dynamic_json_value::JsonValue;
//!
//! let doc = JsonValue::from_text(r#"{"a": {"b": {"c": 1}}}"#);
//!
//! assert_eq!("a.b.c".resolve(&doc), &JsonValue::Integer(1));
//! assert!("a.x.y".resolve(&doc).is_null());
//! assert!("".resolve(&doc).is_null());
//!
//! assert_eq!(resolve_keys(&doc, &["a", "b", "c"]), &JsonValue::Integer(1));
//! assert_eq!(dyn_path!(a.b.c).resolve(&doc), &JsonValue::Integer(1));
//! ```

use thiserror::Error;

pub mod resolve;
pub mod static_path;

pub use resolve::{member, resolve_index, resolve_keys, split_path, KeyPath, DELIMITER};
pub use static_path::{is_valid_path, StaticPath};

pub use dynamic_json_value::JsonValue;

/// Builds a [`StaticPath`] from identifier tokens.
///
/// The tokens are joined at compile time, so the path never needs to be
/// split at runtime.
///
/// ```
/// use dynamic_json_path::dyn_path;
///
/// let path = dyn_path!(user.address.city);
/// assert_eq!(path.to_string(), "user.address.city");
/// assert_eq!(path.segments().len(), 3);
/// ```
#[macro_export]
macro_rules! dyn_path {
    ($first:ident $(. $rest:ident)*) => {
        $crate::StaticPath::__from_idents(&[stringify!($first) $(, stringify!($rest))*])
    };
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PathError {
    #[error("path has no segments")]
    EmptyPath,
    #[error("path segment {position} is empty")]
    EmptySegment { position: usize },
    #[error("index {index} out of range for array of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}
