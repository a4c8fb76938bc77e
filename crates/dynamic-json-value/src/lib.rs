//! dynamic-json-value - the JSON value model behind the dynamic-json views.
//!
//! A [`JsonValue`] is a tagged union over the JSON kinds, with integers and
//! floats kept apart. On top of it this crate provides:
//!
//! - permissive text decoding and object-only text encoding ([`JsonValue::from_text`],
//!   [`JsonValue::to_text`]);
//! - strict ([`deep_equal`]), coercing ([`JsonValue::seems_equal`]) and tolerant
//!   ([`JsonValue::almost_equal`]) equality;
//! - conversion from dynamically typed host data ([`JsonValue::coerce_from`]);
//! - typed array extraction ([`JsonValue::array_values`]).
//!
//! # Example
//!
//! ```
//! use dynamic_json_value::JsonValue;
//!
//! let value = JsonValue::from_text(r#"{"count": 3, "enabled": "1"}"#);
//!
//! assert_eq!(value.get("count"), Some(&JsonValue::Integer(3)));
//! assert!(value.get("enabled").is_some_and(|v| v.seems_equal(&JsonValue::Integer(1))));
//! assert_eq!(value.to_text_compact().as_deref(), Some(r#"{"count":3,"enabled":"1"}"#));
//! ```

pub mod coerce;
pub mod equal;
pub mod extract;
pub mod text;
pub mod value;

pub use equal::deep_equal;
pub use extract::FromJsonValue;
pub use value::{JsonKind, JsonMap, JsonRoot, JsonValue};

pub use indexmap::IndexMap;
