//! dynamic-json - dynamically typed access to JSON documents.
//!
//! Two views sit on top of one value model ([`JsonValue`]):
//!
//! - [`ReadOnlyView`]: total navigation over an immutable snapshot. Missing
//!   keys and kind mismatches yield `Null` views rather than errors.
//! - [`WritableView`]: the same read surface, plus writes that are replayed
//!   into every ancestor view the writable child was navigated from.
//!
//! Both implement [`JsonRead`], which carries navigation, typed access,
//! decoding and the comparison modes.
//!
//! # Example
//!
//! ```
//! use dynamic_json::{JsonRead, ReadOnlyView, WritableView};
//!
//! let mut doc = WritableView::from_text(r#"{"server": {"port": "8080"}}"#);
//! assert!(doc.path("server.port").seems_equal(&dynamic_json::JsonValue::from(8080)));
//!
//! {
//!     let mut server = doc.member_mut("server");
//!     server.set_member("port", 9090);
//! }
//! assert_eq!(doc.path("server.port"), 9090);
//!
//! let frozen: ReadOnlyView = doc.snapshot();
//! doc.set_path("server.host", "localhost");
//! assert!(frozen.path("server.host").is_null());
//! ```

pub mod cli;
pub mod error;
pub mod read;
pub mod write;

pub use error::ViewError;
pub use read::{JsonRead, ReadOnlyView};
pub use write::WritableView;

pub use dynamic_json_path::{dyn_path, KeyPath, PathError, StaticPath};
pub use dynamic_json_value::{FromJsonValue, JsonKind, JsonMap, JsonRoot, JsonValue};
