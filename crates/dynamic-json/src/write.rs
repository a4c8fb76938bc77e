//! Writable views with upward write propagation.
//!
//! A child obtained with [`WritableView::member_mut`],
//! [`WritableView::index_mut`] or [`WritableView::path_mut`] mutably borrows
//! its parent for as long as it lives, and remembers the key, index or key
//! path it was reached through. A write
//! through the child updates the child's own value and is then replayed
//! into the parent at that slot, which replays into its own parent, up to
//! the root.
//!
//! Read-only navigation ([`JsonRead::member`], [`JsonRead::path`]) copies the
//! sub-value instead. Such copies are snapshots: writes made later through
//! other views never reach them.

use std::fmt;

use dynamic_json_path::{self as path, KeyPath};
use dynamic_json_value::{JsonRoot, JsonValue};
use serde::Serialize;
use tracing::debug;

use crate::error::ViewError;
use crate::read::{view_scalar_eq, JsonRead, ReadOnlyView};

/// Where a child's value sits inside its parent's value.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Key(String),
    Index(usize),
    /// Empty for a malformed path: writes stop at the child.
    Path(Vec<String>),
}

/// A view that can take a child's new value back at a slot.
trait Ancestor {
    fn replay(&mut self, slot: &Slot, value: JsonValue);
}

struct Origin<'p> {
    slot: Slot,
    parent: &'p mut (dyn Ancestor + 'p),
}

/// A view whose writes reach every ancestor view it was navigated from.
///
/// # Example
///
/// ```
/// use dynamic_json::{JsonRead, WritableView};
///
/// let mut root = WritableView::from_text(r#"{"a": {"b": {}}}"#);
/// {
///     let mut a = root.member_mut("a");
///     let mut b = a.member_mut("b");
///     b.set_member("c", 1);
///     assert_eq!(a.path("b.c"), 1);
/// }
/// assert_eq!(root.path("a.b.c"), 1);
/// ```
pub struct WritableView<'p> {
    current: JsonValue,
    origin: Option<Origin<'p>>,
}

impl WritableView<'static> {
    /// A root view owning `value`.
    pub fn new(value: JsonValue) -> Self {
        Self {
            current: value,
            origin: None,
        }
    }

    pub fn null() -> Self {
        Self::new(JsonValue::Null)
    }

    /// Decode JSON text. Malformed text gives a `Null` root.
    pub fn from_text(text: impl AsRef<[u8]>) -> Self {
        Self::new(JsonValue::from_text(text))
    }

    pub fn from_bytes(bytes: &[u8]) -> Self {
        Self::from_text(bytes)
    }

    pub fn from_literal(literal: serde_json::Value) -> Self {
        Self::new(JsonValue::from_literal(literal))
    }

    /// Encode a typed record. A record that does not map to JSON gives a `Null` root.
    pub fn from_record<T: Serialize + ?Sized>(record: &T) -> Self {
        Self::new(JsonValue::from_serializable(record).unwrap_or_default())
    }
}

impl<'p> WritableView<'p> {
    /// A writable child over the member `name`.
    ///
    /// The child starts out as `Null` when the member is missing or this
    /// value is not an object. Writing a member into it then creates the
    /// structure on the way up.
    pub fn member_mut(&mut self, name: &str) -> WritableView<'_> {
        let current = path::member(&self.current, name).clone();
        WritableView {
            current,
            origin: Some(Origin {
                slot: Slot::Key(name.to_owned()),
                parent: self,
            }),
        }
    }

    /// A writable child over the element at `index`.
    ///
    /// # Errors
    ///
    /// Fails like [`JsonRead::index`] when `index` is past the end of an array.
    pub fn index_mut(&mut self, index: usize) -> Result<WritableView<'_>, ViewError> {
        let current = path::resolve_index(&self.current, index)?.clone();
        Ok(WritableView {
            current,
            origin: Some(Origin {
                slot: Slot::Index(index),
                parent: self,
            }),
        })
    }

    /// A writable child over the value at a key path.
    ///
    /// Writes through the child are stored back along the whole path,
    /// creating intermediate objects with the same destructive rule as
    /// [`WritableView::set_member`]. A malformed or empty path gives a `Null`
    /// child whose writes never leave it.
    ///
    /// ```
    /// use dynamic_json::{JsonRead, WritableView};
    ///
    /// let mut doc = WritableView::from_text(r#"{"a": {"b": {}}}"#);
    /// doc.path_mut("a.b").set_member("c", 1);
    /// assert_eq!(doc.path("a.b.c"), 1);
    /// ```
    pub fn path_mut<P: KeyPath + ?Sized>(&mut self, key_path: &P) -> WritableView<'_> {
        let keys: Vec<String> = match key_path.segments() {
            Some(keys) if !keys.is_empty() && keys.iter().all(|key| !key.is_empty()) => {
                keys.into_iter().map(str::to_owned).collect()
            }
            _ => Vec::new(),
        };
        let current = if keys.is_empty() {
            JsonValue::Null
        } else {
            path::resolve_keys(&self.current, keys.as_slice()).clone()
        };
        WritableView {
            current,
            origin: Some(Origin {
                slot: Slot::Path(keys),
                parent: self,
            }),
        }
    }

    /// Insert or overwrite a member, then propagate.
    ///
    /// If the current value is not an object it is replaced by the
    /// single-member object `{name: value}`. Views passed as `value` are
    /// stored as a copy of their current value.
    pub fn set_member(&mut self, name: impl Into<String>, value: impl Into<JsonValue>) {
        self.current.set_member(name, value.into());
        self.propagate();
    }

    /// Overwrite an array element, then propagate.
    ///
    /// Out-of-range indexes and non-array values drop the write: nothing
    /// changes here or in any ancestor.
    pub fn set_index(&mut self, index: usize, value: impl Into<JsonValue>) {
        if self.current.set_index(index, value.into()) {
            self.propagate();
        }
    }

    /// Replace the whole value, then propagate.
    pub fn set_value(&mut self, value: impl Into<JsonValue>) {
        self.current = value.into();
        self.propagate();
    }

    /// Write `value` at a key path below this view, creating intermediate
    /// objects with the same destructive rule as [`WritableView::set_member`].
    ///
    /// A malformed or empty path drops the write.
    ///
    /// ```
    /// use dynamic_json::{JsonRead, WritableView};
    ///
    /// let mut doc = WritableView::from_text(r#"{"a": 5}"#);
    /// doc.set_path("a.b.c", true);
    /// assert_eq!(doc.to_text_compact().as_deref(), Some(r#"{"a":{"b":{"c":true}}}"#));
    /// ```
    pub fn set_path<P: KeyPath + ?Sized>(&mut self, key_path: &P, value: impl Into<JsonValue>) {
        self.path_mut(key_path).set_value(value);
    }

    /// A root view over a copy of the current value. Writes through it never
    /// reach this view or its ancestors.
    pub fn detach(&self) -> WritableView<'static> {
        WritableView::new(self.current.clone())
    }

    /// True for views that were not navigated to from a parent.
    pub fn is_root(&self) -> bool {
        self.origin.is_none()
    }

    pub fn into_value(self) -> JsonValue {
        self.current
    }

    fn propagate(&mut self) {
        if let Some(origin) = self.origin.as_mut() {
            origin.parent.replay(&origin.slot, self.current.clone());
        }
    }
}

impl Ancestor for WritableView<'_> {
    fn replay(&mut self, slot: &Slot, value: JsonValue) {
        let applied = match slot {
            Slot::Key(key) => {
                self.current.set_member(key.as_str(), value);
                true
            }
            Slot::Index(index) => self.current.set_index(*index, value),
            Slot::Path(keys) if keys.is_empty() => {
                debug!("write through a malformed path dropped");
                false
            }
            Slot::Path(keys) => {
                write_keys(&mut self.current, keys, value);
                true
            }
        };
        if applied {
            self.propagate();
        }
    }
}

fn write_keys(target: &mut JsonValue, keys: &[String], value: JsonValue) {
    match keys {
        [] => *target = value,
        [first, rest @ ..] => {
            let mut child = path::member(target, first).clone();
            write_keys(&mut child, rest, value);
            target.set_member(first.as_str(), child);
        }
    }
}

impl JsonRead for WritableView<'_> {
    fn value(&self) -> &JsonValue {
        &self.current
    }
}

/// The copy has no origin: it is a detached root over the same value.
impl Clone for WritableView<'_> {
    fn clone(&self) -> Self {
        Self {
            current: self.current.clone(),
            origin: None,
        }
    }
}

impl fmt::Debug for WritableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WritableView")
            .field("current", &self.current)
            .field("slot", &self.origin.as_ref().map(|origin| &origin.slot))
            .finish()
    }
}

/// Compact JSON for any root.
impl fmt::Display for WritableView<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.current, f)
    }
}

impl Default for WritableView<'static> {
    fn default() -> Self {
        Self::null()
    }
}

impl From<JsonValue> for WritableView<'static> {
    fn from(value: JsonValue) -> Self {
        Self::new(value)
    }
}

impl From<JsonRoot> for WritableView<'static> {
    fn from(root: JsonRoot) -> Self {
        Self::new(root.into())
    }
}

impl From<ReadOnlyView> for WritableView<'static> {
    fn from(view: ReadOnlyView) -> Self {
        Self::new(view.into_value())
    }
}

impl From<WritableView<'_>> for JsonValue {
    fn from(view: WritableView<'_>) -> Self {
        view.current
    }
}

impl From<&WritableView<'_>> for JsonValue {
    fn from(view: &WritableView<'_>) -> Self {
        view.current.clone()
    }
}

impl AsRef<JsonValue> for WritableView<'_> {
    fn as_ref(&self) -> &JsonValue {
        &self.current
    }
}

impl PartialEq<JsonValue> for WritableView<'_> {
    fn eq(&self, other: &JsonValue) -> bool {
        self.current == *other
    }
}

impl PartialEq<ReadOnlyView> for WritableView<'_> {
    fn eq(&self, other: &ReadOnlyView) -> bool {
        self.current == *other.value()
    }
}

view_scalar_eq!(WritableView<'_> => i32, i64, u32, f64, bool, &str, String);
