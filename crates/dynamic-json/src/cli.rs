//! Logic behind the `dynjson` binary.
//!
//! - `get`: resolve a dot path in a document
//! - `set`: write a value at a dot path and print the new document
//! - `eq`:  compare two documents strictly, coercingly or within a delta
//!
//! Unlike the library views, the CLI rejects malformed input documents so
//! that a typo does not silently read as `null`.

use dynamic_json_path::{PathError, StaticPath};
use dynamic_json_value::JsonValue;
use thiserror::Error;
use tracing::debug;

use crate::read::{JsonRead, ReadOnlyView};
use crate::write::WritableView;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("malformed JSON document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("invalid path: {0}")]
    Path(#[from] PathError),
}

/// How `eq` decides equality.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Comparison {
    Strict,
    Coercing,
    Tolerant(f64),
}

fn parse_document(text: &str) -> Result<JsonValue, CliError> {
    Ok(serde_json::from_str(text)?)
}

/// Render any value, not only object roots.
fn render(value: &JsonValue, compact: bool) -> Result<String, CliError> {
    if compact {
        Ok(value.to_string())
    } else {
        Ok(serde_json::to_string_pretty(value)?)
    }
}

/// Resolve `path` in the document and render what it names.
///
/// Missing members print as `null`.
pub fn get(doc_text: &str, path: &str, compact: bool) -> Result<String, CliError> {
    let path = StaticPath::parse(path)?;
    let doc = ReadOnlyView::new(parse_document(doc_text)?);
    render(doc.path(&path).value(), compact)
}

/// Write `value_text` at `path` and render the resulting document.
///
/// `value_text` is read as JSON when it parses and as a plain string
/// otherwise, so `set name Ada` and `set name '"Ada"'` are equivalent.
pub fn set(doc_text: &str, path: &str, value_text: &str, compact: bool) -> Result<String, CliError> {
    let path = StaticPath::parse(path)?;
    let value = serde_json::from_str::<JsonValue>(value_text).unwrap_or_else(|err| {
        debug!(error = %err, "value is not JSON, storing it as a string");
        JsonValue::from(value_text)
    });
    let mut doc = WritableView::new(parse_document(doc_text)?);
    doc.set_path(&path, value);
    render(doc.value(), compact)
}

/// Compare two documents.
pub fn compare(left: &str, right: &str, comparison: Comparison) -> Result<bool, CliError> {
    let left = parse_document(left)?;
    let right = parse_document(right)?;
    let equal = match comparison {
        Comparison::Strict => left == right,
        Comparison::Coercing => left.seems_equal(&right),
        Comparison::Tolerant(delta) => left.almost_equal(&right, delta),
    };
    debug!(?comparison, equal, "documents compared");
    Ok(equal)
}
