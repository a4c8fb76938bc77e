use dynamic_json_path::PathError;
use thiserror::Error;

/// Failures surfaced by view navigation.
///
/// Only bounds-checked array reads fail. Missing keys and kind mismatches
/// resolve to `Null` views instead.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ViewError {
    #[error(transparent)]
    Path(#[from] PathError),
}

impl ViewError {
    /// The index and array length of an out-of-range read, if that is what this is.
    pub fn out_of_range(&self) -> Option<(usize, usize)> {
        match self {
            ViewError::Path(PathError::IndexOutOfRange { index, len }) => Some((*index, *len)),
            ViewError::Path(_) => None,
        }
    }
}
