use thiserror::Error;

/// Errors returned by the selection sorter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SortError {
    /// `start > end`, or `end` lies past the end of the input.
    #[error("invalid range {start}..{end} for a sequence of length {len}")]
    InvalidRange {
        start: usize,
        end: usize,
        len: usize,
    },

    /// Only raised when the sorter was built with `require_non_empty`.
    #[error("input sequence is empty")]
    EmptyInput,
}

/// An order word other than `asc`/`ascending`/`desc`/`descending`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown order `{0}`, expected asc or desc")]
pub struct ParseOrderError(pub String);
