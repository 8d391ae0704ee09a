//! Error types for address parsing and field extraction.

use thiserror::Error;

/// Rejection of an address or fieldnames string at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AddressError {
    #[error("malformed path segment '{segment}': {reason}")]
    MalformedPath { segment: String, reason: String },

    #[error(
        "fieldnames must be in the form 'record_type:name,name,name;record_type:name,name,name', found '{segment}'"
    )]
    MalformedFieldnames { segment: String },
}

impl AddressError {
    pub(crate) fn malformed_path(segment: &str, reason: impl Into<String>) -> Self {
        Self::MalformedPath {
            segment: segment.to_string(),
            reason: reason.into(),
        }
    }
}

/// Failure while applying an address to a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ExtractError {
    #[error("column {index} out of range for row with {len} cells")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Top-level error for the command-line tools.
#[derive(Debug, Error)]
pub enum TabrecError {
    #[error("line {line}: {source}")]
    Extract {
        line: usize,
        #[source]
        source: ExtractError,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
