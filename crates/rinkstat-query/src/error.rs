//! Error types for the query crate.

use thiserror::Error;

use crate::stat::Stat;

/// Errors raised while constructing a matcher or assembling a query.
///
/// Both variants are construction-time failures. Evaluating a matcher that
/// was built successfully never fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    /// A constraint named a counter the record type does not expose.
    #[error("unknown field '{field}' (expected one of: {})", Stat::expected_names())]
    UnknownField { field: String },

    /// `one_of` was called with no alternatives and an empty chain.
    #[error("empty query: one_of needs at least one alternative")]
    EmptyQuery,
}

/// Errors raised by a record source.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source payload could not be decoded.
    #[cfg(feature = "json")]
    #[error("invalid record payload: {0}")]
    Json(#[from] serde_json::Error),

    /// The underlying reader failed.
    #[error("failed to read records: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for query construction.
pub type Result<T> = std::result::Result<T, QueryError>;
