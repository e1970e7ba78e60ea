use thiserror::Error;

/// Errors the query engine originates itself.
///
/// Source failures are never caught or translated here; they belong to the
/// row provider. Empty result sets and missing recognized columns are not
/// errors at all.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QueryError {
    #[error("invalid query: {reason}")]
    InvalidQuery { reason: String },
    #[error("page {requested} out of range (valid: 1..={total_pages})")]
    PageOutOfRange { requested: usize, total_pages: usize },
}

pub type Result<T> = std::result::Result<T, QueryError>;
