use thiserror::Error;

/// Failures raised by a row provider.
///
/// The query engine never retries or suppresses these; they propagate to
/// the caller unchanged so the presentation layer can distinguish a failed
/// fetch from an empty result.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source unavailable: {reason}")]
    Unavailable { reason: String },
    #[error("authorization failed: {reason}")]
    AuthorizationFailed { reason: String },
}

pub type Result<T> = std::result::Result<T, SourceError>;
