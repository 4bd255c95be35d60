//! Transport and backend error taxonomy.

use thiserror::Error;

/// Failure of a remote operation.
///
/// `Rejected` is the backend saying no (a `success: false` envelope with a
/// message); the other variants are transport-level. None of these corrupt
/// local state; callers surface them as a notice and move on.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("network error: {0}")]
    Network(String),

    #[error("API error ({0}): {1}")]
    Api(u16, String),

    #[error("request rejected: {0}")]
    Rejected(String),

    #[error("parse error: {0}")]
    Parse(String),
}
