//! Errors raised while decoding parser output.

use thiserror::Error;

/// Failure to turn external input into nodes.
#[derive(Debug, Error)]
pub enum AstError {
    /// The input was not a well-formed node or value document.
    #[error("malformed node JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// A kind name that the enumeration does not list.
    #[error("unknown node kind `{0}`")]
    UnknownKind(String),
}
