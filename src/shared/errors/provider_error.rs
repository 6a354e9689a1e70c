use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Failure shape shared by the identity platform and the document store.
///
/// Both collaborators report errors as a machine code token plus a human
/// message; the UI renders the pair verbatim, so the code is kept as an
/// opaque string rather than an enum.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[error("{code}: {message}")]
pub struct ProviderError {
    pub code: String,
    pub message: String,
}

impl ProviderError {
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
        }
    }
}
