//! Failure taxonomy for backend calls.
//!
//! ERROR HANDLING
//! ==============
//! A 401 anywhere is the single re-authenticate signal and is modeled as its
//! own variant so callers can force a logout without string matching. Backend
//! rejections carry the server's own detail text; transport failures carry a
//! debug message but are shown to the operator as generic connectivity
//! wording.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Outcome of a backend request that did not succeed.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    /// The backend answered 401: credentials are no longer accepted.
    #[error("unauthorized")]
    Unauthorized,

    /// The backend rejected the request with a non-2xx status.
    #[error("backend error ({status}): {detail}")]
    Backend { status: u16, detail: String },

    /// The request never produced a backend response.
    #[error("network error: {0}")]
    Network(String),
}

impl ApiError {
    /// Message shown to the operator in inline banners.
    pub fn user_message(&self) -> String {
        match self {
            Self::Unauthorized => "Session expired. Please sign in again.".to_owned(),
            Self::Backend { detail, .. } => detail.clone(),
            Self::Network(_) => {
                "Could not reach the server. Check your connection and try again.".to_owned()
            }
        }
    }

    /// Placeholder error for API calls reached during server rendering.
    pub(crate) fn ssr_unavailable() -> Self {
        Self::Network("not available during server rendering".to_owned())
    }
}
