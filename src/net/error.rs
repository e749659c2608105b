//! Error taxonomy for backend auth exchanges.
//!
//! ERROR HANDLING
//! ==============
//! Every exchange failure is caught at the initiating page handler and shown
//! as a local message; nothing propagates up the tree. Identity and the
//! credential store are only touched after a fully successful exchange.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Failure modes of one auth exchange, keyed to user-facing messages.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// Transport failure; no response was received.
    #[error("No server response.")]
    NoResponse,
    /// HTTP 401; the backend rejected the credentials.
    #[error("Unauthorized.")]
    Unauthorized,
    /// HTTP 409; duplicate or missing fields, flow-specific meaning.
    #[error("Missing username or password.")]
    Conflict,
    /// HTTP 5xx.
    #[error("Server error.")]
    Server,
    /// Any other non-success status. Pages render their own generic message.
    #[error("Request failed with status {0}.")]
    Failed(u16),
    /// Aborted because the initiating view was torn down. Handlers drop this
    /// silently; a dead view must not surface messages or mutate state.
    #[error("Request cancelled.")]
    Cancelled,
    /// Exchange attempted outside a browser context.
    #[error("Not available on server.")]
    Unavailable,
}

impl ApiError {
    /// Whether a handler should skip all state and message updates.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

/// Map a non-success HTTP status to its failure class.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn classify_status(status: u16) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        409 => ApiError::Conflict,
        500.. => ApiError::Server,
        other => ApiError::Failed(other),
    }
}
