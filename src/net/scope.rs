//! Request lifetime scoping for view-bound exchanges.
//!
//! SYSTEM CONTEXT
//! ==============
//! Each page creates one [`RequestScope`] and cancels it from `on_cleanup`.
//! The exchange layer checks the scope after every response, so a request
//! that completes after its view unmounted surfaces as `Cancelled` and never
//! mutates state for a view that is no longer active.

#[cfg(test)]
#[path = "scope_test.rs"]
mod scope_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

/// Cancellation token tying in-flight requests to the initiating view.
#[derive(Clone, Debug, Default)]
pub struct RequestScope {
    cancelled: Arc<AtomicBool>,
}

impl RequestScope {
    /// Create a scope for one view's requests.
    pub fn new() -> RequestScope {
        RequestScope::default()
    }

    /// Cancel every request issued under this scope. Responses that arrive
    /// afterwards are discarded by the exchange layer.
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    /// Whether the scope has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}
