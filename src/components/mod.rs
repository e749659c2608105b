//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render shared chrome and the access gates while reading session
//! state from the Leptos context providers.

pub mod layout;
pub mod modal;
pub mod protected_element;
pub mod protected_route;
