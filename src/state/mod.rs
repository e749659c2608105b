//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State lives in `RwSignal` contexts provided at the app root, so components
//! read and replace snapshots through the tree rather than via globals.

pub mod auth;
