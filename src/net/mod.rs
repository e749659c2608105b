//! Networking modules for the auth backend exchanges.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP exchanges, `types` defines the response wire
//! schema, `error` classifies failures for page handlers, and `scope` ties
//! request lifetimes to the initiating view.

pub mod api;
pub mod error;
pub mod scope;
pub mod types;
