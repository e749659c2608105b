//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns one auth exchange (or none) and delegates shared rendering
//! to `components`. Pages write the credential store and session context only
//! after a fully successful exchange.

pub mod chat;
pub mod confirm_email;
pub mod home;
pub mod login;
pub mod logout;
pub mod not_found;
pub mod register;
pub mod reset_password;
pub mod set_new_password;
pub mod unauthorized;
pub mod update_password;
