//! Wire DTOs for the auth backend's JSON responses.
//!
//! DESIGN
//! ======
//! Field names mirror the backend's camelCase payloads via explicit serde
//! renames, so every flow deserializes the same token names the credential
//! store persists. Conversion into [`Identity`] is the only glue between the
//! wire shape and the session core.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::Deserialize;

use crate::state::auth::Identity;

/// Tokens granted by login, set-new-password, and update-password exchanges.
/// The username is the caller's; only the tokens come from the backend.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct SessionGrant {
    pub role: String,
    #[serde(rename = "authKey")]
    pub auth_key: String,
    #[serde(rename = "sessionKey")]
    pub session_key: String,
}

impl SessionGrant {
    /// Combine the grant with the submitted username into a full identity.
    pub fn into_identity(self, username: String) -> Identity {
        Identity {
            username,
            role: self.role,
            auth_key: self.auth_key,
            session_key: self.session_key,
        }
    }
}

/// Registration response. The session key is withheld until the email is
/// confirmed, so a fresh registration is stored but never authenticated.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct RegistrationGrant {
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "authKey", default)]
    pub auth_key: Option<String>,
}

impl RegistrationGrant {
    /// Partial identity for the registered-but-unconfirmed account.
    pub fn into_identity(self, username: String) -> Identity {
        Identity {
            username,
            role: self.role.unwrap_or_default(),
            auth_key: self.auth_key.unwrap_or_default(),
            session_key: String::new(),
        }
    }
}

/// Email-confirmation response; the backend echoes the full identity.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct ConfirmationGrant {
    pub username: String,
    pub role: String,
    #[serde(rename = "authKey")]
    pub auth_key: String,
    #[serde(rename = "sessionKey")]
    pub session_key: String,
}

impl ConfirmationGrant {
    pub fn into_identity(self) -> Identity {
        Identity {
            username: self.username,
            role: self.role,
            auth_key: self.auth_key,
            session_key: self.session_key,
        }
    }
}

/// Logout acknowledgement.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
pub struct LogoutAck {
    pub username: String,
}
