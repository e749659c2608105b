//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! An `RwSignal<AuthState>` is provided via context at the app root and
//! seeded from the credential store in a client-side effect, so the first
//! render on both server and client sees the same unhydrated state. Pages
//! replace the identity snapshot wholesale after a successful exchange and
//! are responsible for also persisting it through `util::credentials`; the
//! context never writes storage behind a caller's back. Route and element
//! gates read the snapshot to decide what renders.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::util::credentials::{self, CredentialKey};

/// Roles granted access to protected content. Membership, not hierarchy.
pub const ALLOWED_ROLES: [&str; 3] = ["viewer", "editor", "admin"];

/// The persisted identity tuple for the current session.
///
/// All fields are opaque strings received from the backend; an empty field is
/// equivalent to an absent one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Identity {
    pub username: String,
    pub role: String,
    pub auth_key: String,
    pub session_key: String,
}

impl Identity {
    fn fields(&self) -> [(CredentialKey, &str); 4] {
        [
            (CredentialKey::Username, self.username.as_str()),
            (CredentialKey::Role, self.role.as_str()),
            (CredentialKey::AuthKey, self.auth_key.as_str()),
            (CredentialKey::SessionKey, self.session_key.as_str()),
        ]
    }

    fn from_reader(read: impl Fn(CredentialKey) -> Option<String>) -> Identity {
        Identity {
            username: read(CredentialKey::Username).unwrap_or_default(),
            role: read(CredentialKey::Role).unwrap_or_default(),
            auth_key: read(CredentialKey::AuthKey).unwrap_or_default(),
            session_key: read(CredentialKey::SessionKey).unwrap_or_default(),
        }
    }

    /// Rebuild the identity from the credential store.
    pub fn load() -> Identity {
        Identity::from_reader(credentials::get)
    }

    /// `load` against an injected backend pair.
    #[cfg(test)]
    pub(crate) fn load_with(backend: &impl credentials::CredentialBackend) -> Identity {
        Identity::from_reader(|key| credentials::get_with(backend, key))
    }

    /// Persist all four fields through the store's single write path.
    pub fn persist(&self) {
        for (key, value) in self.fields() {
            credentials::set(key, value);
        }
    }

    /// `persist` against an injected backend pair.
    #[cfg(test)]
    pub(crate) fn persist_with(&self, backend: &mut impl credentials::CredentialBackend) {
        for (key, value) in self.fields() {
            credentials::set_with(backend, key, value);
        }
    }

    /// All four fields present and non-empty.
    pub fn authenticated(&self) -> bool {
        !self.username.is_empty()
            && !self.role.is_empty()
            && !self.auth_key.is_empty()
            && !self.session_key.is_empty()
    }

    /// Authenticated with a role in [`ALLOWED_ROLES`].
    pub fn authorized(&self) -> bool {
        self.authenticated() && ALLOWED_ROLES.contains(&self.role.as_str())
    }
}

/// Shared session snapshot provided via Leptos context.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthState {
    /// Most recently committed identity.
    pub identity: Identity,
    /// Whether the snapshot has been seeded from the credential store.
    pub hydrated: bool,
}

impl AuthState {
    /// Seed the snapshot from the credential store. Runs from a client-side
    /// effect after hydration so a reload restores session state.
    pub fn from_store() -> AuthState {
        AuthState { identity: Identity::load(), hydrated: true }
    }

    /// Replace the identity wholesale. Callers persist separately.
    pub fn set_identity(&mut self, identity: Identity) {
        self.identity = identity;
        self.hydrated = true;
    }

    /// Identity used for gating decisions. Empty until the snapshot has been
    /// seeded, which keeps the first client render auth-independent and in
    /// agreement with the server-rendered output.
    pub fn effective_identity(&self) -> Identity {
        if self.hydrated { self.identity.clone() } else { Identity::default() }
    }
}
