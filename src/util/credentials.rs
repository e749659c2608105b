//! Dual-backend credential store for session identity fields.
//!
//! SYSTEM CONTEXT
//! ==============
//! Identity fields must survive page reloads, so every write fans out to both
//! a domain cookie (server-amendable, best effort) and `localStorage`
//! (durable). Reads prefer the cookie and fall back to `localStorage`. All
//! flows go through [`CredentialKey`], so the store cannot drift into
//! mismatched key names between writers and readers.
//!
//! TRADE-OFFS
//! ==========
//! Persistence is hydrate-only; SSR paths see an empty store and no-op on
//! write, which keeps server rendering deterministic.

#[cfg(test)]
#[path = "credentials_test.rs"]
mod credentials_test;

/// The fixed set of persisted identity keys.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CredentialKey {
    Username,
    Role,
    AuthKey,
    SessionKey,
}

impl CredentialKey {
    /// Every key, in storage order.
    pub const ALL: [CredentialKey; 4] = [
        CredentialKey::Username,
        CredentialKey::Role,
        CredentialKey::AuthKey,
        CredentialKey::SessionKey,
    ];

    /// The wire/storage name shared by both backends.
    pub fn as_str(self) -> &'static str {
        match self {
            CredentialKey::Username => "username",
            CredentialKey::Role => "role",
            CredentialKey::AuthKey => "authKey",
            CredentialKey::SessionKey => "sessionKey",
        }
    }
}

/// Storage backend pair behind the store.
///
/// The browser implementation maps the short-lived store onto `document.cookie`
/// and the durable store onto `localStorage`. Tests substitute an in-memory
/// pair to exercise the fan-out and fallback logic on native.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) trait CredentialBackend {
    fn short_lived_get(&self, key: &str) -> Option<String>;
    fn short_lived_set(&mut self, key: &str, value: &str);
    fn durable_get(&self, key: &str) -> Option<String>;
    fn durable_set(&mut self, key: &str, value: &str);
}

/// Look up `key`: short-lived store first, durable fallback.
///
/// An empty short-lived value does not shadow a durable one. Returns `None`
/// when neither backend holds a value; never panics.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn get_with(backend: &impl CredentialBackend, key: CredentialKey) -> Option<String> {
    backend
        .short_lived_get(key.as_str())
        .filter(|v| !v.is_empty())
        .or_else(|| backend.durable_get(key.as_str()))
}

/// Write `value` for `key` to both backends through one path.
///
/// Empty values are written as-is; an explicit empty write is how a key is
/// cleared, and readers treat empty and absent identically.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn set_with(backend: &mut impl CredentialBackend, key: CredentialKey, value: &str) {
    backend.durable_set(key.as_str(), value);
    backend.short_lived_set(key.as_str(), value);
}

/// Write explicit empty values for all four keys to both backends.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn clear_with(backend: &mut impl CredentialBackend) {
    for key in CredentialKey::ALL {
        set_with(backend, key, "");
    }
}

/// Extract `key`'s value from a `"; "`-separated cookie header.
///
/// First match wins, mirroring browser duplicate-name resolution.
#[cfg(any(test, feature = "hydrate"))]
pub(crate) fn cookie_value(header: &str, key: &str) -> Option<String> {
    header.split("; ").find_map(|pair| {
        let (name, value) = pair.split_once('=')?;
        (name == key).then(|| value.to_owned())
    })
}

#[cfg(feature = "hydrate")]
mod browser {
    use wasm_bindgen::JsCast;

    use super::{CredentialBackend, cookie_value};

    /// Backend over `document.cookie` + `window.localStorage`.
    pub(super) struct BrowserBackend;

    fn html_document() -> Option<web_sys::HtmlDocument> {
        web_sys::window()?.document()?.dyn_into().ok()
    }

    fn local_storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|w| w.local_storage().ok().flatten())
    }

    impl CredentialBackend for BrowserBackend {
        fn short_lived_get(&self, key: &str) -> Option<String> {
            let header = html_document()?.cookie().ok()?;
            cookie_value(&header, key)
        }

        fn short_lived_set(&mut self, key: &str, value: &str) {
            // One pair per assignment; the browser appends or updates in place.
            if let Some(doc) = html_document() {
                let _ = doc.set_cookie(&format!("{key}={value}; path=/"));
            }
        }

        fn durable_get(&self, key: &str) -> Option<String> {
            local_storage()?.get_item(key).ok().flatten()
        }

        fn durable_set(&mut self, key: &str, value: &str) {
            if let Some(storage) = local_storage() {
                let _ = storage.set_item(key, value);
            }
        }
    }
}

/// Read a credential from the browser store.
///
/// Returns `None` on the server and when no backend holds a value.
pub fn get(key: CredentialKey) -> Option<String> {
    #[cfg(feature = "hydrate")]
    {
        get_with(&browser::BrowserBackend, key)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = key;
        None
    }
}

/// Write a credential to both browser backends. No-op on the server.
pub fn set(key: CredentialKey, value: &str) {
    #[cfg(feature = "hydrate")]
    {
        set_with(&mut browser::BrowserBackend, key, value);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (key, value);
    }
}

/// Clear all four credentials from both browser backends.
pub fn clear() {
    #[cfg(feature = "hydrate")]
    {
        clear_with(&mut browser::BrowserBackend);
    }
}
