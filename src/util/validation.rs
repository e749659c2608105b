//! Field-level input validation for the registration and password forms.
//!
//! DESIGN
//! ======
//! These checks exist at the UI layer only; the session core accepts whatever
//! the backend returns. The password policy matches what the backend enforces
//! server-side, so rejected submissions never reach the network.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

const SPECIAL_CHARS: &str = "!@#$%";

/// Loose email-shape check: `local@domain.tld` with non-empty parts.
pub fn is_valid_email(value: &str) -> bool {
    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };
    if local.is_empty() || domain.contains('@') {
        return false;
    }
    let Some((host, tld)) = domain.rsplit_once('.') else {
        return false;
    };
    !host.is_empty() && tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic())
}

/// Password policy: 8 to 24 characters, at least one lowercase letter, one
/// uppercase letter, one digit and one of `!@#$%`; letters, digits,
/// underscores, hyphens and those specials are the only characters allowed.
pub fn is_valid_password(value: &str) -> bool {
    let len = value.chars().count();
    if !(8..=24).contains(&len) {
        return false;
    }
    let allowed = |c: char| c.is_ascii_alphanumeric() || c == '_' || c == '-' || SPECIAL_CHARS.contains(c);
    value.chars().all(allowed)
        && value.chars().any(|c| c.is_ascii_lowercase())
        && value.chars().any(|c| c.is_ascii_uppercase())
        && value.chars().any(|c| c.is_ascii_digit())
        && value.chars().any(|c| SPECIAL_CHARS.contains(c))
}

/// Extract the emailed access key from its query parameter.
///
/// # Errors
///
/// Returns the user-facing message when the parameter is missing or empty.
pub fn access_key_from_query(value: Option<String>) -> Result<String, &'static str> {
    match value {
        Some(key) if !key.is_empty() => Ok(key),
        _ => Err("Missing access key."),
    }
}

/// Validate the shared email/password/confirm triple used by the
/// registration and set-new-password forms.
///
/// # Errors
///
/// Returns the user-facing message for the first failing field.
pub fn validate_credentials(
    email: &str,
    password: &str,
    confirm: &str,
) -> Result<(), &'static str> {
    if !is_valid_email(email) {
        return Err("Invalid username.");
    }
    if !is_valid_password(password) {
        return Err("Invalid password.");
    }
    if password != confirm {
        return Err("Passwords don't match.");
    }
    Ok(())
}
