use super::*;

#[test]
fn validate_login_input_trims_email_and_requires_both_fields() {
    assert_eq!(
        validate_login_input("  a@b.com  ", "pw"),
        Ok(("a@b.com".to_owned(), "pw".to_owned()))
    );
    assert_eq!(validate_login_input("", "pw"), Err("Enter both email and password."));
    assert_eq!(validate_login_input("a@b.com", ""), Err("Enter both email and password."));
    assert_eq!(validate_login_input("   ", "pw"), Err("Enter both email and password."));
}

#[test]
fn login_error_message_uses_taxonomy_messages() {
    assert_eq!(login_error_message(&ApiError::NoResponse), "No server response.");
    assert_eq!(login_error_message(&ApiError::Unauthorized), "Unauthorized.");
    assert_eq!(login_error_message(&ApiError::Conflict), "Missing username or password.");
}

#[test]
fn login_error_message_falls_back_to_generic() {
    assert_eq!(login_error_message(&ApiError::Failed(400)), "Login failed.");
    assert_eq!(login_error_message(&ApiError::Unavailable), "Login failed.");
}
