use super::*;

#[test]
fn validate_update_input_requires_all_three_fields() {
    let err = Err("Enter email, current password and new password.");
    assert_eq!(validate_update_input("", "old", "Abcdef1!"), err);
    assert_eq!(validate_update_input("a@b.com", "", "Abcdef1!"), err);
    assert_eq!(validate_update_input("a@b.com", "old", ""), err);
}

#[test]
fn validate_update_input_enforces_new_password_policy() {
    assert_eq!(validate_update_input("a@b.com", "old", "weak"), Err("Invalid password."));
}

#[test]
fn validate_update_input_trims_email() {
    assert_eq!(
        validate_update_input(" a@b.com ", "old", "Abcdef1!"),
        Ok(("a@b.com".to_owned(), "old".to_owned(), "Abcdef1!".to_owned()))
    );
}

#[test]
fn update_error_message_uses_taxonomy_messages() {
    assert_eq!(update_error_message(&ApiError::Unauthorized), "Unauthorized.");
    assert_eq!(update_error_message(&ApiError::NoResponse), "No server response.");
}

#[test]
fn update_error_message_falls_back_to_generic() {
    assert_eq!(update_error_message(&ApiError::Failed(400)), "Password reset failed.");
}
