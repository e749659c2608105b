use super::*;

#[test]
fn set_password_error_message_uses_taxonomy_messages() {
    assert_eq!(set_password_error_message(&ApiError::Unauthorized), "Unauthorized.");
    assert_eq!(
        set_password_error_message(&ApiError::Conflict),
        "Missing username or password."
    );
    assert_eq!(set_password_error_message(&ApiError::NoResponse), "No server response.");
}

#[test]
fn set_password_error_message_falls_back_to_generic() {
    assert_eq!(set_password_error_message(&ApiError::Failed(400)), "Password reset failed.");
}
