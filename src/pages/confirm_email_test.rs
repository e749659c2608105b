use super::*;

#[test]
fn confirm_error_message_uses_taxonomy_messages() {
    assert_eq!(confirm_error_message(&ApiError::Unauthorized), "Unauthorized.");
    assert_eq!(confirm_error_message(&ApiError::NoResponse), "No server response.");
}

#[test]
fn confirm_error_message_falls_back_to_generic() {
    assert_eq!(confirm_error_message(&ApiError::Failed(400)), "Email confirmation failed.");
}
