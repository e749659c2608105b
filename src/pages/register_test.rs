use super::*;

#[test]
fn register_error_message_flags_duplicate_username() {
    assert_eq!(register_error_message(&ApiError::Conflict), "Username already taken.");
}

#[test]
fn register_error_message_keeps_taxonomy_messages() {
    assert_eq!(register_error_message(&ApiError::NoResponse), "No server response.");
    assert_eq!(register_error_message(&ApiError::Server), "Server error.");
    assert_eq!(register_error_message(&ApiError::Unauthorized), "Unauthorized.");
}

#[test]
fn register_error_message_falls_back_to_generic() {
    assert_eq!(register_error_message(&ApiError::Failed(422)), "Registration failed.");
}

#[test]
fn validity_class_tracks_field_state() {
    assert_eq!(validity_class(true, true), "valid");
    assert_eq!(validity_class(true, false), "valid");
    assert_eq!(validity_class(false, false), "hidden");
    assert_eq!(validity_class(false, true), "invalid");
}
