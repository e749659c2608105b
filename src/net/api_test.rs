use super::*;

#[test]
fn login_payload_omits_absent_prior_auth_key() {
    let payload = login_payload("a@b.com", "pw", None);
    assert_eq!(payload, serde_json::json!({ "username": "a@b.com", "password": "pw" }));
}

#[test]
fn login_payload_includes_prior_auth_key_when_present() {
    let payload = login_payload("a@b.com", "pw", Some("k0"));
    assert_eq!(
        payload,
        serde_json::json!({ "username": "a@b.com", "password": "pw", "authKey": "k0" })
    );
}

#[test]
fn register_payload_carries_credentials_only() {
    let payload = register_payload("a@b.com", "pw");
    assert_eq!(payload, serde_json::json!({ "username": "a@b.com", "password": "pw" }));
}

#[test]
fn confirm_email_payload_wraps_access_key() {
    assert_eq!(confirm_email_payload("AK1"), serde_json::json!({ "accessKey": "AK1" }));
}

#[test]
fn reset_password_payload_carries_username() {
    assert_eq!(reset_password_payload("a@b.com"), serde_json::json!({ "username": "a@b.com" }));
}

#[test]
fn set_new_password_payload_carries_key_and_password() {
    assert_eq!(
        set_new_password_payload("a@b.com", "AK1", "pw"),
        serde_json::json!({ "username": "a@b.com", "accessKey": "AK1", "password": "pw" })
    );
}

#[test]
fn update_password_payload_carries_both_passwords() {
    assert_eq!(
        update_password_payload("a@b.com", "old", "new"),
        serde_json::json!({ "username": "a@b.com", "password": "old", "newPassword": "new" })
    );
}

#[test]
fn logout_payload_carries_username_and_auth_key() {
    assert_eq!(
        logout_payload("a@b.com", "k1"),
        serde_json::json!({ "username": "a@b.com", "authKey": "k1" })
    );
}
