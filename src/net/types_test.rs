use super::*;

#[test]
fn session_grant_parses_camel_case_fields() {
    let grant: SessionGrant =
        serde_json::from_str(r#"{"role":"viewer","authKey":"k1","sessionKey":"s1"}"#)
            .expect("valid grant json");
    assert_eq!(grant.role, "viewer");
    assert_eq!(grant.auth_key, "k1");
    assert_eq!(grant.session_key, "s1");
}

#[test]
fn session_grant_builds_full_identity() {
    let grant = SessionGrant {
        role: "editor".to_owned(),
        auth_key: "k1".to_owned(),
        session_key: "s1".to_owned(),
    };
    let identity = grant.into_identity("a@b.com".to_owned());
    assert_eq!(identity.username, "a@b.com");
    assert!(identity.authenticated());
    assert!(identity.authorized());
}

#[test]
fn registration_grant_tolerates_missing_fields() {
    let grant: RegistrationGrant = serde_json::from_str("{}").expect("empty grant json");
    let identity = grant.into_identity("a@b.com".to_owned());
    assert_eq!(identity.username, "a@b.com");
    assert!(!identity.authenticated());
}

#[test]
fn registration_identity_stays_unauthenticated_without_session_key() {
    let grant: RegistrationGrant =
        serde_json::from_str(r#"{"role":"viewer","authKey":"k1"}"#).expect("valid grant json");
    let identity = grant.into_identity("a@b.com".to_owned());
    assert_eq!(identity.role, "viewer");
    assert_eq!(identity.auth_key, "k1");
    assert!(identity.session_key.is_empty());
    assert!(!identity.authenticated());
}

#[test]
fn confirmation_grant_carries_backend_username() {
    let grant: ConfirmationGrant = serde_json::from_str(
        r#"{"username":"a@b.com","role":"viewer","authKey":"k1","sessionKey":"s1"}"#,
    )
    .expect("valid grant json");
    let identity = grant.into_identity();
    assert_eq!(identity.username, "a@b.com");
    assert!(identity.authorized());
}

#[test]
fn logout_ack_parses_username() {
    let ack: LogoutAck = serde_json::from_str(r#"{"username":"a@b.com"}"#).expect("valid ack json");
    assert_eq!(ack.username, "a@b.com");
}
