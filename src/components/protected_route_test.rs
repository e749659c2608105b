use super::*;
use crate::state::auth::Identity;

fn authorized_state() -> AuthState {
    AuthState {
        identity: Identity {
            username: "a@b.com".to_owned(),
            role: "viewer".to_owned(),
            auth_key: "k1".to_owned(),
            session_key: "s1".to_owned(),
        },
        hydrated: true,
    }
}

#[test]
fn gate_denies_empty_store() {
    // Unhydrated state falls back to the (empty on native) credential store.
    assert!(!gate_allows(&AuthState::default()));
}

#[test]
fn gate_grants_authorized_snapshot() {
    assert!(gate_allows(&authorized_state()));
}

#[test]
fn gate_stays_closed_before_snapshot_seeded() {
    // An unhydrated state with a stored session must still gate closed so
    // the hydration pass renders the same branch the server did.
    let mut state = authorized_state();
    state.hydrated = false;
    assert!(!gate_allows(&state));
}

#[test]
fn gate_denies_missing_session_key() {
    let mut state = authorized_state();
    state.identity.session_key.clear();
    assert!(!gate_allows(&state));
}

#[test]
fn gate_denies_unknown_role() {
    let mut state = authorized_state();
    state.identity.role = "root".to_owned();
    assert!(!gate_allows(&state));
}

#[test]
fn gate_denies_after_logout_clears_identity() {
    let mut state = authorized_state();
    state.set_identity(Identity::default());
    assert!(!gate_allows(&state));
}
