use super::*;

#[test]
fn fresh_scope_is_live() {
    assert!(!RequestScope::new().is_cancelled());
}

#[test]
fn cancel_is_visible_through_clones() {
    let scope = RequestScope::new();
    let handler_copy = scope.clone();
    scope.cancel();
    assert!(handler_copy.is_cancelled());
}

#[test]
fn cancel_is_idempotent() {
    let scope = RequestScope::new();
    scope.cancel();
    scope.cancel();
    assert!(scope.is_cancelled());
}
