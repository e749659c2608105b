//! Route-level access gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Wraps a protected subtree; an unauthorized visitor is replaced with a
//! redirect to `/` before the subtree ever renders. Denial is a normal
//! branch, not an error, so nothing is logged or surfaced. Until the session
//! snapshot has been seeded the gate renders nothing on both server and
//! client, so hydration never sees mismatched branches.

#[cfg(test)]
#[path = "protected_route_test.rs"]
mod protected_route_test;

use leptos::either::EitherOf3;
use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::state::auth::AuthState;

/// Whether the gate opens for the current session snapshot.
///
/// Closed until the snapshot has been seeded; the first client render stays
/// auth-independent and agrees with the server-rendered output.
pub(crate) fn gate_allows(state: &AuthState) -> bool {
    state.effective_identity().authorized()
}

/// Render `children` only for an authorized session; otherwise redirect to
/// the root path. The redirect is withheld until the snapshot has been
/// seeded so an authorized reload is not bounced off its own page.
#[component]
pub fn ProtectedRoute(children: ChildrenFn) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    move || {
        let state = auth.get();
        if !state.hydrated {
            EitherOf3::A(())
        } else if gate_allows(&state) {
            EitherOf3::B(children())
        } else {
            EitherOf3::C(view! { <Redirect path="/"/> })
        }
    }
}
