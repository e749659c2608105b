//! Element-level access gate.
//!
//! Same predicate as the route gate, but instead of redirecting it swaps the
//! wrapped element for a configurable fallback (empty by default). Used for
//! UI affordances like the header menu rather than navigable pages.

use leptos::prelude::*;

use crate::components::protected_route::gate_allows;
use crate::state::auth::AuthState;

/// Render `children` for an authorized session, `fallback` otherwise.
#[component]
pub fn Protected(
    children: ChildrenFn,
    #[prop(optional, into)] fallback: ViewFn,
) -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    view! {
        <Show when=move || auth.with(gate_allows) fallback=move || fallback.run()>
            {children()}
        </Show>
    }
}
