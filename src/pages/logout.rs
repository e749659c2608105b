//! Logout page: ends the session then clears local credentials.
//!
//! Local state is cleared even when the exchange fails; a client-side logout
//! is unconditional, but the failure is logged so it is not silently lost.

use leptos::prelude::*;
use leptos_router::components::Redirect;

use crate::net::scope::RequestScope;
use crate::state::auth::{AuthState, Identity};

#[component]
pub fn LogoutPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let done = RwSignal::new(false);

    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            // Read the store directly; the seeding effect may not have run yet.
            let identity = Identity::load();
            let result =
                crate::net::api::logout(&identity.username, &identity.auth_key, &scope).await;
            match result {
                Ok(_) => {}
                Err(err) if err.is_cancelled() => return,
                Err(err) => log::warn!("logout exchange failed: {err}"),
            }
            crate::util::credentials::clear();
            auth.update(|state| state.set_identity(Identity::default()));
            done.set(true);
        });
    }

    view! {
        <section>
            <Show when=move || done.get()>
                <Redirect path="/"/>
            </Show>
            <p>"Signing out..."</p>
        </section>
    }
}
