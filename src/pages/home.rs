//! Landing route: sign-in for known visitors, registration for new ones.

use leptos::prelude::*;

use crate::pages::login::LoginPage;
use crate::pages::register::RegistrationPage;
use crate::state::auth::AuthState;

/// A stored username means this browser has signed in before, so lead with
/// the login form; otherwise lead with registration.
#[component]
pub fn HomePage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let known_user = move || auth.with(|state| !state.effective_identity().username.is_empty());

    view! {
        <Show when=known_user fallback=|| view! { <RegistrationPage/> }>
            <LoginPage/>
        </Show>
    }
}
