//! Email-confirmation landing page.
//!
//! The confirmation link carries an `accessKey` query parameter; the page
//! redeems it once on mount via `POST /confirm_email`, persists the full
//! identity the backend echoes back, and moves on to the chat screen.

#[cfg(test)]
#[path = "confirm_email_test.rs"]
mod confirm_email_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::scope::RequestScope;
use crate::state::auth::AuthState;

#[cfg(any(test, feature = "hydrate"))]
fn confirm_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Failed(_) | ApiError::Unavailable => "Email confirmation failed.".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn ConfirmEmailPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let err_msg = RwSignal::new(String::new());

    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    #[cfg(feature = "hydrate")]
    {
        let scope = scope.clone();
        leptos::task::spawn_local(async move {
            let query_value = query.get_untracked().get("accessKey");
            let access_key = match crate::util::validation::access_key_from_query(query_value) {
                Ok(key) => key,
                Err(msg) => {
                    err_msg.set(msg.to_owned());
                    return;
                }
            };
            match crate::net::api::confirm_email(&access_key, &scope).await {
                Ok(grant) => {
                    let identity = grant.into_identity();
                    identity.persist();
                    auth.update(|state| state.set_identity(identity));
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href("/gpt");
                    }
                }
                Err(err) if err.is_cancelled() => {}
                Err(err) => err_msg.set(confirm_error_message(&err)),
            }
        });
    }

    view! {
        <section>
            <p class=move || if err_msg.get().is_empty() { "aria-hidden" } else { "error" } aria-live="assertive">
                {move || err_msg.get()}
            </p>
            <h1>"Confirming your email"</h1>
            <p>"Hold on while we confirm your address."</p>
            <p>
                "Continue? "
                <span class="inline"><a href="/gpt">"Phys GPT"</a></span>
            </p>
        </section>
    }
}
