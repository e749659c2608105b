//! Set-new-password page, reached from a reset email.
//!
//! The emailed link carries an `accessKey` query parameter that authorizes
//! the change; field validation matches the registration form.

#[cfg(test)]
#[path = "set_new_password_test.rs"]
mod set_new_password_test;

use leptos::prelude::*;
use leptos_router::hooks::use_query_map;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::scope::RequestScope;
use crate::state::auth::AuthState;
use crate::util::credentials::{self, CredentialKey};
use crate::util::validation::validate_credentials;

#[cfg(any(test, feature = "hydrate"))]
fn set_password_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Failed(_) | ApiError::Unavailable => "Password reset failed.".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn SetNewPasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let query = use_query_map();
    let email = RwSignal::new(credentials::get(CredentialKey::Username).unwrap_or_default());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let err_msg = RwSignal::new(String::new());
    let busy = RwSignal::new(false);

    let scope = RequestScope::new();
    {
        let scope = scope.clone();
        on_cleanup(move || scope.cancel());
    }

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy.get() {
            return;
        }
        if let Err(msg) = validate_credentials(&email.get(), &password.get(), &confirm.get()) {
            err_msg.set(msg.to_owned());
            return;
        }

        #[cfg(feature = "hydrate")]
        {
            let query_value = query.get_untracked().get("accessKey");
            let access_key = match crate::util::validation::access_key_from_query(query_value) {
                Ok(key) => key,
                Err(msg) => {
                    err_msg.set(msg.to_owned());
                    return;
                }
            };
            busy.set(true);
            err_msg.set(String::new());
            let email_value = email.get();
            let password_value = password.get();

            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                let result = crate::net::api::set_new_password(
                    &email_value,
                    &access_key,
                    &password_value,
                    &scope,
                )
                .await;
                match result {
                    Ok(grant) => {
                        let identity = grant.into_identity(email_value);
                        identity.persist();
                        auth.update(|state| state.set_identity(identity));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/gpt");
                        }
                    }
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => {
                        err_msg.set(set_password_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
    };

    view! {
        <section>
            <p class=move || if err_msg.get().is_empty() { "aria-hidden" } else { "error" } aria-live="assertive">
                {move || err_msg.get()}
            </p>
            <h1>"Change password"</h1>
            <form on:submit=on_submit>
                <label for="username">"Email:"</label>
                <input
                    type="email"
                    id="username"
                    prop:value=move || email.get()
                    on:input=move |ev| {
                        email.set(event_target_value(&ev));
                        err_msg.set(String::new());
                    }
                    required
                />
                <label for="password">"Password:"</label>
                <input
                    type="password"
                    id="password"
                    prop:value=move || password.get()
                    on:input=move |ev| {
                        password.set(event_target_value(&ev));
                        err_msg.set(String::new());
                    }
                    required
                />
                <label for="confirm-password">"Confirm Password:"</label>
                <input
                    type="password"
                    id="confirm-password"
                    prop:value=move || confirm.get()
                    on:input=move |ev| {
                        confirm.set(event_target_value(&ev));
                        err_msg.set(String::new());
                    }
                    required
                />
                <button disabled=move || {
                    busy.get()
                        || email.get().is_empty()
                        || password.get().is_empty()
                        || confirm.get().is_empty()
                }>
                    "Set New Password"
                </button>
                <p>
                    "Found your password?"<br/>
                    <span class="inline"><a href="/login">"Sign In"</a></span>
                </p>
            </form>
        </section>
    }
}
