//! Sign-in page: email + password against `POST /login`.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::scope::RequestScope;
use crate::state::auth::AuthState;

#[cfg(any(test, feature = "hydrate"))]
fn validate_login_input(email: &str, password: &str) -> Result<(String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() {
        return Err("Enter both email and password.");
    }
    Ok((email.to_owned(), password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn login_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Failed(_) | ApiError::Unavailable => "Login failed.".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
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

        #[cfg(feature = "hydrate")]
        {
            let (email_value, password_value) =
                match validate_login_input(&email.get(), &password.get()) {
                    Ok(values) => values,
                    Err(msg) => {
                        err_msg.set(msg.to_owned());
                        return;
                    }
                };
            busy.set(true);
            err_msg.set(String::new());

            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                let prior_auth_key =
                    crate::util::credentials::get(crate::util::credentials::CredentialKey::AuthKey);
                let result = crate::net::api::login(
                    &email_value,
                    &password_value,
                    prior_auth_key.as_deref(),
                    &scope,
                )
                .await;
                match result {
                    Ok(grant) => {
                        // Store write, then context replace, then navigation.
                        let identity = grant.into_identity(email_value);
                        identity.persist();
                        auth.update(|state| state.set_identity(identity));
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/gpt");
                        }
                    }
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => {
                        err_msg.set(login_error_message(&err));
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
            <h1>"Sign in"</h1>
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
                <button disabled=move || {
                    busy.get() || email.get().is_empty() || password.get().is_empty()
                }>
                    "Sign In"
                </button>
                <p>
                    "Need an account?"<br/>
                    <span class="inline"><a href="/register">"Sign Up"</a></span>
                </p>
                <p>
                    <span class="inline"><a href="/reset_password">"Forgot password?"</a></span>
                </p>
            </form>
        </section>
    }
}
