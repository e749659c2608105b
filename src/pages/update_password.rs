//! Update-password page for signed-in users: current password plus new one.

#[cfg(test)]
#[path = "update_password_test.rs"]
mod update_password_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::scope::RequestScope;
use crate::state::auth::AuthState;
use crate::util::validation::is_valid_password;

#[cfg(any(test, feature = "hydrate"))]
fn validate_update_input(
    email: &str,
    password: &str,
    new_password: &str,
) -> Result<(String, String, String), &'static str> {
    let email = email.trim();
    if email.is_empty() || password.is_empty() || new_password.is_empty() {
        return Err("Enter email, current password and new password.");
    }
    if !is_valid_password(new_password) {
        return Err("Invalid password.");
    }
    Ok((email.to_owned(), password.to_owned(), new_password.to_owned()))
}

#[cfg(any(test, feature = "hydrate"))]
fn update_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Failed(_) | ApiError::Unavailable => "Password reset failed.".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn UpdatePasswordPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
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
            let (email_value, password_value, new_password_value) =
                match validate_update_input(&email.get(), &password.get(), &new_password.get()) {
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
                let result = crate::net::api::update_password(
                    &email_value,
                    &password_value,
                    &new_password_value,
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
                        err_msg.set(update_error_message(&err));
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
                <label for="new-password">"New password:"</label>
                <input
                    type="password"
                    id="new-password"
                    prop:value=move || new_password.get()
                    on:input=move |ev| {
                        new_password.set(event_target_value(&ev));
                        err_msg.set(String::new());
                    }
                    required
                />
                <button disabled=move || {
                    busy.get()
                        || email.get().is_empty()
                        || password.get().is_empty()
                        || new_password.get().is_empty()
                }>
                    "Update Password"
                </button>
                <p>
                    "Happy with your password?"<br/>
                    <span class="inline"><a href="/login">"Sign In"</a></span>
                </p>
            </form>
        </section>
    }
}
