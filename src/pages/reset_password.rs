//! Reset-password request page: asks the backend to email a reset link.

#[cfg(test)]
#[path = "reset_password_test.rs"]
mod reset_password_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::scope::RequestScope;

#[cfg(any(test, feature = "hydrate"))]
fn validate_reset_input(email: &str) -> Result<String, &'static str> {
    let email = email.trim();
    if email.is_empty() {
        return Err("Enter an email first.");
    }
    Ok(email.to_owned())
}

#[cfg(any(test, feature = "hydrate"))]
fn reset_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Failed(_) | ApiError::Unavailable => "Password reset failed.".to_owned(),
        other => other.to_string(),
    }
}

#[component]
pub fn ResetPasswordPage() -> impl IntoView {
    let email = RwSignal::new(String::new());
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
            let email_value = match validate_reset_input(&email.get()) {
                Ok(value) => value,
                Err(msg) => {
                    err_msg.set(msg.to_owned());
                    return;
                }
            };
            busy.set(true);
            err_msg.set(String::new());

            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::request_password_reset(&email_value, &scope).await {
                    Ok(()) => {
                        // Remember who asked so set-new-password can prefill.
                        crate::util::credentials::set(
                            crate::util::credentials::CredentialKey::Username,
                            &email_value,
                        );
                        if let Some(window) = web_sys::window() {
                            let _ = window.location().set_href("/login");
                        }
                    }
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => {
                        err_msg.set(reset_error_message(&err));
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
            <h1>"Reset Password"</h1>
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
                <button disabled=move || busy.get() || email.get().is_empty()>
                    "Reset password"
                </button>
                <p>
                    <span class="inline"><a href="/">"Cancel"</a></span>
                </p>
            </form>
        </section>
    }
}
