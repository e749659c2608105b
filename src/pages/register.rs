//! Registration page with live field validation against `POST /register`.
//!
//! A successful registration stores the partial identity (no session key
//! until the email is confirmed) and swaps to a check-your-email notice.

#[cfg(test)]
#[path = "register_test.rs"]
mod register_test;

use leptos::prelude::*;

#[cfg(any(test, feature = "hydrate"))]
use crate::net::error::ApiError;
use crate::net::scope::RequestScope;
use crate::state::auth::AuthState;
use crate::util::validation::{is_valid_email, is_valid_password, validate_credentials};

#[cfg(any(test, feature = "hydrate"))]
fn register_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Conflict => "Username already taken.".to_owned(),
        ApiError::Failed(_) | ApiError::Unavailable => "Registration failed.".to_owned(),
        other => other.to_string(),
    }
}

/// Check/cross class for a live validity marker.
fn validity_class(valid: bool, value_present: bool) -> &'static str {
    match (valid, value_present) {
        (true, _) => "valid",
        (false, false) => "hidden",
        (false, true) => "invalid",
    }
}

#[component]
pub fn RegistrationPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    let email = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let confirm = RwSignal::new(String::new());
    let err_msg = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let success = RwSignal::new(false);

    let email_valid = Memo::new(move |_| is_valid_email(&email.get()));
    let password_valid = Memo::new(move |_| is_valid_password(&password.get()));
    let match_valid = Memo::new(move |_| password.get() == confirm.get());

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
            busy.set(true);
            err_msg.set(String::new());
            let email_value = email.get();
            let password_value = password.get();

            let scope = scope.clone();
            leptos::task::spawn_local(async move {
                match crate::net::api::register(&email_value, &password_value, &scope).await {
                    Ok(grant) => {
                        let identity = grant.into_identity(email_value);
                        identity.persist();
                        auth.update(|state| state.set_identity(identity));
                        email.set(String::new());
                        password.set(String::new());
                        confirm.set(String::new());
                        success.set(true);
                    }
                    Err(err) if err.is_cancelled() => {}
                    Err(err) => {
                        err_msg.set(register_error_message(&err));
                        busy.set(false);
                    }
                }
            });
        }
    };

    let form = move || {
        view! {
            <section>
                <p class=move || if err_msg.get().is_empty() { "aria-hidden" } else { "error" } aria-live="assertive">
                    {move || err_msg.get()}
                </p>
                <h1>"Register"</h1>
                <form on:submit=on_submit.clone()>
                    <label for="username">
                        "Email:"
                        <span class=move || validity_class(email_valid.get(), !email.get().is_empty())>
                            {move || if email_valid.get() { "✓" } else { "✗" }}
                        </span>
                    </label>
                    <input
                        type="email"
                        id="username"
                        prop:value=move || email.get()
                        on:input=move |ev| {
                            email.set(event_target_value(&ev));
                            err_msg.set(String::new());
                        }
                        required
                        aria-invalid=move || if email_valid.get() { "false" } else { "true" }
                        aria-describedby="uidnote"
                    />
                    <p id="uidnote" class=move || {
                        if !email.get().is_empty() && !email_valid.get() { "instructions" } else { "aria-hidden" }
                    }>
                        "Please enter a valid email address."
                    </p>

                    <label for="password">
                        "Password:"
                        <span class=move || validity_class(password_valid.get(), !password.get().is_empty())>
                            {move || if password_valid.get() { "✓" } else { "✗" }}
                        </span>
                    </label>
                    <input
                        type="password"
                        id="password"
                        prop:value=move || password.get()
                        on:input=move |ev| {
                            password.set(event_target_value(&ev));
                            err_msg.set(String::new());
                        }
                        required
                        aria-invalid=move || if password_valid.get() { "false" } else { "true" }
                        aria-describedby="pwdnote"
                    />
                    <p id="pwdnote" class=move || {
                        if !password.get().is_empty() && !password_valid.get() { "instructions" } else { "aria-hidden" }
                    }>
                        "8 to 24 characters."<br/>
                        "Must include uppercase and lowercase letters, a number, and at least one special character."<br/>
                        "Letters, numbers, underscores, hyphens allowed."<br/>
                        "Allowed special characters: ! @ # $ %"
                    </p>

                    <label for="confirm-password">
                        "Confirm Password:"
                        <span class=move || validity_class(
                            match_valid.get() && password_valid.get(),
                            !confirm.get().is_empty(),
                        )>
                            {move || if match_valid.get() { "✓" } else { "✗" }}
                        </span>
                    </label>
                    <input
                        type="password"
                        id="confirm-password"
                        prop:value=move || confirm.get()
                        on:input=move |ev| {
                            confirm.set(event_target_value(&ev));
                            err_msg.set(String::new());
                        }
                        required
                        aria-invalid=move || if match_valid.get() { "false" } else { "true" }
                        aria-describedby="confirmnote"
                    />
                    <p id="confirmnote" class=move || {
                        if !confirm.get().is_empty() && !match_valid.get() { "instructions" } else { "aria-hidden" }
                    }>
                        "Must match the password input field."
                    </p>

                    <button disabled=move || {
                        busy.get() || !email_valid.get() || !password_valid.get() || !match_valid.get()
                    }>
                        "Sign Up"
                    </button>
                </form>
                <p>
                    "Already registered?"<br/>
                    <span class="inline"><a href="/login">"Sign In"</a></span>
                </p>
            </section>
        }
    };

    view! {
        <Show when=move || success.get() fallback=form>
            <section>
                <p>"Please check your email for a confirmation link."</p>
            </section>
        </Show>
    }
}
