//! Static notice for visitors without a permitted role.

use leptos::prelude::*;

#[component]
pub fn UnauthorizedPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Unauthorized"</h1>
            <p>"You do not have access to this page."</p>
            <p>
                <span class="inline"><a href="/">"Back to start"</a></span>
            </p>
        </section>
    }
}
