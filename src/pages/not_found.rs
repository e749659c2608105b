//! Fallback page for unknown routes.

use leptos::prelude::*;

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <section>
            <h1>"Page not found"</h1>
            <p>
                <span class="inline"><a href="/">"Back to start"</a></span>
            </p>
        </section>
    }
}
