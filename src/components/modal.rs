//! Overlay + modal dialog used by the chat screen's references popup.

use leptos::prelude::*;

/// Full-screen overlay that closes the modal when the backdrop is clicked.
#[component]
pub fn Overlay(children: Children, on_close: Callback<()>) -> impl IntoView {
    view! {
        <div class="overlay" on:click=move |_| on_close.run(())>
            {children()}
        </div>
    }
}

/// Dialog box; clicks inside do not propagate to the overlay backdrop.
#[component]
pub fn Modal(
    children: Children,
    #[prop(optional, into)] title: String,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="modal" on:click=move |ev| ev.stop_propagation()>
            <h1>{title}</h1>
            {children()}
            <div class="button-tray">
                <button on:click=move |_| on_close.run(())>"Close"</button>
            </div>
        </div>
    }
}
