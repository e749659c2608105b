//! Chat placeholder screen behind the route gate.
//!
//! No backend wiring yet; the conversation is canned and the input is inert.
//! The references popup exercises the shared modal components.

use leptos::prelude::*;

use crate::components::modal::{Modal, Overlay};

#[component]
fn Exchange(#[prop(optional)] with_references: bool, on_references: Callback<()>) -> impl IntoView {
    view! {
        <section class="user-query">
            <p>"Ask a question below."</p>
        </section>
        <section class="gpt-reply">
            <p>
                "Congratulations, you have exclusive access to the world's most \
                 knowledgeable physicist, what would you like to know?"
            </p>
            <Show when=move || with_references>
                <div class="link" on:click=move |_| on_references.run(())>
                    "References"
                </div>
            </Show>
        </section>
    }
}

#[component]
pub fn ChatPage() -> impl IntoView {
    let modal_open = RwSignal::new(false);
    let open_modal = Callback::new(move |()| modal_open.set(true));
    let close_modal = Callback::new(move |()| modal_open.set(false));

    view! {
        <div class="app-container">
            <Show when=move || modal_open.get()>
                <Overlay on_close=close_modal>
                    <Modal title="References" on_close=close_modal>
                        <p>"Sources will appear here once the chat backend is wired up."</p>
                    </Modal>
                </Overlay>
            </Show>
            <div class="chat-container">
                <div class="chat-background">
                    <Exchange with_references=true on_references=open_modal/>
                    <Exchange on_references=open_modal/>
                    <Exchange on_references=open_modal/>
                </div>
            </div>
            <form class="chat-input" on:submit=move |ev: leptos::ev::SubmitEvent| ev.prevent_default()>
                <input type="text" placeholder="Ask a physics question..."/>
                <button type="submit">"Send"</button>
            </form>
        </div>
    }
}
