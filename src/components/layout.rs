//! Application shell: header with a login-gated menu, page outlet below.

use leptos::prelude::*;
use leptos_router::components::Outlet;

use crate::components::protected_element::Protected;

/// Header spacer keeping the title centered when the menu is hidden.
#[component]
fn Spacer() -> impl IntoView {
    view! { <div class="header-spacer"></div> }
}

/// Shared page chrome. The account menu only renders for an authorized
/// session; unauthenticated visitors see the bare title.
#[component]
pub fn Layout() -> impl IntoView {
    let menu_open = RwSignal::new(false);

    view! {
        <header class="page-title">
            <Protected fallback=Spacer>
                <div class="header-spacer"></div>
            </Protected>
            <div>"Phys GPT"</div>
            <Protected fallback=Spacer>
                <div class="menu-container">
                    <button
                        class="menu-icon"
                        aria-label="Account menu"
                        on:click=move |_| menu_open.update(|open| *open = !*open)
                    >
                        "☰"
                    </button>
                    <Show when=move || menu_open.get()>
                        <div class="menu-background">
                            <ul class="menu-items">
                                <li><a href="/update_password">"Change password"</a></li>
                                <hr/>
                                <li><a href="/logout">"Logout"</a></li>
                            </ul>
                        </div>
                    </Show>
                </div>
            </Protected>
        </header>
        <main>
            <Outlet/>
        </main>
    }
}
