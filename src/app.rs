//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{ParentRoute, Route, Router, Routes},
};

use crate::components::layout::Layout;
use crate::components::protected_route::ProtectedRoute;
use crate::pages::{
    chat::ChatPage, confirm_email::ConfirmEmailPage, home::HomePage, login::LoginPage,
    logout::LogoutPage, not_found::NotFoundPage, register::RegistrationPage,
    reset_password::ResetPasswordPage, set_new_password::SetNewPasswordPage,
    unauthorized::UnauthorizedPage, update_password::UpdatePasswordPage,
};
use crate::state::auth::AuthState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session context and sets up client-side routing. The context
/// starts unhydrated everywhere and is seeded from the credential store in an
/// effect, which only runs in the browser after hydration; the first client
/// render therefore always matches the server-rendered output, and the access
/// gates flip reactively once the snapshot lands.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    provide_context(auth);
    Effect::new(move |_| auth.set(AuthState::from_store()));

    view! {
        <Stylesheet id="leptos" href="/pkg/physgpt-client.css"/>
        <Title text="Phys GPT"/>

        <Router>
            <Routes fallback=|| view! { <NotFoundPage/> }>
                <ParentRoute path=StaticSegment("") view=Layout>
                    <Route path=StaticSegment("") view=HomePage/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route path=StaticSegment("register") view=RegistrationPage/>
                    <Route path=StaticSegment("reset_password") view=ResetPasswordPage/>
                    <Route path=StaticSegment("set_new_password") view=SetNewPasswordPage/>
                    <Route path=StaticSegment("update_password") view=UpdatePasswordPage/>
                    <Route path=StaticSegment("confirm_email") view=ConfirmEmailPage/>
                    <Route path=StaticSegment("logout") view=LogoutPage/>
                    <Route path=StaticSegment("unauthorized") view=UnauthorizedPage/>
                    <Route
                        path=StaticSegment("gpt")
                        view=|| view! { <ProtectedRoute><ChatPage/></ProtectedRoute> }
                    />
                </ParentRoute>
            </Routes>
        </Router>
    }
}
