//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{Meta, MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::components::toast_stack::ToastStack;
use crate::pages::{
    dashboard::DashboardPage, home::HomePage, login::LoginPage, pricing::PricingPage,
    register::RegisterPage,
};
use crate::state::{
    auth::AuthState, chrome::ChromeState, notifications::NotificationState, ui::UiState,
};
use crate::util::notify::Notifier;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="pt-BR">
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
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let auth = RwSignal::new(AuthState::default());
    let chrome = RwSignal::new(ChromeState::default());
    let ui = RwSignal::new(UiState::default());
    let notifications = RwSignal::new(NotificationState::default());

    provide_context(auth);
    provide_context(chrome);
    provide_context(ui);
    provide_context(Notifier::new(notifications));

    view! {
        <Stylesheet id="leptos" href="/pkg/flowpilot.css"/>
        <Title text="FlowPilot"/>
        <Meta name="description" content="FlowPilot: automação de fluxos de trabalho para equipes."/>

        <Router>
            <Routes fallback=|| view! { <p class="not-found">"Página não encontrada."</p> }>
                <Route path=StaticSegment("") view=HomePage/>
                <Route path=StaticSegment("pricing") view=PricingPage/>
                <Route path=StaticSegment("login") view=LoginPage/>
                <Route path=StaticSegment("register") view=RegisterPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
            </Routes>
        </Router>
        <ToastStack/>
    }
}
