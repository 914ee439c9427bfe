use deck_client::ApiClient;
use leptos::prelude::*;
use leptos_meta::*;
use leptos_router::{
    components::{Route, Router, Routes},
    ParamSegment, StaticSegment,
};

use crate::api::{provide_api, NavigationOutlet};
use crate::components::nav::Nav;
use crate::components::notice::NoticeProvider;
use crate::pages::auth::{AuthMode, AuthPage};
use crate::pages::dashboard::DashboardPage;
use crate::pages::deck::DeckPage;
use crate::pages::study::StudyPage;

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <link rel="icon" href="/favicon.svg" type="image/svg+xml" />
                <AutoReload options=options.clone() />
                <HydrationScripts options />
                <MetaTags />
            </head>
            <body>
                <App />
            </body>
        </html>
    }
}

/// Serves exactly the patterns in [`crate::routes::ROUTES`]; the server crate tests the two against each other.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();
    provide_api(ApiClient::default());

    view! {
        <Stylesheet id="leptos" href="/pkg/deck-console.css" />
        <Title text="Flashdeck" />
        <NoticeProvider>
            <Router>
                <NavigationOutlet />
                <Routes fallback=|| view! { <p>"Page not found."</p> }.into_any()>
                    <Route path=StaticSegment("") view=DashboardView />
                    <Route
                        path=StaticSegment("login")
                        view=|| view! { <AuthPage mode=AuthMode::Login /> }
                    />
                    <Route
                        path=StaticSegment("register")
                        view=|| view! { <AuthPage mode=AuthMode::Register /> }
                    />
                    <Route
                        path=(StaticSegment("deck"), ParamSegment("id"))
                        view=DeckView
                    />
                    <Route
                        path=(StaticSegment("deck"), ParamSegment("id"), StaticSegment("study"))
                        view=StudyView
                    />
                </Routes>
            </Router>
        </NoticeProvider>
    }
}

#[component]
fn DashboardView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <DashboardPage />
            </main>
        </div>
    }
}

#[component]
fn DeckView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <DeckPage />
            </main>
        </div>
    }
}

#[component]
fn StudyView() -> impl IntoView {
    view! {
        <div class="app-layout">
            <Nav />
            <main class="main-content">
                <StudyPage />
            </main>
        </div>
    }
}
