use leptos::prelude::*;

use crate::api::use_api;
use crate::routes::AppRoute;

#[component]
pub fn Nav() -> impl IntoView {
    let api = use_api();

    // the server never sees the browser's token, so this starts false and
    // is settled after hydration
    let signedIn = RwSignal::new(false);
    {
        let client = api.client().clone();
        Effect::new(move |_| signedIn.set(client.is_authenticated()));
    }

    view! {
        <nav class="nav-bar">
            <a class="nav-brand" href=AppRoute::Dashboard.path()>
                <div class="brand-icon">"F"</div>
                <span class="brand-text">"Flashdeck"</span>
            </a>
            <ul class="nav-links">
                <li class="nav-item">
                    <a href=AppRoute::Dashboard.path()>"Decks"</a>
                </li>
                <li class="nav-item" class:hidden=move || !signedIn.get()>
                    <button
                        class="btn btn-link"
                        on:click=move |_| {
                            signedIn.set(false);
                            api.logout();
                        }
                    >
                        "Log out"
                    </button>
                </li>
            </ul>
        </nav>
    }
}
