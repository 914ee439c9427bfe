use deck_client::ApiError;
use deck_types::Deck;
use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use crate::api::{spawn, use_api};
use crate::components::notice::use_notices;
use crate::components::panel::Panel;
use crate::routes::AppRoute;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let api = use_api();
    let notices = use_notices();
    let decks = RwSignal::new(Option::<Result<Vec<Deck>, ApiError>>::None);
    let newTitle = RwSignal::new(String::new());

    let load = {
        let api = api.clone();
        move || {
            let api = api.clone();
            spawn(async move {
                let result = api
                    .observe(api.client().list_decks().await)
                    .map(|reply| reply.data.decks);
                decks.set(Some(result));
            });
        }
    };

    // first fetch on mount; the server renders the loading state
    #[cfg(feature = "hydrate")]
    {
        load();
    }

    let onCreate = {
        let api = api.clone();
        let load = load.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let title = newTitle.get_untracked().trim().to_string();
            if title.is_empty() {
                return;
            }
            let api = api.clone();
            let load = load.clone();
            spawn(async move {
                match api.observe(api.client().create_deck(&title).await) {
                    Ok(reply) => {
                        newTitle.set(String::new());
                        notices.info(format!("Created \"{}\"", reply.data.title));
                        load();
                    }
                    Err(e) => notices.error(format!("Could not create deck: {e}")),
                }
            });
        }
    };

    let deleteDeck = move |deck: Deck| {
        let api = api.clone();
        let load = load.clone();
        spawn(async move {
            match api.observe(api.client().delete_deck(deck.id).await) {
                Ok(_) => {
                    notices.info(format!("Deleted \"{}\"", deck.title));
                    load();
                }
                Err(e) => notices.error(format!("Could not delete deck: {e}")),
            }
        });
    };

    view! {
        <div class="page-header">
            <h1>"Your Decks"</h1>
            <p class="subtitle">"Pick a deck to edit its cards or start studying"</p>
        </div>

        <Panel title="New Deck">
            <form class="inline-form" on:submit=onCreate>
                <input
                    type="text"
                    placeholder="Deck title"
                    prop:value=move || newTitle.get()
                    on:input=move |ev| newTitle.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Create"</button>
            </form>
        </Panel>

        {move || {
            let deleteDeck = deleteDeck.clone();
            match decks.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading decks..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load decks: " {e.to_string()}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) if list.is_empty() => {
                    view! {
                        <div class="card">
                            <p class="muted">"No decks yet. Create one above."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    view! { <DeckTable decks=list on_delete=deleteDeck /> }.into_any()
                }
            }
        }}
    }
}

#[component]
fn DeckTable<F>(decks: Vec<Deck>, on_delete: F) -> impl IntoView
where
    F: Fn(Deck) + Clone + Send + Sync + 'static,
{
    let count = decks.len();

    view! {
        <Panel title=format!("{count} Deck{}", if count == 1 { "" } else { "s" })>
            <table>
                <thead>
                    <tr>
                        <th>"Title"</th>
                        <th></th>
                    </tr>
                </thead>
                <tbody>
                    {decks
                        .into_iter()
                        .map(|deck| {
                            let onDelete = on_delete.clone();
                            let target = deck.clone();
                            view! {
                                <tr>
                                    <td>
                                        <a href=AppRoute::Deck(deck.id).path()>{deck.title.clone()}</a>
                                    </td>
                                    <td class="row-actions">
                                        <a class="btn" href=AppRoute::Study(deck.id).path()>
                                            "Study"
                                        </a>
                                        <button
                                            class="btn btn-danger"
                                            on:click=move |_| onDelete(target.clone())
                                        >
                                            "Delete"
                                        </button>
                                    </td>
                                </tr>
                            }
                        })
                        .collect_view()}
                </tbody>
            </table>
        </Panel>
    }
}
