use deck_client::ApiError;
use deck_types::{Card, DeckProgress, NewCard};
use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{spawn, use_api};
use crate::components::notice::use_notices;
use crate::components::panel::Panel;
use crate::routes::AppRoute;

/// Deck ids are positive integers; anything else is treated as no deck.
pub(crate) fn parse_deck_id(raw: Option<String>) -> Option<i64> {
    raw.and_then(|id| id.trim().parse::<i64>().ok())
        .filter(|id| *id > 0)
}

fn format_percent(value: f64) -> String {
    if value == value.floor() {
        format!("{value:.0}%")
    } else {
        format!("{value:.1}%")
    }
}

#[component]
pub fn DeckPage() -> impl IntoView {
    let api = use_api();
    let notices = use_notices();
    let params = use_params_map();
    let deckId = move || parse_deck_id(params.with(|p| p.get("id").map(|id| id.to_string())));

    let cards = RwSignal::new(Option::<Result<Vec<Card>, ApiError>>::None);
    let progress = RwSignal::new(Option::<DeckProgress>::None);
    let front = RwSignal::new(String::new());
    let back = RwSignal::new(String::new());

    let load = {
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn(async move {
                let result = api
                    .observe(api.client().list_cards(id).await)
                    .map(|reply| reply.data.cards);
                cards.set(Some(result));

                // progress is decoration; a failure just hides it
                if let Ok(reply) = api.observe(api.client().deck_progress(id).await) {
                    progress.set(Some(reply.data));
                }
            });
        }
    };

    {
        let load = load.clone();
        Effect::new(move |_| match deckId() {
            Some(id) => load(id),
            None => cards.set(Some(Err(ApiError::RequestFailed { status: 404 }))),
        });
    }

    let onAdd = {
        let api = api.clone();
        let load = load.clone();
        move |ev: SubmitEvent| {
            ev.prevent_default();
            let Some(id) = deckId() else { return };
            let card = NewCard {
                front: front.get_untracked().trim().to_string(),
                back: back.get_untracked().trim().to_string(),
            };
            if card.front.is_empty() || card.back.is_empty() {
                notices.error("Both sides of the card are required");
                return;
            }
            let api = api.clone();
            let load = load.clone();
            spawn(async move {
                match api.observe(api.client().add_card(id, &card).await) {
                    Ok(_) => {
                        front.set(String::new());
                        back.set(String::new());
                        load(id);
                    }
                    Err(e) => notices.error(format!("Could not add card: {e}")),
                }
            });
        }
    };

    let deleteCard = move |cardId: i64| {
        let api = api.clone();
        let load = load.clone();
        spawn(async move {
            match api.observe(api.client().delete_card(cardId).await) {
                Ok(_) => {
                    if let Some(id) = deckId() {
                        load(id);
                    }
                }
                Err(e) => notices.error(format!("Could not delete card: {e}")),
            }
        });
    };

    view! {
        <div class="page-header">
            <h1>"Deck"</h1>
            <p class="subtitle">
                {move || {
                    deckId()
                        .map(|id| {
                            view! {
                                <a class="btn btn-primary" href=AppRoute::Study(id).path()>
                                    "Study this deck"
                                </a>
                            }
                        })
                }}
            </p>
        </div>

        {move || progress.get().map(|p| view! { <ProgressPanel progress=p /> })}

        <Panel title="Add Card">
            <form class="inline-form" on:submit=onAdd>
                <input
                    type="text"
                    placeholder="Front"
                    prop:value=move || front.get()
                    on:input=move |ev| front.set(event_target_value(&ev))
                />
                <input
                    type="text"
                    placeholder="Back"
                    prop:value=move || back.get()
                    on:input=move |ev| back.set(event_target_value(&ev))
                />
                <button type="submit" class="btn btn-primary">"Add"</button>
            </form>
        </Panel>

        {move || {
            let deleteCard = deleteCard.clone();
            match cards.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Loading cards..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(ApiError::RequestFailed { status: 404 })) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Deck not found."</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load cards: " {e.to_string()}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(list)) => {
                    let count = list.len();
                    view! {
                        <Panel title=format!("{count} Card{}", if count == 1 { "" } else { "s" })>
                            <table>
                                <thead>
                                    <tr>
                                        <th>"Front"</th>
                                        <th>"Back"</th>
                                        <th></th>
                                    </tr>
                                </thead>
                                <tbody>
                                    {list
                                        .into_iter()
                                        .map(|card| {
                                            let deleteCard = deleteCard.clone();
                                            let cardId = card.id;
                                            view! {
                                                <tr>
                                                    <td>{card.front}</td>
                                                    <td>{card.back}</td>
                                                    <td class="row-actions">
                                                        <button
                                                            class="btn btn-danger"
                                                            on:click=move |_| deleteCard(cardId)
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
                        .into_any()
                }
            }
        }}
    }
}

#[component]
fn ProgressPanel(progress: DeckProgress) -> impl IntoView {
    let total = progress.total_cards.max(1);

    view! {
        <Panel title="Progress">
            <div class="metric-row">
                <span class="metric-label">"Cards"</span>
                <span class="metric-value">{progress.total_cards}</span>
            </div>
            <div class="metric-row">
                <span class="metric-label">"Studied"</span>
                <span class="metric-value">
                    {format!("{} ({})", progress.studied_cards, format_percent(progress.study_percentage))}
                </span>
            </div>
            <div class="metric-row">
                <span class="metric-label">"Mastered"</span>
                <span class="metric-value">
                    {format!("{} ({})", progress.mastered_cards, format_percent(progress.mastery_percentage))}
                </span>
            </div>
            <div class="box-distribution">
                {progress
                    .boxes()
                    .into_iter()
                    .map(|(level, count)| {
                        let width = count * 100 / total;
                        view! {
                            <div class="box-row">
                                <span class="box-label">{format!("Box {level}")}</span>
                                <div class="box-bar">
                                    <div class="box-fill" style=format!("width: {width}%")></div>
                                </div>
                                <span class="box-count">{count}</span>
                            </div>
                        }
                    })
                    .collect_view()}
            </div>
        </Panel>
    }
}
