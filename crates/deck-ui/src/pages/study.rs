use deck_client::ApiError;
use deck_types::{NextCard, ReviewOutcome, StudyCard};
use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{spawn, use_api};
use crate::components::notice::use_notices;
use crate::components::panel::Panel;
use crate::pages::deck::parse_deck_id;
use crate::routes::AppRoute;

fn describe_interval(days: u32) -> String {
    match days {
        0 => "later today".into(),
        1 => "tomorrow".into(),
        n => format!("in {n} days"),
    }
}

#[component]
pub fn StudyPage() -> impl IntoView {
    let api = use_api();
    let notices = use_notices();
    let params = use_params_map();
    let deckId = move || parse_deck_id(params.with(|p| p.get("id").map(|id| id.to_string())));

    let next = RwSignal::new(Option::<Result<NextCard, ApiError>>::None);
    let revealed = RwSignal::new(false);
    let lastOutcome = RwSignal::new(Option::<ReviewOutcome>::None);

    let fetchNext = {
        let api = api.clone();
        move |id: i64| {
            let api = api.clone();
            spawn(async move {
                let result = api
                    .observe(api.client().next_card(id).await)
                    .map(|reply| reply.data);
                revealed.set(false);
                next.set(Some(result));
            });
        }
    };

    {
        let fetchNext = fetchNext.clone();
        Effect::new(move |_| match deckId() {
            Some(id) => fetchNext(id),
            None => next.set(Some(Err(ApiError::RequestFailed { status: 404 }))),
        });
    }

    let review = move |cardId: i64, correct: bool| {
        let Some(id) = deckId() else { return };
        let api = api.clone();
        let fetchNext = fetchNext.clone();
        spawn(async move {
            match api.observe(api.client().review_card(cardId, correct).await) {
                Ok(reply) => {
                    lastOutcome.set(Some(reply.data));
                    fetchNext(id);
                }
                Err(e) => notices.error(format!("Could not record review: {e}")),
            }
        });
    };

    view! {
        <div class="page-header">
            <h1>"Study"</h1>
            <p class="subtitle">
                {move || {
                    deckId()
                        .map(|id| view! { <a href=AppRoute::Deck(id).path()>"Back to deck"</a> })
                }}
            </p>
        </div>

        {move || {
            lastOutcome
                .get()
                .map(|outcome| {
                    view! {
                        <p class="muted">
                            {format!(
                                "Moved to box {}, next review {}.",
                                outcome.new_box_level,
                                describe_interval(outcome.next_review_days),
                            )}
                        </p>
                    }
                })
        }}

        {move || {
            let review = review.clone();
            match next.get() {
                None => {
                    view! {
                        <div class="loading">
                            <div class="spinner"></div>
                            "Finding the next card..."
                        </div>
                    }
                        .into_any()
                }
                Some(Err(e)) => {
                    view! {
                        <div class="card">
                            <p class="login-error">"Failed to load a card: " {e.to_string()}</p>
                        </div>
                    }
                        .into_any()
                }
                Some(Ok(NextCard { card: None, message })) => {
                    view! {
                        <Panel title="All done">
                            <p class="muted">
                                {message.unwrap_or_else(|| "No cards are due right now.".into())}
                            </p>
                        </Panel>
                    }
                        .into_any()
                }
                Some(Ok(NextCard { card: Some(card), .. })) => {
                    view! { <Flashcard card=card revealed=revealed on_review=review /> }.into_any()
                }
            }
        }}
    }
}

#[component]
fn Flashcard<F>(card: StudyCard, revealed: RwSignal<bool>, on_review: F) -> impl IntoView
where
    F: Fn(i64, bool) + Clone + Send + Sync + 'static,
{
    let cardId = card.id;
    let back = card.back.clone();
    let onCorrect = on_review.clone();
    let onWrong = on_review;

    view! {
        <Panel title=format!("Box {}", card.box_level)>
            <div class="flashcard-front">{card.front}</div>
            {move || {
                if revealed.get() {
                    let onCorrect = onCorrect.clone();
                    let onWrong = onWrong.clone();
                    view! {
                        <div class="flashcard-back">{back.clone()}</div>
                        <div class="row-actions">
                            <button class="btn btn-danger" on:click=move |_| onWrong(cardId, false)>
                                "Didn't know"
                            </button>
                            <button class="btn btn-primary" on:click=move |_| onCorrect(cardId, true)>
                                "Knew it"
                            </button>
                        </div>
                    }
                        .into_any()
                } else {
                    view! {
                        <button class="btn" on:click=move |_| revealed.set(true)>
                            "Show answer"
                        </button>
                    }
                        .into_any()
                }
            }}
        </Panel>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn review_interval_wording() {
        assert_eq!(describe_interval(1), "tomorrow");
        assert_eq!(describe_interval(7), "in 7 days");
        assert_eq!(describe_interval(30), "in 30 days");
    }
}
