//! Typed wrappers over [`ApiClient::call`] for the flashcard backend.

use deck_types::{
    AuthResponse, Card, CardList, Deck, DeckList, DeckProgress, LoginRequest, MessageResponse,
    NewCard, NewDeck, NextCard, RegisterRequest, Review, ReviewOutcome,
};
use serde::Serialize;

use crate::client::{ApiClient, RequestOptions};
use crate::error::{ApiError, ApiResult};

fn json_body<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body).map_err(ApiError::network)
}

impl ApiClient {
    /// Logs in and stores the returned token.
    pub async fn login(&self, request: &LoginRequest) -> ApiResult<AuthResponse> {
        let reply = self
            .call::<AuthResponse>("/login", RequestOptions::post(json_body(request)?))
            .await?;
        self.store_token(&reply.data.token);
        tracing::info!(user_id = reply.data.user_id, "logged in");
        Ok(reply)
    }

    /// Creates an account and stores the returned token.
    pub async fn register(&self, request: &RegisterRequest) -> ApiResult<AuthResponse> {
        let reply = self
            .call::<AuthResponse>("/register", RequestOptions::post(json_body(request)?))
            .await?;
        self.store_token(&reply.data.token);
        tracing::info!(user_id = reply.data.user_id, "registered");
        Ok(reply)
    }

    pub async fn list_decks(&self) -> ApiResult<DeckList> {
        self.call("/decks", RequestOptions::get()).await
    }

    pub async fn create_deck(&self, title: &str) -> ApiResult<Deck> {
        let body = json_body(&NewDeck {
            title: title.to_string(),
        })?;
        self.call("/decks", RequestOptions::post(body)).await
    }

    pub async fn delete_deck(&self, deck_id: i64) -> ApiResult<MessageResponse> {
        self.call(&format!("/decks/{deck_id}"), RequestOptions::delete())
            .await
    }

    pub async fn list_cards(&self, deck_id: i64) -> ApiResult<CardList> {
        self.call(&format!("/decks/{deck_id}/cards"), RequestOptions::get())
            .await
    }

    pub async fn add_card(&self, deck_id: i64, card: &NewCard) -> ApiResult<Card> {
        self.call(
            &format!("/decks/{deck_id}/cards"),
            RequestOptions::post(json_body(card)?),
        )
        .await
    }

    pub async fn delete_card(&self, card_id: i64) -> ApiResult<MessageResponse> {
        self.call(&format!("/cards/{card_id}"), RequestOptions::delete())
            .await
    }

    pub async fn next_card(&self, deck_id: i64) -> ApiResult<NextCard> {
        self.call(&format!("/decks/{deck_id}/study/next"), RequestOptions::get())
            .await
    }

    pub async fn review_card(&self, card_id: i64, correct: bool) -> ApiResult<ReviewOutcome> {
        let body = json_body(&Review { correct })?;
        self.call(
            &format!("/cards/{card_id}/review"),
            RequestOptions::post(body),
        )
        .await
    }

    pub async fn deck_progress(&self, deck_id: i64) -> ApiResult<DeckProgress> {
        self.call(&format!("/decks/{deck_id}/progress"), RequestOptions::get())
            .await
    }
}
