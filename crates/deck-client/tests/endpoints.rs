//! Typed endpoint helpers against a mock backend.

use std::sync::Arc;

use deck_client::{ApiClient, ApiConfig, ApiError, MemoryTokenStore, TokenStore};
use deck_types::{LoginRequest, NewCard, RegisterRequest};
use serde_json::json;
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer, store: &MemoryTokenStore) -> ApiClient {
    ApiClient::new(
        ApiConfig::new(format!("{}/api", server.uri())),
        Arc::new(store.clone()),
    )
}

#[tokio::test]
async fn login_stores_returned_token() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/login"))
        .and(body_json(json!({"username": "ana", "password": "pw"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt-1", "user_id": 4})))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let client = client_for(&server, &store);

    let reply = client
        .login(&LoginRequest {
            username: "ana".into(),
            password: "pw".into(),
        })
        .await
        .unwrap();

    assert_eq!(reply.data.user_id, 4);
    assert_eq!(store.get().as_deref(), Some("jwt-1"));
    assert!(client.is_authenticated());
}

#[tokio::test]
async fn rejected_login_stores_nothing() {
    let server = MockServer::start().await;
    Mock::given(path("/api/login"))
        .respond_with(ResponseTemplate::new(401).set_body_json(json!({"error": "Invalid credentials"})))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let client = client_for(&server, &store);

    let err = client
        .login(&LoginRequest {
            username: "ana".into(),
            password: "wrong".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::Unauthorized);
    assert_eq!(store.get(), None);
}

#[tokio::test]
async fn register_conflict_is_request_failed() {
    let server = MockServer::start().await;
    Mock::given(path("/api/register"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({"error": "Username or email already exists"})))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::new();
    let client = client_for(&server, &store);

    let err = client
        .register(&RegisterRequest {
            username: "ana".into(),
            email: "ana@example.com".into(),
            password: "pw".into(),
        })
        .await
        .unwrap_err();

    assert_eq!(err, ApiError::RequestFailed { status: 400 });
}

#[tokio::test]
async fn list_decks_sends_token() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/decks"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "decks": [{"id": 1, "title": "Spanish"}, {"id": 2, "title": "Kanji"}]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, &MemoryTokenStore::with_token("abc123"));
    let decks = client.list_decks().await.unwrap().data.decks;

    assert_eq!(decks.len(), 2);
    assert_eq!(decks[1].title, "Kanji");
}

#[tokio::test]
async fn add_card_posts_front_and_back() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/decks/3/cards"))
        .and(body_json(json!({"front": "perro", "back": "dog"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 11, "front": "perro", "back": "dog"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server, &MemoryTokenStore::with_token("abc123"));
    let card = client
        .add_card(
            3,
            &NewCard {
                front: "perro".into(),
                back: "dog".into(),
            },
        )
        .await
        .unwrap()
        .data;

    assert_eq!(card.id, 11);
}

#[tokio::test]
async fn next_card_when_nothing_due() {
    let server = MockServer::start().await;
    Mock::given(path("/api/decks/3/study/next"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"card": null, "message": "done"})))
        .mount(&server)
        .await;

    let client = client_for(&server, &MemoryTokenStore::with_token("abc123"));
    let next = client.next_card(3).await.unwrap().data;

    assert_eq!(next.card, None);
}

#[tokio::test]
async fn review_reports_new_box() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/api/cards/11/review"))
        .and(body_json(json!({"correct": true})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true, "new_box_level": 3, "next_review_days": 7
        })))
        .mount(&server)
        .await;

    let client = client_for(&server, &MemoryTokenStore::with_token("abc123"));
    let outcome = client.review_card(11, true).await.unwrap().data;

    assert_eq!(outcome.new_box_level, 3);
    assert_eq!(outcome.next_review_days, 7);
}

#[tokio::test]
async fn delete_card_forbidden_keeps_token() {
    let server = MockServer::start().await;
    Mock::given(method("DELETE"))
        .and(path("/api/cards/5"))
        .respond_with(ResponseTemplate::new(403).set_body_json(json!({"error": "Access denied"})))
        .mount(&server)
        .await;

    let store = MemoryTokenStore::with_token("abc123");
    let client = client_for(&server, &store);
    let err = client.delete_card(5).await.unwrap_err();

    assert_eq!(err.status(), 403);
    assert_eq!(store.get().as_deref(), Some("abc123"));
}
