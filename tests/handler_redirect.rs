mod common;

use axum::{
    Router,
    http::{StatusCode, header},
    routing::get,
};
use axum_test::TestServer;
use std::sync::Arc;
use url_shortener::api::handlers::redirect_handler;
use url_shortener::domain::repositories::LinkStore;
use url_shortener::infrastructure::persistence::InMemoryLinkStore;
use url_shortener::state::AppState;

#[tokio::test]
async fn test_redirect_success() {
    let state = common::create_test_state();
    let key = state
        .link_service
        .create_short_link("https://example.com/a/b");

    let app = Router::new()
        .route("/short/{key}", get(redirect_handler))
        .with_state(state);

    let server = TestServer::new(app).unwrap();

    let response = server.get(&format!("/short/{}", key)).await;

    response.assert_status(StatusCode::MOVED_PERMANENTLY);
    assert_eq!(
        response.header(header::LOCATION),
        "https://example.com/a/b"
    );
}

#[tokio::test]
async fn test_redirect_not_found() {
    let server = TestServer::new(common::create_test_app(common::create_test_state())).unwrap();

    let response = server.get("/short/doesNotExist").await;

    response.assert_status_not_found();

    let json = response.json::<serde_json::Value>();
    assert_eq!(json["error"]["code"], "not_found");
    assert_eq!(json["error"]["details"]["key"], "doesNotExist");
}

#[tokio::test]
async fn test_redirect_is_case_sensitive() {
    let store = Arc::new(InMemoryLinkStore::new());
    store.put("AbCdEf", "https://example.com");

    let server = TestServer::new(common::create_test_app(AppState::new(store))).unwrap();

    server
        .get("/short/AbCdEf")
        .await
        .assert_status(StatusCode::MOVED_PERMANENTLY);
    server.get("/short/abcdef").await.assert_status_not_found();
}

#[tokio::test]
async fn test_missing_key_rejected() {
    let server = TestServer::new(common::create_test_app(common::create_test_state())).unwrap();

    for path in ["/short", "/short/"] {
        let response = server.get(path).await;

        response.assert_status_bad_request();

        let json = response.json::<serde_json::Value>();
        assert_eq!(json["error"]["message"], "Key missing");
    }
}

#[tokio::test]
async fn test_redirect_rejects_post() {
    let state = common::create_test_state();
    let key = state.link_service.create_short_link("https://example.com");

    let server = TestServer::new(common::create_test_app(state)).unwrap();

    let response = server.post(&format!("/short/{}", key)).await;

    response.assert_status(StatusCode::METHOD_NOT_ALLOWED);
}
