mod common;

use axum::{
    Json, Router,
    extract::Path,
    http::{HeaderMap, StatusCode},
    routing::post,
};
use common::*;
use serde_json::{Value, json};
use vocadeck::{
    deck::{Deck, DeckOptions, render},
    error::{FetchError, LoadError},
    notion::{FetchedPage, fetch_page, fetch_records, query_database},
};

async fn checked_query(
    Path(id): Path<String>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let header = |name: &str| {
        headers
            .get(name)
            .and_then(|v| v.to_str().ok())
            .unwrap_or("")
            .to_string()
    };

    let expected_sort = json!([{ "property": "単語", "direction": "ascending" }]);
    if id != DB_ID
        || header("authorization") != format!("Bearer {}", API_KEY)
        || header("notion-version") != "2022-06-28"
        || !header("content-type").starts_with("application/json")
        || body["sorts"] != expected_sort
    {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "object": "error", "status": 400, "code": "invalid_request", "message": "unexpected request" })),
        );
    }

    (
        StatusCode::OK,
        Json(json!({
            "object": "list",
            "results": [
                full_page("p-apple", "apple"),
                { "object": "page", "id": "p-empty", "properties": {} },
                full_page("p-banana", "banana"),
            ],
            "has_more": false,
            "next_cursor": null
        })),
    )
}

#[tokio::test]
async fn test_fetch_records_sends_one_sorted_query() {
    let app = Router::new().route("/v1/databases/{id}/query", post(checked_query));
    let api_url = spawn_api(app).await;

    let records = fetch_records(&config(&api_url)).await.unwrap();

    let words: Vec<&str> = records.iter().map(|r| r.word.as_str()).collect();
    assert_eq!(words, vec!["apple", "No Title", "banana"]);
    assert_eq!(records[0].genre, "Noun");
    assert_eq!(records[1].genre, "All");
    assert_eq!(records[1].meaning, "");
}

#[tokio::test]
async fn test_unauthorized_is_fetch_error_and_deck_shows_it() {
    let app = Router::new().route(
        "/v1/databases/{id}/query",
        post(|| async {
            (
                StatusCode::UNAUTHORIZED,
                Json(json!({
                    "object": "error",
                    "status": 401,
                    "code": "unauthorized",
                    "message": "API token is invalid."
                })),
            )
        }),
    );
    let api_url = spawn_api(app).await;

    let result = fetch_records(&config(&api_url)).await;
    let err = match &result {
        Err(err) => err,
        Ok(_) => panic!("expected a fetch error"),
    };
    assert!(matches!(err, FetchError::Status { status: 401, .. }));
    assert!(err.to_string().contains("API token is invalid."));

    let deck = Deck::from_load(result.map_err(LoadError::from), DeckOptions::default());
    assert!(deck.visible().is_empty());
    assert!(deck.error().is_some());
    let out = render(&deck);
    assert!(out.contains("Connection error"));
    assert!(out.contains("401"));
}

#[tokio::test]
async fn test_renamed_title_column_is_schema_error() {
    let app = Router::new().route(
        "/v1/databases/{id}/query",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({
                    "object": "error",
                    "status": 400,
                    "code": "validation_error",
                    "message": "Could not find sort property with name or id: 単語"
                })),
            )
        }),
    );
    let api_url = spawn_api(app).await;

    let err = query_database(&config(&api_url)).await.unwrap_err();
    assert!(err.is_schema());
    assert!(err.hint().contains("単語"));
}

#[tokio::test]
async fn test_non_json_success_body_is_decode_error() {
    let app = Router::new().route(
        "/v1/databases/{id}/query",
        post(|| async { "<html>maintenance</html>" }),
    );
    let api_url = spawn_api(app).await;

    let err = query_database(&config(&api_url)).await.unwrap_err();
    assert!(matches!(err, FetchError::Decode(_)));
}

#[tokio::test]
async fn test_unreachable_api_is_network_error() {
    // nothing listens on the discard port
    let err = query_database(&config("http://127.0.0.1:9/v1"))
        .await
        .unwrap_err();
    assert!(matches!(err, FetchError::Network(_)));
}

#[tokio::test]
async fn test_truncated_database_is_reported() {
    let app = Router::new().route(
        "/v1/databases/{id}/query",
        post(|| async {
            Json(json!({
                "object": "list",
                "results": [full_page("p-apple", "apple")],
                "has_more": true,
                "next_cursor": "cursor-2"
            }))
        }),
    );
    let api_url = spawn_api(app).await;

    let page = fetch_page(&config(&api_url)).await.unwrap();
    assert!(page.has_more);
    assert_eq!(page.records.len(), 1);
    assert_eq!(
        page.truncation_notice().as_deref(),
        Some("Only the first word is shown; the database holds more.")
    );

    let page = FetchedPage {
        records: sample_deck(),
        has_more: true,
    };
    assert_eq!(
        page.truncation_notice().as_deref(),
        Some("Only the first 5 words are shown; the database holds more.")
    );
}

#[tokio::test]
async fn test_complete_database_has_no_notice() {
    let app = Router::new().route("/v1/databases/{id}/query", post(checked_query));
    let api_url = spawn_api(app).await;

    let page = fetch_page(&config(&api_url)).await.unwrap();
    assert!(!page.has_more);
    assert_eq!(page.truncation_notice(), None);
}
