mod common;

use std::sync::{Arc, Mutex};

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use common::{closed_url, spawn};
use serde_json::{Value, json};
use toplists::{
    error::CatalogError,
    management::StaticCredentials,
    spotify::playlist::PlaylistClient,
    types::{CreatePlaylistBody, PlaylistRequest},
};

type Calls = Arc<Mutex<Vec<CreatePlaylistBody>>>;

async fn record(State(calls): State<Calls>, Json(body): Json<CreatePlaylistBody>) -> Json<Value> {
    let mut calls = calls.lock().unwrap();
    calls.push(body.clone());
    Json(json!({
        "message": "Playlist created successfully!",
        "playlist": {
            "id": format!("pl-{}", calls.len()),
            "name": body.playlist_name,
            "description": "Created via toplists",
            "public": false,
            "owner": { "id": body.user_id }
        }
    }))
}

async fn stub_backend() -> (String, Calls) {
    let calls: Calls = Arc::new(Mutex::new(Vec::new()));
    let url = spawn(
        Router::new()
            .route("/create-playlist", post(record))
            .with_state(calls.clone()),
    )
    .await;
    (url, calls)
}

fn client(url: &str) -> PlaylistClient {
    PlaylistClient::new(url, Arc::new(StaticCredentials::new("tok-123", "u1")))
}

fn request(name: &str, ids: &[&str]) -> PlaylistRequest {
    PlaylistRequest {
        name: name.to_string(),
        owner: "u1".to_string(),
        track_ids: ids.iter().map(|id| id.to_string()).collect(),
    }
}

#[tokio::test]
async fn test_submit_creates_exactly_one_playlist() {
    let (url, calls) = stub_backend().await;

    let handle = client(&url)
        .submit(&request("Top Songs Playlist", &["1", "2", "3"]))
        .await
        .unwrap();

    assert_eq!(handle.id, "pl-1");
    assert_eq!(handle.name, "Top Songs Playlist");
    assert_eq!(handle.description.as_deref(), Some("Created via toplists"));

    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].playlist_name, "Top Songs Playlist");
    assert_eq!(calls[0].track_ids, vec!["1", "2", "3"]);
    assert_eq!(calls[0].user_id, "u1");
    assert_eq!(calls[0].token, "tok-123");
}

#[tokio::test]
async fn test_submit_is_not_idempotent() {
    let (url, calls) = stub_backend().await;
    let client = client(&url);
    let request = request("Top Songs Playlist", &["1"]);

    let first = client.submit(&request).await.unwrap();
    let second = client.submit(&request).await.unwrap();

    assert_ne!(first.id, second.id);
    assert_eq!(calls.lock().unwrap().len(), 2);
}

#[tokio::test]
async fn test_submit_accepts_empty_track_list() {
    let (url, calls) = stub_backend().await;

    let handle = client(&url)
        .submit(&request("Top Genres Playlist", &[]))
        .await
        .unwrap();

    assert_eq!(handle.name, "Top Genres Playlist");
    let calls = calls.lock().unwrap();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].track_ids.is_empty());
}

#[tokio::test]
async fn test_submit_rejects_blank_name_without_request() {
    let (url, calls) = stub_backend().await;

    let err = client(&url).submit(&request("   ", &["1"])).await.unwrap_err();

    assert!(matches!(err, CatalogError::Validation(_)));
    assert!(calls.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_submit_rejects_blank_owner() {
    let mut req = request("Mine", &["1"]);
    req.owner = String::new();

    let err = client(&closed_url().await).submit(&req).await.unwrap_err();

    assert!(matches!(err, CatalogError::Validation(_)));
}

#[tokio::test]
async fn test_backend_rejection_is_validation_error() {
    let url = spawn(Router::new().route(
        "/create-playlist",
        post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "detail": { "error": { "message": "Invalid track uri" } } })),
            )
        }),
    ))
    .await;

    let err = client(&url)
        .submit(&request("Top Albums Playlist", &["album-id"]))
        .await
        .unwrap_err();

    match err {
        CatalogError::Validation(body) => assert!(body.contains("Invalid track uri")),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_backend_auth_failure() {
    let url = spawn(Router::new().route(
        "/create-playlist",
        post(|| async { (StatusCode::FORBIDDEN, "insufficient scope") }),
    ))
    .await;

    let err = client(&url)
        .submit(&request("Top Songs Playlist", &["1"]))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Auth { status: 403, .. }));
}

#[tokio::test]
async fn test_unreachable_backend_is_network_error() {
    let err = client(&closed_url().await)
        .submit(&request("Top Songs Playlist", &["1"]))
        .await
        .unwrap_err();

    assert!(matches!(err, CatalogError::Network(_)));
}
