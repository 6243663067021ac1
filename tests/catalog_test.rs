mod common;

use std::{collections::HashMap, sync::Arc};

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::get,
};
use common::{artist_json, closed_url, spawn, track_json};
use serde_json::{Value, json};
use toplists::{
    error::CatalogError,
    management::StaticCredentials,
    spotify::catalog::CatalogClient,
    utils::Window,
};

fn credentials() -> Arc<StaticCredentials> {
    Arc::new(StaticCredentials::new("tok-123", "u1"))
}

async fn top_artists(Query(q): Query<HashMap<String, String>>) -> (StatusCode, Json<Value>) {
    if q.get("token").map(String::as_str) != Some("tok-123") {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "error": { "status": 401, "message": "Invalid access token" } })),
        );
    }
    let range = q.get("time_range").cloned().unwrap_or_default();
    (
        StatusCode::OK,
        Json(json!({
            "items": [
                artist_json("a1", &format!("Band ({})", range), &["rock", "pop"]),
                artist_json("a2", "Singer", &[]),
            ],
            "total": 2
        })),
    )
}

async fn top_songs(Query(q): Query<HashMap<String, String>>) -> Json<Value> {
    assert_eq!(q.get("token").map(String::as_str), Some("tok-123"));
    Json(json!({
        "items": [
            track_json("1", "One", "A", "Alpha", "X"),
            track_json("2", "Two", "A", "Alpha", "X"),
            track_json("3", "Three", "B", "Beta", "Y"),
        ]
    }))
}

async fn proxy() -> String {
    spawn(
        Router::new()
            .route("/top-artists", get(top_artists))
            .route("/top-songs", get(top_songs)),
    )
    .await
}

#[tokio::test]
async fn test_fetch_top_artists() {
    let url = proxy().await;
    let catalog = CatalogClient::new(&url, closed_url().await, credentials());

    let artists = catalog.fetch_top_artists(Window::LongTerm).await.unwrap();

    assert_eq!(artists.len(), 2);
    assert_eq!(artists[0].id, "a1");
    assert_eq!(artists[0].name, "Band (long_term)");
    assert_eq!(artists[0].genres, vec!["rock", "pop"]);
    assert_eq!(
        artists[0].artwork_url.as_deref(),
        Some("https://img.example/a1.jpg")
    );
    assert!(artists[1].genres.is_empty());
}

#[tokio::test]
async fn test_fetch_top_tracks() {
    let url = proxy().await;
    let catalog = CatalogClient::new(format!("{}/", url), closed_url().await, credentials());

    let tracks = catalog.fetch_top_tracks(Window::ShortTerm).await.unwrap();

    let ids: Vec<&str> = tracks.iter().map(|t| t.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "2", "3"]);
    assert_eq!(tracks[2].album.name, "Beta");
    assert_eq!(tracks[0].primary_artist(), "X");
    assert_eq!(
        tracks[0].artwork_url.as_deref(),
        Some("https://img.example/A.jpg")
    );
}

#[tokio::test]
async fn test_rejected_token_is_auth_error() {
    let url = proxy().await;
    let catalog = CatalogClient::new(
        &url,
        closed_url().await,
        Arc::new(StaticCredentials::new("expired", "u1")),
    );

    let err = catalog.fetch_top_artists(Window::ShortTerm).await.unwrap_err();

    assert!(matches!(err, CatalogError::Auth { status: 401, .. }));
}

#[tokio::test]
async fn test_server_error_is_upstream_error() {
    let url = spawn(Router::new().route(
        "/top-songs",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, "spotify is down") }),
    ))
    .await;
    let catalog = CatalogClient::new(&url, closed_url().await, credentials());

    let err = catalog.fetch_top_tracks(Window::MediumTerm).await.unwrap_err();

    match err {
        CatalogError::Upstream { status, body } => {
            assert_eq!(status, 500);
            assert_eq!(body, "spotify is down");
        }
        other => panic!("expected upstream error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_track_without_artists_is_shape_error() {
    let url = spawn(Router::new().route(
        "/top-songs",
        get(|| async {
            let mut broken = track_json("1", "One", "A", "Alpha", "X");
            broken["artists"] = json!([]);
            Json(json!({ "items": [track_json("0", "Fine", "A", "Alpha", "X"), broken] }))
        }),
    ))
    .await;
    let catalog = CatalogClient::new(&url, closed_url().await, credentials());

    let err = catalog.fetch_top_tracks(Window::ShortTerm).await.unwrap_err();

    assert!(matches!(err, CatalogError::Shape(_)));
}

#[tokio::test]
async fn test_non_json_body_is_shape_error() {
    let url = spawn(Router::new().route(
        "/top-artists",
        get(|| async { "<html>proxy login</html>" }),
    ))
    .await;
    let catalog = CatalogClient::new(&url, closed_url().await, credentials());

    let err = catalog.fetch_top_artists(Window::ShortTerm).await.unwrap_err();

    assert!(matches!(err, CatalogError::Shape(_)));
}

#[tokio::test]
async fn test_unreachable_proxy_is_network_error() {
    let catalog = CatalogClient::new(closed_url().await, closed_url().await, credentials());

    let err = catalog.fetch_top_artists(Window::ShortTerm).await.unwrap_err();

    assert!(matches!(err, CatalogError::Network(_)));
}

#[tokio::test]
async fn test_fetch_recommendations() {
    let api = spawn(Router::new().route(
        "/recommendations",
        get(
            |headers: HeaderMap, Query(q): Query<HashMap<String, String>>| async move {
                assert_eq!(
                    headers.get("authorization").and_then(|v| v.to_str().ok()),
                    Some("Bearer tok-123")
                );
                assert_eq!(q.get("seed_genres").map(String::as_str), Some("indie-pop"));
                let limit = q.get("limit").cloned().unwrap_or_default();
                Json(json!({
                    "seeds": [],
                    "tracks": [
                        track_json("r1", &format!("limit {}", limit), "A", "Alpha", "X"),
                        track_json("r2", "Two", "B", "Beta", "Y"),
                    ]
                }))
            },
        ),
    ))
    .await;
    let catalog = CatalogClient::new(closed_url().await, &api, credentials());

    let tracks = catalog.fetch_recommendations(" indie-pop ", 500).await.unwrap();

    assert_eq!(tracks.len(), 2);
    assert_eq!(tracks[0].name, "limit 100");
}

#[tokio::test]
async fn test_blank_genre_seed_is_rejected_without_request() {
    let catalog = CatalogClient::new(closed_url().await, closed_url().await, credentials());

    let err = catalog.fetch_recommendations("  ", 20).await.unwrap_err();

    assert!(matches!(err, CatalogError::Validation(_)));
}
