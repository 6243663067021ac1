mod common;

use std::{
    collections::HashMap,
    path::PathBuf,
    sync::{
        Arc,
        atomic::{AtomicUsize, Ordering},
    },
};

use axum::{Form, Json, Router, extract::State, http::StatusCode, routing::post};
use chrono::Utc;
use common::{closed_url, spawn};
use serde_json::{Value, json};
use toplists::{
    error::CatalogError,
    management::{CredentialProvider, Credentials, StaticCredentials, TokenManager},
    types::Token,
};

fn cache_path(name: &str) -> PathBuf {
    let mut path = std::env::temp_dir();
    path.push(format!("toplists-test-{}-{}", std::process::id(), name));
    path.push("token.json");
    path
}

fn token(access: &str, obtained_at: u64, expires_in: u64) -> Token {
    Token {
        access_token: access.to_string(),
        refresh_token: "refresh-1".to_string(),
        scope: "user-top-read".to_string(),
        expires_in,
        obtained_at,
    }
}

fn now() -> u64 {
    Utc::now().timestamp() as u64
}

async fn grant(
    State(hits): State<Arc<AtomicUsize>>,
    Form(form): Form<HashMap<String, String>>,
) -> (StatusCode, Json<Value>) {
    hits.fetch_add(1, Ordering::SeqCst);
    if form.get("refresh_token").map(String::as_str) != Some("refresh-1") {
        return (
            StatusCode::BAD_REQUEST,
            Json(json!({ "error": "invalid_grant", "error_description": "Invalid refresh token" })),
        );
    }
    assert_eq!(form.get("grant_type").map(String::as_str), Some("refresh_token"));
    assert_eq!(form.get("client_id").map(String::as_str), Some("client"));
    assert_eq!(form.get("client_secret").map(String::as_str), Some("secret"));
    (
        StatusCode::OK,
        Json(json!({
            "access_token": "fresh-access",
            "token_type": "Bearer",
            "scope": "user-top-read playlist-modify-private",
            "expires_in": 3600
        })),
    )
}

async fn token_endpoint() -> (String, Arc<AtomicUsize>) {
    let hits = Arc::new(AtomicUsize::new(0));
    let url = spawn(
        Router::new()
            .route("/api/token", post(grant))
            .with_state(hits.clone()),
    )
    .await;
    (format!("{}/api/token", url), hits)
}

#[tokio::test]
async fn test_static_credentials() {
    let provider = StaticCredentials::new("tok", "u1");

    let credentials = provider.credentials().await.unwrap();

    assert_eq!(
        credentials,
        Credentials {
            token: "tok".to_string(),
            user_id: "u1".to_string(),
        }
    );
}

#[tokio::test]
async fn test_fresh_token_is_used_without_refresh() {
    let manager = TokenManager::new(
        token("still-good", now(), 3600),
        "u1",
        "client",
        "secret",
        closed_url().await,
    )
    .with_cache_path(cache_path("fresh"));

    let credentials = manager.credentials().await.unwrap();

    assert_eq!(credentials.token, "still-good");
    assert_eq!(credentials.user_id, "u1");
}

#[tokio::test]
async fn test_expired_token_is_refreshed_and_cached() {
    let (token_url, hits) = token_endpoint().await;
    let path = cache_path("refresh");
    let manager = TokenManager::new(token("old", 0, 3600), "u1", "client", "secret", token_url)
        .with_cache_path(path.clone());

    let credentials = manager.credentials().await.unwrap();

    assert_eq!(credentials.token, "fresh-access");
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let current = manager.current_token().await;
    assert_eq!(current.refresh_token, "refresh-1");
    assert_eq!(current.expires_in, 3600);
    assert!(!TokenManager::is_expired(&current));

    let cached: Token =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(cached.access_token, "fresh-access");

    // second call reuses the refreshed token
    manager.credentials().await.unwrap();
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let _ = std::fs::remove_dir_all(path.parent().unwrap());
}

#[tokio::test]
async fn test_rejected_refresh_is_auth_error() {
    let (token_url, _) = token_endpoint().await;
    let mut stale = token("old", 0, 3600);
    stale.refresh_token = "revoked".to_string();
    let manager = TokenManager::new(stale, "u1", "client", "secret", token_url)
        .with_cache_path(cache_path("rejected"));

    let err = manager.credentials().await.unwrap_err();

    assert!(matches!(err, CatalogError::Auth { status: 400, .. }));
    assert_eq!(manager.current_token().await.access_token, "old");
}

#[tokio::test]
async fn test_unreachable_token_endpoint_is_network_error() {
    let manager = TokenManager::new(
        token("old", 0, 3600),
        "u1",
        "client",
        "secret",
        format!("{}/api/token", closed_url().await),
    )
    .with_cache_path(cache_path("offline"));

    let err = manager.credentials().await.unwrap_err();

    assert!(matches!(err, CatalogError::Network(_)));
}

#[test]
fn test_expiry_margin() {
    let now = now();

    assert!(!TokenManager::is_expired(&token("a", now, 3600)));
    assert!(TokenManager::is_expired(&token("a", now - 3500, 3600)));
    assert!(TokenManager::is_expired(&token("a", 0, 3600)));
    assert!(TokenManager::is_expired(&token("a", now, 0)));
}

#[test]
fn test_expiry_with_corrupt_cached_values() {
    assert!(!TokenManager::is_expired(&token("a", u64::MAX, u64::MAX)));
    assert!(!TokenManager::is_expired(&token("a", now(), u64::MAX)));
}
