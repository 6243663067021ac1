use std::sync::Arc;

use axum::{
    Extension, Json,
    extract::{Query, rejection::QueryRejection},
};
use serde::Deserialize;
use serde_json::Value;

use crate::{
    api::{ApiError, ProxyState},
    error::CatalogError,
    spotify::top::{TopKind, get_top_items},
    utils::Window,
    warning,
};

#[derive(Debug, Deserialize)]
pub struct TopQuery {
    #[serde(default)]
    pub time_range: Window,
    #[serde(default)]
    pub token: String,
}

pub async fn top_artists(
    query: Result<Query<TopQuery>, QueryRejection>,
    Extension(state): Extension<Arc<ProxyState>>,
) -> Result<Json<Value>, ApiError> {
    forward(&state, TopKind::Artists, query).await
}

pub async fn top_songs(
    query: Result<Query<TopQuery>, QueryRejection>,
    Extension(state): Extension<Arc<ProxyState>>,
) -> Result<Json<Value>, ApiError> {
    forward(&state, TopKind::Tracks, query).await
}

async fn forward(
    state: &ProxyState,
    kind: TopKind,
    query: Result<Query<TopQuery>, QueryRejection>,
) -> Result<Json<Value>, ApiError> {
    let Query(query) = query.map_err(|e| CatalogError::Validation(e.body_text()))?;
    if query.token.trim().is_empty() {
        return Err(CatalogError::Validation("token is required".to_string()).into());
    }

    match get_top_items(&state.http, &state.api_url, &query.token, kind, query.time_range).await {
        Ok(page) => Ok(Json(page)),
        Err(e) => {
            warning!("Spotify top {} request failed: {}", kind.as_str(), e);
            Err(e.into())
        }
    }
}
