use std::sync::Arc;

use axum::{Extension, Json, extract::rejection::JsonRejection};
use serde_json::{Value, json};

use crate::{
    api::{ApiError, ProxyState},
    error::CatalogError,
    info,
    spotify::playlist::{add_tracks, create},
    types::CreatePlaylistBody,
    warning,
};

/// Creates a private playlist and adds `track_ids` to it.
///
/// Two upstream steps: create the playlist, then append the tracks as
/// `spotify:track:` URIs. The second step is skipped for an empty list. If
/// it fails, the playlist from the first step already exists upstream.
pub async fn create_playlist(
    Extension(state): Extension<Arc<ProxyState>>,
    body: Result<Json<CreatePlaylistBody>, JsonRejection>,
) -> Result<Json<Value>, ApiError> {
    let Json(body) = body.map_err(|e| CatalogError::Validation(e.body_text()))?;
    for (field, value) in [
        ("token", &body.token),
        ("user_id", &body.user_id),
        ("playlist_name", &body.playlist_name),
    ] {
        if value.trim().is_empty() {
            return Err(CatalogError::Validation(format!("{} is required", field)).into());
        }
    }

    let playlist = create(
        &state.http,
        &state.api_url,
        &body.token,
        &body.user_id,
        &body.playlist_name,
    )
    .await
    .inspect_err(|e| warning!("Failed to create playlist '{}': {}", body.playlist_name, e))?;

    let playlist_id = playlist["id"]
        .as_str()
        .ok_or_else(|| CatalogError::Shape("created playlist has no id".to_string()))?
        .to_string();

    add_tracks(
        &state.http,
        &state.api_url,
        &body.token,
        &playlist_id,
        &body.track_ids,
    )
    .await
    .inspect_err(|e| warning!("Failed to add tracks to playlist {}: {}", playlist_id, e))?;

    info!(
        "Created playlist '{}' ({}) with {} tracks",
        body.playlist_name,
        playlist_id,
        body.track_ids.len()
    );

    Ok(Json(json!({
        "message": "Playlist created successfully!",
        "playlist": playlist
    })))
}
