use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;

use crate::{
    config,
    error::{CatalogError, Result, SubmissionError},
    management::CredentialProvider,
    spotify::{Rejection, base_url, decode},
    types::{
        AddTrackToPlaylistRequest, AddTrackToPlaylistResponse, CreatePlaylistBody,
        CreatePlaylistRequest, CreatePlaylistResponse, PlaylistHandle, PlaylistRequest,
    },
    utils,
};

/// Spotify caps `POST /playlists/{id}/tracks` at 100 URIs per call.
pub const MAX_TRACKS_PER_REQUEST: usize = 100;

pub const PLAYLIST_DESCRIPTION: &str = "Created via toplists";

/// Submits playlist creation requests to the backend proxy.
pub struct PlaylistClient {
    http: Client,
    proxy_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl PlaylistClient {
    pub fn new(proxy_url: impl Into<String>, credentials: Arc<dyn CredentialProvider>) -> Self {
        Self {
            http: Client::new(),
            proxy_url: base_url(proxy_url),
            credentials,
        }
    }

    pub fn from_env(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::new(config::proxy_url(), credentials)
    }

    /// Asks the backend to create a new playlist holding `request.track_ids`.
    ///
    /// Each call creates a distinct playlist; there is no idempotency key.
    /// An empty track list is accepted and yields an empty playlist. A blank
    /// name or owner is rejected with [`CatalogError::Validation`] before any
    /// request is sent.
    pub async fn submit(
        &self,
        request: &PlaylistRequest,
    ) -> std::result::Result<PlaylistHandle, SubmissionError> {
        if request.name.trim().is_empty() {
            return Err(CatalogError::Validation(
                "playlist name must not be empty".to_string(),
            ));
        }
        if request.owner.trim().is_empty() {
            return Err(CatalogError::Validation(
                "playlist owner must not be empty".to_string(),
            ));
        }

        let credentials = self.credentials.credentials().await?;
        let body = CreatePlaylistBody {
            token: credentials.token,
            user_id: request.owner.clone(),
            playlist_name: request.name.clone(),
            track_ids: request.track_ids.clone(),
        };

        let api_url = format!("{uri}/create-playlist", uri = self.proxy_url);
        let response = self.http.post(&api_url).json(&body).send().await;
        let created: CreatePlaylistResponse = decode(response, Rejection::Validation).await?;

        Ok(created.playlist)
    }
}

/// Creates an empty private playlist for `user_id` on the streaming service.
///
/// Returns the provider's playlist object untouched.
pub async fn create(
    http: &Client,
    api_url: &str,
    token: &str,
    user_id: &str,
    name: &str,
) -> Result<Value> {
    let api_url = format!(
        "{uri}/users/{user_id}/playlists",
        uri = api_url,
        user_id = user_id
    );
    let payload = CreatePlaylistRequest {
        name: name.to_string(),
        description: PLAYLIST_DESCRIPTION.to_string(),
        public: false,
    };

    let response = http
        .post(&api_url)
        .bearer_auth(token)
        .json(&payload)
        .send()
        .await;

    decode(response, Rejection::Upstream).await
}

/// Appends tracks to a playlist in chunks of [`MAX_TRACKS_PER_REQUEST`].
///
/// Returns the snapshot id of the last chunk, or `None` when there was
/// nothing to add. Stops at the first failing chunk.
pub async fn add_tracks(
    http: &Client,
    api_url: &str,
    token: &str,
    playlist_id: &str,
    track_ids: &[String],
) -> Result<Option<String>> {
    let api_url = format!(
        "{uri}/playlists/{id}/tracks",
        uri = api_url,
        id = playlist_id
    );

    let mut snapshot_id = None;
    for chunk in track_ids.chunks(MAX_TRACKS_PER_REQUEST) {
        let payload = AddTrackToPlaylistRequest {
            uris: chunk.iter().map(|id| utils::track_uri(id)).collect(),
        };
        let response = http
            .post(&api_url)
            .bearer_auth(token)
            .json(&payload)
            .send()
            .await;

        let added: AddTrackToPlaylistResponse = decode(response, Rejection::Upstream).await?;
        snapshot_id = Some(added.snapshot_id);
    }

    Ok(snapshot_id)
}
