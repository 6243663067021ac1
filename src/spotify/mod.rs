//! # Spotify Integration Module
//!
//! HTTP layer between toplists and its two remote parties: the backend proxy
//! (top lists and playlist creation on behalf of the user) and the Spotify
//! Web API itself (recommendations, plus everything the proxy forwards).
//!
//! ```text
//! CLI / Screen
//!      ↓
//! catalog::CatalogClient ──→ proxy /top-artists, /top-songs
//!                        └─→ Spotify /recommendations
//! playlist::PlaylistClient ─→ proxy /create-playlist
//!
//! proxy (crate::server)
//!      ↓
//! top::get_top_items, playlist::create, playlist::add_tracks ─→ Spotify
//! ```
//!
//! ## Error mapping
//!
//! Every response goes through [`decode`], which turns the HTTP outcome into
//! the [`CatalogError`] taxonomy:
//!
//! - transport failure → `Network`
//! - 401 / 403 → `Auth`
//! - other 4xx → `Validation` for submissions, `Upstream` otherwise
//! - 5xx → `Upstream`
//! - 2xx with a body of the wrong shape → `Shape`
//!
//! Nothing in this module retries. A failed call returns no data.

use reqwest::{Response, StatusCode};
use serde::de::DeserializeOwned;

use crate::error::CatalogError;

pub mod auth;
pub mod catalog;
pub mod playlist;
pub mod top;

/// How a 4xx other than 401/403 is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Rejection {
    Upstream,
    Validation,
}

pub(crate) async fn decode<T: DeserializeOwned>(
    response: Result<Response, reqwest::Error>,
    rejection: Rejection,
) -> Result<T, CatalogError> {
    let response = response.map_err(CatalogError::Network)?;
    let status = response.status();
    let body = response.text().await.map_err(CatalogError::Network)?;

    if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
        return Err(CatalogError::Auth {
            status: status.as_u16(),
            body,
        });
    }
    if status.is_client_error() && rejection == Rejection::Validation {
        return Err(CatalogError::Validation(body));
    }
    if !status.is_success() {
        return Err(CatalogError::Upstream {
            status: status.as_u16(),
            body,
        });
    }

    serde_json::from_str(&body).map_err(|e| CatalogError::Shape(e.to_string()))
}

pub(crate) fn base_url(url: impl Into<String>) -> String {
    url.into().trim_end_matches('/').to_string()
}
