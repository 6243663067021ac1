//! # API Module
//!
//! HTTP endpoints of the toplists backend proxy. The proxy keeps the mobile
//! and CLI front-ends away from the Spotify Web API details: it takes the
//! user's access token per request and forwards to the provider.
//!
//! ## Endpoints
//!
//! - [`health`] - `GET /health`, status and version
//! - [`top_artists`] - `GET /top-artists?time_range=&token=`
//! - [`top_songs`] - `GET /top-songs?time_range=&token=`
//! - [`create_playlist`] - `POST /create-playlist`, creates a private
//!   playlist and fills it with the given track ids
//!
//! ## Errors
//!
//! Failures are answered with `{"detail": ...}`. Upstream statuses are
//! relayed as-is; transport and shape failures become `502 Bad Gateway`,
//! malformed requests `400 Bad Request`.
//!
//! ## Usage Example
//!
//! ```rust,ignore
//! use toplists::{api::ProxyState, server};
//!
//! let app = server::router(ProxyState::from_env());
//! ```

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use reqwest::Client;
use serde_json::{Value, json};

use crate::{config, error::CatalogError};

mod health;
mod playlist;
mod top;

pub use health::health;
pub use playlist::create_playlist;
pub use top::top_artists;
pub use top::top_songs;

/// Shared by every handler through an `Extension` layer.
#[derive(Debug, Clone)]
pub struct ProxyState {
    pub http: Client,
    pub api_url: String,
}

impl ProxyState {
    pub fn new(api_url: impl Into<String>) -> Self {
        Self {
            http: Client::new(),
            api_url: crate::spotify::base_url(api_url),
        }
    }

    pub fn from_env() -> Self {
        Self::new(config::spotify_apiurl())
    }
}

/// A [`CatalogError`] rendered as an HTTP response.
#[derive(Debug)]
pub struct ApiError(pub CatalogError);

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self.0 {
            CatalogError::Auth { status, body } | CatalogError::Upstream { status, body } => (
                StatusCode::from_u16(status).unwrap_or(StatusCode::BAD_GATEWAY),
                detail(&body),
            ),
            CatalogError::Validation(msg) => (StatusCode::BAD_REQUEST, Value::String(msg)),
            CatalogError::Network(e) => (StatusCode::BAD_GATEWAY, Value::String(e.to_string())),
            CatalogError::Shape(msg) => (StatusCode::BAD_GATEWAY, Value::String(msg)),
            CatalogError::Config(msg) | CatalogError::Credentials(msg) => {
                (StatusCode::INTERNAL_SERVER_ERROR, Value::String(msg))
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

// upstream error bodies are usually JSON; keep them structured when they are
fn detail(body: &str) -> Value {
    serde_json::from_str(body).unwrap_or_else(|_| Value::String(body.to_string()))
}
