use chrono::Utc;
use reqwest::Client;
use serde::Deserialize;

use crate::{
    error::{CatalogError, Result},
    spotify::{Rejection, decode},
    types::Token,
};

#[derive(Deserialize)]
struct RefreshResponse {
    access_token: String,
    #[serde(default)]
    refresh_token: Option<String>,
    #[serde(default)]
    scope: String,
    #[serde(default = "default_expires_in")]
    expires_in: u64,
}

fn default_expires_in() -> u64 {
    3600
}

/// Exchanges a refresh token for a fresh access token.
///
/// Spotify may or may not rotate the refresh token; when the response has
/// none, the one passed in is carried over. A rejected grant (400 or 401)
/// is reported as [`CatalogError::Auth`].
pub async fn refresh_token(
    http: &Client,
    token_url: &str,
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> Result<Token> {
    let response = http
        .post(token_url)
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
            ("client_id", client_id),
            ("client_secret", client_secret),
        ])
        .send()
        .await;

    let refreshed: RefreshResponse = decode(response, Rejection::Upstream)
        .await
        .map_err(|e| match e {
            CatalogError::Upstream { status: 400, body } => {
                CatalogError::Auth { status: 400, body }
            }
            other => other,
        })?;

    Ok(Token {
        access_token: refreshed.access_token,
        refresh_token: refreshed
            .refresh_token
            .unwrap_or_else(|| refresh_token.to_string()),
        scope: refreshed.scope,
        expires_in: refreshed.expires_in,
        obtained_at: Utc::now().timestamp() as u64,
    })
}
