use std::sync::Arc;

use reqwest::Client;
use serde::de::DeserializeOwned;

use crate::{
    config,
    error::{CatalogError, Result},
    management::CredentialProvider,
    spotify::{Rejection, base_url, decode},
    types::{Artist, RecommendationsResponse, TopItemsResponse, Track},
    utils::Window,
};

/// Largest `limit` the recommendations endpoint accepts.
pub const MAX_RECOMMENDATIONS: u32 = 100;

/// Read side of the catalog: top lists through the proxy, recommendations
/// straight from the streaming service.
///
/// Every call asks the injected [`CredentialProvider`] for the current token,
/// so refreshing happens outside this type.
pub struct CatalogClient {
    http: Client,
    proxy_url: String,
    api_url: String,
    credentials: Arc<dyn CredentialProvider>,
}

impl CatalogClient {
    pub fn new(
        proxy_url: impl Into<String>,
        api_url: impl Into<String>,
        credentials: Arc<dyn CredentialProvider>,
    ) -> Self {
        Self {
            http: Client::new(),
            proxy_url: base_url(proxy_url),
            api_url: base_url(api_url),
            credentials,
        }
    }

    pub fn from_env(credentials: Arc<dyn CredentialProvider>) -> Self {
        Self::new(config::proxy_url(), config::spotify_apiurl(), credentials)
    }

    pub async fn fetch_top_artists(&self, window: Window) -> Result<Vec<Artist>> {
        let top: TopItemsResponse<Artist> = self.top_items("top-artists", window).await?;
        Ok(top.items)
    }

    pub async fn fetch_top_tracks(&self, window: Window) -> Result<Vec<Track>> {
        let top: TopItemsResponse<Track> = self.top_items("top-songs", window).await?;
        Ok(top.items)
    }

    /// Tracks recommended for a single seed genre.
    ///
    /// `limit` is clamped to `1..=100`. A blank seed is rejected before any
    /// request is made.
    pub async fn fetch_recommendations(&self, genre_seed: &str, limit: u32) -> Result<Vec<Track>> {
        let seed = genre_seed.trim();
        if seed.is_empty() {
            return Err(CatalogError::Validation(
                "genre seed must not be blank".to_string(),
            ));
        }
        let limit = limit.clamp(1, MAX_RECOMMENDATIONS);

        let credentials = self.credentials.credentials().await?;
        let api_url = format!("{uri}/recommendations", uri = self.api_url);
        let response = self
            .http
            .get(&api_url)
            .bearer_auth(&credentials.token)
            .query(&[("seed_genres", seed.to_string()), ("limit", limit.to_string())])
            .send()
            .await;

        let recommendations: RecommendationsResponse =
            decode(response, Rejection::Upstream).await?;
        Ok(recommendations.tracks)
    }

    async fn top_items<T: DeserializeOwned>(
        &self,
        path: &str,
        window: Window,
    ) -> Result<TopItemsResponse<T>> {
        let credentials = self.credentials.credentials().await?;
        let api_url = format!("{uri}/{path}", uri = self.proxy_url, path = path);
        let response = self
            .http
            .get(&api_url)
            .query(&[
                ("time_range", window.as_str()),
                ("token", credentials.token.as_str()),
            ])
            .send()
            .await;

        decode(response, Rejection::Upstream).await
    }
}
