use reqwest::Client;
use serde_json::Value;

use crate::{
    error::Result,
    spotify::{Rejection, decode},
    utils::Window,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopKind {
    Artists,
    Tracks,
}

impl TopKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            TopKind::Artists => "artists",
            TopKind::Tracks => "tracks",
        }
    }
}

/// Raw `GET /me/top/{artists|tracks}` page for the token's user.
///
/// The body is returned untouched so the proxy can relay it as-is.
pub async fn get_top_items(
    http: &Client,
    api_url: &str,
    token: &str,
    kind: TopKind,
    window: Window,
) -> Result<Value> {
    let api_url = format!(
        "{uri}/me/top/{kind}",
        uri = api_url,
        kind = kind.as_str()
    );
    let response = http
        .get(&api_url)
        .bearer_auth(token)
        .query(&[("time_range", window.as_str())])
        .send()
        .await;

    decode(response, Rejection::Upstream).await
}
