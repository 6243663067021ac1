use std::path::PathBuf;

use async_trait::async_trait;
use chrono::Utc;
use reqwest::Client;
use tokio::sync::Mutex;

use crate::{
    config,
    error::{CatalogError, Result},
    spotify,
    types::Token,
};

/// Seconds before expiry at which a token is already treated as stale.
const EXPIRY_MARGIN_SECS: u64 = 240;

/// The pair every authenticated call needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub token: String,
    pub user_id: String,
}

/// Supplies credentials to the catalog and playlist clients.
///
/// The clients never store tokens; they ask on every call, so the provider
/// owns the whole credential lifecycle.
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn credentials(&self) -> Result<Credentials>;
}

/// A fixed token and user id, typically from the environment.
pub struct StaticCredentials {
    credentials: Credentials,
}

impl StaticCredentials {
    pub fn new(token: impl Into<String>, user_id: impl Into<String>) -> Self {
        Self {
            credentials: Credentials {
                token: token.into(),
                user_id: user_id.into(),
            },
        }
    }

    pub fn from_env() -> Result<Self> {
        Ok(Self::new(
            config::spotify_access_token()?,
            config::spotify_user()?,
        ))
    }
}

#[async_trait]
impl CredentialProvider for StaticCredentials {
    async fn credentials(&self) -> Result<Credentials> {
        Ok(self.credentials.clone())
    }
}

/// Keeps an access token fresh through the refresh-token grant and caches it
/// on disk between runs.
pub struct TokenManager {
    token: Mutex<Token>,
    user_id: String,
    client_id: String,
    client_secret: String,
    token_url: String,
    cache_path: PathBuf,
    http: Client,
}

impl TokenManager {
    pub fn new(
        token: Token,
        user_id: impl Into<String>,
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        token_url: impl Into<String>,
    ) -> Self {
        TokenManager {
            token: Mutex::new(token),
            user_id: user_id.into(),
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            token_url: token_url.into(),
            cache_path: Self::token_path(),
            http: Client::new(),
        }
    }

    pub fn with_cache_path(mut self, path: PathBuf) -> Self {
        self.cache_path = path;
        self
    }

    /// Builds a manager from the cached token, or seeds one from the
    /// environment when there is no cache yet. A seeded token counts as
    /// expired so the first call refreshes it.
    pub async fn load() -> Result<Self> {
        let token = match Self::read_cache(&Self::token_path()).await {
            Ok(token) => token,
            Err(_) => Token {
                access_token: config::spotify_access_token().unwrap_or_default(),
                refresh_token: config::spotify_refresh_token().ok_or_else(|| {
                    CatalogError::Config("SPOTIFY_REFRESH_TOKEN must be set".to_string())
                })?,
                scope: String::new(),
                expires_in: 0,
                obtained_at: 0,
            },
        };

        Ok(Self::new(
            token,
            config::spotify_user()?,
            config::spotify_client_id()?,
            config::spotify_client_secret()?,
            config::spotify_apitoken_url(),
        ))
    }

    pub async fn current_token(&self) -> Token {
        self.token.lock().await.clone()
    }

    pub fn is_expired(token: &Token) -> bool {
        let now = Utc::now().timestamp() as u64;
        now >= token
            .obtained_at
            .saturating_add(token.expires_in)
            .saturating_sub(EXPIRY_MARGIN_SECS)
    }

    async fn read_cache(path: &PathBuf) -> std::result::Result<Token, String> {
        let content = async_fs::read_to_string(path)
            .await
            .map_err(|e| e.to_string())?;
        serde_json::from_str(&content).map_err(|e| e.to_string())
    }

    async fn persist(&self, token: &Token) -> std::result::Result<(), String> {
        if let Some(parent) = self.cache_path.parent() {
            async_fs::create_dir_all(parent)
                .await
                .map_err(|e| e.to_string())?;
        }

        let json = serde_json::to_string_pretty(token).map_err(|e| e.to_string())?;
        async_fs::write(&self.cache_path, json)
            .await
            .map_err(|e| e.to_string())
    }

    fn token_path() -> PathBuf {
        let mut path = config::data_dir();
        path.push("cache/token.json");
        path
    }
}

#[async_trait]
impl CredentialProvider for TokenManager {
    async fn credentials(&self) -> Result<Credentials> {
        let mut token = self.token.lock().await;
        if Self::is_expired(&token) {
            let fresh = spotify::auth::refresh_token(
                &self.http,
                &self.token_url,
                &self.client_id,
                &self.client_secret,
                &token.refresh_token,
            )
            .await?;
            *token = fresh;
            // a stale cache only costs one extra refresh next run
            let _ = self.persist(&token).await;
        }

        if token.access_token.is_empty() {
            return Err(CatalogError::Credentials(
                "no access token available".to_string(),
            ));
        }

        Ok(Credentials {
            token: token.access_token.clone(),
            user_id: self.user_id.clone(),
        })
    }
}
