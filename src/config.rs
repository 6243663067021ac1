//! Configuration management for toplists.
//!
//! Values come from environment variables, optionally seeded from a `.env`
//! file in the local data directory. Endpoints fall back to the public
//! Spotify defaults; account credentials have no default and are reported as
//! [`CatalogError::Config`] when missing.
//!
//! Lookup order:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. Application defaults (where applicable)

use std::{env, path::PathBuf};

use crate::error::CatalogError;

pub const DEFAULT_PROXY_URL: &str = "http://127.0.0.1:8000";
pub const DEFAULT_SPOTIFY_API_URL: &str = "https://api.spotify.com/v1";
pub const DEFAULT_SPOTIFY_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
pub const DEFAULT_SERVER_ADDRESS: &str = "127.0.0.1:8000";

/// Loads environment variables from `<data_local_dir>/toplists/.env`.
///
/// The directory is created when missing so users know where to put the
/// file. A missing `.env` is not an error; variables may come from the
/// process environment instead. Variables already set in the environment
/// are never overridden.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/toplists/.env`
/// - macOS: `~/Library/Application Support/toplists/.env`
/// - Windows: `%LOCALAPPDATA%/toplists/.env`
pub async fn load_env() -> Result<(), String> {
    let path = data_dir().join(".env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if path.is_file() {
        dotenv::from_path(&path).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// Platform-specific directory holding `.env` and the token cache.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("toplists");
    path
}

pub fn proxy_url() -> String {
    env::var("TOPLISTS_PROXY_URL").unwrap_or_else(|_| DEFAULT_PROXY_URL.to_string())
}

pub fn server_addr() -> String {
    env::var("SERVER_ADDRESS").unwrap_or_else(|_| DEFAULT_SERVER_ADDRESS.to_string())
}

pub fn spotify_apiurl() -> String {
    env::var("SPOTIFY_API_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_API_URL.to_string())
}

pub fn spotify_apitoken_url() -> String {
    env::var("SPOTIFY_API_TOKEN_URL").unwrap_or_else(|_| DEFAULT_SPOTIFY_TOKEN_URL.to_string())
}

pub fn spotify_user() -> Result<String, CatalogError> {
    required("SPOTIFY_USER_ID")
}

pub fn spotify_access_token() -> Result<String, CatalogError> {
    required("SPOTIFY_ACCESS_TOKEN")
}

pub fn spotify_refresh_token() -> Option<String> {
    optional("SPOTIFY_REFRESH_TOKEN")
}

pub fn spotify_client_id() -> Result<String, CatalogError> {
    required("SPOTIFY_API_AUTH_CLIENT_ID")
}

pub fn spotify_client_secret() -> Result<String, CatalogError> {
    required("SPOTIFY_API_AUTH_CLIENT_SECRET")
}

/// True when everything needed for the refresh-token grant is configured.
pub fn refresh_configured() -> bool {
    optional("SPOTIFY_REFRESH_TOKEN").is_some()
        && optional("SPOTIFY_API_AUTH_CLIENT_ID").is_some()
        && optional("SPOTIFY_API_AUTH_CLIENT_SECRET").is_some()
}

fn required(key: &str) -> Result<String, CatalogError> {
    optional(key).ok_or_else(|| CatalogError::Config(format!("{} must be set", key)))
}

// blank values count as unset
fn optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|v| !v.trim().is_empty())
}
