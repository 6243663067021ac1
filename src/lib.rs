//! toplists
//!
//! Browse your top Spotify artists, songs, albums and genres, reorder them,
//! and turn them into playlists. The crate holds both sides of the system:
//! the client core used by the CLI and the backend proxy it talks to.
//!
//! # Modules
//!
//! - `aggregate` - albums and genres derived from fetched lists
//! - `api` - HTTP handlers of the backend proxy
//! - `cli` - command implementations and table rendering
//! - `config` - environment and `.env` configuration
//! - `error` - the error taxonomy shared by every network call
//! - `management` - credential providers and per-screen working-set state
//! - `server` - proxy router and listener
//! - `spotify` - HTTP clients for the proxy and the Spotify Web API
//! - `transform` - shuffle and sort of a working set
//! - `types` - entities and wire types
//! - `utils` - ranking window, sort keys and small helpers
//!
//! # Example
//!
//! ```
//! use std::sync::Arc;
//! use toplists::{management::StaticCredentials, spotify::catalog::CatalogClient, utils::Window};
//!
//! #[tokio::main]
//! async fn main() -> toplists::Res<()> {
//!     let credentials = Arc::new(StaticCredentials::new("token", "user"));
//!     let catalog = CatalogClient::from_env(credentials);
//!     let tracks = catalog.fetch_top_tracks(Window::ShortTerm).await?;
//!     let albums = toplists::aggregate::derive_albums(&tracks);
//!     Ok(())
//! }
//! ```

pub mod aggregate;
pub mod api;
pub mod cli;
pub mod config;
pub mod error;
pub mod management;
pub mod server;
pub mod spotify;
pub mod transform;
pub mod types;
pub mod utils;

/// Result alias for glue code (startup, configuration, server).
///
/// Library operations return [`error::Result`] instead so callers can match
/// on the error kind.
pub type Res<T> = std::result::Result<T, Box<dyn std::error::Error + Send + Sync>>;

/// Prints an informational message with a blue bullet point.
#[macro_export]
macro_rules! info {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "o".blue().bold(), std::format_args!($($arg)*));
  })
}

/// Prints a success message with a green checkmark.
#[macro_export]
macro_rules! success {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "✓".green().bold(), std::format_args!($($arg)*));
  })
}

/// Prints an error message with a red exclamation mark and exits the program.
///
/// Only for the command layer: library code returns errors instead.
#[macro_export]
macro_rules! error {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    eprintln!("[{}] {}", "!".red().bold(), std::format_args!($($arg)*));
    std::process::exit(1);
  })
}

/// Prints a warning message with a yellow exclamation mark.
#[macro_export]
macro_rules! warning {
  ($($arg:tt)*) => ({
    use colored::Colorize;
    println!("[{}] {}", "!".yellow().bold(), std::format_args!($($arg)*));
  })
}
