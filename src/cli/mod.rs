use std::{future::Future, sync::Arc};

use tabled::Table;

use crate::{
    config, error,
    error::Result,
    info,
    management::{CredentialProvider, Screen, StaticCredentials, TokenManager},
    spotify::playlist::PlaylistClient,
    success,
    transform,
    types::{Named, PlaylistRequest, Track, TrackTableRow},
    utils::{self, SortKey, Window},
    warning,
};

mod albums;
mod artists;
mod genres;
mod recommend;
mod songs;

pub use albums::albums;
pub use artists::artists;
pub use genres::genres;
pub use recommend::recommend;
pub use songs::songs;

/// How a list command fetches, orders and optionally submits its list.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub window: Window,
    pub sort: Option<SortKey>,
    pub shuffle: bool,
    /// `Some("")` asks for a playlist with the command's default name.
    pub playlist: Option<String>,
}

impl ListOptions {
    fn playlist_name(&self, default: &str) -> Option<String> {
        self.playlist.as_ref().map(|name| {
            let name = name.trim();
            if name.is_empty() {
                default.to_string()
            } else {
                name.to_string()
            }
        })
    }
}

/// Refresh-token credentials when configured, the static token otherwise.
async fn credentials() -> Arc<dyn CredentialProvider> {
    if config::refresh_configured() {
        match TokenManager::load().await {
            Ok(manager) => return Arc::new(manager),
            Err(e) => error!("Cannot load token. Err: {}", e),
        }
    }

    match StaticCredentials::from_env() {
        Ok(credentials) => Arc::new(credentials),
        Err(e) => error!(
            "{}\nSet it in {} or in the environment.",
            e,
            config::data_dir().join(".env").display()
        ),
    }
}

async fn load<T, F>(screen: &mut Screen<T>, what: &str, fetch: F)
where
    F: Future<Output = Result<Vec<T>>>,
{
    let Some(ticket) = screen.begin_fetch() else {
        return;
    };

    let pb = utils::spinner(&format!("Fetching {}...", what));
    let result = fetch.await;
    pb.finish_and_clear();

    if let Err(e) = screen.complete_fetch(ticket, result) {
        error!("Cannot fetch {}. Err: {}", what, e);
    }
}

/// Shuffles, then sorts, so a sort with ties keeps the shuffled tie order.
fn arrange<T: Named>(screen: &mut Screen<T>, options: &ListOptions) {
    if options.shuffle {
        screen.transform(transform::shuffle);
    }
    match options.sort {
        Some(SortKey::Name) => {
            screen.transform(transform::sort_by_name);
        }
        Some(SortKey::Artist) => warning!("Sorting by artist is only available for songs."),
        None => {}
    }
}

fn arrange_tracks(screen: &mut Screen<Track>, options: &ListOptions) {
    if options.sort == Some(SortKey::Artist) {
        if options.shuffle {
            screen.transform(transform::shuffle);
        }
        screen.transform(transform::sort_by_artist);
    } else {
        arrange(screen, options);
    }
}

fn print_tracks(tracks: &[Track]) {
    let rows: Vec<TrackTableRow> = tracks
        .iter()
        .enumerate()
        .map(|(i, t)| TrackTableRow {
            rank: i + 1,
            name: t.name.clone(),
            artists: join_names(t.artists.iter().map(|a| a.name.as_str())),
            album: t.album.name.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));
}

fn join_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    names.collect::<Vec<_>>().join(", ")
}

async fn create_playlist<T>(
    screen: &mut Screen<T>,
    credentials: Arc<dyn CredentialProvider>,
    name: String,
    track_ids: Vec<String>,
) {
    let owner = match credentials.credentials().await {
        Ok(c) => c.user_id,
        Err(e) => error!("Cannot create playlist. Err: {}", e),
    };

    let Some(ticket) = screen.begin_submit() else {
        warning!("The list is not ready, no playlist created.");
        return;
    };

    info!("Creating playlist '{}' with {} tracks", name, track_ids.len());
    let request = PlaylistRequest {
        name,
        owner,
        track_ids,
    };

    let pb = utils::spinner("Creating playlist...");
    let result = PlaylistClient::from_env(credentials).submit(&request).await;
    pb.finish_and_clear();

    match screen.complete_submit(ticket, result) {
        Ok(handle) => success!("Playlist '{}' created ({}).", handle.name, handle.id),
        Err(e) => error!("Failed to create playlist. Err: {}", e),
    }
}
