//! Secondary views derived from a fetched working set.
//!
//! Every function here is pure: the same input sequence, in the same order,
//! produces the same output. Deduplication goes through insertion-ordered
//! collections so the first-seen order of the input survives.

use indexmap::{IndexMap, IndexSet};

use crate::types::{Album, Artist, Genre, Track};

/// Unique albums of `tracks`, in the order each album first appears.
///
/// When several tracks share an album id the first track's album is kept and
/// later ones are dropped, not merged.
pub fn derive_albums(tracks: &[Track]) -> Vec<Album> {
    let mut albums: IndexMap<&str, &Album> = IndexMap::with_capacity(tracks.len());
    for track in tracks {
        albums.entry(track.album.id.as_str()).or_insert(&track.album);
    }
    albums.into_values().cloned().collect()
}

/// Distinct genre tags across `artists`, in first-seen order.
pub fn derive_genres(artists: &[Artist]) -> Vec<Genre> {
    let tags: IndexSet<&str> = artists
        .iter()
        .flat_map(|artist| artist.genres.iter().map(String::as_str))
        .collect();
    tags.into_iter().map(|tag| Genre(tag.to_string())).collect()
}

/// Ids of the `tracks` credited to any artist of the working set.
///
/// Tracks are grouped by the working-set order of the artists; a track
/// credited to several listed artists appears once, under the first one.
pub fn tracks_for_artists(artists: &[Artist], tracks: &[Track]) -> Vec<String> {
    let mut ids: IndexSet<&str> = IndexSet::new();
    for artist in artists {
        tracks
            .iter()
            .filter(|t| t.artists.iter().any(|a| a.id == artist.id))
            .for_each(|t| {
                ids.insert(t.id.as_str());
            });
    }
    ids.into_iter().map(str::to_string).collect()
}

/// Ids of the `tracks` that belong to an album of the working set, grouped
/// in working-set order.
pub fn tracks_for_albums(albums: &[Album], tracks: &[Track]) -> Vec<String> {
    let mut ids: IndexSet<&str> = IndexSet::new();
    for album in albums {
        tracks
            .iter()
            .filter(|t| t.album.id == album.id)
            .for_each(|t| {
                ids.insert(t.id.as_str());
            });
    }
    ids.into_iter().map(str::to_string).collect()
}
