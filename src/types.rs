use serde::{Deserialize, Serialize};
use tabled::Tabled;

/// Entities that can be ordered by display name.
pub trait Named {
    fn id(&self) -> &str;
    fn name(&self) -> &str;
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Token {
    pub access_token: String,
    pub refresh_token: String,
    pub scope: String,
    pub expires_in: u64,
    pub obtained_at: u64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Image {
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ArtistRef {
    pub id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "ArtistWire")]
pub struct Artist {
    pub id: String,
    pub name: String,
    pub genres: Vec<String>,
    pub artwork_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "AlbumWire")]
pub struct Album {
    pub id: String,
    pub name: String,
    pub artists: Vec<ArtistRef>,
    pub artwork_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "TrackWire")]
pub struct Track {
    pub id: String,
    pub name: String,
    pub album: Album,
    pub artists: Vec<ArtistRef>,
    pub artwork_url: Option<String>,
}

/// A genre tag. Two artists sharing the same text share the genre.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Genre(pub String);

#[derive(Deserialize)]
struct ArtistWire {
    id: String,
    name: String,
    #[serde(default)]
    genres: Vec<String>,
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Deserialize)]
struct AlbumWire {
    id: String,
    name: String,
    artists: Vec<ArtistRef>,
    #[serde(default)]
    images: Vec<Image>,
}

#[derive(Deserialize)]
struct TrackWire {
    id: String,
    name: String,
    album: Album,
    artists: Vec<ArtistRef>,
}

impl TryFrom<ArtistWire> for Artist {
    type Error = String;

    fn try_from(wire: ArtistWire) -> Result<Self, Self::Error> {
        if wire.id.is_empty() {
            return Err(format!("artist '{}' has an empty id", wire.name));
        }
        Ok(Artist {
            id: wire.id,
            name: wire.name,
            genres: wire.genres,
            artwork_url: wire.images.into_iter().next().map(|i| i.url),
        })
    }
}

impl TryFrom<AlbumWire> for Album {
    type Error = String;

    fn try_from(wire: AlbumWire) -> Result<Self, Self::Error> {
        if wire.id.is_empty() {
            return Err(format!("album '{}' has an empty id", wire.name));
        }
        if wire.artists.is_empty() {
            return Err(format!("album '{}' has no artists", wire.id));
        }
        Ok(Album {
            id: wire.id,
            name: wire.name,
            artists: wire.artists,
            artwork_url: wire.images.into_iter().next().map(|i| i.url),
        })
    }
}

impl TryFrom<TrackWire> for Track {
    type Error = String;

    fn try_from(wire: TrackWire) -> Result<Self, Self::Error> {
        if wire.id.is_empty() {
            return Err(format!("track '{}' has an empty id", wire.name));
        }
        if wire.artists.is_empty() {
            return Err(format!("track '{}' has no artists", wire.id));
        }
        let artwork_url = wire.album.artwork_url.clone();
        Ok(Track {
            id: wire.id,
            name: wire.name,
            album: wire.album,
            artists: wire.artists,
            artwork_url,
        })
    }
}

impl Track {
    /// Display name of the first credited artist.
    pub fn primary_artist(&self) -> &str {
        self.artists.first().map_or("", |a| a.name.as_str())
    }
}

impl Named for Artist {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Album {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Track {
    fn id(&self) -> &str {
        &self.id
    }
    fn name(&self) -> &str {
        &self.name
    }
}

impl Named for Genre {
    fn id(&self) -> &str {
        &self.0
    }
    fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopItemsResponse<T> {
    pub items: Vec<T>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RecommendationsResponse {
    pub tracks: Vec<Track>,
}

/// What a screen asks the backend to turn into a playlist.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistRequest {
    pub name: String,
    pub owner: String,
    pub track_ids: Vec<String>,
}

/// Body of `POST /create-playlist`, shared by the client and the proxy.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreatePlaylistBody {
    #[serde(default)]
    pub token: String,
    #[serde(default)]
    pub user_id: String,
    #[serde(default)]
    pub playlist_name: String,
    #[serde(default)]
    pub track_ids: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistResponse {
    pub message: String,
    pub playlist: PlaylistHandle,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlaylistHandle {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub snapshot_id: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePlaylistRequest {
    pub name: String,
    pub description: String,
    pub public: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistRequest {
    pub uris: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddTrackToPlaylistResponse {
    pub snapshot_id: String,
}

#[derive(Tabled)]
pub struct ArtistTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub genres: String,
}

#[derive(Tabled)]
pub struct TrackTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub artists: String,
    pub album: String,
}

#[derive(Tabled)]
pub struct AlbumTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub name: String,
    pub artists: String,
}

#[derive(Tabled)]
pub struct GenreTableRow {
    #[tabled(rename = "#")]
    pub rank: usize,
    pub genre: String,
}
