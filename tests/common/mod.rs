#![allow(dead_code)]

use axum::Router;
use serde_json::{Value, json};
use toplists::types::{Album, Artist, ArtistRef, Track};

/// Serves `app` on an ephemeral local port and returns its base URL.
pub async fn spawn(app: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{}", addr)
}

/// A base URL nothing listens on.
pub async fn closed_url() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}

pub fn artist_ref(id: &str, name: &str) -> ArtistRef {
    ArtistRef {
        id: id.to_string(),
        name: name.to_string(),
    }
}

pub fn album(id: &str, name: &str) -> Album {
    Album {
        id: id.to_string(),
        name: name.to_string(),
        artists: vec![artist_ref(&format!("{}_artist", id), "Album Artist")],
        artwork_url: None,
    }
}

pub fn track(id: &str, name: &str, album: Album, artist: &str) -> Track {
    Track {
        id: id.to_string(),
        name: name.to_string(),
        album,
        artists: vec![artist_ref(&format!("{}_artist", artist), artist)],
        artwork_url: None,
    }
}

pub fn artist(id: &str, name: &str, genres: &[&str]) -> Artist {
    Artist {
        id: id.to_string(),
        name: name.to_string(),
        genres: genres.iter().map(|g| g.to_string()).collect(),
        artwork_url: None,
    }
}

pub fn artist_json(id: &str, name: &str, genres: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "genres": genres,
        "images": [{ "url": format!("https://img.example/{}.jpg", id), "height": 640, "width": 640 }],
        "popularity": 70
    })
}

pub fn track_json(id: &str, name: &str, album_id: &str, album_name: &str, artist: &str) -> Value {
    json!({
        "id": id,
        "name": name,
        "duration_ms": 200_000,
        "album": {
            "id": album_id,
            "name": album_name,
            "artists": [{ "id": format!("{}_id", artist), "name": artist }],
            "images": [{ "url": format!("https://img.example/{}.jpg", album_id) }]
        },
        "artists": [{ "id": format!("{}_id", artist), "name": artist }]
    })
}
