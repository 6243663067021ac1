use tabled::Table;

use crate::{
    aggregate,
    cli::{ListOptions, arrange, create_playlist, credentials, join_names, load},
    error::CatalogError,
    info,
    management::Screen,
    spotify::catalog::CatalogClient,
    types::{Album, AlbumTableRow, Track},
};

/// Top albums, derived from the top songs of the window.
pub async fn albums(options: ListOptions) {
    let credentials = credentials().await;
    let catalog = CatalogClient::from_env(credentials.clone());

    let mut tracks: Vec<Track> = Vec::new();
    let mut screen: Screen<Album> = Screen::new();
    load(&mut screen, "top albums", async {
        let fetched = catalog.fetch_top_tracks(options.window).await?;
        let albums = aggregate::derive_albums(&fetched);
        tracks = fetched;
        Ok::<_, CatalogError>(albums)
    })
    .await;
    arrange(&mut screen, &options);

    if screen.items().is_empty() {
        info!("No top albums for window {}.", options.window);
        return;
    }

    let rows: Vec<AlbumTableRow> = screen
        .items()
        .iter()
        .enumerate()
        .map(|(i, a)| AlbumTableRow {
            rank: i + 1,
            name: a.name.clone(),
            artists: join_names(a.artists.iter().map(|a| a.name.as_str())),
        })
        .collect();
    println!("{}", Table::new(rows));

    if let Some(name) = options.playlist_name("Top Albums Playlist") {
        let track_ids = aggregate::tracks_for_albums(screen.items(), &tracks);
        create_playlist(&mut screen, credentials, name, track_ids).await;
    }
}
