use tabled::Table;

use crate::{
    aggregate,
    cli::{ListOptions, arrange, create_playlist, credentials, load},
    error::CatalogError,
    info,
    management::Screen,
    spotify::catalog::CatalogClient,
    types::{Genre, GenreTableRow},
    warning,
};

/// Top genres, derived from the genre tags of the top artists.
pub async fn genres(options: ListOptions) {
    let credentials = credentials().await;
    let catalog = CatalogClient::from_env(credentials.clone());

    let mut screen: Screen<Genre> = Screen::new();
    load(&mut screen, "top genres", async {
        let artists = catalog.fetch_top_artists(options.window).await?;
        Ok::<_, CatalogError>(aggregate::derive_genres(&artists))
    })
    .await;
    arrange(&mut screen, &options);

    if screen.items().is_empty() {
        info!("No top genres for window {}.", options.window);
        return;
    }

    let rows: Vec<GenreTableRow> = screen
        .items()
        .iter()
        .enumerate()
        .map(|(i, g)| GenreTableRow {
            rank: i + 1,
            genre: g.0.clone(),
        })
        .collect();
    println!("{}", Table::new(rows));

    if let Some(name) = options.playlist_name("Top Genres Playlist") {
        // genres have no tracks; submitted empty on purpose
        warning!(
            "Genre playlists are created empty. Use `toplists recommend <genre> --playlist` for tracks."
        );
        create_playlist(&mut screen, credentials, name, Vec::new()).await;
    }
}
