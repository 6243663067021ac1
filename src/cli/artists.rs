use tabled::Table;

use crate::{
    aggregate,
    cli::{ListOptions, arrange, create_playlist, credentials, load},
    error, info,
    management::Screen,
    spotify::catalog::CatalogClient,
    types::{Artist, ArtistTableRow},
    utils, warning,
};

pub async fn artists(options: ListOptions) {
    let credentials = credentials().await;
    let catalog = CatalogClient::from_env(credentials.clone());

    let mut screen: Screen<Artist> = Screen::new();
    load(&mut screen, "top artists", catalog.fetch_top_artists(options.window)).await;
    arrange(&mut screen, &options);

    if screen.items().is_empty() {
        info!("No top artists for window {}.", options.window);
        return;
    }

    let rows: Vec<ArtistTableRow> = screen
        .items()
        .iter()
        .enumerate()
        .map(|(i, a)| ArtistTableRow {
            rank: i + 1,
            name: a.name.clone(),
            genres: a
                .genres
                .iter()
                .take(3)
                .cloned()
                .collect::<Vec<_>>()
                .join(","),
        })
        .collect();
    println!("{}", Table::new(rows));

    let Some(name) = options.playlist_name("Top Artists Playlist") else {
        return;
    };

    // artists carry no tracks of their own; use their songs from the same window
    let pb = utils::spinner("Fetching top songs of these artists...");
    let tracks = catalog.fetch_top_tracks(options.window).await;
    pb.finish_and_clear();
    let tracks = match tracks {
        Ok(tracks) => tracks,
        Err(e) => error!("Cannot fetch top songs. Err: {}", e),
    };

    let track_ids = aggregate::tracks_for_artists(screen.items(), &tracks);
    if track_ids.is_empty() {
        warning!("None of your top songs are by these artists, the playlist will be empty.");
    }
    create_playlist(&mut screen, credentials, name, track_ids).await;
}
