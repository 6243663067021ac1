use crate::{
    cli::{ListOptions, arrange_tracks, create_playlist, credentials, load, print_tracks},
    info,
    management::Screen,
    spotify::catalog::CatalogClient,
};

/// Tracks recommended for one seed genre.
pub async fn recommend(genre: String, limit: u32, options: ListOptions) {
    let credentials = credentials().await;
    let catalog = CatalogClient::from_env(credentials.clone());

    let mut screen = Screen::new();
    load(
        &mut screen,
        &format!("{} recommendations", genre),
        catalog.fetch_recommendations(&genre, limit),
    )
    .await;
    arrange_tracks(&mut screen, &options);

    if screen.items().is_empty() {
        info!("No recommendations for genre '{}'.", genre);
        return;
    }
    print_tracks(screen.items());

    let default_name = format!("{} Recommendations", genre);
    if let Some(name) = options.playlist_name(&default_name) {
        let track_ids = screen.items().iter().map(|t| t.id.clone()).collect();
        create_playlist(&mut screen, credentials, name, track_ids).await;
    }
}
