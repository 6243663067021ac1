use crate::{
    cli::{ListOptions, arrange_tracks, create_playlist, credentials, load, print_tracks},
    info,
    management::Screen,
    spotify::catalog::CatalogClient,
};

pub async fn songs(options: ListOptions) {
    let credentials = credentials().await;
    let catalog = CatalogClient::from_env(credentials.clone());

    let mut screen = Screen::new();
    load(&mut screen, "top songs", catalog.fetch_top_tracks(options.window)).await;
    arrange_tracks(&mut screen, &options);

    if screen.items().is_empty() {
        info!("No top songs for window {}.", options.window);
        return;
    }
    print_tracks(screen.items());

    if let Some(name) = options.playlist_name("Top Songs Playlist") {
        let track_ids = screen.items().iter().map(|t| t.id.clone()).collect();
        create_playlist(&mut screen, credentials, name, track_ids).await;
    }
}
