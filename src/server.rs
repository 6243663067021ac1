use axum::{
    Extension, Router,
    routing::{get, post},
};
use std::{net::SocketAddr, str::FromStr, sync::Arc};

use crate::{Res, api, api::ProxyState, info};

pub fn router(state: ProxyState) -> Router {
    Router::new()
        .route("/health", get(api::health))
        .route("/top-artists", get(api::top_artists))
        .route("/top-songs", get(api::top_songs))
        .route("/create-playlist", post(api::create_playlist))
        .layer(Extension(Arc::new(state)))
}

pub async fn start_api_server(addr: &str, state: ProxyState) -> Res<()> {
    let addr = SocketAddr::from_str(addr)?;
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    info!("Proxy listening on http://{}", addr);
    axum::serve(listener, router(state)).await?;
    Ok(())
}
