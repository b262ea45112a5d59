//! HTTP layer exposing the processing pipeline.

pub mod routes;
pub mod types;

use std::{net::SocketAddr, sync::Arc};

use anyhow::Result;
use axum::{
    routing::{get, post},
    Router,
};
use tokio::net::TcpListener;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;

use crate::batch::TextProcessor;

#[derive(Clone)]
pub struct AppState {
    pub processor: Arc<TextProcessor>,
}

pub async fn serve(processor: Arc<TextProcessor>, host: String, port: u16) -> Result<()> {
    let state = AppState { processor };
    let router = Router::new()
        .route("/process", post(routes::process_texts))
        .route("/health", get(routes::health))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr: SocketAddr = format!("{host}:{port}").parse()?;
    info!(%addr, "serving onco-text API");
    let listener = TcpListener::bind(addr).await?;
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}
