mod config;
mod errors;
mod fetch;
mod models;
mod pipeline;
mod render;
mod routes;
mod state;
mod theme;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::fetch::HttpDocumentSource;
use crate::pipeline::DocumentCell;
use crate::routes::build_router;
use crate::state::AppState;
use crate::theme::{FilePreferenceStore, ThemeController, ThemePreference};

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on missing required env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Vitrine site v{}", env!("CARGO_PKG_VERSION"));

    // Resolve the theme preference: persisted value, then the system signal
    let store = FilePreferenceStore::new(config.theme_state_path.clone());
    let system_prefers_dark = config.system_color_scheme == ThemePreference::Dark;
    let theme = ThemeController::initialize(Box::new(store), system_prefers_dark)?;
    info!("Theme initialized ({})", theme.applied().as_str());

    // Initialize the upstream document source
    let http = reqwest::Client::new();
    let source = HttpDocumentSource::new(http, config.cv_data_url.clone());
    info!("Document source initialized ({})", config.cv_data_url);

    // Build app state; the document cell stays empty until the first page request
    let state = AppState {
        source: Arc::new(source),
        theme: Arc::new(theme),
        document: Arc::new(DocumentCell::new()),
        config: config.clone(),
    };

    // Build router
    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
