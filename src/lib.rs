pub mod config;
pub mod contact;
pub mod events;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod notify;
pub mod routes;
pub mod session;
pub mod state;
pub mod store;
pub mod utils;

use std::sync::Arc;

use tokio::net::TcpListener;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::content::SiteContent;
use crate::routes::create_routes;
use crate::state::AppState;
use crate::utils::error::AppError;

pub fn init_logging() {
    tracing_subscriber::registry()
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,portfolio_server=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();
}

pub async fn run(config: Config) -> Result<(), AppError> {
    let stores = store::connect(&config).await?;
    info!("Successfully connected to database");

    let content = SiteContent::embedded()
        .map_err(|e| AppError::Internal(format!("embedded site content is invalid: {e}")))?;
    let state = Arc::new(AppState::new(config.clone(), stores, content));
    let app = create_routes(state);

    let listener = TcpListener::bind(("0.0.0.0", config.port))
        .await
        .map_err(|e| AppError::Internal(format!("failed to bind port {}: {e}", config.port)))?;
    info!("Server running at http://0.0.0.0:{}", config.port);

    axum::serve(listener, app)
        .await
        .map_err(|e| AppError::Internal(format!("server failed: {e}")))
}
