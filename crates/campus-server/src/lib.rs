//! Campus Registry HTTP Server Library
//!
//! Provides REST API components for testing and reuse.

pub mod api;
pub mod config;
pub mod error;

use std::sync::Arc;

use crate::api::rest::{create_router_with_options, AppState, RouterOptions};
use crate::config::ServerConfig;
use axum::Router;
use campus_repository::{MemoryRepository, SeedSource};
use tracing::info;

/// Load the seed data named by `config` and build the application router
pub async fn build_app(config: &ServerConfig) -> anyhow::Result<Router> {
    let seed = SeedSource::from_path(config.seed_path.clone())
        .load()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to load seed data: {}", e))?;
    let registry = MemoryRepository::from_seed(seed)?;
    info!("Registry initialized");

    let state = AppState::new(Arc::new(registry), config.banner.as_str());
    Ok(create_router_with_options(
        state,
        RouterOptions {
            enable_cors: config.enable_cors,
        },
    ))
}
