pub mod advisor;
pub mod api;
pub mod catalog;
pub mod config;
pub mod extractor;
pub mod provider;
pub mod seed_data;

use axum::{http::StatusCode, response::Json};
use std::sync::Arc;

use crate::advisor::Advisor;
use crate::catalog::Catalog;

pub const SERVICE_NAME: &str = "Samsung Smart Phone Advisor";

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub advisor: Arc<Advisor>,
}

pub async fn health_check() -> Result<Json<serde_json::Value>, StatusCode> {
    Ok(Json(serde_json::json!({
        "status": "running",
        "service": SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
    })))
}

/// Installs the global `tracing` subscriber. `RUST_LOG` overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,samsung_phone_advisor=debug,tower_http=info".into()),
        )
        .init();
}
