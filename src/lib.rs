//! Booking pricing and availability service for the rental admin dashboard.

pub mod booking;
pub mod cache;
pub mod config;
pub mod db;
pub mod error;
pub mod extract;
pub mod models;

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use tower_http::{compression::CompressionLayer, cors::CorsLayer, trace::TraceLayer};

use crate::booking::responses::HealthResponse;
use crate::booking::FeeRates;
use crate::cache::AppCache;
use crate::db::BookingStore;

/// Shared state handed to every handler
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn BookingStore>,
    pub cache: AppCache,
    pub fee_rates: FeeRates,
}

/// Full application router
pub fn app(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .merge(booking::router())
        .layer(TraceLayer::new_for_http())
        .layer(CompressionLayer::new())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        cache: state.cache.stats(),
    })
}
