//! Application routes configuration
use crate::handlers::{
    calculate_deflection, estimate_energy, health, list_strategies, neo_browse, neo_feed,
    neo_lookup, neo_statistics, root, simulate_impact, AppState,
};
use axum::{
    http::HeaderValue,
    routing::{get, post},
    Router,
};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::warn;

/// Build the application router with all routes
pub fn build_router(state: AppState, cors_origins: &[String]) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/health", get(health))
        // Impact simulation
        .route("/api/simulation/simulate", post(simulate_impact))
        .route("/api/simulation/energy-estimate", get(estimate_energy))
        // Deflection
        .route("/api/deflection/calculate", post(calculate_deflection))
        .route("/api/deflection/strategies", get(list_strategies))
        // NEO catalog proxy
        .route("/api/asteroids/neo/feed", get(neo_feed))
        .route("/api/asteroids/neo/browse", get(neo_browse))
        .route("/api/asteroids/neo/:asteroid_id", get(neo_lookup))
        .route("/api/asteroids/statistics", get(neo_statistics))
        .layer(TraceLayer::new_for_http())
        .layer(cors_layer(cors_origins))
        .with_state(state)
}

fn cors_layer(origins: &[String]) -> CorsLayer {
    let allowed: Vec<HeaderValue> = origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!("Ignoring invalid CORS origin {:?}", origin);
                None
            }
        })
        .collect();

    CorsLayer::new()
        .allow_origin(allowed)
        .allow_methods(Any)
        .allow_headers(Any)
}
