//! HTTP request handlers
use crate::domain::{
    DeflectionReport, DeflectionRequest, EnergyEstimate, Health, ImpactInput, ImpactReport,
    StrategyDescriptor,
};
use crate::errors::ApiError;
use crate::services::{DeflectionEstimator, ImpactEstimator, NeoService};
use crate::utils::check_positive;
use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, State},
    Json,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;
use tracing::debug;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub neo_service: Arc<NeoService>,
}

/// JSON body extractor whose rejections use the error envelope
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ApiError))]
pub struct ApiJson<T>(pub T);

/// Query string extractor whose rejections use the error envelope
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ApiError))]
pub struct ApiQuery<T>(pub T);

/// Successful response wrapper
#[derive(Serialize)]
pub struct SuccessResponse<T: Serialize> {
    pub ok: bool,
    #[serde(flatten)]
    pub data: T,
}

impl<T: Serialize> SuccessResponse<T> {
    pub fn new(data: T) -> Self {
        Self { ok: true, data }
    }
}

#[derive(Serialize)]
pub struct StrategyCatalog {
    pub strategies: &'static [StrategyDescriptor],
}

#[derive(Debug, Deserialize)]
pub struct EnergyQuery {
    pub size: f64,
    pub density: f64,
    pub velocity: f64,
}

#[derive(Debug, Deserialize)]
pub struct FeedQuery {
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct BrowseQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
}

/// Service banner
pub async fn root() -> Json<Value> {
    Json(serde_json::json!({
        "message": "Asteroid Impact Simulator API",
        "version": env!("CARGO_PKG_VERSION"),
        "docs": "/docs"
    }))
}

/// Health check handler
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "healthy",
        now: Utc::now(),
    })
}

/// Run the full impact estimate
pub async fn simulate_impact(
    ApiJson(input): ApiJson<ImpactInput>,
) -> Result<Json<SuccessResponse<ImpactReport>>, ApiError> {
    input.validate()?;
    let report = ImpactEstimator::estimate(&input);
    debug!(
        megatons = report.energy.megatons_tnt,
        water = input.is_water_impact,
        "Impact simulated"
    );
    Ok(Json(SuccessResponse::new(report)))
}

/// Energy-only estimate
pub async fn estimate_energy(
    ApiQuery(query): ApiQuery<EnergyQuery>,
) -> Result<Json<SuccessResponse<EnergyEstimate>>, ApiError> {
    check_positive("size", query.size)?;
    check_positive("density", query.density)?;
    check_positive("velocity", query.velocity)?;

    let estimate = ImpactEstimator::energy_estimate(query.size, query.density, query.velocity);
    Ok(Json(SuccessResponse::new(estimate)))
}

/// Evaluate one deflection strategy
pub async fn calculate_deflection(
    ApiJson(request): ApiJson<DeflectionRequest>,
) -> Result<Json<SuccessResponse<DeflectionReport>>, ApiError> {
    let report = DeflectionEstimator::estimate(&request)?;
    debug!(
        strategy = %request.strategy_type,
        delta_v = report.delta_v,
        "Deflection calculated"
    );
    Ok(Json(SuccessResponse::new(report)))
}

/// Static strategy catalog
pub async fn list_strategies() -> Json<SuccessResponse<StrategyCatalog>> {
    Json(SuccessResponse::new(StrategyCatalog {
        strategies: DeflectionEstimator::list_strategies(),
    }))
}

/// NEO close-approach feed (verbatim upstream JSON)
pub async fn neo_feed(
    ApiQuery(query): ApiQuery<FeedQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let data = state
        .neo_service
        .feed(query.start_date, query.end_date)
        .await?;
    Ok(Json(data))
}

/// Single NEO lookup (verbatim upstream JSON)
pub async fn neo_lookup(
    Path(asteroid_id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let data = state.neo_service.lookup(&asteroid_id).await?;
    Ok(Json(data))
}

/// NEO catalog browse (verbatim upstream JSON)
pub async fn neo_browse(
    ApiQuery(query): ApiQuery<BrowseQuery>,
    State(state): State<AppState>,
) -> Result<Json<Value>, ApiError> {
    let data = state.neo_service.browse(query.page, query.size).await?;
    Ok(Json(data))
}

/// NEO catalog statistics (verbatim upstream JSON)
pub async fn neo_statistics(State(state): State<AppState>) -> Result<Json<Value>, ApiError> {
    let data = state.neo_service.statistics().await?;
    Ok(Json(data))
}
