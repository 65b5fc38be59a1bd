//! Business logic services layer
pub mod deflection;
pub mod impact;

#[cfg(test)]
mod proptest_estimators;

pub use deflection::DeflectionEstimator;
pub use impact::ImpactEstimator;

use crate::clients::NeoWsClient;
use crate::errors::{ApiError, ApiResult};
use crate::utils::feed_window;
use chrono::Utc;
use serde_json::Value;
use tracing::{debug, warn};

/// Default and maximum page size for catalog browsing
pub const DEFAULT_BROWSE_SIZE: u32 = 20;
pub const MAX_BROWSE_SIZE: u32 = 100;

/// Near-Earth object catalog proxy
pub struct NeoService {
    client: NeoWsClient,
}

impl NeoService {
    pub fn new(client: NeoWsClient) -> Self {
        Self { client }
    }

    /// Close-approach feed, defaulting to today through +7 days
    pub async fn feed(
        &self,
        start_date: Option<String>,
        end_date: Option<String>,
    ) -> ApiResult<Value> {
        let (start, end) = feed_window(Utc::now().date_naive(), start_date, end_date);
        debug!(%start, %end, "Forwarding NEO feed request");

        self.client
            .fetch_feed(&start, &end)
            .await
            .inspect_err(|e| warn!("NEO feed fetch error: {}", e))
    }

    /// Look up a single object by identifier
    pub async fn lookup(&self, asteroid_id: &str) -> ApiResult<Value> {
        if asteroid_id.is_empty() || !asteroid_id.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(ApiError::InvalidInput(format!(
                "asteroid id must be alphanumeric, got {:?}",
                asteroid_id
            )));
        }
        debug!(asteroid_id, "Forwarding NEO lookup");

        self.client
            .fetch_neo(asteroid_id)
            .await
            .inspect_err(|e| warn!("NEO lookup error for {}: {}", asteroid_id, e))
    }

    /// Browse the catalog page by page
    pub async fn browse(&self, page: Option<u32>, size: Option<u32>) -> ApiResult<Value> {
        let page = page.unwrap_or(0);
        let size = size.unwrap_or(DEFAULT_BROWSE_SIZE);
        if !(1..=MAX_BROWSE_SIZE).contains(&size) {
            return Err(ApiError::InvalidInput(format!(
                "size must be within [1, {}], got {}",
                MAX_BROWSE_SIZE, size
            )));
        }
        debug!(page, size, "Forwarding NEO browse request");

        self.client
            .browse(page, size)
            .await
            .inspect_err(|e| warn!("NEO browse error: {}", e))
    }

    /// Catalog statistics
    pub async fn statistics(&self) -> ApiResult<Value> {
        self.client
            .fetch_stats()
            .await
            .inspect_err(|e| warn!("NEO statistics error: {}", e))
    }
}
