//! External API clients module
use crate::errors::ApiResult;
use reqwest::Client;
use serde_json::Value;
use std::time::Duration;

/// HTTP client wrapper with common configuration
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent("asteroid-impact-service/1.0")
            .build()?;
        Ok(Self { client })
    }

    pub fn get_client(&self) -> &Client {
        &self.client
    }
}

/// NASA NeoWs (Near Earth Object Web Service) client.
///
/// Responses are passed back exactly as the upstream sent them.
#[derive(Clone)]
pub struct NeoWsClient {
    http_client: HttpClient,
    base_url: String,
    api_key: String,
}

impl NeoWsClient {
    pub fn new(base_url: String, api_key: String, timeout: Duration) -> ApiResult<Self> {
        Ok(Self {
            http_client: HttpClient::new(timeout)?,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key,
        })
    }

    /// Close approaches within a date range
    pub async fn fetch_feed(&self, start_date: &str, end_date: &str) -> ApiResult<Value> {
        self.get_json(
            "feed",
            &[("start_date", start_date.to_string()), ("end_date", end_date.to_string())],
        )
        .await
    }

    /// Single object by its NeoWs / SPK identifier
    pub async fn fetch_neo(&self, asteroid_id: &str) -> ApiResult<Value> {
        self.get_json(&format!("neo/{}", asteroid_id), &[]).await
    }

    /// Paginated listing of the whole catalog
    pub async fn browse(&self, page: u32, size: u32) -> ApiResult<Value> {
        self.get_json(
            "neo/browse",
            &[("page", page.to_string()), ("size", size.to_string())],
        )
        .await
    }

    /// Catalog-wide statistics
    pub async fn fetch_stats(&self) -> ApiResult<Value> {
        self.get_json("stats", &[]).await
    }

    async fn get_json(&self, path: &str, params: &[(&str, String)]) -> ApiResult<Value> {
        let url = format!("{}/{}", self.base_url, path);
        let mut req = self.http_client.get_client().get(&url).query(params);

        if !self.api_key.is_empty() {
            req = req.query(&[("api_key", &self.api_key)]);
        }

        let json = req.send().await?.error_for_status()?.json().await?;
        Ok(json)
    }
}
