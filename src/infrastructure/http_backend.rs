// HTTP monitoring backend implementation
use crate::application::monitoring_backend::MonitoringBackend;
use crate::domain::error::PipelineError;
use crate::domain::ping::QueryResponse;
use crate::domain::route::{RouteCatalogEntry, RoutesSummary};
use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct HttpMonitoringBackend {
    base_url: String,
    client: reqwest::Client,
}

/// Every backend payload wraps its content in `data`.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
    data: T,
}

impl HttpMonitoringBackend {
    pub fn new(base_url: &str, request_timeout: Duration) -> Result<Self, PipelineError> {
        let client = reqwest::Client::builder()
            .timeout(request_timeout)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    fn query_url(&self, path: &str) -> String {
        format!(
            "{}/query?timeSeriesPath={}",
            self.base_url,
            urlencoding::encode(path)
        )
    }

    async fn get_bytes(&self, url: &str) -> Result<Vec<u8>, PipelineError> {
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            return Err(PipelineError::Network(format!(
                "{} returned status {}: {}",
                url, status, body
            )));
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn get_data<T: DeserializeOwned>(&self, url: &str) -> Result<T, PipelineError> {
        let body = self.get_bytes(url).await?;
        let envelope: Envelope<T> = serde_json::from_slice(&body)?;
        Ok(envelope.data)
    }
}

#[async_trait]
impl MonitoringBackend for HttpMonitoringBackend {
    async fn routes_summary(&self) -> Result<RoutesSummary, PipelineError> {
        let url = format!("{}/routes-summary", self.base_url);
        self.get_data(&url).await
    }

    async fn route_catalog(&self) -> Result<Vec<RouteCatalogEntry>, PipelineError> {
        let url = format!("{}/get-route-time-series", self.base_url);
        self.get_data(&url).await
    }

    async fn query_time_series(&self, path: &str) -> Result<QueryResponse, PipelineError> {
        let url = self.query_url(path);
        self.get_data(&url).await
    }

    async fn service_state(&self) -> Result<serde_json::Value, PipelineError> {
        let url = format!("{}/service-state", self.base_url);
        let body = self.get_bytes(&url).await?;
        Ok(serde_json::from_slice(&body)?)
    }
}
