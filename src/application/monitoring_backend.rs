// Backend trait for route and time series reads
use crate::domain::error::PipelineError;
use crate::domain::ping::QueryResponse;
use crate::domain::route::{RouteCatalogEntry, RoutesSummary};
use async_trait::async_trait;

#[async_trait]
pub trait MonitoringBackend: Send + Sync {
    /// Route names offered for selection
    async fn routes_summary(&self) -> Result<RoutesSummary, PipelineError>;

    /// Full, unfiltered route catalog in backend order
    async fn route_catalog(&self) -> Result<Vec<RouteCatalogEntry>, PipelineError>;

    /// Raw samples for one metric path, exactly one read, no retry
    async fn query_time_series(&self, path: &str) -> Result<QueryResponse, PipelineError>;

    /// Opaque service state, only used to gate availability
    async fn service_state(&self) -> Result<serde_json::Value, PipelineError>;
}
