// Route catalog domain model
use super::error::PipelineError;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Metric stream identifiers the backend exposes for a route.
///
/// Only `ping` is consumed; any other keys are kept as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PathData {
    pub ping: String,
    #[serde(flatten)]
    pub other: HashMap<String, serde_json::Value>,
}

#[cfg(test)]
impl PathData {
    pub fn new(ping: impl Into<String>) -> Self {
        Self {
            ping: ping.into(),
            other: HashMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteCatalogEntry {
    pub name: String,
    pub path: PathData,
}

#[cfg(test)]
impl RouteCatalogEntry {
    pub fn new(name: impl Into<String>, ping_path: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            path: PathData::new(ping_path),
        }
    }
}

/// Route names offered for selection. `None` when the backend omits the list.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct RoutesSummary {
    #[serde(rename = "testServicesRoutes")]
    pub test_services_routes: Option<Vec<String>>,
}

/// Find the path bundle of the first entry named `route`, in catalog order.
pub fn resolve_ping_path<'a>(
    route: &str,
    catalog: &'a [RouteCatalogEntry],
) -> Result<&'a PathData, PipelineError> {
    catalog
        .iter()
        .find(|entry| entry.name == route)
        .map(|entry| &entry.path)
        .ok_or_else(|| PipelineError::RouteNotFound(route.to_string()))
}
