// Pipeline error taxonomy
use thiserror::Error;

/// Failures of the resolve -> query -> transform pipeline.
///
/// An empty sample set is not an error; it produces empty series.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PipelineError {
    /// Request rejected, timed out or connection failed.
    #[error("network error: {0}")]
    Network(String),

    /// Payload does not match the expected shape.
    #[error("failed to decode backend response: {0}")]
    Decode(String),

    /// No catalog entry matches the selected route name.
    #[error("route not found: {0}")]
    RouteNotFound(String),
}

impl PipelineError {
    /// Stable identifier surfaced to the presentation layer.
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Network(_) => "network_error",
            PipelineError::Decode(_) => "decode_error",
            PipelineError::RouteNotFound(_) => "route_not_found",
        }
    }
}

impl From<reqwest::Error> for PipelineError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            PipelineError::Decode(err.to_string())
        } else {
            PipelineError::Network(err.to_string())
        }
    }
}

impl From<serde_json::Error> for PipelineError {
    fn from(err: serde_json::Error) -> Self {
        PipelineError::Decode(err.to_string())
    }
}
