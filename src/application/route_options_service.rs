// Route options service - Use case for listing selectable routes
use crate::application::monitoring_backend::MonitoringBackend;
use crate::domain::route::RoutesSummary;
use std::sync::Arc;

/// Shown when the backend has no route summary to offer.
pub const PLACEHOLDER_ROUTE: &str = "Please fill routes";

#[derive(Clone)]
pub struct RouteOptionsService {
    backend: Arc<dyn MonitoringBackend>,
}

impl RouteOptionsService {
    pub fn new(backend: Arc<dyn MonitoringBackend>) -> Self {
        Self { backend }
    }

    /// Fails when the backend service state cannot be read.
    pub async fn check_availability(&self) -> anyhow::Result<()> {
        self.backend
            .service_state()
            .await
            .map_err(|e| anyhow::anyhow!("Unable to reach the service: {}", e))?;
        Ok(())
    }

    pub async fn list_route_options(&self) -> Vec<String> {
        match self.backend.routes_summary().await {
            Ok(RoutesSummary {
                test_services_routes: Some(routes),
            }) => {
                tracing::debug!("{} routes available", routes.len());
                routes
            }
            Ok(RoutesSummary {
                test_services_routes: None,
            }) => {
                tracing::warn!("Routes summary has no route list");
                vec![PLACEHOLDER_ROUTE.to_string()]
            }
            Err(e) => {
                tracing::warn!("Error fetching routes summary: {}", e);
                vec![PLACEHOLDER_ROUTE.to_string()]
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::selection_controller::tests::ScriptedBackend;
    use crate::domain::error::PipelineError;

    #[tokio::test]
    async fn test_list_route_options() {
        let backend = ScriptedBackend::new(vec![]);
        backend.set_routes(Ok(vec!["gru-mia".to_string(), "gru-lis".to_string()]));
        let service = RouteOptionsService::new(Arc::new(backend));

        assert_eq!(
            service.list_route_options().await,
            vec!["gru-mia".to_string(), "gru-lis".to_string()]
        );
    }

    #[tokio::test]
    async fn test_placeholder_when_summary_fails() {
        let backend = ScriptedBackend::new(vec![]);
        backend.set_routes(Err(PipelineError::Network("refused".to_string())));
        let service = RouteOptionsService::new(Arc::new(backend));

        assert_eq!(
            service.list_route_options().await,
            vec![PLACEHOLDER_ROUTE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_placeholder_when_summary_has_no_route_list() {
        let backend = ScriptedBackend::new(vec![]);
        let summary: RoutesSummary = serde_json::from_value(serde_json::json!({})).unwrap();
        backend.set_summary(Ok(summary));
        let service = RouteOptionsService::new(Arc::new(backend));

        assert_eq!(
            service.list_route_options().await,
            vec![PLACEHOLDER_ROUTE.to_string()]
        );
    }

    #[tokio::test]
    async fn test_availability_follows_service_state() {
        let backend = Arc::new(ScriptedBackend::new(vec![]));
        let service = RouteOptionsService::new(backend.clone());
        assert!(service.check_availability().await.is_ok());

        backend.set_service_down(true);
        let err = service.check_availability().await.unwrap_err();
        assert!(err.to_string().starts_with("Unable to reach the service"));
    }
}
