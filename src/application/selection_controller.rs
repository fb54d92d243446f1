// Selection controller - Resolve, query and transform per route selection
use crate::application::monitoring_backend::MonitoringBackend;
use crate::application::series_transformer::SeriesTransformer;
use crate::domain::error::PipelineError;
use crate::domain::ping::FormattedSeries;
use crate::domain::route::resolve_ping_path;
use crate::domain::selection::{apply, DisplaySnapshot, Generation, SelectionEvent};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tokio::sync::watch;

/// Single writer of the published display state.
///
/// Every selection gets a new generation; completions of superseded
/// selections are dropped when they arrive, whatever order they finish in.
pub struct SelectionController {
    backend: Arc<dyn MonitoringBackend>,
    transformer: SeriesTransformer,
    clear_on_failure: bool,
    issued: AtomicU64,
    state: watch::Sender<DisplaySnapshot>,
}

impl SelectionController {
    pub fn new(
        backend: Arc<dyn MonitoringBackend>,
        transformer: SeriesTransformer,
        clear_on_failure: bool,
    ) -> Self {
        let (state, _) = watch::channel(DisplaySnapshot::default());
        Self {
            backend,
            transformer,
            clear_on_failure,
            issued: AtomicU64::new(0),
            state,
        }
    }

    pub fn subscribe(&self) -> watch::Receiver<DisplaySnapshot> {
        self.state.subscribe()
    }

    pub fn snapshot(&self) -> DisplaySnapshot {
        self.state.borrow().clone()
    }

    /// Issue a new selection and enter `Loading`. Returns its generation.
    pub fn begin(&self, route: &str) -> Generation {
        let generation = self.issued.fetch_add(1, Ordering::SeqCst) + 1;
        tracing::info!("Route {} selected (generation {})", route, generation);
        self.publish(SelectionEvent::Selected {
            generation,
            route: route.to_string(),
        });
        generation
    }

    /// Run the pipeline for an issued selection and publish the outcome.
    ///
    /// Returns `false` if the outcome was discarded as stale.
    pub async fn load(&self, generation: Generation, route: &str) -> bool {
        let event = match self.fetch_series(route).await {
            Ok(series) => {
                if series.is_empty() {
                    tracing::debug!("Route {} has no ping samples", route);
                }
                tracing::info!(
                    "Loaded {} ping samples for route {} (generation {})",
                    series.len(),
                    route,
                    generation
                );
                SelectionEvent::Loaded {
                    generation,
                    route: route.to_string(),
                    series: Arc::new(series),
                }
            }
            Err(error) => {
                tracing::warn!(
                    "Error loading route {} (generation {}): {}",
                    route,
                    generation,
                    error
                );
                SelectionEvent::Failed {
                    generation,
                    route: route.to_string(),
                    error,
                }
            }
        };

        self.publish(event)
    }

    /// Issue a selection and wait for its pipeline to finish.
    pub async fn select(&self, route: &str) -> DisplaySnapshot {
        let generation = self.begin(route);
        self.load(generation, route).await;
        self.snapshot()
    }

    async fn fetch_series(&self, route: &str) -> Result<FormattedSeries, PipelineError> {
        // The catalog endpoint is unfiltered; it is searched here on every selection
        let catalog = self.backend.route_catalog().await?;
        tracing::debug!("Route catalog has {} entries", catalog.len());

        let path = resolve_ping_path(route, &catalog)?;
        let response = self.backend.query_time_series(&path.ping).await?;

        Ok(self.transformer.transform(&response))
    }

    fn publish(&self, event: SelectionEvent) -> bool {
        let generation = event.generation();
        let applied = self.state.send_if_modified(|current| {
            match apply(current, event, self.clear_on_failure) {
                Some(next) => {
                    *current = next;
                    true
                }
                None => false,
            }
        });

        if !applied {
            tracing::debug!("Discarding stale result for generation {}", generation);
        }
        applied
    }
}
