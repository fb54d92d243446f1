// Selection state machine - pure transitions over published snapshots
use super::error::PipelineError;
use super::ping::FormattedSeries;
use serde::Serialize;
use std::sync::Arc;

/// Sequence number attached to every issued selection.
pub type Generation = u64;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FailureInfo {
    pub kind: String,
    pub message: String,
}

impl From<&PipelineError> for FailureInfo {
    fn from(err: &PipelineError) -> Self {
        Self {
            kind: err.kind().to_string(),
            message: err.to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SelectionState {
    Idle,
    Loading { route: String },
    Ready { route: String },
    Failed { route: String, error: FailureInfo },
}

/// What the presentation layer renders.
///
/// `series` is the last successfully loaded result and survives `Loading`
/// and `Failed` unless clearing on failure is configured.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplaySnapshot {
    pub generation: Generation,
    pub state: SelectionState,
    pub displayed_route: Option<String>,
    pub series: Option<Arc<FormattedSeries>>,
}

impl Default for DisplaySnapshot {
    fn default() -> Self {
        Self {
            generation: 0,
            state: SelectionState::Idle,
            displayed_route: None,
            series: None,
        }
    }
}

#[derive(Debug, Clone)]
pub enum SelectionEvent {
    Selected {
        generation: Generation,
        route: String,
    },
    Loaded {
        generation: Generation,
        route: String,
        series: Arc<FormattedSeries>,
    },
    Failed {
        generation: Generation,
        route: String,
        error: PipelineError,
    },
}

impl SelectionEvent {
    pub fn generation(&self) -> Generation {
        match self {
            SelectionEvent::Selected { generation, .. }
            | SelectionEvent::Loaded { generation, .. }
            | SelectionEvent::Failed { generation, .. } => *generation,
        }
    }
}

/// Compute the next snapshot, or `None` when the event must be discarded.
///
/// A selection is accepted only if it is newer than the current generation.
/// A completion is accepted only if it belongs to the latest issued selection.
pub fn apply(
    current: &DisplaySnapshot,
    event: SelectionEvent,
    clear_on_failure: bool,
) -> Option<DisplaySnapshot> {
    match event {
        SelectionEvent::Selected { generation, route } => {
            if generation <= current.generation {
                return None;
            }
            Some(DisplaySnapshot {
                generation,
                state: SelectionState::Loading { route },
                displayed_route: current.displayed_route.clone(),
                series: current.series.clone(),
            })
        }
        SelectionEvent::Loaded {
            generation,
            route,
            series,
        } => {
            if generation != current.generation {
                return None;
            }
            Some(DisplaySnapshot {
                generation,
                state: SelectionState::Ready {
                    route: route.clone(),
                },
                displayed_route: Some(route),
                series: Some(series),
            })
        }
        SelectionEvent::Failed {
            generation,
            route,
            error,
        } => {
            if generation != current.generation {
                return None;
            }
            let (displayed_route, series) = if clear_on_failure {
                (None, None)
            } else {
                (current.displayed_route.clone(), current.series.clone())
            };
            Some(DisplaySnapshot {
                generation,
                state: SelectionState::Failed {
                    route,
                    error: FailureInfo::from(&error),
                },
                displayed_route,
                series,
            })
        }
    }
}
