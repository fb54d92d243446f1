// Server-Sent Events feed of published display snapshots
use crate::domain::selection::DisplaySnapshot;
use axum::response::sse::{Event, KeepAlive, Sse};
use futures::stream::{Stream, StreamExt};
use std::convert::Infallible;
use tokio::sync::watch;
use tokio_stream::wrappers::WatchStream;

const SNAPSHOT_EVENT: &str = "snapshot";

/// Serialize one snapshot into an SSE event
fn snapshot_event(snapshot: &DisplaySnapshot) -> Event {
    match Event::default().event(SNAPSHOT_EVENT).json_data(snapshot) {
        Ok(event) => event,
        Err(e) => {
            tracing::error!("Snapshot serialization error: {}", e);
            Event::default().event("error").data(e.to_string())
        }
    }
}

/// Stream the current snapshot, then every snapshot published after it
pub fn snapshot_events(
    rx: watch::Receiver<DisplaySnapshot>,
) -> impl Stream<Item = Result<Event, Infallible>> {
    WatchStream::new(rx).map(|snapshot| Ok(snapshot_event(&snapshot)))
}

/// Helper to create an SSE response from a receiver
pub fn sse_from_receiver(
    rx: watch::Receiver<DisplaySnapshot>,
) -> Sse<impl Stream<Item = Result<Event, Infallible>>> {
    Sse::new(snapshot_events(rx)).keep_alive(KeepAlive::default())
}
