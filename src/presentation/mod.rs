// Presentation layer - HTTP API over the published display state
pub mod app_state;
pub mod handlers;
