// Application state for HTTP handlers
use crate::application::route_options_service::RouteOptionsService;
use crate::application::selection_controller::SelectionController;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub route_options: RouteOptionsService,
    pub controller: Arc<SelectionController>,
}
