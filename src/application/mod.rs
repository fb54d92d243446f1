// Application layer - Use cases orchestrating the domain over the backend
pub mod monitoring_backend;
pub mod route_options_service;
pub mod selection_controller;
pub mod series_transformer;
