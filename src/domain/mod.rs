// Domain layer - Pure models and logic, no I/O
pub mod error;
pub mod ping;
pub mod route;
pub mod selection;
pub mod time_label;
