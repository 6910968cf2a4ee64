// Presentation layer - HTTP handlers and response shapes
pub mod app_state;
pub mod handlers;
pub mod views;
