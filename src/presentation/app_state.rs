// Application state for HTTP handlers
use crate::application::grid_service::GridService;

#[derive(Clone)]
pub struct AppState {
    pub grid_service: GridService,
}
