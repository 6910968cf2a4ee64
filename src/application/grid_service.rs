// Grid service - Use cases over the startup-built sensor grid
use crate::application::sensor_repository::SensorRepository;
use crate::domain::grid::{SensorGrid, GRID_COLS, GRID_ROWS};
use std::sync::Arc;

/// Acknowledgement for a simulated irrigation request.
#[derive(Debug, Clone)]
pub struct IrrigationAck {
    pub message: String,
    pub timestamp: String,
}

#[derive(Clone)]
pub struct GridService {
    grid: Arc<SensorGrid>,
}

impl GridService {
    pub fn new(grid: SensorGrid) -> Self {
        Self {
            grid: Arc::new(grid),
        }
    }

    /// Load all sensor records and arrange them into the fixed 3x8 grid.
    /// Any load or sizing failure aborts startup rather than serving a
    /// partially-populated grid.
    pub async fn from_repository(repository: Arc<dyn SensorRepository>) -> anyhow::Result<Self> {
        let records = repository.load_sensors().await?;
        let grid = SensorGrid::build(records, GRID_ROWS, GRID_COLS)?;
        tracing::info!(
            sensors = grid.sensor_count(),
            rows = grid.rows(),
            cols = grid.cols(),
            "sensor grid built"
        );
        Ok(Self::new(grid))
    }

    pub fn grid(&self) -> &SensorGrid {
        &self.grid
    }

    /// Simulated irrigation: logs the request and returns an
    /// acknowledgement, no device is driven.
    pub fn irrigate(&self, sensor_id: &str) -> IrrigationAck {
        tracing::info!(sensor_id, "irrigation triggered");
        IrrigationAck {
            message: format!("Irrigation started for {}", sensor_id),
            timestamp: chrono::Local::now().to_rfc3339(),
        }
    }
}
