// JSON response shapes for the dashboard API
use crate::domain::crop::Crop;
use crate::domain::grid::SensorGrid;
use crate::domain::sensor::SensorRecord;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

#[derive(Debug, Serialize)]
pub struct Dimensions {
    pub rows: usize,
    pub cols: usize,
}

/// Full per-sensor view for the flat list endpoint.
#[derive(Debug, Serialize)]
pub struct SensorView {
    pub id: String,
    pub temperature: f64,
    pub soil_moisture: f64,
    pub humidity: f64,
    pub latitude: f64,
    pub longitude: f64,
    pub position: Position,
    #[serde(rename = "needsWater")]
    pub needs_water: bool,
    pub crop: Crop,
    #[serde(rename = "cellId")]
    pub cell_id: String,
}

impl SensorView {
    pub fn from_cell(grid: &SensorGrid, row: usize, col: usize, sensor: &SensorRecord) -> Self {
        Self {
            id: sensor.id.clone(),
            temperature: sensor.temperature,
            soil_moisture: sensor.soil_moisture,
            humidity: sensor.humidity,
            latitude: sensor.latitude,
            longitude: sensor.longitude,
            position: Position { row, col },
            needs_water: sensor.needs_water(),
            crop: Crop::for_cell(row, col, grid.cols()),
            cell_id: grid.cell_id(row, col),
        }
    }
}

/// Per-cell view for the matrix endpoint (position is implied by the
/// cell's place in the nested arrays).
#[derive(Debug, Serialize)]
pub struct MatrixCellView {
    pub id: String,
    pub temperature: f64,
    pub soil_moisture: f64,
    pub humidity: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "needsWater")]
    pub needs_water: bool,
    pub crop: Crop,
}

impl MatrixCellView {
    pub fn from_cell(cols: usize, row: usize, col: usize, sensor: &SensorRecord) -> Self {
        Self {
            id: sensor.id.clone(),
            temperature: sensor.temperature,
            soil_moisture: sensor.soil_moisture,
            humidity: sensor.humidity,
            latitude: sensor.latitude,
            longitude: sensor.longitude,
            needs_water: sensor.needs_water(),
            crop: Crop::for_cell(row, col, cols),
        }
    }
}

/// Single-sensor detail view.
#[derive(Debug, Serialize)]
pub struct SensorDetailView {
    pub id: String,
    pub temperature: f64,
    pub soil_moisture: f64,
    pub humidity: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(rename = "needsWater")]
    pub needs_water: bool,
}

impl From<&SensorRecord> for SensorDetailView {
    fn from(sensor: &SensorRecord) -> Self {
        Self {
            id: sensor.id.clone(),
            temperature: sensor.temperature,
            soil_moisture: sensor.soil_moisture,
            humidity: sensor.humidity,
            latitude: sensor.latitude,
            longitude: sensor.longitude,
            needs_water: sensor.needs_water(),
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SensorListResponse {
    pub success: bool,
    pub sensors: Vec<SensorView>,
    pub matrix_dimensions: Dimensions,
    pub total_sensors: usize,
}

#[derive(Debug, Serialize)]
pub struct MatrixResponse {
    pub success: bool,
    pub matrix: Vec<Vec<MatrixCellView>>,
    pub dimensions: Dimensions,
}

#[derive(Debug, Serialize)]
pub struct SensorResponse {
    pub success: bool,
    pub sensor: SensorDetailView,
}

#[derive(Debug, Serialize)]
pub struct IrrigationResponse {
    pub success: bool,
    pub message: String,
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: String,
    pub sensors_loaded: bool,
    pub matrix_size: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: error.into(),
        }
    }
}
