// Sensor domain model
use serde::{Deserialize, Serialize};

/// Soil moisture below this value means the cell needs irrigation
pub const MOISTURE_THRESHOLD: f64 = 40.0;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SensorRecord {
    pub id: String,
    pub temperature: f64,
    pub humidity: f64,
    pub soil_moisture: f64,
    pub latitude: f64,
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

impl SensorRecord {
    pub fn needs_water(&self) -> bool {
        self.soil_moisture < MOISTURE_THRESHOLD
    }
}
