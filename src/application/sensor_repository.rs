// Repository trait for sensor record access
use crate::domain::sensor::SensorRecord;
use async_trait::async_trait;

#[async_trait]
pub trait SensorRepository: Send + Sync {
    /// Load the full batch of sensor records used for grid construction.
    async fn load_sensors(&self) -> anyhow::Result<Vec<SensorRecord>>;
}
