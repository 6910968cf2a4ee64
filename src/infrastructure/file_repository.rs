// File-backed sensor repository
use crate::application::sensor_repository::SensorRepository;
use crate::domain::sensor::SensorRecord;
use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};

/// Reads one fixed-shape JSON file per sensor (`DataNN.txt`). Missing
/// files are filled with a deterministic placeholder record which is
/// written back to disk; unreadable or malformed files abort the load so
/// the grid is never built undersized.
#[derive(Debug, Clone)]
pub struct FileSensorRepository {
    data_dir: PathBuf,
    sensor_count: usize,
}

impl FileSensorRepository {
    pub fn new(data_dir: impl Into<PathBuf>, sensor_count: usize) -> Self {
        Self {
            data_dir: data_dir.into(),
            sensor_count,
        }
    }

    fn sensor_path(&self, index: usize) -> PathBuf {
        self.data_dir.join(format!("Data{:02}.txt", index + 1))
    }

    /// Placeholder record for sensor slot `index` (0-based), spread over
    /// a small latitude/longitude range so the grid stays meaningful.
    fn placeholder(index: usize) -> SensorRecord {
        SensorRecord {
            id: format!("Sensor{:02}", index + 1),
            temperature: 20.0 + (index % 10) as f64,
            soil_moisture: 30.0 + ((index * 2) % 50) as f64,
            humidity: 40.0 + ((index * 3) % 40) as f64,
            latitude: 36.5 + (index / 8) as f64 * 0.01,
            longitude: 10.1 + (index % 8) as f64 * 0.01,
            timestamp: None,
        }
    }

    async fn load_or_synthesize(&self, index: usize) -> Result<SensorRecord> {
        let path = self.sensor_path(index);
        if path.exists() {
            read_sensor_file(&path).await
        } else {
            let record = Self::placeholder(index);
            tracing::warn!(path = %path.display(), id = %record.id, "sensor file missing, writing placeholder");
            write_sensor_file(&path, &record).await?;
            Ok(record)
        }
    }
}

async fn read_sensor_file(path: &Path) -> Result<SensorRecord> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("failed to read sensor file {}", path.display()))?;
    serde_json::from_str(&raw)
        .with_context(|| format!("invalid sensor record in {}", path.display()))
}

async fn write_sensor_file(path: &Path, record: &SensorRecord) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("failed to create data directory {}", parent.display()))?;
    }
    let json = serde_json::to_string_pretty(record)?;
    tokio::fs::write(path, json)
        .await
        .with_context(|| format!("failed to write sensor file {}", path.display()))
}

#[async_trait]
impl SensorRepository for FileSensorRepository {
    async fn load_sensors(&self) -> Result<Vec<SensorRecord>> {
        let mut sensors = Vec::with_capacity(self.sensor_count);
        for index in 0..self.sensor_count {
            sensors.push(self.load_or_synthesize(index).await?);
        }
        tracing::info!(count = sensors.len(), dir = %self.data_dir.display(), "loaded sensor records");
        Ok(sensors)
    }
}
