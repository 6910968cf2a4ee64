// Spatial sensor grid - sorts sensors geographically into a fixed matrix
use crate::domain::sensor::SensorRecord;
use thiserror::Error;

pub const GRID_ROWS: usize = 3;
pub const GRID_COLS: usize = 8;

#[derive(Debug, Error)]
pub enum GridError {
    #[error("expected {expected} sensors for a {rows}x{cols} grid, got {actual}")]
    SizeMismatch {
        rows: usize,
        cols: usize,
        expected: usize,
        actual: usize,
    },
}

/// Row-major matrix of sensors where each column is a north-south strip
/// of the field. Built once at startup and read-only afterwards.
#[derive(Debug, Clone)]
pub struct SensorGrid {
    cells: Vec<Vec<SensorRecord>>,
    rows: usize,
    cols: usize,
}

impl SensorGrid {
    /// Arrange an unordered batch of sensors into a `rows` x `cols` grid:
    /// sort by (latitude, longitude), cut the sorted run into `cols`
    /// chunks of `rows`, order each chunk south-to-north, then transpose
    /// so `grid[row][col]` indexes east-west slices of the field.
    pub fn build(
        mut records: Vec<SensorRecord>,
        rows: usize,
        cols: usize,
    ) -> Result<SensorGrid, GridError> {
        let expected = rows * cols;
        if records.len() != expected {
            return Err(GridError::SizeMismatch {
                rows,
                cols,
                expected,
                actual: records.len(),
            });
        }

        records.sort_by(|a, b| {
            a.latitude
                .total_cmp(&b.latitude)
                .then(a.longitude.total_cmp(&b.longitude))
        });

        let mut columns: Vec<Vec<SensorRecord>> = Vec::with_capacity(cols);
        let mut drain = records.into_iter();
        for _ in 0..cols {
            let mut column: Vec<SensorRecord> = drain.by_ref().take(rows).collect();
            column.sort_by(|a, b| a.latitude.total_cmp(&b.latitude));
            columns.push(column);
        }

        let mut cells: Vec<Vec<SensorRecord>> = (0..rows).map(|_| Vec::with_capacity(cols)).collect();
        for column in columns.into_iter() {
            for (row, sensor) in column.into_iter().enumerate() {
                cells[row].push(sensor);
            }
        }

        Ok(SensorGrid { cells, rows, cols })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn sensor_count(&self) -> usize {
        self.rows * self.cols
    }

    pub fn get(&self, row: usize, col: usize) -> Option<&SensorRecord> {
        self.cells.get(row).and_then(|r| r.get(col))
    }

    /// 1-based cell label, e.g. "C1" for the south-west corner cell.
    pub fn cell_id(&self, row: usize, col: usize) -> String {
        format!("C{}", row * self.cols + col + 1)
    }

    /// Iterate cells in row-major order as (row, col, sensor).
    pub fn iter_cells(&self) -> impl Iterator<Item = (usize, usize, &SensorRecord)> {
        self.cells.iter().enumerate().flat_map(|(row, sensors)| {
            sensors
                .iter()
                .enumerate()
                .map(move |(col, sensor)| (row, col, sensor))
        })
    }

    /// Linear scan by sensor id.
    pub fn find_by_id(&self, id: &str) -> Option<&SensorRecord> {
        self.iter_cells()
            .find(|(_, _, sensor)| sensor.id == id)
            .map(|(_, _, sensor)| sensor)
    }
}
