// Crop zone classification
use serde::Serialize;

/// Crop planted in a grid cell, assigned by cell index range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Crop {
    Tomatoes,
    Onions,
    Mint,
    Unknown,
}

impl Crop {
    /// Classify a cell by its 1-based linear index `row * cols + col + 1`.
    pub fn for_cell(row: usize, col: usize, cols: usize) -> Crop {
        match row * cols + col + 1 {
            1..=8 => Crop::Tomatoes,
            9..=14 => Crop::Onions,
            15..=32 => Crop::Mint,
            _ => Crop::Unknown,
        }
    }
}
