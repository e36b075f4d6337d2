//! Fixed-order numeric feature rows handed to classifiers.

use serde::Serialize;

/// Number of columns every classifier in this crate expects.
pub const FEATURE_COUNT: usize = 4;

/// Column names in the order the model was trained on.
pub const FEATURE_NAMES: [&str; FEATURE_COUNT] = ["age", "systolic_bp", "diastolic_bp", "cholesterol"];

/// A single-row, four-column feature matrix.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct FeatureVector {
    rows: [[f64; FEATURE_COUNT]; 1],
}

impl FeatureVector {
    pub fn from_row(row: [f64; FEATURE_COUNT]) -> Self {
        Self { rows: [row] }
    }

    /// `(rows, columns)`, always `(1, 4)`.
    pub fn shape(&self) -> (usize, usize) {
        (self.rows.len(), FEATURE_COUNT)
    }

    pub fn rows(&self) -> &[[f64; FEATURE_COUNT]] {
        &self.rows
    }

    pub fn row(&self) -> &[f64; FEATURE_COUNT] {
        &self.rows[0]
    }
}
