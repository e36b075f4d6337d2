//! Result of a single classification.

use serde::Serialize;

use crate::model::Label;

/// Label plus the probability of the high-risk class, scaled to [0, 100].
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct PredictionResult {
    pub label: Label,
    pub probability_pct: f64,
}

impl PredictionResult {
    pub fn new(label: Label, probability_pct: f64) -> Self {
        Self {
            label,
            probability_pct,
        }
    }
}
