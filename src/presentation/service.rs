//! Mapping from a prediction to its display artefacts.

use crate::inference::PredictionResult;

use super::domain::{Advisory, Banner, GaugeSpec, RiskReport, RiskTier};

/// Pure function of the prediction; the same input always yields the same report.
pub fn present(prediction: PredictionResult) -> RiskReport {
    let pct = prediction.probability_pct;
    RiskReport {
        prediction,
        banner: Banner::for_label(prediction.label),
        probability_text: format!("{pct:.2}%"),
        gauge: GaugeSpec::new(pct),
        advisory: Advisory::for_tier(RiskTier::from_probability(pct)),
    }
}
