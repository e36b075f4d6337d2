//! Classifier contract and the exported logistic model artefact.
//!
//! The artefact is a JSON document produced by the training pipeline. Its
//! `features` list must equal [`FEATURE_NAMES`]; the column order is the only
//! link between vectorisation and the trained weights.

use serde::{Deserialize, Serialize};

use crate::common::error::{RiskError, RiskResult};
use crate::features::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};

/// Discrete classifier output.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Label {
    Low = 0,
    High = 1,
}

impl Label {
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Black-box binary classifier. Implementations must be immutable once built.
pub trait Classifier: Send + Sync {
    /// Predicted class for the single row in `x`.
    fn predict(&self, x: &FeatureVector) -> RiskResult<Label>;

    /// `[p_low, p_high]` for the single row in `x`.
    fn predict_proba(&self, x: &FeatureVector) -> RiskResult<[f64; 2]>;
}

/// Supported artefact kinds.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModelKind {
    #[default]
    Logistic,
}

/// Per-feature standardisation applied before the linear term.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Scaler {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

fn default_threshold() -> f64 {
    0.5
}

/// On-disk model description.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ModelArtefact {
    #[serde(default)]
    pub kind: ModelKind,
    #[serde(default)]
    pub version: String,
    pub features: Vec<String>,
    pub coefficients: Vec<f64>,
    pub intercept: f64,
    #[serde(default)]
    pub scaler: Option<Scaler>,
    #[serde(default = "default_threshold")]
    pub decision_threshold: f64,
}

impl ModelArtefact {
    /// Reject artefacts that do not fit the four-column vitals row.
    pub fn validate(&self) -> RiskResult<()> {
        if self.features != FEATURE_NAMES {
            return Err(RiskError::corrupt(format!(
                "feature order {:?} does not match {:?}",
                self.features, FEATURE_NAMES
            )));
        }
        check_finite("coefficients", &self.coefficients)?;
        if !self.intercept.is_finite() {
            return Err(RiskError::corrupt("intercept is not finite"));
        }
        if let Some(scaler) = &self.scaler {
            check_finite("scaler.mean", &scaler.mean)?;
            check_finite("scaler.scale", &scaler.scale)?;
            if scaler.scale.iter().any(|s| *s == 0.0) {
                return Err(RiskError::corrupt("scaler.scale contains zero"));
            }
        }
        if !(0.0..=1.0).contains(&self.decision_threshold) {
            return Err(RiskError::corrupt(format!(
                "decision_threshold {} outside [0, 1]",
                self.decision_threshold
            )));
        }
        Ok(())
    }
}

fn check_finite(name: &str, values: &[f64]) -> RiskResult<()> {
    if values.len() != FEATURE_COUNT {
        return Err(RiskError::corrupt(format!(
            "{name} has {} entries, expected {FEATURE_COUNT}",
            values.len()
        )));
    }
    if values.iter().any(|v| !v.is_finite()) {
        return Err(RiskError::corrupt(format!("{name} contains non-finite values")));
    }
    Ok(())
}

/// Logistic regression over the vitals row.
#[derive(Clone, Debug)]
pub struct LogisticClassifier {
    artefact: ModelArtefact,
}

impl LogisticClassifier {
    pub fn from_artefact(artefact: ModelArtefact) -> RiskResult<Self> {
        artefact.validate()?;
        Ok(Self { artefact })
    }

    pub fn artefact(&self) -> &ModelArtefact {
        &self.artefact
    }

    fn decision(&self, x: &FeatureVector) -> RiskResult<f64> {
        let row = x.row();
        let weights = &self.artefact.coefficients;
        if row.len() != weights.len() {
            return Err(RiskError::invalid(format!(
                "feature shape mismatch: got {} columns, model expects {}",
                row.len(),
                weights.len()
            )));
        }

        let mut z = self.artefact.intercept;
        for (idx, (value, weight)) in row.iter().zip(weights).enumerate() {
            let scaled = match &self.artefact.scaler {
                Some(s) => (value - s.mean[idx]) / s.scale[idx],
                None => *value,
            };
            z += weight * scaled;
        }
        Ok(z)
    }
}

fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}

impl Classifier for LogisticClassifier {
    fn predict(&self, x: &FeatureVector) -> RiskResult<Label> {
        let [_, p_high] = self.predict_proba(x)?;
        Ok(if p_high > self.artefact.decision_threshold {
            Label::High
        } else {
            Label::Low
        })
    }

    fn predict_proba(&self, x: &FeatureVector) -> RiskResult<[f64; 2]> {
        let p_high = sigmoid(self.decision(x)?);
        Ok([1.0 - p_high, p_high])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn artefact() -> ModelArtefact {
        ModelArtefact {
            kind: ModelKind::Logistic,
            version: "test".into(),
            features: FEATURE_NAMES.iter().map(|s| s.to_string()).collect(),
            coefficients: vec![0.0, 0.0, 0.0, 0.0],
            intercept: 0.0,
            scaler: None,
            decision_threshold: 0.5,
        }
    }

    #[test]
    fn zero_weights_give_even_odds_and_low_label() {
        let model = LogisticClassifier::from_artefact(artefact()).unwrap();
        let x = FeatureVector::from_row([30.0, 120.0, 80.0, 180.0]);
        let [p_low, p_high] = model.predict_proba(&x).unwrap();
        assert!((p_low - 0.5).abs() < 1e-12);
        assert!((p_high - 0.5).abs() < 1e-12);
        // Ties resolve to the negative class.
        assert_eq!(model.predict(&x).unwrap(), Label::Low);
    }

    #[test]
    fn scaler_centres_inputs() {
        let mut a = artefact();
        a.coefficients = vec![1.0, 0.0, 0.0, 0.0];
        a.scaler = Some(Scaler {
            mean: vec![50.0, 0.0, 0.0, 0.0],
            scale: vec![10.0, 1.0, 1.0, 1.0],
        });
        let model = LogisticClassifier::from_artefact(a).unwrap();
        let x = FeatureVector::from_row([70.0, 120.0, 80.0, 180.0]);
        let [_, p_high] = model.predict_proba(&x).unwrap();
        assert!((p_high - sigmoid(2.0)).abs() < 1e-12);
        assert_eq!(model.predict(&x).unwrap(), Label::High);
    }

    #[test]
    fn decision_threshold_moves_the_label_only() {
        let mut a = artefact();
        a.intercept = 0.5;
        a.decision_threshold = 0.7;
        let model = LogisticClassifier::from_artefact(a).unwrap();
        let x = FeatureVector::from_row([30.0, 120.0, 80.0, 180.0]);
        let [_, p_high] = model.predict_proba(&x).unwrap();
        assert!(p_high > 0.6 && p_high < 0.7);
        assert_eq!(model.predict(&x).unwrap(), Label::Low);
    }

    #[test]
    fn sigmoid_is_stable_at_extremes() {
        assert_eq!(sigmoid(1000.0), 1.0);
        assert_eq!(sigmoid(-1000.0), 0.0);
    }

    #[test]
    fn validation_rejects_malformed_artefacts() {
        let mut reordered = artefact();
        reordered.features.swap(0, 3);
        assert!(matches!(reordered.validate(), Err(RiskError::ModelCorrupt(_))));

        let mut short = artefact();
        short.coefficients.pop();
        assert!(short.validate().is_err());

        let mut nan = artefact();
        nan.coefficients[1] = f64::NAN;
        assert!(nan.validate().is_err());

        let mut zero_scale = artefact();
        zero_scale.scaler = Some(Scaler {
            mean: vec![0.0; 4],
            scale: vec![1.0, 0.0, 1.0, 1.0],
        });
        assert!(zero_scale.validate().is_err());

        let mut bad_threshold = artefact();
        bad_threshold.decision_threshold = 1.5;
        assert!(bad_threshold.validate().is_err());
    }

    #[test]
    fn labels_serialise_lowercase() {
        assert_eq!(serde_json::to_string(&Label::High).unwrap(), "\"high\"");
        assert_eq!(Label::High.as_u8(), 1);
        assert_eq!(Label::Low.as_u8(), 0);
    }
}
