//! Classifier adapter: one predict and one predict_proba call per request.

use std::sync::Arc;

use crate::common::error::{RiskError, RiskResult};
use crate::features::FeatureVector;
use crate::model::Classifier;

use super::domain::PredictionResult;

/// Wraps the process-wide, read-only model handle.
#[derive(Clone)]
pub struct ClassifierAdapter {
    model: Arc<dyn Classifier>,
}

impl ClassifierAdapter {
    pub fn new(model: Arc<dyn Classifier>) -> Self {
        Self { model }
    }

    /// Classify one row. Model errors propagate unchanged.
    pub fn classify(&self, x: &FeatureVector) -> RiskResult<PredictionResult> {
        let label = self.model.predict(x)?;
        let [_, p_high] = self.model.predict_proba(x)?;
        if !p_high.is_finite() || !(0.0..=1.0).contains(&p_high) {
            return Err(RiskError::internal(format!(
                "classifier returned probability {p_high} outside [0, 1]"
            )));
        }
        Ok(PredictionResult::new(label, p_high * 100.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Label;

    struct Fixed(Label, f64);

    impl Classifier for Fixed {
        fn predict(&self, _: &FeatureVector) -> RiskResult<Label> {
            Ok(self.0)
        }

        fn predict_proba(&self, _: &FeatureVector) -> RiskResult<[f64; 2]> {
            Ok([1.0 - self.1, self.1])
        }
    }

    struct Broken;

    impl Classifier for Broken {
        fn predict(&self, _: &FeatureVector) -> RiskResult<Label> {
            Err(RiskError::invalid("feature shape mismatch"))
        }

        fn predict_proba(&self, _: &FeatureVector) -> RiskResult<[f64; 2]> {
            unreachable!("predict fails first")
        }
    }

    fn row() -> FeatureVector {
        FeatureVector::from_row([30.0, 120.0, 80.0, 180.0])
    }

    #[test]
    fn positive_class_probability_is_scaled_to_percent() {
        let adapter = ClassifierAdapter::new(Arc::new(Fixed(Label::High, 0.825)));
        let result = adapter.classify(&row()).unwrap();
        assert_eq!(result.label, Label::High);
        assert!((result.probability_pct - 82.5).abs() < 1e-9);
    }

    #[test]
    fn model_errors_propagate() {
        let adapter = ClassifierAdapter::new(Arc::new(Broken));
        assert!(matches!(adapter.classify(&row()), Err(RiskError::InvalidInput(_))));
    }

    #[test]
    fn out_of_range_probability_is_internal_error() {
        let adapter = ClassifierAdapter::new(Arc::new(Fixed(Label::Low, f64::NAN)));
        assert!(matches!(adapter.classify(&row()), Err(RiskError::Internal(_))));

        let adapter = ClassifierAdapter::new(Arc::new(Fixed(Label::Low, 1.5)));
        assert!(adapter.classify(&row()).is_err());
    }
}
