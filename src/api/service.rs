//! Per-interaction request handler: vitals in, display artefacts out.

use std::sync::Arc;

use crate::common::error::{RiskCode, RiskResult};
use crate::common::log::log_event;
use crate::common::time::Stopwatch;
use crate::features::vectorize;
use crate::inference::ClassifierAdapter;
use crate::intake::PatientInput;
use crate::model::Classifier;
use crate::presentation::{present, RiskReport};

/// Runs vectorise, classify and present for one button press.
#[derive(Clone)]
pub struct RiskService {
    adapter: ClassifierAdapter,
}

impl RiskService {
    pub fn new(model: Arc<dyn Classifier>) -> Self {
        Self {
            adapter: ClassifierAdapter::new(model),
        }
    }

    pub fn assess(&self, input: &PatientInput) -> RiskResult<RiskReport> {
        let watch = Stopwatch::start();
        let features = vectorize(input);
        let outcome = self.adapter.classify(&features).map(present);

        match &outcome {
            Ok(report) => {
                if !report.label_agrees_with_tier() {
                    log::warn!(
                        "label {:?} disagrees with {} tier at {:.2}%",
                        report.prediction.label,
                        report.advisory.tier.as_str(),
                        report.prediction.probability_pct
                    );
                }
                log_event(log::Level::Info, "api", "assess", RiskCode::Ok as u32, watch.elapsed_ms());
            }
            Err(err) => {
                log::error!("assessment failed: {err}");
                log_event(log::Level::Error, "api", "assess", err.code() as u32, watch.elapsed_ms());
            }
        }
        outcome
    }
}
