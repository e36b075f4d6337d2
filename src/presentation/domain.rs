//! Display artefacts derived from a prediction: banner, gauge and advisory.
//!
//! Two independent signals feed these artefacts. The banner follows the
//! classifier's discrete label; the gauge band and the advisory tier follow
//! the probability alone. They disagree whenever the model's decision
//! threshold is not 50%, and [`RiskReport::label_agrees_with_tier`] reports it.

use serde::Serialize;

use crate::inference::PredictionResult;
use crate::model::Label;

pub const LOW_UPPER: f64 = 50.0;
pub const MODERATE_UPPER: f64 = 75.0;
pub const GAUGE_MAX: f64 = 100.0;

/// Visual weight of a message box.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Emphasis {
    Success,
    Warning,
    Error,
}

impl Emphasis {
    pub fn as_str(&self) -> &'static str {
        match self {
            Emphasis::Success => "success",
            Emphasis::Warning => "warning",
            Emphasis::Error => "error",
        }
    }
}

/// Probability bucket.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RiskTier {
    Low,
    Moderate,
    High,
}

impl RiskTier {
    /// `< 50` low, `50..=75` moderate, `> 75` high.
    pub fn from_probability(pct: f64) -> Self {
        if pct < LOW_UPPER {
            RiskTier::Low
        } else if pct <= MODERATE_UPPER {
            RiskTier::Moderate
        } else {
            RiskTier::High
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RiskTier::Low => "low",
            RiskTier::Moderate => "moderate",
            RiskTier::High => "high",
        }
    }
}

/// Headline driven by the discrete label.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Banner {
    pub label: Label,
    pub emphasis: Emphasis,
    pub text: &'static str,
}

impl Banner {
    pub fn for_label(label: Label) -> Self {
        match label {
            Label::High => Self {
                label,
                emphasis: Emphasis::Error,
                text: "High Risk of Diabetic Retinopathy!",
            },
            Label::Low => Self {
                label,
                emphasis: Emphasis::Success,
                text: "Low Risk of Diabetic Retinopathy.",
            },
        }
    }
}

/// Closing advice driven by the probability tier.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize)]
pub struct Advisory {
    pub tier: RiskTier,
    pub emphasis: Emphasis,
    pub text: &'static str,
}

impl Advisory {
    pub fn for_tier(tier: RiskTier) -> Self {
        let (emphasis, text) = match tier {
            RiskTier::Low => (
                Emphasis::Success,
                "You are currently at low risk. Keep maintaining a healthy lifestyle!",
            ),
            RiskTier::Moderate => (
                Emphasis::Warning,
                "Moderate risk detected. Please monitor your health carefully!",
            ),
            RiskTier::High => (
                Emphasis::Error,
                "High risk detected! Please consult a healthcare professional immediately.",
            ),
        };
        Self {
            tier,
            emphasis,
            text,
        }
    }
}

/// Coloured range on the gauge. `to` is exclusive except on the last band.
#[derive(Copy, Clone, Debug, PartialEq, Serialize)]
pub struct GaugeBand {
    pub tier: RiskTier,
    pub from: f64,
    pub to: f64,
    pub color: &'static str,
}

pub const GAUGE_BANDS: [GaugeBand; 3] = [
    GaugeBand {
        tier: RiskTier::Low,
        from: 0.0,
        to: LOW_UPPER,
        color: "lightgreen",
    },
    GaugeBand {
        tier: RiskTier::Moderate,
        from: LOW_UPPER,
        to: MODERATE_UPPER,
        color: "yellow",
    },
    GaugeBand {
        tier: RiskTier::High,
        from: MODERATE_UPPER,
        to: GAUGE_MAX,
        color: "red",
    },
];

/// Everything a renderer needs to draw the gauge.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct GaugeSpec {
    pub title: &'static str,
    pub min: f64,
    pub max: f64,
    pub value: f64,
    pub threshold: f64,
    pub suffix: &'static str,
    pub bands: [GaugeBand; 3],
}

impl GaugeSpec {
    pub fn new(value: f64) -> Self {
        Self {
            title: "Retinopathy Risk Level",
            min: 0.0,
            max: GAUGE_MAX,
            value,
            threshold: value,
            suffix: "%",
            bands: GAUGE_BANDS,
        }
    }

    /// Band containing `value`; values outside the scale clamp to the nearest band.
    pub fn band_at(&self, value: f64) -> &GaugeBand {
        let last = self.bands.len() - 1;
        self.bands
            .iter()
            .take(last)
            .find(|band| value < band.to)
            .unwrap_or(&self.bands[last])
    }

    /// Band under the needle.
    pub fn active_band(&self) -> &GaugeBand {
        self.band_at(self.value)
    }
}

/// The full output region for one interaction.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RiskReport {
    pub prediction: PredictionResult,
    pub banner: Banner,
    pub probability_text: String,
    pub gauge: GaugeSpec,
    pub advisory: Advisory,
}

impl RiskReport {
    /// True when the label-driven banner and the probability tier point the same way.
    pub fn label_agrees_with_tier(&self) -> bool {
        match self.banner.label {
            Label::High => self.advisory.tier != RiskTier::Low,
            Label::Low => self.advisory.tier == RiskTier::Low,
        }
    }
}
