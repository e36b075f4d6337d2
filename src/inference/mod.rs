//! Inference: turning a feature row into a label and a risk percentage.

pub mod domain;
pub mod service;

pub use domain::PredictionResult;
pub use service::ClassifierAdapter;
