//! Feature vectorisation for the classifier.

pub mod domain;
pub mod service;

pub use domain::{FeatureVector, FEATURE_COUNT, FEATURE_NAMES};
pub use service::vectorize;
