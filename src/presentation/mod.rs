//! Risk presentation: banner, gauge and advisory for a prediction.

pub mod domain;
pub mod render;
pub mod service;

pub use domain::{Advisory, Banner, Emphasis, GaugeBand, GaugeSpec, RiskReport, RiskTier};
pub use service::present;
