// lib.rs - vitals in, retinopathy risk report out
pub mod api;
pub mod common;
pub mod features;
pub mod inference;
pub mod intake;
pub mod model;
pub mod presentation;

pub use api::{router, RiskService};
pub use common::{RiskCode, RiskError, RiskResult};
pub use intake::PatientInput;
pub use presentation::RiskReport;
