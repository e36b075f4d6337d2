//! Public entry points: the per-interaction service and its HTTP binding.

pub mod http;
pub mod service;

pub use http::router;
pub use service::RiskService;
