//! Runtime configuration loaded from the process environment.
//!
//! Every key has a default, so an empty environment yields a working setup
//! that reads `model.json` from the current directory.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;

use crate::common::error::{RiskError, RiskResult};

/// Fixed artefact filename used when no override is configured.
pub const DEFAULT_MODEL_PATH: &str = "model.json";
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8501";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Snapshot of configuration values consumed by the service.
#[derive(Clone, Debug)]
pub struct AppCfg {
    pub model_path: PathBuf,
    pub bind_addr: SocketAddr,
    pub log_level: String,
}

impl AppCfg {
    /// Create a configuration snapshot from the process environment.
    pub fn load() -> RiskResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a snapshot from an arbitrary key lookup. Used by `load` and tests.
    pub fn from_lookup<F>(lookup: F) -> RiskResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let env_or = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        let bind_raw = env_or("RETINA_BIND_ADDR", DEFAULT_BIND_ADDR);
        let bind_addr = bind_raw.parse::<SocketAddr>().map_err(|_| {
            RiskError::invalid(format!("RETINA_BIND_ADDR is not a socket address: {bind_raw}"))
        })?;

        Ok(Self {
            model_path: PathBuf::from(env_or("RETINA_MODEL_PATH", DEFAULT_MODEL_PATH)),
            bind_addr,
            log_level: env_or("RETINA_LOG_LEVEL", DEFAULT_LOG_LEVEL),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn defaults_apply_when_environment_is_empty() {
        let cfg = AppCfg::from_lookup(|_| None).unwrap();
        assert_eq!(cfg.model_path, PathBuf::from("model.json"));
        assert_eq!(cfg.bind_addr.to_string(), "127.0.0.1:8501");
        assert_eq!(cfg.log_level, "info");
    }

    #[test]
    fn overrides_are_honoured() {
        let vars: HashMap<&str, &str> = [
            ("RETINA_MODEL_PATH", "/srv/models/retina.json"),
            ("RETINA_BIND_ADDR", "0.0.0.0:9000"),
            ("RETINA_LOG_LEVEL", "debug"),
        ]
        .into_iter()
        .collect();

        let cfg = AppCfg::from_lookup(|key| vars.get(key).map(|v| v.to_string())).unwrap();
        assert_eq!(cfg.model_path, PathBuf::from("/srv/models/retina.json"));
        assert_eq!(cfg.bind_addr.port(), 9000);
        assert_eq!(cfg.log_level, "debug");
    }

    #[test]
    fn bad_bind_address_is_rejected() {
        let err = AppCfg::from_lookup(|key| {
            (key == "RETINA_BIND_ADDR").then(|| "not-an-addr".to_string())
        })
        .unwrap_err();
        assert!(matches!(err, RiskError::InvalidInput(_)));
    }
}
