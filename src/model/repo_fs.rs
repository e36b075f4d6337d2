//! Filesystem loader for model artefacts.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::common::config::AppCfg;
use crate::common::error::{RiskCode, RiskError, RiskResult};
use crate::common::log::log_event;
use crate::common::time::Stopwatch;

use super::domain::{LogisticClassifier, ModelArtefact};

/// Reads the artefact from a single, pre-known file.
pub struct FsModelRepo {
    path: PathBuf,
}

impl FsModelRepo {
    pub fn new(cfg: &AppCfg) -> Self {
        Self::at(&cfg.model_path)
    }

    pub fn at(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the artefact without building a classifier.
    pub fn load_artefact(&self) -> RiskResult<ModelArtefact> {
        let raw = fs::read_to_string(&self.path).map_err(|err| match err.kind() {
            io::ErrorKind::NotFound => RiskError::ModelMissing(self.path.display().to_string()),
            _ => RiskError::Io(err),
        })?;
        let artefact: ModelArtefact = serde_json::from_str(&raw)
            .map_err(|err| RiskError::corrupt(format!("{}: {err}", self.path.display())))?;
        artefact.validate()?;
        Ok(artefact)
    }

    /// Load the classifier used for the lifetime of the process.
    pub fn load_classifier(&self) -> RiskResult<LogisticClassifier> {
        let watch = Stopwatch::start();
        let result = self
            .load_artefact()
            .and_then(LogisticClassifier::from_artefact);

        match &result {
            Ok(model) => {
                log::info!(
                    "loaded model version '{}' from {}",
                    model.artefact().version,
                    self.path.display()
                );
                log_event(log::Level::Info, "model", "load", RiskCode::Ok as u32, watch.elapsed_ms());
            }
            Err(err) => {
                log::error!("model load failed: {err}");
                log_event(log::Level::Error, "model", "load", err.code() as u32, watch.elapsed_ms());
            }
        }
        result
    }
}
