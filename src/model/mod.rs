//! Model artefacts: the classifier contract, the logistic engine and its loader.

pub mod domain;
pub mod repo_fs;

pub use domain::{Classifier, Label, LogisticClassifier, ModelArtefact};
pub use repo_fs::FsModelRepo;
