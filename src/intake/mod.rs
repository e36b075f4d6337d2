//! Input collection: the four bounded vitals and their slider controls.

pub mod domain;

pub use domain::{PatientInput, VitalField, VitalsForm, FIELDS};
