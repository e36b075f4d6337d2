//! Patient vitals and the range-constrained controls that collect them.

use serde::{Deserialize, Serialize};

use crate::common::error::{RiskError, RiskResult};

/// Description of one slider control: bounds, default and display label.
#[derive(Copy, Clone, Debug, Eq, PartialEq)]
pub struct VitalField {
    pub key: &'static str,
    pub label: &'static str,
    pub min: u16,
    pub max: u16,
    pub default: u16,
}

impl VitalField {
    pub fn contains(&self, value: u16) -> bool {
        (self.min..=self.max).contains(&value)
    }

    fn check(&self, value: u16) -> RiskResult<u16> {
        if self.contains(value) {
            Ok(value)
        } else {
            Err(RiskError::invalid(format!(
                "{} must lie in [{}, {}], got {}",
                self.key, self.min, self.max, value
            )))
        }
    }
}

pub const AGE: VitalField = VitalField {
    key: "age",
    label: "Age",
    min: 0,
    max: 100,
    default: 30,
};

pub const SYSTOLIC_BP: VitalField = VitalField {
    key: "systolic_bp",
    label: "Systolic Blood Pressure (mmHg)",
    min: 80,
    max: 200,
    default: 120,
};

pub const DIASTOLIC_BP: VitalField = VitalField {
    key: "diastolic_bp",
    label: "Diastolic Blood Pressure (mmHg)",
    min: 50,
    max: 130,
    default: 80,
};

pub const CHOLESTEROL: VitalField = VitalField {
    key: "cholesterol",
    label: "Cholesterol (mg/dl)",
    min: 100,
    max: 400,
    default: 180,
};

/// Controls in form order. This is also the feature order the model was trained on.
pub const FIELDS: [VitalField; 4] = [AGE, SYSTOLIC_BP, DIASTOLIC_BP, CHOLESTEROL];

/// Raw, unvalidated values as they arrive from a form or JSON body.
#[derive(Copy, Clone, Debug, Deserialize, Serialize, PartialEq, Eq)]
pub struct VitalsForm {
    pub age: u16,
    pub systolic_bp: u16,
    pub diastolic_bp: u16,
    pub cholesterol: u16,
}

/// Four vitals, each guaranteed to lie within its control's bounds.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct PatientInput {
    age: u16,
    systolic_bp: u16,
    diastolic_bp: u16,
    cholesterol: u16,
}

impl PatientInput {
    pub fn new(age: u16, systolic_bp: u16, diastolic_bp: u16, cholesterol: u16) -> RiskResult<Self> {
        Ok(Self {
            age: AGE.check(age)?,
            systolic_bp: SYSTOLIC_BP.check(systolic_bp)?,
            diastolic_bp: DIASTOLIC_BP.check(diastolic_bp)?,
            cholesterol: CHOLESTEROL.check(cholesterol)?,
        })
    }

    pub fn age(&self) -> u16 {
        self.age
    }

    pub fn systolic_bp(&self) -> u16 {
        self.systolic_bp
    }

    pub fn diastolic_bp(&self) -> u16 {
        self.diastolic_bp
    }

    pub fn cholesterol(&self) -> u16 {
        self.cholesterol
    }

    /// Values in `FIELDS` order.
    pub fn values(&self) -> [u16; 4] {
        [self.age, self.systolic_bp, self.diastolic_bp, self.cholesterol]
    }
}

impl Default for PatientInput {
    fn default() -> Self {
        Self {
            age: AGE.default,
            systolic_bp: SYSTOLIC_BP.default,
            diastolic_bp: DIASTOLIC_BP.default,
            cholesterol: CHOLESTEROL.default,
        }
    }
}

impl TryFrom<VitalsForm> for PatientInput {
    type Error = RiskError;

    fn try_from(form: VitalsForm) -> RiskResult<Self> {
        Self::new(form.age, form.systolic_bp, form.diastolic_bp, form.cholesterol)
    }
}

impl From<PatientInput> for VitalsForm {
    fn from(input: PatientInput) -> Self {
        Self {
            age: input.age,
            systolic_bp: input.systolic_bp,
            diastolic_bp: input.diastolic_bp,
            cholesterol: input.cholesterol,
        }
    }
}
