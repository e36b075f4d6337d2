//! Vectorisation of validated patient input.

use crate::intake::PatientInput;

use super::domain::FeatureVector;

/// Build the model input row as (age, systolic_bp, diastolic_bp, cholesterol).
pub fn vectorize(input: &PatientInput) -> FeatureVector {
    FeatureVector::from_row([
        f64::from(input.age()),
        f64::from(input.systolic_bp()),
        f64::from(input.diastolic_bp()),
        f64::from(input.cholesterol()),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::domain::FEATURE_NAMES;
    use crate::intake::FIELDS;

    #[test]
    fn defaults_vectorise_in_training_order() {
        let vector = vectorize(&PatientInput::default());
        assert_eq!(vector.shape(), (1, 4));
        assert_eq!(vector.rows(), &[[30.0, 120.0, 80.0, 180.0]]);
    }

    #[test]
    fn column_order_follows_form_fields() {
        let names: Vec<&str> = FIELDS.iter().map(|f| f.key).collect();
        assert_eq!(names, FEATURE_NAMES);

        let input = PatientInput::new(65, 160, 95, 250).unwrap();
        assert_eq!(vectorize(&input).row(), &[65.0, 160.0, 95.0, 250.0]);
    }
}
