//! Caller-side checks the kiosk applies before an operation is invoked.

use crate::{
    Error, Result,
    flows::{ConsultationRequest, DiagnosisRequest, FederatedUpdateRequest, parse_training_data},
    operation::require_text,
};

pub const MIN_SYMPTOMS_CHARS: usize = 10;
pub const MIN_VITALS_CHARS: usize = 5;

fn require_min_chars(field: &str, value: &str, min: usize, message: &str) -> Result<()> {
    if value.trim().chars().count() < min {
        return Err(Error::validation(field, message));
    }
    Ok(())
}

pub fn check_diagnosis(form: &DiagnosisRequest) -> Result<()> {
    require_min_chars(
        "symptoms",
        &form.symptoms,
        MIN_SYMPTOMS_CHARS,
        "Please describe your symptoms in at least 10 characters.",
    )?;
    require_min_chars(
        "vitals",
        &form.vitals,
        MIN_VITALS_CHARS,
        "Please provide your vitals (e.g., temp, BP).",
    )
}

pub fn check_federated_update(form: &FederatedUpdateRequest) -> Result<()> {
    require_text("kioskId", &form.kiosk_id)?;
    require_text("modelName", &form.model_name)?;
    parse_training_data(&form.training_data).map(|_| ())
}

pub fn check_consultation(form: &ConsultationRequest) -> Result<()> {
    for (field, value) in [
        ("medicalHistory", &form.medical_history),
        ("vitals", &form.vitals),
        ("labResults", &form.lab_results),
        ("imagingResults", &form.imaging_results),
        ("preferredLanguage", &form.preferred_language),
    ] {
        require_text(field, value)?;
    }
    Ok(())
}
