use crate::{
    Result,
    llm::OutputSchema,
    operation::{StructuredOperation, require_text},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiagnosisRequest {
    pub symptoms: String,
    pub vitals: String,
    #[serde(default)]
    pub medical_history: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct DiagnosisReport {
    pub preliminary_diagnosis: String,
    pub suggested_treatment_plan: String,
    /// Model-reported confidence in [0, 1].
    pub confidence_level: f64,
}

pub struct DiagnosisAssistant;

impl StructuredOperation for DiagnosisAssistant {
    type Input = DiagnosisRequest;
    type Output = DiagnosisReport;

    const NAME: &'static str = "ai_diagnosis_assistant";
    const FAILURE_MESSAGE: &'static str = "Failed to get diagnosis. Please try again.";

    fn system_prompt() -> Option<&'static str> {
        Some(
            "You are an AI assistant at a rural healthcare kiosk. You provide preliminary \
             diagnoses and suggest treatment plans based on patient symptoms and vitals.",
        )
    }

    fn template() -> &'static str {
        "Based on the following information, provide a preliminary diagnosis and suggest a \
treatment plan. Also provide a confidence level between 0 and 1 for your diagnosis and \
treatment plan.

Symptoms: {{symptoms}}
Vitals: {{vitals}}
Medical History: {{medicalHistory}}
"
    }

    fn output_schema() -> OutputSchema {
        OutputSchema {
            name: "ai_diagnosis_assistant_output".to_string(),
            description: "Preliminary diagnosis with a suggested treatment plan".to_string(),
            schema: json!({
                "type": "object",
                "properties": {
                    "preliminaryDiagnosis": {
                        "type": "string",
                        "description": "The preliminary diagnosis of the patient."
                    },
                    "suggestedTreatmentPlan": {
                        "type": "string",
                        "description": "The suggested treatment plan for the patient."
                    },
                    "confidenceLevel": {
                        "type": "number",
                        "description": "Confidence in the diagnosis and treatment plan, from 0 to 1."
                    }
                },
                "required": ["preliminaryDiagnosis", "suggestedTreatmentPlan", "confidenceLevel"],
                "additionalProperties": false
            }),
        }
    }

    fn validate_input(input: &DiagnosisRequest) -> Result<()> {
        require_text("symptoms", &input.symptoms)?;
        require_text("vitals", &input.vitals)
    }

    fn check_output(output: &DiagnosisReport) -> std::result::Result<(), String> {
        if !(0.0..=1.0).contains(&output.confidence_level) {
            return Err(format!(
                "confidenceLevel {} is outside [0, 1]",
                output.confidence_level
            ));
        }
        Ok(())
    }
}
