use crate::{
    Result,
    llm::OutputSchema,
    operation::{StructuredOperation, require_text},
};
use serde::{Deserialize, Serialize};
use serde_json::json;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConsultationRequest {
    pub medical_history: String,
    pub vitals: String,
    pub lab_results: String,
    pub imaging_results: String,
    pub preferred_language: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConsultationSummary {
    pub summary: String,
}

pub struct TeleConsultationSupport;

impl StructuredOperation for TeleConsultationSupport {
    type Input = ConsultationRequest;
    type Output = ConsultationSummary;

    const NAME: &'static str = "tele_consultation_support";
    const FAILURE_MESSAGE: &'static str = "Failed to generate summary. Please try again.";

    fn system_prompt() -> Option<&'static str> {
        Some(
            "You are an AI assistant that summarizes patient information for doctors during \
             tele-consultations.",
        )
    }

    fn template() -> &'static str {
        "Provide a concise summary of the patient's medical history, vitals, lab results and \
imaging results, written in the doctor's preferred language.

Medical History: {{medicalHistory}}
Vitals: {{vitals}}
Lab Results: {{labResults}}
Imaging Results: {{imagingResults}}
Preferred Language: {{preferredLanguage}}
"
    }

    fn output_schema() -> OutputSchema {
        OutputSchema {
            name: "tele_consultation_support_output".to_string(),
            description: "Patient summary for a tele-consultation".to_string(),
            schema: json!({
                "type": "object",
                "properties": {
                    "summary": {
                        "type": "string",
                        "description": "A concise summary of the patient's medical information in the preferred language."
                    }
                },
                "required": ["summary"],
                "additionalProperties": false
            }),
        }
    }

    fn validate_input(input: &ConsultationRequest) -> Result<()> {
        require_text("medicalHistory", &input.medical_history)?;
        require_text("vitals", &input.vitals)?;
        require_text("labResults", &input.lab_results)?;
        require_text("imagingResults", &input.imaging_results)?;
        require_text("preferredLanguage", &input.preferred_language)
    }
}
