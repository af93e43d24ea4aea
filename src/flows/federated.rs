use crate::{
    Error, Result,
    llm::OutputSchema,
    operation::{StructuredOperation, require_text},
};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FederatedUpdateRequest {
    pub kiosk_id: String,
    pub model_name: String,
    /// JSON document, kept as text.
    pub training_data: String,
}

/// Both fields are opaque provider text; neither is parsed here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct FederatedUpdate {
    pub model_update: String,
    pub metrics: String,
}

pub struct FederatedLearningModel;

pub fn parse_training_data(training_data: &str) -> Result<Value> {
    serde_json::from_str(training_data)
        .map_err(|_| Error::validation("trainingData", "must be a valid JSON string"))
}

impl StructuredOperation for FederatedLearningModel {
    type Input = FederatedUpdateRequest;
    type Output = FederatedUpdate;

    const NAME: &'static str = "federated_learning_model";
    const FAILURE_MESSAGE: &'static str = "Failed to update model. Please try again.";

    fn system_prompt() -> Option<&'static str> {
        Some(
            "You are a federated learning agent participating in collaborative model training \
             across healthcare kiosks.",
        )
    }

    fn template() -> &'static str {
        "You will receive training data from a healthcare kiosk and update the model \
parameters accordingly.

Kiosk ID: {{kioskId}}
Model Name: {{modelName}}
Training Data: {{trainingData}}

Based on the training data, update the model parameters and provide the evaluation metrics.
Preserve patient data privacy throughout.

Return the updated model parameters and the evaluation metrics as JSON strings.
"
    }

    fn output_schema() -> OutputSchema {
        OutputSchema {
            name: "federated_learning_model_output".to_string(),
            description: "Updated model parameters and evaluation metrics".to_string(),
            schema: json!({
                "type": "object",
                "properties": {
                    "modelUpdate": {
                        "type": "string",
                        "description": "The updated model parameters, as a JSON string."
                    },
                    "metrics": {
                        "type": "string",
                        "description": "Evaluation metrics of the updated model, as a JSON string."
                    }
                },
                "required": ["modelUpdate", "metrics"],
                "additionalProperties": false
            }),
        }
    }

    fn validate_input(input: &FederatedUpdateRequest) -> Result<()> {
        require_text("kioskId", &input.kiosk_id)?;
        require_text("modelName", &input.model_name)?;
        parse_training_data(&input.training_data)?;
        Ok(())
    }
}
