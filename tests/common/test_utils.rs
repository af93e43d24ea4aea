use serde_json::{Value, json};
use swasthya_sahayak::{
    config::{Config, LlmConfig, LogsConfig, ServerConfig},
    flows::{ConsultationRequest, DiagnosisRequest, FederatedUpdateRequest},
};

/// Create a test configuration with sensible defaults
pub fn create_test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".to_string(),
            port: 9002,
            logs: LogsConfig {
                level: "debug".to_string(),
            },
        },
        llm: create_llm_config("https://generativelanguage.googleapis.com/v1beta/openai"),
    }
}

pub fn create_llm_config(base_url: &str) -> LlmConfig {
    LlmConfig {
        provider: "gemini".to_string(),
        base_url: base_url.to_string(),
        api_key: "test-api-key".to_string(),
        model: "gemini-2.0-flash".to_string(),
        temperature: None,
        timeout_secs: 5,
    }
}

pub fn diagnosis_request() -> DiagnosisRequest {
    DiagnosisRequest {
        symptoms: "High fever and body ache for two days".to_string(),
        vitals: "Temp 102F, BP 118/76, HR 96".to_string(),
        medical_history: Some("Type 2 diabetes".to_string()),
    }
}

pub fn federated_request(training_data: &str) -> FederatedUpdateRequest {
    FederatedUpdateRequest {
        kiosk_id: "Kiosk-101-DEL".to_string(),
        model_name: "Cardio-Risk-Predictor-v2".to_string(),
        training_data: training_data.to_string(),
    }
}

pub fn consultation_request() -> ConsultationRequest {
    ConsultationRequest {
        medical_history: "history of hypertension".to_string(),
        vitals: "BP 140/90".to_string(),
        lab_results: "HbA1c 7.2%".to_string(),
        imaging_results: "clear".to_string(),
        preferred_language: "English".to_string(),
    }
}

pub fn diagnosis_reply(confidence: f64) -> String {
    json!({
        "preliminaryDiagnosis": "Viral fever",
        "suggestedTreatmentPlan": "Paracetamol, fluids and rest; review in 48 hours",
        "confidenceLevel": confidence
    })
    .to_string()
}

/// OpenAI-compatible chat completion body with a single assistant message
pub fn chat_completion_body(content: &str) -> Value {
    json!({
        "id": "chatcmpl-123",
        "object": "chat.completion",
        "created": 1_700_000_000,
        "model": "gemini-2.0-flash",
        "choices": [{
            "index": 0,
            "message": {
                "role": "assistant",
                "content": content
            },
            "finish_reason": "stop",
            "logprobs": null
        }],
        "usage": {
            "prompt_tokens": 42,
            "completion_tokens": 17,
            "total_tokens": 59
        }
    })
}

/// Sample configuration YAML for testing
pub const SAMPLE_CONFIG_YAML: &str = r#"
server:
  host: "127.0.0.1"
  port: 9100
  logs:
    level: "debug"

llm:
  provider: "gemini"
  base_url: "http://localhost:4000/v1"
  api_key: "file-api-key"
  model: "gemini-2.0-flash"
  temperature: 0.3
  timeout_secs: 15
"#;
