use pretty_assertions::assert_eq;
use rstest::rstest;
use serde_json::json;
use swasthya_sahayak::{
    Error,
    flows::{
        DiagnosisAssistant, FederatedLearningModel, TeleConsultationSupport, diagnose,
        summarize_consultation, update_federated_model,
    },
    operation::StructuredOperation,
};

mod common;

use common::{
    mocks::{MockLlmClient, MockProvider},
    test_utils::{consultation_request, diagnosis_reply, diagnosis_request, federated_request},
};

#[tokio::test]
async fn test_diagnosis_returns_complete_report() {
    let client = MockLlmClient::new().with_reply(diagnosis_reply(0.72));

    let report = diagnose(&client, &diagnosis_request()).await.unwrap();

    assert_eq!(report.preliminary_diagnosis, "Viral fever");
    assert_eq!(
        report.suggested_treatment_plan,
        "Paracetamol, fluids and rest; review in 48 hours"
    );
    assert_eq!(report.confidence_level, 0.72);
    assert_eq!(client.call_count(), 1);
}

#[tokio::test]
async fn test_diagnosis_request_carries_prompt_and_schema() {
    let client = MockLlmClient::new().with_reply(diagnosis_reply(0.5));

    diagnose(&client, &diagnosis_request()).await.unwrap();

    let requests = client.get_requests();
    assert_eq!(requests.len(), 1);
    let request = &requests[0];
    assert_eq!(request.operation, DiagnosisAssistant::NAME);
    assert!(request.system.is_some());
    assert!(request.prompt.contains("Symptoms: High fever and body ache for two days"));
    assert!(request.prompt.contains("Vitals: Temp 102F, BP 118/76, HR 96"));
    assert!(request.prompt.contains("Medical History: Type 2 diabetes"));
    assert_eq!(
        request.output_schema.schema["required"],
        json!(["preliminaryDiagnosis", "suggestedTreatmentPlan", "confidenceLevel"])
    );
}

#[rstest]
#[case(1.01)]
#[case(-0.5)]
#[case(7.0)]
#[tokio::test]
async fn test_confidence_outside_unit_range_is_shape_failure(#[case] confidence: f64) {
    let client = MockLlmClient::new().with_reply(diagnosis_reply(confidence));

    let err = diagnose(&client, &diagnosis_request()).await.unwrap_err();

    assert!(matches!(err, Error::Shape { .. }));
    assert!(err.is_operation_failure());
}

#[rstest]
#[case::missing_field(r#"{"preliminaryDiagnosis": "Flu", "confidenceLevel": 0.4}"#)]
#[case::wrong_type(r#"{"preliminaryDiagnosis": "Flu", "suggestedTreatmentPlan": "Rest", "confidenceLevel": "high"}"#)]
#[case::null_field(r#"{"preliminaryDiagnosis": null, "suggestedTreatmentPlan": "Rest", "confidenceLevel": 0.4}"#)]
#[case::undeclared_field(r#"{"preliminaryDiagnosis": "Flu", "suggestedTreatmentPlan": "Rest", "confidenceLevel": 0.4, "severity": "mild"}"#)]
#[case::not_json("The patient most likely has the flu.")]
#[tokio::test]
async fn test_malformed_replies_never_yield_partial_records(#[case] reply: &str) {
    let client = MockLlmClient::new().with_reply(reply);

    let result = diagnose(&client, &diagnosis_request()).await;

    assert!(matches!(result, Err(Error::Shape { .. })));
}

#[tokio::test]
async fn test_fenced_reply_is_accepted() {
    let reply = format!("```json\n{}\n```", diagnosis_reply(0.3));
    let client = MockLlmClient::new().with_reply(reply);

    let report = diagnose(&client, &diagnosis_request()).await.unwrap();
    assert_eq!(report.confidence_level, 0.3);
}

#[tokio::test]
async fn test_non_json_training_data_never_reaches_provider() {
    let mut provider = MockProvider::new();
    provider.expect_generate().times(0);

    let err = update_federated_model(&provider, &federated_request("not-json"))
        .await
        .unwrap_err();

    assert!(err.is_validation());
    assert!(!err.is_operation_failure());
}

#[tokio::test]
async fn test_empty_json_array_training_data_is_forwarded() {
    let client = MockLlmClient::new()
        .with_reply(r#"{"modelUpdate": "{\"weights\": [0.1]}", "metrics": "{\"accuracy\": 0.91}"}"#);

    let update = update_federated_model(&client, &federated_request("[]"))
        .await
        .unwrap();

    assert_eq!(update.model_update, r#"{"weights": [0.1]}"#);
    assert_eq!(update.metrics, r#"{"accuracy": 0.91}"#);

    let requests = client.get_requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].operation, FederatedLearningModel::NAME);
    assert!(requests[0].prompt.contains("Training Data: []"));
}

#[tokio::test]
async fn test_summary_echoes_deterministic_double() {
    let summary = "58-year-old with hypertension and poorly controlled diabetes; imaging clear.";
    let client = MockLlmClient::new().with_reply(json!({ "summary": summary }).to_string());

    let result = summarize_consultation(&client, &consultation_request())
        .await
        .unwrap();

    assert_eq!(result.summary, summary);

    let prompt = &client.get_requests()[0].prompt;
    assert!(prompt.contains("Medical History: history of hypertension"));
    assert!(prompt.contains("Lab Results: HbA1c 7.2%"));
    assert!(prompt.contains("Imaging Results: clear"));
    assert!(prompt.contains("Preferred Language: English"));
}

#[tokio::test]
async fn test_empty_required_field_is_rejected_locally() {
    let mut provider = MockProvider::new();
    provider.expect_generate().times(0);

    let mut request = consultation_request();
    request.lab_results = "   ".to_string();

    let err = summarize_consultation(&provider, &request).await.unwrap_err();
    match err {
        Error::Validation { field, .. } => assert_eq!(field, "labResults"),
        other => panic!("expected validation error, got {:?}", other),
    }
}

#[tokio::test]
async fn test_provider_failure_surfaces_once_for_every_operation() {
    let client = MockLlmClient::new().with_error("deadline exceeded");

    let diagnosis = diagnose(&client, &diagnosis_request()).await;
    let federated = update_federated_model(&client, &federated_request("{}")).await;
    let summary = summarize_consultation(&client, &consultation_request()).await;

    assert!(diagnosis.is_err_and(|e| e.is_operation_failure()));
    assert!(federated.is_err_and(|e| e.is_operation_failure()));
    assert!(summary.is_err_and(|e| e.is_operation_failure()));

    // one submission per invocation, no retries
    assert_eq!(client.call_count(), 3);
}

#[tokio::test]
async fn test_identical_inputs_call_provider_each_time() {
    let client = MockLlmClient::new()
        .with_reply(json!({"summary": "first"}).to_string())
        .with_reply(json!({"summary": "second"}).to_string());

    let first = summarize_consultation(&client, &consultation_request())
        .await
        .unwrap();
    let second = summarize_consultation(&client, &consultation_request())
        .await
        .unwrap();

    assert_eq!(first.summary, "first");
    assert_eq!(second.summary, "second");
    assert_eq!(client.call_count(), 2);
}

#[test]
fn test_operation_names_are_distinct() {
    assert_ne!(DiagnosisAssistant::NAME, FederatedLearningModel::NAME);
    assert_ne!(FederatedLearningModel::NAME, TeleConsultationSupport::NAME);
    assert_ne!(DiagnosisAssistant::NAME, TeleConsultationSupport::NAME);
}
