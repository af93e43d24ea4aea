//! The three AI-backed kiosk operations.

mod consultation;
mod diagnosis;
mod federated;

pub use consultation::*;
pub use diagnosis::*;
pub use federated::*;

use crate::{Result, llm::LlmClient, operation::invoke};

pub async fn diagnose(
    client: &dyn LlmClient,
    request: &DiagnosisRequest,
) -> Result<DiagnosisReport> {
    invoke::<DiagnosisAssistant>(client, request).await
}

pub async fn update_federated_model(
    client: &dyn LlmClient,
    request: &FederatedUpdateRequest,
) -> Result<FederatedUpdate> {
    invoke::<FederatedLearningModel>(client, request).await
}

pub async fn summarize_consultation(
    client: &dyn LlmClient,
    request: &ConsultationRequest,
) -> Result<ConsultationSummary> {
    invoke::<TeleConsultationSupport>(client, request).await
}
