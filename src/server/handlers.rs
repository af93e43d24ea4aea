use super::types::{ErrorResponse, HealthResponse};
use crate::{
    Error, Result,
    flows::{
        ConsultationRequest, ConsultationSummary, DiagnosisAssistant, DiagnosisReport,
        DiagnosisRequest, FederatedLearningModel, FederatedUpdate, FederatedUpdateRequest,
        TeleConsultationSupport,
    },
    kiosk::{
        self, AbhaId, CheckInRequest, CheckInResult, Collaborators, Feature, HealthIdLink,
        HealthIdLinkRequest, OperatorCredentials, OperatorSession, forms,
    },
    llm::LlmClient,
    operation::{StructuredOperation, invoke},
};
use axum::{extract::State, http::StatusCode, response::Json};
use chrono::{DateTime, Utc};
use std::sync::Arc;
use tracing::{error, info, warn};

#[derive(Clone)]
pub struct AppState {
    pub llm: Arc<dyn LlmClient>,
    pub collaborators: Collaborators,
    pub started_at: DateTime<Utc>,
}

impl AppState {
    pub fn new(llm: Arc<dyn LlmClient>) -> Self {
        Self {
            llm,
            collaborators: Collaborators::default(),
            started_at: Utc::now(),
        }
    }
}

pub type ApiFailure = (StatusCode, Json<ErrorResponse>);

/// Maps an error to a response. Provider and shape failures carry only the
/// generic `failure_message`; their details stay in the logs.
fn failure(err: Error, failure_message: &str) -> ApiFailure {
    match err {
        Error::Validation { field, message } => (
            StatusCode::UNPROCESSABLE_ENTITY,
            Json(ErrorResponse {
                error: message,
                field: Some(field),
            }),
        ),
        e @ Error::NotImplemented { .. } => (
            StatusCode::NOT_IMPLEMENTED,
            Json(ErrorResponse {
                error: e.to_string(),
                field: None,
            }),
        ),
        e => {
            let status = if e.is_operation_failure() {
                StatusCode::BAD_GATEWAY
            } else {
                StatusCode::INTERNAL_SERVER_ERROR
            };
            (
                status,
                Json(ErrorResponse {
                    error: failure_message.to_string(),
                    field: None,
                }),
            )
        }
    }
}

async fn run_operation<O: StructuredOperation>(
    state: &AppState,
    input: &O::Input,
    check_form: fn(&O::Input) -> Result<()>,
) -> std::result::Result<Json<O::Output>, ApiFailure> {
    if let Err(e) = check_form(input) {
        warn!("Rejected {} form: {}", O::NAME, e);
        return Err(failure(e, O::FAILURE_MESSAGE));
    }

    match invoke::<O>(state.llm.as_ref(), input).await {
        Ok(output) => Ok(Json(output)),
        Err(e) => {
            error!("{} failed: {}", O::NAME, e);
            Err(failure(e, O::FAILURE_MESSAGE))
        }
    }
}

pub async fn diagnosis(
    State(state): State<AppState>,
    Json(request): Json<DiagnosisRequest>,
) -> std::result::Result<Json<DiagnosisReport>, ApiFailure> {
    info!("Received diagnosis request");
    run_operation::<DiagnosisAssistant>(&state, &request, forms::check_diagnosis).await
}

pub async fn federated_learning(
    State(state): State<AppState>,
    Json(request): Json<FederatedUpdateRequest>,
) -> std::result::Result<Json<FederatedUpdate>, ApiFailure> {
    info!(
        "Received federated learning update from kiosk {} for model {}",
        request.kiosk_id, request.model_name
    );
    run_operation::<FederatedLearningModel>(&state, &request, forms::check_federated_update).await
}

pub async fn tele_consultation(
    State(state): State<AppState>,
    Json(request): Json<ConsultationRequest>,
) -> std::result::Result<Json<ConsultationSummary>, ApiFailure> {
    info!(
        "Received tele-consultation summary request in {}",
        request.preferred_language
    );
    run_operation::<TeleConsultationSupport>(&state, &request, forms::check_consultation).await
}

pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<OperatorCredentials>,
) -> std::result::Result<Json<OperatorSession>, ApiFailure> {
    info!("Login attempt for operator {}", credentials.username);
    credentials
        .validate()
        .map_err(|e| failure(e, "Invalid username or password."))?;

    state
        .collaborators
        .authenticator
        .authenticate(&credentials)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Login failed for {}: {}", credentials.username, e);
            failure(e, "Invalid username or password.")
        })
}

pub async fn check_in(
    State(state): State<AppState>,
    Json(request): Json<CheckInRequest>,
) -> std::result::Result<Json<CheckInResult>, ApiFailure> {
    info!("Facial check-in requested at kiosk {}", request.kiosk_id);
    request
        .validate()
        .map_err(|e| failure(e, "Check-in failed. Please try again."))?;

    state
        .collaborators
        .face_matcher
        .check_in(&request)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Check-in failed at kiosk {}: {}", request.kiosk_id, e);
            failure(e, "Check-in failed. Please try again.")
        })
}

pub async fn link_health_id(
    State(state): State<AppState>,
    Json(request): Json<HealthIdLinkRequest>,
) -> std::result::Result<Json<HealthIdLink>, ApiFailure> {
    let abha_id: AbhaId = request
        .abha_id
        .parse()
        .map_err(|e| failure(e, "Failed to link ABHA ID."))?;
    info!("Linking ABHA ID {}", abha_id.as_str());

    state
        .collaborators
        .health_ids
        .link(&abha_id)
        .await
        .map(Json)
        .map_err(|e| {
            warn!("Linking ABHA ID failed: {}", e);
            failure(e, "Failed to link ABHA ID.")
        })
}

pub async fn features() -> Json<Vec<Feature>> {
    Json(kiosk::catalog())
}

pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        started_at: state.started_at,
    })
}
