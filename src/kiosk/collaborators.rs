//! External integrations the kiosk depends on but does not provide yet.
//!
//! Each collaborator is a trait so a real backend (identity provider, face
//! matching service, ABDM gateway) can be plugged in. Until then the
//! [`NotImplemented`] stand-in reports the feature as unavailable.

use crate::{Error, Result, operation::require_text};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr, sync::Arc};

#[derive(Clone, Deserialize)]
pub struct OperatorCredentials {
    pub username: String,
    pub password: String,
}

impl fmt::Debug for OperatorCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OperatorCredentials")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .finish()
    }
}

impl OperatorCredentials {
    pub fn validate(&self) -> Result<()> {
        require_text("username", &self.username)?;
        require_text("password", &self.password)
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct OperatorSession {
    pub operator: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInRequest {
    pub kiosk_id: String,
    /// Base64-encoded camera frame.
    pub frame: String,
}

impl CheckInRequest {
    pub fn validate(&self) -> Result<()> {
        require_text("kioskId", &self.kiosk_id)?;
        require_text("frame", &self.frame)
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckInResult {
    pub patient_id: String,
    pub checked_in_at: DateTime<Utc>,
}

/// Ayushman Bharat Health Account number, `NN-NNNN-NNNN-NNNN`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AbhaId(String);

impl AbhaId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for AbhaId {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let groups: Vec<&str> = s.split('-').collect();
        let well_formed = groups.len() == 4
            && groups
                .iter()
                .zip([2, 4, 4, 4])
                .all(|(group, len)| group.len() == len && group.bytes().all(|b| b.is_ascii_digit()));

        if !well_formed {
            return Err(Error::validation(
                "abhaId",
                "Please enter a valid ABHA ID in the format 12-3456-7890-1234.",
            ));
        }
        Ok(Self(s.to_string()))
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthIdLinkRequest {
    pub abha_id: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthIdLink {
    pub abha_id: AbhaId,
    pub linked_at: DateTime<Utc>,
}

#[async_trait]
pub trait OperatorAuthenticator: Send + Sync {
    async fn authenticate(&self, credentials: &OperatorCredentials) -> Result<OperatorSession>;
}

#[async_trait]
pub trait FaceMatcher: Send + Sync {
    async fn check_in(&self, request: &CheckInRequest) -> Result<CheckInResult>;
}

#[async_trait]
pub trait HealthIdRegistry: Send + Sync {
    async fn link(&self, abha_id: &AbhaId) -> Result<HealthIdLink>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct NotImplemented;

#[async_trait]
impl OperatorAuthenticator for NotImplemented {
    async fn authenticate(&self, _credentials: &OperatorCredentials) -> Result<OperatorSession> {
        Err(Error::not_implemented("Operator login"))
    }
}

#[async_trait]
impl FaceMatcher for NotImplemented {
    async fn check_in(&self, _request: &CheckInRequest) -> Result<CheckInResult> {
        Err(Error::not_implemented("Facial recognition check-in"))
    }
}

#[async_trait]
impl HealthIdRegistry for NotImplemented {
    async fn link(&self, _abha_id: &AbhaId) -> Result<HealthIdLink> {
        Err(Error::not_implemented("ABDM health ID linking"))
    }
}

#[derive(Clone)]
pub struct Collaborators {
    pub authenticator: Arc<dyn OperatorAuthenticator>,
    pub face_matcher: Arc<dyn FaceMatcher>,
    pub health_ids: Arc<dyn HealthIdRegistry>,
}

impl Default for Collaborators {
    fn default() -> Self {
        Self {
            authenticator: Arc::new(NotImplemented),
            face_matcher: Arc::new(NotImplemented),
            health_ids: Arc::new(NotImplemented),
        }
    }
}
