use super::domain::{Pillar, WeightingMode};
use super::session::{AssessmentSession, AssessmentStage};
use super::weights::WeightEntry;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(pub String);

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Stored session plus bookkeeping timestamps.
#[derive(Debug, Clone)]
pub struct SessionRecord {
    pub id: SessionId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub session: AssessmentSession,
}

impl SessionRecord {
    pub fn view(&self) -> SessionView {
        let session = &self.session;
        SessionView {
            session_id: self.id.clone(),
            stage: session.stage(),
            stage_label: session.stage().to_string(),
            weighting: session.settings().weighting,
            completed_pillars: session.completed_pillars(),
            progress_percent: session.progress_percent(),
            next_pillar: session.next_pillar(),
            weights: session.weights().map(|weights| weights.entries()),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

/// Keyed storage for in-flight sessions. Each record is owned by one respondent.
pub trait SessionRepository: Send + Sync {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError>;
    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError>;
    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum RepositoryError {
    #[error("session already exists")]
    Conflict,
    #[error("session not found")]
    NotFound,
    #[error("session store unavailable: {0}")]
    Unavailable(String),
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionView {
    pub session_id: SessionId,
    pub stage: AssessmentStage,
    pub stage_label: String,
    pub weighting: WeightingMode,
    pub completed_pillars: usize,
    pub progress_percent: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_pillar: Option<Pillar>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weights: Option<Vec<WeightEntry>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}
