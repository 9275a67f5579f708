use std::collections::BTreeMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use chrono::Utc;
use serde::Deserialize;
use tracing::{debug, info};

use super::delivery::{DeliveryError, DeliveryReceipt, ReportEnvelope, ReportMailer};
use super::domain::{
    AssessmentError, AssessmentSettings, Pillar, PillarRatingBasis, UserProfile, WeightingMode,
};
use super::report::{DocumentFormat, MaturityCatalog, MaturityReport, ReportDocument};
use super::repository::{RepositoryError, SessionId, SessionRecord, SessionRepository};
use super::responses::ResponseStore;
use super::session::AssessmentSession;
use super::weights::WeightVector;

/// Flow overrides for a new session; unset fields fall back to the service defaults.
#[derive(Debug, Clone, Copy, Default, Deserialize)]
pub struct StartAssessment {
    #[serde(default)]
    pub weighting: Option<WeightingMode>,
    #[serde(default)]
    pub pillar_basis: Option<PillarRatingBasis>,
}

/// Answers keyed by question id.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnswerSubmission {
    pub answers: BTreeMap<String, String>,
}

/// One-shot scoring of a full answer set without a session.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ScoreRequest {
    pub answers: BTreeMap<String, String>,
    #[serde(default)]
    pub weighting: Option<WeightingMode>,
    #[serde(default)]
    pub pillar_basis: Option<PillarRatingBasis>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EmailReportRequest {
    /// Defaults to the e-mail captured in the session profile.
    #[serde(default)]
    pub recipient: Option<String>,
    #[serde(default)]
    pub format: Option<DocumentFormat>,
}

/// Score a complete answer set. Dynamic weighting derives weights from the
/// importance answers; equal weighting averages the pillar ratings.
pub fn score_responses(
    responses: &ResponseStore,
    settings: AssessmentSettings,
    catalog: &MaturityCatalog,
) -> Result<MaturityReport, AssessmentError> {
    let weights = match settings.weighting {
        WeightingMode::Dynamic => Some(WeightVector::from_ratings(
            responses.importance_ratings(),
        )?),
        WeightingMode::Equal => None,
    };

    let report = MaturityReport::assemble(
        weights.as_ref(),
        responses,
        catalog,
        settings.pillar_basis,
    );
    debug!(
        tier = %report.classification.tier,
        aggregate = report.aggregate(),
        weighting = ?report.weighting,
        "maturity report assembled"
    );
    Ok(report)
}

/// Session lifecycle, report rendering and delivery over pluggable storage.
pub struct AssessmentService<R, M> {
    repository: Arc<R>,
    mailer: Arc<M>,
    catalog: Arc<MaturityCatalog>,
    settings: AssessmentSettings,
}

static SESSION_SEQUENCE: AtomicU64 = AtomicU64::new(1);

fn next_session_id() -> SessionId {
    let id = SESSION_SEQUENCE.fetch_add(1, Ordering::Relaxed);
    SessionId(format!("assessment-{id:06}"))
}

impl<R, M> AssessmentService<R, M>
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    pub fn new(repository: Arc<R>, mailer: Arc<M>, settings: AssessmentSettings) -> Self {
        Self::with_catalog(repository, mailer, settings, MaturityCatalog::standard())
    }

    pub fn with_catalog(
        repository: Arc<R>,
        mailer: Arc<M>,
        settings: AssessmentSettings,
        catalog: MaturityCatalog,
    ) -> Self {
        Self {
            repository,
            mailer,
            catalog: Arc::new(catalog),
            settings,
        }
    }

    pub fn settings(&self) -> AssessmentSettings {
        self.settings
    }

    pub fn start(&self, request: StartAssessment) -> Result<SessionRecord, AssessmentServiceError> {
        let settings = AssessmentSettings {
            weighting: request.weighting.unwrap_or(self.settings.weighting),
            pillar_basis: request.pillar_basis.unwrap_or(self.settings.pillar_basis),
        };
        let now = Utc::now();
        let record = SessionRecord {
            id: next_session_id(),
            created_at: now,
            updated_at: now,
            session: AssessmentSession::new(settings),
        };

        let stored = self.repository.insert(record)?;
        info!(session_id = %stored.id, weighting = ?settings.weighting, "assessment started");
        Ok(stored)
    }

    pub fn get(&self, id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        let record = self
            .repository
            .fetch(id)?
            .ok_or(RepositoryError::NotFound)?;
        Ok(record)
    }

    pub fn accept_privacy(&self, id: &SessionId) -> Result<SessionRecord, AssessmentServiceError> {
        self.mutate(id, AssessmentSession::accept_privacy)
    }

    pub fn submit_profile(
        &self,
        id: &SessionId,
        profile: UserProfile,
    ) -> Result<SessionRecord, AssessmentServiceError> {
        self.mutate(id, |session| session.submit_profile(profile))
    }

    pub fn set_weights(
        &self,
        id: &SessionId,
        submission: AnswerSubmission,
    ) -> Result<SessionRecord, AssessmentServiceError> {
        self.mutate(id, |session| {
            session.set_weights(submission.answers).map(|_| ())
        })
    }

    pub fn submit_pillar(
        &self,
        id: &SessionId,
        pillar: Pillar,
        submission: AnswerSubmission,
    ) -> Result<SessionRecord, AssessmentServiceError> {
        self.mutate(id, |session| {
            session.submit_pillar(pillar, submission.answers).map(|_| ())
        })
    }

    pub fn report(&self, id: &SessionId) -> Result<MaturityReport, AssessmentServiceError> {
        let record = self.get(id)?;
        let report = record.session.report(&self.catalog)?;
        info!(
            session_id = %id,
            tier = %report.classification.tier,
            aggregate = report.aggregate(),
            "maturity report assembled"
        );
        Ok(report)
    }

    pub fn document(
        &self,
        id: &SessionId,
        format: DocumentFormat,
    ) -> Result<String, AssessmentServiceError> {
        let report = self.report(id)?;
        Ok(format.render(&ReportDocument::from_report(&report)))
    }

    /// Render the finished report and hand it to the mailer.
    pub fn email_report(
        &self,
        id: &SessionId,
        request: EmailReportRequest,
    ) -> Result<DeliveryReceipt, AssessmentServiceError> {
        let record = self.get(id)?;
        let report = record.session.report(&self.catalog)?;
        let profile = record.session.profile();
        let recipient = request
            .recipient
            .or_else(|| profile.map(|profile| profile.email.clone()))
            .ok_or(AssessmentServiceError::MissingRecipient)?;

        let envelope = ReportEnvelope::compose(
            &recipient,
            profile.map(|profile| profile.first_name.as_str()),
            &report,
            request.format.unwrap_or_default(),
            Utc::now(),
        )?;
        let receipt = envelope.receipt();
        self.mailer.send(envelope)?;

        info!(
            session_id = %id,
            tier = %report.classification.tier,
            file = %receipt.file_name,
            "assessment report dispatched"
        );
        Ok(receipt)
    }

    /// Stateless scoring; omitted flags use the service defaults.
    pub fn score(&self, request: ScoreRequest) -> Result<MaturityReport, AssessmentServiceError> {
        let responses = ResponseStore::from_answers(request.answers)?;
        let settings = AssessmentSettings {
            weighting: request.weighting.unwrap_or(self.settings.weighting),
            pillar_basis: request.pillar_basis.unwrap_or(self.settings.pillar_basis),
        };
        let report = score_responses(&responses, settings, &self.catalog)?;
        Ok(report)
    }

    fn mutate<F>(&self, id: &SessionId, apply: F) -> Result<SessionRecord, AssessmentServiceError>
    where
        F: FnOnce(&mut AssessmentSession) -> Result<(), AssessmentError>,
    {
        let mut record = self.get(id)?;
        apply(&mut record.session)?;
        record.updated_at = Utc::now();
        self.repository.update(record.clone())?;
        Ok(record)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentServiceError {
    #[error(transparent)]
    Assessment(#[from] AssessmentError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error(transparent)]
    Delivery(#[from] DeliveryError),
    #[error("no recipient supplied and the session has no profile e-mail")]
    MissingRecipient,
}
