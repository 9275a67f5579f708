//! Data maturity assessment: questionnaire, weighting, scoring, tiering and
//! report assembly, plus the session flow and HTTP surface around them.

pub mod delivery;
pub mod domain;
mod extract;
pub mod import;
pub mod questionnaire;
pub mod report;
pub mod repository;
mod responses;
pub mod router;
mod scoring;
pub mod service;
pub mod session;
mod tier;
mod weights;

#[cfg(test)]
mod tests;

pub use delivery::{
    DeliveryError, DeliveryReceipt, ReportAttachment, ReportEnvelope, ReportMailer,
    REPORT_SUBJECT,
};
pub use domain::{
    AssessmentError, AssessmentSettings, MaturityTier, Pillar, PillarRatingBasis, UserProfile,
    WeightingMode,
};
pub use extract::{extract_rating, FALLBACK_RATING};
pub use import::{AnswerImportError, AnswerImporter};
pub use questionnaire::{section_intro, Question, QuestionKind, Questionnaire, DEFAULT_ANSWER};
pub use report::{
    generate_insights, Block, Capability, CapabilityProfile, CatalogSection, DocumentFormat,
    InsightBand, MaturityCatalog, MaturityReport, PillarInsight, RecommendationProfile,
    ReportDocument, TextStyle, Tone, REPORT_TITLE,
};
pub use repository::{RepositoryError, SessionId, SessionRecord, SessionRepository, SessionView};
pub use responses::ResponseStore;
pub use router::assessment_router;
pub use scoring::{MaturityScorer, PillarScore, ScoreBreakdown};
pub use service::{
    score_responses, AnswerSubmission, AssessmentService, AssessmentServiceError,
    EmailReportRequest, ScoreRequest, StartAssessment,
};
pub use session::{AssessmentSession, AssessmentStage};
pub use tier::{classify, GaugeBand, GaugeModel, TierClassification};
pub use weights::{WeightEntry, WeightVector};
