use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, Mutex};

use axum::response::Response;
use serde_json::Value;

use crate::workflows::assessment::delivery::{DeliveryError, ReportEnvelope, ReportMailer};
use crate::workflows::assessment::domain::{AssessmentSettings, Pillar, UserProfile};
use crate::workflows::assessment::questionnaire::Questionnaire;
use crate::workflows::assessment::repository::{
    RepositoryError, SessionId, SessionRecord, SessionRepository,
};
use crate::workflows::assessment::service::{AnswerSubmission, AssessmentService, StartAssessment};

pub(super) type MemoryService = AssessmentService<MemoryRepository, MemoryMailer>;

pub(super) fn build_service(
    settings: AssessmentSettings,
) -> (MemoryService, Arc<MemoryRepository>, Arc<MemoryMailer>) {
    let repository = Arc::new(MemoryRepository::default());
    let mailer = Arc::new(MemoryMailer::default());
    let service = AssessmentService::new(repository.clone(), mailer.clone(), settings);
    (service, repository, mailer)
}

pub(super) fn profile() -> UserProfile {
    UserProfile {
        first_name: "Amina".to_string(),
        last_name: "Mwangi".to_string(),
        email: "amina.mwangi@example.co.ke".to_string(),
        organization: Some("Savannah Logistics".to_string()),
        business_unit: Some("Finance".to_string()),
    }
}

/// Option text for each of `pillar`'s questions, all at `rating`.
pub(super) fn pillar_answers(pillar: Pillar, rating: u8) -> AnswerSubmission {
    let answers = Questionnaire::standard()
        .pillar_questions(pillar)
        .into_iter()
        .map(|question| {
            let option = question.option_for(rating).expect("rating in range");
            (question.key.to_string(), option.to_string())
        })
        .collect();
    AnswerSubmission { answers }
}

pub(super) fn importance_answers(ratings: [u8; Pillar::COUNT]) -> AnswerSubmission {
    let questionnaire = Questionnaire::standard();
    let answers = Pillar::ordered()
        .into_iter()
        .zip(ratings)
        .map(|(pillar, rating)| {
            let question = questionnaire
                .importance_question(pillar)
                .expect("importance question");
            let option = question.option_for(rating).expect("rating in range");
            (question.key.to_string(), option.to_string())
        })
        .collect();
    AnswerSubmission { answers }
}

/// Every question id mapped to the option carrying `pillar_rating` (maturity
/// questions) or `importance_rating` (importance questions).
pub(super) fn full_answer_set(pillar_rating: u8, importance_rating: u8) -> BTreeMap<String, String> {
    let mut answers = importance_answers([importance_rating; Pillar::COUNT]).answers;
    for pillar in Pillar::ordered() {
        answers.extend(pillar_answers(pillar, pillar_rating).answers);
    }
    answers
}

/// Drive a fresh session through every stage up to `Finished`.
pub(super) fn finished_session(
    service: &MemoryService,
    importance: Option<[u8; Pillar::COUNT]>,
    pillar_ratings: [u8; Pillar::COUNT],
) -> SessionId {
    let record = service
        .start(StartAssessment::default())
        .expect("session starts");
    let id = record.id;
    service.accept_privacy(&id).expect("privacy accepted");
    service.submit_profile(&id, profile()).expect("profile accepted");
    if let Some(importance) = importance {
        service
            .set_weights(&id, importance_answers(importance))
            .expect("weights accepted");
    }
    for pillar in Pillar::ordered() {
        service
            .submit_pillar(&id, pillar, pillar_answers(pillar, pillar_ratings[pillar.index()]))
            .expect("pillar accepted");
    }
    id
}

#[derive(Default, Clone)]
pub(super) struct MemoryRepository {
    pub(super) records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for MemoryRepository {
    fn insert(&self, record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        if guard.contains_key(&record.id) {
            return Err(RepositoryError::Conflict);
        }
        guard.insert(record.id.clone(), record.clone());
        Ok(record)
    }

    fn update(&self, record: SessionRecord) -> Result<(), RepositoryError> {
        let mut guard = self.records.lock().expect("repository mutex poisoned");
        guard.insert(record.id.clone(), record);
        Ok(())
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

#[derive(Default, Clone)]
pub(super) struct MemoryMailer {
    sent: Arc<Mutex<Vec<ReportEnvelope>>>,
}

impl MemoryMailer {
    pub(super) fn sent(&self) -> Vec<ReportEnvelope> {
        self.sent.lock().expect("mailer mutex poisoned").clone()
    }
}

impl ReportMailer for MemoryMailer {
    fn send(&self, envelope: ReportEnvelope) -> Result<(), DeliveryError> {
        self.sent
            .lock()
            .expect("mailer mutex poisoned")
            .push(envelope);
        Ok(())
    }
}

pub(super) struct OfflineMailer;

impl ReportMailer for OfflineMailer {
    fn send(&self, _envelope: ReportEnvelope) -> Result<(), DeliveryError> {
        Err(DeliveryError::Transport("smtp relay offline".to_string()))
    }
}

pub(super) struct UnavailableRepository;

impl SessionRepository for UnavailableRepository {
    fn insert(&self, _record: SessionRecord) -> Result<SessionRecord, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn update(&self, _record: SessionRecord) -> Result<(), RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }

    fn fetch(&self, _id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        Err(RepositoryError::Unavailable("session store offline".to_string()))
    }
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    serde_json::from_slice(&body).expect("json payload")
}

pub(super) async fn read_text_body(response: Response) -> String {
    let body = axum::body::to_bytes(response.into_body(), 256 * 1024)
        .await
        .expect("read body");
    String::from_utf8(body.to_vec()).expect("utf8 body")
}
