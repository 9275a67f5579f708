use metrics_exporter_prometheus::PrometheusHandle;
use std::collections::HashMap;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::info;
use virtual_narrative::workflows::assessment::{
    DeliveryError, ReportEnvelope, ReportMailer, RepositoryError, SessionId, SessionRecord,
    SessionRepository,
};

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

#[derive(Default, Clone)]
pub(crate) struct InMemorySessionRepository {
    records: Arc<Mutex<HashMap<SessionId, SessionRecord>>>,
}

impl SessionRepository for InMemorySessionRepository {
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
        if guard.contains_key(&record.id) {
            guard.insert(record.id.clone(), record);
            Ok(())
        } else {
            Err(RepositoryError::NotFound)
        }
    }

    fn fetch(&self, id: &SessionId) -> Result<Option<SessionRecord>, RepositoryError> {
        let guard = self.records.lock().expect("repository mutex poisoned");
        Ok(guard.get(id).cloned())
    }
}

/// Holds composed report e-mails in memory until a real transport is wired in.
#[derive(Default, Clone)]
pub(crate) struct OutboxMailer {
    outbox: Arc<Mutex<Vec<ReportEnvelope>>>,
}

impl ReportMailer for OutboxMailer {
    fn send(&self, envelope: ReportEnvelope) -> Result<(), DeliveryError> {
        info!(
            recipient = %envelope.recipient,
            attachment = %envelope.attachment.file_name,
            "report queued in outbox"
        );
        let mut guard = self.outbox.lock().expect("outbox mutex poisoned");
        guard.push(envelope);
        Ok(())
    }
}

impl OutboxMailer {
    pub(crate) fn envelopes(&self) -> Vec<ReportEnvelope> {
        self.outbox.lock().expect("outbox mutex poisoned").clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use virtual_narrative::workflows::assessment::{AssessmentSession, AssessmentSettings};

    fn record(id: &str) -> SessionRecord {
        let now = Utc::now();
        SessionRecord {
            id: SessionId(id.to_string()),
            created_at: now,
            updated_at: now,
            session: AssessmentSession::new(AssessmentSettings::default()),
        }
    }

    #[test]
    fn repository_rejects_duplicate_inserts_and_unknown_updates() {
        let repository = InMemorySessionRepository::default();
        repository.insert(record("assessment-1")).expect("first insert");
        assert!(matches!(
            repository.insert(record("assessment-1")),
            Err(RepositoryError::Conflict)
        ));
        assert!(matches!(
            repository.update(record("assessment-2")),
            Err(RepositoryError::NotFound)
        ));
        assert!(repository
            .fetch(&SessionId("assessment-1".to_string()))
            .expect("fetch succeeds")
            .is_some());
    }
}
