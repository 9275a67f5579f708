use super::common::*;
use crate::workflows::assessment::delivery::DeliveryError;
use crate::workflows::assessment::domain::{
    AssessmentError, AssessmentSettings, MaturityTier, Pillar, UserProfile, WeightingMode,
};
use crate::workflows::assessment::report::{CatalogSection, DocumentFormat};
use crate::workflows::assessment::repository::{RepositoryError, SessionId, SessionRepository};
use crate::workflows::assessment::service::{
    AssessmentService, AssessmentServiceError, EmailReportRequest, ScoreRequest,
    StartAssessment,
};
use crate::workflows::assessment::session::AssessmentStage;
use std::sync::Arc;

#[test]
fn dynamic_flow_weights_the_aggregate() {
    let (service, _, _) = build_service(AssessmentSettings::default());
    let id = finished_session(&service, Some([5, 1, 1, 1, 1, 1]), [3; 6]);

    let report = service.report(&id).expect("report available");
    assert_eq!(report.weighting, WeightingMode::Dynamic);
    assert!((report.aggregate() - 3.0).abs() < 1e-9);
    assert_eq!(report.classification.tier, MaturityTier::Defined);

    let governance = report
        .breakdown
        .pillar(Pillar::Governance)
        .expect("governance score");
    assert!((governance.weight - 0.5).abs() < 1e-12);
    assert!((governance.weighted_score - 1.5).abs() < 1e-12);
}

#[test]
fn equal_flow_averages_pillar_ratings() {
    let (service, _, _) = build_service(AssessmentSettings {
        weighting: WeightingMode::Equal,
        ..AssessmentSettings::default()
    });
    let id = finished_session(&service, None, [1, 2, 3, 4, 5, 3]);

    let record = service.get(&id).expect("session present");
    assert!(record.session.weights().is_none());

    let report = service.report(&id).expect("report available");
    assert_eq!(report.weighting, WeightingMode::Equal);
    assert_eq!(report.aggregate(), 3.0);
    assert_eq!(report.classification.tier, MaturityTier::Defined);
}

#[test]
fn start_overrides_service_defaults() {
    let (service, _, _) = build_service(AssessmentSettings::default());
    let record = service
        .start(StartAssessment {
            weighting: Some(WeightingMode::Equal),
            pillar_basis: None,
        })
        .expect("session starts");

    assert_eq!(record.session.settings().weighting, WeightingMode::Equal);
    assert_eq!(record.session.stage(), AssessmentStage::Intro);
    assert!(record.id.0.starts_with("assessment-"));
}

#[test]
fn report_before_completion_is_incomplete() {
    let (service, _, _) = build_service(AssessmentSettings::default());
    let id = service.start(StartAssessment::default()).expect("start").id;
    service.accept_privacy(&id).expect("privacy");
    service.submit_profile(&id, profile()).expect("profile");
    service
        .set_weights(&id, importance_answers([3; 6]))
        .expect("weights");
    for pillar in [
        Pillar::Governance,
        Pillar::Quality,
        Pillar::MetadataManagement,
        Pillar::Integration,
    ] {
        service
            .submit_pillar(&id, pillar, pillar_answers(pillar, 2))
            .expect("pillar accepted");
    }

    let view = service.get(&id).expect("session").view();
    assert_eq!(view.completed_pillars, 4);
    assert_eq!(view.progress_percent, 66);
    assert_eq!(view.next_pillar, Some(Pillar::AnalyticsAndAi));

    match service.report(&id) {
        Err(AssessmentServiceError::Assessment(AssessmentError::Incomplete { completed })) => {
            assert_eq!(completed, 4)
        }
        other => panic!("expected incomplete assessment, got {other:?}"),
    }
}

#[test]
fn pillars_must_be_submitted_in_order() {
    let (service, _, _) = build_service(AssessmentSettings {
        weighting: WeightingMode::Equal,
        ..AssessmentSettings::default()
    });
    let id = service.start(StartAssessment::default()).expect("start").id;

    let error = service
        .submit_pillar(&id, Pillar::Governance, pillar_answers(Pillar::Governance, 3))
        .expect_err("privacy not yet accepted");
    assert!(matches!(
        error,
        AssessmentServiceError::Assessment(AssessmentError::StageOutOfOrder { stage: "intro", .. })
    ));

    service.accept_privacy(&id).expect("privacy");
    service.submit_profile(&id, profile()).expect("profile");
    let error = service
        .submit_pillar(&id, Pillar::Quality, pillar_answers(Pillar::Quality, 3))
        .expect_err("governance comes first");
    assert!(matches!(
        error,
        AssessmentServiceError::Assessment(AssessmentError::StageOutOfOrder { .. })
    ));
}

#[test]
fn pillar_answers_outside_the_section_are_rejected_atomically() {
    let (service, repository, _) = build_service(AssessmentSettings {
        weighting: WeightingMode::Equal,
        ..AssessmentSettings::default()
    });
    let id = service.start(StartAssessment::default()).expect("start").id;
    service.accept_privacy(&id).expect("privacy");
    service.submit_profile(&id, profile()).expect("profile");

    let mut submission = pillar_answers(Pillar::Governance, 4);
    submission
        .answers
        .insert("dq1".to_string(), "Automated quality checks (4)".to_string());

    let error = service
        .submit_pillar(&id, Pillar::Governance, submission)
        .expect_err("foreign question rejected");
    assert!(matches!(
        error,
        AssessmentServiceError::Assessment(AssessmentError::QuestionOutOfSection { .. })
    ));

    let stored = repository
        .fetch(&id)
        .expect("fetch succeeds")
        .expect("record present");
    assert_eq!(stored.session.stage(), AssessmentStage::UserInfoCollected);
    assert!(stored.session.responses().is_empty());
}

#[test]
fn profile_requires_name_and_email() {
    let (service, _, _) = build_service(AssessmentSettings::default());
    let id = service.start(StartAssessment::default()).expect("start").id;
    service.accept_privacy(&id).expect("privacy");

    let error = service
        .submit_profile(
            &id,
            UserProfile {
                email: "  ".to_string(),
                ..profile()
            },
        )
        .expect_err("email required");
    assert!(matches!(
        error,
        AssessmentServiceError::Assessment(AssessmentError::MissingProfileField("email"))
    ));
}

#[test]
fn email_report_defaults_to_profile_address() {
    let (service, _, mailer) = build_service(AssessmentSettings::default());
    let id = finished_session(&service, Some([3; 6]), [2; 6]);

    let receipt = service
        .email_report(
            &id,
            EmailReportRequest {
                recipient: None,
                format: Some(DocumentFormat::Markdown),
            },
        )
        .expect("report sent");
    assert_eq!(receipt.recipient, profile().email);
    assert_eq!(receipt.file_name, "data_maturity_report.md");

    let sent = mailer.sent();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].body.starts_with("Hello Amina,"));
    assert!(sent[0].body.contains("Developing"));
}

#[test]
fn email_report_surfaces_transport_failures() {
    let repository = Arc::new(MemoryRepository::default());
    let service = AssessmentService::new(
        repository,
        Arc::new(OfflineMailer),
        AssessmentSettings::default(),
    );
    let record = service.start(StartAssessment::default()).expect("start");
    let id = record.id;
    service.accept_privacy(&id).expect("privacy");
    service.submit_profile(&id, profile()).expect("profile");
    service
        .set_weights(&id, importance_answers([4; 6]))
        .expect("weights");
    for pillar in Pillar::ordered() {
        service
            .submit_pillar(&id, pillar, pillar_answers(pillar, 4))
            .expect("pillar");
    }

    let error = service
        .email_report(&id, EmailReportRequest::default())
        .expect_err("transport offline");
    assert!(matches!(
        error,
        AssessmentServiceError::Delivery(DeliveryError::Transport(_))
    ));
}

#[test]
fn get_propagates_not_found() {
    let (service, _, _) = build_service(AssessmentSettings::default());
    let error = service
        .get(&SessionId("assessment-missing".to_string()))
        .expect_err("missing session");
    assert!(matches!(
        error,
        AssessmentServiceError::Repository(RepositoryError::NotFound)
    ));
}

#[test]
fn start_propagates_repository_outages() {
    let service = AssessmentService::new(
        Arc::new(UnavailableRepository),
        Arc::new(MemoryMailer::default()),
        AssessmentSettings::default(),
    );
    let error = service
        .start(StartAssessment::default())
        .expect_err("store offline");
    assert!(matches!(
        error,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_))
    ));
}

#[test]
fn stateless_scoring_matches_the_session_flow() {
    let (service, _, _) = build_service(AssessmentSettings::default());
    let id = finished_session(&service, Some([5; 6]), [5; 6]);
    let from_session = service.report(&id).expect("session report");

    let from_request = service
        .score(ScoreRequest {
            answers: full_answer_set(5, 5),
            weighting: None,
            pillar_basis: None,
        })
        .expect("stateless report");

    assert_eq!(from_session, from_request);
    assert_eq!(from_request.classification.tier, MaturityTier::Optimized);
    assert!(matches!(
        from_request.recommendations,
        CatalogSection::Available(_)
    ));
}
