use virtual_narrative::workflows::assessment::{
    AnswerImporter, AssessmentError, AssessmentSession, AssessmentSettings, AssessmentStage,
    DocumentFormat, MaturityCatalog, MaturityTier, Pillar, Questionnaire, ReportDocument,
    UserProfile, WeightingMode,
};

fn profile() -> UserProfile {
    UserProfile {
        first_name: "Otieno".to_string(),
        last_name: "Kamau".to_string(),
        email: "otieno.kamau@example.co.ke".to_string(),
        organization: Some("Lakeside Cooperative".to_string()),
        business_unit: None,
    }
}

fn pillar_answers(pillar: Pillar, rating: u8) -> Vec<(&'static str, &'static str)> {
    Questionnaire::standard()
        .pillar_questions(pillar)
        .into_iter()
        .map(|question| {
            (
                question.key,
                question.option_for(rating).expect("rating in range"),
            )
        })
        .collect()
}

#[test]
fn session_advances_strictly_in_order() {
    let mut session = AssessmentSession::new(AssessmentSettings::default());
    assert_eq!(session.stage(), AssessmentStage::Intro);

    let error = session
        .submit_profile(profile())
        .expect_err("privacy must come first");
    assert!(matches!(error, AssessmentError::StageOutOfOrder { .. }));

    session.accept_privacy().expect("privacy accepted");
    assert!(session.accept_privacy().is_err(), "privacy accepted twice");
    session.submit_profile(profile()).expect("profile accepted");
    assert_eq!(session.next_pillar(), None, "weights stage pending");

    let weights = session
        .set_weights([
            ("gov_weight", "Extremely Important (5)"),
            ("dq_weight", "Slightly Important (2)"),
        ])
        .expect("weights set");
    assert!(weights.is_normalized());
    assert_eq!(session.stage(), AssessmentStage::WeightsSet);

    let mut expected_progress = [16, 33, 50, 66, 83, 100].into_iter();
    for pillar in Pillar::ordered() {
        assert_eq!(session.next_pillar(), Some(pillar));
        session
            .submit_pillar(pillar, pillar_answers(pillar, 3))
            .expect("pillar accepted");
        assert_eq!(Some(session.progress_percent()), expected_progress.next());
    }

    assert_eq!(session.stage(), AssessmentStage::Finished);
    assert_eq!(session.next_pillar(), None);
    assert!(session
        .submit_pillar(Pillar::SecurityAndPrivacy, pillar_answers(Pillar::SecurityAndPrivacy, 5))
        .is_err());

    let report = session
        .report(&MaturityCatalog::standard())
        .expect("report ready");
    assert_eq!(report.classification.tier, MaturityTier::Defined);
}

#[test]
fn unanswered_importance_questions_count_as_one() {
    let mut session = AssessmentSession::new(AssessmentSettings::default());
    session.accept_privacy().expect("privacy");
    session.submit_profile(profile()).expect("profile");

    let weights = *session
        .set_weights([("gov_weight", "Extremely Important (5)")])
        .expect("weights set");
    assert!((weights.weight(Pillar::Governance) - 0.5).abs() < 1e-12);
    assert!((weights.weight(Pillar::Quality) - 0.1).abs() < 1e-12);
}

#[test]
fn imported_answers_render_a_text_report() {
    let mut csv = String::from("question_id,answer\n");
    for pillar in Pillar::ordered() {
        for (key, answer) in pillar_answers(pillar, 2) {
            csv.push_str(&format!("{key},\"{answer}\"\n"));
        }
    }

    let responses = AnswerImporter::from_reader(csv.as_bytes()).expect("csv imports");
    let report = virtual_narrative::workflows::assessment::score_responses(
        &responses,
        AssessmentSettings {
            weighting: WeightingMode::Equal,
            ..AssessmentSettings::default()
        },
        &MaturityCatalog::standard(),
    )
    .expect("scores");
    assert_eq!(report.classification.tier, MaturityTier::Developing);

    let text = DocumentFormat::Text.render(&ReportDocument::from_report(&report));
    assert!(text.starts_with("The Virtual Narrative: Data Maturity Assessment Report\n"));
    assert!(text.contains("Average Maturity Score: 2.00/5"));
    assert!(text.contains("- Data Quality: Data accuracy and completeness are major concerns."));
    assert!(text.contains("Need a Helping Hand Across the Chasm to Data Maturity?"));
}
