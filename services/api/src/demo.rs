use crate::cli::OutputFormat;
use crate::infra::{InMemorySessionRepository, OutboxMailer};
use chrono::Local;
use clap::Args;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;
use virtual_narrative::config::AppConfig;
use virtual_narrative::error::AppError;
use virtual_narrative::workflows::assessment::{
    score_responses, AnswerImporter, AnswerSubmission, AssessmentService, AssessmentSettings,
    EmailReportRequest, MaturityCatalog, MaturityReport, Pillar,
    PillarRatingBasis, Questionnaire, ReportDocument, StartAssessment, UserProfile,
    WeightingMode,
};

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// CSV export with one `question_id,answer` row per question
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Ignore importance ratings and average the pillars equally
    #[arg(long)]
    pub(crate) equal_weights: bool,
    /// Average all three answers of a pillar instead of scoring the first
    #[arg(long)]
    pub(crate) average_pillars: bool,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
}

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Run the sample respondent without the importance step
    #[arg(long)]
    pub(crate) equal_weights: bool,
    #[arg(long, value_enum, default_value_t)]
    pub(crate) format: OutputFormat,
    /// Send the sample report here instead of the profile e-mail
    #[arg(long)]
    pub(crate) recipient: Option<String>,
}

/// Sample respondent: governance-heavy priorities, uneven maturity.
const DEMO_IMPORTANCE: [u8; Pillar::COUNT] = [5, 4, 2, 3, 4, 5];
const DEMO_RATINGS: [u8; Pillar::COUNT] = [3, 2, 2, 4, 3, 4];

fn cli_settings(equal_weights: bool, average_pillars: bool) -> Result<AssessmentSettings, AppError> {
    let mut settings = AppConfig::load()?.assessment;
    if equal_weights {
        settings.weighting = WeightingMode::Equal;
    }
    if average_pillars {
        settings.pillar_basis = PillarRatingBasis::QuestionAverage;
    }
    Ok(settings)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let ScoreArgs {
        answers,
        equal_weights,
        average_pillars,
        format,
    } = args;

    let settings = cli_settings(equal_weights, average_pillars)?;
    let responses = AnswerImporter::from_path(&answers)?;
    let report = score_responses(&responses, settings, &MaturityCatalog::standard())?;

    println!("{}", render(&report, format)?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let DemoArgs {
        equal_weights,
        format,
        recipient,
    } = args;

    let settings = cli_settings(equal_weights, false)?;
    let mailer = Arc::new(OutboxMailer::default());
    let service = AssessmentService::new(
        Arc::new(InMemorySessionRepository::default()),
        mailer.clone(),
        settings,
    );

    println!("Data maturity assessment demo ({})", settings.weighting.label());
    let record = match service.start(StartAssessment::default()) {
        Ok(record) => record,
        Err(err) => {
            println!("  Session could not start: {}", err);
            return Ok(());
        }
    };
    let id = record.id;

    let walkthrough = service
        .accept_privacy(&id)
        .and_then(|_| service.submit_profile(&id, demo_profile()))
        .and_then(|record| {
            if record.session.settings().weighting == WeightingMode::Dynamic {
                service.set_weights(&id, importance_submission())
            } else {
                Ok(record)
            }
        });
    if let Err(err) = walkthrough {
        println!("  Intake rejected: {}", err);
        return Ok(());
    }

    for pillar in Pillar::ordered() {
        match service.submit_pillar(&id, pillar, pillar_submission(pillar)) {
            Ok(record) => {
                let view = record.view();
                println!(
                    "- {} submitted | {}% complete | stage {}",
                    pillar, view.progress_percent, view.stage_label
                );
            }
            Err(err) => {
                println!("  {} rejected: {}", pillar, err);
                return Ok(());
            }
        }
    }

    let report = match service.report(&id) {
        Ok(report) => report,
        Err(err) => {
            println!("  Report unavailable: {}", err);
            return Ok(());
        }
    };
    println!(
        "\n{} {} ({:.2})\n",
        report.classification.tier.glyph(),
        report.classification.tier_label,
        report.aggregate()
    );
    println!("{}", render(&report, format)?);

    let request = EmailReportRequest {
        recipient,
        format: format.document_format(),
    };
    match service.email_report(&id, request) {
        Ok(receipt) => println!(
            "\nReport '{}' ({} bytes) queued for {} at {}",
            receipt.file_name,
            receipt.size_bytes,
            receipt.recipient,
            receipt
                .generated_at
                .with_timezone(&Local)
                .format("%Y-%m-%d %H:%M")
        ),
        Err(err) => println!("\n  Delivery skipped: {}", err),
    }
    println!("Outbox holds {} message(s)", mailer.envelopes().len());

    Ok(())
}

fn render(report: &MaturityReport, format: OutputFormat) -> Result<String, AppError> {
    match format.document_format() {
        Some(document_format) => Ok(document_format.render(&ReportDocument::from_report(report))),
        None => Ok(serde_json::to_string_pretty(report)?),
    }
}

fn demo_profile() -> UserProfile {
    UserProfile {
        first_name: "Jordan".to_string(),
        last_name: "Okafor".to_string(),
        email: "jordan.okafor@example.com".to_string(),
        organization: Some("Harbor Freight Cooperative".to_string()),
        business_unit: Some("Operations".to_string()),
    }
}

fn importance_submission() -> AnswerSubmission {
    let questionnaire = Questionnaire::standard();
    let answers = Pillar::ordered()
        .into_iter()
        .filter_map(|pillar| {
            let question = questionnaire.importance_question(pillar)?;
            let option = question.option_for(DEMO_IMPORTANCE[pillar.index()])?;
            Some((question.key.to_string(), option.to_string()))
        })
        .collect();
    AnswerSubmission { answers }
}

fn pillar_submission(pillar: Pillar) -> AnswerSubmission {
    let rating = DEMO_RATINGS[pillar.index()];
    let answers: BTreeMap<String, String> = Questionnaire::standard()
        .pillar_questions(pillar)
        .into_iter()
        .filter_map(|question| {
            let option = question.option_for(rating)?;
            Some((question.key.to_string(), option.to_string()))
        })
        .collect();
    AnswerSubmission { answers }
}
