use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

use super::delivery::{DeliveryError, ReportMailer};
use super::domain::{AssessmentError, Pillar, UserProfile};
use super::report::DocumentFormat;
use super::repository::{RepositoryError, SessionId, SessionRepository};
use super::service::{
    AnswerSubmission, AssessmentService, AssessmentServiceError, EmailReportRequest,
    ScoreRequest, StartAssessment,
};

/// Router exposing stateless scoring and the per-session questionnaire flow.
pub fn assessment_router<R, M>(service: Arc<AssessmentService<R, M>>) -> Router
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    Router::new()
        .route("/api/v1/assessment/score", post(score_handler::<R, M>))
        .route("/api/v1/assessments", post(start_handler::<R, M>))
        .route("/api/v1/assessments/:session_id", get(view_handler::<R, M>))
        .route(
            "/api/v1/assessments/:session_id/privacy",
            post(privacy_handler::<R, M>),
        )
        .route(
            "/api/v1/assessments/:session_id/profile",
            post(profile_handler::<R, M>),
        )
        .route(
            "/api/v1/assessments/:session_id/weights",
            post(weights_handler::<R, M>),
        )
        .route(
            "/api/v1/assessments/:session_id/pillars/:pillar",
            post(pillar_handler::<R, M>),
        )
        .route(
            "/api/v1/assessments/:session_id/report",
            get(report_handler::<R, M>),
        )
        .route(
            "/api/v1/assessments/:session_id/report/email",
            post(email_handler::<R, M>),
        )
        .with_state(service)
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct ReportQuery {
    format: Option<String>,
}

pub(crate) async fn score_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    axum::Json(request): axum::Json<ScoreRequest>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    match service.score(request) {
        Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn start_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    request: Option<axum::Json<StartAssessment>>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    let request = request.map(|axum::Json(request)| request).unwrap_or_default();
    match service.start(request) {
        Ok(record) => (StatusCode::CREATED, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn view_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    match service.get(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn privacy_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    Path(session_id): Path<String>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    match service.accept_privacy(&SessionId(session_id)) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn profile_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    Path(session_id): Path<String>,
    axum::Json(profile): axum::Json<UserProfile>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    match service.submit_profile(&SessionId(session_id), profile) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn weights_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    Path(session_id): Path<String>,
    axum::Json(submission): axum::Json<AnswerSubmission>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    match service.set_weights(&SessionId(session_id), submission) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn pillar_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    Path((session_id, pillar)): Path<(String, Pillar)>,
    axum::Json(submission): axum::Json<AnswerSubmission>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    match service.submit_pillar(&SessionId(session_id), pillar, submission) {
        Ok(record) => (StatusCode::OK, axum::Json(record.view())).into_response(),
        Err(error) => error_response(error),
    }
}

pub(crate) async fn report_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    Path(session_id): Path<String>,
    Query(query): Query<ReportQuery>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    let id = SessionId(session_id);
    let format = match query.format.as_deref().map(str::trim) {
        None | Some("json") => None,
        Some(raw) => match DocumentFormat::parse(raw) {
            Some(format) => Some(format),
            None => {
                let payload = json!({
                    "error": format!("unsupported report format '{raw}'"),
                });
                return (StatusCode::BAD_REQUEST, axum::Json(payload)).into_response();
            }
        },
    };

    match format {
        None => match service.report(&id) {
            Ok(report) => (StatusCode::OK, axum::Json(report)).into_response(),
            Err(error) => error_response(error),
        },
        Some(format) => match service.document(&id, format) {
            Ok(body) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, format.content_type().to_string())],
                body,
            )
                .into_response(),
            Err(error) => error_response(error),
        },
    }
}

pub(crate) async fn email_handler<R, M>(
    State(service): State<Arc<AssessmentService<R, M>>>,
    Path(session_id): Path<String>,
    request: Option<axum::Json<EmailReportRequest>>,
) -> Response
where
    R: SessionRepository + 'static,
    M: ReportMailer + 'static,
{
    let request = request.map(|axum::Json(request)| request).unwrap_or_default();
    match service.email_report(&SessionId(session_id), request) {
        Ok(receipt) => (StatusCode::ACCEPTED, axum::Json(receipt)).into_response(),
        Err(error) => error_response(error),
    }
}

fn error_status(error: &AssessmentServiceError) -> StatusCode {
    match error {
        AssessmentServiceError::Repository(RepositoryError::NotFound) => StatusCode::NOT_FOUND,
        AssessmentServiceError::Repository(RepositoryError::Conflict) => StatusCode::CONFLICT,
        AssessmentServiceError::Repository(RepositoryError::Unavailable(_)) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
        AssessmentServiceError::Assessment(error) => match error {
            AssessmentError::StageOutOfOrder { .. } | AssessmentError::Incomplete { .. } => {
                StatusCode::CONFLICT
            }
            AssessmentError::UnknownQuestion(_)
            | AssessmentError::QuestionOutOfSection { .. }
            | AssessmentError::InvalidAnswer { .. } => StatusCode::BAD_REQUEST,
            AssessmentError::MissingProfileField(_)
            | AssessmentError::DegenerateWeights { .. }
            | AssessmentError::InvalidWeights { .. } => StatusCode::UNPROCESSABLE_ENTITY,
        },
        AssessmentServiceError::Delivery(DeliveryError::InvalidRecipient(_))
        | AssessmentServiceError::MissingRecipient => StatusCode::UNPROCESSABLE_ENTITY,
        AssessmentServiceError::Delivery(DeliveryError::Transport(_)) => StatusCode::BAD_GATEWAY,
    }
}

fn error_response(error: AssessmentServiceError) -> Response {
    let status = error_status(&error);
    let payload = json!({
        "error": error.to_string(),
    });
    (status, axum::Json(payload)).into_response()
}
