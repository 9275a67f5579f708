use super::report::{DocumentFormat, MaturityReport, ReportDocument};
use chrono::{DateTime, Utc};
use mime::Mime;
use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

pub const REPORT_SUBJECT: &str = "Your Data Maturity Assessment Report";
const ATTACHMENT_STEM: &str = "data_maturity_report";

static RECIPIENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("static regex"));

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportAttachment {
    pub file_name: String,
    pub content_type: Mime,
    pub body: Vec<u8>,
}

/// A rendered report addressed to one respondent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportEnvelope {
    pub recipient: String,
    pub subject: &'static str,
    pub body: String,
    pub attachment: ReportAttachment,
    pub generated_at: DateTime<Utc>,
}

impl ReportEnvelope {
    pub fn compose(
        recipient: &str,
        greeting_name: Option<&str>,
        report: &MaturityReport,
        format: DocumentFormat,
        generated_at: DateTime<Utc>,
    ) -> Result<Self, DeliveryError> {
        let recipient = recipient.trim();
        if !RECIPIENT_PATTERN.is_match(recipient) {
            return Err(DeliveryError::InvalidRecipient(recipient.to_string()));
        }

        let greeting = match greeting_name.map(str::trim).filter(|name| !name.is_empty()) {
            Some(name) => format!("Hello {name},"),
            None => "Hello,".to_string(),
        };
        let body = format!(
            "{greeting}\n\n\
Thank you for completing The Virtual Narrative: Data Maturity Assessment.\n\
Your organization's data maturity level is {} with a score of {:.2}/5.\n\
The full report is attached.\n\n\
Virtual Analytics\n",
            report.classification.tier_label,
            report.aggregate(),
        );

        let document = ReportDocument::from_report(report);
        Ok(Self {
            recipient: recipient.to_string(),
            subject: REPORT_SUBJECT,
            body,
            attachment: ReportAttachment {
                file_name: format!("{ATTACHMENT_STEM}.{}", format.extension()),
                content_type: format.content_type(),
                body: format.render(&document).into_bytes(),
            },
            generated_at,
        })
    }

    pub fn receipt(&self) -> DeliveryReceipt {
        DeliveryReceipt {
            recipient: self.recipient.clone(),
            subject: self.subject,
            file_name: self.attachment.file_name.clone(),
            content_type: self.attachment.content_type.to_string(),
            size_bytes: self.attachment.body.len(),
            generated_at: self.generated_at,
        }
    }
}

/// What the API reports back after a successful hand-off.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeliveryReceipt {
    pub recipient: String,
    pub subject: &'static str,
    pub file_name: String,
    pub content_type: String,
    pub size_bytes: usize,
    pub generated_at: DateTime<Utc>,
}

/// Outbound hook for report e-mails; transports live outside this crate.
pub trait ReportMailer: Send + Sync {
    fn send(&self, envelope: ReportEnvelope) -> Result<(), DeliveryError>;
}

#[derive(Debug, thiserror::Error)]
pub enum DeliveryError {
    #[error("'{0}' is not a deliverable e-mail address")]
    InvalidRecipient(String),
    #[error("report transport unavailable: {0}")]
    Transport(String),
}
