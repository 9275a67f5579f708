//! Scoring and report engine behind The Virtual Narrative data maturity assessment.
//!
//! The [`workflows::assessment`] module owns the questionnaire, the weighting and
//! scoring pipeline, tier classification, and report assembly. [`config`],
//! [`error`], and [`telemetry`] carry the ambient service plumbing shared with the
//! HTTP front end.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
