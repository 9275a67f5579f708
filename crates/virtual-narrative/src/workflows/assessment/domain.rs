use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the six data-management dimensions the questionnaire covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Pillar {
    Governance,
    Quality,
    MetadataManagement,
    Integration,
    AnalyticsAndAi,
    SecurityAndPrivacy,
}

impl Pillar {
    pub const COUNT: usize = 6;

    pub const fn ordered() -> [Self; Self::COUNT] {
        [
            Self::Governance,
            Self::Quality,
            Self::MetadataManagement,
            Self::Integration,
            Self::AnalyticsAndAi,
            Self::SecurityAndPrivacy,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Governance => "Data Governance",
            Self::Quality => "Data Quality",
            Self::MetadataManagement => "Metadata Management",
            Self::Integration => "Data Integration",
            Self::AnalyticsAndAi => "Data Analytics & AI",
            Self::SecurityAndPrivacy => "Data Security & Privacy",
        }
    }

    /// Position in declaration order, usable as an index into per-pillar arrays.
    pub const fn index(self) -> usize {
        match self {
            Self::Governance => 0,
            Self::Quality => 1,
            Self::MetadataManagement => 2,
            Self::Integration => 3,
            Self::AnalyticsAndAi => 4,
            Self::SecurityAndPrivacy => 5,
        }
    }

    /// The pillar whose questions follow this one, if any.
    pub const fn next(self) -> Option<Self> {
        match self {
            Self::Governance => Some(Self::Quality),
            Self::Quality => Some(Self::MetadataManagement),
            Self::MetadataManagement => Some(Self::Integration),
            Self::Integration => Some(Self::AnalyticsAndAi),
            Self::AnalyticsAndAi => Some(Self::SecurityAndPrivacy),
            Self::SecurityAndPrivacy => None,
        }
    }
}

impl fmt::Display for Pillar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Ordered maturity classification derived from the aggregate score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MaturityTier {
    InitialAdHoc,
    Developing,
    Defined,
    Managed,
    Optimized,
}

impl MaturityTier {
    pub const fn ordered() -> [Self; 5] {
        [
            Self::InitialAdHoc,
            Self::Developing,
            Self::Defined,
            Self::Managed,
            Self::Optimized,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::InitialAdHoc => "Initial/Ad Hoc",
            Self::Developing => "Developing",
            Self::Defined => "Defined",
            Self::Managed => "Managed",
            Self::Optimized => "Optimized",
        }
    }

    /// Inclusive upper score bound; the top tier is unbounded.
    pub const fn upper_bound(self) -> Option<f64> {
        match self {
            Self::InitialAdHoc => Some(1.5),
            Self::Developing => Some(2.5),
            Self::Defined => Some(3.5),
            Self::Managed => Some(4.5),
            Self::Optimized => None,
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::InitialAdHoc => "You are at the beginning point for Data Management. Start by defining data governance policies and improving data quality.",
            Self::Developing => "You have basic policies but lack consistency. Focus on standardizing processes and improving data integration.",
            Self::Defined => "You have structured processes, but there is room for more automation and real-time analytics.",
            Self::Managed => "Your organization has well-established data governance. Continue refining automation and advanced analytics adoption.",
            Self::Optimized => "Your organization is at the highest level of data maturity! Continue leveraging AI-driven insights for optimization.",
        }
    }

    /// Presentation glyph used by on-screen views; never a lookup key.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::InitialAdHoc => "🔴",
            Self::Developing => "🟠",
            Self::Defined => "🟡",
            Self::Managed => "🟢",
            Self::Optimized => "🔵",
        }
    }

    /// Gauge band color for chart renderers.
    pub const fn color(self) -> &'static str {
        match self {
            Self::InitialAdHoc => "red",
            Self::Developing => "orange",
            Self::Defined => "yellow",
            Self::Managed => "green",
            Self::Optimized => "blue",
        }
    }

    pub const fn is_early_stage(self) -> bool {
        matches!(self, Self::InitialAdHoc | Self::Developing)
    }
}

impl fmt::Display for MaturityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether the aggregate uses the respondent's importance ratings or equal weights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WeightingMode {
    #[default]
    Dynamic,
    Equal,
}

impl WeightingMode {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "dynamic" | "weighted" => Some(Self::Dynamic),
            "equal" | "unweighted" => Some(Self::Equal),
            _ => None,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Dynamic => "Dynamic weighting",
            Self::Equal => "Equal weighting",
        }
    }
}

/// Which of a pillar's three answers feed its representative rating.
///
/// `FirstQuestion` reproduces the questionnaire's historical scoring, where the
/// second and third answers are collected and displayed but not scored.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarRatingBasis {
    #[default]
    FirstQuestion,
    QuestionAverage,
}

impl PillarRatingBasis {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().replace('-', "_").as_str() {
            "first_question" | "first" => Some(Self::FirstQuestion),
            "question_average" | "average" => Some(Self::QuestionAverage),
            _ => None,
        }
    }
}

/// Flow switches for a single assessment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentSettings {
    pub weighting: WeightingMode,
    pub pillar_basis: PillarRatingBasis,
}

/// Respondent details gathered before the questionnaire starts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserProfile {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub organization: Option<String>,
    #[serde(default)]
    pub business_unit: Option<String>,
}

impl UserProfile {
    /// First required field left blank, if any.
    pub fn missing_field(&self) -> Option<&'static str> {
        [
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
        ]
        .into_iter()
        .find(|(_, value)| value.trim().is_empty())
        .map(|(field, _)| field)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AssessmentError {
    #[error("importance ratings sum to {total}; weights cannot be normalized")]
    DegenerateWeights { total: u32 },
    #[error("weights must be non-negative and sum to 1.0 (got {total:.4})")]
    InvalidWeights { total: f64 },
    #[error("unknown question id '{0}'")]
    UnknownQuestion(String),
    #[error("'{answer}' is not an option for question '{question}'")]
    InvalidAnswer { question: String, answer: String },
    #[error("question '{question}' does not belong to {expected}")]
    QuestionOutOfSection {
        question: String,
        expected: &'static str,
    },
    #[error("cannot {action} while the assessment is at stage '{stage}'")]
    StageOutOfOrder {
        action: &'static str,
        stage: &'static str,
    },
    #[error("required profile field '{0}' is missing")]
    MissingProfileField(&'static str),
    #[error("assessment incomplete: {completed} of 6 pillars submitted")]
    Incomplete { completed: usize },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pillar_indices_follow_declaration_order() {
        for (position, pillar) in Pillar::ordered().into_iter().enumerate() {
            assert_eq!(pillar.index(), position);
        }
        assert_eq!(Pillar::AnalyticsAndAi.next(), Some(Pillar::SecurityAndPrivacy));
        assert_eq!(Pillar::SecurityAndPrivacy.next(), None);
    }

    #[test]
    fn profile_reports_first_blank_required_field() {
        let profile = UserProfile {
            first_name: "Amina".to_string(),
            last_name: "  ".to_string(),
            email: String::new(),
            ..UserProfile::default()
        };
        assert_eq!(profile.missing_field(), Some("last_name"));
    }

    #[test]
    fn weighting_mode_parses_aliases() {
        assert_eq!(WeightingMode::parse(" Weighted "), Some(WeightingMode::Dynamic));
        assert_eq!(WeightingMode::parse("equal"), Some(WeightingMode::Equal));
        assert_eq!(WeightingMode::parse("skewed"), None);
        assert_eq!(
            PillarRatingBasis::parse("question-average"),
            Some(PillarRatingBasis::QuestionAverage)
        );
    }
}
