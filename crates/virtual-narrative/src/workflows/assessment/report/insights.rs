use super::super::domain::Pillar;
use super::super::scoring::ScoreBreakdown;
use serde::Serialize;

const LOW_CEILING: f64 = 2.0;
const MEDIUM_CEILING: f64 = 3.5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InsightBand {
    Low,
    Medium,
    High,
}

impl InsightBand {
    /// Upper-closed bands over a raw pillar rating.
    pub fn for_rating(rating: f64) -> Self {
        if rating <= LOW_CEILING {
            Self::Low
        } else if rating <= MEDIUM_CEILING {
            Self::Medium
        } else {
            Self::High
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Needs attention",
            Self::Medium => "Improving",
            Self::High => "Strong",
        }
    }

    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Low => "🔴",
            Self::Medium => "🟡",
            Self::High => "🟢",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarInsight {
    pub pillar: Pillar,
    pub pillar_label: &'static str,
    pub rating: f64,
    pub band: InsightBand,
    pub message: &'static str,
}

/// One advisory per pillar, in declaration order, keyed off the raw rating only.
pub fn generate_insights(breakdown: &ScoreBreakdown) -> Vec<PillarInsight> {
    Pillar::ordered()
        .into_iter()
        .map(|pillar| {
            let rating = breakdown
                .pillar(pillar)
                .map(|score| score.rating)
                .unwrap_or(1.0);
            let band = InsightBand::for_rating(rating);
            PillarInsight {
                pillar,
                pillar_label: pillar.label(),
                rating,
                band,
                message: message_for(pillar, band),
            }
        })
        .collect()
}

fn message_for(pillar: Pillar, band: InsightBand) -> &'static str {
    use InsightBand::{High, Low, Medium};

    match (pillar, band) {
        (Pillar::Governance, Low) => "Your organization lacks formal governance policies. Consider establishing a data governance framework with clear roles and responsibilities.",
        (Pillar::Governance, Medium) => "Your governance policies are in place but need better enforcement. Focus on consistent monitoring and accountability.",
        (Pillar::Governance, High) => "Your governance policies are well-established. Continue optimizing with automation and AI-driven insights.",
        (Pillar::Quality, Low) => "Data accuracy and completeness are major concerns. Implement automated validation and monitoring processes.",
        (Pillar::Quality, Medium) => "Your data quality processes are improving but need more automation. Consider AI-powered real-time monitoring.",
        (Pillar::Quality, High) => "Your data quality is excellent. Focus on maintaining consistency and exploring advanced analytics.",
        (Pillar::MetadataManagement, Low) => "Metadata is poorly managed. Establish a centralized metadata repository and enforce standardized definitions.",
        (Pillar::MetadataManagement, Medium) => "Metadata management is improving but lacks automation. Consider AI-driven lineage tracking.",
        (Pillar::MetadataManagement, High) => "Metadata is well-managed. Continue leveraging AI for real-time anomaly detection.",
        (Pillar::Integration, Low) => "Data integration is manual and inconsistent. Invest in automated API-based data flows.",
        (Pillar::Integration, Medium) => "Integration processes are improving but need more automation. Consider real-time synchronization.",
        (Pillar::Integration, High) => "Data integration is seamless. Explore AI-driven multi-cloud integration.",
        (Pillar::AnalyticsAndAi, Low) => "Analytics adoption is low. Start with basic reporting and explore predictive analytics.",
        (Pillar::AnalyticsAndAi, Medium) => "Analytics adoption is growing. Focus on embedding machine learning models into core processes.",
        (Pillar::AnalyticsAndAi, High) => "Analytics adoption is excellent. Continue leveraging AI for decision intelligence.",
        (Pillar::SecurityAndPrivacy, Low) => "Security measures are weak. Implement role-based access control and encryption.",
        (Pillar::SecurityAndPrivacy, Medium) => "Security measures are improving but need better enforcement. Consider continuous compliance monitoring.",
        (Pillar::SecurityAndPrivacy, High) => "Security measures are robust. Focus on AI-driven anomaly detection and zero-trust models.",
    }
}
