use super::domain::MaturityTier;
use serde::Serialize;

const GAUGE_MIN: f64 = 0.0;
const GAUGE_MAX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TierClassification {
    pub tier: MaturityTier,
    pub tier_label: &'static str,
    pub score: f64,
    pub recommendation: &'static str,
}

/// Map an aggregate score onto its tier. Upper bounds are inclusive, so a score
/// sitting exactly on a boundary belongs to the lower tier.
pub fn classify(score: f64) -> TierClassification {
    debug_assert!(!score.is_nan(), "aggregate maturity score must be a number");

    let tier = MaturityTier::ordered()
        .into_iter()
        .find(|tier| match tier.upper_bound() {
            Some(bound) => score <= bound,
            None => !score.is_nan(),
        })
        .unwrap_or(MaturityTier::InitialAdHoc);

    TierClassification {
        tier,
        tier_label: tier.label(),
        score,
        recommendation: tier.recommendation(),
    }
}

/// A colored range on the maturity gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeBand {
    pub tier: MaturityTier,
    pub lower: f64,
    pub upper: f64,
    pub color: &'static str,
}

/// Numbers a chart renderer needs to draw the maturity gauge.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GaugeModel {
    pub title: &'static str,
    pub axis_min: f64,
    pub axis_max: f64,
    pub bands: Vec<GaugeBand>,
    pub marker: f64,
}

impl GaugeModel {
    pub fn for_score(score: f64) -> Self {
        let mut lower = GAUGE_MIN;
        let bands = MaturityTier::ordered()
            .into_iter()
            .map(|tier| {
                let upper = tier.upper_bound().unwrap_or(GAUGE_MAX);
                let band = GaugeBand {
                    tier,
                    lower,
                    upper,
                    color: tier.color(),
                };
                lower = upper;
                band
            })
            .collect();

        Self {
            title: "Your Data Maturity Score",
            axis_min: GAUGE_MIN,
            axis_max: GAUGE_MAX,
            bands,
            marker: score,
        }
    }
}
