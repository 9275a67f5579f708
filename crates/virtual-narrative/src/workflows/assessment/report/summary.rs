use super::super::domain::{PillarRatingBasis, WeightingMode};
use super::super::responses::ResponseStore;
use super::super::scoring::{MaturityScorer, ScoreBreakdown};
use super::super::tier::{classify, GaugeModel, TierClassification};
use super::super::weights::WeightVector;
use super::catalog::{CapabilityProfile, MaturityCatalog, RecommendationProfile};
use super::insights::{generate_insights, PillarInsight};
use serde::Serialize;

pub(crate) const MISSING_CAPABILITIES: &str =
    "No analytics capabilities found for this maturity level.";
pub(crate) const MISSING_RECOMMENDATIONS: &str =
    "No recommendations found for this maturity level.";

/// A catalog lookup that either resolved or fell back to placeholder text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "section", rename_all = "snake_case")]
pub enum CatalogSection<T> {
    Available(T),
    Missing { placeholder: &'static str },
}

impl<T> CatalogSection<T> {
    fn resolve(entry: Option<&T>, placeholder: &'static str) -> Self
    where
        T: Clone,
    {
        match entry {
            Some(entry) => Self::Available(entry.clone()),
            None => Self::Missing { placeholder },
        }
    }

    pub fn available(&self) -> Option<&T> {
        match self {
            Self::Available(entry) => Some(entry),
            Self::Missing { .. } => None,
        }
    }
}

/// Everything a renderer needs, computed from answers alone. Carries no
/// timestamps so identical inputs produce identical reports.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MaturityReport {
    pub weighting: WeightingMode,
    pub pillar_basis: PillarRatingBasis,
    pub classification: TierClassification,
    pub breakdown: ScoreBreakdown,
    pub insights: Vec<PillarInsight>,
    pub current_capabilities: CatalogSection<CapabilityProfile>,
    pub recommendations: CatalogSection<RecommendationProfile>,
    pub roadmap: Vec<CapabilityProfile>,
    pub gauge: GaugeModel,
}

impl MaturityReport {
    /// Score `responses` and attach the catalog sections for the resulting tier.
    ///
    /// Without a weight vector the aggregate is the unweighted mean.
    pub fn assemble(
        weights: Option<&WeightVector>,
        responses: &ResponseStore,
        catalog: &MaturityCatalog,
        pillar_basis: PillarRatingBasis,
    ) -> Self {
        let ratings = responses.pillar_ratings(pillar_basis);
        let breakdown = MaturityScorer::score(&ratings, weights);
        Self::from_breakdown(breakdown, catalog, pillar_basis)
    }

    pub fn from_breakdown(
        breakdown: ScoreBreakdown,
        catalog: &MaturityCatalog,
        pillar_basis: PillarRatingBasis,
    ) -> Self {
        let classification = classify(breakdown.aggregate);
        let tier = classification.tier;
        let insights = generate_insights(&breakdown);

        Self {
            weighting: breakdown.weighting,
            pillar_basis,
            current_capabilities: CatalogSection::resolve(
                catalog.capabilities_for(tier),
                MISSING_CAPABILITIES,
            ),
            recommendations: CatalogSection::resolve(
                catalog.recommendations_for(tier),
                MISSING_RECOMMENDATIONS,
            ),
            roadmap: catalog.roadmap(tier),
            gauge: GaugeModel::for_score(breakdown.aggregate),
            classification,
            insights,
            breakdown,
        }
    }

    pub fn aggregate(&self) -> f64 {
        self.breakdown.aggregate
    }
}
