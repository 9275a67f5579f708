use super::domain::{Pillar, WeightingMode};
use super::weights::WeightVector;
use serde::Serialize;

/// One pillar's contribution to the aggregate.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PillarScore {
    pub pillar: Pillar,
    pub pillar_label: &'static str,
    /// Representative raw rating (1-5) before weighting.
    pub rating: f64,
    pub weight: f64,
    pub weighted_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreBreakdown {
    pub weighting: WeightingMode,
    pub pillars: Vec<PillarScore>,
    pub aggregate: f64,
}

impl ScoreBreakdown {
    pub fn pillar(&self, pillar: Pillar) -> Option<&PillarScore> {
        self.pillars.iter().find(|score| score.pillar == pillar)
    }
}

/// Turns representative pillar ratings into weighted and aggregate scores.
pub struct MaturityScorer;

impl MaturityScorer {
    /// `weighted[p] = rating[p] * weight[p]`; the aggregate is their sum.
    pub fn weighted(ratings: &[f64; Pillar::COUNT], weights: &WeightVector) -> ScoreBreakdown {
        let pillars: Vec<PillarScore> = Pillar::ordered()
            .into_iter()
            .map(|pillar| {
                let rating = ratings[pillar.index()];
                let weight = weights.weight(pillar);
                PillarScore {
                    pillar,
                    pillar_label: pillar.label(),
                    rating,
                    weight,
                    weighted_score: rating * weight,
                }
            })
            .collect();
        let aggregate = pillars.iter().map(|score| score.weighted_score).sum();

        ScoreBreakdown {
            weighting: WeightingMode::Dynamic,
            pillars,
            aggregate,
        }
    }

    /// Plain mean of the ratings, reported with implicit weights of 1/6.
    pub fn unweighted(ratings: &[f64; Pillar::COUNT]) -> ScoreBreakdown {
        let share = 1.0 / Pillar::COUNT as f64;
        let pillars = Pillar::ordered()
            .into_iter()
            .map(|pillar| {
                let rating = ratings[pillar.index()];
                PillarScore {
                    pillar,
                    pillar_label: pillar.label(),
                    rating,
                    weight: share,
                    weighted_score: rating * share,
                }
            })
            .collect();
        let aggregate = ratings.iter().sum::<f64>() / Pillar::COUNT as f64;

        ScoreBreakdown {
            weighting: WeightingMode::Equal,
            pillars,
            aggregate,
        }
    }

    /// Weighted when a weighting stage produced a vector, unweighted otherwise.
    pub fn score(ratings: &[f64; Pillar::COUNT], weights: Option<&WeightVector>) -> ScoreBreakdown {
        match weights {
            Some(weights) => Self::weighted(ratings, weights),
            None => Self::unweighted(ratings),
        }
    }
}
