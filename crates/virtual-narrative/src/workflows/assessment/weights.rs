use super::domain::{AssessmentError, Pillar};
use serde::Serialize;

const WEIGHT_TOLERANCE: f64 = 1e-9;

/// Normalized per-pillar importance. Weights are non-negative and sum to 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightVector {
    weights: [f64; Pillar::COUNT],
}

/// Serializable `(pillar, weight)` pair for views.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WeightEntry {
    pub pillar: Pillar,
    pub pillar_label: &'static str,
    pub weight: f64,
}

impl WeightVector {
    /// Normalize six importance ratings (declaration order) so they sum to 1.
    pub fn from_ratings(ratings: [u8; Pillar::COUNT]) -> Result<Self, AssessmentError> {
        let total: u32 = ratings.iter().map(|rating| u32::from(*rating)).sum();
        if total == 0 {
            return Err(AssessmentError::DegenerateWeights { total });
        }

        let total = f64::from(total);
        Ok(Self {
            weights: ratings.map(|rating| f64::from(rating) / total),
        })
    }

    /// Accept externally supplied weights, checking they form a distribution.
    pub fn from_weights(weights: [f64; Pillar::COUNT]) -> Result<Self, AssessmentError> {
        let total: f64 = weights.iter().sum();
        let valid = weights
            .iter()
            .all(|weight| weight.is_finite() && *weight >= 0.0)
            && (total - 1.0).abs() <= 1e-6;
        if !valid {
            return Err(AssessmentError::InvalidWeights { total });
        }
        Ok(Self { weights })
    }

    pub fn equal() -> Self {
        Self {
            weights: [1.0 / Pillar::COUNT as f64; Pillar::COUNT],
        }
    }

    pub fn weight(&self, pillar: Pillar) -> f64 {
        self.weights[pillar.index()]
    }

    pub fn total(&self) -> f64 {
        self.weights.iter().sum()
    }

    pub fn is_normalized(&self) -> bool {
        (self.total() - 1.0).abs() <= WEIGHT_TOLERANCE
    }

    pub fn entries(&self) -> Vec<WeightEntry> {
        Pillar::ordered()
            .into_iter()
            .map(|pillar| WeightEntry {
                pillar,
                pillar_label: pillar.label(),
                weight: self.weight(pillar),
            })
            .collect()
    }
}
