//! Property-based checks for the weighting, scoring and tier pipeline.

use proptest::prelude::*;
use virtual_narrative::workflows::assessment::{
    classify, extract_rating, MaturityCatalog, MaturityReport, MaturityScorer, MaturityTier,
    PillarRatingBasis, ResponseStore, WeightVector,
};

fn ratings() -> impl Strategy<Value = [u8; 6]> {
    prop::array::uniform6(1u8..=5)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn weights_from_ratings_form_a_distribution(importance in ratings()) {
        let weights = WeightVector::from_ratings(importance).expect("ratings are positive");
        prop_assert!((weights.total() - 1.0).abs() <= 1e-9);
        prop_assert!(weights.entries().iter().all(|entry| entry.weight > 0.0));
    }

    #[test]
    fn weighted_aggregate_stays_within_rating_range(
        importance in ratings(),
        pillar_ratings in ratings(),
    ) {
        let weights = WeightVector::from_ratings(importance).expect("ratings are positive");
        let breakdown = MaturityScorer::weighted(&pillar_ratings.map(f64::from), &weights);
        prop_assert!(breakdown.aggregate >= 1.0 - 1e-9);
        prop_assert!(breakdown.aggregate <= 5.0 + 1e-9);
    }

    #[test]
    fn classification_is_monotonic(a in -1.0f64..7.0, b in -1.0f64..7.0) {
        let (low, high) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(classify(low).tier <= classify(high).tier);
    }

    #[test]
    fn every_score_maps_to_exactly_one_tier(score in -10.0f64..10.0) {
        let tier = classify(score).tier;
        let lower = MaturityTier::ordered()
            .into_iter()
            .take_while(|candidate| *candidate != tier)
            .last()
            .and_then(|previous| previous.upper_bound());
        if let Some(lower) = lower {
            prop_assert!(score > lower);
        }
        if let Some(upper) = tier.upper_bound() {
            prop_assert!(score <= upper);
        }
    }

    #[test]
    fn extraction_never_panics(answer in "\\PC{0,80}") {
        let rating = extract_rating(&answer);
        prop_assert!(rating >= 1 || answer.contains("(0"));
    }

    #[test]
    fn embedded_rating_is_recovered(prefix in "[A-Za-z ,]{0,40}", rating in 1u8..=5) {
        prop_assert_eq!(extract_rating(&format!("{prefix} ({rating})")), rating);
    }

    #[test]
    fn stored_ratings_stay_on_the_scale(prefix in "\\PC{0,40}", number in 0u16..1000) {
        let answer = format!("{prefix} ({number})");
        if let Ok(store) = ResponseStore::from_answers([("gov_q1", answer.as_str())]) {
            prop_assert!((1..=5).contains(&store.rating("gov_q1")));
        }
    }

    #[test]
    fn report_assembly_is_idempotent(importance in ratings()) {
        let weights = WeightVector::from_ratings(importance).expect("ratings are positive");
        let responses = ResponseStore::new();
        let catalog = MaturityCatalog::standard();
        let first = MaturityReport::assemble(
            Some(&weights),
            &responses,
            &catalog,
            PillarRatingBasis::FirstQuestion,
        );
        let second = MaturityReport::assemble(
            Some(&weights),
            &responses,
            &catalog,
            PillarRatingBasis::FirstQuestion,
        );
        prop_assert_eq!(first, second);
    }
}
