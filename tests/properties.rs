//! Property tests for tier assignment and aggregation.

use std::collections::BTreeSet;

use proptest::prelude::*;
use u_tiers::aggregate::build_tier_aggregates;
use u_tiers::tiering::{BreakSelection, RankedEntity, TierConfig, TierEngine};

fn entities(ranks: &[f64]) -> Vec<RankedEntity> {
    ranks
        .iter()
        .enumerate()
        .map(|(i, &r)| RankedEntity::new(format!("e{i}"), r))
        .collect()
}

fn ranks_strategy() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec(
        prop_oneof![
            (0u32..300).prop_map(f64::from),
            (0.0f64..300.0),
        ],
        0..60,
    )
}

fn selection_strategy() -> impl Strategy<Value = BreakSelection> {
    prop_oneof![
        Just(BreakSelection::ByPosition),
        Just(BreakSelection::ByMagnitude)
    ]
}

proptest! {
    #[test]
    fn output_mirrors_input(ranks in ranks_strategy()) {
        let es = entities(&ranks);
        let out = TierEngine::default().assign_tiers(&es).unwrap();

        prop_assert_eq!(out.len(), es.len());
        for (a, e) in out.iter().zip(&es) {
            prop_assert!(std::ptr::eq(a.entity, e));
        }
    }

    #[test]
    fn tiers_monotone_in_rank_order(
        ranks in ranks_strategy(),
        max_tiers in 1usize..10,
        selection in selection_strategy(),
    ) {
        let config = TierConfig::default()
            .with_max_tiers(max_tiers)
            .with_break_selection(selection);
        let engine = TierEngine::new(config).unwrap();
        let es = entities(&ranks);
        let out = engine.assign_tiers(&es).unwrap();

        let mut by_rank: Vec<(f64, usize)> = out.iter().map(|a| (a.entity.rank, a.tier)).collect();
        by_rank.sort_by(|a, b| a.0.total_cmp(&b.0).then(a.1.cmp(&b.1)));

        if let Some(first) = by_rank.first() {
            prop_assert_eq!(first.1, 1);
        }
        for w in by_rank.windows(2) {
            let step = w[1].1 - w[0].1;
            prop_assert!(step <= 1, "tier jumped from {} to {}", w[0].1, w[1].1);
            if w[0].0 == w[1].0 {
                prop_assert_eq!(step, 0, "tied ranks split across tiers");
            }
        }

        let max = out.iter().map(|a| a.tier).max().unwrap_or(0);
        prop_assert!(max <= max_tiers);
    }

    #[test]
    fn default_cap_is_six(ranks in ranks_strategy()) {
        let es = entities(&ranks);
        let out = TierEngine::default().assign_tiers(&es).unwrap();
        prop_assert!(out.iter().all(|a| (1..=6).contains(&a.tier)));
    }

    #[test]
    fn repeated_calls_identical(ranks in ranks_strategy()) {
        let es = entities(&ranks);
        let engine = TierEngine::default();
        prop_assert_eq!(engine.tier_numbers(&es).unwrap(), engine.tier_numbers(&es).unwrap());
    }

    #[test]
    fn aggregates_cover_every_tier(ranks in ranks_strategy()) {
        let es = entities(&ranks);
        let assignments = TierEngine::default().assign_tiers(&es).unwrap();
        let aggregates = build_tier_aggregates(&es).unwrap();

        let tiers: BTreeSet<usize> = assignments.iter().map(|a| a.tier).collect();
        let numbers: Vec<usize> = aggregates.iter().map(|a| a.tier_number).collect();
        prop_assert_eq!(numbers, tiers.iter().copied().collect::<Vec<_>>());

        for agg in &aggregates {
            let expected: BTreeSet<&str> = assignments
                .iter()
                .filter(|a| a.tier == agg.tier_number)
                .map(|a| a.entity.id.as_str())
                .collect();
            let actual: BTreeSet<&str> = agg.members.iter().map(|m| m.id.as_str()).collect();
            prop_assert_eq!(actual, expected);
            prop_assert_eq!(agg.members.len(), agg.len());

            for w in agg.members.windows(2) {
                prop_assert!(w[0].rank <= w[1].rank);
            }
            prop_assert!(agg.min_rank <= agg.avg_rank + 1e-9);
            prop_assert!(agg.avg_rank <= agg.max_rank + 1e-9);
        }
    }

    #[test]
    fn uniform_gaps_single_tier(start in 0.0f64..100.0, step in 0.0f64..50.0, n in 1usize..40) {
        let ranks: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
        let tiers = TierEngine::default().tier_numbers(&entities(&ranks)).unwrap();
        prop_assert!(tiers.iter().all(|&t| t == 1));
    }
}

#[test]
fn singleton_and_empty() {
    let one = entities(&[7.0]);
    let out = TierEngine::default().assign_tiers(&one).unwrap();
    assert_eq!(out.len(), 1);
    assert_eq!(out[0].tier, 1);

    let none: Vec<RankedEntity> = Vec::new();
    assert!(TierEngine::default().assign_tiers(&none).unwrap().is_empty());
}
