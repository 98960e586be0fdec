use std::collections::BTreeMap;
use std::thread;

use prank_core::models::{ScoreResult, ScoreType, ScoreValue};
use prank_core::{Decimal, ScoreSummary};
use proptest::prelude::*;

fn result(name: &str, mantissa: i64, scale: u32) -> ScoreResult {
    ScoreResult::builder(name, ScoreValue::new(Decimal::new(mantissa, scale)))
        .build()
        .unwrap()
}

// ── N distinct names, any interleaving, exactly N entries ─────────────────

proptest! {
    #[test]
    fn concurrent_distinct_names_yield_exactly_n_entries(
        scores in prop::collection::vec((-10_000i64..10_000, 0u32..4), 1..24),
    ) {
        let summary = ScoreSummary::new();
        thread::scope(|s| {
            for (i, (mantissa, scale)) in scores.iter().enumerate() {
                let summary = &summary;
                s.spawn(move || {
                    let name = format!("card-{i}");
                    summary.add_result(&name, result(&name, *mantissa, *scale));
                });
            }
        });

        prop_assert_eq!(summary.len(), scores.len());
        for (i, (mantissa, scale)) in scores.iter().enumerate() {
            let stored = summary.get_result(&format!("card-{i}")).unwrap();
            prop_assert_eq!(stored.score().value(), Decimal::new(*mantissa, *scale));
        }
    }
}

// ── Last writer wins, nothing duplicated ──────────────────────────────────

proptest! {
    #[test]
    fn sequential_rewrites_keep_only_the_last(
        writes in prop::collection::vec((0usize..4, -500i64..500), 1..40),
    ) {
        let summary = ScoreSummary::new();
        let mut expected: BTreeMap<String, i64> = BTreeMap::new();
        for (slot, score) in &writes {
            let name = format!("card-{slot}");
            summary.add_result(&name, result(&name, *score, 0));
            expected.insert(name, *score);
        }

        let snapshot = summary.all_results();
        prop_assert_eq!(snapshot.len(), expected.len());
        for (name, score) in expected {
            prop_assert_eq!(snapshot[&name].score(), ScoreValue::from(score));
        }
    }
}

// ── Tally equals exact decimal sum ────────────────────────────────────────

proptest! {
    #[test]
    fn tally_is_exact_decimal_sum(
        cents in prop::collection::vec(-1_000_000i64..1_000_000, 0..30),
    ) {
        let summary = ScoreSummary::new();
        let mut names = Vec::new();
        let mut expected = Decimal::ZERO;
        for (i, c) in cents.iter().enumerate() {
            let name = format!("card-{i}");
            summary.add_result(&name, result(&name, *c, 2));
            expected += Decimal::new(*c, 2);
            names.push(name);
        }
        prop_assert_eq!(summary.tally_score(names.as_slice(), ScoreType::Original).value(), expected);
    }
}
