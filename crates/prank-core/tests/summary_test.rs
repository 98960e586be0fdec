use std::sync::Arc;
use std::thread;

use prank_core::models::{ScoreResult, ScoreType, ScoreValue};
use prank_core::{Decimal, LazyScoreSummary, ScoreSummary};

fn result(name: &str, score: i64) -> ScoreResult {
    ScoreResult::builder(name, ScoreValue::from(score))
        .position(score as u32)
        .build()
        .unwrap()
}

#[test]
fn add_and_get_result() {
    let summary = ScoreSummary::new();
    assert!(summary.is_empty());

    assert!(summary.add_result("price", result("price", 10)).is_none());
    let stored = summary.get_result("price").unwrap();
    assert_eq!(stored.score(), ScoreValue::from(10));
    assert!(summary.get_result("shipping").is_none());
}

#[test]
fn re_adding_a_name_overwrites_and_returns_previous() {
    let summary = ScoreSummary::new();
    summary.add_result("price", result("price", 1));
    let previous = summary.add_result("price", result("price", 2)).unwrap();

    assert_eq!(previous.score(), ScoreValue::from(1));
    assert_eq!(summary.len(), 1);
    assert_eq!(summary.get_result("price").unwrap().score(), ScoreValue::from(2));
}

#[test]
fn concurrent_writers_with_distinct_names_lose_nothing() {
    let summary = ScoreSummary::new();
    let names: Vec<String> = (0..64).map(|i| format!("card-{i:02}")).collect();

    thread::scope(|s| {
        for (i, name) in names.iter().enumerate() {
            let summary = &summary;
            s.spawn(move || {
                summary.add_result(name, result(name, i as i64));
            });
        }
    });

    assert_eq!(summary.len(), names.len());
    for (i, name) in names.iter().enumerate() {
        assert_eq!(summary.get_result(name).unwrap().score(), ScoreValue::from(i as i64));
    }
}

#[test]
fn snapshot_is_isolated_from_later_writes() {
    let summary = ScoreSummary::new();
    summary.add_result("a", result("a", 1));
    let snapshot = summary.all_results();

    summary.add_result("b", result("b", 2));
    summary.add_result("a", result("a", 99));

    assert_eq!(snapshot.len(), 1);
    assert_eq!(snapshot["a"].score(), ScoreValue::from(1));
    assert_eq!(summary.all_results().len(), 2);
}

#[test]
fn snapshot_and_names_are_sorted() {
    let summary = ScoreSummary::new();
    for name in ["zeta", "alpha", "mid"] {
        summary.add_result(name, result(name, 1));
    }
    let keys: Vec<String> = summary.all_results().into_keys().collect();
    assert_eq!(keys, vec!["alpha", "mid", "zeta"]);
    assert_eq!(summary.card_names(), keys);
}

#[test]
fn tally_skips_missing_cards() {
    let summary = ScoreSummary::new();
    summary.add_result(
        "price",
        ScoreResult::builder("price", ScoreValue::parse("2.50").unwrap()).build().unwrap(),
    );
    summary.add_result(
        "shipping",
        ScoreResult::builder("shipping", ScoreValue::parse("1.00").unwrap()).build().unwrap(),
    );

    let total = summary.tally_score(&["price", "shipping", "absent"], ScoreType::Original);
    assert_eq!(total.to_string(), "3.50");
    assert_eq!(summary.tally_all(ScoreType::Adjusted), total);
}

#[test]
fn tally_of_extreme_scores_saturates() {
    let summary = ScoreSummary::new();
    for name in ["a", "b"] {
        summary.add_result(
            name,
            ScoreResult::builder(name, ScoreValue::new(Decimal::MAX)).build().unwrap(),
        );
    }
    assert_eq!(
        summary.tally_all(ScoreType::Original),
        ScoreValue::new(Decimal::MAX)
    );
    assert_eq!(
        summary.tally_score(&["a", "b"], ScoreType::Adjusted),
        ScoreValue::new(Decimal::MAX)
    );
}

#[test]
fn lazy_summary_initializes_once_across_threads() {
    let lazy = Arc::new(LazyScoreSummary::new());
    assert!(!lazy.is_initialized());

    thread::scope(|s| {
        for i in 0..8 {
            let lazy = Arc::clone(&lazy);
            s.spawn(move || {
                let name = format!("card-{i}");
                lazy.get().add_result(&name, result(&name, i));
            });
        }
    });

    assert!(lazy.is_initialized());
    assert_eq!(lazy.peek().map(ScoreSummary::len), Some(8));
}
