//! Price card bucket scoring, ranks, and option overrides.

use prank_cards::{ExampleObject, PriceScoreCard, PRICE_CARD_NAME};
use prank_core::models::ScoreValue;
use prank_core::options::keys;
use prank_core::{ConfigError, Decimal, RequestOptions, Scorable, ScoreCard, ScoringError};

fn d(v: i64) -> Decimal {
    Decimal::from(v)
}

fn card() -> PriceScoreCard {
    PriceScoreCard::new(d(0), d(100), vec![d(80), d(20), d(50), d(40)]).unwrap()
}

fn priced(price: i64) -> ExampleObject {
    ExampleObject::new(None, None).with_price(d(price))
}

#[test]
fn cheapest_price_earns_max_points() {
    let result = card().score(&priced(0)).unwrap();
    assert_eq!(result.card_name(), PRICE_CARD_NAME);
    assert_eq!(result.score(), ScoreValue::from(10));
    assert_eq!(result.position().original(), 0);
    assert_eq!(result.score_data().max_points(), Some(ScoreValue::from(10)));
    assert_eq!(result.score_data().min_points(), Some(ScoreValue::ZERO));
}

#[test]
fn highest_price_earns_min_points() {
    let result = card().score(&priced(100)).unwrap();
    assert_eq!(result.score(), ScoreValue::ZERO);
    assert_eq!(result.position().original(), 9);
}

#[test]
fn prices_outside_range_are_clamped() {
    let c = card();
    assert_eq!(
        c.score(&priced(500)).unwrap().score(),
        c.score(&priced(100)).unwrap().score()
    );
}

#[test]
fn adjusted_position_ranks_against_references() {
    let result = card().score(&priced(45)).unwrap();
    // 20 and 40 are cheaper.
    assert_eq!(result.position().adjusted(), &[2]);
    assert_eq!(result.position().dimensions(), 2);
}

#[test]
fn statistics_describe_reference_prices() {
    let c = card();
    assert_eq!(c.reference_prices(), &[d(20), d(40), d(50), d(80)]);
    let result = c.score(&priced(10)).unwrap();
    let stats = result.statistics();
    assert_eq!(stats.average(), d(4750) / d(100));
    assert_eq!(stats.min(), Some(d(20)));
    assert_eq!(stats.max(), Some(d(80)));
    assert_eq!(stats.sample_count(), Some(4));
}

#[test]
fn options_override_points_and_buckets() {
    let options = RequestOptions::builder()
        .min_points(ScoreValue::from(1))
        .max_points(ScoreValue::from(3))
        .bucket_count(3)
        .build()
        .unwrap();
    let c = card();
    assert_eq!(c.score_with(&priced(0), &options).unwrap().score(), ScoreValue::from(3));
    assert_eq!(c.score_with(&priced(50), &options).unwrap().score(), ScoreValue::from(2));
    assert_eq!(c.score_with(&priced(99), &options).unwrap().score(), ScoreValue::from(1));
}

#[test]
fn missing_price_is_invalid_input() {
    let object = ExampleObject::new(Some(1), Some(d(1)));
    let err = card().update_objects_with_score(&object).unwrap_err();
    assert!(matches!(err, ScoringError::InvalidInput { ref field, .. } if field == "price"));
    assert!(object.score_summary().is_empty());
}

#[test]
fn inverted_range_rejected_at_construction() {
    let err = PriceScoreCard::new(d(10), d(1), Vec::new()).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { .. }));
}

#[test]
fn empty_references_still_score() {
    let c = PriceScoreCard::new(d(0), d(10), Vec::new()).unwrap();
    let result = c.score(&priced(5)).unwrap();
    assert_eq!(result.position().adjusted(), &[0]);
    assert_eq!(result.statistics().sample_count(), Some(0));
}

#[test]
fn min_points_above_default_max_fail_validation() {
    let options = RequestOptions::from_pairs([(keys::MIN_POINTS, "20")]).unwrap();
    let c = card();
    assert!(c.validate_options(&options).is_err());
    let err = c.score_with(&priced(1), &options).unwrap_err();
    assert!(matches!(err, ScoringError::InvalidValue { .. }));
}

#[test]
fn reference_prices_past_decimal_range_rejected_at_construction() {
    let err = PriceScoreCard::new(d(0), d(10), vec![Decimal::MAX, Decimal::MAX]).unwrap_err();
    assert!(matches!(err, ConfigError::InvalidValue { ref field, .. } if field == "reference_prices"));
}

#[test]
fn extreme_prices_score_without_overflow() {
    let c = PriceScoreCard::new(d(0), Decimal::MAX, vec![d(1)]).unwrap();
    let result = c.score(&ExampleObject::default().with_price(Decimal::MAX)).unwrap();
    assert_eq!(result.score(), ScoreValue::ZERO);
    assert_eq!(result.position().adjusted(), &[1]);
}
