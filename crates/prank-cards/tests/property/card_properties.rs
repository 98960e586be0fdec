use prank_cards::{ExampleObject, ExampleScoreCard, PriceScoreCard};
use prank_core::models::ScoreValue;
use prank_core::{Decimal, Scorable, ScoreCard};
use proptest::prelude::*;

// ── Shipping card: score tracks shipping time, average tracks cost ────────

proptest! {
    #[test]
    fn shipping_score_is_time_plus_adjustment(
        time in 0i64..1_000_000,
        cost_cents in 0i64..10_000_000,
    ) {
        let card = ExampleScoreCard::new();
        let object = ExampleObject::new(Some(time), Some(Decimal::new(cost_cents, 2)));
        let result = card.score(&object).unwrap();

        prop_assert_eq!(result.score(), ScoreValue::from(time + 5));
        prop_assert_eq!(result.position().original(), 3);
        prop_assert_eq!(
            result.statistics().average(),
            Decimal::new(cost_cents, 2) + Decimal::from(2)
        );
    }
}

// ── Read-only and mutating paths agree ────────────────────────────────────

proptest! {
    #[test]
    fn update_matches_score(time in 0i64..10_000, cost in 0i64..10_000) {
        let card = ExampleScoreCard::new();
        let object = ExampleObject::new(Some(time), Some(Decimal::from(cost)));
        let expected = card.score(&object).unwrap();
        card.update_objects_with_score(&object).unwrap();
        let stored = object.score_summary().get_result("SolutionPriceScoreCard").unwrap();
        prop_assert_eq!(&*stored, &expected);
    }
}

// ── Price card: points bounded and monotone non-increasing in price ───────

proptest! {
    #[test]
    fn price_points_bounded_and_monotone(a in 0i64..2_000, b in 0i64..2_000) {
        let card = PriceScoreCard::new(Decimal::ZERO, Decimal::from(1_000), Vec::new()).unwrap();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let cheap = card
            .score(&ExampleObject::default().with_price(Decimal::from(lo)))
            .unwrap()
            .score();
        let dear = card
            .score(&ExampleObject::default().with_price(Decimal::from(hi)))
            .unwrap()
            .score();

        prop_assert!(cheap >= dear);
        for points in [cheap, dear] {
            prop_assert!(points >= ScoreValue::ZERO);
            prop_assert!(points <= ScoreValue::from(10));
        }
    }
}
