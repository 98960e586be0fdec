use std::sync::Arc;

use prank_cards::{ExampleObject, ExampleScoreCard, PriceScoreCard, EXAMPLE_CARD_NAME, PRICE_CARD_NAME};
use prank_core::config::EngineConfig;
use prank_core::{CancellationToken, Decimal, RequestOptions, Scorable, ScoreCard};
use prank_engine::{CardOptions, Prankster};
use proptest::prelude::*;

fn prankster() -> Prankster<ExampleObject> {
    let cards: Vec<Arc<dyn ScoreCard<ExampleObject>>> = vec![
        Arc::new(ExampleScoreCard::new()),
        Arc::new(PriceScoreCard::new(Decimal::ZERO, Decimal::from(50), Vec::new()).unwrap()),
    ];
    let config = EngineConfig {
        threads: Some(4),
        default_timeout_ms: None,
    };
    Prankster::new(cards, &config).unwrap()
}

fn object((time, cost, price): (Option<i64>, Option<i64>, Option<i64>)) -> ExampleObject {
    let object = ExampleObject::new(time, cost.map(Decimal::from));
    match price {
        Some(p) => object.with_price(Decimal::from(p)),
        None => object,
    }
}

// ── Every scheduled unit is accounted for exactly once ────────────────────

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn report_accounts_for_every_unit(
        inputs in prop::collection::vec(
            (
                prop::option::of(0i64..1_000),
                prop::option::of(0i64..1_000),
                prop::option::of(0i64..100),
            ),
            0..40,
        ),
        price_enabled in any::<bool>(),
    ) {
        let objects: Vec<ExampleObject> = inputs.iter().copied().map(object).collect();
        let options = CardOptions::default().with(
            PRICE_CARD_NAME,
            RequestOptions::builder().enabled(price_enabled).build().unwrap(),
        );

        let report = prankster()
            .setup_scoring(&objects, &options, &CancellationToken::new())
            .unwrap();

        prop_assert_eq!(report.scheduled, objects.len() * 2);
        prop_assert_eq!(
            report.completed + report.failures.len() + report.disabled + report.cancelled,
            report.scheduled
        );
        prop_assert_eq!(report.cancelled, 0);

        let stored: usize = objects.iter().map(|o| o.score_summary().len()).sum();
        prop_assert_eq!(stored, report.completed);

        for (i, ((time, cost, price), object)) in inputs.iter().zip(&objects).enumerate() {
            let summary = object.score_summary();
            prop_assert_eq!(
                summary.contains(EXAMPLE_CARD_NAME),
                time.is_some() && cost.is_some()
            );
            prop_assert_eq!(summary.contains(PRICE_CARD_NAME), price_enabled && price.is_some());
            let failed = report.failures_for(i).count();
            let expected_failures = usize::from(time.is_none() || cost.is_none())
                + usize::from(price_enabled && price.is_none());
            prop_assert_eq!(failed, expected_failures);
        }
    }
}
