use prank_core::{Decimal, LazyScoreSummary, Scorable, ScoreSummary};

/// A purchasable item as seen by the reference cards.
///
/// Attributes are optional because upstream data is often incomplete; the
/// cards reject a missing attribute instead of treating it as zero.
#[derive(Debug, Default)]
pub struct ExampleObject {
    pub average_shipping_time: Option<i64>,
    pub shipping_cost: Option<Decimal>,
    pub price: Option<Decimal>,
    summary: LazyScoreSummary,
}

impl ExampleObject {
    pub fn new(average_shipping_time: Option<i64>, shipping_cost: Option<Decimal>) -> Self {
        Self {
            average_shipping_time,
            shipping_cost,
            price: None,
            summary: LazyScoreSummary::new(),
        }
    }

    pub fn with_price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Whether any card has recorded a result yet.
    pub fn has_been_scored(&self) -> bool {
        self.summary.peek().is_some_and(|s| !s.is_empty())
    }
}

impl Scorable for ExampleObject {
    fn score_summary(&self) -> &ScoreSummary {
        self.summary.get()
    }
}
