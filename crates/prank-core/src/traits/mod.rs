pub mod cancellation;
pub mod scorable;
pub mod score_card;

pub use cancellation::{Cancellable, CancellationToken};
pub use scorable::Scorable;
pub use score_card::ScoreCard;
