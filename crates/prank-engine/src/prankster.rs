//! Prankster: runs every score card against every candidate in parallel.
//!
//! A run is three phases:
//! 1. Resolve and validate each card's options; any error aborts the run
//!    before a single unit executes.
//! 2. Fan the enabled (candidate, card) units out over the pool. Each unit
//!    checks the cancellation token, scores, enforces its time budget, and
//!    records its result in the candidate's summary.
//! 3. Barrier: `setup_scoring` returns only after every unit finished.
//!
//! A card that panics fails only its own unit, as
//! [`ScoringError::Panicked`].

use std::any::Any;
use std::collections::HashSet;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rayon::prelude::*;

use prank_core::config::{defaults, EngineConfig};
use prank_core::options::keys;
use prank_core::telemetry::events;
use prank_core::{
    Cancellable, CancellationToken, ConfigError, PrankError, PrankResult, RequestOptions,
    Scorable, ScoreCard, ScoringError,
};

use crate::card_options::CardOptions;
use crate::report::{ScoringReport, UnitFailure};

/// Parallel scoring orchestrator over a fixed set of cards.
pub struct Prankster<T: Scorable> {
    cards: Vec<Arc<dyn ScoreCard<T>>>,
    pool: rayon::ThreadPool,
    default_timeout: Option<Duration>,
}

/// Card-level settings resolved once per run.
struct ResolvedCard {
    options: RequestOptions,
    enabled: bool,
    timeout: Option<Duration>,
}

enum UnitOutcome {
    Completed,
    Cancelled,
    Failed(UnitFailure),
}

impl<T: Scorable> Prankster<T> {
    pub fn new(cards: Vec<Arc<dyn ScoreCard<T>>>, config: &EngineConfig) -> PrankResult<Self> {
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(config.effective_threads())
            .thread_name(|i| format!("{}-{i}", defaults::WORKER_THREAD_PREFIX))
            .build()
            .map_err(|e| ConfigError::InvalidValue {
                field: "engine.threads".to_string(),
                message: format!("failed to build scoring pool: {e}"),
            })?;

        let mut seen = HashSet::new();
        for card in &cards {
            if !seen.insert(card.name()) {
                events::duplicate_card(card.name());
            }
        }

        tracing::debug!(
            cards = cards.len(),
            threads = pool.current_num_threads(),
            "prankster ready"
        );

        Ok(Self {
            cards,
            pool,
            default_timeout: config.default_timeout(),
        })
    }

    pub fn cards(&self) -> &[Arc<dyn ScoreCard<T>>] {
        &self.cards
    }

    pub fn card_names(&self) -> Vec<&str> {
        self.cards.iter().map(|c| c.name()).collect()
    }

    /// Score every candidate with every card and wait for all units.
    ///
    /// Per-unit failures land in the report; only malformed options fail
    /// the call. Cancellation is reported through
    /// [`ScoringReport::cancelled`], see [`ScoringReport::into_result`].
    pub fn setup_scoring(
        &self,
        candidates: &[T],
        options: &CardOptions,
        cancel: &CancellationToken,
    ) -> PrankResult<ScoringReport> {
        let start = Instant::now();
        let resolved = self.resolve(options)?;

        let scheduled = candidates.len() * self.cards.len();
        let units: Vec<(usize, usize)> = (0..candidates.len())
            .flat_map(|candidate| (0..self.cards.len()).map(move |card| (candidate, card)))
            .filter(|&(_, card)| resolved[card].enabled)
            .collect();
        let disabled = scheduled - units.len();

        tracing::debug!(
            candidates = candidates.len(),
            cards = self.cards.len(),
            units = units.len(),
            disabled,
            "scoring run started"
        );

        let outcomes: Vec<UnitOutcome> = self.pool.install(|| {
            units
                .par_iter()
                .map(|&(candidate, card)| {
                    self.run_unit(candidate, &candidates[candidate], card, &resolved[card], cancel)
                })
                .collect()
        });

        let mut report = ScoringReport {
            scheduled,
            disabled,
            ..ScoringReport::default()
        };
        for outcome in outcomes {
            match outcome {
                UnitOutcome::Completed => report.completed += 1,
                UnitOutcome::Cancelled => report.cancelled += 1,
                UnitOutcome::Failed(failure) => report.failures.push(failure),
            }
        }
        report.duration = start.elapsed();

        if report.was_cancelled() {
            events::run_cancelled(report.cancelled, scheduled);
        }
        events::run_completed(
            candidates.len(),
            self.cards.len(),
            report.completed,
            report.failures.len(),
            report.duration,
        );
        Ok(report)
    }

    /// Score one candidate with every card. Not cancellable.
    pub fn score_candidate(&self, candidate: &T, options: &CardOptions) -> PrankResult<ScoringReport> {
        self.setup_scoring(std::slice::from_ref(candidate), options, &CancellationToken::new())
    }

    fn resolve(&self, options: &CardOptions) -> PrankResult<Vec<ResolvedCard>> {
        self.cards
            .iter()
            .map(|card| {
                let resolved = options.for_card(card.name());
                check_points(&resolved)
                    .and_then(|()| card.validate_options(&resolved))
                    .map_err(|e| PrankError::Config(scoped(card.name(), e)))?;
                Ok(ResolvedCard {
                    enabled: resolved.enabled(),
                    timeout: resolved.timeout().or(self.default_timeout),
                    options: resolved,
                })
            })
            .collect()
    }

    fn run_unit(
        &self,
        candidate_index: usize,
        candidate: &T,
        card_index: usize,
        resolved: &ResolvedCard,
        cancel: &CancellationToken,
    ) -> UnitOutcome {
        if cancel.checkpoint().is_err() {
            return UnitOutcome::Cancelled;
        }

        let card = &self.cards[card_index];
        let started = Instant::now();
        let scored = panic::catch_unwind(AssertUnwindSafe(|| {
            card.score_with(candidate, &resolved.options)
        }))
        .unwrap_or_else(|payload| {
            Err(ScoringError::Panicked {
                card: card.name().to_string(),
                message: panic_message(payload.as_ref()),
            })
        });
        let elapsed = started.elapsed();

        let result = match (scored, resolved.timeout) {
            (Ok(_), Some(limit)) if elapsed > limit => {
                events::unit_timed_out(candidate_index, card.name(), elapsed, limit);
                return UnitOutcome::Failed(UnitFailure {
                    candidate_index,
                    card_name: card.name().to_string(),
                    error: ScoringError::Timeout {
                        card: card.name().to_string(),
                        elapsed_ms: elapsed.as_millis() as u64,
                        limit_ms: limit.as_millis() as u64,
                    },
                });
            }
            (Ok(result), _) => result,
            (Err(error), _) => {
                events::unit_failed(candidate_index, card.name(), &error);
                return UnitOutcome::Failed(UnitFailure {
                    candidate_index,
                    card_name: card.name().to_string(),
                    error,
                });
            }
        };

        candidate.score_summary().add_result(card.name(), result);
        UnitOutcome::Completed
    }
}

/// Shared and card options each pass the builder's checks, but the overlay
/// of the two may still pair an inverted min/max.
fn check_points(options: &RequestOptions) -> Result<(), ConfigError> {
    let min = options.get_decimal(keys::MIN_POINTS)?;
    let max = options.get_decimal(keys::MAX_POINTS)?;
    match (min, max) {
        (Some(min), Some(max)) if min > max => Err(ConfigError::InvalidValue {
            field: keys::MIN_POINTS.to_string(),
            message: format!("min_points {min} exceeds max_points {max}"),
        }),
        _ => Ok(()),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "non-string panic payload".to_string()
    }
}

fn scoped(card_name: &str, err: ConfigError) -> ConfigError {
    match err {
        ConfigError::InvalidValue { field, message } => ConfigError::InvalidValue {
            field: format!("cards.{card_name}.{field}"),
            message,
        },
        ConfigError::ValidationFailed { field, message } => ConfigError::ValidationFailed {
            field: format!("cards.{card_name}.{field}"),
            message,
        },
        other => other,
    }
}
