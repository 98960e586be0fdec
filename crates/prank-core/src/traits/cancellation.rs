//! Cooperative cancellation of a scoring run.
//!
//! The orchestrator consults the token before each (candidate, card) unit.
//! Units already inside `score_with` run to completion; the ones not yet
//! started are skipped and reported as cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::errors::{PrankError, PrankResult};

pub trait Cancellable {
    fn is_cancelled(&self) -> bool;

    /// Ask the run to stop starting new units.
    fn cancel(&self);

    /// `Err(PrankError::Cancelled)` once a stop was requested.
    fn checkpoint(&self) -> PrankResult<()> {
        if self.is_cancelled() {
            Err(PrankError::Cancelled)
        } else {
            Ok(())
        }
    }
}

/// Stop flag shared between the caller of a run and its workers.
/// Clones observe the same flag.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken {
    stop_requested: Arc<AtomicBool>,
}

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    /// A token that is stopped from the outset; a run given it starts no
    /// units.
    pub fn cancelled() -> Self {
        Self {
            stop_requested: Arc::new(AtomicBool::new(true)),
        }
    }
}

impl Cancellable for CancellationToken {
    fn is_cancelled(&self) -> bool {
        self.stop_requested.load(Ordering::Acquire)
    }

    fn cancel(&self) {
        self.stop_requested.store(true, Ordering::Release);
    }
}
