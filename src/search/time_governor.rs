//! Wall-clock cutoff and cancellation token for one search invocation.
//!
//! The governor is passed by `&mut` down the minimax recursion. It trips when
//! the time budget is spent or an external stop signal is raised, and once
//! tripped it stays tripped until the search that owns it returns.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct TimeGovernor {
    started_at: Instant,
    limit: Duration,
    stop_signal: Option<Arc<AtomicBool>>,
    tripped: bool,
}

impl TimeGovernor {
    pub fn new(limit: Duration) -> Self {
        Self {
            started_at: Instant::now(),
            limit,
            stop_signal: None,
            tripped: false,
        }
    }

    pub fn with_stop_signal(mut self, stop_signal: Option<Arc<AtomicBool>>) -> Self {
        self.stop_signal = stop_signal;
        self
    }

    /// Poll the clock and the stop signal; returns whether the search must stop.
    pub fn check(&mut self) -> bool {
        if self.tripped {
            return true;
        }

        let stop_requested = self
            .stop_signal
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed));

        if stop_requested || self.started_at.elapsed() >= self.limit {
            self.tripped = true;
        }

        self.tripped
    }

    /// Whether a previous `check` tripped. Does not poll the clock.
    #[inline]
    pub fn is_tripped(&self) -> bool {
        self.tripped
    }

    #[inline]
    pub fn elapsed(&self) -> Duration {
        self.started_at.elapsed()
    }
}
