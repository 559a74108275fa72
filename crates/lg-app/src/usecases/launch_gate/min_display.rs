use std::time::Duration;

use tokio::time::{sleep, Instant};
use tokio_util::sync::CancellationToken;

/// How the anti-flicker hold ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HoldOutcome {
    /// Slept the remaining time.
    Elapsed,
    /// Minimum already met; nothing to wait for.
    Skipped,
    /// Cancellation fired; the remaining wait was abandoned.
    Cancelled,
}

/// Minimum on-screen duration for the splash state.
///
/// Advisory only: the hold is cancellable and never affects routing.
#[derive(Debug, Clone, Copy)]
pub struct MinimumDisplay {
    started: Instant,
    min: Duration,
}

impl MinimumDisplay {
    pub fn start(min: Duration) -> Self {
        Self {
            started: Instant::now(),
            min,
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    pub fn remaining(&self) -> Duration {
        self.min.saturating_sub(self.elapsed())
    }

    pub async fn hold(&self, cancel: &CancellationToken) -> HoldOutcome {
        let remaining = self.remaining();
        if remaining.is_zero() {
            return HoldOutcome::Skipped;
        }
        tokio::select! {
            _ = sleep(remaining) => HoldOutcome::Elapsed,
            _ = cancel.cancelled() => HoldOutcome::Cancelled,
        }
    }
}
