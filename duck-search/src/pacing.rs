//! Pacing between successive scrape page requests.
//!
//! A fixed base delay plus a small random jitter, applied before every page
//! request after the first. This is advisory politeness toward the provider,
//! not a token bucket and not adaptive backoff.

use std::time::Duration;

use rand::Rng;
use tokio_util::sync::CancellationToken;

/// Fixed-delay scheduler with uniform jitter.
#[derive(Debug, Clone)]
pub struct RateLimiter {
    delay: Duration,
    jitter_ms: u64,
}

impl RateLimiter {
    /// Create a limiter pausing `delay_ms` plus `0..=jitter_ms` milliseconds.
    pub fn new(delay_ms: u64, jitter_ms: u64) -> Self {
        Self {
            delay: Duration::from_millis(delay_ms),
            jitter_ms,
        }
    }

    /// The next pause: base delay plus fresh random jitter.
    pub fn next_pause(&self) -> Duration {
        let jitter = if self.jitter_ms == 0 {
            0
        } else {
            rand::thread_rng().gen_range(0..=self.jitter_ms)
        };
        self.delay + Duration::from_millis(jitter)
    }

    /// Suspend the caller for one pause.
    pub async fn wait(&self) {
        let pause = self.next_pause();
        tracing::trace!(?pause, "pacing scrape request");
        tokio::time::sleep(pause).await;
    }

    /// Like [`wait`](Self::wait), but returns early if `cancel` fires.
    ///
    /// Returns `true` if the full pause elapsed, `false` if cancelled.
    pub async fn wait_or_cancel(&self, cancel: &CancellationToken) -> bool {
        tokio::select! {
            _ = cancel.cancelled() => false,
            _ = self.wait() => true,
        }
    }
}
