// SPDX-FileCopyrightText: 2026 Folio Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Injectable simulated-typing delay.
//!
//! The bot reply is appended only after a presentation delay that makes the
//! concierge look like it is typing. The delay is a seam so the session
//! stays testable without timing concerns: tests use [`NoDelay`], the shell
//! uses [`JitterDelay`].

use std::time::Duration;

use async_trait::async_trait;
use rand::Rng;

/// Waits out the simulated-typing pause before a bot reply is appended.
#[async_trait]
pub trait TypingDelay: Send + Sync {
    /// Completes when the bot reply may be shown.
    async fn wait(&self);
}

/// Base delay plus a uniformly random extra, the shipped pacing
/// (1000ms + up to 1000ms by default).
#[derive(Debug, Clone)]
pub struct JitterDelay {
    base: Duration,
    jitter: Duration,
}

impl JitterDelay {
    pub fn new(base: Duration, jitter: Duration) -> Self {
        Self { base, jitter }
    }

    /// Builds the delay from millisecond config values.
    pub fn from_millis(base_ms: u64, jitter_ms: u64) -> Self {
        Self::new(Duration::from_millis(base_ms), Duration::from_millis(jitter_ms))
    }
}

impl Default for JitterDelay {
    fn default() -> Self {
        Self::from_millis(1000, 1000)
    }
}

#[async_trait]
impl TypingDelay for JitterDelay {
    async fn wait(&self) {
        // Draw the jitter before awaiting; thread-local RNGs must not be
        // held across an await point.
        let extra_ms = {
            let mut rng = rand::thread_rng();
            rng.gen_range(0..=self.jitter.as_millis() as u64)
        };
        tokio::time::sleep(self.base + Duration::from_millis(extra_ms)).await;
    }
}

/// A fixed delay with no jitter.
#[derive(Debug, Clone)]
pub struct FixedDelay(pub Duration);

#[async_trait]
impl TypingDelay for FixedDelay {
    async fn wait(&self) {
        tokio::time::sleep(self.0).await;
    }
}

/// No delay at all, for tests and one-shot queries.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoDelay;

#[async_trait]
impl TypingDelay for NoDelay {
    async fn wait(&self) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn fixed_delay_waits_its_duration() {
        let start = tokio::time::Instant::now();
        FixedDelay(Duration::from_millis(1500)).wait().await;
        assert_eq!(start.elapsed(), Duration::from_millis(1500));
    }

    #[tokio::test(start_paused = true)]
    async fn jitter_delay_waits_at_least_the_base() {
        let start = tokio::time::Instant::now();
        JitterDelay::from_millis(1000, 1000).wait().await;
        let elapsed = start.elapsed();
        assert!(elapsed >= Duration::from_millis(1000));
        assert!(elapsed <= Duration::from_millis(2000));
    }

    #[tokio::test(start_paused = true)]
    async fn zero_jitter_is_exactly_the_base() {
        let start = tokio::time::Instant::now();
        JitterDelay::from_millis(250, 0).wait().await;
        assert_eq!(start.elapsed(), Duration::from_millis(250));
    }

    #[tokio::test]
    async fn no_delay_completes_immediately() {
        // No paused clock needed; this must not sleep at all.
        NoDelay.wait().await;
    }
}
