//! The single suspension primitive every phase waits on.

use std::future::{self, Future};
use std::time::{Duration, Instant};

/// Source of "now" plus a way to wait.
pub trait Clock {
    /// Milliseconds since the clock was created.
    fn now_ms(&self) -> u64;

    fn sleep(&mut self, ms: u64) -> impl Future<Output = ()>;
}

/// Wall-clock time backed by tokio's timer.
#[derive(Debug, Clone)]
pub struct TokioClock {
    origin: Instant,
}

impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

impl TokioClock {
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Clock for TokioClock {
    fn now_ms(&self) -> u64 {
        self.origin.elapsed().as_millis() as u64
    }

    fn sleep(&mut self, ms: u64) -> impl Future<Output = ()> {
        tokio::time::sleep(Duration::from_millis(ms))
    }
}

/// Virtual time: sleeping advances the clock instantly.
///
/// Every requested delay is recorded so tests can assert on pacing.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    now: u64,
    sleeps: Vec<u64>,
}

impl ManualClock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sleeps(&self) -> &[u64] {
        &self.sleeps
    }

    pub fn total_slept(&self) -> u64 {
        self.sleeps.iter().sum()
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now
    }

    fn sleep(&mut self, ms: u64) -> impl Future<Output = ()> {
        self.now += ms;
        self.sleeps.push(ms);
        future::ready(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_manual_clock_advances_on_sleep() {
        let mut clock = ManualClock::new();
        assert_eq!(clock.now_ms(), 0);

        clock.sleep(30).await;
        clock.sleep(45).await;

        assert_eq!(clock.now_ms(), 75);
        assert_eq!(clock.sleeps(), &[30, 45]);
        assert_eq!(clock.total_slept(), 75);
    }

    #[tokio::test]
    async fn test_tokio_clock_sleep_moves_time_forward() {
        let mut clock = TokioClock::new();
        let before = clock.now_ms();
        clock.sleep(5).await;
        assert!(clock.now_ms() >= before + 5);
    }
}
