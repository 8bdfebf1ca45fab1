//! Exponential backoff for the startup connection loop.

use std::fmt::Display;
use std::future::Future;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Exponential backoff settings.
///
/// Each retry waits `interval ± randomization_factor * interval`, then the
/// interval grows by `multiplier` up to `max_interval`. Retrying stops once the
/// next wait would pass `max_elapsed_time`; `None` retries forever.
#[derive(Debug, Clone, PartialEq)]
pub struct BackoffPolicy {
    pub initial_interval: Duration,
    pub multiplier: f64,
    pub randomization_factor: f64,
    pub max_interval: Duration,
    pub max_elapsed_time: Option<Duration>,
}

impl Default for BackoffPolicy {
    fn default() -> Self {
        Self {
            initial_interval: Duration::from_millis(500),
            multiplier: 1.5,
            randomization_factor: 0.5,
            max_interval: Duration::from_secs(60),
            max_elapsed_time: Some(Duration::from_secs(15 * 60)),
        }
    }
}

impl BackoffPolicy {
    /// Replace the give-up deadline
    pub fn with_max_elapsed_time(mut self, max_elapsed_time: Option<Duration>) -> Self {
        self.max_elapsed_time = max_elapsed_time;
        self
    }

    /// Interval that follows `current`
    pub fn next_interval(&self, current: Duration) -> Duration {
        current.mul_f64(self.multiplier).min(self.max_interval)
    }

    /// Jittered wait for `interval`; `rand01` is uniform in `[0, 1)`
    pub fn randomized(&self, interval: Duration, rand01: f64) -> Duration {
        let secs = interval.as_secs_f64();
        let delta = secs * self.randomization_factor;
        let low = secs - delta;
        Duration::from_secs_f64((low + rand01 * 2.0 * delta).max(0.0))
    }
}

/// Run `op` until it succeeds or `policy` gives up, returning the last error.
pub async fn retry_with_backoff<T, E, F, Fut>(policy: &BackoffPolicy, what: &str, mut op: F) -> Result<T, E>
where
    F: FnMut() -> Fut,
    Fut: Future<Output = Result<T, E>>,
    E: Display,
{
    let started = Instant::now();
    let mut interval = policy.initial_interval;
    let mut attempt: u32 = 1;

    loop {
        match op().await {
            Ok(value) => {
                if attempt > 1 {
                    info!("{} succeeded after {} attempts", what, attempt);
                }
                return Ok(value);
            }
            Err(err) => {
                let delay = policy.randomized(interval, rand::random::<f64>());

                if let Some(max_elapsed) = policy.max_elapsed_time {
                    if started.elapsed() + delay > max_elapsed {
                        error!("{} failed after {} attempts, giving up: {}", what, attempt, err);
                        return Err(err);
                    }
                }

                warn!(
                    attempt,
                    delay_ms = delay.as_millis() as u64,
                    "{} failed, retrying: {}",
                    what,
                    err
                );
                tokio::time::sleep(delay).await;

                interval = policy.next_interval(interval);
                attempt += 1;
            }
        }
    }
}
