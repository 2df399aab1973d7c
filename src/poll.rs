use crate::wait::{Wait, WaitError};
use std::time::{Duration, Instant};

/// Polling period used when none (or zero) is given.
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);

/// How a finished [PollConfig::run] got there.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Polled {
    /// Number of times the check was evaluated, including the satisfied one.
    pub attempts: u64,
    pub elapsed: Duration,
}

/// Drives one [Wait] to completion at a fixed interval.
#[derive(Clone, Debug)]
pub struct PollConfig {
    interval: Duration,
    wait: Wait,
}

impl PollConfig {
    pub fn new(wait: Wait, interval: Duration) -> Self {
        let interval = if interval.is_zero() {
            tracing::warn!(default = ?DEFAULT_INTERVAL, "zero poll interval, using default");
            DEFAULT_INTERVAL
        } else {
            interval
        };

        Self { interval, wait }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn wait(&self) -> &Wait {
        &self.wait
    }

    /// Evaluates the check a single time.
    pub fn poll_once(&self) -> Result<bool, WaitError> {
        let satisfied = self.wait.satisfied()?;
        tracing::debug!(path = %self.wait.path().display(), check = %self.wait, satisfied, "polled");
        Ok(satisfied)
    }

    /// Wait for the completion of this condition. This will block the thread.
    ///
    /// There is no deadline: a check that is never met and never fails keeps
    /// this running forever. The first error ends the loop and is returned;
    /// it is never retried.
    pub fn run(&self) -> Result<Polled, WaitError> {
        let start = Instant::now();
        let mut attempts = 0;

        loop {
            attempts += 1;
            if self.poll_once()? {
                let polled = Polled {
                    attempts,
                    elapsed: start.elapsed(),
                };
                tracing::info!(check = %self.wait, attempts, elapsed = ?polled.elapsed, "satisfied");
                return Ok(polled);
            }

            std::thread::sleep(self.interval);
        }
    }
}
