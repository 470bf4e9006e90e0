//! Debounce for print triggers (button presses, CLI invocations in a loop).

use std::time::{Duration, Instant};

use tracing::debug;

pub const DEFAULT_MIN_INTERVAL: Duration = Duration::from_millis(1000);

/// Accepts a trigger only if `min_interval` has passed since the last
/// accepted one. Rejected triggers do not restart the interval.
#[derive(Debug, Clone)]
pub struct TriggerGuard {
    min_interval: Duration,
    last_accepted: Option<Instant>,
}

impl Default for TriggerGuard {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_INTERVAL)
    }
}

impl TriggerGuard {
    pub fn new(min_interval: Duration) -> Self {
        Self {
            min_interval,
            last_accepted: None,
        }
    }

    pub fn min_interval(&self) -> Duration {
        self.min_interval
    }

    pub fn try_fire(&mut self) -> bool {
        self.try_fire_at(Instant::now())
    }

    /// Same as [`try_fire`](Self::try_fire) with an explicit clock reading.
    pub fn try_fire_at(&mut self, now: Instant) -> bool {
        if let Some(last) = self.last_accepted {
            let elapsed = now.saturating_duration_since(last);
            if elapsed < self.min_interval {
                debug!(elapsed_ms = elapsed.as_millis() as u64, "trigger ignored");
                return false;
            }
        }
        self.last_accepted = Some(now);
        true
    }
}
