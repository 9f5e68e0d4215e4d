use tokio::time::{Duration, Instant, sleep_until};

pub const DEFAULT_DEBOUNCE_MS: u64 = 300;

/// One-shot timer carrying a payload. Arming again replaces the pending
/// payload and restarts the countdown, so at most one firing is ever pending.
#[derive(Debug)]
pub struct Timer<T> {
    delay: Duration,
    pending: Option<(Instant, T)>,
}

impl<T> Timer<T> {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Arms the timer from now. Returns the payload it superseded, if any.
    pub fn arm(&mut self, payload: T) -> Option<T> {
        self.arm_at(Instant::now(), payload)
    }

    pub fn arm_at(&mut self, now: Instant, payload: T) -> Option<T> {
        self.pending
            .replace((now + self.delay, payload))
            .map(|(_, superseded)| superseded)
    }

    pub fn cancel(&mut self) -> Option<T> {
        self.pending.take().map(|(_, payload)| payload)
    }

    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|(deadline, _)| *deadline)
    }

    pub fn payload(&self) -> Option<&T> {
        self.pending.as_ref().map(|(_, payload)| payload)
    }

    /// Takes the payload if the deadline has passed. Each arming fires at most once.
    pub fn fire_due(&mut self, now: Instant) -> Option<T> {
        match self.deadline() {
            Some(deadline) if deadline <= now => self.cancel(),
            _ => None,
        }
    }

    /// Resolves when the armed deadline passes. Never resolves while disarmed.
    ///
    /// Cancel safe: dropping the future leaves the timer armed.
    pub async fn expired(&mut self) -> T {
        loop {
            let Some(deadline) = self.deadline() else {
                return std::future::pending().await;
            };
            sleep_until(deadline).await;
            if let Some(payload) = self.fire_due(Instant::now()) {
                return payload;
            }
        }
    }
}

/// A query text waiting for the debounce window to settle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingQuery {
    pub generation: u64,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Schedule {
    /// Timer (re)started for this generation.
    Armed,
    /// Blank text: nothing is armed and any pending trigger was dropped.
    Bypassed,
}

/// Coalesces bursts of query edits into a single fetch trigger.
///
/// Pure timing: it knows nothing about transports, only which generation is
/// waiting and when it is due.
#[derive(Debug)]
pub struct DebounceScheduler {
    timer: Timer<PendingQuery>,
}

impl DebounceScheduler {
    pub fn new(debounce: Duration) -> Self {
        Self {
            timer: Timer::new(debounce),
        }
    }

    pub fn debounce(&self) -> Duration {
        self.timer.delay()
    }

    pub fn schedule(&mut self, generation: u64, text: &str) -> Schedule {
        if text.trim().is_empty() {
            self.timer.cancel();
            return Schedule::Bypassed;
        }

        self.timer.arm(PendingQuery {
            generation,
            text: text.to_string(),
        });
        Schedule::Armed
    }

    pub fn cancel(&mut self) -> Option<PendingQuery> {
        self.timer.cancel()
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }

    pub fn pending(&self) -> Option<&PendingQuery> {
        self.timer.payload()
    }

    pub fn fire_due(&mut self, now: Instant) -> Option<PendingQuery> {
        self.timer.fire_due(now)
    }

    pub async fn settled(&mut self) -> PendingQuery {
        self.timer.expired().await
    }
}

impl Default for DebounceScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(DEFAULT_DEBOUNCE_MS))
    }
}

#[cfg(test)]
#[path = "debounce_tests.rs"]
mod tests;
