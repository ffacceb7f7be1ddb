//! Clock adapters.

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{DateTime, Duration, Utc};

use catalog_core::application::ports::Clock;

/// Wall-clock time.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Hand-driven clock for testing.
///
/// Every call to `now` returns the current instant and then advances it by
/// `step`, so successive timestamps are strictly increasing even when the
/// caller never touches the clock.
#[derive(Debug, Clone)]
pub struct ManualClock {
    inner: Arc<Mutex<ManualClockInner>>,
}

#[derive(Debug)]
struct ManualClockInner {
    current: DateTime<Utc>,
    step: Duration,
}

impl ManualClock {
    /// Start at `start`, advancing one millisecond per reading.
    pub fn new(start: DateTime<Utc>) -> Self {
        Self::with_step(start, Duration::milliseconds(1))
    }

    pub fn with_step(start: DateTime<Utc>, step: Duration) -> Self {
        Self {
            inner: Arc::new(Mutex::new(ManualClockInner {
                current: start,
                step,
            })),
        }
    }

    /// Move the clock forward without taking a reading.
    pub fn advance(&self, by: Duration) {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        inner.current += by;
    }

    /// The instant the next `now` call will return.
    pub fn peek(&self) -> DateTime<Utc> {
        self.inner
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .current
    }
}

impl Clock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        let mut inner = self.inner.lock().unwrap_or_else(PoisonError::into_inner);
        let now = inner.current;
        let step = inner.step;
        inner.current += step;
        now
    }
}
