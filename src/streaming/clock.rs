//! Monotonic time sources used to pace a replay.

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// A monotonic clock.
///
/// Readings are durations since an arbitrary, fixed origin; only differences
/// between readings are meaningful.
pub trait Clock {
    /// Current reading. Never decreases.
    fn now(&self) -> Duration;
}

/// A clock that can pace the blocking driver between steps.
///
/// After `sleep(d)` returns, `now()` has moved forward by at least `d`.
pub trait BlockingClock: Clock {
    /// Wait for `duration` on this clock.
    fn sleep(&self, duration: Duration);
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> Duration {
        (**self).now()
    }
}

impl<C: BlockingClock + ?Sized> BlockingClock for &C {
    fn sleep(&self, duration: Duration) {
        (**self).sleep(duration)
    }
}

/// Wall clock backed by [`Instant`].
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// A clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl Default for SystemClock {
    fn default() -> Self {
        Self::new()
    }
}

impl Clock for SystemClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}

impl BlockingClock for SystemClock {
    fn sleep(&self, duration: Duration) {
        std::thread::sleep(duration);
    }
}

/// A clock that only moves when told to.
///
/// `sleep` advances the reading instead of blocking, so a whole replay runs
/// instantly and deterministically. Clones share the same reading.
#[derive(Debug, Clone, Default)]
pub struct ManualClock {
    nanos: Arc<AtomicU64>,
}

impl ManualClock {
    /// A clock reading zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Move the reading forward by `duration`.
    pub fn advance(&self, duration: Duration) {
        let nanos = u64::try_from(duration.as_nanos()).unwrap_or(u64::MAX);
        self.nanos.fetch_add(nanos, Ordering::SeqCst);
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Duration {
        Duration::from_nanos(self.nanos.load(Ordering::SeqCst))
    }
}

impl BlockingClock for ManualClock {
    fn sleep(&self, duration: Duration) {
        self.advance(duration);
    }
}

/// Clock backed by tokio's time driver, for use with the async driver.
///
/// It has no blocking `sleep`: pacing comes from `tokio::time::sleep` in
/// [`run_async`](super::run_async). Under a paused runtime (`start_paused`)
/// readings advance only as tokio timers fire, which keeps async replays
/// deterministic.
#[cfg(feature = "async")]
#[derive(Debug, Clone, Copy)]
pub struct TokioClock {
    origin: tokio::time::Instant,
}

#[cfg(feature = "async")]
impl TokioClock {
    /// A clock whose origin is the moment of construction.
    pub fn new() -> Self {
        Self {
            origin: tokio::time::Instant::now(),
        }
    }
}

#[cfg(feature = "async")]
impl Default for TokioClock {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(feature = "async")]
impl Clock for TokioClock {
    fn now(&self) -> Duration {
        self.origin.elapsed()
    }
}
