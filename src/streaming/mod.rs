//! Real-time replay infrastructure.
//!
//! This module simulates live capture from a pre-recorded source:
//! - Monotonic clocks (wall clock, manual, tokio)
//! - The incremental beat estimator and its explicit run state
//! - Drivers that step a run until it completes or is cancelled
//!
//! # Example
//!
//! ```rust
//! use beat_replay::generation::impulse;
//! use beat_replay::streaming::*;
//!
//! let waveform = impulse(8000, 1000, 3000, 8000);
//! let estimator = BeatEstimator::with_reference_config(&waveform, ManualClock::new());
//!
//! let mut run = RunState::new();
//! let summary = run_blocking(&estimator, &mut run, |_event, _run| {}).unwrap();
//!
//! assert_eq!(summary.beats[0], 0.125);
//! assert_eq!(summary.outcome, RunOutcome::Completed);
//! ```

pub mod clock;

pub mod config;

pub mod driver;

pub mod estimator;

// Re-export main types for convenience
pub use clock::{BlockingClock, Clock, ManualClock, SystemClock};

#[cfg(feature = "async")]
pub use clock::TokioClock;

pub use config::EstimatorConfig;

pub use driver::{RunOutcome, RunSummary, run_blocking};

#[cfg(feature = "async")]
pub use driver::run_async;

pub use estimator::{BeatEstimator, RunEvent, RunPhase, RunState};

#[cfg(test)]
mod tests;
