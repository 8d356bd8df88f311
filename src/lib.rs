// Correctness and logic
#![warn(clippy::unit_cmp)] // Detects comparing unit types
#![warn(clippy::match_same_arms)]
// Duplicate match arms

// Performance-focused
#![warn(clippy::inefficient_to_string)] // `format!("{}", x)` vs `x.to_string()`
#![warn(clippy::map_clone)] // Cloning inside `map()` unnecessarily
#![warn(clippy::unnecessary_to_owned)] // Detects redundant `.to_owned()` or `.clone()`
#![warn(clippy::large_stack_arrays)] // Helps avoid stack overflows
#![warn(clippy::needless_collect)] // Avoids `.collect().iter()` chains

// Style and idiomatic Rust
#![warn(clippy::redundant_clone)] // Detects unnecessary `.clone()`
#![warn(clippy::identity_op)] // e.g., `x + 0`, `x * 1`
#![warn(clippy::needless_return)] // Avoids `return` at the end of functions
#![warn(clippy::let_unit_value)] // Avoids binding `()` to variables
#![warn(clippy::manual_map)] // Use `.map()` instead of manual `match`
#![warn(clippy::unwrap_used)] // Avoids using `unwrap()`

// Maintainability
#![warn(clippy::missing_panics_doc)] // Docs for functions that might panic
#![warn(clippy::missing_const_for_fn)] // Suggests making eligible functions `const`
#![deny(missing_docs)] // Documentation is a must for release

//! # beat_replay
//!
//! Replays a pre-recorded WAV file as if it were arriving live from a
//! microphone, one fixed-size chunk at a time, and incrementally estimates
//! beat times while it plays.
//!
//! ## Overview
//!
//! A run is driven by wall-clock time. The estimator fetches chunk `i` once
//! `i * chunk_size / sample_rate` seconds have passed since the run started,
//! locks onto the first chunk peak above an onset threshold, then extrapolates
//! further beats at a fixed period. Ground-truth annotations loaded from a
//! sidecar `.txt` file can be scored against the result.
//!
//! The pieces are:
//!
//! - [`io`]: loading WAV files and annotation files
//! - [`AudioSource`] / [`Waveform`] / [`Chunk`]: chunked access to samples
//! - [`streaming`]: clocks, the [`BeatEstimator`] state machine, and drivers
//! - [`evaluation`]: precision / recall / F-measure against annotations
//! - [`generation`]: synthetic waveforms for demos and tests
//!
//! ## Features
//!
//! - `async`: a tokio-based driver and clock
//!
//! ## Error Handling
//!
//! Errors are grouped by cause:
//!
//! ```rust
//! use beat_replay::{ConfigurationError, ReplayError, ReplayResult};
//!
//! let result: ReplayResult<()> = Err(ConfigurationError::ZeroSampleRate.into());
//!
//! match result {
//!     Ok(()) => {}
//!     Err(ReplayError::Load(err)) => eprintln!("Could not read input: {err}"),
//!     Err(ReplayError::Parse(err)) => eprintln!("Bad annotation file: {err}"),
//!     Err(ReplayError::Configuration(err)) => eprintln!("Cannot run: {err}"),
//! }
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use beat_replay::streaming::{BeatEstimator, RunEvent, RunState, SystemClock, run_blocking};
//! use beat_replay::{evaluate, io, DEFAULT_TOLERANCE};
//!
//! let (waveform, annotations) = io::load_with_annotations("train1.wav")?;
//! let estimator = BeatEstimator::with_reference_config(&waveform, SystemClock::new());
//!
//! let mut run = RunState::new();
//! let summary = run_blocking(&estimator, &mut run, |event, _run| {
//!     if let RunEvent::BeatDetected { time } = event {
//!         println!("beat at {time:.3}s");
//!     }
//! })?;
//!
//! let score = evaluate(&summary.beats, &annotations, DEFAULT_TOLERANCE);
//! println!("F-measure: {:.3}", score.f_measure);
//! # Ok::<(), beat_replay::ReplayError>(())
//! ```
//!
//! ## Stepping From an Event Loop
//!
//! The drivers are conveniences. Any scheduler can own the loop by calling
//! [`BeatEstimator::start_run`] once and [`BeatEstimator::step`] on every
//! tick while [`RunState::is_running`] holds.

pub mod annotations;
pub mod error;
pub mod evaluation;
pub mod generation;
pub mod io;
pub mod repr;
pub mod streaming;
pub mod traits;

#[cfg(test)]
pub(crate) mod test_support;

pub use annotations::AnnotatedBeats;
pub use error::{ConfigurationError, LoadError, ParseError, ReplayError, ReplayResult};
pub use evaluation::{BeatEvaluation, DEFAULT_TOLERANCE, evaluate};
pub use repr::{Chunk, DEFAULT_CHUNK_SIZE, Waveform, next_chunk};
pub use streaming::{BeatEstimator, EstimatorConfig, RunEvent, RunPhase, RunState};
pub use traits::AudioSource;
