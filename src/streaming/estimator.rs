//! Incremental beat estimation over a simulated live capture.
//!
//! A run is an explicit [`RunState`] owned by the caller. [`BeatEstimator::start_run`]
//! resets it and fetches the first chunk, then [`BeatEstimator::step`] is invoked
//! repeatedly (by one of the drivers in [`crate::streaming::driver`] or by any
//! event loop) until the run leaves the running phase.
//!
//! Each step:
//! 1. updates the detected beats from the most recent chunk, using the clock
//!    reading taken by the previous step;
//! 2. reads the clock and fetches the next chunk once simulated time has reached
//!    the point where that chunk would have arrived from a microphone;
//! 3. finishes the run when a fetch happens after the end of the audio.

use super::clock::Clock;
use super::config::EstimatorConfig;
use crate::error::{ConfigurationError, ReplayResult};
use crate::repr::Chunk;
use crate::traits::AudioSource;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info, trace};

/// Lifecycle of a single run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum RunPhase {
    /// Not started, or cancelled
    #[default]
    Idle,
    /// Steps are being processed
    Running,
    /// All audio has been consumed
    Done,
}

/// Something a run reports to its consumer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RunEvent {
    /// A new chunk became current.
    ChunkFetched {
        /// Index of the fetched chunk
        index: usize,
        /// Fetched chunks over total chunks, clamped to `[0, 1]`
        progress: f64,
    },
    /// A beat was appended to the detected list.
    BeatDetected {
        /// Beat time in seconds since the run started
        time: f64,
    },
    /// The run reached the end of the audio.
    Completed {
        /// Every beat detected during the run
        beats: Vec<f64>,
    },
}

/// Mutable state of one run.
///
/// Created idle; reset by every [`BeatEstimator::start_run`].
#[derive(Debug, Clone)]
pub struct RunState {
    phase: RunPhase,
    t0: Duration,
    latest: Duration,
    chunk_index: usize,
    chunk_count: usize,
    current_chunk: Chunk,
    beats: Vec<f64>,
}

impl Default for RunState {
    fn default() -> Self {
        Self::new()
    }
}

impl RunState {
    /// An idle run with no history.
    pub fn new() -> Self {
        Self {
            phase: RunPhase::Idle,
            t0: Duration::ZERO,
            latest: Duration::ZERO,
            chunk_index: 0,
            chunk_count: 0,
            current_chunk: Chunk::empty(0),
            beats: Vec::new(),
        }
    }

    /// Current phase.
    pub const fn phase(&self) -> RunPhase {
        self.phase
    }

    /// Whether further steps will do any work.
    pub fn is_running(&self) -> bool {
        self.phase == RunPhase::Running
    }

    /// Whether the run consumed all of its audio.
    pub fn is_done(&self) -> bool {
        self.phase == RunPhase::Done
    }

    /// Clear the run flag. The next step is a no-op.
    ///
    /// A run that already finished stays [`RunPhase::Done`].
    pub fn cancel(&mut self) {
        if self.is_running() {
            debug!(chunk_index = self.chunk_index, "run cancelled");
            self.phase = RunPhase::Idle;
        }
    }

    /// Index of the next chunk to fetch, which is also the number fetched so far.
    pub const fn chunk_index(&self) -> usize {
        self.chunk_index
    }

    /// The most recently fetched chunk.
    pub const fn current_chunk(&self) -> &Chunk {
        &self.current_chunk
    }

    /// Beats detected so far, in increasing order.
    pub fn beats(&self) -> &[f64] {
        &self.beats
    }

    /// Clock reading at the start of the run.
    pub const fn t0(&self) -> Duration {
        self.t0
    }

    /// Seconds between the start of the run and the latest clock reading.
    pub fn elapsed_secs(&self) -> f64 {
        self.latest.saturating_sub(self.t0).as_secs_f64()
    }

    /// Fetched chunks over total chunks, clamped to `[0, 1]`.
    ///
    /// An empty source reports full progress once started.
    pub fn progress(&self) -> f64 {
        if self.chunk_count == 0 {
            return if self.chunk_index == 0 { 0.0 } else { 1.0 };
        }
        (self.chunk_index as f64 / self.chunk_count as f64).min(1.0)
    }
}

/// Replays an [`AudioSource`] against a [`Clock`] and estimates beat times.
///
/// Detection is a single amplitude threshold for the first beat; later beats
/// are extrapolated at a fixed period without looking at the signal again.
#[derive(Debug, Clone)]
pub struct BeatEstimator<S, C> {
    source: S,
    clock: C,
    config: EstimatorConfig,
}

impl<S: AudioSource, C: Clock> BeatEstimator<S, C> {
    /// Create an estimator. Settings are validated when a run starts.
    pub const fn new(source: S, clock: C, config: EstimatorConfig) -> Self {
        Self {
            source,
            clock,
            config,
        }
    }

    /// Create an estimator with [`EstimatorConfig::reference`] settings.
    pub const fn with_reference_config(source: S, clock: C) -> Self {
        Self::new(source, clock, EstimatorConfig::reference())
    }

    /// The audio being replayed.
    pub const fn source(&self) -> &S {
        &self.source
    }

    /// The pacing clock.
    pub const fn clock(&self) -> &C {
        &self.clock
    }

    /// Active configuration.
    pub const fn config(&self) -> &EstimatorConfig {
        &self.config
    }

    /// Length of one chunk in seconds.
    fn chunk_duration(&self) -> f64 {
        self.config.chunk_size as f64 / f64::from(self.source.sample_rate())
    }

    /// Check the source and settings without touching any run.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.source.sample_rate() == 0 {
            return Err(ConfigurationError::ZeroSampleRate);
        }
        self.config.validate()
    }

    /// Start a fresh run in `run`.
    ///
    /// Clears the beat list, sets the chunk index to zero, takes `t0` from the
    /// clock and fetches chunk 0. An empty source completes immediately.
    ///
    /// Fails with [`ConfigurationError`] if the sample rate is zero, the
    /// configuration is invalid, or `run` is still running.
    pub fn start_run(&self, run: &mut RunState) -> ReplayResult<Vec<RunEvent>> {
        if run.is_running() {
            return Err(ConfigurationError::AlreadyRunning.into());
        }
        self.validate()?;

        let now = self.clock.now();
        *run = RunState {
            phase: RunPhase::Running,
            t0: now,
            latest: now,
            chunk_index: 0,
            chunk_count: self.source.chunk_count(self.config.chunk_size),
            current_chunk: Chunk::empty(0),
            beats: Vec::new(),
        };
        info!(
            sample_rate = self.source.sample_rate(),
            samples = self.source.len(),
            chunks = run.chunk_count,
            "starting run"
        );

        let mut events = vec![self.fetch_next(run)];
        if self.source.is_empty() {
            events.push(self.finish(run));
        }
        Ok(events)
    }

    /// Advance `run` by one step and return what happened.
    ///
    /// Does nothing unless the run is [`RunPhase::Running`].
    pub fn step(&self, run: &mut RunState) -> Vec<RunEvent> {
        if !run.is_running() {
            trace!(phase = ?run.phase, "step skipped");
            return Vec::new();
        }
        let mut events = Vec::new();

        // Detection runs against the reading taken by the previous step.
        if let Some(time) = self.detect(run, run.elapsed_secs()) {
            run.beats.push(time);
            debug!(time, count = run.beats.len(), "beat detected");
            events.push(RunEvent::BeatDetected { time });
        }

        run.latest = self.clock.now();
        let elapsed = run.elapsed_secs();
        trace!(elapsed, chunk_index = run.chunk_index, "step");

        if elapsed > run.chunk_index as f64 * self.chunk_duration() {
            events.push(self.fetch_next(run));
            if elapsed > self.source.duration_secs() {
                events.push(self.finish(run));
            }
        }

        events
    }

    fn detect(&self, run: &RunState, elapsed: f64) -> Option<f64> {
        match run.beats.last() {
            None => {
                let (offset, value) = run.current_chunk.peak()?;
                (value > self.config.onset_threshold)
                    .then(|| elapsed + offset as f64 / f64::from(self.source.sample_rate()))
            }
            Some(&last) => {
                (elapsed - last > self.config.period).then_some(last + self.config.period)
            }
        }
    }

    fn fetch_next(&self, run: &mut RunState) -> RunEvent {
        let index = run.chunk_index;
        run.current_chunk = self.source.chunk(index, self.config.chunk_size);
        run.chunk_index += 1;
        debug!(
            index,
            samples = run.current_chunk.len(),
            elapsed = run.elapsed_secs(),
            "fetched chunk"
        );
        RunEvent::ChunkFetched {
            index,
            progress: run.progress(),
        }
    }

    fn finish(&self, run: &mut RunState) -> RunEvent {
        run.phase = RunPhase::Done;
        info!(
            beats = run.beats.len(),
            chunks = run.chunk_index,
            elapsed = run.elapsed_secs(),
            "run complete"
        );
        RunEvent::Completed {
            beats: run.beats.clone(),
        }
    }
}
