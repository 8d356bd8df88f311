//! Drivers that repeatedly step an estimator until its run ends.
//!
//! Both drivers run a plain loop: step, hand every event to the consumer,
//! pause for [`EstimatorConfig::step_delay`](super::EstimatorConfig), repeat
//! while the run is still running. The consumer receives the run state
//! alongside each event and may call [`RunState::cancel`] to stop early.

use super::clock::BlockingClock;
#[cfg(feature = "async")]
use super::clock::Clock;
use super::estimator::{BeatEstimator, RunEvent, RunState};
use crate::error::ReplayResult;
use crate::traits::AudioSource;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// How a driven run ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum RunOutcome {
    /// All audio was consumed
    Completed,
    /// The consumer cancelled the run
    Cancelled,
}

/// Result of a driven run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunSummary {
    /// Detected beat times in seconds
    pub beats: Vec<f64>,
    /// Number of chunks fetched, including the initial one
    pub chunks_fetched: usize,
    /// Number of step invocations
    pub steps: u64,
    /// How the run ended
    pub outcome: RunOutcome,
}

impl RunSummary {
    fn from_run(run: &RunState, steps: u64) -> Self {
        Self {
            beats: run.beats().to_vec(),
            chunks_fetched: run.chunk_index(),
            steps,
            outcome: if run.is_done() {
                RunOutcome::Completed
            } else {
                RunOutcome::Cancelled
            },
        }
    }
}

fn dispatch<F>(events: Vec<RunEvent>, run: &mut RunState, on_event: &mut F)
where
    F: FnMut(&RunEvent, &mut RunState),
{
    for event in events {
        on_event(&event, run);
    }
}

/// Drive a run to the end on the current thread, sleeping on the estimator's clock.
///
/// With a [`ManualClock`](super::ManualClock) the whole run is simulated
/// without blocking. Clocks driven by an async runtime do not implement
/// [`BlockingClock`]; use `run_async` for those.
pub fn run_blocking<S, C, F>(
    estimator: &BeatEstimator<S, C>,
    run: &mut RunState,
    mut on_event: F,
) -> ReplayResult<RunSummary>
where
    S: AudioSource,
    C: BlockingClock,
    F: FnMut(&RunEvent, &mut RunState),
{
    let events = estimator.start_run(run)?;
    dispatch(events, run, &mut on_event);

    let delay = estimator.config().step_delay;
    let mut steps = 0u64;
    while run.is_running() {
        let events = estimator.step(run);
        steps += 1;
        dispatch(events, run, &mut on_event);
        if run.is_running() {
            estimator.clock().sleep(delay);
        }
    }

    debug!(steps, outcome = ?run.phase(), "blocking driver finished");
    Ok(RunSummary::from_run(run, steps))
}

/// Drive a run to the end as a tokio task, pausing with [`tokio::time::sleep`].
///
/// Pair this with [`TokioClock`](super::TokioClock) so that the estimator's
/// notion of time follows the runtime's timers.
#[cfg(feature = "async")]
pub async fn run_async<S, C, F>(
    estimator: &BeatEstimator<S, C>,
    run: &mut RunState,
    mut on_event: F,
) -> ReplayResult<RunSummary>
where
    S: AudioSource,
    C: Clock,
    F: FnMut(&RunEvent, &mut RunState),
{
    let events = estimator.start_run(run)?;
    dispatch(events, run, &mut on_event);

    let delay = estimator.config().step_delay;
    let mut steps = 0u64;
    while run.is_running() {
        let events = estimator.step(run);
        steps += 1;
        dispatch(events, run, &mut on_event);
        if run.is_running() {
            tokio::time::sleep(delay).await;
        }
    }

    debug!(steps, outcome = ?run.phase(), "async driver finished");
    Ok(RunSummary::from_run(run, steps))
}
