//! Tests for the replay machinery.
//!
//! Timing-sensitive tests run on a [`ManualClock`] so every run is deterministic.

use super::*;
use crate::repr::Waveform;

mod error_tests;

/// 8 kHz, one second, a single 3000 spike at sample 1000 of chunk 0.
pub(crate) fn spike_waveform() -> Waveform {
    crate::generation::impulse(8000, 1000, 3000, 8000)
}

/// Run `estimator` to the end with the blocking driver, collecting every event.
pub(crate) fn collect_events<S, C>(
    estimator: &BeatEstimator<S, C>,
    run: &mut RunState,
) -> (RunSummary, Vec<RunEvent>)
where
    S: crate::AudioSource,
    C: BlockingClock,
{
    let mut events = Vec::new();
    let summary = run_blocking(estimator, run, |event, _| events.push(event.clone()))
        .expect("Run should start");
    (summary, events)
}

/// Assert every beat after the first is exactly one period after its predecessor.
pub(crate) fn assert_period_spacing(beats: &[f64], period: f64) {
    for pair in beats.windows(2) {
        approx_eq::assert_approx_eq!(pair[1] - pair[0], period, 1e-9);
    }
}
