//! Synthetic waveforms for demos and deterministic runs.

use crate::repr::Waveform;
use std::time::Duration;

fn samples_for(duration: Duration, sample_rate: u32) -> usize {
    (duration.as_secs_f64() * f64::from(sample_rate)).round() as usize
}

/// A waveform of zeros lasting `duration`.
pub fn silence(duration: Duration, sample_rate: u32) -> Waveform {
    Waveform::from_vec(vec![0; samples_for(duration, sample_rate)], sample_rate)
}

/// Silence with a single spike of `amplitude` at sample `position`.
///
/// A position past the end produces plain silence.
pub fn impulse(num_samples: usize, position: usize, amplitude: i16, sample_rate: u32) -> Waveform {
    let mut samples = vec![0; num_samples];
    if let Some(sample) = samples.get_mut(position) {
        *sample = amplitude;
    }
    Waveform::from_vec(samples, sample_rate)
}

/// Spikes of `amplitude` every `period`, starting at `offset`.
pub fn click_track(
    duration: Duration,
    sample_rate: u32,
    offset: Duration,
    period: Duration,
    amplitude: i16,
) -> Waveform {
    let len = samples_for(duration, sample_rate);
    let mut samples = vec![0; len];

    if !period.is_zero() {
        let mut at = offset;
        loop {
            let position = samples_for(at, sample_rate);
            match samples.get_mut(position) {
                Some(sample) => *sample = amplitude,
                None => break,
            }
            at += period;
        }
    }

    Waveform::from_vec(samples, sample_rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_silence_length() {
        let waveform = silence(Duration::from_millis(500), 8000);
        assert_eq!(waveform.len(), 4000);
        assert!(waveform.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_impulse_position() {
        let waveform = impulse(8000, 1000, 3000, 8000);
        assert_eq!(waveform.samples()[1000], 3000);
        assert_eq!(waveform.samples().iter().filter(|&&s| s != 0).count(), 1);

        let out_of_range = impulse(10, 20, 3000, 8000);
        assert!(out_of_range.samples().iter().all(|&s| s == 0));
    }

    #[test]
    fn test_click_track_spacing() {
        let waveform = click_track(
            Duration::from_secs(1),
            1000,
            Duration::from_millis(100),
            Duration::from_millis(250),
            5000,
        );
        let clicks: Vec<usize> = waveform
            .samples()
            .iter()
            .enumerate()
            .filter(|(_, s)| **s != 0)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(clicks, vec![100, 350, 600, 850]);
    }
}
