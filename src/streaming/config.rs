//! Estimator configuration.

use crate::error::ConfigurationError;
use crate::repr::DEFAULT_CHUNK_SIZE;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Configuration for the incremental beat estimator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimatorConfig {
    /// Samples per simulated microphone read
    pub chunk_size: usize,

    /// A chunk whose largest sample exceeds this value triggers the first beat
    pub onset_threshold: i16,

    /// Fixed spacing between extrapolated beats, in seconds
    pub period: f64,

    /// Pause between steps when driven by one of the drivers
    pub step_delay: Duration,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self::reference()
    }
}

impl EstimatorConfig {
    /// 4096-sample chunks, threshold 2500, 0.5 s period, 1 ms between steps.
    pub const fn reference() -> Self {
        Self {
            chunk_size: DEFAULT_CHUNK_SIZE,
            onset_threshold: 2500,
            period: 0.5,
            step_delay: Duration::from_millis(1),
        }
    }

    /// Smaller chunks and a finer step for lower acquisition latency.
    pub const fn fine_grained() -> Self {
        Self {
            chunk_size: 1024,
            onset_threshold: 2500,
            period: 0.5,
            step_delay: Duration::from_micros(250),
        }
    }

    /// Set the chunk size.
    pub const fn with_chunk_size(mut self, chunk_size: usize) -> Self {
        self.chunk_size = chunk_size;
        self
    }

    /// Set the onset threshold.
    pub const fn with_onset_threshold(mut self, onset_threshold: i16) -> Self {
        self.onset_threshold = onset_threshold;
        self
    }

    /// Set the beat period in seconds.
    pub const fn with_period(mut self, period: f64) -> Self {
        self.period = period;
        self
    }

    /// Set the tempo in beats per minute.
    pub fn with_tempo_bpm(self, bpm: f64) -> Self {
        self.with_period(60.0 / bpm)
    }

    /// Set the delay between steps.
    pub const fn with_step_delay(mut self, step_delay: Duration) -> Self {
        self.step_delay = step_delay;
        self
    }

    /// Check that every parameter is usable.
    pub fn validate(&self) -> Result<(), ConfigurationError> {
        if self.chunk_size == 0 {
            return Err(ConfigurationError::invalid_parameter(
                "chunk_size",
                "must be > 0",
            ));
        }
        if !self.period.is_finite() || self.period <= 0.0 {
            return Err(ConfigurationError::invalid_parameter(
                "period",
                format!("must be a positive number of seconds, got {}", self.period),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_values() {
        let config = EstimatorConfig::default();
        assert_eq!(config.chunk_size, 4096);
        assert_eq!(config.onset_threshold, 2500);
        assert_eq!(config.period, 0.5);
        assert_eq!(config.step_delay, Duration::from_millis(1));
        assert!(config.validate().is_ok());
        assert!(EstimatorConfig::fine_grained().validate().is_ok());
    }

    #[test]
    fn test_tempo_sets_period() {
        let config = EstimatorConfig::reference().with_tempo_bpm(120.0);
        assert_eq!(config.period, 0.5);
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(matches!(
            EstimatorConfig::reference().with_chunk_size(0).validate(),
            Err(ConfigurationError::InvalidParameter {
                parameter: "chunk_size",
                ..
            })
        ));
        for period in [0.0, -0.5, f64::NAN, f64::INFINITY] {
            assert!(
                EstimatorConfig::reference()
                    .with_period(period)
                    .validate()
                    .is_err(),
                "period {period}"
            );
        }
    }
}
