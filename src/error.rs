//! Error types and result utilities for beat replay operations.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type alias for results that may contain a [`ReplayError`].
pub type ReplayResult<T> = Result<T, ReplayError>;

/// Top-level error returned by every fallible operation in the crate.
///
/// Each variant wraps a more specific error so callers can match on the
/// category first and inspect the details only when they need to.
#[derive(Error, Debug)]
pub enum ReplayError {
    /// A WAV or annotation file could not be read.
    #[error(transparent)]
    Load(#[from] LoadError),

    /// An annotation file contained a line that is not a timestamp.
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// The estimator cannot run with the given source, settings or run state.
    #[error(transparent)]
    Configuration(#[from] ConfigurationError),
}

/// Failures while reading audio or annotation files from disk.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The file is missing or could not be read.
    #[error("failed to read {}: {source}", path.display())]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The file exists but is not a valid WAV file.
    #[error("invalid WAV file {}: {source}", path.display())]
    Wav {
        /// Path that was being decoded.
        path: PathBuf,
        /// Decoder error.
        source: hound::Error,
    },

    /// The file is a valid WAV file in a layout that is not replayed as-is.
    #[error("unsupported WAV layout in {}: {details}", path.display())]
    UnsupportedFormat {
        /// Path that was being decoded.
        path: PathBuf,
        /// What was found instead of mono 16-bit integer PCM.
        details: String,
    },
}

impl LoadError {
    /// Classify a decoder error, keeping plain I/O failures distinct from malformed data.
    pub fn from_wav(path: impl Into<PathBuf>, err: hound::Error) -> Self {
        let path = path.into();
        match err {
            hound::Error::IoError(source) => Self::Io { path, source },
            source => Self::Wav { path, source },
        }
    }
}

/// Failures while parsing annotation text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParseError {
    /// A non-empty line did not hold a finite floating-point number.
    #[error("line {line}: {content:?} is not a timestamp in seconds")]
    InvalidTimestamp {
        /// 1-based line number.
        line: usize,
        /// The offending line, trimmed.
        content: String,
    },
}

/// Invalid settings or an invalid request against the run state machine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    /// The audio source reports a sample rate of zero.
    #[error("sample rate must be positive")]
    ZeroSampleRate,

    /// An estimator parameter is out of range.
    #[error("invalid value for '{parameter}': {reason}")]
    InvalidParameter {
        /// Name of the parameter.
        parameter: &'static str,
        /// Why the value was rejected.
        reason: String,
    },

    /// A run was started while the same run state was still running.
    #[error("a run is already in progress")]
    AlreadyRunning,
}

impl ConfigurationError {
    /// Create an invalid parameter error.
    pub fn invalid_parameter(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            parameter,
            reason: reason.into(),
        }
    }
}
