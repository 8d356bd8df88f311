//! Tests for error classification and formatting.

use crate::error::*;
use std::path::PathBuf;

#[test]
fn test_configuration_error_creation() {
    let error = ConfigurationError::invalid_parameter("period", "must be > 0");
    assert!(error.to_string().contains("period"));
    assert!(error.to_string().contains("must be > 0"));

    let wrapped: ReplayError = error.clone().into();
    assert!(matches!(wrapped, ReplayError::Configuration(ref inner) if *inner == error));
    assert_eq!(wrapped.to_string(), error.to_string());
}

#[test]
fn test_load_error_from_wav_splits_io() {
    let io = hound::Error::IoError(std::io::Error::new(
        std::io::ErrorKind::NotFound,
        "missing",
    ));
    assert!(matches!(
        LoadError::from_wav("a.wav", io),
        LoadError::Io { .. }
    ));

    let format = hound::Error::FormatError("no RIFF tag found");
    let error = LoadError::from_wav("a.wav", format);
    assert!(matches!(error, LoadError::Wav { ref path, .. } if *path == PathBuf::from("a.wav")));
    assert!(error.to_string().contains("a.wav"));
}

#[test]
fn test_parse_error_formatting() {
    let error = ParseError::InvalidTimestamp {
        line: 7,
        content: "x".to_string(),
    };
    let message = ReplayError::from(error).to_string();
    assert!(message.contains("line 7"));
    assert!(message.contains("\"x\""));
}

#[test]
fn test_error_source_chain() {
    use std::error::Error as _;

    let error = ReplayError::from(LoadError::Io {
        path: PathBuf::from("song.wav"),
        source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "denied"),
    });
    // Transparent wrappers forward to the inner error's source.
    assert!(error.source().is_some());
}
