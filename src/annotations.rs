//! Ground-truth beat annotations.

use crate::error::ParseError;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Annotated beat times in seconds, in file order.
///
/// Annotations are only used for comparison and display; the estimator never
/// reads them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AnnotatedBeats {
    times: Vec<f64>,
}

impl AnnotatedBeats {
    /// Wrap already-parsed beat times.
    pub const fn new(times: Vec<f64>) -> Self {
        Self { times }
    }

    /// Parse one timestamp per non-empty line.
    ///
    /// Whitespace around each value is ignored. Blank lines are skipped.
    pub fn parse(text: &str) -> Result<Self, ParseError> {
        let mut times = Vec::new();
        for (number, raw) in text.lines().enumerate() {
            let content = raw.trim();
            if content.is_empty() {
                continue;
            }
            let value = content
                .parse::<f64>()
                .ok()
                .filter(|value| value.is_finite())
                .ok_or_else(|| ParseError::InvalidTimestamp {
                    line: number + 1,
                    content: content.to_string(),
                })?;
            times.push(value);
        }
        Ok(Self { times })
    }

    /// The beat times.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Number of annotated beats.
    pub fn len(&self) -> usize {
        self.times.len()
    }

    /// Whether there are no annotated beats.
    pub fn is_empty(&self) -> bool {
        self.times.is_empty()
    }

    /// Iterate over the beat times.
    pub fn iter(&self) -> std::slice::Iter<'_, f64> {
        self.times.iter()
    }
}

impl FromStr for AnnotatedBeats {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl<'a> IntoIterator for &'a AnnotatedBeats {
    type Item = &'a f64;
    type IntoIter = std::slice::Iter<'a, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.times.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_skips_blank_lines() {
        let beats: AnnotatedBeats = "0.5\n\n 1.0 \r\n1.5\n".parse().unwrap();
        assert_eq!(beats.times(), &[0.5, 1.0, 1.5]);
    }

    #[test]
    fn test_parse_empty_text() {
        assert!(AnnotatedBeats::parse("").unwrap().is_empty());
        assert!(AnnotatedBeats::parse("\n  \n").unwrap().is_empty());
    }

    #[test]
    fn test_parse_reports_offending_line() {
        let err = AnnotatedBeats::parse("0.25\n0.75\nbeat\n1.25").unwrap_err();
        assert_eq!(
            err,
            ParseError::InvalidTimestamp {
                line: 3,
                content: "beat".to_string(),
            }
        );
        assert!(err.to_string().contains("line 3"));
    }

    #[test]
    fn test_parse_rejects_non_finite() {
        assert!(AnnotatedBeats::parse("NaN").is_err());
        assert!(AnnotatedBeats::parse("1.0\ninf").is_err());
    }
}
