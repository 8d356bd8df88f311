//! Scoring detected beats against annotations.

use crate::annotations::AnnotatedBeats;
use serde::{Deserialize, Serialize};

/// Default matching window, in seconds, on either side of an annotated beat.
pub const DEFAULT_TOLERANCE: f64 = 0.07;

/// Match counts and derived scores for one run.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct BeatEvaluation {
    /// Detections matched to an annotation
    pub true_positives: usize,
    /// Detections with no annotation inside the tolerance
    pub false_positives: usize,
    /// Annotations with no detection inside the tolerance
    pub false_negatives: usize,
    /// `tp / (tp + fp)`, zero when nothing was detected
    pub precision: f64,
    /// `tp / (tp + fn)`, zero when nothing was annotated
    pub recall: f64,
    /// Harmonic mean of precision and recall
    pub f_measure: f64,
}

fn ratio(numerator: usize, denominator: usize) -> f64 {
    if denominator == 0 {
        0.0
    } else {
        numerator as f64 / denominator as f64
    }
}

/// Compare `detected` beat times with `annotated` ones.
///
/// Each annotation, in order, claims the nearest still-unmatched detection no
/// more than `tolerance` seconds away. Every detection is matched at most once.
pub fn evaluate(detected: &[f64], annotated: &AnnotatedBeats, tolerance: f64) -> BeatEvaluation {
    let mut claimed = vec![false; detected.len()];
    let mut true_positives = 0;

    for &target in annotated {
        let nearest = detected
            .iter()
            .enumerate()
            .filter(|&(i, &time)| !claimed[i] && (time - target).abs() <= tolerance)
            .min_by(|(_, a), (_, b)| (*a - target).abs().total_cmp(&(*b - target).abs()));

        if let Some((i, _)) = nearest {
            claimed[i] = true;
            true_positives += 1;
        }
    }

    let false_positives = detected.len() - true_positives;
    let false_negatives = annotated.len() - true_positives;
    let precision = ratio(true_positives, detected.len());
    let recall = ratio(true_positives, annotated.len());
    let f_measure = if precision + recall > 0.0 {
        2.0 * precision * recall / (precision + recall)
    } else {
        0.0
    };

    BeatEvaluation {
        true_positives,
        false_positives,
        false_negatives,
        precision,
        recall,
        f_measure,
    }
}
