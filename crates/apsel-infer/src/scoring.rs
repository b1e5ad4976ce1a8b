//! Output scores and winner selection.
//!
//! The score of output `j` is `min(1, min_i(1 − s_i + R[i][j]))`, where
//! `s_i` is the firing strength of rule `i` and `R` the relevance relation.
//! A rule that fires strongly and is irrelevant to `j` pulls `j` towards 0;
//! a relevant or weakly firing rule leaves it alone.

use apsel_core::math::round2;

use crate::error::{InferError, Result};
use crate::relevance::RelevanceMatrix;
use crate::report::OutputScore;

/// Score every output. `relation` must be `strengths.len()` ×
/// `outputs.len()`.
pub fn score_outputs(
    strengths: &[f64],
    outputs: &[String],
    relation: &RelevanceMatrix,
) -> Result<Vec<OutputScore>> {
    if relation.rows() != strengths.len() || relation.cols() != outputs.len() {
        return Err(InferError::ConfigurationMismatch {
            detail: format!(
                "relevance relation is {}x{}, but there are {} rules and {} outputs",
                relation.rows(),
                relation.cols(),
                strengths.len(),
                outputs.len()
            ),
        });
    }

    let scores = outputs
        .iter()
        .enumerate()
        .map(|(j, label)| {
            let score = strengths
                .iter()
                .enumerate()
                .fold(1.0_f64, |acc, (i, strength)| {
                    acc.min(1.0 - strength + f64::from(relation.get(i, j)))
                });
            OutputScore {
                label: label.clone(),
                score: round2(score),
            }
        })
        .collect();
    Ok(scores)
}

/// Labels of every output whose score equals the maximum, sorted.
pub fn select_winners(scores: &[OutputScore]) -> Vec<String> {
    let Some(best) = scores.iter().map(|s| s.score).reduce(f64::max) else {
        return Vec::new();
    };
    let mut winners: Vec<String> = scores
        .iter()
        .filter(|s| s.score == best)
        .map(|s| s.label.clone())
        .collect();
    winners.sort();
    winners
}
