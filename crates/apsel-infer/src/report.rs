//! The result of one inference call.

use std::fmt;

use serde::Serialize;

use crate::fuzzify::Fuzzified;

/// Delimiter between winners in the text report.
pub const WINNER_DELIMITER: &str = ", ";

/// Score of one candidate output.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputScore {
    pub label: String,
    pub score: f64,
}

/// Everything an inference call computed, in evaluation order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub input1: f64,
    pub input2: f64,
    pub degrees: Fuzzified,
    /// Rounded firing strength per rule, in rule order.
    pub strengths: Vec<f64>,
    /// Rounded score per output, in declared output order.
    pub scores: Vec<OutputScore>,
    /// Outputs reaching the maximum score, sorted by label.
    pub winners: Vec<String>,
}

impl Report {
    /// Winners joined with [`WINNER_DELIMITER`].
    pub fn decision(&self) -> String {
        self.winners.join(WINNER_DELIMITER)
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, strength) in self.strengths.iter().enumerate() {
            writeln!(f, "Rule {}: weight {strength:.2}", i + 1)?;
        }
        writeln!(f)?;
        writeln!(f, "Selected apparatuses: {}", self.decision())
    }
}
