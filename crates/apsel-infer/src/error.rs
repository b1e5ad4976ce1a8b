//! Error types for inference.

use std::fmt;

use apsel_core::ModelKind;
use apsel_rules::LoadError;

/// Which end of a scope a reading fell past.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Bound {
    Start,
    End,
}

impl fmt::Display for Bound {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Bound::Start => write!(f, "below the start"),
            Bound::End => write!(f, "above the end"),
        }
    }
}

/// Errors that abort an inference call.
#[derive(Debug, thiserror::Error)]
pub enum InferError {
    /// A reading lies outside its model's scope.
    #[error(
        "{} ({input}) value {value} is {bound} of its scope [{start}, {end}]",
        .input.symbol()
    )]
    OutOfScope {
        input: ModelKind,
        value: f64,
        bound: Bound,
        start: f64,
        end: f64,
    },

    /// Rules, outputs and relevance relation do not fit together.
    #[error("configuration mismatch: {detail}")]
    ConfigurationMismatch { detail: String },

    /// The rule set could not be loaded.
    #[error(transparent)]
    Load(#[from] LoadError),
}

/// Result type for inference operations.
pub type Result<T> = std::result::Result<T, InferError>;
