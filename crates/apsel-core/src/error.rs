//! Error types for the core data model.

/// Errors raised while constructing core values.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum CoreError {
    /// A curve sampling step that is not a positive finite number, or one so
    /// fine that the scope would need more than `MAX_POINTS` samples.
    #[error(
        "invalid sampling step {step}: expected a positive finite step giving at most {} samples",
        crate::curve::MAX_POINTS
    )]
    InvalidStep { step: f64 },

    /// A rule without any condition.
    #[error("rule '{label}' has an empty condition expression")]
    EmptyExpression { label: String },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
