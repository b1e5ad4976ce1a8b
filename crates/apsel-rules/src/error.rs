//! Error types for rule parsing and loading.

/// Errors raised while parsing a single rule line.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// The line lacks the `IF … THEN …` structure or its expression is not
    /// well formed.
    #[error("malformed rule: {detail}")]
    MalformedRule { detail: String },

    /// An atomic condition without exactly one `=`.
    #[error("malformed condition '{condition}': expected name=value")]
    MalformedCondition { condition: String },

    /// A condition names a variable outside the vocabulary.
    #[error("unknown variable '{name}'")]
    UnknownVariable { name: String },

    /// A condition names a category outside the vocabulary.
    #[error("unknown value '{value}'")]
    UnknownValue { value: String },
}

/// Errors raised while loading a rule source.
#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    /// The rule text could not be read.
    #[error("rule source '{origin}' is unavailable: {source}")]
    SourceUnavailable {
        /// File path or stream description.
        origin: String,
        source: std::io::Error,
    },

    /// A line failed to parse; nothing from the source is kept.
    #[error("line {line}: {source}")]
    Parse {
        /// 1-based physical line number.
        line: usize,
        source: ParseError,
    },
}

impl LoadError {
    /// The parse error behind this failure, if it was one.
    pub fn parse_error(&self) -> Option<&ParseError> {
        match self {
            LoadError::Parse { source, .. } => Some(source),
            LoadError::SourceUnavailable { .. } => None,
        }
    }
}

/// Result type for parsing a single rule.
pub type Result<T> = std::result::Result<T, ParseError>;
