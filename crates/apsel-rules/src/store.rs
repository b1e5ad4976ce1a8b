//! Loading whole rule sources.
//!
//! A load either yields every rule of the source or fails on the first bad
//! line. Nothing is cached: each [`RuleStore::load`] reads and parses the
//! source again, so edits to a rule file are picked up by the next load.

use std::io::Read;
use std::path::{Path, PathBuf};

use apsel_core::RuleSet;
use tracing::{debug, info};

use crate::error::LoadError;
use crate::parser::RuleParser;

/// Where rule text comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleSource {
    /// A file, re-read on every load.
    File(PathBuf),
    /// Text held in memory.
    Text(String),
}

impl RuleSource {
    /// Human-readable origin for messages.
    pub fn origin(&self) -> String {
        match self {
            RuleSource::File(path) => path.display().to_string(),
            RuleSource::Text(_) => "<inline>".to_string(),
        }
    }
}

/// Loads a [`RuleSet`] from a [`RuleSource`].
#[derive(Debug, Clone)]
pub struct RuleStore {
    source: RuleSource,
    parser: RuleParser,
}

impl RuleStore {
    pub fn new(source: RuleSource, parser: RuleParser) -> Self {
        Self { source, parser }
    }

    /// Store reading the file at `path` with the default dialect.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::new(RuleSource::File(path.into()), RuleParser::default())
    }

    /// Store over in-memory text with the default dialect.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self::new(RuleSource::Text(text.into()), RuleParser::default())
    }

    pub fn with_parser(mut self, parser: RuleParser) -> Self {
        self.parser = parser;
        self
    }

    pub fn source(&self) -> &RuleSource {
        &self.source
    }

    pub fn parser(&self) -> &RuleParser {
        &self.parser
    }

    /// Read and parse the whole source.
    pub fn load(&self) -> Result<RuleSet, LoadError> {
        let rules = match &self.source {
            RuleSource::File(path) => load_file(path, &self.parser)?,
            RuleSource::Text(text) => parse_rules(text, &self.parser)?,
        };
        info!(
            source = %self.source.origin(),
            rules = rules.len(),
            "loaded rule set"
        );
        Ok(rules)
    }
}

fn load_file(path: &Path, parser: &RuleParser) -> Result<RuleSet, LoadError> {
    let text = std::fs::read_to_string(path).map_err(|source| LoadError::SourceUnavailable {
        origin: path.display().to_string(),
        source,
    })?;
    parse_rules(&text, parser)
}

/// Read all of `reader` and parse it as rule text.
pub fn read_rules(
    mut reader: impl Read,
    origin: &str,
    parser: &RuleParser,
) -> Result<RuleSet, LoadError> {
    let mut text = String::new();
    reader
        .read_to_string(&mut text)
        .map_err(|source| LoadError::SourceUnavailable {
            origin: origin.to_string(),
            source,
        })?;
    parse_rules(&text, parser)
}

/// Parse rule text, one rule per line.
///
/// Blank lines and lines starting with `#` are skipped and take no rule
/// index. Error line numbers are physical, 1-based.
pub fn parse_rules(text: &str, parser: &RuleParser) -> Result<RuleSet, LoadError> {
    let mut rules = Vec::new();
    for (index, line) in text.lines().enumerate() {
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }
        let rule = parser.parse(trimmed).map_err(|source| LoadError::Parse {
            line: index + 1,
            source,
        })?;
        debug!(index = rules.len() + 1, %rule, "parsed rule");
        rules.push(rule);
    }
    Ok(RuleSet::new(rules))
}
