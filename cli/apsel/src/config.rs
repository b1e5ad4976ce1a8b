//! `apsel.toml` parsing and project configuration.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use apsel_infer::{InferenceEngine, RelevanceMode, DEFAULT_OUTPUTS};
use apsel_rules::{DialectKind, RuleParser, RuleStore};
use serde::{Deserialize, Serialize};

/// File name searched for when no configuration path is given.
pub const CONFIG_FILE: &str = "apsel.toml";

/// The top-level configuration structure. Every section is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ApselConfig {
    /// Rule source settings.
    pub rules: RulesConfig,
    /// Output and relevance settings.
    pub selection: SelectionConfig,
}

/// Rule source section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rule file, relative to the directory holding `apsel.toml`.
    pub path: PathBuf,
    /// Rule language dialect.
    pub dialect: DialectKind,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            path: PathBuf::from("rules.txt"),
            dialect: DialectKind::default(),
        }
    }
}

/// Selection section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    /// Candidate outputs, in relevance-column order.
    pub outputs: Vec<String>,
    /// How rules map onto outputs.
    pub relevance: RelevanceMode,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            outputs: DEFAULT_OUTPUTS.iter().map(|s| s.to_string()).collect(),
            relevance: RelevanceMode::default(),
        }
    }
}

impl ApselConfig {
    /// Search upward from `start_dir` for an `apsel.toml` file, parse and
    /// return it along with the directory it was found in.
    pub fn find_and_load(start_dir: &Path) -> Result<Option<(Self, PathBuf)>> {
        let mut dir = start_dir.to_path_buf();
        loop {
            let candidate = dir.join(CONFIG_FILE);
            if candidate.is_file() {
                let config = Self::load(&candidate)?;
                return Ok(Some((config, dir)));
            }
            if !dir.pop() {
                break;
            }
        }
        Ok(None)
    }

    /// Parse the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.is_file() {
            bail!("configuration file {} does not exist", path.display());
        }
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("parsing {}", path.display()))
    }

    /// Parse a configuration from a TOML string.
    #[cfg(test)]
    pub fn from_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing apsel.toml")
    }

    /// Generate the default template for `apsel init`.
    pub fn template() -> String {
        r#"[rules]
path = "rules.txt"
dialect = "english"

[selection]
outputs = ["A", "B", "C", "D"]
relevance = "positional"
"#
        .to_string()
    }
}

/// A configuration together with the directory its relative paths start from.
#[derive(Debug, Clone)]
pub struct Project {
    pub config: ApselConfig,
    pub root: PathBuf,
}

impl Project {
    /// Resolve the configuration: an explicit path wins, then `apsel.toml`
    /// found upward from `cwd`, then built-in defaults rooted at `cwd`.
    pub fn discover(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        if let Some(path) = explicit {
            let config = ApselConfig::load(path)?;
            let root = path
                .parent()
                .map(Path::to_path_buf)
                .unwrap_or_else(|| cwd.to_path_buf());
            tracing::debug!(config = %path.display(), "using explicit configuration");
            return Ok(Self { config, root });
        }
        match ApselConfig::find_and_load(cwd)? {
            Some((config, root)) => {
                tracing::debug!(root = %root.display(), "found {CONFIG_FILE}");
                Ok(Self { config, root })
            }
            None => Ok(Self {
                config: ApselConfig::default(),
                root: cwd.to_path_buf(),
            }),
        }
    }

    /// Rule file path, honoring a command-line override.
    pub fn rules_path(&self, rules_override: Option<&Path>) -> PathBuf {
        match rules_override {
            Some(path) => path.to_path_buf(),
            None => self.root.join(&self.config.rules.path),
        }
    }

    pub fn parser(&self) -> RuleParser {
        RuleParser::new(self.config.rules.dialect.dialect())
    }

    pub fn store(&self, rules_override: Option<&Path>) -> RuleStore {
        RuleStore::open(self.rules_path(rules_override)).with_parser(self.parser())
    }

    pub fn engine(&self, rules_override: Option<&Path>) -> InferenceEngine {
        InferenceEngine::new(self.store(rules_override))
            .with_outputs(self.config.selection.outputs.clone())
            .with_relevance(self.config.selection.relevance)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_full_config() {
        let toml_str = r#"
[rules]
path = "knowledge/rules.txt"
dialect = "russian"

[selection]
outputs = ["А", "Б", "В", "Г"]
relevance = "by-label"
"#;
        let config = ApselConfig::from_str(toml_str).unwrap();
        assert_eq!(config.rules.path, PathBuf::from("knowledge/rules.txt"));
        assert_eq!(config.rules.dialect, DialectKind::Russian);
        assert_eq!(config.selection.outputs.len(), 4);
        assert_eq!(config.selection.relevance, RelevanceMode::ByLabel);
    }

    #[test]
    fn empty_config_uses_defaults() {
        let config = ApselConfig::from_str("").unwrap();
        assert_eq!(config, ApselConfig::default());
        assert_eq!(config.rules.path, PathBuf::from("rules.txt"));
        assert_eq!(config.selection.outputs, ["A", "B", "C", "D"]);
        assert_eq!(config.selection.relevance, RelevanceMode::Positional);
    }

    #[test]
    fn partial_section_keeps_other_defaults() {
        let config = ApselConfig::from_str("[rules]\ndialect = \"russian\"\n").unwrap();
        assert_eq!(config.rules.path, PathBuf::from("rules.txt"));
        assert_eq!(config.rules.dialect, DialectKind::Russian);
    }

    #[test]
    fn reject_invalid_toml() {
        assert!(ApselConfig::from_str("this is not valid toml [[[").is_err());
        assert!(ApselConfig::from_str("[selection]\nrelevance = \"sideways\"\n").is_err());
    }

    #[test]
    fn template_is_valid_toml() {
        let config = ApselConfig::from_str(&ApselConfig::template()).unwrap();
        assert_eq!(config, ApselConfig::default());
    }

    #[test]
    fn find_and_load_walks_up() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join(CONFIG_FILE), "[rules]\npath = \"r.txt\"\n").unwrap();

        let nested = dir.path().join("a").join("b");
        std::fs::create_dir_all(&nested).unwrap();

        let (config, found_dir) = ApselConfig::find_and_load(&nested).unwrap().unwrap();
        assert_eq!(config.rules.path, PathBuf::from("r.txt"));
        assert_eq!(found_dir, dir.path());
    }

    #[test]
    fn explicit_config_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.toml");
        let err = Project::discover(Some(&missing), dir.path()).unwrap_err();
        assert!(err.to_string().contains("does not exist"));
    }

    #[test]
    fn rules_path_is_relative_to_config_dir() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("custom.toml");
        std::fs::write(&config_path, "[rules]\npath = \"kb/rules.txt\"\n").unwrap();

        let project = Project::discover(Some(&config_path), Path::new("/")).unwrap();
        assert_eq!(project.rules_path(None), dir.path().join("kb/rules.txt"));
        assert_eq!(
            project.rules_path(Some(Path::new("/tmp/other.txt"))),
            PathBuf::from("/tmp/other.txt")
        );
    }
}
