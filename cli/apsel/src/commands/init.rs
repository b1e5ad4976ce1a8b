//! `apsel init` — scaffold a configuration and sample rule file.

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};

use crate::config::{ApselConfig, CONFIG_FILE};

/// Sample rules for the default outputs A through D.
pub const SAMPLE_RULES: &str = "\
# One rule per line. Blank lines and lines starting with '#' are ignored.
# Variables: input1 (flow rate G), input2 (temperature T).
# Values: SlightlySmall (input1 only), Small, Medium, Big.
IF input1=Small AND input2=Medium THEN A
IF input1=Medium AND (input2=Small OR input2=Big) THEN B
IF input1=Big AND input2=Big THEN C
IF input1=SlightlySmall AND input2=Small OR input1=Medium AND input2=Medium THEN D
";

/// Create a new project directory at `path`.
pub fn run(path: &Path) -> Result<()> {
    create_project(path)
}

pub(crate) fn create_project(project_dir: &Path) -> Result<()> {
    if project_dir.exists() {
        bail!("directory '{}' already exists", project_dir.display());
    }

    fs::create_dir_all(project_dir)
        .with_context(|| format!("creating {}", project_dir.display()))?;
    fs::write(project_dir.join(CONFIG_FILE), ApselConfig::template())
        .with_context(|| format!("writing {CONFIG_FILE}"))?;
    fs::write(project_dir.join("rules.txt"), SAMPLE_RULES).context("writing rules.txt")?;

    let name = project_dir.display();
    println!("Created project '{name}'");
    println!("  {name}/{CONFIG_FILE}");
    println!("  {name}/rules.txt");

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apsel_rules::{parse_rules, RuleParser};

    #[test]
    fn init_creates_project_files() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("plant");

        create_project(&project_path).unwrap();

        assert!(project_path.join(CONFIG_FILE).is_file());
        assert!(project_path.join("rules.txt").is_file());
    }

    #[test]
    fn init_generates_valid_config() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("valid-config");
        create_project(&project_path).unwrap();

        let config = ApselConfig::load(&project_path.join(CONFIG_FILE)).unwrap();
        assert_eq!(config, ApselConfig::default());
    }

    #[test]
    fn sample_rules_parse() {
        let rules = parse_rules(SAMPLE_RULES, &RuleParser::default()).unwrap();
        assert_eq!(rules.len(), 4);
    }

    #[test]
    fn init_rejects_existing_dir() {
        let dir = tempfile::tempdir().unwrap();
        let project_path = dir.path().join("exists");
        fs::create_dir_all(&project_path).unwrap();

        let err = create_project(&project_path).unwrap_err();
        assert!(err.to_string().contains("already exists"));
    }
}
