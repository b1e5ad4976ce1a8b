//! `apsel infer` — select apparatuses for one pair of readings.

use std::path::Path;

use anyhow::{bail, Context, Result};
use apsel_infer::Report;

use crate::config::Project;

pub fn run(
    project: &Project,
    rules_override: Option<&Path>,
    input1: f64,
    input2: f64,
    format: Option<&str>,
) -> Result<()> {
    let report = execute(project, rules_override, input1, input2)?;
    print!("{}", render(&report, format)?);
    Ok(())
}

pub(crate) fn execute(
    project: &Project,
    rules_override: Option<&Path>,
    input1: f64,
    input2: f64,
) -> Result<Report> {
    project
        .engine(rules_override)
        .infer(input1, input2)
        .with_context(|| format!("inferring for G={input1}, T={input2}"))
}

pub(crate) fn render(report: &Report, format: Option<&str>) -> Result<String> {
    match format.unwrap_or("text") {
        "text" => Ok(report.to_string()),
        "json" => {
            let mut json = serde_json::to_string_pretty(report).context("serializing report")?;
            json.push('\n');
            Ok(json)
        }
        other => bail!("unknown format '{other}' (expected: text, json)"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApselConfig;

    const RULES: &str = "\
IF input1=Small AND input2=Medium THEN A
IF input1=Medium AND (input2=Small OR input2=Big) THEN B
IF input1=Big AND input2=Big THEN C
IF input1=SlightlySmall AND input2=Small OR input1=Medium AND input2=Medium THEN D
";

    fn project_with_rules(rules: &str) -> (tempfile::TempDir, Project) {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("rules.txt"), rules).unwrap();
        let project = Project {
            config: ApselConfig::default(),
            root: dir.path().to_path_buf(),
        };
        (dir, project)
    }

    #[test]
    fn infer_reads_configured_rules() {
        let (_dir, project) = project_with_rules(RULES);
        let report = execute(&project, None, 75.1, 125.0).unwrap();
        assert_eq!(report.decision(), "A");
        assert_eq!(report.strengths, vec![1.0, 0.16, 0.11, 0.56]);
    }

    #[test]
    fn rules_override_wins() {
        let (dir, project) = project_with_rules("this is not a rule\n");
        let other = dir.path().join("other.txt");
        std::fs::write(&other, RULES).unwrap();

        assert!(execute(&project, None, 75.1, 125.0).is_err());
        let report = execute(&project, Some(&other), 75.1, 125.0).unwrap();
        assert_eq!(report.decision(), "A");
    }

    #[test]
    fn errors_carry_the_inputs() {
        let (_dir, project) = project_with_rules(RULES);
        let err = execute(&project, None, 65.0, 130.0).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("G=65"));
        assert!(msg.contains("[70, 110]"));
    }

    #[test]
    fn render_text_and_json() {
        let (_dir, project) = project_with_rules(RULES);
        let report = execute(&project, None, 75.1, 125.0).unwrap();

        let text = render(&report, None).unwrap();
        assert!(text.ends_with("Selected apparatuses: A\n"));

        let json = render(&report, Some("json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["winners"][0], "A");
        assert_eq!(value["strengths"].as_array().unwrap().len(), 4);

        assert!(render(&report, Some("yaml")).is_err());
    }
}
