//! `apsel check` — load and validate the rule file without inferring.

use std::path::Path;

use anyhow::{Context, Result};
use apsel_core::RuleSet;
use apsel_infer::{InferenceEngine, RelevanceMode};

use crate::config::Project;

pub fn run(project: &Project, rules_override: Option<&Path>) -> Result<()> {
    let engine = project.engine(rules_override);
    let rules = validate(&engine)?;

    let store = engine.store();
    println!(
        "{} rules from {} ({} dialect)",
        rules.len(),
        store.source().origin(),
        store.parser().dialect().name
    );
    for (i, rule) in rules.iter().enumerate() {
        println!("  {:>2}. {rule}", i + 1);
    }
    println!(
        "Outputs: {} ({})",
        engine.outputs().join(", "),
        relevance_name(project.config.selection.relevance)
    );
    Ok(())
}

/// Load the rules and resolve them against the engine's outputs.
pub(crate) fn validate(engine: &InferenceEngine) -> Result<RuleSet> {
    engine.check().context("checking rules")
}

fn relevance_name(mode: RelevanceMode) -> &'static str {
    match mode {
        RelevanceMode::Positional => "positional",
        RelevanceMode::ByLabel => "by label",
    }
}
