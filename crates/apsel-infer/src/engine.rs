//! Inference engine orchestrator.
//!
//! Ties fuzzification, rule evaluation, relevance scoring and winner
//! selection into a single `infer()` pipeline. The rule set is reloaded
//! on every call.

use apsel_core::math::round2;
use apsel_core::{membership_model, ModelKind, RuleSet};
use apsel_rules::RuleStore;
use tracing::{debug, info};

use crate::error::{Bound, InferError, Result};
use crate::fuzzify::Fuzzified;
use crate::relevance::Relevance;
use crate::report::Report;
use crate::scoring::{score_outputs, select_winners};

/// Candidate outputs used when none are configured.
pub const DEFAULT_OUTPUTS: [&str; 4] = ["A", "B", "C", "D"];

/// The main inference engine.
#[derive(Debug, Clone)]
pub struct InferenceEngine {
    store: RuleStore,
    outputs: Vec<String>,
    relevance: Relevance,
}

impl InferenceEngine {
    /// Engine over `store` with the default outputs and positional
    /// relevance.
    pub fn new(store: RuleStore) -> Self {
        Self {
            store,
            outputs: DEFAULT_OUTPUTS.iter().map(|s| s.to_string()).collect(),
            relevance: Relevance::Positional,
        }
    }

    pub fn with_outputs(mut self, outputs: Vec<String>) -> Self {
        self.outputs = outputs;
        self
    }

    pub fn with_relevance(mut self, relevance: impl Into<Relevance>) -> Self {
        self.relevance = relevance.into();
        self
    }

    pub fn outputs(&self) -> &[String] {
        &self.outputs
    }

    pub fn store(&self) -> &RuleStore {
        &self.store
    }

    /// Run the full pipeline on a flow rate and a temperature.
    ///
    /// Both readings are validated before the rule source is touched.
    pub fn infer(&self, input1: f64, input2: f64) -> Result<Report> {
        let degrees = fuzzify(input1, input2)?;
        let rules = self.store.load()?;
        self.decide(&rules, input1, input2, degrees)
    }

    /// Load the rules and resolve them against the outputs without reading
    /// any input.
    pub fn check(&self) -> Result<RuleSet> {
        let rules = self.store.load()?;
        self.relevance.resolve(&rules, &self.outputs)?;
        Ok(rules)
    }

    /// Run the pipeline against an already loaded rule set.
    pub fn evaluate(&self, rules: &RuleSet, input1: f64, input2: f64) -> Result<Report> {
        let degrees = fuzzify(input1, input2)?;
        self.decide(rules, input1, input2, degrees)
    }

    fn decide(
        &self,
        rules: &RuleSet,
        input1: f64,
        input2: f64,
        degrees: Fuzzified,
    ) -> Result<Report> {
        let relation = self.relevance.resolve(rules, &self.outputs)?;

        let strengths: Vec<f64> = rules
            .iter()
            .enumerate()
            .map(|(i, rule)| {
                let strength = round2(rule.strength(|c| degrees.degree(c)));
                debug!(rule = i + 1, strength, "rule fired");
                strength
            })
            .collect();

        let scores = score_outputs(&strengths, &self.outputs, &relation)?;
        for s in &scores {
            debug!(output = %s.label, score = s.score, "output scored");
        }

        let winners = select_winners(&scores);
        info!(input1, input2, winners = %winners.join(", "), "selection made");

        Ok(Report {
            input1,
            input2,
            degrees,
            strengths,
            scores,
            winners,
        })
    }
}

/// Check `value` against the scope of `kind`'s model.
fn check_scope(kind: ModelKind, value: f64) -> Result<()> {
    let scope = membership_model(kind).scope();
    if scope.contains(value) {
        return Ok(());
    }
    // NaN fails both comparisons; report it against the start.
    let bound = if value > scope.end() {
        Bound::End
    } else {
        Bound::Start
    };
    Err(InferError::OutOfScope {
        input: kind,
        value,
        bound,
        start: scope.start(),
        end: scope.end(),
    })
}

fn fuzzify(input1: f64, input2: f64) -> Result<Fuzzified> {
    check_scope(ModelKind::FlowRate, input1)?;
    check_scope(ModelKind::Temperature, input2)?;
    Ok(Fuzzified::new(
        membership_model(ModelKind::FlowRate).degrees(input1),
        membership_model(ModelKind::Temperature).degrees(input2),
    ))
}
