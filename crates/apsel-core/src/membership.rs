//! Membership models for the two input quantities.
//!
//! Every degree function is total: it accepts any real number, including
//! values outside [`MembershipModel::scope`], and always returns a value in
//! `[0, 1]`. Rejecting out-of-scope readings is the caller's job.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::math::{clamp_unit, round2};
use crate::rule::{Category, Variable};
use crate::scope::Scope;

/// Degree functions of one input quantity over the categories small, medium
/// and big, plus the valid domain of that quantity.
pub trait MembershipModel: Send + Sync {
    fn degree_small(&self, x: f64) -> f64;
    fn degree_medium(&self, x: f64) -> f64;
    fn degree_big(&self, x: f64) -> f64;
    fn scope(&self) -> Scope;

    /// All three degrees at `x`, each rounded to two decimal places.
    fn degrees(&self, x: f64) -> MembershipDegrees {
        MembershipDegrees {
            small: round2(self.degree_small(x)),
            medium: round2(self.degree_medium(x)),
            big: round2(self.degree_big(x)),
        }
    }
}

/// The `(small, medium, big)` degrees of one input.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct MembershipDegrees {
    pub small: f64,
    pub medium: f64,
    pub big: f64,
}

impl MembershipDegrees {
    /// Degree of a base category. `SlightlySmall` is derived by the
    /// inference stage and has no entry here.
    pub fn get(&self, category: Category) -> Option<f64> {
        match category {
            Category::Small => Some(self.small),
            Category::Medium => Some(self.medium),
            Category::Big => Some(self.big),
            Category::SlightlySmall => None,
        }
    }
}

/// Raw-material flow rate `G`: bell-shaped categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct FlowRateModel;

impl FlowRateModel {
    pub const SCOPE: Scope = Scope::new(70.0, 110.0);
    pub const SMALL_CENTER: f64 = 75.1;
    pub const MEDIUM_CENTER: f64 = 85.1;
    pub const BIG_CENTER: f64 = 100.1;

    /// `(10·|x − c|)^(−2/5)`, which saturates to 1 within 0.1 of the center.
    fn bell(x: f64, center: f64) -> f64 {
        clamp_unit((10.0 * (x - center).abs()).powf(-0.4))
    }
}

impl MembershipModel for FlowRateModel {
    fn degree_small(&self, x: f64) -> f64 {
        Self::bell(x, Self::SMALL_CENTER)
    }

    fn degree_medium(&self, x: f64) -> f64 {
        Self::bell(x, Self::MEDIUM_CENTER)
    }

    fn degree_big(&self, x: f64) -> f64 {
        Self::bell(x, Self::BIG_CENTER)
    }

    fn scope(&self) -> Scope {
        Self::SCOPE
    }
}

/// Process temperature `T`: parabolic categories.
#[derive(Debug, Clone, Copy, Default)]
pub struct TemperatureModel;

impl TemperatureModel {
    pub const SCOPE: Scope = Scope::new(110.0, 150.0);
}

impl MembershipModel for TemperatureModel {
    fn degree_small(&self, x: f64) -> f64 {
        clamp_unit((x - 200.0).powi(2) / 10_000.0)
    }

    fn degree_medium(&self, x: f64) -> f64 {
        clamp_unit(1.0 - (125.0 - x).powi(2) / 1_000.0)
    }

    fn degree_big(&self, x: f64) -> f64 {
        clamp_unit((x - 50.0).powi(2) / 10_000.0)
    }

    fn scope(&self) -> Scope {
        Self::SCOPE
    }
}

/// Which of the two fixed models to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ModelKind {
    FlowRate,
    Temperature,
}

impl ModelKind {
    pub const ALL: [ModelKind; 2] = [ModelKind::FlowRate, ModelKind::Temperature];

    /// The rule variable this model feeds.
    pub fn variable(self) -> Variable {
        match self {
            ModelKind::FlowRate => Variable::Input1,
            ModelKind::Temperature => Variable::Input2,
        }
    }

    /// Short physical symbol used in messages.
    pub fn symbol(self) -> &'static str {
        match self {
            ModelKind::FlowRate => "G",
            ModelKind::Temperature => "T",
        }
    }
}

impl fmt::Display for ModelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ModelKind::FlowRate => write!(f, "flow-rate"),
            ModelKind::Temperature => write!(f, "temperature"),
        }
    }
}

static FLOW_RATE: FlowRateModel = FlowRateModel;
static TEMPERATURE: TemperatureModel = TemperatureModel;

/// The shared, immutable model for `kind`.
pub fn membership_model(kind: ModelKind) -> &'static dyn MembershipModel {
    match kind {
        ModelKind::FlowRate => &FLOW_RATE,
        ModelKind::Temperature => &TEMPERATURE,
    }
}
