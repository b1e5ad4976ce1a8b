//! Membership models and rule data model for the apparatus selector.
//!
//! Two continuous readings drive the selection: the raw-material flow rate
//! (input 1, `G`) and the process temperature (input 2, `T`). Each reading is
//! mapped onto the linguistic categories *small*, *medium* and *big* by a
//! fixed [`MembershipModel`]. Rules over those categories are kept in
//! disjunctive normal form (an OR of AND-groups).
//!
//! ## Modules
//!
//! - [`scope`] — inclusive input domains
//! - [`membership`] — flow-rate and temperature membership models
//! - [`rule`] — variables, categories, conditions, rules and rule sets
//! - [`curve`] — sampling of membership curves for charting
//! - [`math`] — rounding and clamping helpers shared by the pipeline

pub mod curve;
pub mod error;
pub mod math;
pub mod membership;
pub mod rule;
pub mod scope;

pub use curve::{sample_curve, CurvePoint};
pub use error::CoreError;
pub use membership::{
    membership_model, FlowRateModel, MembershipDegrees, MembershipModel, ModelKind,
    TemperatureModel,
};
pub use rule::{Category, Condition, Rule, RuleSet, Variable};
pub use scope::Scope;
