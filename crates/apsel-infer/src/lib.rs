//! Fuzzy inference engine for the apparatus selector.
//!
//! Given a flow rate `G` and a process temperature `T`, the engine
//! fuzzifies both readings, evaluates every rule of a freshly loaded rule
//! set, propagates the firing strengths to the candidate outputs through a
//! 0/1 relevance relation, and reports every output that reaches the
//! maximum score.
//!
//! ## Modules
//!
//! - [`fuzzify`] — membership degrees of both inputs
//! - [`relevance`] — the rule-to-output relevance relation
//! - [`scoring`] — output scores and winner selection
//! - [`engine`] — the [`InferenceEngine`] pipeline
//! - [`report`] — the [`Report`] handed to front ends

pub mod engine;
pub mod error;
pub mod fuzzify;
pub mod relevance;
pub mod report;
pub mod scoring;

pub use engine::{InferenceEngine, DEFAULT_OUTPUTS};
pub use error::{Bound, InferError};
pub use fuzzify::Fuzzified;
pub use relevance::{Relevance, RelevanceMatrix, RelevanceMode};
pub use report::{OutputScore, Report};
