//! Rule language for the apparatus selector.
//!
//! Rules are written one per line:
//!
//! ```text
//! IF input1=Small AND (input2=Medium OR input2=Big) THEN A
//! ```
//!
//! and parsed into [`apsel_core::Rule`] values in disjunctive normal form.
//!
//! ## Modules
//!
//! - [`dialect`] — fixed keyword and vocabulary tables (English, Russian)
//! - [`lexer`] — tokenizer for condition expressions
//! - [`parser`] — recursive-descent [`RuleParser`]
//! - [`store`] — [`RuleStore`], loading whole rule files fail-fast

pub mod dialect;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod store;

pub use dialect::{Dialect, DialectKind};
pub use error::{LoadError, ParseError};
pub use parser::RuleParser;
pub use store::{parse_rules, read_rules, RuleSource, RuleStore};
