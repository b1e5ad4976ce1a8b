//! Keyword and vocabulary tables of the rule language.
//!
//! The tables are fixed. A dialect decides how rules are spelled, never what
//! they mean: both dialects produce the same [`Variable`]s and [`Category`]s.

use std::fmt;

use apsel_core::{Category, Variable};
use serde::{Deserialize, Serialize};

/// Spelling of the rule language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dialect {
    pub name: &'static str,
    /// Optional leading keyword, stripped before parsing.
    pub prefix: &'static str,
    /// Word separating the condition from the output label.
    pub separator: &'static str,
    pub and: &'static str,
    pub or: &'static str,
    variables: &'static [(&'static str, Variable)],
    categories: &'static [(&'static str, Category)],
}

impl Dialect {
    pub const ENGLISH: Dialect = Dialect {
        name: "english",
        prefix: "IF",
        separator: "THEN",
        and: "AND",
        or: "OR",
        variables: &[
            ("input1", Variable::Input1),
            ("flow_rate", Variable::Input1),
            ("G", Variable::Input1),
            ("input2", Variable::Input2),
            ("temperature", Variable::Input2),
            ("T", Variable::Input2),
        ],
        categories: &[
            ("SlightlySmall", Category::SlightlySmall),
            ("slightly_small", Category::SlightlySmall),
            ("Small", Category::Small),
            ("small", Category::Small),
            ("Medium", Category::Medium),
            ("medium", Category::Medium),
            ("Big", Category::Big),
            ("big", Category::Big),
        ],
    };

    pub const RUSSIAN: Dialect = Dialect {
        name: "russian",
        prefix: "ЕСЛИ",
        separator: "ТО",
        and: "И",
        or: "ИЛИ",
        variables: &[
            ("расход_сырья", Variable::Input1),
            ("температура_процесса", Variable::Input2),
        ],
        categories: &[
            ("слегка_малый", Category::SlightlySmall),
            ("слегка_малая", Category::SlightlySmall),
            ("малый", Category::Small),
            ("малая", Category::Small),
            ("средний", Category::Medium),
            ("средняя", Category::Medium),
            ("большой", Category::Big),
            ("большая", Category::Big),
        ],
    };

    /// Look up a variable name.
    pub fn variable(&self, name: &str) -> Option<Variable> {
        self.variables
            .iter()
            .find(|(word, _)| *word == name)
            .map(|(_, variable)| *variable)
    }

    /// Look up a category name.
    pub fn category(&self, value: &str) -> Option<Category> {
        self.categories
            .iter()
            .find(|(word, _)| *word == value)
            .map(|(_, category)| *category)
    }
}

impl Default for Dialect {
    fn default() -> Self {
        Dialect::ENGLISH
    }
}

/// Configuration-level selector for a [`Dialect`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DialectKind {
    #[default]
    English,
    Russian,
}

impl DialectKind {
    pub fn dialect(self) -> &'static Dialect {
        match self {
            DialectKind::English => &Dialect::ENGLISH,
            DialectKind::Russian => &Dialect::RUSSIAN,
        }
    }
}

impl fmt::Display for DialectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.dialect().name)
    }
}
