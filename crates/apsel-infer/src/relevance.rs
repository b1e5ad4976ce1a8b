//! The 0/1 relation telling which rule is relevant to which output.

use apsel_core::RuleSet;
use serde::{Deserialize, Serialize};

use crate::error::{InferError, Result};

/// A rows × columns matrix of 0/1 entries: one row per rule, one column per
/// output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelevanceMatrix {
    rows: usize,
    cols: usize,
    cells: Vec<u8>,
}

impl RelevanceMatrix {
    /// Rule `i` relevant to output `i` only.
    pub fn identity(n: usize) -> Self {
        let mut cells = vec![0; n * n];
        for i in 0..n {
            cells[i * n + i] = 1;
        }
        Self {
            rows: n,
            cols: n,
            cells,
        }
    }

    /// Build from explicit rows. Rows must share one length and hold only
    /// 0 or 1.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self> {
        let cols = rows.first().map_or(0, Vec::len);
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != cols {
                return Err(InferError::ConfigurationMismatch {
                    detail: format!(
                        "relevance row {} has {} entries, expected {cols}",
                        i + 1,
                        row.len()
                    ),
                });
            }
            if let Some(bad) = row.iter().find(|&&v| v > 1) {
                return Err(InferError::ConfigurationMismatch {
                    detail: format!("relevance row {} holds {bad}; entries must be 0 or 1", i + 1),
                });
            }
            cells.extend_from_slice(row);
        }
        Ok(Self {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Row `i` has a 1 in the column of the output named by rule `i`'s
    /// label.
    pub fn by_label(rules: &RuleSet, outputs: &[String]) -> Result<Self> {
        let cols = outputs.len();
        let mut cells = vec![0; rules.len() * cols];
        for (i, rule) in rules.iter().enumerate() {
            let col = outputs
                .iter()
                .position(|o| o == rule.output_label())
                .ok_or_else(|| InferError::ConfigurationMismatch {
                    detail: format!(
                        "rule {} names output '{}', which is not among [{}]",
                        i + 1,
                        rule.output_label(),
                        outputs.join(", ")
                    ),
                })?;
            cells[i * cols + col] = 1;
        }
        Ok(Self {
            rows: rules.len(),
            cols,
            cells,
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Entry at (`rule`, `output`).
    ///
    /// # Panics
    ///
    /// Panics if either index is out of range.
    pub fn get(&self, rule: usize, output: usize) -> u8 {
        assert!(rule < self.rows && output < self.cols, "relevance index out of range");
        self.cells[rule * self.cols + output]
    }
}

/// How the relevance relation is obtained, as chosen in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RelevanceMode {
    /// Identity over the declared outputs; rule `i` feeds output `i`.
    #[default]
    Positional,
    /// Each rule feeds the output its label names.
    ByLabel,
}

/// The relevance relation an engine scores with.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Relevance {
    #[default]
    Positional,
    ByLabel,
    Fixed(RelevanceMatrix),
}

impl From<RelevanceMode> for Relevance {
    fn from(mode: RelevanceMode) -> Self {
        match mode {
            RelevanceMode::Positional => Relevance::Positional,
            RelevanceMode::ByLabel => Relevance::ByLabel,
        }
    }
}

impl Relevance {
    /// Materialize the matrix for `rules` against `outputs`.
    ///
    /// Positional relevance requires as many rules as outputs, in output
    /// order.
    pub fn resolve(&self, rules: &RuleSet, outputs: &[String]) -> Result<RelevanceMatrix> {
        match self {
            Relevance::Positional => {
                if rules.len() != outputs.len() {
                    return Err(InferError::ConfigurationMismatch {
                        detail: format!(
                            "positional relevance needs one rule per output: {} rules, {} outputs",
                            rules.len(),
                            outputs.len()
                        ),
                    });
                }
                Ok(RelevanceMatrix::identity(outputs.len()))
            }
            Relevance::ByLabel => RelevanceMatrix::by_label(rules, outputs),
            Relevance::Fixed(matrix) => Ok(matrix.clone()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use apsel_rules::{parse_rules, RuleParser};

    fn outputs(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn identity_has_ones_on_diagonal() {
        let m = RelevanceMatrix::identity(4);
        assert_eq!((m.rows(), m.cols()), (4, 4));
        for r in 0..4 {
            for c in 0..4 {
                assert_eq!(m.get(r, c), u8::from(r == c));
            }
        }
    }

    #[test]
    fn from_rows_validates_shape_and_entries() {
        let m = RelevanceMatrix::from_rows(vec![vec![1, 0], vec![1, 1], vec![0, 1]]).unwrap();
        assert_eq!((m.rows(), m.cols()), (3, 2));
        assert_eq!(m.get(1, 1), 1);

        let ragged = RelevanceMatrix::from_rows(vec![vec![1, 0], vec![1]]);
        assert!(matches!(ragged, Err(InferError::ConfigurationMismatch { .. })));
        let non_binary = RelevanceMatrix::from_rows(vec![vec![2, 0]]);
        assert!(matches!(non_binary, Err(InferError::ConfigurationMismatch { .. })));
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn get_out_of_range_panics() {
        RelevanceMatrix::identity(2).get(2, 0);
    }

    #[test]
    fn by_label_maps_rules_to_named_outputs() {
        let rules = parse_rules(
            "IF input1=Small THEN C\nIF input1=Big THEN A\nIF input2=Big THEN C\n",
            &RuleParser::default(),
        )
        .unwrap();
        let m = RelevanceMatrix::by_label(&rules, &outputs(&["A", "B", "C"])).unwrap();
        assert_eq!((m.rows(), m.cols()), (3, 3));
        assert_eq!(m.get(0, 2), 1);
        assert_eq!(m.get(1, 0), 1);
        assert_eq!(m.get(2, 2), 1);
        assert_eq!(m.get(0, 0), 0);
    }

    #[test]
    fn by_label_rejects_undeclared_output() {
        let rules = parse_rules("IF input1=Small THEN Z\n", &RuleParser::default()).unwrap();
        let err = RelevanceMatrix::by_label(&rules, &outputs(&["A", "B"])).unwrap_err();
        assert!(err.to_string().contains("'Z'"));
    }

    #[test]
    fn positional_requires_matching_counts() {
        let rules = parse_rules("IF input1=Small THEN A\n", &RuleParser::default()).unwrap();
        let err = Relevance::Positional
            .resolve(&rules, &outputs(&["A", "B"]))
            .unwrap_err();
        assert!(matches!(err, InferError::ConfigurationMismatch { .. }));

        let m = Relevance::Positional
            .resolve(&rules, &outputs(&["A"]))
            .unwrap();
        assert_eq!(m, RelevanceMatrix::identity(1));
    }

    #[test]
    fn modes_convert() {
        assert_eq!(Relevance::from(RelevanceMode::ByLabel), Relevance::ByLabel);
        assert_eq!(Relevance::from(RelevanceMode::default()), Relevance::Positional);
    }
}
