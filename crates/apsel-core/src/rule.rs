//! Rule data model: fuzzy predicates combined in disjunctive normal form.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{CoreError, Result};

/// One of the two input quantities a condition can reference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Variable {
    /// Raw-material flow rate `G`.
    Input1,
    /// Process temperature `T`.
    Input2,
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Variable::Input1 => write!(f, "input1"),
            Variable::Input2 => write!(f, "input2"),
        }
    }
}

/// Linguistic category of a condition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Category {
    /// Square root of the small degree. Only input 1 carries it.
    SlightlySmall,
    Small,
    Medium,
    Big,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Category::SlightlySmall => write!(f, "SlightlySmall"),
            Category::Small => write!(f, "Small"),
            Category::Medium => write!(f, "Medium"),
            Category::Big => write!(f, "Big"),
        }
    }
}

/// A single fuzzy predicate such as "input1 is Small".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Condition {
    pub variable: Variable,
    pub category: Category,
}

impl Condition {
    pub fn new(variable: Variable, category: Category) -> Self {
        Self { variable, category }
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.variable, self.category)
    }
}

/// A parsed rule: an output label and an OR of AND-groups.
///
/// A rule always holds at least one group and every group at least one
/// condition.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Rule {
    output_label: String,
    groups: Vec<Vec<Condition>>,
}

impl Rule {
    /// Build a rule, rejecting an empty expression or an empty group.
    pub fn new(output_label: impl Into<String>, groups: Vec<Vec<Condition>>) -> Result<Self> {
        let output_label = output_label.into();
        if groups.is_empty() || groups.iter().any(Vec::is_empty) {
            return Err(CoreError::EmptyExpression {
                label: output_label,
            });
        }
        Ok(Self {
            output_label,
            groups,
        })
    }

    pub fn output_label(&self) -> &str {
        &self.output_label
    }

    /// The AND-groups, in source order.
    pub fn groups(&self) -> &[Vec<Condition>] {
        &self.groups
    }

    /// Every condition of the rule, group after group.
    pub fn conditions(&self) -> impl Iterator<Item = &Condition> {
        self.groups.iter().flatten()
    }

    /// Firing strength: max over groups of the min over each group's
    /// condition degrees, with `degree` supplying one condition's degree.
    pub fn strength(&self, mut degree: impl FnMut(&Condition) -> f64) -> f64 {
        self.groups.iter().fold(0.0_f64, |strongest, group| {
            let weakest = group
                .iter()
                .fold(1.0, |acc: f64, condition| acc.min(degree(condition)));
            strongest.max(weakest)
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IF ")?;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " OR ")?;
            }
            for (j, condition) in group.iter().enumerate() {
                if j > 0 {
                    write!(f, " AND ")?;
                }
                write!(f, "{condition}")?;
            }
        }
        write!(f, " THEN {}", self.output_label)
    }
}

/// Ordered rules. Position matters: the relevance relation is indexed by it.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RuleSet(Vec<Rule>);

impl RuleSet {
    pub fn new(rules: Vec<Rule>) -> Self {
        Self(rules)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Rule> {
        self.0.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Rule> {
        self.0.iter()
    }
}

impl<'a> IntoIterator for &'a RuleSet {
    type Item = &'a Rule;
    type IntoIter = std::slice::Iter<'a, Rule>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cond(variable: Variable, category: Category) -> Condition {
        Condition::new(variable, category)
    }

    #[test]
    fn rejects_empty_expression() {
        let err = Rule::new("A", vec![]).unwrap_err();
        assert!(matches!(err, CoreError::EmptyExpression { ref label } if label == "A"));
        assert!(Rule::new("A", vec![vec![]]).is_err());
        let groups = vec![vec![cond(Variable::Input1, Category::Small)], vec![]];
        assert!(Rule::new("A", groups).is_err());
    }

    #[test]
    fn strength_is_max_of_group_minimums() {
        let rule = Rule::new(
            "B",
            vec![
                vec![
                    cond(Variable::Input1, Category::Small),
                    cond(Variable::Input2, Category::Medium),
                ],
                vec![cond(Variable::Input1, Category::Big)],
            ],
        )
        .unwrap();

        let degree = |c: &Condition| match (c.variable, c.category) {
            (Variable::Input1, Category::Small) => 0.8,
            (Variable::Input2, Category::Medium) => 0.3,
            (Variable::Input1, Category::Big) => 0.25,
            _ => 0.0,
        };
        assert_eq!(rule.strength(degree), 0.3);
    }

    #[test]
    fn display_is_canonical_dnf() {
        let rule = Rule::new(
            "B",
            vec![
                vec![
                    cond(Variable::Input1, Category::Small),
                    cond(Variable::Input2, Category::Medium),
                ],
                vec![cond(Variable::Input1, Category::Big)],
            ],
        )
        .unwrap();
        assert_eq!(
            rule.to_string(),
            "IF input1=Small AND input2=Medium OR input1=Big THEN B"
        );
        assert_eq!(rule.conditions().count(), 3);
    }

    #[test]
    fn rule_set_keeps_order() {
        let a = Rule::new("A", vec![vec![cond(Variable::Input1, Category::Small)]]).unwrap();
        let b = Rule::new("B", vec![vec![cond(Variable::Input2, Category::Big)]]).unwrap();
        let set = RuleSet::new(vec![a.clone(), b.clone()]);
        assert_eq!(set.len(), 2);
        assert_eq!(set.get(0), Some(&a));
        let labels: Vec<_> = set.iter().map(Rule::output_label).collect();
        assert_eq!(labels, ["A", "B"]);
        assert!(RuleSet::default().is_empty());
    }
}
