//! Membership degrees of both inputs for one inference call.

use apsel_core::{Category, Condition, MembershipDegrees, Variable};
use serde::Serialize;

/// Rounded degrees of both inputs plus the derived slightly-small degree of
/// input 1.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Fuzzified {
    pub input1: MembershipDegrees,
    pub input2: MembershipDegrees,
    /// `sqrt(input1.small)`, taken from the already rounded small degree.
    pub input1_slightly_small: f64,
}

impl Fuzzified {
    pub fn new(input1: MembershipDegrees, input2: MembershipDegrees) -> Self {
        Self {
            input1,
            input2,
            input1_slightly_small: input1.small.sqrt(),
        }
    }

    /// Degree to which `condition` holds. Input 2 has no slightly-small
    /// degree; such a condition is 0.
    pub fn degree(&self, condition: &Condition) -> f64 {
        match (condition.variable, condition.category) {
            (Variable::Input1, Category::SlightlySmall) => self.input1_slightly_small,
            (Variable::Input2, Category::SlightlySmall) => 0.0,
            (Variable::Input1, category) => self.input1.get(category).unwrap_or(0.0),
            (Variable::Input2, category) => self.input2.get(category).unwrap_or(0.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Fuzzified {
        Fuzzified::new(
            MembershipDegrees {
                small: 0.64,
                medium: 0.2,
                big: 0.1,
            },
            MembershipDegrees {
                small: 0.3,
                medium: 0.9,
                big: 0.4,
            },
        )
    }

    #[test]
    fn slightly_small_is_square_root_of_small() {
        let f = sample();
        assert_eq!(f.input1_slightly_small, 0.8);
        assert_eq!(
            f.degree(&Condition::new(Variable::Input1, Category::SlightlySmall)),
            0.8
        );
        assert!(f.input1_slightly_small >= f.input1.small);
    }

    #[test]
    fn looks_up_by_variable_and_category() {
        let f = sample();
        assert_eq!(f.degree(&Condition::new(Variable::Input1, Category::Medium)), 0.2);
        assert_eq!(f.degree(&Condition::new(Variable::Input2, Category::Small)), 0.3);
        assert_eq!(f.degree(&Condition::new(Variable::Input2, Category::Big)), 0.4);
    }

    #[test]
    fn input2_slightly_small_is_zero() {
        let f = sample();
        assert_eq!(
            f.degree(&Condition::new(Variable::Input2, Category::SlightlySmall)),
            0.0
        );
    }
}
