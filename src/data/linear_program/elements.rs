//! # Building blocks to describe linear programs.
use std::fmt;
use std::ops::Not;

use enum_map::Enum;

use crate::data::linear_program::solution::Solution;

/// A `Constraint` is a type of (in)equality.
#[allow(missing_docs)]
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Enum)]
pub enum ConstraintType {
    Equal,
    Greater,
    Less,
}

impl ConstraintType {
    /// The relation with both sides of the (in)equality swapped, as after multiplying by `-1`.
    #[must_use]
    pub fn flipped(self) -> Self {
        match self {
            ConstraintType::Equal => ConstraintType::Equal,
            ConstraintType::Greater => ConstraintType::Less,
            ConstraintType::Less => ConstraintType::Greater,
        }
    }
}

impl fmt::Display for ConstraintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ConstraintType::Equal => "=",
            ConstraintType::Greater => ">=",
            ConstraintType::Less => "<=",
        })
    }
}

/// Direction of optimization.
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Objective {
    Maximize,
    #[default]
    Minimize,
}

impl Not for Objective {
    type Output = Self;

    fn not(self) -> Self::Output {
        match self {
            Objective::Maximize => Objective::Minimize,
            Objective::Minimize => Objective::Maximize,
        }
    }
}

impl fmt::Display for Objective {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Objective::Maximize => "MAXIMIZE",
            Objective::Minimize => "MINIMIZE",
        })
    }
}

/// After the second phase, either an optimum is found or the problem is determined to be unbounded.
#[allow(missing_docs)]
#[derive(Debug, Eq, PartialEq)]
pub enum LinearProgramType<F> {
    FiniteOptimum(Solution<F>),
    Infeasible,
    Unbounded,
}

impl<F> LinearProgramType<F> {
    /// Short description of the outcome.
    pub fn status(&self) -> Status {
        match self {
            LinearProgramType::FiniteOptimum(_) => Status::Optimal,
            LinearProgramType::Infeasible => Status::Infeasible,
            LinearProgramType::Unbounded => Status::Unbounded,
        }
    }

    /// The solution, if an optimum was found.
    pub fn solution(&self) -> Option<&Solution<F>> {
        match self {
            LinearProgramType::FiniteOptimum(solution) => Some(solution),
            _ => None,
        }
    }

    /// Value of a variable in the optimal solution.
    ///
    /// # Return value
    ///
    /// `None` if there is no finite optimum, or if no variable with this name exists.
    pub fn value(&self, variable_name: &str) -> Option<&F> {
        self.solution().and_then(|solution| solution.value(variable_name))
    }

    /// Objective function value of the optimal solution, if any.
    pub fn objective_value(&self) -> Option<&F> {
        self.solution().map(Solution::objective_value)
    }
}

/// Status of a linear program, as reported to the user.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Default)]
pub enum Status {
    /// No solve was attempted yet.
    #[default]
    NotSolved,
    /// A finite optimum was found.
    Optimal,
    /// The constraints can't be satisfied simultaneously.
    Infeasible,
    /// The objective can be improved without limit.
    Unbounded,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Status::NotSolved => "Not Solved",
            Status::Optimal => "Optimal",
            Status::Infeasible => "Infeasible",
            Status::Unbounded => "Unbounded",
        })
    }
}

#[cfg(test)]
mod test {
    use enum_map::EnumMap;

    use super::{ConstraintType, LinearProgramType, Objective, Status};

    #[test]
    fn status_strings() {
        assert_eq!(Status::Optimal.to_string(), "Optimal");
        assert_eq!(Status::NotSolved.to_string(), "Not Solved");
        assert_eq!(LinearProgramType::<f64>::Unbounded.status().to_string(), "Unbounded");
        assert_eq!(LinearProgramType::<f64>::Infeasible.value("x"), None);
    }

    #[test]
    fn flip() {
        assert_eq!(ConstraintType::Less.flipped(), ConstraintType::Greater);
        assert_eq!(ConstraintType::Equal.flipped(), ConstraintType::Equal);
        assert_eq!(!Objective::Maximize, Objective::Minimize);
    }

    #[test]
    fn counting() {
        let mut counts = EnumMap::<ConstraintType, usize>::default();
        counts[ConstraintType::Less] += 2;
        counts[ConstraintType::Equal] += 1;
        assert_eq!(counts.values().sum::<usize>(), 3);
    }
}
