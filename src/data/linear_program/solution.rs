//! # Representation of optimal solutions
//!
//! Once a linear program is fully solved, a solution is derived. It is expressed in terms of the
//! variables of the original model, that is, before any shifting of bounds or adding of slacks.
use std::fmt;

use itertools::Itertools;

/// Represents a full solution to a linear program.
///
/// This struct would probably be used to print the optimal solution for the user.
#[derive(Eq, PartialEq, Debug, Clone)]
pub struct Solution<F> {
    /// Value of the objective function for this solution, including any constant that was included
    /// in the original problem.
    objective_value: F,
    /// (variable name, solution value) tuples for all variables, named as in the original problem.
    solution_values: Vec<(String, F)>,
}

impl<F> Solution<F> {
    /// Create a new `Solution` instance.
    ///
    /// A plain constructor.
    ///
    /// # Arguments
    ///
    /// * `objective_value`: Objective function value, including any constant.
    /// * `solution_values`: Variable names and values, in the order of the model.
    pub fn new(objective_value: F, solution_values: Vec<(String, F)>) -> Self {
        Self {
            objective_value,
            solution_values,
        }
    }

    /// Objective function value.
    pub fn objective_value(&self) -> &F {
        &self.objective_value
    }

    /// Value of the variable with this name.
    pub fn value(&self, variable_name: &str) -> Option<&F> {
        self.solution_values.iter()
            .find(|(name, _)| name == variable_name)
            .map(|(_, value)| value)
    }

    /// All (variable name, value) pairs.
    pub fn values(&self) -> &[(String, F)] {
        &self.solution_values
    }
}

impl<F: fmt::Display> fmt::Display for Solution<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Objective value: {}", self.objective_value)?;
        write!(f, "{}", self.solution_values.iter()
            .map(|(name, value)| format!("{}: {}", name, value))
            .join("\n"))
    }
}
