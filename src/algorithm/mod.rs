//! # Algorithms
//!
//! Solving linear programs. The `Solver` trait is the seam: anything that can turn a
//! `ConstraintModel` into a `LinearProgramType` can be substituted for the default two phase
//! simplex method.
use crate::data::linear_program::elements::LinearProgramType;
use crate::data::linear_program::model::ConstraintModel;

pub mod two_phase;

/// A procedure that solves linear programs.
pub trait Solver<F> {
    /// Solve the model.
    ///
    /// # Return value
    ///
    /// Whether the problem is feasible, and if so, a solution if the problem is bounded.
    fn solve(&self, model: &ConstraintModel<F>) -> LinearProgramType<F>;
}

/// A linear program is either infeasible, unbounded or has a finite optimum.
///
/// This is determined as the result of an algorithm. The finite optimum holds a value for each
/// column of the problem in standard form.
#[allow(missing_docs)]
#[derive(Eq, PartialEq, Debug)]
pub enum OptimizationResult<F> {
    Infeasible,
    FiniteOptimum(Vec<F>),
    Unbounded,
}
