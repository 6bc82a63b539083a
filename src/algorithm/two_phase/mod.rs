//! # The Simplex algorithm
//!
//! This module contains all data structures and logic specific to the two phase simplex method.
//! The algorithm is implemented as described in chapters 2 and 4 of Combinatorial Optimization, a
//! book by Christos H. Papadimitriou and Kenneth Steiglitz.
use std::marker::PhantomData;

use tracing::{debug, trace};

use crate::algorithm::{OptimizationResult, Solver};
use crate::algorithm::two_phase::matrix_provider::MatrixData;
use crate::algorithm::two_phase::strategy::pivot_rule::{FirstProfitable, PivotRule};
use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::linear_program::elements::{ConstraintType, LinearProgramType};
use crate::data::linear_program::model::ConstraintModel;
use crate::data::linear_program::solution::Solution;
use crate::data::number_types::OrderedField;

pub mod matrix_provider;
pub mod strategy;
pub mod tableau;

/// The two phase simplex method.
///
/// The first phase searches a basic feasible solution, always with the `FirstProfitable` rule. The
/// second phase optimizes, using the pivot rule `PR`.
pub struct TwoPhase<PR = FirstProfitable> {
    pivot_rule: PhantomData<PR>,
}

impl<PR> TwoPhase<PR> {
    /// Create a new instance.
    pub fn new() -> Self {
        Self { pivot_rule: PhantomData }
    }
}

impl<PR> Default for TwoPhase<PR> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F, PR> Solver<F> for TwoPhase<PR>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    fn solve(&self, model: &ConstraintModel<F>) -> LinearProgramType<F> {
        let data = MatrixData::from_model(model);
        debug!(
            model = model.name(),
            rows = data.nr_rows(),
            columns = data.nr_columns(),
            less = data.constraint_type_counts[ConstraintType::Less],
            greater = data.constraint_type_counts[ConstraintType::Greater],
            equal = data.constraint_type_counts[ConstraintType::Equal],
            "derived standard form",
        );

        match solve_relaxation::<_, PR>(&data) {
            OptimizationResult::FiniteOptimum(column_values) => {
                let values = data.reconstruct_solution(&column_values[..data.nr_variables()]);
                let objective_value = model.objective().evaluate(&values);
                let solution_values = model.variables().iter()
                    .map(|variable| variable.name.clone())
                    .zip(values)
                    .collect();
                debug!(model = model.name(), objective = %objective_value, "finite optimum");

                LinearProgramType::FiniteOptimum(Solution::new(objective_value, solution_values))
            },
            OptimizationResult::Infeasible => {
                debug!(model = model.name(), "infeasible");
                LinearProgramType::Infeasible
            },
            OptimizationResult::Unbounded => {
                debug!(model = model.name(), "unbounded");
                LinearProgramType::Unbounded
            },
        }
    }
}

/// Solve a problem in standard form.
///
/// If every row has a slack that can be used in the initial basis, the first phase is skipped.
///
/// # Return value
///
/// Whether the problem is feasible, and if so, a value for each column if the problem is bounded.
pub fn solve_relaxation<F, PR>(data: &MatrixData<F>) -> OptimizationResult<F>
where
    F: OrderedField,
    PR: PivotRule<F>,
{
    let mut tableau = if data.has_full_initial_basis() {
        let basis = data.initial_basis.iter().copied().flatten().collect();
        Tableau::new(data.rows.clone(), data.b.clone(), &data.cost, basis, 0)
    } else {
        match phase_one::primal::<_, FirstProfitable>(artificial_tableau(data)) {
            RankedFeasibilityResult::Feasible { rank, tableau } => {
                let rows_to_remove = match rank {
                    Rank::Full => Vec::with_capacity(0),
                    Rank::Deficient(rows) => rows,
                };
                let (rows, rhs, basis) = tableau.into_non_artificial_parts(&rows_to_remove);
                Tableau::new(rows, rhs, &data.cost, basis, 0)
            },
            RankedFeasibilityResult::Infeasible => return OptimizationResult::Infeasible,
        }
    };

    phase_two::primal::<_, PR>(&mut tableau)
}

/// Create a tableau for the first phase.
///
/// Rows with a slack in the initial basis keep it, all others get an artificial variable. The
/// artificial variables are placed in the first columns and have cost `1`, all other columns have
/// cost `0`.
fn artificial_tableau<F: OrderedField>(data: &MatrixData<F>) -> Tableau<F> {
    let artificial_rows = data.initial_basis.iter()
        .enumerate()
        .filter(|(_, basis_column)| basis_column.is_none())
        .map(|(row, _)| row)
        .collect::<Vec<_>>();
    let nr_artificial = artificial_rows.len();

    let mut rows = Vec::with_capacity(data.nr_rows());
    let mut basis = Vec::with_capacity(data.nr_rows());
    let mut next_artificial = 0;
    for (row, (coefficients, basis_column)) in data.rows.iter().zip(&data.initial_basis).enumerate() {
        let mut extended = vec![F::zero(); nr_artificial];
        match basis_column {
            Some(column) => basis.push(nr_artificial + column),
            None => {
                debug_assert_eq!(artificial_rows[next_artificial], row);
                extended[next_artificial] = F::one();
                basis.push(next_artificial);
                next_artificial += 1;
            },
        }
        extended.extend(coefficients.iter().cloned());
        rows.push(extended);
    }

    let mut cost = vec![F::one(); nr_artificial];
    cost.resize(nr_artificial + data.nr_columns(), F::zero());

    Tableau::new(rows, data.b.clone(), &cost, basis, nr_artificial)
}

/// Whether redundant rows were found during the first phase.
#[derive(Debug, Eq, PartialEq)]
pub enum Rank {
    /// No redundant rows.
    Full,
    /// These rows are linear combinations of the other rows and can be removed.
    Deficient(Vec<usize>),
}

/// Result of the first phase.
#[derive(Debug)]
pub enum RankedFeasibilityResult<F> {
    /// A basic feasible solution was found, no artificial variables are in the basis of the
    /// remaining rows.
    Feasible {
        /// Rows that are redundant.
        rank: Rank,
        /// Tableau with the basic feasible solution, still containing the artificial columns.
        tableau: Tableau<F>,
    },
    /// There is no feasible solution.
    Infeasible,
}

/// Reduces the artificial cost of the basic feasible solution to zero, if possible.
pub mod phase_one {
    use super::*;

    /// Reduces the artificial cost of the basic feasible solution to zero, if possible. In doing
    /// so, a basic feasible solution to the standard form linear program is found.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Artificial tableau with a valid basis. This basis will typically consist of
    /// mostly artificial variables.
    ///
    /// # Return value
    ///
    /// Whether the tableau allows a basic feasible solution without artificial variables.
    pub fn primal<F, PR>(mut tableau: Tableau<F>) -> RankedFeasibilityResult<F>
    where
        F: OrderedField,
        PR: PivotRule<F>,
    {
        match phase_two::primal::<_, PR>(&mut tableau) {
            OptimizationResult::FiniteOptimum(_) => {},
            OptimizationResult::Infeasible | OptimizationResult::Unbounded => {
                unreachable!("the artificial cost is bounded from below by zero")
            },
        }

        if tableau.objective_function_value().is_positive() {
            return RankedFeasibilityResult::Infeasible;
        }

        // Artificial variables that are still in the basis are at level zero: pivot them out.
        let nr_artificial = tableau.nr_artificial_variables();
        let mut rows_to_remove = Vec::new();
        for row in 0..tableau.nr_rows() {
            if tableau.basis_column(row) >= nr_artificial {
                continue;
            }

            let replacement = (nr_artificial..tableau.nr_columns())
                .find(|&column| {
                    !tableau.is_in_basis(column) && !tableau.coefficient(row, column).is_zero()
                });
            match replacement {
                Some(column) => tableau.bring_into_basis(row, column),
                None => rows_to_remove.push(row),
            }
        }

        let rank = if rows_to_remove.is_empty() {
            Rank::Full
        } else {
            debug!(rows = ?rows_to_remove, "removing redundant rows");
            Rank::Deficient(rows_to_remove)
        };

        RankedFeasibilityResult::Feasible { rank, tableau }
    }
}

/// Optimizing from a basic feasible solution.
pub mod phase_two {
    use super::*;

    /// Apply the primal simplex method until an optimum is reached or unboundedness is detected.
    ///
    /// # Arguments
    ///
    /// * `tableau`: Tableau with a basic feasible solution.
    ///
    /// # Return value
    ///
    /// `FiniteOptimum` with a value for each non artificial column, or `Unbounded`.
    pub fn primal<F, PR>(tableau: &mut Tableau<F>) -> OptimizationResult<F>
    where
        F: OrderedField,
        PR: PivotRule<F>,
    {
        let mut rule = PR::new(tableau);
        let mut iterations = 0_usize;
        loop {
            match rule.select_primal_pivot_column(tableau) {
                Some((column, cost)) => match tableau.select_primal_pivot_row(column) {
                    Some(row) => {
                        trace!(iteration = iterations, row, column, %cost, "pivot");
                        tableau.bring_into_basis(row, column);
                        rule.after_basis_update(tableau);
                        iterations += 1;
                    },
                    None => {
                        debug!(iterations, column, "unbounded column");
                        break OptimizationResult::Unbounded;
                    },
                },
                None => {
                    debug!(iterations, objective = %tableau.objective_function_value(), "optimal");
                    break OptimizationResult::FiniteOptimum(tableau.current_bfs());
                },
            }
        }
    }
}
