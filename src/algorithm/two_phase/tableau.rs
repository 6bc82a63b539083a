//! # Simplex tableau
//!
//! A dense tableau in canonical form: the basis columns form an identity matrix, the right-hand
//! side holds the values of the basic variables and the cost row holds the relative cost of each
//! column.
//!
//! Artificial variables, if any, occupy the lowest column indices. They never re-enter the basis
//! once they left it.
use crate::data::number_types::OrderedField;

/// Canonical form of a linear program w.r.t. a basis.
#[derive(Debug, Clone, PartialEq)]
pub struct Tableau<F> {
    /// Row major, `B^-1 A`.
    rows: Vec<Vec<F>>,
    /// `B^-1 b`, the values of the basic variables.
    rhs: Vec<F>,
    /// `c_j - c_B^T B^-1 a_j` for each column `j`.
    relative_costs: Vec<F>,
    /// `c_B^T B^-1 b`.
    objective_value: F,
    /// Basis column for each row.
    basis: Vec<usize>,
    in_basis: Vec<bool>,
    nr_artificial_variables: usize,
}

impl<F: OrderedField> Tableau<F> {
    /// Create a tableau.
    ///
    /// # Arguments
    ///
    /// * `rows`: Constraint matrix, such that the columns in `basis` form an identity matrix.
    /// * `rhs`: Non-negative right-hand side.
    /// * `cost`: Cost of each column, to be minimized.
    /// * `basis`: Basis column for each row.
    /// * `nr_artificial_variables`: Number of leading columns that are artificial.
    pub fn new(
        rows: Vec<Vec<F>>,
        rhs: Vec<F>,
        cost: &[F],
        basis: Vec<usize>,
        nr_artificial_variables: usize,
    ) -> Self {
        debug_assert_eq!(rows.len(), rhs.len());
        debug_assert_eq!(rows.len(), basis.len());
        debug_assert!(rows.iter().all(|row| row.len() == cost.len()));
        debug_assert!(rhs.iter().all(|value| !value.is_negative()));

        let relative_costs = (0..cost.len())
            .map(|j| basis.iter().zip(&rows)
                .fold(cost[j].clone(), |total, (&basis_column, row)| {
                    total - cost[basis_column].clone() * row[j].clone()
                })
            )
            .collect();
        let objective_value = basis.iter().zip(&rhs)
            .fold(F::zero(), |total, (&basis_column, value)| {
                total + cost[basis_column].clone() * value.clone()
            });

        let mut in_basis = vec![false; cost.len()];
        for &column in &basis {
            in_basis[column] = true;
        }

        Self { rows, rhs, relative_costs, objective_value, basis, in_basis, nr_artificial_variables }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, including artificial ones.
    pub fn nr_columns(&self) -> usize {
        self.relative_costs.len()
    }

    /// Number of artificial columns, which are the first columns of the tableau.
    pub fn nr_artificial_variables(&self) -> usize {
        self.nr_artificial_variables
    }

    /// Whether a column is currently in the basis.
    pub fn is_in_basis(&self, column: usize) -> bool {
        self.in_basis[column]
    }

    /// Basis column of a row.
    pub fn basis_column(&self, row: usize) -> usize {
        self.basis[row]
    }

    /// Relative cost of a column.
    pub fn relative_cost(&self, column: usize) -> &F {
        &self.relative_costs[column]
    }

    /// Objective function value of the current basic feasible solution.
    pub fn objective_function_value(&self) -> &F {
        &self.objective_value
    }

    /// Coefficient at a row and column.
    pub fn coefficient(&self, row: usize, column: usize) -> &F {
        &self.rows[row][column]
    }

    /// Determine the row to pivot on, given the column that enters the basis.
    ///
    /// Minimum ratio test, ties are broken by the lowest basis column index.
    ///
    /// # Return value
    ///
    /// `None` if the column has no positive coefficient: the problem is unbounded in the direction
    /// of this column.
    pub fn select_primal_pivot_row(&self, column: usize) -> Option<usize> {
        let mut best: Option<(usize, F)> = None;
        for (row, coefficients) in self.rows.iter().enumerate() {
            let coefficient = &coefficients[column];
            if !coefficient.is_positive() {
                continue;
            }

            let ratio = self.rhs[row].clone() / coefficient.clone();
            let is_better = match &best {
                None => true,
                Some((best_row, best_ratio)) => {
                    ratio < *best_ratio
                        || (ratio == *best_ratio && self.basis[row] < self.basis[*best_row])
                },
            };
            if is_better {
                best = Some((row, ratio));
            }
        }

        best.map(|(row, _)| row)
    }

    /// Let a column enter the basis, at the given row.
    ///
    /// # Arguments
    ///
    /// * `pivot_row`: The basis column of this row leaves the basis.
    /// * `pivot_column`: Column with a nonzero coefficient in `pivot_row`.
    pub fn bring_into_basis(&mut self, pivot_row: usize, pivot_column: usize) {
        debug_assert!(!self.rows[pivot_row][pivot_column].is_zero());

        let pivot_value = self.rows[pivot_row][pivot_column].clone();
        for value in &mut self.rows[pivot_row] {
            *value = std::mem::replace(value, F::zero()) / pivot_value.clone();
        }
        self.rhs[pivot_row] = std::mem::replace(&mut self.rhs[pivot_row], F::zero()) / pivot_value;

        let pivot_coefficients = self.rows[pivot_row].clone();
        let pivot_rhs = self.rhs[pivot_row].clone();
        for row in 0..self.rows.len() {
            if row == pivot_row {
                continue;
            }

            let factor = self.rows[row][pivot_column].clone();
            if factor.is_zero() {
                continue;
            }
            subtract_multiple(&mut self.rows[row], &factor, &pivot_coefficients);
            self.rhs[row] = std::mem::replace(&mut self.rhs[row], F::zero())
                - factor * pivot_rhs.clone();
        }

        let factor = self.relative_costs[pivot_column].clone();
        if !factor.is_zero() {
            subtract_multiple(&mut self.relative_costs, &factor, &pivot_coefficients);
            self.objective_value = std::mem::replace(&mut self.objective_value, F::zero())
                + factor * pivot_rhs;
        }

        let leaving = self.basis[pivot_row];
        self.in_basis[leaving] = false;
        self.in_basis[pivot_column] = true;
        self.basis[pivot_row] = pivot_column;
    }

    /// Value of each non artificial column in the current basic feasible solution.
    pub fn current_bfs(&self) -> Vec<F> {
        let mut values = vec![F::zero(); self.nr_columns() - self.nr_artificial_variables];
        for (&column, value) in self.basis.iter().zip(&self.rhs) {
            if column >= self.nr_artificial_variables {
                values[column - self.nr_artificial_variables] = value.clone();
            }
        }

        values
    }

    /// Split the tableau into its parts, dropping the artificial columns and the given rows.
    ///
    /// # Return value
    ///
    /// The rows, right-hand side and basis (with indices relative to the first non artificial
    /// column) that remain.
    pub(crate) fn into_non_artificial_parts(
        self,
        rows_to_remove: &[usize],
    ) -> (Vec<Vec<F>>, Vec<F>, Vec<usize>) {
        let nr_artificial = self.nr_artificial_variables;
        let mut rows = Vec::with_capacity(self.rows.len() - rows_to_remove.len());
        let mut rhs = Vec::with_capacity(rows.capacity());
        let mut basis = Vec::with_capacity(rows.capacity());

        for (i, ((row, value), column)) in self.rows.into_iter()
            .zip(self.rhs)
            .zip(self.basis)
            .enumerate() {
            if rows_to_remove.contains(&i) {
                continue;
            }
            debug_assert!(column >= nr_artificial);

            rows.push(row.into_iter().skip(nr_artificial).collect());
            rhs.push(value);
            basis.push(column - nr_artificial);
        }

        (rows, rhs, basis)
    }
}

fn subtract_multiple<F: OrderedField>(target: &mut [F], factor: &F, source: &[F]) {
    for (value, source_value) in target.iter_mut().zip(source) {
        if !source_value.is_zero() {
            *value = std::mem::replace(value, F::zero()) - factor.clone() * source_value.clone();
        }
    }
}
