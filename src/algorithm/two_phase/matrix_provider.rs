//! # Standard form
//!
//! The simplex method works on problems of the form `min c^T x, s.t. A x = b, x >= 0` with
//! `b >= 0`. This module rewrites a `ConstraintModel` into that form:
//!
//! * Variables are shifted by their lower bound, such that they are at least zero.
//! * Upper bounds become additional `<=` rows.
//! * Rows with a negative right-hand side are multiplied by `-1`.
//! * Each `<=` row gets a slack, each `>=` row a surplus variable.
//! * Maximization becomes minimization by negating the cost vector.
use enum_map::EnumMap;

use crate::data::linear_program::elements::{ConstraintType, Objective};
use crate::data::linear_program::model::ConstraintModel;
use crate::data::number_types::OrderedField;

/// Dense representation of a problem in standard form.
#[derive(Debug, Clone, PartialEq)]
pub struct MatrixData<F> {
    /// Row major constraint matrix, with the original variables first and slacks after that.
    pub(crate) rows: Vec<Vec<F>>,
    /// Right-hand side, all values non-negative.
    pub(crate) b: Vec<F>,
    /// Cost of each column, to be minimized.
    pub(crate) cost: Vec<F>,
    /// For each row, the slack column that can serve as an initial basis column, if any.
    pub(crate) initial_basis: Vec<Option<usize>>,
    /// Amount by which each original variable was shifted.
    pub(crate) shifts: Vec<F>,
    /// Number of rows of each type, after making the right-hand side non-negative.
    pub(crate) constraint_type_counts: EnumMap<ConstraintType, usize>,
}

impl<F: OrderedField> MatrixData<F> {
    /// Rewrite a model into standard form.
    pub fn from_model(model: &ConstraintModel<F>) -> Self {
        let nr_variables = model.variables().len();
        let shifts = model.variables().iter()
            .map(|variable| variable.lower_bound.clone())
            .collect::<Vec<_>>();

        let shifted_rhs = |coefficients: &[F], rhs: F| coefficients.iter()
            .zip(&shifts)
            .fold(rhs, |total, (coefficient, shift)| total - coefficient.clone() * shift.clone());

        let mut structural_rows = Vec::with_capacity(model.constraints().len());
        for constraint in model.constraints() {
            let coefficients = constraint.expression.dense_coefficients(nr_variables);
            let rhs = shifted_rhs(
                &coefficients,
                constraint.rhs.clone() - constraint.expression.constant().clone(),
            );
            structural_rows.push((coefficients, constraint.constraint_type, rhs));
        }
        for (j, variable) in model.variables().iter().enumerate() {
            if let Some(upper) = &variable.upper_bound {
                let mut coefficients = vec![F::zero(); nr_variables];
                coefficients[j] = F::one();
                let rhs = upper.clone() - variable.lower_bound.clone();
                structural_rows.push((coefficients, ConstraintType::Less, rhs));
            }
        }

        // Non-negative right-hand side
        for (coefficients, constraint_type, rhs) in &mut structural_rows {
            if rhs.is_negative() {
                for coefficient in coefficients.iter_mut() {
                    *coefficient = -std::mem::replace(coefficient, F::zero());
                }
                *rhs = -std::mem::replace(rhs, F::zero());
                *constraint_type = constraint_type.flipped();
            }
        }

        let mut constraint_type_counts = EnumMap::default();
        for (_, constraint_type, _) in &structural_rows {
            constraint_type_counts[*constraint_type] += 1;
        }
        let nr_slacks = constraint_type_counts[ConstraintType::Less]
            + constraint_type_counts[ConstraintType::Greater];
        let nr_columns = nr_variables + nr_slacks;

        let mut rows = Vec::with_capacity(structural_rows.len());
        let mut b = Vec::with_capacity(structural_rows.len());
        let mut initial_basis = Vec::with_capacity(structural_rows.len());
        let mut next_slack = nr_variables;
        for (mut coefficients, constraint_type, rhs) in structural_rows {
            coefficients.resize(nr_columns, F::zero());
            let basis_column = match constraint_type {
                ConstraintType::Less => {
                    coefficients[next_slack] = F::one();
                    next_slack += 1;
                    Some(next_slack - 1)
                },
                ConstraintType::Greater => {
                    coefficients[next_slack] = -F::one();
                    next_slack += 1;
                    None
                },
                ConstraintType::Equal => None,
            };
            rows.push(coefficients);
            b.push(rhs);
            initial_basis.push(basis_column);
        }

        let mut cost = model.objective().dense_coefficients(nr_variables);
        if model.direction() == Objective::Maximize {
            for value in &mut cost {
                *value = -std::mem::replace(value, F::zero());
            }
        }
        cost.resize(nr_columns, F::zero());

        Self { rows, b, cost, initial_basis, shifts, constraint_type_counts }
    }

    /// Number of rows.
    pub fn nr_rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, original variables and slacks.
    pub fn nr_columns(&self) -> usize {
        self.cost.len()
    }

    /// Number of variables of the original model.
    pub fn nr_variables(&self) -> usize {
        self.shifts.len()
    }

    /// Whether every row has a slack that can be used in the initial basis.
    ///
    /// If so, `x = 0` is feasible and no artificial variables are needed.
    pub fn has_full_initial_basis(&self) -> bool {
        self.initial_basis.iter().all(Option::is_some)
    }

    /// Map a solution in standard form back to the original variables.
    pub fn reconstruct_solution(&self, column_values: &[F]) -> Vec<F> {
        column_values.iter()
            .zip(&self.shifts)
            .map(|(value, shift)| value.clone() + shift.clone())
            .collect()
    }
}

#[cfg(test)]
mod test {
    use crate::data::linear_program::elements::{ConstraintType, Objective};
    use crate::data::linear_program::model::{ConstraintModel, LinearExpression};
    use crate::RB;

    use super::MatrixData;

    #[test]
    fn slacks_and_negation() {
        let mut model = ConstraintModel::new("p", Objective::Maximize);
        let x = model.add_variable("x").unwrap();
        let y = model.add_bounded_variable("y", RB!(1), Some(RB!(3))).unwrap();
        model.add_constraint(
            "a",
            LinearExpression::new().with_term(x, RB!(1)).with_term(y, RB!(1)),
            ConstraintType::Less,
            RB!(4),
        ).unwrap();
        model.add_constraint(
            "b",
            LinearExpression::new().with_term(x, RB!(1)),
            ConstraintType::Less,
            RB!(-2),
        ).unwrap();
        model.set_objective(LinearExpression::new().with_term(x, RB!(2))).unwrap();

        let data = MatrixData::from_model(&model);

        // Rows: a (shifted), b (negated into >=), upper bound of y (shifted)
        assert_eq!(data.nr_rows(), 3);
        assert_eq!(data.nr_columns(), 5);
        assert_eq!(data.rows[0], vec![RB!(1), RB!(1), RB!(1), RB!(0), RB!(0)]);
        assert_eq!(data.rows[1], vec![RB!(-1), RB!(0), RB!(0), RB!(-1), RB!(0)]);
        assert_eq!(data.rows[2], vec![RB!(0), RB!(1), RB!(0), RB!(0), RB!(1)]);
        assert_eq!(data.b, vec![RB!(3), RB!(2), RB!(2)]);
        assert_eq!(data.initial_basis, vec![Some(2), None, Some(4)]);
        assert_eq!(data.cost, vec![RB!(-2), RB!(0), RB!(0), RB!(0), RB!(0)]);
        assert_eq!(data.constraint_type_counts[ConstraintType::Less], 2);
        assert_eq!(data.constraint_type_counts[ConstraintType::Greater], 1);
        assert!(!data.has_full_initial_basis());
        assert_eq!(data.reconstruct_solution(&[RB!(0), RB!(2)]), vec![RB!(0), RB!(3)]);
    }
}
