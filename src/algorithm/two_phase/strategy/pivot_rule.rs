//! # Pivot rules
//!
//! Strategies for moving from basis to basis.
use std::ops::Range;

use crate::algorithm::two_phase::tableau::Tableau;
use crate::data::number_types::OrderedField;

/// Deciding how to pivot.
///
/// During the Simplex method, one needs to decide how to move from basic solution to basic
/// solution. The pivot rule describes that behavior.
///
/// Once the column has been selected for a primal pivot, a row needs to be found. This decision is
/// made independent of the strategy, see `Tableau::select_primal_pivot_row`.
pub trait PivotRule<F> {
    /// Create a new instance.
    fn new(tableau: &Tableau<F>) -> Self;

    /// Column selection rule for the primal Simplex method.
    ///
    /// # Return value
    ///
    /// A column that is not in the basis and has a negative relative cost, together with that
    /// cost. `None` if no such column exists, that is, when the current solution is optimal.
    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)>;

    /// Called after each change of basis.
    fn after_basis_update(&mut self, _tableau: &Tableau<F>) {
    }
}

/// Candidate columns, not in the basis and with a negative relative cost.
fn profitable<F: OrderedField>(
    tableau: &Tableau<F>,
    to_consider: Range<usize>,
) -> impl Iterator<Item = (usize, F)> {
    to_consider
        .filter(|&column| !tableau.is_in_basis(column))
        .map(|column| (column, tableau.relative_cost(column).clone()))
        .filter(|(_, cost)| cost.is_negative())
}

/// Simply pivot on the first column, which has a negative relative cost.
///
/// Together with the lowest index tie breaking of the ratio test, this is Bland's rule: it never
/// cycles.
pub struct FirstProfitable;
impl<F: OrderedField> PivotRule<F> for FirstProfitable {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        profitable(tableau, tableau.nr_artificial_variables()..tableau.nr_columns()).next()
    }
}

/// Small modification w.r.t. the `FirstProfitable` rule; it starts the search from the last
/// column selected.
pub struct FirstProfitableWithMemory {
    last_selected: Option<usize>,
}
impl<F: OrderedField> PivotRule<F> for FirstProfitableWithMemory {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self { last_selected: None }
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let start = tableau.nr_artificial_variables();
        let potential = self.last_selected
            .map_or_else(
                || profitable(tableau, start..tableau.nr_columns()).next(),
                |last| {
                    profitable(tableau, (last + 1)..tableau.nr_columns()).next()
                        .or_else(|| profitable(tableau, start..(last + 1)).next())
                },
            );

        self.last_selected = potential.as_ref().map(|&(column, _)| column);
        potential
    }
}

/// Simply pivot on the column, which has the most negative relative cost.
///
/// Often needs fewer iterations than `FirstProfitable`, but may cycle on degenerate problems.
pub struct SteepestDescentAlongVariable;
impl<F: OrderedField> PivotRule<F> for SteepestDescentAlongVariable {
    fn new(_tableau: &Tableau<F>) -> Self {
        Self
    }

    fn select_primal_pivot_column(&mut self, tableau: &Tableau<F>) -> Option<(usize, F)> {
        let mut smallest: Option<(usize, F)> = None;
        for (column, cost) in profitable(tableau, tableau.nr_artificial_variables()..tableau.nr_columns()) {
            match smallest.as_mut() {
                Some((existing_column, existing_cost)) => if cost < *existing_cost {
                    *existing_column = column;
                    *existing_cost = cost;
                },
                None => smallest = Some((column, cost)),
            }
        }

        smallest
    }
}
