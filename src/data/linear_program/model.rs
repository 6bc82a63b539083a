//! # Constraint models
//!
//! A linear program as a user writes it down: named variables, named constraints and a linear
//! objective. Variables are non-negative by default. The model is independent of any solver; see
//! the `algorithm` module for that.
use std::collections::HashSet;
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use itertools::Itertools;

use crate::algorithm::Solver;
use crate::algorithm::two_phase::TwoPhase;
use crate::algorithm::two_phase::strategy::pivot_rule::FirstProfitable;
use crate::data::linear_program::elements::{ConstraintType, LinearProgramType, Objective};
use crate::data::number_types::OrderedField;
use crate::error::ModelError;

/// Handle to a variable of a specific `ConstraintModel`.
///
/// Only the model that created the handle (or a clone of it) knows its variable.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct VariableId {
    model: u64,
    index: usize,
}

impl VariableId {
    /// Position of the variable in the model.
    pub fn index(self) -> usize {
        self.index
    }
}

/// Source of the identifiers that tie variable handles to their model.
static NEXT_MODEL_ID: AtomicU64 = AtomicU64::new(0);

/// A decision variable.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Variable<F> {
    /// Unique name within the model.
    pub name: String,
    /// The variable is at least this large.
    pub lower_bound: F,
    /// The variable is at most this large, if present.
    pub upper_bound: Option<F>,
}

/// Sum of coefficients times variables, plus a constant.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct LinearExpression<F> {
    terms: Vec<(VariableId, F)>,
    constant: F,
}

impl<F: OrderedField> LinearExpression<F> {
    /// An expression without terms and with a zero constant.
    pub fn new() -> Self {
        Self { terms: Vec::new(), constant: F::zero() }
    }

    /// Add `coefficient * variable` to the expression.
    ///
    /// Repeated variables are merged when the expression is evaluated.
    #[must_use]
    pub fn with_term(mut self, variable: VariableId, coefficient: F) -> Self {
        self.terms.push((variable, coefficient));
        self
    }

    /// Add a constant to the expression.
    #[must_use]
    pub fn with_constant(mut self, constant: F) -> Self {
        self.constant = self.constant + constant;
        self
    }

    /// Terms in the order they were added.
    pub fn terms(&self) -> &[(VariableId, F)] {
        &self.terms
    }

    /// Constant part of the expression.
    pub fn constant(&self) -> &F {
        &self.constant
    }

    /// Dense coefficient vector, duplicate variables summed.
    ///
    /// # Arguments
    ///
    /// * `nr_variables`: Length of the result, all variable indices should be smaller.
    pub(crate) fn dense_coefficients(&self, nr_variables: usize) -> Vec<F> {
        let mut coefficients = vec![F::zero(); nr_variables];
        for (variable, coefficient) in &self.terms {
            let current = std::mem::replace(&mut coefficients[variable.index], F::zero());
            coefficients[variable.index] = current + coefficient.clone();
        }
        coefficients
    }

    /// Value of the expression for the given variable values.
    ///
    /// # Arguments
    ///
    /// * `values`: Value of each variable of the model, indexed by `VariableId::index`.
    ///
    /// # Panics
    ///
    /// If `values` is shorter than the largest index of a variable in the expression.
    pub fn evaluate(&self, values: &[F]) -> F {
        self.terms.iter()
            .fold(self.constant.clone(), |total, (variable, coefficient)| {
                total + coefficient.clone() * values[variable.index].clone()
            })
    }
}

impl<F: OrderedField> Default for LinearExpression<F> {
    fn default() -> Self {
        Self::new()
    }
}

/// A named linear (in)equality.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Constraint<F> {
    /// Unique name within the model.
    pub name: String,
    /// Left-hand side.
    pub expression: LinearExpression<F>,
    /// Relation between both sides.
    pub constraint_type: ConstraintType,
    /// Right-hand side.
    pub rhs: F,
}

/// A linear program over named variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConstraintModel<F> {
    id: u64,
    name: String,
    direction: Objective,
    variables: Vec<Variable<F>>,
    constraints: Vec<Constraint<F>>,
    objective: LinearExpression<F>,
    names: HashSet<String>,
}

impl<F: OrderedField> ConstraintModel<F> {
    /// Create an empty model.
    ///
    /// # Arguments
    ///
    /// * `name`: Name of the problem, used when printing it.
    /// * `direction`: Whether the objective should be maximized or minimized.
    pub fn new(name: impl Into<String>, direction: Objective) -> Self {
        Self {
            id: NEXT_MODEL_ID.fetch_add(1, Ordering::Relaxed),
            name: name.into(),
            direction,
            variables: Vec::new(),
            constraints: Vec::new(),
            objective: LinearExpression::new(),
            names: HashSet::new(),
        }
    }

    /// Add a variable that is at least zero.
    pub fn add_variable(&mut self, name: impl Into<String>) -> Result<VariableId, ModelError> {
        self.add_bounded_variable(name, F::zero(), None)
    }

    /// Add a variable with explicit bounds.
    ///
    /// # Errors
    ///
    /// If the name is empty or already in use, or if the upper bound lies below the lower bound.
    pub fn add_bounded_variable(
        &mut self,
        name: impl Into<String>,
        lower_bound: F,
        upper_bound: Option<F>,
    ) -> Result<VariableId, ModelError> {
        let name = self.claim_name(name.into())?;
        if let Some(upper) = &upper_bound {
            if upper < &lower_bound {
                self.names.remove(&name);
                return Err(ModelError::InvalidBounds {
                    variable: name,
                    lower: lower_bound.to_string(),
                    upper: upper.to_string(),
                });
            }
        }

        self.variables.push(Variable { name, lower_bound, upper_bound });
        Ok(VariableId { model: self.id, index: self.variables.len() - 1 })
    }

    /// Add a named constraint `expression (<=|>=|=) rhs`.
    ///
    /// # Errors
    ///
    /// If the name is empty or already in use, or if the expression refers to a variable that this
    /// model doesn't know.
    pub fn add_constraint(
        &mut self,
        name: impl Into<String>,
        expression: LinearExpression<F>,
        constraint_type: ConstraintType,
        rhs: F,
    ) -> Result<(), ModelError> {
        self.check_variables(&expression)?;
        let name = self.claim_name(name.into())?;
        self.constraints.push(Constraint { name, expression, constraint_type, rhs });

        Ok(())
    }

    /// Replace the objective function.
    pub fn set_objective(&mut self, objective: LinearExpression<F>) -> Result<(), ModelError> {
        self.check_variables(&objective)?;
        self.objective = objective;

        Ok(())
    }

    /// Solve the model with the default solver.
    pub fn solve(&self) -> LinearProgramType<F> {
        TwoPhase::<FirstProfitable>::new().solve(self)
    }

    /// Name of the problem.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Optimization direction.
    pub fn direction(&self) -> Objective {
        self.direction
    }

    /// Variables in insertion order.
    pub fn variables(&self) -> &[Variable<F>] {
        &self.variables
    }

    /// Constraints in insertion order.
    pub fn constraints(&self) -> &[Constraint<F>] {
        &self.constraints
    }

    /// Objective function.
    pub fn objective(&self) -> &LinearExpression<F> {
        &self.objective
    }

    fn claim_name(&mut self, name: String) -> Result<String, ModelError> {
        if name.trim().is_empty() {
            return Err(ModelError::EmptyName);
        }
        if !self.names.insert(name.clone()) {
            return Err(ModelError::DuplicateName(name));
        }

        Ok(name)
    }

    fn check_variables(&self, expression: &LinearExpression<F>) -> Result<(), ModelError> {
        let is_foreign = |variable: &VariableId| {
            variable.model != self.id || variable.index >= self.variables.len()
        };
        match expression.terms.iter().find(|(variable, _)| is_foreign(variable)) {
            Some((variable, _)) => Err(ModelError::UnknownVariable(variable.index)),
            None => Ok(()),
        }
    }

    fn format_expression(&self, expression: &LinearExpression<F>) -> String {
        let terms = expression.terms.iter()
            .map(|(variable, coefficient)| {
                let name = &self.variables[variable.index].name;
                if coefficient.is_one() {
                    name.clone()
                } else {
                    format!("{} {}", coefficient, name)
                }
            })
            .join(" + ");

        match (terms.is_empty(), expression.constant.is_zero()) {
            (true, _) => expression.constant.to_string(),
            (false, true) => terms,
            (false, false) => format!("{} + {}", terms, expression.constant),
        }
    }
}

impl<F: OrderedField> fmt::Display for ConstraintModel<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}:", self.name)?;
        writeln!(f, "{}", self.direction)?;
        writeln!(f, "{}", self.format_expression(&self.objective))?;
        writeln!(f, "SUBJECT TO")?;
        for constraint in &self.constraints {
            writeln!(
                f, "{}: {} {} {}",
                constraint.name,
                self.format_expression(&constraint.expression),
                constraint.constraint_type,
                constraint.rhs,
            )?;
        }
        writeln!(f, "VARIABLES")?;
        for variable in &self.variables {
            match &variable.upper_bound {
                Some(upper) => writeln!(f, "{} <= {} <= {}", variable.lower_bound, variable.name, upper)?,
                None => writeln!(f, "{} <= {}", variable.lower_bound, variable.name)?,
            }
        }

        Ok(())
    }
}
