//! # Production planning
//!
//! How much lemonade and fruit juice to produce, given limited water, sugar, lemon juice and fruit
//! puree, to maximize the total number of products.
use std::fmt;

use num_traits::ToPrimitive;

use crate::data::linear_program::elements::{ConstraintType, LinearProgramType, Objective, Status};
use crate::data::linear_program::model::{ConstraintModel, LinearExpression};
use crate::data::number_types::RationalBig;
use crate::demo::format_float;
use crate::error::ModelError;
use crate::RB;

/// Name of the lemonade variable.
pub const LEMONADE: &str = "Lemonade";
/// Name of the fruit juice variable.
pub const FRUIT_JUICE: &str = "FruitJuice";

/// Build the model.
///
/// ```text
/// maximize    x + y
/// subject to  2x + y <= 100   (water)
///                  x <= 50    (sugar)
///                  x <= 30    (lemon juice)
///                 2y <= 40    (fruit puree)
///              x, y >= 0
/// ```
pub fn production_model() -> Result<ConstraintModel<RationalBig>, ModelError> {
    let mut model = ConstraintModel::new("Production_Optimization", Objective::Maximize);
    let lemonade = model.add_variable(LEMONADE)?;
    let fruit_juice = model.add_variable(FRUIT_JUICE)?;

    model.add_constraint(
        "Water_Constraint",
        LinearExpression::new().with_term(lemonade, RB!(2)).with_term(fruit_juice, RB!(1)),
        ConstraintType::Less,
        RB!(100),
    )?;
    model.add_constraint(
        "Sugar_Constraint",
        LinearExpression::new().with_term(lemonade, RB!(1)),
        ConstraintType::Less,
        RB!(50),
    )?;
    model.add_constraint(
        "LemonJuice_Constraint",
        LinearExpression::new().with_term(lemonade, RB!(1)),
        ConstraintType::Less,
        RB!(30),
    )?;
    model.add_constraint(
        "FruitPuree_Constraint",
        LinearExpression::new().with_term(fruit_juice, RB!(2)),
        ConstraintType::Less,
        RB!(40),
    )?;
    model.set_objective(
        LinearExpression::new().with_term(lemonade, RB!(1)).with_term(fruit_juice, RB!(1))
    )?;

    Ok(model)
}

/// What is printed about a solved production model.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionReport {
    /// Outcome of the solve.
    pub status: Status,
    /// Optimal amount of lemonade, if there is an optimum.
    pub lemonade: Option<f64>,
    /// Optimal amount of fruit juice, if there is an optimum.
    pub fruit_juice: Option<f64>,
    /// Optimal objective value, if there is an optimum.
    pub total: Option<f64>,
}

impl ProductionReport {
    /// Summarize a result.
    pub fn new(result: &LinearProgramType<RationalBig>) -> Self {
        Self {
            status: result.status(),
            lemonade: result.value(LEMONADE).and_then(ToPrimitive::to_f64),
            fruit_juice: result.value(FRUIT_JUICE).and_then(ToPrimitive::to_f64),
            total: result.objective_value().and_then(ToPrimitive::to_f64),
        }
    }
}

impl fmt::Display for ProductionReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let show = |value: Option<f64>| value.map_or_else(|| "None".to_string(), format_float);

        writeln!(f, "Status: {}", self.status)?;
        writeln!(f, "Lemonade: {}", show(self.lemonade))?;
        writeln!(f, "FruitJuice: {}", show(self.fruit_juice))?;
        writeln!(f, "Total Products: {}", show(self.total))
    }
}
