use lpquad::algorithm::Solver;
use lpquad::algorithm::two_phase::TwoPhase;
use lpquad::algorithm::two_phase::strategy::pivot_rule::{FirstProfitableWithMemory, SteepestDescentAlongVariable};
use lpquad::data::linear_program::elements::{ConstraintType, LinearProgramType, Objective, Status};
use lpquad::data::linear_program::model::{ConstraintModel, LinearExpression};
use lpquad::data::number_types::RationalBig;
use lpquad::demo::production::{production_model, ProductionReport};
use lpquad::error::ModelError;
use lpquad::RB;

#[test]
fn production() {
    let result = production_model().unwrap().solve();

    assert_eq!(result.status(), Status::Optimal);
    assert_eq!(result.value("Lemonade"), Some(&RB!(30)));
    assert_eq!(result.value("FruitJuice"), Some(&RB!(20)));
    assert_eq!(result.objective_value(), Some(&RB!(50)));

    let report = ProductionReport::new(&result);
    assert_eq!(
        report.to_string().lines().collect::<Vec<_>>(),
        vec!["Status: Optimal", "Lemonade: 30.0", "FruitJuice: 20.0", "Total Products: 50.0"],
    );
}

#[test]
fn production_with_other_pivot_rules() {
    let model = production_model().unwrap();

    let with_memory = TwoPhase::<FirstProfitableWithMemory>::new().solve(&model);
    let steepest = TwoPhase::<SteepestDescentAlongVariable>::new().solve(&model);
    for result in [with_memory, steepest] {
        assert_eq!(result.objective_value(), Some(&RB!(50)));
        assert_eq!(result.value("Lemonade"), Some(&RB!(30)));
    }
}

/// Diet problem: `min 2a + 3b, s.t. a + 2b >= 4, 3a + b >= 6`, optimum at `(8/5, 6/5)`.
#[test]
fn diet() {
    let mut model = ConstraintModel::<RationalBig>::new("diet", Objective::Minimize);
    let a = model.add_variable("a").unwrap();
    let b = model.add_variable("b").unwrap();
    model.add_constraint(
        "protein",
        LinearExpression::new().with_term(a, RB!(1)).with_term(b, RB!(2)),
        ConstraintType::Greater,
        RB!(4),
    ).unwrap();
    model.add_constraint(
        "energy",
        LinearExpression::new().with_term(a, RB!(3)).with_term(b, RB!(1)),
        ConstraintType::Greater,
        RB!(6),
    ).unwrap();
    model.set_objective(LinearExpression::new().with_term(a, RB!(2)).with_term(b, RB!(3))).unwrap();

    let result = model.solve();
    assert_eq!(result.value("a"), Some(&RB!(8, 5)));
    assert_eq!(result.value("b"), Some(&RB!(6, 5)));
    assert_eq!(result.objective_value(), Some(&RB!(34, 5)));
}

#[test]
fn negative_right_hand_side() {
    // -x <= -3 is x >= 3
    let mut model = ConstraintModel::<RationalBig>::new("flipped", Objective::Minimize);
    let x = model.add_variable("x").unwrap();
    model.add_constraint(
        "at least three",
        LinearExpression::new().with_term(x, RB!(-1)),
        ConstraintType::Less,
        RB!(-3),
    ).unwrap();
    model.set_objective(LinearExpression::new().with_term(x, RB!(1))).unwrap();

    assert_eq!(model.solve().value("x"), Some(&RB!(3)));
}

#[test]
fn statuses() {
    let mut model = ConstraintModel::<RationalBig>::new("conflict", Objective::Maximize);
    let x = model.add_variable("x").unwrap();
    model.add_constraint("low", LinearExpression::new().with_term(x, RB!(1)), ConstraintType::Equal, RB!(1)).unwrap();
    model.add_constraint("high", LinearExpression::new().with_term(x, RB!(1)), ConstraintType::Equal, RB!(2)).unwrap();
    model.set_objective(LinearExpression::new().with_term(x, RB!(1))).unwrap();
    let result = model.solve();
    assert_eq!(result, LinearProgramType::Infeasible);
    assert_eq!(ProductionReport::new(&result).to_string(), "Status: Infeasible\nLemonade: None\nFruitJuice: None\nTotal Products: None\n");

    let mut model = ConstraintModel::<RationalBig>::new("open", Objective::Maximize);
    let x = model.add_variable("x").unwrap();
    model.add_constraint("floor", LinearExpression::new().with_term(x, RB!(1)), ConstraintType::Greater, RB!(1)).unwrap();
    model.set_objective(LinearExpression::new().with_term(x, RB!(1))).unwrap();
    assert_eq!(model.solve().status().to_string(), "Unbounded");
}

#[test]
fn malformed_models() {
    let mut model = ConstraintModel::<RationalBig>::new("malformed", Objective::Maximize);
    model.add_variable("x").unwrap();
    assert_eq!(model.add_variable("x"), Err(ModelError::DuplicateName("x".to_string())));
    assert_eq!(model.add_variable("  "), Err(ModelError::EmptyName));

    let mut other = ConstraintModel::<RationalBig>::new("other", Objective::Maximize);
    other.add_variable("a").unwrap();
    let foreign = other.add_variable("b").unwrap();
    let result = model.set_objective(LinearExpression::new().with_term(foreign, RB!(1)));
    assert_eq!(result, Err(ModelError::UnknownVariable(1)));

    let mut third = ConstraintModel::<RationalBig>::new("third", Objective::Minimize);
    let same_index = third.add_variable("x").unwrap();
    let result = model.add_constraint(
        "foreign",
        LinearExpression::new().with_term(same_index, RB!(1)),
        ConstraintType::Less,
        RB!(1),
    );
    assert_eq!(result, Err(ModelError::UnknownVariable(0)));
}
