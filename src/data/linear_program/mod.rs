//! # Representing linear programs
//!
//! A `ConstraintModel` is how a linear program is written down by a user: named variables with
//! bounds, named constraints of any type and an objective to minimize or maximize. Solvers turn
//! it into their own representation and report a `LinearProgramType`.
pub mod elements;
pub mod model;
pub mod solution;
