//! # Linear programs and numerical integration
//!
//! Two small numerical toolkits and the demonstrations built on them:
//!
//! * `algorithm` and `data` model linear programs over named variables and solve them exactly
//!   with the two phase simplex method, as described in the book Combinatorial Optimization by
//!   Christos H. Papadimitriou and Kenneth Steiglitz.
//! * `integration` estimates definite integrals by rejection sampling and by adaptive
//!   Gauss-Kronrod quadrature, and `plot` draws the area under a curve.
#![warn(missing_docs)]

pub mod algorithm;
pub mod config;
pub mod data;
pub mod demo;
pub mod error;
pub mod integration;
pub mod logging;
pub mod plot;

#[cfg(test)]
mod tests;
