//! # Integration tests
//!
//! Integration tests completely external from the crate. All code written in this module could be
//! written by an external user of the crate.
mod allocation;
mod configuration;
mod monte_carlo;
mod plot;
mod quadrature;
