//! # Integration tests that require a look inside the crate.
//!
//! Convention for function names:
//!
//! * `fn model()`
//! * `fn matrix_data_form()`
//! * `fn relaxation_solution()`
