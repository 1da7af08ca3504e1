//! Response testing infrastructure.
//!
//! Evaluates declarative assertion suites against received responses.

mod runner;

pub use runner::{run_assertion, run_suite};
