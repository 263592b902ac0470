//! Optimizers that update leaf parameters from their accumulated gradients.
//!
//! An optimizer only reads `grad` and writes `value` through
//! [`Graph::set_value`](crate::graph::Graph::set_value); it never touches the
//! recorded expression.

pub mod optimizer_trait;
pub mod sgd;

pub use optimizer_trait::Optimizer;
pub use sgd::SgdOptimizer;
