//! # Backward driver (`autograd`)
//!
//! - [`graph`]: dependency ordering of every node reachable from a backward root.
//! - [`backward_op`]: the single dispatch from an operator tag to its local rule,
//!   and the accumulation of the resulting contributions into operand gradients.
//! - [`grad_check`]: finite-difference verification of analytical gradients.
//!
//! The entry point is [`Graph::backward`](crate::graph::Graph::backward).

pub mod backward_op;
pub mod grad_check;
pub mod graph;

pub use grad_check::{check_grad, numerical_gradient, GradCheckConfig, GradCheckError};
