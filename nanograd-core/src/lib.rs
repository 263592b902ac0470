//! # nanograd-core
//!
//! Reverse-mode automatic differentiation over scalar `f64` values.
//!
//! Operations are recorded into a [`Graph`] arena while they are evaluated; calling
//! [`Graph::backward`] on a root node then fills the `grad` of every node the root
//! depends on with the derivative of the root with respect to that node.
//!
//! ```
//! use nanograd_core::{Graph, NanoGradError};
//!
//! # fn main() -> Result<(), NanoGradError> {
//! let mut graph = Graph::new();
//! let a = graph.leaf(2.0);
//! let b = graph.leaf(3.0);
//!
//! // c = a * b + a
//! let ab = graph.mul(a, b)?;
//! let c = graph.add(ab, a)?;
//! assert_eq!(graph.value(c)?, 8.0);
//!
//! graph.backward(c)?;
//! assert_eq!(graph.grad(a)?, 4.0); // b + 1
//! assert_eq!(graph.grad(b)?, 2.0); // a
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`graph`]: the arena, node accessors and leaf updates.
//! - [`ops`]: the operator catalog (arithmetic, activations, elementary functions).
//! - [`autograd`]: topological ordering, local-rule dispatch, gradient checking.
//! - [`nn`] and [`optim`]: small neuron/layer/MLP building blocks and SGD on top of
//!   the engine.

pub mod autograd;
pub mod error;
pub mod graph;
pub mod node;
pub mod ops;

pub mod nn;
pub mod optim;
pub mod utils;

pub use error::NanoGradError;
pub use graph::Graph;
pub use node::{Input, Inputs, Node, NodeId, Op};
pub use ops::Operand;
