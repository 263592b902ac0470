//! # Operator catalog (`ops`)
//!
//! One entry per supported operation, grouped by family:
//!
//! - [`arithmetic`]: add, sub, neg, mul, div, pow.
//! - [`activation`]: tanh, relu, sigmoid.
//! - [`math_elem`]: exp, log, sin, cos, tan.
//!
//! ## Structure:
//!
//! - **`_op` functions:** each entry has a forward function (`add_op`, `tanh_op`, ...)
//!   that validates its operands, computes the forward value, and pushes a new node
//!   whose operand slots capture the forward values of its inputs. They are also
//!   exposed as methods on [`Graph`](crate::graph::Graph).
//! - **`_backward` functions:** the local derivative rule of the entry, evaluated
//!   from the captured forward values. The backward driver dispatches to them from a
//!   single `match` on the node's [`Op`](crate::node::Op) tag
//!   (see [`crate::autograd::backward_op`]).
//! - **[`Operand`]:** operators accept either an existing node or a raw constant;
//!   constants are wrapped into leaf nodes with
//!   [`Graph::constant`](crate::graph::Graph::constant).

pub mod activation;
pub mod arithmetic;
pub mod math_elem;
mod operand;

pub use activation::{relu_op, sigmoid_op, tanh_op};
pub use arithmetic::{add_op, div_op, mul_op, neg_op, pow_op, sub_op};
pub use math_elem::{cos_op, exp_op, ln_op, sin_op, tan_op};
pub use operand::Operand;

use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{Inputs, Node, NodeId, Op};

/// Offset applied to `log` arguments and to the base in the exponent derivative of
/// `pow`, so that a zero argument does not hit `ln(0)`.
pub const LOG_EPSILON: f64 = 1e-20;

/// Helper shared by the unary entries: resolves the operand, checks the domain,
/// computes the forward value and records the node.
pub(crate) fn apply_unary_op<C, F>(
    graph: &mut Graph,
    a: impl Into<Operand>,
    op: Op,
    check: C,
    forward: F,
) -> Result<NodeId, NanoGradError>
where
    C: FnOnce(f64) -> Result<(), NanoGradError>,
    F: FnOnce(f64) -> f64,
{
    let a = a.into();
    check(a.peek(graph)?)?;
    let input = a.resolve(graph)?;
    let value = forward(input.value);
    Ok(graph.push(Node::derived(value, op, Inputs::Unary(input))))
}

/// Binary counterpart of [`apply_unary_op`]. Both operands are resolved (lhs first)
/// only after `check` accepted their values, so a rejected operation records nothing.
pub(crate) fn apply_binary_op<C, F>(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
    op: Op,
    check: C,
    forward: F,
) -> Result<NodeId, NanoGradError>
where
    C: FnOnce(f64, f64) -> Result<(), NanoGradError>,
    F: FnOnce(f64, f64) -> f64,
{
    let a = a.into();
    let b = b.into();
    check(a.peek(graph)?, b.peek(graph)?)?;
    let lhs = a.resolve(graph)?;
    let rhs = b.resolve(graph)?;
    let value = forward(lhs.value, rhs.value);
    Ok(graph.push(Node::derived(value, op, Inputs::Binary(lhs, rhs))))
}

/// `check` for entries defined on the whole real line.
pub(crate) fn no_check(_: f64) -> Result<(), NanoGradError> {
    Ok(())
}
