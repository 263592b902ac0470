use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `sin(a)`.
pub fn sin_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Sin, no_check, f64::sin)
}

pub(crate) fn sin_backward(a: f64) -> f64 {
    a.cos()
}

#[cfg(test)]
#[path = "sin_test.rs"]
mod tests;
