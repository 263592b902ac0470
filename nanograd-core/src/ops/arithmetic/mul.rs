use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_binary_op, Operand};

/// Records `a * b`.
pub fn mul_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NanoGradError> {
    apply_binary_op(graph, a, b, Op::Mul, |_, _| Ok(()), |a, b| a * b)
}

/// d(ab)/da = b, d(ab)/db = a.
pub(crate) fn mul_backward(a: f64, b: f64) -> (f64, f64) {
    (b, a)
}

#[cfg(test)]
#[path = "mul_test.rs"]
mod tests;
