use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `1 / (1 + e^-a)`.
pub fn sigmoid_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Sigmoid, no_check, |a| 1.0 / (1.0 + (-a).exp()))
}

/// s * (1 - s), from the recorded output `s`.
pub(crate) fn sigmoid_backward(out: f64) -> f64 {
    out * (1.0 - out)
}

#[cfg(test)]
#[path = "sigmoid_test.rs"]
mod tests;
