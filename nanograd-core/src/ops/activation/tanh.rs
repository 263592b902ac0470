use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `tanh(a)`.
pub fn tanh_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Tanh, no_check, f64::tanh)
}

/// d tanh(a)/da = 1 - tanh(a)^2, from the recorded output.
pub(crate) fn tanh_backward(out: f64) -> f64 {
    1.0 - out * out
}

#[cfg(test)]
#[path = "tanh_test.rs"]
mod tests;
