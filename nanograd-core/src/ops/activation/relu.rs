use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `max(a, 0)`.
pub fn relu_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Relu, no_check, |a| if a > 0.0 { a } else { 0.0 })
}

/// 1 for a positive input, 0 otherwise (including exactly 0).
pub(crate) fn relu_backward(a: f64) -> f64 {
    if a > 0.0 {
        1.0
    } else {
        0.0
    }
}

#[cfg(test)]
#[path = "relu_test.rs"]
mod tests;
