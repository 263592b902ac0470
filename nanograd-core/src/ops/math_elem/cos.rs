use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `cos(a)`.
pub fn cos_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Cos, no_check, f64::cos)
}

pub(crate) fn cos_backward(a: f64) -> f64 {
    -a.sin()
}

#[cfg(test)]
#[path = "cos_test.rs"]
mod tests;
