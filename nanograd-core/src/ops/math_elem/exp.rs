use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `e^a`.
pub fn exp_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Exp, no_check, f64::exp)
}

/// d e^a/da = e^a, from the recorded output.
pub(crate) fn exp_backward(out: f64) -> f64 {
    out
}

#[cfg(test)]
#[path = "exp_test.rs"]
mod tests;
