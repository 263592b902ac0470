use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `tan(a)`.
pub fn tan_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Tan, no_check, f64::tan)
}

/// sec^2(a) = 1 + tan(a)^2, from the recorded output.
pub(crate) fn tan_backward(out: f64) -> f64 {
    1.0 + out * out
}

#[cfg(test)]
#[path = "tan_test.rs"]
mod tests;
