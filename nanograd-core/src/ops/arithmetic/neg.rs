use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, no_check, Operand};

/// Records `-a`.
pub fn neg_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(graph, a, Op::Neg, no_check, |a| -a)
}

pub(crate) fn neg_backward() -> f64 {
    -1.0
}

#[cfg(test)]
#[path = "neg_test.rs"]
mod tests;
