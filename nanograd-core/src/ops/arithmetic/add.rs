use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_binary_op, Operand};

/// Records `a + b`.
pub fn add_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NanoGradError> {
    apply_binary_op(graph, a, b, Op::Add, |_, _| Ok(()), |a, b| a + b)
}

/// d(a + b)/da = 1, d(a + b)/db = 1.
pub(crate) fn add_backward() -> (f64, f64) {
    (1.0, 1.0)
}

#[cfg(test)]
#[path = "add_test.rs"]
mod tests;
