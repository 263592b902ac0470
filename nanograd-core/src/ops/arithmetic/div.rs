use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_binary_op, Operand};

/// Records `a / b`.
///
/// # Errors
/// `DivisionByZero` if the divisor's forward value is exactly zero. The check runs
/// before anything is recorded, including a promoted constant operand.
pub fn div_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NanoGradError> {
    apply_binary_op(
        graph,
        a,
        b,
        Op::Div,
        |_, b| {
            if b == 0.0 {
                Err(NanoGradError::DivisionByZero)
            } else {
                Ok(())
            }
        },
        |a, b| a / b,
    )
}

/// d(a/b)/da = 1/b, d(a/b)/db = -a/b^2.
pub(crate) fn div_backward(a: f64, b: f64) -> (f64, f64) {
    (1.0 / b, -a / (b * b))
}

#[cfg(test)]
#[path = "div_test.rs"]
mod tests;
