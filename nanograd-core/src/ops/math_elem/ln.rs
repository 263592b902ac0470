use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_unary_op, Operand, LOG_EPSILON};

/// Records the natural logarithm `ln(a + eps)`.
///
/// The epsilon keeps `ln(0)` finite; the local rule at zero is still `1/0`.
///
/// # Errors
/// `DomainError` if `a` is negative.
pub fn ln_op(graph: &mut Graph, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
    apply_unary_op(
        graph,
        a,
        Op::Log,
        |a| {
            if a < 0.0 {
                Err(NanoGradError::DomainError {
                    operation: "log".to_string(),
                    value: a,
                    reason: "logarithm of a negative value".to_string(),
                })
            } else {
                Ok(())
            }
        },
        |a| (a + LOG_EPSILON).ln(),
    )
}

/// d ln(a)/da = 1/a.
pub(crate) fn ln_backward(a: f64) -> f64 {
    1.0 / a
}

#[cfg(test)]
#[path = "ln_test.rs"]
mod tests;
