use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{NodeId, Op};
use crate::ops::{apply_binary_op, apply_unary_op, Operand, LOG_EPSILON};

/// Records `base ^ exponent`.
///
/// A constant exponent records a one-operand `PowConst` node; a node exponent
/// records a two-operand `Pow` node that also propagates a gradient to the
/// exponent.
///
/// # Errors
/// * `DomainError` for a negative base raised to a non-integer constant exponent,
///   or a negative base with a node exponent (whose derivative needs `ln(base)`).
/// * `DivisionByZero` for a zero base raised to a negative exponent.
pub fn pow_op(
    graph: &mut Graph,
    base: impl Into<Operand>,
    exponent: impl Into<Operand>,
) -> Result<NodeId, NanoGradError> {
    match exponent.into() {
        Operand::Const(p) => apply_unary_op(
            graph,
            base,
            Op::PowConst { exponent: p },
            |a| check_const_exponent(a, p),
            |a| a.powf(p),
        ),
        Operand::Node(exponent) => apply_binary_op(
            graph,
            base,
            exponent,
            Op::Pow,
            check_node_exponent,
            |a, b| a.powf(b),
        ),
    }
}

fn check_const_exponent(base: f64, exponent: f64) -> Result<(), NanoGradError> {
    if base < 0.0 && exponent.fract() != 0.0 {
        return Err(NanoGradError::DomainError {
            operation: "pow".to_string(),
            value: base,
            reason: format!("negative base with non-integer exponent {}", exponent),
        });
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(NanoGradError::DivisionByZero);
    }
    Ok(())
}

fn check_node_exponent(base: f64, exponent: f64) -> Result<(), NanoGradError> {
    if base < 0.0 {
        return Err(NanoGradError::DomainError {
            operation: "pow".to_string(),
            value: base,
            reason: "negative base with a node exponent".to_string(),
        });
    }
    if base == 0.0 && exponent < 0.0 {
        return Err(NanoGradError::DivisionByZero);
    }
    Ok(())
}

/// d(a^p)/da = p * a^(p - 1).
pub(crate) fn pow_const_backward(a: f64, p: f64) -> f64 {
    p * a.powf(p - 1.0)
}

/// d(a^b)/da = b * a^(b - 1), d(a^b)/db = ln(a + eps) * a^b.
pub(crate) fn pow_backward(a: f64, b: f64, out: f64) -> (f64, f64) {
    (b * a.powf(b - 1.0), (a + LOG_EPSILON).ln() * out)
}

#[cfg(test)]
#[path = "pow_test.rs"]
mod tests;
