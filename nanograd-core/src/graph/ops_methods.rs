use super::Graph;
use crate::error::NanoGradError;
use crate::node::NodeId;
use crate::ops::{self, Operand};

/// The operator catalog as methods, so expressions read `graph.mul(a, b)?`.
/// Every method delegates to the `ops` function of the same name.
impl Graph {
    pub fn add(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::add_op(self, a, b)
    }

    pub fn sub(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::sub_op(self, a, b)
    }

    pub fn neg(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::neg_op(self, a)
    }

    pub fn mul(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::mul_op(self, a, b)
    }

    /// See [`ops::div_op`]; fails with `DivisionByZero` on a zero divisor.
    pub fn div(&mut self, a: impl Into<Operand>, b: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::div_op(self, a, b)
    }

    /// See [`ops::pow_op`]; a constant exponent and a node exponent record different nodes.
    pub fn pow(
        &mut self,
        base: impl Into<Operand>,
        exponent: impl Into<Operand>,
    ) -> Result<NodeId, NanoGradError> {
        ops::pow_op(self, base, exponent)
    }

    pub fn tanh(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::tanh_op(self, a)
    }

    pub fn relu(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::relu_op(self, a)
    }

    pub fn sigmoid(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::sigmoid_op(self, a)
    }

    pub fn exp(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::exp_op(self, a)
    }

    /// See [`ops::ln_op`]; fails with `DomainError` on a negative input.
    pub fn log(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::ln_op(self, a)
    }

    pub fn sin(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::sin_op(self, a)
    }

    pub fn cos(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::cos_op(self, a)
    }

    pub fn tan(&mut self, a: impl Into<Operand>) -> Result<NodeId, NanoGradError> {
        ops::tan_op(self, a)
    }
}
