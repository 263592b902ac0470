// Local derivative dispatch for the backward pass.

use crate::error::NanoGradError;
use crate::node::{Inputs, Node, NodeId, Op};
use crate::ops::activation::{relu::relu_backward, sigmoid::sigmoid_backward, tanh::tanh_backward};
use crate::ops::arithmetic::{
    add::add_backward, div::div_backward, mul::mul_backward, neg::neg_backward,
    pow::{pow_backward, pow_const_backward},
};
use crate::ops::math_elem::{
    cos::cos_backward, exp::exp_backward, ln::ln_backward, sin::sin_backward, tan::tan_backward,
};

/// Partial derivatives of a node's value with respect to each operand slot,
/// evaluated at the forward values captured when the node was built.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LocalGrads {
    None,
    Unary(f64),
    Binary(f64, f64),
}

/// Evaluates the local rule of `node` through a single match on its operator tag.
///
/// # Errors
/// `InternalError` if the operand slots do not fit the tag, which cannot happen for
/// nodes recorded by the operator catalog.
pub fn local_grads(node: &Node) -> Result<LocalGrads, NanoGradError> {
    let out = node.value;
    let grads = match (node.op, node.inputs) {
        (Op::Leaf, Inputs::None) => LocalGrads::None,
        (Op::Add, Inputs::Binary(_, _)) => {
            let (da, db) = add_backward();
            LocalGrads::Binary(da, db)
        }
        (Op::Neg, Inputs::Unary(_)) => LocalGrads::Unary(neg_backward()),
        (Op::Mul, Inputs::Binary(a, b)) => {
            let (da, db) = mul_backward(a.value, b.value);
            LocalGrads::Binary(da, db)
        }
        (Op::Div, Inputs::Binary(a, b)) => {
            let (da, db) = div_backward(a.value, b.value);
            LocalGrads::Binary(da, db)
        }
        (Op::PowConst { exponent }, Inputs::Unary(a)) => {
            LocalGrads::Unary(pow_const_backward(a.value, exponent))
        }
        (Op::Pow, Inputs::Binary(a, b)) => {
            let (da, db) = pow_backward(a.value, b.value, out);
            LocalGrads::Binary(da, db)
        }
        (Op::Tanh, Inputs::Unary(_)) => LocalGrads::Unary(tanh_backward(out)),
        (Op::Relu, Inputs::Unary(a)) => LocalGrads::Unary(relu_backward(a.value)),
        (Op::Exp, Inputs::Unary(_)) => LocalGrads::Unary(exp_backward(out)),
        (Op::Log, Inputs::Unary(a)) => LocalGrads::Unary(ln_backward(a.value)),
        (Op::Sin, Inputs::Unary(a)) => LocalGrads::Unary(sin_backward(a.value)),
        (Op::Cos, Inputs::Unary(a)) => LocalGrads::Unary(cos_backward(a.value)),
        (Op::Tan, Inputs::Unary(_)) => LocalGrads::Unary(tan_backward(out)),
        (Op::Sigmoid, Inputs::Unary(_)) => LocalGrads::Unary(sigmoid_backward(out)),
        (op, inputs) => {
            return Err(NanoGradError::InternalError(format!(
                "operator '{}' recorded with incompatible operands {:?}",
                op, inputs
            )))
        }
    };
    Ok(grads)
}

/// Applies the local rule of node `id` once: every operand slot receives
/// `partial * grad(id)`. Slots holding the same operand each contribute.
pub(crate) fn apply_backward(nodes: &mut [Node], id: NodeId) -> Result<(), NanoGradError> {
    let node = *nodes
        .get(id.index())
        .ok_or_else(|| missing(id, nodes.len()))?;
    let upstream = node.grad;

    match (local_grads(&node)?, node.inputs) {
        (LocalGrads::None, _) => {}
        (LocalGrads::Unary(da), Inputs::Unary(a)) => {
            accumulate(nodes, a.id, da * upstream)?;
        }
        (LocalGrads::Binary(da, db), Inputs::Binary(a, b)) => {
            accumulate(nodes, a.id, da * upstream)?;
            accumulate(nodes, b.id, db * upstream)?;
        }
        (grads, inputs) => {
            return Err(NanoGradError::InternalError(format!(
                "local gradients {:?} do not match operands {:?}",
                grads, inputs
            )))
        }
    }
    Ok(())
}

fn accumulate(nodes: &mut [Node], id: NodeId, contribution: f64) -> Result<(), NanoGradError> {
    let len = nodes.len();
    let node = nodes.get_mut(id.index()).ok_or_else(|| missing(id, len))?;
    node.grad += contribution;
    Ok(())
}

fn missing(id: NodeId, len: usize) -> NanoGradError {
    NanoGradError::InvalidNode {
        id: id.index(),
        len,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::Input;
    use approx::assert_relative_eq;

    fn input(id: usize, value: f64) -> Input {
        Input {
            id: NodeId(id),
            value,
        }
    }

    #[test]
    fn test_local_grads_mul_uses_captured_values() -> Result<(), NanoGradError> {
        let node = Node::derived(6.0, Op::Mul, Inputs::Binary(input(0, 2.0), input(1, 3.0)));
        assert_eq!(local_grads(&node)?, LocalGrads::Binary(3.0, 2.0));
        Ok(())
    }

    #[test]
    fn test_local_grads_sigmoid_at_zero() -> Result<(), NanoGradError> {
        let node = Node::derived(0.5, Op::Sigmoid, Inputs::Unary(input(0, 0.0)));
        match local_grads(&node)? {
            LocalGrads::Unary(d) => assert_relative_eq!(d, 0.25),
            other => panic!("Expected unary gradient, got {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_local_grads_rejects_mismatched_operands() {
        let node = Node::derived(1.0, Op::Add, Inputs::Unary(input(0, 1.0)));
        assert!(matches!(
            local_grads(&node),
            Err(NanoGradError::InternalError(_))
        ));
    }

    #[test]
    fn test_apply_backward_accumulates_both_slots_of_same_operand() -> Result<(), NanoGradError> {
        // out = a * a with a = 3
        let mut nodes = vec![
            Node::leaf(3.0),
            Node::derived(9.0, Op::Mul, Inputs::Binary(input(0, 3.0), input(0, 3.0))),
        ];
        nodes[1].grad = 1.0;
        apply_backward(&mut nodes, NodeId(1))?;
        assert_relative_eq!(nodes[0].grad, 6.0);
        Ok(())
    }

    #[test]
    fn test_apply_backward_on_leaf_is_noop() -> Result<(), NanoGradError> {
        let mut nodes = vec![Node::leaf(1.0)];
        nodes[0].grad = 1.0;
        apply_backward(&mut nodes, NodeId(0))?;
        assert_eq!(nodes[0].grad, 1.0);
        Ok(())
    }
}
