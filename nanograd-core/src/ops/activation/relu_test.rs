use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};

#[test]
fn test_relu_forward() -> Result<(), NanoGradError> {
    let mut graph = Graph::new();
    let pos = relu_op(&mut graph, 1.5)?;
    let neg = relu_op(&mut graph, -2.0)?;
    let zero = relu_op(&mut graph, 0.0)?;

    assert_eq!(graph.value(pos)?, 1.5);
    assert_eq!(graph.value(neg)?, 0.0);
    assert_eq!(graph.value(zero)?, 0.0);
    Ok(())
}

#[test]
fn test_relu_backward_gates_on_sign() -> Result<(), NanoGradError> {
    for (x, expected) in [(2.0, 1.0), (-2.0, 0.0), (0.0, 0.0)] {
        let mut graph = Graph::new();
        let a = graph.leaf(x);
        let r = relu_op(&mut graph, a)?;
        graph.backward(r)?;
        assert_eq!(graph.grad(a)?, expected, "relu gradient at {}", x);
    }
    Ok(())
}

#[test]
fn test_relu_grad_check() {
    let config = GradCheckConfig::default();
    // Away from the kink at zero.
    for x in [-1.5, 0.3, 4.0] {
        let result = check_grad(|g, v| relu_op(g, v[0]), &[x], &config);
        assert_eq!(result, Ok(()), "relu grad check failed at {}", x);
    }
}
