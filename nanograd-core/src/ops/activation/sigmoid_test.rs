use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_sigmoid_at_zero() -> Result<(), NanoGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(0.0);
    let s = sigmoid_op(&mut graph, a)?;

    assert_eq!(graph.value(s)?, 0.5);
    graph.backward(s)?;
    assert_eq!(graph.grad(a)?, 0.25);
    Ok(())
}

#[test]
fn test_sigmoid_is_symmetric() -> Result<(), NanoGradError> {
    let mut graph = Graph::new();
    let p = sigmoid_op(&mut graph, 1.3)?;
    let n = sigmoid_op(&mut graph, -1.3)?;
    assert_relative_eq!(graph.value(p)? + graph.value(n)?, 1.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sigmoid_large_negative_input() -> Result<(), NanoGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(-800.0);
    let s = sigmoid_op(&mut graph, a)?;

    assert_eq!(graph.value(s)?, 0.0);
    graph.backward(s)?;
    assert_eq!(graph.grad(a)?, 0.0);
    Ok(())
}

#[test]
fn test_sigmoid_grad_check() {
    let config = GradCheckConfig::default();
    for x in [-3.0, -0.5, 0.0, 2.0] {
        let result = check_grad(|g, v| sigmoid_op(g, v[0]), &[x], &config);
        assert_eq!(result, Ok(()), "sigmoid grad check failed at {}", x);
    }
}
