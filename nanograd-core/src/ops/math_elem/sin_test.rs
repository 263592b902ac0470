use super::*;
use crate::autograd::grad_check::{check_grad, GradCheckConfig};
use approx::assert_relative_eq;

#[test]
fn test_sin_forward_and_backward() -> Result<(), NanoGradError> {
    let mut graph = Graph::new();
    let a = graph.leaf(1.0);
    let s = sin_op(&mut graph, a)?;

    assert_relative_eq!(graph.value(s)?, 1.0_f64.sin());
    graph.backward(s)?;
    assert_relative_eq!(graph.grad(a)?, 1.0_f64.cos());
    Ok(())
}

#[test]
fn test_sin_chain_rule() -> Result<(), NanoGradError> {
    // z = sin(x^2), dz/dx = cos(x^2) * 2x
    let mut graph = Graph::new();
    let x = graph.leaf(2.0);
    let sq = graph.pow(x, 2.0)?;
    let z = sin_op(&mut graph, sq)?;

    graph.backward(z)?;
    assert_relative_eq!(graph.grad(x)?, 4.0_f64.cos() * 4.0, epsilon = 1e-12);
    Ok(())
}

#[test]
fn test_sin_grad_check() {
    let config = GradCheckConfig::default();
    for x in [-2.0, 0.0, 0.5, 3.0] {
        let result = check_grad(|g, v| sin_op(g, v[0]), &[x], &config);
        assert_eq!(result, Ok(()), "sin grad check failed at {}", x);
    }
}
