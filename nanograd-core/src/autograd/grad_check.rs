use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use thiserror::Error;

/// Error type specifically for gradient checking failures.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GradCheckError {
    #[error("Gradient check failed for input {input_index}: Analytical grad {analytical_grad:?} != Numerical grad {numerical_grad:?}. Difference: {difference:?}")]
    GradientMismatch {
        input_index: usize,
        analytical_grad: f64,
        numerical_grad: f64,
        difference: f64,
    },
    #[error("Forward function execution failed during gradient check: {0}")]
    ForwardPassError(NanoGradError),
    #[error("Backward pass execution failed during gradient check: {0}")]
    BackwardPassError(NanoGradError),
    #[error("Numerical gradient is NaN or infinite for input {input_index}. Details: f(x+eps): {value_plus:?}, f(x-eps): {value_minus:?}")]
    NumericalGradNaNOrInfinite {
        input_index: usize,
        value_plus: f64,
        value_minus: f64,
    },
    #[error("Analytical gradient is NaN or infinite for input {input_index}. Value: {value:?}")]
    AnalyticalGradNaNOrInfinite { input_index: usize, value: f64 },
    #[error("Graph error during gradient check: {0}")]
    GraphError(NanoGradError),
}

// Map NanoGradError to GradCheckError::GraphError
impl From<NanoGradError> for GradCheckError {
    fn from(err: NanoGradError) -> Self {
        GradCheckError::GraphError(err)
    }
}

/// Step size and acceptance threshold for [`check_grad`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradCheckConfig {
    /// Half-width of the centered finite difference.
    pub epsilon: f64,
    /// Maximum accepted absolute and relative difference.
    pub tolerance: f64,
}

impl Default for GradCheckConfig {
    fn default() -> Self {
        GradCheckConfig {
            epsilon: 1e-6,
            tolerance: 1e-4,
        }
    }
}

/// Checks analytical gradients against numerical gradients using finite differences.
///
/// `func` receives a fresh graph and one leaf per entry of `point`, builds an
/// expression and returns its root. The analytical gradient of the root with
/// respect to each leaf is compared with the centered difference
/// `(f(x + eps) - f(x - eps)) / (2 * eps)`; a mismatch is reported only when both
/// the absolute and the relative difference exceed `config.tolerance`.
pub fn check_grad<F>(func: F, point: &[f64], config: &GradCheckConfig) -> Result<(), GradCheckError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, NanoGradError>,
{
    // --- Analytical gradients ---
    let mut graph = Graph::with_capacity(point.len() * 4);
    let leaves: Vec<NodeId> = point.iter().map(|&v| graph.leaf(v)).collect();
    let root = func(&mut graph, &leaves).map_err(GradCheckError::ForwardPassError)?;
    graph
        .backward(root)
        .map_err(GradCheckError::BackwardPassError)?;

    let two = 2.0f64;
    let mut perturbed = point.to_vec();

    for (i, leaf) in leaves.iter().enumerate() {
        let analytical_grad = graph.grad(*leaf)?;

        // --- Numerical gradient ---
        perturbed[i] = point[i] + config.epsilon;
        let value_plus = evaluate(&func, &perturbed).map_err(GradCheckError::ForwardPassError)?;
        perturbed[i] = point[i] - config.epsilon;
        let value_minus = evaluate(&func, &perturbed).map_err(GradCheckError::ForwardPassError)?;
        perturbed[i] = point[i];

        let numerical_grad = (value_plus - value_minus) / (two * config.epsilon);

        if !numerical_grad.is_finite() {
            return Err(GradCheckError::NumericalGradNaNOrInfinite {
                input_index: i,
                value_plus,
                value_minus,
            });
        }
        if !analytical_grad.is_finite() {
            return Err(GradCheckError::AnalyticalGradNaNOrInfinite {
                input_index: i,
                value: analytical_grad,
            });
        }

        let difference = (analytical_grad - numerical_grad).abs();
        if difference > config.tolerance
            && (difference / (analytical_grad.abs() + config.epsilon)) > config.tolerance
        {
            return Err(GradCheckError::GradientMismatch {
                input_index: i,
                analytical_grad,
                numerical_grad,
                difference,
            });
        }
    }

    Ok(())
}

/// Centered finite-difference estimate of every partial derivative of `func` at `point`.
pub fn numerical_gradient<F>(func: F, point: &[f64], epsilon: f64) -> Result<Vec<f64>, NanoGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, NanoGradError>,
{
    let mut grads = Vec::with_capacity(point.len());
    let mut perturbed = point.to_vec();

    for i in 0..point.len() {
        perturbed[i] = point[i] + epsilon;
        let value_plus = evaluate(&func, &perturbed)?;
        perturbed[i] = point[i] - epsilon;
        let value_minus = evaluate(&func, &perturbed)?;
        perturbed[i] = point[i]; // restore

        grads.push((value_plus - value_minus) / (2.0 * epsilon));
    }

    Ok(grads)
}

/// Forward-only evaluation of `func` on a fresh graph.
fn evaluate<F>(func: &F, point: &[f64]) -> Result<f64, NanoGradError>
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, NanoGradError>,
{
    let mut graph = Graph::with_capacity(point.len() * 4);
    let leaves: Vec<NodeId> = point.iter().map(|&v| graph.leaf(v)).collect();
    let root = func(&mut graph, &leaves)?;
    graph.value(root)
}
