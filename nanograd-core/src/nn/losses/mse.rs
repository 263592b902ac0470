use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// How the per-sample squared errors are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reduction {
    #[default]
    Mean,
    Sum,
}

/// Mean squared error between `predictions` and fixed `targets`.
///
/// Records `(p_i - t_i)^2` for every pair, sums them and divides by the count,
/// so `backward` on the result gives `2 (p_i - t_i) / n` on each prediction.
pub fn mse_loss(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[f64],
) -> Result<NodeId, NanoGradError> {
    mse_loss_with(graph, predictions, targets, Reduction::Mean)
}

/// [`mse_loss`] with an explicit reduction.
///
/// # Errors
/// * `DimensionMismatch` if the two slices differ in length.
/// * `EmptyInput` if there is nothing to compare.
pub fn mse_loss_with(
    graph: &mut Graph,
    predictions: &[NodeId],
    targets: &[f64],
    reduction: Reduction,
) -> Result<NodeId, NanoGradError> {
    if predictions.len() != targets.len() {
        return Err(NanoGradError::DimensionMismatch {
            expected: predictions.len(),
            actual: targets.len(),
        });
    }
    if predictions.is_empty() {
        return Err(NanoGradError::EmptyInput);
    }

    let mut total: Option<NodeId> = None;
    for (&p, &t) in predictions.iter().zip(targets) {
        let diff = graph.sub(p, t)?;
        let sq = graph.pow(diff, 2.0)?;
        total = Some(match total {
            Some(acc) => graph.add(acc, sq)?,
            None => sq,
        });
    }
    let total = total.ok_or(NanoGradError::EmptyInput)?;

    match reduction {
        Reduction::Mean => graph.div(total, predictions.len() as f64),
        Reduction::Sum => Ok(total),
    }
}

#[cfg(test)]
#[path = "mse_test.rs"]
mod tests;
