use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Trait defining the common interface for all optimizers.
pub trait Optimizer {
    /// Performs a single optimization step, writing new values into the
    /// parameter leaves of `graph` from their current gradients.
    ///
    /// # Errors
    /// `InvalidNode` or `NotALeaf` if a managed parameter is not a leaf of `graph`.
    fn step(&mut self, graph: &mut Graph) -> Result<(), NanoGradError>;

    /// Clears the gradients of all parameters managed by the optimizer.
    ///
    /// The engine itself never resets gradients, so this is typically called
    /// before each backward pass of a training loop.
    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), NanoGradError>;

    /// The parameters this optimizer updates.
    fn params(&self) -> &[NodeId];
}
