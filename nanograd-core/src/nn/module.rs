use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// The base trait for all neural network modules (neurons, layers, networks).
pub trait Module: std::fmt::Debug {
    /// Performs a forward pass, recording the computation into `graph`.
    ///
    /// # Errors
    /// `DimensionMismatch` if `input` does not have the width the module was built
    /// for, or any error raised by the underlying operations.
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, NanoGradError>;

    /// Returns all learnable parameters (leaf nodes), including those of sub-modules.
    fn parameters(&self) -> Vec<NodeId>;

    /// Returns the parameters along with hierarchical names
    /// (e.g. "layers.0.neurons.1.weight.2").
    fn named_parameters(&self) -> Vec<(String, NodeId)>;
}
