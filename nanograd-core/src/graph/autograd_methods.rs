use super::Graph;
use crate::autograd::backward_op::apply_backward;
use crate::autograd::graph::topological_sort;
use crate::error::NanoGradError;
use crate::node::NodeId;

impl Graph {
    /// Computes the gradient of `root` with respect to every node it depends on.
    ///
    /// The reachable nodes are ordered so that each appears after its operands;
    /// `root.grad` is set to `1.0`, then the order is walked in reverse and each
    /// node's local rule runs exactly once, adding `partial * grad` to its operands.
    /// A node consumed along several paths therefore receives every contribution
    /// before its own rule distributes its gradient further.
    ///
    /// Gradients are accumulated, never reset: call [`Graph::zero_grad`] between
    /// backward passes over the same nodes.
    ///
    /// # Errors
    /// `InvalidNode` if `root` is not in the graph.
    pub fn backward(&mut self, root: NodeId) -> Result<(), NanoGradError> {
        let sorted_nodes = topological_sort(self, root)?;
        log::debug!(
            "backward: root {} with {} reachable nodes",
            root,
            sorted_nodes.len()
        );

        self.get_mut(root)?.grad = 1.0;

        let nodes = self.nodes_mut();
        for &node_id in sorted_nodes.iter().rev() {
            log::trace!("backward: applying local rule of {} ({})", node_id, nodes[node_id.index()]);
            apply_backward(nodes, node_id)?;
        }

        let non_finite = sorted_nodes
            .iter()
            .filter(|id| !nodes[id.index()].grad.is_finite())
            .count();
        if non_finite > 0 {
            log::warn!(
                "backward: {} node(s) reachable from {} hold a NaN or infinite gradient",
                non_finite,
                root
            );
        }
        Ok(())
    }

    /// Resets the gradient of every node to `0.0`.
    pub fn zero_grad(&mut self) {
        for node in self.nodes_mut() {
            node.grad = 0.0;
        }
    }

    /// Resets the gradient of a single node to `0.0`.
    pub fn zero_grad_of(&mut self, id: NodeId) -> Result<(), NanoGradError> {
        self.get_mut(id)?.grad = 0.0;
        Ok(())
    }
}
