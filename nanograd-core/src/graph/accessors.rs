use super::Graph;
use crate::error::NanoGradError;
use crate::node::{Node, NodeId, Op};

impl Graph {
    /// Returns a copy of the node record.
    pub fn node(&self, id: NodeId) -> Result<Node, NanoGradError> {
        self.get(id).copied()
    }

    /// Forward value of a node. Reading never changes it.
    pub fn value(&self, id: NodeId) -> Result<f64, NanoGradError> {
        Ok(self.get(id)?.value)
    }

    /// Gradient accumulated into a node by the backward passes run so far.
    pub fn grad(&self, id: NodeId) -> Result<f64, NanoGradError> {
        Ok(self.get(id)?.grad)
    }

    pub fn op(&self, id: NodeId) -> Result<Op, NanoGradError> {
        Ok(self.get(id)?.op)
    }

    /// Ordered, deduplicated operand ids of a node.
    pub fn operands(&self, id: NodeId) -> Result<Vec<NodeId>, NanoGradError> {
        Ok(self.get(id)?.operands())
    }

    pub fn is_leaf(&self, id: NodeId) -> Result<bool, NanoGradError> {
        Ok(self.get(id)?.is_leaf())
    }

    /// Overwrites the value of a leaf node, e.g. a parameter update
    /// `value <- value - lr * grad`.
    ///
    /// Nodes already built from this leaf keep the forward value they captured.
    ///
    /// # Errors
    /// * `InvalidNode` if `id` is not in the graph.
    /// * `NotALeaf` if the node was produced by an operation.
    pub fn set_value(&mut self, id: NodeId, value: f64) -> Result<(), NanoGradError> {
        let node = self.get_mut(id)?;
        if !node.is_leaf() {
            return Err(NanoGradError::NotALeaf { id: id.index() });
        }
        node.value = value;
        Ok(())
    }

    /// Iterates over `(id, node)` pairs in creation order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.nodes()
            .iter()
            .enumerate()
            .map(|(index, node)| (NodeId(index), node))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_value_on_leaf() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.mul(a, 3.0)?;

        graph.set_value(a, 2.0)?;
        assert_eq!(graph.value(a)?, 2.0);
        // Consumers keep their recorded forward value.
        assert_eq!(graph.value(b)?, 3.0);
        Ok(())
    }

    #[test]
    fn test_set_value_rejects_derived_node() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.neg(a)?;
        assert_eq!(
            graph.set_value(b, 5.0),
            Err(NanoGradError::NotALeaf { id: b.index() })
        );
        assert_eq!(graph.value(b)?, -1.0);
        Ok(())
    }

    #[test]
    fn test_iter_and_operands() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        let b = graph.leaf(2.0);
        let c = graph.add(a, b)?;

        let ops: Vec<Op> = graph.iter().map(|(_, node)| node.op()).collect();
        assert_eq!(ops, vec![Op::Leaf, Op::Leaf, Op::Add]);
        assert_eq!(graph.operands(c)?, vec![a, b]);
        assert_eq!(graph.node(c)?.value(), 3.0);
        Ok(())
    }
}
