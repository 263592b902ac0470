use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::{Input, NodeId};

/// Argument of an operator: an existing node, or a raw constant that is wrapped
/// into a leaf node when the operation is recorded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand {
    Node(NodeId),
    Const(f64),
}

impl From<NodeId> for Operand {
    fn from(id: NodeId) -> Self {
        Operand::Node(id)
    }
}

impl From<&NodeId> for Operand {
    fn from(id: &NodeId) -> Self {
        Operand::Node(*id)
    }
}

impl From<f64> for Operand {
    fn from(value: f64) -> Self {
        Operand::Const(value)
    }
}

impl Operand {
    /// Forward value of the operand without recording anything.
    pub(crate) fn peek(&self, graph: &Graph) -> Result<f64, NanoGradError> {
        match *self {
            Operand::Node(id) => graph.value(id),
            Operand::Const(value) => Ok(value),
        }
    }

    /// Turns the operand into an operand slot, promoting a constant to a leaf.
    pub(crate) fn resolve(self, graph: &mut Graph) -> Result<Input, NanoGradError> {
        match self {
            Operand::Node(id) => graph.input(id),
            Operand::Const(value) => {
                let id = graph.constant(value);
                Ok(Input { id, value })
            }
        }
    }
}
