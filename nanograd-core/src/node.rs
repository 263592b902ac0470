//! Core records stored in the computation graph arena.
//!
//! A [`Node`] is created once, when the operation producing it is evaluated, and
//! lives in a [`Graph`](crate::graph::Graph) addressed by its [`NodeId`].

use std::fmt;

/// Stable index of a node inside its [`Graph`](crate::graph::Graph).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Tag identifying which catalog entry produced a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Op {
    /// Created directly from a number; no operands.
    Leaf,
    Add,
    Neg,
    Mul,
    Div,
    /// Power with a constant exponent: `a^exponent`.
    PowConst { exponent: f64 },
    /// Power whose exponent is itself a node: `a^b`.
    Pow,
    Tanh,
    Relu,
    Exp,
    Log,
    Sin,
    Cos,
    Tan,
    Sigmoid,
}

impl fmt::Display for Op {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Op::Leaf => write!(f, "leaf"),
            Op::Add => write!(f, "+"),
            Op::Neg => write!(f, "neg"),
            Op::Mul => write!(f, "*"),
            Op::Div => write!(f, "/"),
            Op::PowConst { exponent } => write!(f, "**{}", exponent),
            Op::Pow => write!(f, "pow"),
            Op::Tanh => write!(f, "tanh"),
            Op::Relu => write!(f, "relu"),
            Op::Exp => write!(f, "exp"),
            Op::Log => write!(f, "log"),
            Op::Sin => write!(f, "sin"),
            Op::Cos => write!(f, "cos"),
            Op::Tan => write!(f, "tan"),
            Op::Sigmoid => write!(f, "sigmoid"),
        }
    }
}

/// One operand slot: the operand's id and its forward value at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Input {
    pub id: NodeId,
    pub value: f64,
}

/// Fixed-size operand slots of a node. Slots are positional, so the same node
/// may fill both slots of a binary operation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Inputs {
    None,
    Unary(Input),
    Binary(Input, Input),
}

/// A recorded scalar computation: forward value, gradient accumulator and provenance.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub(crate) value: f64,
    pub(crate) grad: f64,
    pub(crate) op: Op,
    pub(crate) inputs: Inputs,
}

impl Node {
    pub(crate) fn leaf(value: f64) -> Self {
        Node {
            value,
            grad: 0.0,
            op: Op::Leaf,
            inputs: Inputs::None,
        }
    }

    pub(crate) fn derived(value: f64, op: Op, inputs: Inputs) -> Self {
        Node {
            value,
            grad: 0.0,
            op,
            inputs,
        }
    }

    /// Forward result of the operation that produced this node.
    pub fn value(&self) -> f64 {
        self.value
    }

    /// Accumulated gradient of the last backward root with respect to this node.
    pub fn grad(&self) -> f64 {
        self.grad
    }

    pub fn op(&self) -> Op {
        self.op
    }

    pub fn inputs(&self) -> Inputs {
        self.inputs
    }

    pub fn is_leaf(&self) -> bool {
        matches!(self.inputs, Inputs::None)
    }

    /// Ordered, deduplicated operand ids, in slot order.
    pub fn operands(&self) -> Vec<NodeId> {
        match self.inputs {
            Inputs::None => Vec::new(),
            Inputs::Unary(a) => vec![a.id],
            Inputs::Binary(a, b) if a.id == b.id => vec![a.id],
            Inputs::Binary(a, b) => vec![a.id, b.id],
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Node(value={:.4}, grad={:.4}, op='{}')",
            self.value, self.grad, self.op
        )
    }
}
