//! # Computation graph arena (`graph`)
//!
//! A [`Graph`] owns every [`Node`] recorded during a forward pass. Nodes refer to
//! their operands by [`NodeId`], which is their index in the arena, so an operand
//! always has a smaller id than the node that consumes it and the graph is a DAG
//! by construction.
//!
//! The arena is meant to be scoped to one forward/backward cycle: parameters are
//! created first, the caller records `graph.len()` as a mark, and after the update
//! step `graph.truncate(mark)` drops every intermediate node while keeping the
//! parameters.
//!
//! Methods are split across files the same way as the operations they expose:
//! - `accessors.rs`: reading nodes and writing leaf values.
//! - `ops_methods.rs`: the operator catalog as methods.
//! - `autograd_methods.rs`: `backward` and gradient reset.

use crate::error::NanoGradError;
use crate::node::{Input, Node, NodeId};

mod accessors;
mod autograd_methods;
mod ops_methods;

/// Arena holding the nodes of one computation graph.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    nodes: Vec<Node>,
}

impl Graph {
    pub fn new() -> Self {
        Graph { nodes: Vec::new() }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Graph {
            nodes: Vec::with_capacity(capacity),
        }
    }

    /// Creates a leaf node (an input or parameter) holding `value`.
    pub fn leaf(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Wraps a numeric constant into a fresh leaf node.
    ///
    /// Operators call this whenever an operand is a literal rather than a node.
    pub fn constant(&mut self, value: f64) -> NodeId {
        self.push(Node::leaf(value))
    }

    /// Number of nodes currently recorded.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Drops every node with an id `>= len`. Ids of the dropped nodes become invalid.
    pub fn truncate(&mut self, len: usize) {
        if len < self.nodes.len() {
            log::debug!(
                "Graph::truncate: dropping {} nodes (keeping {})",
                self.nodes.len() - len,
                len
            );
            self.nodes.truncate(len);
        }
    }

    /// Drops every node.
    pub fn clear(&mut self) {
        log::debug!("Graph::clear: dropping {} nodes", self.nodes.len());
        self.nodes.clear();
    }

    pub(crate) fn push(&mut self, node: Node) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(node);
        id
    }

    pub(crate) fn get(&self, id: NodeId) -> Result<&Node, NanoGradError> {
        let len = self.nodes.len();
        self.nodes
            .get(id.0)
            .ok_or(NanoGradError::InvalidNode { id: id.0, len })
    }

    pub(crate) fn get_mut(&mut self, id: NodeId) -> Result<&mut Node, NanoGradError> {
        let len = self.nodes.len();
        self.nodes
            .get_mut(id.0)
            .ok_or(NanoGradError::InvalidNode { id: id.0, len })
    }

    /// Snapshot of an operand slot: the operand's id and its current forward value.
    pub(crate) fn input(&self, id: NodeId) -> Result<Input, NanoGradError> {
        let node = self.get(id)?;
        Ok(Input {
            id,
            value: node.value,
        })
    }

    pub(crate) fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub(crate) fn nodes_mut(&mut self) -> &mut [Node] {
        &mut self.nodes
    }
}
