use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::ops::arithmetic::{add_op, neg_op};
use crate::ops::Operand;

/// Records `a - b` as `a + (-b)`.
///
/// A node subtrahend gets a `Neg` node; a constant subtrahend is negated before
/// it is wrapped, so `x - 3.0` records `x + (-3.0)`.
pub fn sub_op(
    graph: &mut Graph,
    a: impl Into<Operand>,
    b: impl Into<Operand>,
) -> Result<NodeId, NanoGradError> {
    let a = a.into();
    // Validate the minuend before recording the negation.
    a.peek(graph)?;
    match b.into() {
        Operand::Const(value) => add_op(graph, a, -value),
        Operand::Node(id) => {
            let negated = neg_op(graph, id)?;
            add_op(graph, a, negated)
        }
    }
}

#[cfg(test)]
#[path = "sub_test.rs"]
mod tests;
