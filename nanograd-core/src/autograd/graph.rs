use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::NodeId;

/// Builds a topological sort of every node reachable from `root`.
///
/// Depth-first post-order over each node's ordered, deduplicated operands: a node
/// is appended only after all of its operands, and each node appears once. The
/// traversal keeps its own stack instead of recursing, so long chains (sums over
/// many terms) do not exhaust the call stack; the resulting order is the same as
/// the recursive post-order.
pub(crate) fn topological_sort(graph: &Graph, root: NodeId) -> Result<Vec<NodeId>, NanoGradError> {
    graph.get(root)?;
    let nodes = graph.nodes();

    // Operands always have smaller ids than their consumers.
    let mut visited = vec![false; root.index() + 1];
    let mut sorted_list = Vec::new();
    let mut stack: Vec<(NodeId, bool)> = vec![(root, false)];

    while let Some((id, expanded)) = stack.pop() {
        if expanded {
            sorted_list.push(id);
            continue;
        }
        if visited[id.index()] {
            continue;
        }
        visited[id.index()] = true;
        stack.push((id, true));

        // Reversed so the first operand is explored first.
        for operand in nodes[id.index()].operands().into_iter().rev() {
            if !visited[operand.index()] {
                stack.push((operand, false));
            }
        }
    }

    Ok(sorted_list)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn position(order: &[NodeId], id: NodeId) -> usize {
        order
            .iter()
            .position(|&n| n == id)
            .expect("node missing from topological order")
    }

    #[test]
    fn test_topological_sort_simple() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let x = graph.leaf(1.0);
        let y = graph.leaf(2.0);
        let z = graph.add(x, y)?;

        let order = topological_sort(&graph, z)?;
        assert_eq!(order, vec![x, y, z]);
        Ok(())
    }

    #[test]
    fn test_topological_sort_shared_node() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let x = graph.leaf(1.0);
        // x is used twice: z = x * x
        let z = graph.mul(x, x)?;

        let order = topological_sort(&graph, z)?;
        assert_eq!(order.len(), 2);
        assert_eq!(order, vec![x, z]);
        Ok(())
    }

    #[test]
    fn test_topological_sort_diamond() -> Result<(), NanoGradError> {
        // d = (a + b) * (a - b); a and b each reach d along two paths.
        let mut graph = Graph::new();
        let a = graph.leaf(3.0);
        let b = graph.leaf(2.0);
        let s = graph.add(a, b)?;
        let t = graph.sub(a, b)?;
        let d = graph.mul(s, t)?;

        let order = topological_sort(&graph, d)?;
        let mut seen = order.clone();
        seen.sort();
        seen.dedup();
        assert_eq!(seen.len(), order.len(), "a node appears twice");

        for (id, node) in graph.iter() {
            if !order.contains(&id) {
                continue;
            }
            for operand in node.operands() {
                assert!(position(&order, operand) < position(&order, id));
            }
        }
        assert_eq!(*order.last().unwrap(), d);
        Ok(())
    }

    #[test]
    fn test_topological_sort_skips_unreachable_nodes() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let x = graph.leaf(1.0);
        let unrelated = graph.exp(x)?;
        let y = graph.tanh(x)?;

        let order = topological_sort(&graph, y)?;
        assert_eq!(order, vec![x, y]);
        assert!(!order.contains(&unrelated));
        Ok(())
    }

    #[test]
    fn test_topological_sort_long_chain() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut acc = graph.leaf(0.0);
        for _ in 0..100_000 {
            acc = graph.add(acc, 1.0)?;
        }
        let order = topological_sort(&graph, acc)?;
        assert_eq!(order.len(), graph.len());
        Ok(())
    }

    #[test]
    fn test_topological_sort_invalid_root() {
        let graph = Graph::new();
        assert_eq!(
            topological_sort(&graph, NodeId(0)),
            Err(NanoGradError::InvalidNode { id: 0, len: 0 })
        );
    }
}
