use crate::graph::Graph;
use crate::node::NodeId;

/// Checks that the gradient held by `id` is within `tolerance` of `expected`.
/// Panics if the node is missing or the gradient differs significantly.
pub fn check_grad_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let actual = match graph.grad(id) {
        Ok(grad) => grad,
        Err(e) => panic!("Failed to read gradient of node {}: {}", id, e),
    };
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Gradient mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual, expected, diff, tolerance
        );
    }
}

/// Same as [`check_grad_near`] for forward values.
pub fn check_value_near(graph: &Graph, id: NodeId, expected: f64, tolerance: f64) {
    let actual = match graph.value(id) {
        Ok(value) => value,
        Err(e) => panic!("Failed to read value of node {}: {}", id, e),
    };
    let diff = (actual - expected).abs();
    if !(diff <= tolerance) {
        panic!(
            "Value mismatch at node {}: actual={:?}, expected={:?}, diff={:?}, tolerance={:?}",
            id, actual, expected, diff, tolerance
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_grad_near_accepts_close_values() {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        check_value_near(&graph, a, 1.0 + 1e-10, 1e-9);
        check_grad_near(&graph, a, 0.0, 0.0);
    }

    #[test]
    #[should_panic(expected = "Gradient mismatch")]
    fn test_check_grad_near_panics_on_mismatch() {
        let mut graph = Graph::new();
        let a = graph.leaf(1.0);
        check_grad_near(&graph, a, 1.0, 1e-6);
    }

    #[test]
    #[should_panic(expected = "Failed to read value")]
    fn test_check_value_near_panics_on_missing_node() {
        let graph = Graph::new();
        check_value_near(&graph, NodeId(0), 0.0, 1e-6);
    }
}
