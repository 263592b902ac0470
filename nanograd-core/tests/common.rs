use nanograd_core::autograd::{check_grad, GradCheckConfig};
use nanograd_core::{Graph, NanoGradError, NodeId};

// Shared by several test crates; not every crate uses every helper.
#[allow(dead_code)]
pub fn leaves(graph: &mut Graph, values: &[f64]) -> Vec<NodeId> {
    values.iter().map(|&v| graph.leaf(v)).collect()
}

/// Runs a finite-difference check at every point, panicking with the failing point.
#[allow(dead_code)]
pub fn assert_grad_check_at<F>(name: &str, func: F, points: &[&[f64]])
where
    F: Fn(&mut Graph, &[NodeId]) -> Result<NodeId, NanoGradError>,
{
    let config = GradCheckConfig::default();
    for point in points {
        if let Err(e) = check_grad(&func, point, &config) {
            panic!("{} grad check failed at {:?}: {}", name, point, e);
        }
    }
}
