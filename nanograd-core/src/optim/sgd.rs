use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::node::NodeId;
use crate::optim::optimizer_trait::Optimizer;

/// Implements the Stochastic Gradient Descent (SGD) optimizer.
///
/// Supports momentum and weight decay. For each parameter:
///
/// ```text
/// d_p = grad + weight_decay * value
/// buf = momentum * buf + d_p        (when momentum != 0)
/// value = value - lr * buf_or_d_p
/// ```
#[derive(Debug, Clone)]
pub struct SgdOptimizer {
    params: Vec<NodeId>,
    lr: f64,
    momentum: f64,
    weight_decay: f64,
    momentum_buffers: Vec<f64>,
}

impl SgdOptimizer {
    /// Creates a new `SgdOptimizer`.
    ///
    /// # Arguments
    ///
    /// * `params`: The leaf nodes to optimize.
    /// * `lr`: The learning rate.
    /// * `momentum`: Momentum factor, `0.0` disables it.
    /// * `weight_decay`: L2 penalty factor, `0.0` disables it.
    pub fn new(params: impl IntoIterator<Item = NodeId>, lr: f64, momentum: f64, weight_decay: f64) -> Self {
        let params: Vec<NodeId> = params.into_iter().collect();
        let momentum_buffers = vec![0.0; params.len()];
        SgdOptimizer {
            params,
            lr,
            momentum,
            weight_decay,
            momentum_buffers,
        }
    }

    pub fn lr(&self) -> f64 {
        self.lr
    }

    pub fn set_lr(&mut self, lr: f64) {
        self.lr = lr;
    }

    pub fn momentum_buffers(&self) -> &[f64] {
        &self.momentum_buffers
    }
}

impl Optimizer for SgdOptimizer {
    fn step(&mut self, graph: &mut Graph) -> Result<(), NanoGradError> {
        log::debug!(
            "SgdOptimizer::step: {} params, lr={}, momentum={}, weight_decay={}",
            self.params.len(),
            self.lr,
            self.momentum,
            self.weight_decay
        );
        for (param, buffer) in self.params.iter().zip(self.momentum_buffers.iter_mut()) {
            let value = graph.value(*param)?;
            let mut d_p = graph.grad(*param)?;

            if self.weight_decay != 0.0 {
                d_p += self.weight_decay * value;
            }
            if self.momentum != 0.0 {
                *buffer = self.momentum * *buffer + d_p;
                d_p = *buffer;
            }

            graph.set_value(*param, value - self.lr * d_p)?;
        }
        Ok(())
    }

    fn zero_grad(&mut self, graph: &mut Graph) -> Result<(), NanoGradError> {
        log::debug!("SgdOptimizer::zero_grad: {} params", self.params.len());
        for param in &self.params {
            graph.zero_grad_of(*param)?;
        }
        Ok(())
    }

    fn params(&self) -> &[NodeId] {
        &self.params
    }
}
