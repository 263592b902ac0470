use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::node::NodeId;
use rand::Rng;

/// Non-linearity applied to a neuron's weighted sum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Activation {
    #[default]
    Tanh,
    Relu,
    Sigmoid,
    /// No non-linearity.
    Linear,
}

impl Activation {
    pub fn apply(self, graph: &mut Graph, x: NodeId) -> Result<NodeId, NanoGradError> {
        match self {
            Activation::Tanh => graph.tanh(x),
            Activation::Relu => graph.relu(x),
            Activation::Sigmoid => graph.sigmoid(x),
            Activation::Linear => Ok(x),
        }
    }
}

/// A single unit computing `activation(sum_i w_i * x_i + b)`.
#[derive(Debug, Clone)]
pub struct Neuron {
    weights: Vec<NodeId>,
    bias: NodeId,
    activation: Activation,
}

impl Neuron {
    /// Creates a neuron with `n_in` weights and a bias, all drawn from `init`.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_in: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NanoGradError> {
        let values = init.sample(rng, n_in + 1)?;
        let weights = values[..n_in].iter().map(|&v| graph.leaf(v)).collect();
        let bias = graph.leaf(values[n_in]);
        Ok(Neuron {
            weights,
            bias,
            activation,
        })
    }

    pub fn weights(&self) -> &[NodeId] {
        &self.weights
    }

    pub fn bias(&self) -> NodeId {
        self.bias
    }

    pub fn activation(&self) -> Activation {
        self.activation
    }

    /// Records the neuron's output for `input` and returns its node.
    pub fn output(&self, graph: &mut Graph, input: &[NodeId]) -> Result<NodeId, NanoGradError> {
        if input.len() != self.weights.len() {
            return Err(NanoGradError::DimensionMismatch {
                expected: self.weights.len(),
                actual: input.len(),
            });
        }
        let mut acc = self.bias;
        for (&w, &x) in self.weights.iter().zip(input) {
            let wx = graph.mul(w, x)?;
            acc = graph.add(acc, wx)?;
        }
        self.activation.apply(graph, acc)
    }
}

impl Module for Neuron {
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, NanoGradError> {
        Ok(vec![self.output(graph, input)?])
    }

    fn parameters(&self) -> Vec<NodeId> {
        let mut params = self.weights.clone();
        params.push(self.bias);
        params
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        let mut named: Vec<(String, NodeId)> = self
            .weights
            .iter()
            .enumerate()
            .map(|(i, &w)| (format!("weight.{}", i), w))
            .collect();
        named.push(("bias".to_string(), self.bias));
        named
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_neuron_output_and_gradients() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(&mut graph, 2, Activation::Linear, Init::Constant(0.5), &mut rng)?;
        assert_eq!(graph.len(), 3);

        let x0 = graph.leaf(2.0);
        let x1 = graph.leaf(-4.0);
        let out = neuron.output(&mut graph, &[x0, x1])?;
        // 0.5 * 2 + 0.5 * -4 + 0.5
        assert_relative_eq!(graph.value(out)?, -0.5);

        graph.backward(out)?;
        assert_relative_eq!(graph.grad(neuron.weights()[0])?, 2.0);
        assert_relative_eq!(graph.grad(neuron.weights()[1])?, -4.0);
        assert_relative_eq!(graph.grad(neuron.bias())?, 1.0);
        assert_relative_eq!(graph.grad(x0)?, 0.5);
        Ok(())
    }

    #[test]
    fn test_neuron_tanh_activation() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(&mut graph, 1, Activation::Tanh, Init::Constant(0.0), &mut rng)?;
        let x = graph.leaf(3.0);
        let out = neuron.output(&mut graph, &[x])?;
        assert_eq!(graph.value(out)?, 0.0);
        Ok(())
    }

    #[test]
    fn test_neuron_rejects_wrong_width() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let neuron = Neuron::new(&mut graph, 3, Activation::Relu, Init::default(), &mut rng)?;
        let x = graph.leaf(1.0);
        assert_eq!(
            neuron.forward(&mut graph, &[x]),
            Err(NanoGradError::DimensionMismatch {
                expected: 3,
                actual: 1
            })
        );
        Ok(())
    }

    #[test]
    fn test_neuron_parameters() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(1);
        let neuron = Neuron::new(&mut graph, 2, Activation::Sigmoid, Init::default(), &mut rng)?;
        let params = neuron.parameters();
        assert_eq!(params.len(), 3);
        assert_eq!(params[2], neuron.bias());
        let names: Vec<String> = neuron.named_parameters().into_iter().map(|(n, _)| n).collect();
        assert_eq!(names, vec!["weight.0", "weight.1", "bias"]);
        Ok(())
    }
}
