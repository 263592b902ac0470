use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::module::Module;
use crate::nn::neuron::{Activation, Neuron};
use crate::node::NodeId;
use rand::Rng;

/// `n_out` neurons reading the same `n_in` inputs.
#[derive(Debug, Clone)]
pub struct Layer {
    neurons: Vec<Neuron>,
    n_in: usize,
}

impl Layer {
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_in: usize,
        n_out: usize,
        activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NanoGradError> {
        let neurons = (0..n_out)
            .map(|_| Neuron::new(graph, n_in, activation, init, rng))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Layer { neurons, n_in })
    }

    pub fn neurons(&self) -> &[Neuron] {
        &self.neurons
    }

    pub fn in_features(&self) -> usize {
        self.n_in
    }

    pub fn out_features(&self) -> usize {
        self.neurons.len()
    }
}

impl Module for Layer {
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, NanoGradError> {
        if input.len() != self.n_in {
            return Err(NanoGradError::DimensionMismatch {
                expected: self.n_in,
                actual: input.len(),
            });
        }
        self.neurons
            .iter()
            .map(|neuron| neuron.output(graph, input))
            .collect()
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.neurons.iter().flat_map(|n| n.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.neurons
            .iter()
            .enumerate()
            .flat_map(|(i, neuron)| {
                neuron
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("neurons.{}.{}", i, name), id))
            })
            .collect()
    }
}
