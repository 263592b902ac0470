use crate::error::NanoGradError;
use crate::graph::Graph;
use crate::nn::init::Init;
use crate::nn::layer::Layer;
use crate::nn::module::Module;
use crate::nn::neuron::Activation;
use crate::node::NodeId;
use rand::Rng;

/// A stack of fully connected layers.
///
/// Hidden layers use `tanh`; the last layer uses the activation given at
/// construction (`Activation::Linear` for regression outputs).
#[derive(Debug, Clone)]
pub struct Mlp {
    layers: Vec<Layer>,
}

impl Mlp {
    /// Builds a network reading `n_in` inputs with one layer per entry of `layer_sizes`.
    ///
    /// `Mlp::new(graph, 3, &[4, 4, 1], ..)` gives a 3-4-4-1 network.
    ///
    /// # Errors
    /// `InitializationError` if `layer_sizes` is empty or contains a zero, plus
    /// anything raised while sampling the initial parameters.
    pub fn new<R: Rng + ?Sized>(
        graph: &mut Graph,
        n_in: usize,
        layer_sizes: &[usize],
        output_activation: Activation,
        init: Init,
        rng: &mut R,
    ) -> Result<Self, NanoGradError> {
        if layer_sizes.is_empty() {
            return Err(NanoGradError::InitializationError(
                "an MLP needs at least one layer".to_string(),
            ));
        }
        if n_in == 0 || layer_sizes.contains(&0) {
            return Err(NanoGradError::InitializationError(format!(
                "layer widths must be non-zero, got {} inputs and sizes {:?}",
                n_in, layer_sizes
            )));
        }

        let mut layers = Vec::with_capacity(layer_sizes.len());
        let mut fan_in = n_in;
        for (i, &n_out) in layer_sizes.iter().enumerate() {
            let activation = if i + 1 == layer_sizes.len() {
                output_activation
            } else {
                Activation::Tanh
            };
            layers.push(Layer::new(graph, fan_in, n_out, activation, init, rng)?);
            fan_in = n_out;
        }
        log::debug!(
            "Mlp::new: {} -> {:?}, {} parameters",
            n_in,
            layer_sizes,
            layers.iter().map(|l| l.parameters().len()).sum::<usize>()
        );
        Ok(Mlp { layers })
    }

    pub fn layers(&self) -> &[Layer] {
        &self.layers
    }
}

impl Module for Mlp {
    fn forward(&self, graph: &mut Graph, input: &[NodeId]) -> Result<Vec<NodeId>, NanoGradError> {
        let mut x = input.to_vec();
        for layer in &self.layers {
            x = layer.forward(graph, &x)?;
        }
        Ok(x)
    }

    fn parameters(&self) -> Vec<NodeId> {
        self.layers.iter().flat_map(|l| l.parameters()).collect()
    }

    fn named_parameters(&self) -> Vec<(String, NodeId)> {
        self.layers
            .iter()
            .enumerate()
            .flat_map(|(i, layer)| {
                layer
                    .named_parameters()
                    .into_iter()
                    .map(move |(name, id)| (format!("layers.{}.{}", i, name), id))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_mlp_parameter_count() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(11);
        let mlp = Mlp::new(&mut graph, 3, &[4, 4, 1], Activation::Linear, Init::default(), &mut rng)?;

        // (3+1)*4 + (4+1)*4 + (4+1)*1
        assert_eq!(mlp.parameters().len(), 41);
        assert_eq!(graph.len(), 41);
        assert_eq!(mlp.layers().len(), 3);
        assert_eq!(mlp.layers()[0].neurons()[0].activation(), Activation::Tanh);
        assert_eq!(mlp.layers()[2].neurons()[0].activation(), Activation::Linear);
        Ok(())
    }

    #[test]
    fn test_mlp_forward_and_backward_reach_every_parameter() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(11);
        let mlp = Mlp::new(&mut graph, 2, &[3, 1], Activation::Linear, Init::default(), &mut rng)?;

        let inputs: Vec<NodeId> = [0.5, -1.5].iter().map(|&v| graph.leaf(v)).collect();
        let out = mlp.forward(&mut graph, &inputs)?;
        assert_eq!(out.len(), 1);

        graph.backward(out[0])?;
        // Every output-layer parameter sits on a path to the root.
        let last = &mlp.layers()[1];
        for p in last.parameters() {
            assert!(graph.grad(p)? != 0.0);
        }
        assert_eq!(graph.grad(last.neurons()[0].bias())?, 1.0);
        Ok(())
    }

    #[test]
    fn test_mlp_named_parameters_are_hierarchical() -> Result<(), NanoGradError> {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        let mlp = Mlp::new(&mut graph, 1, &[1, 1], Activation::Linear, Init::default(), &mut rng)?;
        let names: Vec<String> = mlp.named_parameters().into_iter().map(|(n, _)| n).collect();
        assert_eq!(
            names,
            vec![
                "layers.0.neurons.0.weight.0",
                "layers.0.neurons.0.bias",
                "layers.1.neurons.0.weight.0",
                "layers.1.neurons.0.bias",
            ]
        );
        Ok(())
    }

    #[test]
    fn test_mlp_rejects_empty_sizes() {
        let mut graph = Graph::new();
        let mut rng = StdRng::seed_from_u64(0);
        assert!(matches!(
            Mlp::new(&mut graph, 3, &[], Activation::Linear, Init::default(), &mut rng),
            Err(NanoGradError::InitializationError(_))
        ));
        assert!(matches!(
            Mlp::new(&mut graph, 3, &[2, 0], Activation::Linear, Init::default(), &mut rng),
            Err(NanoGradError::InitializationError(_))
        ));
        assert!(graph.is_empty());
    }
}
