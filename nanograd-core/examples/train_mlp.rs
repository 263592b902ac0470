//! # Training a small MLP with SGD
//!
//! Builds a 3-4-4-1 network, fits it to four labelled samples and prints the loss.
//!
//! Parameters are created first and the arena length is recorded as a mark; each
//! iteration records the forward pass on top of the parameters, runs backward,
//! updates the parameters and truncates the arena back to the mark.
//!
//! `cargo run --example train_mlp`

use nanograd_core::nn::losses::mse_loss;
use nanograd_core::nn::{Activation, Init, Mlp, Module};
use nanograd_core::optim::{Optimizer, SgdOptimizer};
use nanograd_core::{Graph, NanoGradError, NodeId};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn main() -> Result<(), NanoGradError> {
    let xs = [
        [2.0, 3.0, -1.0],
        [3.0, -1.0, 0.5],
        [0.5, 1.0, 1.0],
        [1.0, 1.0, -1.0],
    ];
    let ys = [1.0, -1.0, -1.0, 1.0];

    let mut graph = Graph::new();
    let mut rng = StdRng::seed_from_u64(42);
    let model = Mlp::new(&mut graph, 3, &[4, 4, 1], Activation::Tanh, Init::default(), &mut rng)?;
    let mark = graph.len();
    println!("Model has {} parameters", model.parameters().len());

    let mut optimizer = SgdOptimizer::new(model.parameters(), 0.05, 0.9, 0.0);
    let num_epochs = 100;

    for epoch in 0..num_epochs {
        let mut predictions = Vec::with_capacity(xs.len());
        for row in &xs {
            let x: Vec<NodeId> = row.iter().map(|&v| graph.leaf(v)).collect();
            predictions.push(model.forward(&mut graph, &x)?[0]);
        }
        let loss = mse_loss(&mut graph, &predictions, &ys)?;

        optimizer.zero_grad(&mut graph)?;
        graph.backward(loss)?;
        optimizer.step(&mut graph)?;

        if epoch % 10 == 0 || epoch == num_epochs - 1 {
            println!(
                "Epoch {:>3}: loss = {:.6} ({} nodes recorded)",
                epoch,
                graph.value(loss)?,
                graph.len()
            );
        }
        graph.truncate(mark);
    }

    for (row, target) in xs.iter().zip(ys) {
        let x: Vec<NodeId> = row.iter().map(|&v| graph.leaf(v)).collect();
        let out = model.forward(&mut graph, &x)?[0];
        println!("{:?} -> {:+.4} (target {:+.1})", row, graph.value(out)?, target);
    }
    graph.truncate(mark);
    Ok(())
}
