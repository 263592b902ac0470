//! Neural network building blocks on top of the engine.
//!
//! Parameters are leaf nodes created in the caller's [`Graph`](crate::graph::Graph)
//! when a module is built. Create every module first, record `graph.len()` as a
//! mark, and truncate back to it after each training step so the parameters
//! survive while the intermediate nodes are dropped.

pub mod init;
pub mod layer;
pub mod losses;
pub mod mlp;
pub mod module;
pub mod neuron;

pub use init::Init;
pub use layer::Layer;
pub use mlp::Mlp;
pub use module::Module;
pub use neuron::{Activation, Neuron};
