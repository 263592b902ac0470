pub mod mse;

pub use mse::{mse_loss, mse_loss_with, Reduction};
