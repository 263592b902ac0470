pub mod relu;
pub mod sigmoid;
pub mod tanh;

pub use relu::relu_op;
pub use sigmoid::sigmoid_op;
pub use tanh::tanh_op;
