use thiserror::Error;

/// Custom error type for the nanograd engine.
#[derive(Error, Debug, PartialEq, Clone)] // PartialEq for easier testing
pub enum NanoGradError {
    #[error("Division by zero error")]
    DivisionByZero,

    #[error("Domain error in operation {operation}: input {value} is invalid ({reason})")]
    DomainError {
        operation: String,
        value: f64,
        reason: String,
    },

    #[error("Invalid node id {id}: graph holds {len} nodes")]
    InvalidNode { id: usize, len: usize },

    #[error("Node {id} is not a leaf; only leaf values can be written")]
    NotALeaf { id: usize },

    #[error("Dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("Cannot compute over an empty list of nodes")]
    EmptyInput,

    #[error("Initialization error: {0}")]
    InitializationError(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}
