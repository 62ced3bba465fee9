//! Error types for graph construction and evaluation.

mod graph_error;

pub use graph_error::GraphError;
