//! Graph-related error types.

use thiserror::Error;

use crate::config::NodeKind;

/// Errors that can occur while building or evaluating a graph.
///
/// Variants fall into two classes. Configuration errors are only produced
/// while a [`Graph`](crate::graph::Graph) is being built, evaluation errors
/// only by `compute` calls. See [`GraphError::is_configuration`].
#[derive(Debug, Error)]
pub enum GraphError {
    #[error("Node {node} references node {index}, but only {node_count} nodes are defined")]
    MissingNode {
        node: usize,
        index: usize,
        node_count: usize,
    },

    #[error("Node {node} ({kind}) needs {expected} source, found {found}")]
    WrongSourceCount {
        node: usize,
        kind: NodeKind,
        expected: usize,
        found: usize,
    },

    /// A concatenate node without sources. Unlike lwtnn, which builds such a
    /// node with an empty output, this is rejected.
    #[error("Concatenate node {node} has no sources")]
    EmptyConcatenate { node: usize },

    #[error("Output size of node {node} does not fit in memory")]
    SizeOverflow { node: usize },

    #[error("Input node {node} needs a positive size, got {size}")]
    InvalidInputSize { node: usize, size: i64 },

    #[error("Node {node} has negative layer number {layer}")]
    NegativeLayerIndex { node: usize, layer: i64 },

    #[error("Node {node} references layer {layer}, but only {layer_count} layers are defined")]
    MissingLayer {
        node: usize,
        layer: usize,
        layer_count: usize,
    },

    #[error("Node {node} feeds {found} values into layer {layer}, which expects {expected}")]
    StackInputMismatch {
        node: usize,
        layer: usize,
        expected: usize,
        found: usize,
    },

    #[error("Found cycle in graph at node {node}")]
    Cycle { node: usize },

    #[error("Invalid layer configuration: {message}")]
    InvalidLayer { message: String },

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("No source vector defined at {index} ({available} available)")]
    MissingSource { index: usize, available: usize },

    #[error("No value for variable '{variable}' in input group '{group}'")]
    MissingInput { group: String, variable: String },

    #[error("Found vector of length {actual}, expected {expected}")]
    SizeMismatch { expected: usize, actual: usize },

    #[error("No node at {index} ({node_count} nodes in graph)")]
    NoNode { index: usize, node_count: usize },

    #[error("Graph has no nodes")]
    EmptyGraph,

    #[error("Tensor error: {message}")]
    Tensor { message: String },
}

impl GraphError {
    /// Returns true for errors raised while building a graph.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            GraphError::MissingNode { .. }
                | GraphError::WrongSourceCount { .. }
                | GraphError::EmptyConcatenate { .. }
                | GraphError::InvalidInputSize { .. }
                | GraphError::SizeOverflow { .. }
                | GraphError::NegativeLayerIndex { .. }
                | GraphError::MissingLayer { .. }
                | GraphError::StackInputMismatch { .. }
                | GraphError::Cycle { .. }
                | GraphError::InvalidLayer { .. }
                | GraphError::Serialization(_)
        )
    }

    /// Returns true for errors raised while evaluating a graph.
    pub fn is_evaluation(&self) -> bool {
        !self.is_configuration()
    }
}
