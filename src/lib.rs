//! # instmodel-graph
//!
//! A Rust library for evaluating pre-trained feed-forward networks described
//! as declarative graphs of nodes and layers.
//!
//! A configuration lists input groups, node descriptors that refer to each
//! other by index (in any order), and layer descriptors holding the trained
//! parameters. Building a [`Graph`] validates the structure once: bad
//! references, wrong arities and cycles are rejected up front. The graph can
//! then evaluate any of its nodes against a [`Source`](graph::Source) of
//! input vectors.
//!
//! ## Features
//!
//! - **Burn Backend**: Layer math runs on Burn tensors and is generic over
//!   the backend; the `NdArray` backend needs no external dependencies.
//! - **Shared layers**: Feed-forward nodes naming the same layer share a
//!   single layer stack.
//! - **Dry runs**: [`DummySource`](graph::DummySource) feeds synthetic data
//!   of the right sizes when no real inputs are at hand.
//!
//! ## Example
//!
//! ```
//! use instmodel_graph::prelude::*;
//! use burn::backend::NdArray;
//!
//! type Backend = NdArray;
//!
//! let device = <Backend as burn::tensor::backend::Backend>::Device::default();
//!
//! let config = GraphConfig::new()
//!     .input_group(InputGroup::new("jet", ["pt", "eta"]))
//!     .node(NodeConfig::input(0, 2))
//!     .node(NodeConfig::feed_forward(0, 0))
//!     .layer(LayerConfig::dense(vec![1.0, 2.0], vec![0.0]).with_activation(Activation::Relu));
//!
//! let graph: Graph<Backend> = Graph::from_config(&config, &device).expect("Failed to build graph");
//! let output = graph.compute(&VectorSource::new(vec![vec![3.0, 1.0]])).unwrap();
//! assert_eq!(output, vec![5.0]);
//! ```

pub mod config;
pub mod errors;
pub mod graph;
pub mod layers;

// Re-exports for convenience
pub use config::GraphConfig;
pub use errors::GraphError;
pub use graph::Graph;
pub use layers::activation::Activation;

/// Backend type used for inference by the command-line tool.
pub type InferenceBackend = burn::backend::NdArray;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::InferenceBackend;
    pub use crate::config::{GraphConfig, InputGroup, LayerConfig, NodeConfig, NodeKind};
    pub use crate::errors::GraphError;
    pub use crate::graph::{DummySource, Graph, Node, Source, VectorSource};
    pub use crate::layers::{Activation, LayerStack};
}
