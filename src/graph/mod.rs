//! Graph construction and evaluation.
//!
//! A [`Graph`] is built once from a flat list of node descriptors and a list
//! of layer descriptors, then evaluated any number of times against a
//! [`Source`] of input vectors.
//!
//! # Example
//!
//! ```
//! use instmodel_graph::config::{LayerConfig, NodeConfig};
//! use instmodel_graph::graph::{Graph, VectorSource};
//! use burn::backend::NdArray;
//! use burn::tensor::backend::Backend;
//!
//! let device = <NdArray as Backend>::Device::default();
//! let nodes = vec![
//!     NodeConfig::input(0, 2),
//!     NodeConfig::input(1, 1),
//!     NodeConfig::concatenate(vec![0, 1]),
//!     NodeConfig::feed_forward(2, 0),
//! ];
//! let layers = vec![LayerConfig::dense(vec![1.0, 1.0, 1.0], vec![0.5])];
//! let graph = Graph::<NdArray>::new(&nodes, &layers, &device).unwrap();
//!
//! let source = VectorSource::new(vec![vec![1.0, 2.0], vec![3.0]]);
//! assert_eq!(graph.compute(&source).unwrap(), vec![6.5]);
//! ```

mod builder;
mod core;
mod node;
mod source;

pub use self::core::Graph;
pub use node::{Node, NodeId, StackId};
pub use source::{DummySource, Source, VectorSource};
