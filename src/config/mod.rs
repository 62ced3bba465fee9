//! Declarative graph configuration.
//!
//! These types describe a graph the way configuration files do: a list of
//! input groups, a flat list of node descriptors referring to each other by
//! index, and a list of layer descriptors. Nothing here is validated beyond
//! its shape; structural checks happen when a [`Graph`](crate::graph::Graph)
//! is built.

mod graph_config;
mod layer_config;
mod node_config;

pub use graph_config::{GraphConfig, InputGroup, InputVariable};
pub use layer_config::{Architecture, LayerConfig};
pub use node_config::{NodeConfig, NodeKind};
