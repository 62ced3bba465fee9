//! Graph configuration.

use std::io::Read;

use serde::{Deserialize, Serialize};

use super::{LayerConfig, NodeConfig};
use crate::errors::GraphError;

/// A named input variable. Only the name is kept; other fields are ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputVariable {
    pub name: String,
}

/// A named group of input variables, feeding one input slot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputGroup {
    pub name: String,
    pub variables: Vec<InputVariable>,
}

impl InputGroup {
    /// Creates an input group from variable names.
    pub fn new<I, S>(name: impl Into<String>, variables: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            variables: variables
                .into_iter()
                .map(|v| InputVariable { name: v.into() })
                .collect(),
        }
    }

    /// Returns the number of variables in this group.
    pub fn size(&self) -> usize {
        self.variables.len()
    }
}

/// Full description of a graph: inputs, nodes and layers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GraphConfig {
    #[serde(default)]
    pub inputs: Vec<InputGroup>,
    pub nodes: Vec<NodeConfig>,
    #[serde(default)]
    pub layers: Vec<LayerConfig>,
}

impl GraphConfig {
    /// Creates an empty GraphConfig.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds an input group.
    pub fn input_group(mut self, group: InputGroup) -> Self {
        self.inputs.push(group);
        self
    }

    /// Adds a node descriptor.
    pub fn node(mut self, node: NodeConfig) -> Self {
        self.nodes.push(node);
        self
    }

    /// Adds a layer descriptor.
    pub fn layer(mut self, layer: LayerConfig) -> Self {
        self.layers.push(layer);
        self
    }

    /// Parses a configuration from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, GraphError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Parses a configuration from a JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, GraphError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Serializes the configuration to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, GraphError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the number of variables per input group, in slot order.
    pub fn input_sizes(&self) -> Vec<usize> {
        self.inputs.iter().map(|g| g.size()).collect()
    }

    /// A small graph used when no configuration is supplied.
    ///
    /// Two 2-value inputs are concatenated and passed twice through the
    /// same dense layer, which reverses its 4-value input.
    pub fn demo() -> Self {
        #[rustfmt::skip]
        let reverse = vec![
            0.0, 0.0, 0.0, 1.0,
            0.0, 0.0, 1.0, 0.0,
            0.0, 1.0, 0.0, 0.0,
            1.0, 0.0, 0.0, 0.0,
        ];
        Self::new()
            .input_group(InputGroup::new("one", ["one", "two"]))
            .input_group(InputGroup::new("two", ["one", "two"]))
            .node(NodeConfig::input(0, 2))
            .node(NodeConfig::input(1, 2))
            .node(NodeConfig::concatenate(vec![0, 1]))
            .node(NodeConfig::feed_forward(2, 0))
            .node(NodeConfig::feed_forward(3, 0))
            .layer(LayerConfig::dense(reverse, Vec::new()))
    }
}
