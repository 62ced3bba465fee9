//! Node descriptors.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The kind of a node descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    Input,
    FeedForward,
    Concatenate,
}

impl NodeKind {
    /// Returns the name used for this kind in configuration files.
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Input => "input",
            NodeKind::FeedForward => "feed_forward",
            NodeKind::Concatenate => "concatenate",
        }
    }
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Declarative description of one graph node.
///
/// The integer attached to a node means different things per kind: the
/// declared output size for inputs, the layer number for feed-forward
/// nodes. Keeping them in separate variants means one is never read as
/// the other.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NodeConfig {
    /// Reads `size` values from input slot `sources[0]`.
    Input { sources: Vec<usize>, size: i64 },
    /// Applies layer `layer_index` to the output of node `sources[0]`.
    FeedForward {
        sources: Vec<usize>,
        layer_index: i64,
    },
    /// Appends the outputs of `sources`, in order.
    Concatenate { sources: Vec<usize> },
}

impl NodeConfig {
    /// Creates an input node reading `size` values from `slot`.
    pub fn input(slot: usize, size: i64) -> Self {
        Self::Input {
            sources: vec![slot],
            size,
        }
    }

    /// Creates a feed-forward node applying `layer_index` to node `source`.
    pub fn feed_forward(source: usize, layer_index: i64) -> Self {
        Self::FeedForward {
            sources: vec![source],
            layer_index,
        }
    }

    /// Creates a concatenate node over `sources`.
    pub fn concatenate(sources: Vec<usize>) -> Self {
        Self::Concatenate { sources }
    }

    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            NodeConfig::Input { .. } => NodeKind::Input,
            NodeConfig::FeedForward { .. } => NodeKind::FeedForward,
            NodeConfig::Concatenate { .. } => NodeKind::Concatenate,
        }
    }

    /// Returns the source indices.
    ///
    /// For inputs these are slot indices, for every other kind node indices.
    pub fn sources(&self) -> &[usize] {
        match self {
            NodeConfig::Input { sources, .. }
            | NodeConfig::FeedForward { sources, .. }
            | NodeConfig::Concatenate { sources } => sources,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_config_from_json() {
        let json = r#"[
            {"type": "input", "sources": [1], "size": 3},
            {"type": "feed_forward", "sources": [0], "layer_index": 2},
            {"type": "concatenate", "sources": [0, 1]}
        ]"#;
        let nodes: Vec<NodeConfig> = serde_json::from_str(json).unwrap();

        assert_eq!(nodes[0], NodeConfig::input(1, 3));
        assert_eq!(nodes[1], NodeConfig::feed_forward(0, 2));
        assert_eq!(nodes[2], NodeConfig::concatenate(vec![0, 1]));
    }

    #[test]
    fn test_unknown_node_type_is_rejected() {
        let json = r#"{"type": "sum", "sources": [0, 1]}"#;
        assert!(serde_json::from_str::<NodeConfig>(json).is_err());
    }

    #[test]
    fn test_node_kind_and_sources() {
        let node = NodeConfig::concatenate(vec![3, 1, 2]);
        assert_eq!(node.kind(), NodeKind::Concatenate);
        assert_eq!(node.sources(), &[3, 1, 2]);
        assert_eq!(NodeConfig::input(0, 4).kind().to_string(), "input");
    }
}
