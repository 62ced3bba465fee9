//! Nodes of the computation graph.
//!
//! Uses a closed enum instead of trait objects: there are exactly three
//! kinds of node and every one of them is evaluated the same way, by
//! pulling its predecessors' outputs through the owning [`Graph`].

use std::slice;

use burn::tensor::backend::Backend;

use super::core::Graph;
use super::source::Source;
use crate::config::NodeKind;
use crate::errors::GraphError;
use crate::layers::LayerStack;

/// Identifier of a node: its index in the descriptor list.
pub type NodeId = usize;

/// Identifier of a layer stack: its position in the graph's stack storage.
pub type StackId = usize;

/// A built node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// Reads a vector of `size` values from input slot `slot`.
    Input { slot: usize, size: usize },
    /// Applies the layer stack `stack` to the output of node `source`.
    FeedForward { source: NodeId, stack: StackId },
    /// Appends the outputs of `sources` in order; `size` is their total.
    Concatenate { sources: Vec<NodeId>, size: usize },
}

impl Node {
    /// Returns the kind of this node.
    pub fn kind(&self) -> NodeKind {
        match self {
            Node::Input { .. } => NodeKind::Input,
            Node::FeedForward { .. } => NodeKind::FeedForward,
            Node::Concatenate { .. } => NodeKind::Concatenate,
        }
    }

    /// Returns the predecessor nodes. Inputs have none.
    pub fn sources(&self) -> &[NodeId] {
        match self {
            Node::Input { .. } => &[],
            Node::FeedForward { source, .. } => slice::from_ref(source),
            Node::Concatenate { sources, .. } => sources,
        }
    }

    /// Returns the number of values this node produces.
    ///
    /// `stacks` must be the stack storage of the graph this node belongs to.
    pub(crate) fn output_size<B: Backend>(&self, stacks: &[LayerStack<B>]) -> usize {
        match self {
            Node::Input { size, .. } => *size,
            Node::FeedForward { stack, .. } => stacks[*stack].output_size(),
            Node::Concatenate { size, .. } => *size,
        }
    }

    /// Evaluates this node, recursively evaluating its predecessors.
    pub(crate) fn compute<B: Backend>(
        &self,
        graph: &Graph<B>,
        source: &dyn Source,
    ) -> Result<Vec<f32>, GraphError> {
        match self {
            Node::Input { slot, size } => {
                let output = source.at(*slot)?;
                if output.len() != *size {
                    return Err(GraphError::SizeMismatch {
                        expected: *size,
                        actual: output.len(),
                    });
                }
                Ok(output)
            }
            Node::FeedForward {
                source: input,
                stack,
            } => {
                let values = graph.compute_node(source, *input)?;
                graph.stacks()[*stack].compute(&values)
            }
            Node::Concatenate { sources, size } => {
                // sized by what predecessors return, never by the declared `size`
                let mut output = Vec::new();
                for &id in sources {
                    output.extend(graph.compute_node(source, id)?);
                }
                debug_assert_eq!(output.len(), *size);
                Ok(output)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_node_sources() {
        assert!(Node::Input { slot: 2, size: 3 }.sources().is_empty());
        assert_eq!(Node::FeedForward { source: 4, stack: 0 }.sources(), &[4]);
        assert_eq!(
            Node::Concatenate {
                sources: vec![1, 0],
                size: 5
            }
            .sources(),
            &[1, 0]
        );
    }

    #[test]
    fn test_node_kind() {
        assert_eq!(Node::Input { slot: 0, size: 1 }.kind(), NodeKind::Input);
        assert_eq!(
            Node::FeedForward { source: 0, stack: 0 }.kind(),
            NodeKind::FeedForward
        );
    }

    #[test]
    fn test_input_and_concatenate_output_size() {
        let stacks: Vec<LayerStack<TestBackend>> = Vec::new();
        assert_eq!(Node::Input { slot: 0, size: 7 }.output_size(&stacks), 7);
        assert_eq!(
            Node::Concatenate {
                sources: vec![0, 1],
                size: 9
            }
            .output_size(&stacks),
            9
        );
    }
}
