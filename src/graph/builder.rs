//! GraphBuilder - turns descriptor lists into linked nodes.

use std::collections::{HashMap, HashSet};
use std::slice;

use burn::tensor::backend::Backend;

use super::node::{Node, NodeId, StackId};
use crate::config::{LayerConfig, NodeConfig, NodeKind};
use crate::errors::GraphError;
use crate::layers::LayerStack;

/// Nodes in descriptor order, the stacks they share, and the order in
/// which the nodes were built.
pub(crate) type BuiltGraph<B> = (Vec<Node>, Vec<LayerStack<B>>, Vec<NodeId>);

/// Depth-first, memoized construction of a graph.
///
/// Every node's predecessors are built before the node itself. Nodes are
/// memoized by descriptor index so shared ancestors are built once, and
/// stacks are memoized by layer index so feed-forward nodes naming the same
/// layer share one stack.
pub(crate) struct GraphBuilder<'a, B: Backend> {
    configs: &'a [NodeConfig],
    layers: &'a [LayerConfig],
    device: &'a B::Device,
    nodes: Vec<Option<Node>>,
    stacks: Vec<LayerStack<B>>,
    stack_index: HashMap<usize, StackId>,
    order: Vec<NodeId>,
}

impl<'a, B: Backend> GraphBuilder<'a, B> {
    pub(crate) fn new(
        configs: &'a [NodeConfig],
        layers: &'a [LayerConfig],
        device: &'a B::Device,
    ) -> Self {
        Self {
            configs,
            layers,
            device,
            nodes: vec![None; configs.len()],
            stacks: Vec::new(),
            stack_index: HashMap::new(),
            order: Vec::with_capacity(configs.len()),
        }
    }

    /// Builds every node, including ones no other node reaches.
    pub(crate) fn build(mut self) -> Result<BuiltGraph<B>, GraphError> {
        for index in 0..self.configs.len() {
            self.build_node(index, &HashSet::new())?;
        }

        let nodes: Vec<Node> = self.nodes.into_iter().flatten().collect();
        debug_assert_eq!(nodes.len(), self.configs.len());
        Ok((nodes, self.stacks, self.order))
    }

    /// Builds node `index` after its predecessors.
    ///
    /// `ancestors` holds the nodes on the current discovery path only, so a
    /// node reached twice through different paths is not a cycle.
    fn build_node(&mut self, index: NodeId, ancestors: &HashSet<NodeId>) -> Result<(), GraphError> {
        if self.nodes[index].is_some() {
            return Ok(());
        }

        let configs = self.configs;
        let node = match &configs[index] {
            NodeConfig::Input { sources, size } => input_node(index, sources, *size)?,
            NodeConfig::FeedForward {
                sources,
                layer_index,
            } => {
                if sources.len() != 1 {
                    return Err(GraphError::WrongSourceCount {
                        node: index,
                        kind: NodeKind::FeedForward,
                        expected: 1,
                        found: sources.len(),
                    });
                }
                self.build_sources(index, sources, ancestors)?;
                self.feed_forward_node(index, sources[0], *layer_index)?
            }
            NodeConfig::Concatenate { sources } => {
                if sources.is_empty() {
                    return Err(GraphError::EmptyConcatenate { node: index });
                }
                self.build_sources(index, sources, ancestors)?;
                let size = sources
                    .iter()
                    .try_fold(0usize, |total, &s| total.checked_add(self.output_size(s)))
                    .ok_or(GraphError::SizeOverflow { node: index })?;
                Node::Concatenate {
                    sources: sources.clone(),
                    size,
                }
            }
        };

        log::debug!(
            "Built {} node {} with {} outputs",
            node.kind(),
            index,
            node.output_size(&self.stacks)
        );
        self.nodes[index] = Some(node);
        self.order.push(index);
        Ok(())
    }

    fn build_sources(
        &mut self,
        index: NodeId,
        sources: &[NodeId],
        ancestors: &HashSet<NodeId>,
    ) -> Result<(), GraphError> {
        if ancestors.contains(&index) {
            return Err(GraphError::Cycle { node: index });
        }
        let mut path = ancestors.clone();
        path.insert(index);

        for &source in sources {
            if source >= self.configs.len() {
                return Err(GraphError::MissingNode {
                    node: index,
                    index: source,
                    node_count: self.configs.len(),
                });
            }
            self.build_node(source, &path)?;
        }
        Ok(())
    }

    fn feed_forward_node(
        &mut self,
        index: NodeId,
        source: NodeId,
        layer_index: i64,
    ) -> Result<Node, GraphError> {
        if layer_index < 0 {
            return Err(GraphError::NegativeLayerIndex {
                node: index,
                layer: layer_index,
            });
        }
        let layer = usize::try_from(layer_index).unwrap_or(usize::MAX);
        if layer >= self.layers.len() {
            return Err(GraphError::MissingLayer {
                node: index,
                layer,
                layer_count: self.layers.len(),
            });
        }

        let input_size = self.output_size(source);
        let stack = match self.stack_index.get(&layer) {
            Some(&stack) => {
                log::debug!("Node {} reuses the stack of layer {}", index, layer);
                stack
            }
            None => {
                let configs = slice::from_ref(&self.layers[layer]);
                let built = LayerStack::new(input_size, configs, self.device).map_err(|e| match e {
                    GraphError::InvalidLayer { message } => GraphError::InvalidLayer {
                        message: format!("layer {}: {}", layer, message),
                    },
                    other => other,
                })?;
                self.stacks.push(built);
                let stack = self.stacks.len() - 1;
                self.stack_index.insert(layer, stack);
                stack
            }
        };

        let expected = self.stacks[stack].input_size();
        if expected != input_size {
            return Err(GraphError::StackInputMismatch {
                node: index,
                layer,
                expected,
                found: input_size,
            });
        }

        Ok(Node::FeedForward { source, stack })
    }

    /// Output size of an already built node.
    fn output_size(&self, index: NodeId) -> usize {
        self.nodes[index]
            .as_ref()
            .map(|node| node.output_size(&self.stacks))
            .unwrap_or(0)
    }
}

fn input_node(index: NodeId, sources: &[usize], size: i64) -> Result<Node, GraphError> {
    if sources.len() != 1 {
        return Err(GraphError::WrongSourceCount {
            node: index,
            kind: NodeKind::Input,
            expected: 1,
            found: sources.len(),
        });
    }
    if size <= 0 {
        return Err(GraphError::InvalidInputSize { node: index, size });
    }
    let size = usize::try_from(size).map_err(|_| GraphError::SizeOverflow { node: index })?;
    Ok(Node::Input {
        slot: sources[0],
        size,
    })
}
