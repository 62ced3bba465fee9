//! Graph - the owning container and evaluation API.
//!
//! A Graph owns every node and layer stack built from one descriptor list.
//! Nodes refer to each other and to stacks by index, so nothing is owned
//! twice and everything is dropped together with the graph.

use burn::tensor::backend::Backend;

use super::builder::GraphBuilder;
use super::node::{Node, NodeId, StackId};
use super::source::Source;
use crate::config::{GraphConfig, LayerConfig, NodeConfig};
use crate::errors::GraphError;
use crate::layers::LayerStack;

/// A validated, immutable computation graph.
///
/// # Example
///
/// ```
/// use instmodel_graph::prelude::*;
/// use burn::backend::NdArray;
/// use burn::tensor::backend::Backend;
///
/// let device = <NdArray as Backend>::Device::default();
/// let config = GraphConfig::demo();
/// let graph = Graph::<NdArray>::from_config(&config, &device).unwrap();
///
/// let output = graph.compute(&DummySource::from_config(&config)).unwrap();
/// assert_eq!(output, vec![0.0, 1.0, 0.0, 1.0]);
/// ```
#[derive(Debug)]
pub struct Graph<B: Backend> {
    /// Nodes in descriptor order.
    nodes: Vec<Node>,
    /// One stack per distinct layer index.
    stacks: Vec<LayerStack<B>>,
    /// Descriptor indices in the order the nodes were built.
    order: Vec<NodeId>,
}

impl<B: Backend> Graph<B> {
    /// Builds a graph from node and layer descriptors.
    ///
    /// Either every node is built or an error is returned; all structural
    /// validation happens here.
    pub fn new(
        nodes: &[NodeConfig],
        layers: &[LayerConfig],
        device: &B::Device,
    ) -> Result<Self, GraphError> {
        let (nodes, stacks, order) = GraphBuilder::new(nodes, layers, device).build()?;
        log::debug!(
            "Built graph with {} nodes and {} layer stacks",
            nodes.len(),
            stacks.len()
        );
        Ok(Self {
            nodes,
            stacks,
            order,
        })
    }

    /// Builds a graph from a full configuration.
    pub fn from_config(config: &GraphConfig, device: &B::Device) -> Result<Self, GraphError> {
        Self::new(&config.nodes, &config.layers, device)
    }

    /// Evaluates the terminal node, the last one built.
    pub fn compute(&self, source: &dyn Source) -> Result<Vec<f32>, GraphError> {
        let terminal = self.terminal().ok_or(GraphError::EmptyGraph)?;
        self.compute_node(source, terminal)
    }

    /// Evaluates node `index`.
    ///
    /// Nothing is cached: every call re-evaluates the full chain of
    /// predecessors.
    pub fn compute_node(&self, source: &dyn Source, index: NodeId) -> Result<Vec<f32>, GraphError> {
        let node = self.nodes.get(index).ok_or(GraphError::NoNode {
            index,
            node_count: self.nodes.len(),
        })?;
        node.compute(self, source)
    }

    /// Returns the number of nodes.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of distinct layer stacks.
    pub fn stack_count(&self) -> usize {
        self.stacks.len()
    }

    /// Returns node `index`, if it exists.
    pub fn node(&self, index: NodeId) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// Returns the output size of node `index`, if it exists.
    pub fn output_size(&self, index: NodeId) -> Option<usize> {
        self.node(index).map(|node| node.output_size(&self.stacks))
    }

    /// Returns the node evaluated by [`Graph::compute`].
    pub fn terminal(&self) -> Option<NodeId> {
        self.order.last().copied()
    }

    /// Returns descriptor indices in the order the nodes were built.
    pub fn construction_order(&self) -> &[NodeId] {
        &self.order
    }

    /// Returns the stack used by feed-forward node `index`.
    pub fn stack_index(&self, index: NodeId) -> Option<StackId> {
        match self.node(index)? {
            Node::FeedForward { stack, .. } => Some(*stack),
            _ => None,
        }
    }

    /// Returns the layer stacks.
    pub fn stacks(&self) -> &[LayerStack<B>] {
        &self.stacks
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::source::{DummySource, VectorSource};
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    fn device() -> <TestBackend as Backend>::Device {
        <TestBackend as Backend>::Device::default()
    }

    #[test]
    fn test_demo_graph() {
        let config = GraphConfig::demo();
        let graph = Graph::<TestBackend>::from_config(&config, &device())
            .expect("Graph creation should succeed");
        let source = DummySource::from_config(&config);

        assert_eq!(graph.node_count(), 5);
        assert_eq!(graph.stack_count(), 1);
        assert_eq!(graph.terminal(), Some(4));
        assert_eq!(graph.compute_node(&source, 2).unwrap(), vec![0.0, 1.0, 0.0, 1.0]);
        assert_eq!(graph.compute_node(&source, 3).unwrap(), vec![1.0, 0.0, 1.0, 0.0]);
        assert_eq!(graph.compute(&source).unwrap(), vec![0.0, 1.0, 0.0, 1.0]);
    }

    #[test]
    fn test_compute_node_out_of_range() {
        let graph = Graph::<TestBackend>::from_config(&GraphConfig::demo(), &device()).unwrap();
        let source = DummySource::new(vec![2, 2]);

        let err = graph.compute_node(&source, 5).unwrap_err();
        assert!(matches!(
            err,
            GraphError::NoNode {
                index: 5,
                node_count: 5
            }
        ));
        assert!(err.is_evaluation());
    }

    #[test]
    fn test_empty_graph() {
        let graph = Graph::<TestBackend>::new(&[], &[], &device()).unwrap();
        assert_eq!(graph.node_count(), 0);
        assert!(matches!(
            graph.compute(&VectorSource::default()),
            Err(GraphError::EmptyGraph)
        ));
    }

    #[test]
    fn test_terminal_is_last_built() {
        // node 2 is needed by node 1, so node 1 is built last
        let nodes = vec![
            NodeConfig::input(0, 1),
            NodeConfig::concatenate(vec![0, 2]),
            NodeConfig::input(1, 2),
        ];
        let graph = Graph::<TestBackend>::new(&nodes, &[], &device()).unwrap();

        assert_eq!(graph.construction_order(), &[0, 2, 1]);
        assert_eq!(graph.terminal(), Some(1));
        assert_eq!(graph.output_size(1), Some(3));

        let source = VectorSource::new(vec![vec![7.0], vec![8.0, 9.0]]);
        assert_eq!(graph.compute(&source).unwrap(), vec![7.0, 8.0, 9.0]);
        assert_eq!(graph.compute_node(&source, 2).unwrap(), vec![8.0, 9.0]);
    }

    #[test]
    fn test_input_length_mismatch_leaves_graph_usable() {
        let nodes = vec![NodeConfig::input(0, 2)];
        let graph = Graph::<TestBackend>::new(&nodes, &[], &device()).unwrap();

        let bad = VectorSource::new(vec![vec![1.0, 2.0, 3.0]]);
        assert!(matches!(
            graph.compute(&bad),
            Err(GraphError::SizeMismatch {
                expected: 2,
                actual: 3
            })
        ));

        let good = VectorSource::new(vec![vec![1.0, 2.0]]);
        assert_eq!(graph.compute(&good).unwrap(), vec![1.0, 2.0]);
    }

    #[test]
    fn test_huge_declared_size_is_an_evaluation_error() {
        let nodes = vec![NodeConfig::input(0, 1 << 60), NodeConfig::concatenate(vec![0])];
        let graph = Graph::<TestBackend>::new(&nodes, &[], &device()).unwrap();
        assert_eq!(graph.output_size(1), Some(1 << 60));

        let err = graph.compute(&VectorSource::new(vec![vec![1.0]])).unwrap_err();
        assert!(
            matches!(err, GraphError::SizeMismatch { expected, actual: 1 } if expected == 1 << 60),
            "got {:?}",
            err
        );
        assert!(err.is_evaluation());
    }

    #[test]
    fn test_stack_index_observes_sharing() {
        let graph = Graph::<TestBackend>::from_config(&GraphConfig::demo(), &device()).unwrap();

        assert_eq!(graph.stack_index(3), Some(0));
        assert_eq!(graph.stack_index(4), Some(0));
        assert_eq!(graph.stack_index(2), None);
        assert_eq!(graph.stack_index(9), None);
        assert_eq!(graph.stacks()[0].output_size(), 4);
    }

    #[test]
    fn test_missing_source_slot() {
        let graph = Graph::<TestBackend>::from_config(&GraphConfig::demo(), &device()).unwrap();
        let source = DummySource::new(vec![2]);

        let err = graph.compute(&source).unwrap_err();
        assert!(matches!(err, GraphError::MissingSource { index: 1, .. }));
    }
}
