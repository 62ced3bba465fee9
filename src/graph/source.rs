//! Sources - providers of raw input vectors.
//!
//! A graph never owns its input data. Each `compute` call is handed a
//! [`Source`], and input nodes pull their vectors from it by slot index.

use std::collections::HashMap;

use crate::config::{GraphConfig, InputGroup};
use crate::errors::GraphError;

/// Produces the input vector for a slot index.
pub trait Source {
    /// Returns the vector for input slot `index`.
    fn at(&self, index: usize) -> Result<Vec<f32>, GraphError>;
}

/// A source backed by caller-supplied vectors, one per input slot.
#[derive(Debug, Clone, Default)]
pub struct VectorSource {
    inputs: Vec<Vec<f32>>,
}

impl VectorSource {
    /// Creates a source returning `inputs[i]` for slot `i`.
    pub fn new(inputs: Vec<Vec<f32>>) -> Self {
        Self { inputs }
    }

    /// Builds a source from values keyed by group name, then variable name.
    ///
    /// Slots follow the order of `groups`, and values within a slot follow
    /// the order of the group's variables. Extra entries in `values` are
    /// ignored.
    pub fn from_named(
        groups: &[InputGroup],
        values: &HashMap<String, HashMap<String, f32>>,
    ) -> Result<Self, GraphError> {
        let inputs = groups
            .iter()
            .map(|group| {
                let group_values = values.get(&group.name);
                group
                    .variables
                    .iter()
                    .map(|var| {
                        group_values
                            .and_then(|vals| vals.get(&var.name))
                            .copied()
                            .ok_or_else(|| GraphError::MissingInput {
                                group: group.name.clone(),
                                variable: var.name.clone(),
                            })
                    })
                    .collect::<Result<Vec<f32>, GraphError>>()
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self { inputs })
    }

    /// Returns the number of slots.
    pub fn len(&self) -> usize {
        self.inputs.len()
    }

    /// Returns true if no slot is defined.
    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

impl Source for VectorSource {
    fn at(&self, index: usize) -> Result<Vec<f32>, GraphError> {
        self.inputs
            .get(index)
            .cloned()
            .ok_or(GraphError::MissingSource {
                index,
                available: self.inputs.len(),
            })
    }
}

/// A source that synthesizes `[0, 1, 2, ...]` of the right size per slot.
///
/// Used to dry-run a graph when no real input data is available.
#[derive(Debug, Clone, Default)]
pub struct DummySource {
    sizes: Vec<usize>,
}

impl DummySource {
    /// Creates a source with the given size per slot.
    pub fn new(sizes: Vec<usize>) -> Self {
        Self { sizes }
    }

    /// Creates a source matching the input groups of a configuration.
    pub fn from_config(config: &GraphConfig) -> Self {
        Self::new(config.input_sizes())
    }
}

impl Source for DummySource {
    fn at(&self, index: usize) -> Result<Vec<f32>, GraphError> {
        let size = self
            .sizes
            .get(index)
            .copied()
            .ok_or(GraphError::MissingSource {
                index,
                available: self.sizes.len(),
            })?;
        Ok((0..size).map(|i| i as f32).collect())
    }
}
