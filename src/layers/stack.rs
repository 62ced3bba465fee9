//! LayerStack - a sequence of layers applied as one unit.

use burn::tensor::{Tensor, backend::Backend};

use super::Dense;
use crate::config::LayerConfig;
use crate::errors::GraphError;

/// An ordered sequence of layers mapping one vector to another.
///
/// Each layer's input size is the previous layer's output size, starting
/// from the size the stack was built with.
#[derive(Debug, Clone)]
pub struct LayerStack<B: Backend> {
    layers: Vec<Dense<B>>,
    input_size: usize,
    device: B::Device,
}

impl<B: Backend> LayerStack<B> {
    /// Builds a stack taking `input_size` values through `configs` in order.
    pub fn new(
        input_size: usize,
        configs: &[LayerConfig],
        device: &B::Device,
    ) -> Result<Self, GraphError> {
        let mut layers = Vec::with_capacity(configs.len());
        let mut size = input_size;
        for config in configs {
            let layer = Dense::from_config(size, config, device)?;
            size = layer.output_size();
            layers.push(layer);
        }

        Ok(Self {
            layers,
            input_size,
            device: device.clone(),
        })
    }

    /// Performs a forward pass through all layers.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let mut x = input;
        for layer in &self.layers {
            x = layer.forward(x);
        }
        x
    }

    /// Applies the stack to a single vector.
    pub fn compute(&self, input: &[f32]) -> Result<Vec<f32>, GraphError> {
        if input.len() != self.input_size {
            return Err(GraphError::SizeMismatch {
                expected: self.input_size,
                actual: input.len(),
            });
        }

        let tensor = Tensor::<B, 1>::from_floats(input, &self.device).reshape([1, input.len()]);
        self.forward(tensor)
            .to_data()
            .to_vec::<f32>()
            .map_err(|e| GraphError::Tensor {
                message: format!("{:?}", e),
            })
    }

    /// Returns the number of values this stack expects.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Returns the number of values this stack produces.
    pub fn output_size(&self) -> usize {
        self.layers
            .last()
            .map(|l| l.output_size())
            .unwrap_or(self.input_size)
    }

    /// Returns the number of layers.
    pub fn num_layers(&self) -> usize {
        self.layers.len()
    }
}
