//! Dense (fully connected) layer implementation.

use burn::tensor::{Tensor, backend::Backend};

use crate::config::{Architecture, LayerConfig};
use crate::errors::GraphError;
use crate::layers::Activation;

/// A dense layer with fixed, pre-trained parameters.
///
/// It performs: output = activation(input @ weights.T + bias)
#[derive(Debug, Clone)]
pub struct Dense<B: Backend> {
    /// Weights, transposed to shape [input_size, output_size].
    weight: Tensor<B, 2>,
    /// Bias with shape [1, output_size].
    bias: Tensor<B, 2>,
    input_size: usize,
    output_size: usize,
    activation: Activation,
}

impl<B: Backend> Dense<B> {
    /// Builds a Dense layer from its configuration.
    ///
    /// The output size is inferred from the number of weights.
    pub fn from_config(
        input_size: usize,
        config: &LayerConfig,
        device: &B::Device,
    ) -> Result<Self, GraphError> {
        match config.architecture {
            Architecture::Dense => {}
        }
        if input_size == 0 {
            return Err(GraphError::InvalidLayer {
                message: "dense layer needs a non-empty input".to_string(),
            });
        }
        let n_weights = config.weights.len();
        if n_weights == 0 || n_weights % input_size != 0 {
            return Err(GraphError::InvalidLayer {
                message: format!(
                    "{} weights cannot be split into rows of {} inputs",
                    n_weights, input_size
                ),
            });
        }
        let output_size = n_weights / input_size;

        let weight = Tensor::<B, 1>::from_floats(config.weights.as_slice(), device)
            .reshape([output_size, input_size])
            .transpose();

        let bias = match config.bias.len() {
            0 => Tensor::<B, 2>::zeros([1, output_size], device),
            n if n == output_size => {
                Tensor::<B, 1>::from_floats(config.bias.as_slice(), device).reshape([1, output_size])
            }
            n => {
                return Err(GraphError::InvalidLayer {
                    message: format!("bias has {} values, expected {}", n, output_size),
                });
            }
        };

        Ok(Self {
            weight,
            bias,
            input_size,
            output_size,
            activation: config.activation,
        })
    }

    /// Performs the forward pass.
    pub fn forward(&self, input: Tensor<B, 2>) -> Tensor<B, 2> {
        let output = input.matmul(self.weight.clone()).add(self.bias.clone());
        self.activation.apply(output)
    }

    /// Returns the input size of this layer.
    pub fn input_size(&self) -> usize {
        self.input_size
    }

    /// Returns the output size of this layer.
    pub fn output_size(&self) -> usize {
        self.output_size
    }

    /// Returns the activation function.
    pub fn activation(&self) -> Activation {
        self.activation
    }
}
