//! Layer descriptors.

use serde::{Deserialize, Serialize};

use crate::layers::Activation;

/// Layer architectures understood by [`LayerStack`](crate::layers::LayerStack).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    /// Affine transform followed by an activation.
    #[default]
    Dense,
}

/// Parameters of one layer.
///
/// Weights are stored row-major with shape `[output_size, input_size]`,
/// matching the instruction model weight layout. An empty bias means zeros.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayerConfig {
    #[serde(default)]
    pub architecture: Architecture,
    #[serde(default)]
    pub activation: Activation,
    pub weights: Vec<f32>,
    #[serde(default)]
    pub bias: Vec<f32>,
}

impl LayerConfig {
    /// Creates a dense layer with a linear activation.
    pub fn dense(weights: Vec<f32>, bias: Vec<f32>) -> Self {
        Self {
            architecture: Architecture::Dense,
            activation: Activation::Linear,
            weights,
            bias,
        }
    }

    /// Sets the activation function.
    pub fn with_activation(mut self, activation: Activation) -> Self {
        self.activation = activation;
        self
    }
}
