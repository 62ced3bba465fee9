//! Activation functions for dense layers.

use burn::tensor::{Tensor, backend::Backend};
use serde::{Deserialize, Serialize};

/// Supported activation functions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Activation {
    /// No activation (identity function).
    #[default]
    #[serde(alias = "none")]
    Linear,
    /// Rectified Linear Unit: f(x) = max(0, x)
    #[serde(alias = "rectified")]
    Relu,
    /// Sigmoid: f(x) = 1 / (1 + exp(-x))
    Sigmoid,
    /// Hyperbolic tangent: f(x) = tanh(x)
    Tanh,
    /// Softmax normalization (across last dimension)
    Softmax,
    /// Gaussian Error Linear Unit: f(x) = x * 0.5 * (1 + erf(x / sqrt(2)))
    Gelu,
}

impl Activation {
    /// Applies the activation function to a tensor.
    pub fn apply<B: Backend, const D: usize>(&self, tensor: Tensor<B, D>) -> Tensor<B, D> {
        match self {
            Activation::Linear => tensor,
            Activation::Relu => burn::tensor::activation::relu(tensor),
            Activation::Sigmoid => burn::tensor::activation::sigmoid(tensor),
            Activation::Tanh => burn::tensor::activation::tanh(tensor),
            Activation::Softmax => burn::tensor::activation::softmax(tensor, D - 1),
            Activation::Gelu => burn::tensor::activation::gelu(tensor),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use burn::backend::NdArray;

    type TestBackend = NdArray;

    #[test]
    fn test_activation_config_names() {
        let parse = |name: &str| serde_json::from_value::<Activation>(serde_json::json!(name));
        assert_eq!(parse("linear").unwrap(), Activation::Linear);
        assert_eq!(parse("none").unwrap(), Activation::Linear);
        assert_eq!(parse("rectified").unwrap(), Activation::Relu);
        assert_eq!(parse("sigmoid").unwrap(), Activation::Sigmoid);
        assert!(parse("NONE").is_err());
        assert!(parse("invalid").is_err());
        assert_eq!(serde_json::to_value(Activation::Relu).unwrap(), "relu");
    }

    #[test]
    fn test_relu_activation() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-2.0, 0.0, 3.0], &device);
        let output = Activation::Relu.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        assert!((result[0] - 0.0).abs() < 1e-5);
        assert!((result[1] - 0.0).abs() < 1e-5);
        assert!((result[2] - 3.0).abs() < 1e-5);
    }

    #[test]
    fn test_softmax_activation_sums_to_one() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 2>::from_floats([[1.0, 2.0, 3.0]], &device);
        let output = Activation::Softmax.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        let total: f32 = result.iter().sum();
        assert!((total - 1.0).abs() < 1e-5);
        assert!(result[2] > result[1] && result[1] > result[0]);
    }

    #[test]
    fn test_gelu_activation() {
        use burn::tensor::backend::Backend;
        let device = <TestBackend as Backend>::Device::default();
        let input = Tensor::<TestBackend, 1>::from_floats([-1.0, 0.0, 1.0], &device);
        let output = Activation::Gelu.apply(input);
        let result: Vec<f32> = output.to_data().to_vec().unwrap();
        // GeLU(-1) ≈ -0.1587, GeLU(0) = 0, GeLU(1) ≈ 0.8413
        assert!((result[0] - (-0.1587)).abs() < 1e-3);
        assert!((result[1] - 0.0).abs() < 1e-5);
        assert!((result[2] - 0.8413).abs() < 1e-3);
    }
}
