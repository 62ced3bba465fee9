//! Numeric layer implementations.
//!
//! This module contains the transformations applied by feed-forward nodes:
//! dense layers, their activation functions, and the [`LayerStack`] that
//! chains them.

pub mod activation;
pub mod dense;
pub mod stack;

pub use activation::Activation;
pub use dense::Dense;
pub use stack::LayerStack;
