//! Multiply and screen compositing of multiple images

/// Padding, centering and left-to-right folding of inputs
pub mod compositor;
/// Per-channel blend operators
pub mod operator;

pub use compositor::Compositor;
pub use operator::BlendOperator;
