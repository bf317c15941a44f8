//! Rendering passes.
//!
//! The only pass is the instanced spiral sprite pass.

pub mod spiral;

pub use spiral::SpiralRenderer;
