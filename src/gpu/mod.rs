//! GPU resource management utilities.
//!
//! Provides wgpu device/surface initialization, pipeline boilerplate and
//! shader composition.

/// Shared wgpu boilerplate helpers for the sprite pipeline.
pub mod pipeline_helpers;
/// wgpu device, surface, and queue initialization.
pub mod render_context;
/// WGSL shader composition with `#import` support via naga-oil.
pub mod shader_composer;
