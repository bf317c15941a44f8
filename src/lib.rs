// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Animated golden-angle spiral of instanced point sprites, built on wgpu.
//!
//! A fixed maximum population of points is laid out on a Vogel spiral. Each
//! frame a sine oscillator decides how many of them are visible, and a
//! single instanced draw renders that many soft, anti-aliased discs whose
//! hue follows their angle around the spiral.
//!
//! # Key entry points
//!
//! - [`FrameDriver`] - owns the GPU state and runs one frame per host
//!   callback
//! - [`FrameHost`] - what the driver needs from a window or canvas
//! - [`spiral`] - CPU mirror of the shader's layout and shading math
//! - [`options::Options`] - population, pulse and display settings
//!
//! # Architecture
//!
//! All per-point work happens on the GPU in `assets/shaders/spiral.wgsl`;
//! there is no per-point buffer. The CPU side writes one 16-byte uniform
//! record per frame (viewport, pixel ratio, point count) and issues
//! `draw(0..4, 0..N)`. The driver never schedules itself: it is handed a
//! [`FrameHost`] (a winit window or, with the `web` feature, a canvas) and
//! asks it for the next frame.

pub mod animation;
pub mod engine;
mod error;
pub mod gpu;
pub mod options;
pub mod renderer;
pub mod spiral;
pub mod util;
#[cfg(feature = "viewer")]
mod viewer;
#[cfg(all(feature = "web", target_arch = "wasm32"))]
pub mod web;

pub use engine::{FrameDriver, FrameHost, FramePlan};
pub use error::PhylloError;
#[cfg(feature = "viewer")]
pub use viewer::{Viewer, ViewerBuilder};
