//! Shared utilities for the frame loop.

pub mod frame_timing;
