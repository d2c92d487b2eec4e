//! Shared utilities for the bridge.
//!
//! Currently just frame timing for the driver's FPS reporting.

/// Smoothed-FPS measurement for the driver's periodic reporting.
pub mod frame_timing;
