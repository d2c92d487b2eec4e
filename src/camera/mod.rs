//! Camera state translation between the two engines.
//!
//! Provides the per-frame extraction of local position, Euler angles, and
//! field of view from the Globe Engine's camera.

/// Per-frame yaw/pitch/roll/FOV/position extraction.
pub mod extractor;
/// Source and target camera value types.
pub mod state;

pub use extractor::{extract, horizontal_from_vertical};
pub use state::{CameraExtrinsics, CameraState};
