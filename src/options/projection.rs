use serde::{Deserialize, Serialize};

/// Which axis the Scene Engine's field-of-view parameter measures.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "snake_case")]
pub enum FovAxis {
    /// Scene Engine consumes a vertical FOV; the Globe Engine's value
    /// passes through unchanged.
    #[default]
    Vertical,
    /// Scene Engine consumes a horizontal FOV; the vertical value is
    /// widened by the viewport aspect ratio.
    Horizontal,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Projection convention of the target Scene Engine camera.
pub struct ProjectionOptions {
    /// FOV axis the Scene Engine expects.
    pub fov_axis: FovAxis,
    /// Viewport width/height ratio, used only for horizontal conversion.
    pub aspect_ratio: f32,
}

impl Default for ProjectionOptions {
    fn default() -> Self {
        Self {
            fov_axis: FovAxis::Vertical,
            aspect_ratio: 16.0 / 9.0,
        }
    }
}
