use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Geographic anchor for the tangent frame.
pub struct AnchorOptions {
    /// Anchor longitude in degrees (WGS84).
    pub longitude_deg: f64,
    /// Anchor latitude in degrees (WGS84).
    pub latitude_deg: f64,
    /// Height in meters used only to derive the local vertical direction,
    /// not to place content. Must be positive.
    pub reference_height_m: f64,
}

impl Default for AnchorOptions {
    fn default() -> Self {
        Self {
            longitude_deg: 117.2495995,
            latitude_deg: 31.7917975,
            reference_height_m: 300.0,
        }
    }
}
