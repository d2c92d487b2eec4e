//! Camera state value types on both sides of the bridge.

use glam::{DMat4, DVec3};

use crate::geodesy::LocalPoint;

/// The Globe Engine's camera state as sampled once per frame, after its
/// render. Observed, never owned, by the bridge.
#[derive(Debug, Clone, Copy)]
pub struct CameraExtrinsics {
    /// Inverse view transform: camera-local space to geocentric world
    /// space, double precision.
    pub inverse_view: DMat4,
    forward: DVec3,
    up: DVec3,
    /// Vertical field of view in radians.
    pub fovy_radians: f64,
}

impl CameraExtrinsics {
    /// Build from per-frame samples. The forward and up directions are
    /// normalized here so the unit-length invariant holds for every
    /// consumer; zero-length inputs stay zero and trip the extractor's
    /// degenerate-geometry fallback instead of producing NaN.
    #[must_use]
    pub fn new(inverse_view: DMat4, forward: DVec3, up: DVec3, fovy_radians: f64) -> Self {
        Self {
            inverse_view,
            forward: forward.normalize_or_zero(),
            up: up.normalize_or_zero(),
            fovy_radians,
        }
    }

    /// Unit camera forward direction, geocentric axes.
    #[must_use]
    pub const fn forward(&self) -> DVec3 {
        self.forward
    }

    /// Unit camera up direction, geocentric axes.
    #[must_use]
    pub const fn up(&self) -> DVec3 {
        self.up
    }
}

/// The Scene Engine's camera state, fully recomputed every frame.
///
/// Yaw/pitch/roll are independent Euler angles in radians, applied in the
/// Scene Engine's fixed rotation order. Nothing here carries over between
/// frames; the driver holds the last valid instance only as a fallback
/// for degenerate frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera position in local space, re-centered on the tangent anchor.
    pub position: LocalPoint,
    /// Rotation about the local vertical axis.
    pub yaw: f32,
    /// Rotation about the local transverse axis.
    pub pitch: f32,
    /// Rotation about the view axis.
    pub roll: f32,
    /// Field of view in radians, on the axis the Scene Engine expects.
    pub fov: f32,
}

impl CameraState {
    /// True when every component is a finite number. A non-finite state
    /// must never reach the Scene Engine camera.
    #[must_use]
    pub fn is_finite(&self) -> bool {
        self.position.is_finite()
            && self.yaw.is_finite()
            && self.pitch.is_finite()
            && self.roll.is_finite()
            && self.fov.is_finite()
    }
}

impl Default for CameraState {
    fn default() -> Self {
        Self {
            position: LocalPoint::ZERO,
            yaw: 0.0,
            pitch: 0.0,
            roll: 0.0,
            fov: std::f32::consts::FRAC_PI_4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extrinsics_normalize_directions() {
        let e = CameraExtrinsics::new(
            DMat4::IDENTITY,
            DVec3::new(3.0, 0.0, 0.0),
            DVec3::new(0.0, 0.0, 7.0),
            1.0,
        );
        assert!((e.forward().length() - 1.0).abs() < 1e-12);
        assert!((e.up().length() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn zero_direction_stays_zero_instead_of_nan() {
        let e = CameraExtrinsics::new(DMat4::IDENTITY, DVec3::ZERO, DVec3::Z, 1.0);
        assert_eq!(e.forward(), DVec3::ZERO);
    }

    #[test]
    fn non_finite_state_is_detected() {
        let mut state = CameraState::default();
        assert!(state.is_finite());
        state.roll = f32::NAN;
        assert!(!state.is_finite());
    }
}
