//! Per-frame conversion of the Globe Engine's camera into Scene Engine
//! terms.
//!
//! This is the core of the bridge: each tick it turns the sampled
//! [`CameraExtrinsics`] into a [`CameraState`] — local position,
//! yaw/pitch/roll, and field of view — preserving visual alignment between
//! the two renders. The function is pure: given the same inputs it always
//! produces the same output, and it keeps no state between calls. The
//! "hold last yaw" fallback for degenerate geometry is realized by the
//! caller passing the previous yaw in.

use glam::DVec3;

use crate::camera::state::{CameraExtrinsics, CameraState};
use crate::frame::TangentFrame;
use crate::geodesy;
use crate::options::{FovAxis, ProjectionOptions};

/// Convention offset so that yaw 0 faces the Scene Engine's native
/// forward axis rather than local +X, where `atan2` places its zero.
pub const YAW_FORWARD_CONVENTION_OFFSET: f64 = std::f64::consts::FRAC_PI_2;

/// Convention offset between the expected-up reference (a horizontal
/// vector, so the measured angle is taken from the horizon) and a roll of
/// zero for an untilted camera.
pub const ROLL_UP_CONVENTION_OFFSET: f64 = std::f64::consts::FRAC_PI_2;

/// Below this horizontal magnitude of the forward direction, yaw's `atan2`
/// has both inputs near zero and the heading is undefined.
const DEGENERATE_FORWARD_EPSILON: f64 = 1e-6;

/// Convert a vertical field of view to the equivalent horizontal one for
/// the given width/height aspect ratio.
#[inline]
#[must_use]
pub fn horizontal_from_vertical(vfov_radians: f64, aspect: f64) -> f64 {
    2.0 * ((vfov_radians / 2.0).tan() * aspect).atan()
}

/// Extract the Scene Engine camera state for this frame.
///
/// `previous_yaw` is the last yaw applied to the Scene Engine camera; it
/// is returned unchanged when the forward direction is too close to
/// vertical for a heading to be meaningful.
#[must_use]
pub fn extract(
    extrinsics: &CameraExtrinsics,
    frame: &TangentFrame,
    projection: &ProjectionOptions,
    previous_yaw: f32,
) -> CameraState {
    // Position: decompose the inverse view transform and keep only the
    // translation (scale from the Globe Engine is ~1 and ignored).
    // Re-center on the tangent anchor in double precision before the
    // axis permutation and f32 narrowing.
    let (_scale, _rotation, translation) =
        extrinsics.inverse_view.to_scale_rotation_translation();
    let position = frame.local_offset_of(translation);

    let forward = geodesy::to_local_axes(extrinsics.forward());
    let up = geodesy::to_local_axes(extrinsics.up());

    // Yaw from the horizontal components of forward. atan2 keeps the
    // correct quadrant when forward.x goes negative.
    let horizontal = forward.x.hypot(forward.z);
    let yaw = if horizontal < DEGENERATE_FORWARD_EPSILON {
        f64::from(previous_yaw)
    } else {
        YAW_FORWARD_CONVENTION_OFFSET - forward.z.atan2(forward.x)
    };

    // Pitch from the vertical component. Clamp against floating-point
    // overshoot at ±1 so asin never sees an out-of-domain input.
    let pitch = (-forward.y).clamp(-1.0, 1.0).asin();

    // Roll: angle between the true up vector and the up reference of a
    // non-rolled camera at this yaw. The reference is horizontal, hence
    // the fixed offset; reflecting when true up points below the horizon
    // picks the correct one of the two angles sharing a cosine.
    let expected_up = DVec3::new(-yaw.cos(), 0.0, yaw.sin());
    let mut roll =
        ROLL_UP_CONVENTION_OFFSET - up.dot(expected_up).clamp(-1.0, 1.0).acos();
    if up.y < 0.0 {
        roll = std::f64::consts::PI - roll;
    }

    let fov = match projection.fov_axis {
        FovAxis::Vertical => extrinsics.fovy_radians,
        FovAxis::Horizontal => horizontal_from_vertical(
            extrinsics.fovy_radians,
            f64::from(projection.aspect_ratio),
        ),
    };

    CameraState {
        position,
        yaw: yaw as f32,
        pitch: pitch as f32,
        roll: roll as f32,
        fov: fov as f32,
    }
}
