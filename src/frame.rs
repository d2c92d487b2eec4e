//! The fixed local tangent frame anchoring the Scene Engine to the globe.
//!
//! A [`TangentFrame`] is computed exactly once at startup, before any frame
//! renders, and is read-only thereafter. It fixes a geographic anchor
//! point, derives the true local vertical there, and produces the rotation
//! the Scene Engine's root node needs so that locally-placed content sits
//! on the tangent plane with +Y along that vertical.

use glam::{DVec3, Quat};

use crate::error::BridgeError;
use crate::geodesy::{self, GeocentricPoint, LocalPoint, LocalVector};
use crate::options::AnchorOptions;

/// Residual convention offset between the two engines' notions of
/// "forward" vs "up": after the look-rotation points the root's forward
/// axis along the local vertical, a quarter turn about the root's own
/// X axis brings +Y onto the vertical instead.
pub const ROOT_FORWARD_TO_UP_CORRECTION: f32 = std::f32::consts::FRAC_PI_2;

/// Minimum length of the derived vertical offset before the look-rotation
/// is considered degenerate.
const VERTICAL_EPSILON_M: f64 = 1e-6;

/// One-time local reference frame: a surface anchor plus the orientation
/// aligning the Scene Engine's root with the local vertical there.
#[derive(Debug, Clone)]
pub struct TangentFrame {
    origin: GeocentricPoint,
    vertical_local: LocalVector,
    root_rotation: Quat,
}

impl TangentFrame {
    /// Establish the frame from the configured anchor.
    ///
    /// Builds the anchor at ground level and a second point directly above
    /// it at the reference height; the normalized difference, taken in
    /// local axes, is the local vertical.
    ///
    /// # Errors
    ///
    /// `InvalidReferenceHeight` when the configured height is not a
    /// positive finite number (the vertical would be undefined), and
    /// `InvalidAnchor` when longitude/latitude are non-finite.
    pub fn establish(anchor: &AnchorOptions) -> Result<Self, BridgeError> {
        if !anchor.longitude_deg.is_finite() || !anchor.latitude_deg.is_finite() {
            return Err(BridgeError::InvalidAnchor(format!(
                "lon={}, lat={}",
                anchor.longitude_deg, anchor.latitude_deg
            )));
        }
        if !anchor.reference_height_m.is_finite() || anchor.reference_height_m <= 0.0 {
            return Err(BridgeError::InvalidReferenceHeight(anchor.reference_height_m));
        }

        let origin =
            GeocentricPoint::from_degrees(anchor.longitude_deg, anchor.latitude_deg, 0.0);
        let above = GeocentricPoint::from_degrees(
            anchor.longitude_deg,
            anchor.latitude_deg,
            anchor.reference_height_m,
        );

        let offset = geodesy::to_local_axes(above.as_dvec3() - origin.as_dvec3());
        let length = offset.length();
        if length < VERTICAL_EPSILON_M {
            return Err(BridgeError::InvalidReferenceHeight(anchor.reference_height_m));
        }
        let vertical_local = geodesy::narrow_to_render(offset / length);

        // Yaw/pitch look-rotation pointing the root's forward (+Z) axis
        // along the vertical with no twist about it (twist would rotate
        // parented content off its geographic azimuth), then the fixed
        // quarter-turn so +Y carries the vertical instead.
        let yaw = vertical_local.x.atan2(vertical_local.z);
        let pitch = (-vertical_local.y)
            .atan2(vertical_local.x.hypot(vertical_local.z));
        let look = Quat::from_rotation_y(yaw) * Quat::from_rotation_x(pitch);
        let root_rotation =
            look * Quat::from_rotation_x(ROOT_FORWARD_TO_UP_CORRECTION);

        log::debug!(
            "tangent frame established at lon={:.6} lat={:.6}, vertical={:?}",
            anchor.longitude_deg,
            anchor.latitude_deg,
            vertical_local,
        );

        Ok(Self {
            origin,
            vertical_local,
            root_rotation,
        })
    }

    /// The geographic anchor at ground level.
    #[must_use]
    pub const fn origin(&self) -> GeocentricPoint {
        self.origin
    }

    /// Unit local vertical at the anchor, in Scene Engine axes.
    #[must_use]
    pub const fn vertical_local(&self) -> LocalVector {
        self.vertical_local
    }

    /// Rotation and translation for the Scene Engine's root node.
    ///
    /// Positions are re-centered on the anchor, so the root's translation
    /// is the local origin; content parented under the root at small local
    /// offsets renders coincident with the corresponding geography.
    #[must_use]
    pub fn root_transform(&self) -> (Quat, LocalPoint) {
        (self.root_rotation, self.local_position_of(self.origin))
    }

    /// Re-center an arbitrary geocentric point into the Scene Engine's
    /// local space: subtract the anchor in double precision, then permute
    /// axes and narrow to `f32`.
    #[must_use]
    pub fn local_position_of(&self, point: GeocentricPoint) -> LocalPoint {
        self.local_offset_of(point.as_dvec3())
    }

    /// As [`local_position_of`](Self::local_position_of), for a raw
    /// geocentric Cartesian position.
    #[must_use]
    pub fn local_offset_of(&self, geocentric: DVec3) -> LocalPoint {
        geodesy::narrow_to_render(geodesy::to_local_axes(
            geocentric - self.origin.as_dvec3(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec3;

    use super::*;

    fn anchor() -> AnchorOptions {
        AnchorOptions {
            longitude_deg: 117.2495995,
            latitude_deg: 31.7917975,
            reference_height_m: 300.0,
        }
    }

    #[test]
    fn rejects_non_positive_reference_height() {
        let mut bad = anchor();
        bad.reference_height_m = 0.0;
        assert!(matches!(
            TangentFrame::establish(&bad),
            Err(BridgeError::InvalidReferenceHeight(_))
        ));
        bad.reference_height_m = -5.0;
        assert!(TangentFrame::establish(&bad).is_err());
    }

    #[test]
    fn rejects_non_finite_anchor() {
        let mut bad = anchor();
        bad.latitude_deg = f64::NAN;
        assert!(matches!(
            TangentFrame::establish(&bad),
            Err(BridgeError::InvalidAnchor(_))
        ));
    }

    #[test]
    fn vertical_is_unit_and_points_away_from_planet() {
        let frame = TangentFrame::establish(&anchor()).unwrap();
        let v = frame.vertical_local();
        assert!((v.length() - 1.0).abs() < 1e-6);
        // Moving up from the anchor must increase distance from the center
        let up_local = frame.local_position_of(GeocentricPoint::from_degrees(
            117.2495995,
            31.7917975,
            100.0,
        ));
        assert!(up_local.dot(v) > 99.0);
    }

    #[test]
    fn root_up_axis_aligns_with_vertical() {
        let frame = TangentFrame::establish(&anchor()).unwrap();
        let (rotation, translation) = frame.root_transform();
        let root_up = rotation * Vec3::Y;
        assert!((root_up.dot(frame.vertical_local()) - 1.0).abs() < 1e-5);
        // Re-centering puts the anchor at the local origin
        assert!(translation.length() < 1e-3);
    }

    #[test]
    fn root_azimuth_has_no_twist_about_the_vertical() {
        // A yaw/pitch look-rotation leaves the root's +X axis horizontal
        // at (cos yaw, 0, -sin yaw); any twist about the vertical would
        // rotate parented content away from its geographic placement.
        let frame = TangentFrame::establish(&anchor()).unwrap();
        let (rotation, _) = frame.root_transform();
        let v = frame.vertical_local();
        let yaw = v.x.atan2(v.z);
        let east = rotation * Vec3::X;
        assert!(east.y.abs() < 1e-6);
        assert!(east.abs_diff_eq(Vec3::new(yaw.cos(), 0.0, -yaw.sin()), 1e-5));
    }

    #[test]
    fn equator_vertical_is_local_x() {
        // At lon 0, lat 0 the geodetic normal is geocentric +X, which the
        // axis permutation leaves in place.
        let frame = TangentFrame::establish(&AnchorOptions {
            longitude_deg: 0.0,
            latitude_deg: 0.0,
            reference_height_m: 300.0,
        })
        .unwrap();
        assert!(frame.vertical_local().abs_diff_eq(Vec3::X, 1e-6));
    }
}
