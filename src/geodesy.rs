//! Geocentric coordinates and the axis convention boundary.
//!
//! The Globe Engine works in a planet-centered, planet-fixed Cartesian
//! frame (meters, z toward the north pole, double precision). The Scene
//! Engine works in a small y-up local frame (single precision). Everything
//! crossing that boundary goes through [`to_local_axes`], a fixed
//! permutation that exchanges the second and third components.

use glam::{DVec3, Vec3};

/// WGS84 semi-major axis in meters.
pub const WGS84_SEMI_MAJOR_AXIS_M: f64 = 6_378_137.0;

/// WGS84 first eccentricity squared.
pub const WGS84_FIRST_ECCENTRICITY_SQ: f64 = 6.694_379_990_141_316e-3;

/// A point in the Scene Engine's local coordinate space.
pub type LocalPoint = Vec3;

/// A direction in the Scene Engine's local coordinate space.
pub type LocalVector = Vec3;

/// A point in the planet-centered, planet-fixed Cartesian frame (meters).
///
/// Immutable once constructed. Double precision is required at this
/// magnitude: planet-radius coordinates (~6.4e6 m) leave less than a meter
/// of resolution in `f32`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeocentricPoint(DVec3);

impl GeocentricPoint {
    /// Construct from geodetic longitude/latitude (degrees) and height
    /// above the WGS84 ellipsoid (meters).
    #[must_use]
    pub fn from_degrees(lon_deg: f64, lat_deg: f64, height_m: f64) -> Self {
        let (sin_lat, cos_lat) = lat_deg.to_radians().sin_cos();
        let (sin_lon, cos_lon) = lon_deg.to_radians().sin_cos();
        // Prime vertical radius of curvature at this latitude
        let n = WGS84_SEMI_MAJOR_AXIS_M
            / (1.0 - WGS84_FIRST_ECCENTRICITY_SQ * sin_lat * sin_lat).sqrt();
        Self(DVec3::new(
            (n + height_m) * cos_lat * cos_lon,
            (n + height_m) * cos_lat * sin_lon,
            (n * (1.0 - WGS84_FIRST_ECCENTRICITY_SQ) + height_m) * sin_lat,
        ))
    }

    /// Wrap an already-geocentric Cartesian position (meters).
    #[must_use]
    pub const fn from_cartesian(v: DVec3) -> Self {
        Self(v)
    }

    /// The raw geocentric Cartesian coordinates.
    #[must_use]
    pub const fn as_dvec3(self) -> DVec3 {
        self.0
    }
}

/// Map a geocentric vector onto the Scene Engine's axis convention.
///
/// The Globe Engine treats the third axis as up, the Scene Engine the
/// second; the conversion is the fixed permutation `(x, y, z) → (x, z, y)`
/// with no scaling or translation. Swapping two components is an
/// involution, so this function is its own inverse and serves both
/// directions of the boundary.
#[inline]
#[must_use]
pub fn to_local_axes(v: DVec3) -> DVec3 {
    DVec3::new(v.x, v.z, v.y)
}

/// Narrow a local-axes double vector to the Scene Engine's `f32` space.
///
/// Only call this on re-centered values (small magnitudes); narrowing raw
/// planet-scale coordinates discards meter-level precision.
#[inline]
#[must_use]
pub fn narrow_to_render(v: DVec3) -> LocalVector {
    v.as_vec3()
}
