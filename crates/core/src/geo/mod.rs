//! Geodetic locations and local north/east plane conversions
//!
//! Positions are stored as integer latitude/longitude in 1e-7 degree
//! units, the native resolution of GNSS receivers. Navigation over the
//! short legs a sailing vehicle covers works on a local flat plane, so
//! offsets between nearby locations are expressed as north/east vectors
//! in meters.

use core::f32::consts::PI;

use libm::{atan2f, cosf};
use nalgebra::Vector2;

/// Meters per 1e-7 degree of latitude.
const LOCATION_SCALING: f32 = 0.011131884502145034;

/// 1e-7 degrees of latitude per meter.
const LOCATION_SCALING_INV: f32 = 89.83204953368922;

/// Minimum longitude compression factor, applied near the poles where
/// `cos(latitude)` collapses toward zero.
const LONGITUDE_SCALE_MIN: f32 = 0.01;

/// Wrap an angle in radians to (-PI, PI].
pub fn wrap_pi(angle_rad: f32) -> f32 {
    let wrapped = wrap_2pi(angle_rad);
    if wrapped > PI {
        wrapped - 2.0 * PI
    } else {
        wrapped
    }
}

/// Wrap an angle in radians to [0, 2*PI).
pub fn wrap_2pi(angle_rad: f32) -> f32 {
    let wrapped = angle_rad % (2.0 * PI);
    if wrapped < 0.0 {
        wrapped + 2.0 * PI
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees to (-180, 180].
pub fn wrap_180(angle_deg: f32) -> f32 {
    let wrapped = wrap_360(angle_deg);
    if wrapped > 180.0 {
        wrapped - 360.0
    } else {
        wrapped
    }
}

/// Wrap an angle in degrees to [0, 360).
pub fn wrap_360(angle_deg: f32) -> f32 {
    let wrapped = angle_deg % 360.0;
    if wrapped < 0.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// A global position in integer 1e-7 degree units.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Location {
    /// Latitude in 1e-7 degrees, positive north
    pub lat: i32,
    /// Longitude in 1e-7 degrees, positive east
    pub lng: i32,
}

impl Location {
    /// Build a location from latitude/longitude in degrees.
    pub fn from_degrees(lat_deg: f32, lng_deg: f32) -> Self {
        Self {
            lat: (lat_deg * 1.0e7) as i32,
            lng: (lng_deg * 1.0e7) as i32,
        }
    }

    /// North/east offset from `self` to `other` in meters.
    pub fn ne_offset_to(&self, other: &Location) -> Vector2<f32> {
        let north = (other.lat - self.lat) as f32 * LOCATION_SCALING;
        let east = (other.lng - self.lng) as f32 * LOCATION_SCALING * longitude_scale(self.lat);
        Vector2::new(north, east)
    }

    /// Location displaced `north_m`/`east_m` meters from `self`.
    pub fn offset_ne(&self, north_m: f32, east_m: f32) -> Location {
        let dlat = north_m * LOCATION_SCALING_INV;
        let dlng = east_m * LOCATION_SCALING_INV / longitude_scale(self.lat);
        Location {
            lat: self.lat.wrapping_add(dlat as i32),
            lng: self.lng.wrapping_add(dlng as i32),
        }
    }

    /// Horizontal distance to `other` in meters.
    pub fn distance_m(&self, other: &Location) -> f32 {
        self.ne_offset_to(other).norm()
    }

    /// Bearing from `self` to `other` in degrees, [0, 360).
    pub fn bearing_deg(&self, other: &Location) -> f32 {
        let ne = self.ne_offset_to(other);
        wrap_360(atan2f(ne.y, ne.x).to_degrees())
    }
}

/// Longitude compression factor at the given latitude.
fn longitude_scale(lat_e7: i32) -> f32 {
    let scale = cosf((lat_e7 as f32 * 1.0e-7).to_radians());
    scale.max(LONGITUDE_SCALE_MIN)
}
