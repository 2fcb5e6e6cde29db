//! Navigation type definitions
//!
//! Data exchanged between the waypoint navigation layer and the sailing
//! heading selector each control cycle.

/// Demanded navigation state for one control cycle.
///
/// The waypoint navigation layer produces one of these per cycle; the
/// sailing heading selector decides whether the demanded heading is
/// sailable or must be replaced by an upwind beat.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct NavTarget {
    /// Heading the navigation layer wants, radians in earth frame
    pub desired_heading_rad: f32,
    /// Signed distance from the leg line in meters, positive when the
    /// vehicle sits right of the leg looking from origin to destination
    pub cross_track_error_m: f32,
    /// Half width of the allowed corridor around the leg in meters,
    /// zero disables corridor enforcement
    pub corridor_half_width_m: f32,
}

impl Default for NavTarget {
    fn default() -> Self {
        Self {
            desired_heading_rad: 0.0,
            cross_track_error_m: 0.0,
            corridor_half_width_m: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nav_target_default_disables_corridor() {
        let target = NavTarget::default();
        assert!((target.desired_heading_rad - 0.0).abs() < 0.001);
        assert!((target.cross_track_error_m - 0.0).abs() < 0.001);
        assert!(
            (target.corridor_half_width_m - 0.0).abs() < 0.001,
            "zero width means no corridor tacks"
        );
    }
}
