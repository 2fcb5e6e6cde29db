//! Pure angular geometry for sailing relative to the wind
//!
//! All angles are radians unless noted. True wind direction and vehicle
//! headings are earth frame; apparent wind angles are body frame and
//! signed, zero at the bow, positive to starboard.

use core::f32::consts::PI;

use libm::{cosf, fabsf};

use crate::geo::{wrap_2pi, wrap_pi};
use crate::wind::types::Tack;

/// Padding applied around the no-go cone when deciding whether a leg
/// needs the sailing heading controller instead of direct navigation,
/// degrees.
pub const NO_GO_PAD_DEG: f32 = 10.0;

/// Apparent wind angle a vehicle on `heading_rad` would see, ignoring
/// boat speed. Non-negative means wind over the starboard rail.
pub fn apparent_angle_for_heading(true_wind_rad: f32, heading_rad: f32) -> f32 {
    wrap_pi(true_wind_rad - heading_rad)
}

/// The tack a vehicle on `heading_rad` would be on.
pub fn tack_for_heading(true_wind_rad: f32, heading_rad: f32) -> Tack {
    Tack::from_apparent(apparent_angle_for_heading(true_wind_rad, heading_rad))
}

/// True when `heading_rad` lies inside the no-go cone around the true
/// wind. The cone edge counts as inside.
pub fn in_no_go(true_wind_rad: f32, heading_rad: f32, no_go_rad: f32) -> bool {
    fabsf(wrap_pi(true_wind_rad - heading_rad)) <= no_go_rad
}

/// Closest sailable headings either side of the wind, in [0, 2*PI).
///
/// The left boundary is the port-tack heading, the right boundary the
/// starboard-tack heading, looking upwind.
pub fn no_go_boundaries(true_wind_rad: f32, no_go_rad: f32) -> (f32, f32) {
    let left = wrap_2pi(true_wind_rad + no_go_rad);
    let right = wrap_2pi(true_wind_rad - no_go_rad);
    (left, right)
}

/// Distinguish a tack from a gybe when switching sides.
///
/// Turning the bow through the wind keeps the sum of the two apparent
/// wind angle magnitudes below half a turn; turning the stern through
/// the wind does not.
pub fn is_tack_not_gybe(current_apparent_rad: f32, candidate_apparent_rad: f32) -> bool {
    fabsf(current_apparent_rad) + fabsf(candidate_apparent_rad) < PI
}

/// Speed made good toward a target bearing, m/s. Negative when the
/// vehicle moves away from the target.
pub fn velocity_made_good(speed_mps: f32, yaw_rad: f32, target_bearing_rad: f32) -> f32 {
    speed_mps * cosf(wrap_pi(target_bearing_rad - yaw_rad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apparent_angle_signs() {
        // wind from north, heading east: wind over the port rail
        let east = apparent_angle_for_heading(0.0, PI / 2.0);
        assert!((east - (-PI / 2.0)).abs() < 1e-6);
        // wind from north, heading west: wind over the starboard rail
        let west = apparent_angle_for_heading(0.0, 3.0 * PI / 2.0);
        assert!((west - (PI / 2.0)).abs() < 1e-6);
    }

    #[test]
    fn test_tack_for_heading() {
        assert_eq!(tack_for_heading(0.0, PI / 2.0), Tack::Port);
        assert_eq!(tack_for_heading(0.0, 3.0 * PI / 2.0), Tack::Starboard);
        // dead upwind counts as starboard, matching the sign convention
        assert_eq!(tack_for_heading(0.0, 0.0), Tack::Starboard);
    }

    #[test]
    fn test_in_no_go_edge_is_inside() {
        let no_go = 45.0_f32.to_radians();
        assert!(in_no_go(0.0, 0.0, no_go));
        assert!(in_no_go(0.0, no_go, no_go), "cone edge counts as inside");
        assert!(!in_no_go(0.0, no_go + 0.01, no_go));
        // wraps across north
        assert!(in_no_go(0.1, 2.0 * PI - 0.1, no_go));
    }

    #[test]
    fn test_no_go_boundaries() {
        let no_go = 45.0_f32.to_radians();
        let (left, right) = no_go_boundaries(0.0, no_go);
        assert!((left - no_go).abs() < 1e-6);
        assert!((right - (2.0 * PI - no_go)).abs() < 1e-6);

        // wind from the southwest
        let tw = 225.0_f32.to_radians();
        let (left, right) = no_go_boundaries(tw, no_go);
        assert!((left - 270.0_f32.to_radians()).abs() < 1e-5);
        assert!((right - 180.0_f32.to_radians()).abs() < 1e-5);
    }

    #[test]
    fn test_tack_vs_gybe() {
        let deg = |d: f32| d.to_radians();
        // beating upwind on either side: switching sides is a tack
        assert!(is_tack_not_gybe(deg(40.0), deg(-40.0)));
        // broad reach to broad reach passes the stern through the wind
        assert!(!is_tack_not_gybe(deg(170.0), deg(-170.0)));
        // close hauled to the opposite broad reach is a gybe too
        assert!(!is_tack_not_gybe(deg(30.0), deg(-170.0)));
        // beam reach to beam reach sits exactly on the boundary
        assert!(!is_tack_not_gybe(deg(90.0), deg(-90.0)));
    }

    #[test]
    fn test_velocity_made_good() {
        let vmg = velocity_made_good(2.0, 0.0, PI / 3.0);
        assert!((vmg - 1.0).abs() < 1e-6, "vmg {}", vmg);
        let away = velocity_made_good(2.0, 0.0, PI);
        assert!((away - (-2.0)).abs() < 1e-6, "vmg {}", away);
        // beam target yields no progress
        assert!(velocity_made_good(2.0, 0.0, PI / 2.0).abs() < 1e-6);
    }
}
