//! Deliberative upwind route planner
//!
//! Plans the whole zig-zag to an upwind destination up front, as an
//! ordered sequence of tack waypoints, instead of deciding each tack
//! reactively. Invoked once per mission leg; the per cycle control
//! loop never calls it. The planner holds no state, callers snapshot
//! the inputs and get the same plan back for the same request.

mod geometry;

use heapless::Vec;
use libm::{fabsf, floorf, sinf, sqrtf, tanf};
use nalgebra::Vector2;

use self::geometry::{projection, Line2, VERTICAL_SLOPE};
use crate::geo::{wrap_180, Location};

/// Most points one plan can return, interior tack points plus the
/// doubled destination.
pub const MAX_TACK_POINTS: usize = 64;

/// Interior tack points the planar stage may produce.
pub const MAX_INTERIOR_POINTS: usize = MAX_TACK_POINTS - 2;

/// One planning request.
///
/// The tack angle must stay well clear of both 0 and 90 degrees, the
/// parameter layer clamps it before it gets here.
#[derive(Debug, Clone, Copy)]
pub struct TackPlanRequest {
    /// Start of the leg
    pub origin: Location,
    /// End of the leg
    pub destination: Location,
    /// Demanded course over the leg, degrees
    pub desired_heading_deg: f32,
    /// Apparent wind direction in earth frame, degrees
    pub apparent_wind_deg: f32,
    /// Lateral spacing between tack legs, meters
    pub tack_leg_m: f32,
    /// Angle the tack legs make with the direct course, degrees
    pub tack_theta_deg: f32,
}

/// Plan the zig-zag to the destination as geodetic waypoints.
///
/// The last two entries both hold the destination; waypoint consumers
/// treat the doubled final point as the arrival leg.
pub fn plan_tack_points(request: &TackPlanRequest) -> Vec<Location, MAX_TACK_POINTS> {
    let mut points = Vec::new();
    for ne in plan_tack_points_ne(request) {
        if points.push(request.origin.offset_ne(ne.x, ne.y)).is_err() {
            break;
        }
    }
    // the planar stage runs two short of capacity, these always fit
    let _ = points.push(request.destination);
    let _ = points.push(request.destination);
    points
}

/// Plan the zig-zag in the local north/east plane with the origin at
/// zero. Exposed for callers that work in the planar frame.
pub fn plan_tack_points_ne(request: &TackPlanRequest) -> Vec<Vector2<f32>, MAX_INTERIOR_POINTS> {
    let mut points = Vec::new();

    let destination_ne = request.origin.ne_offset_to(&request.destination);

    // the angle of attack of the apparent wind on the demanded course
    // picks which side the first reach leans toward
    let alpha_aw = wrap_180(request.apparent_wind_deg - request.desired_heading_deg);
    let alpha_p = request.origin.bearing_deg(&request.destination);

    // line A carries the direct course
    let line_a = Line2 {
        slope: if fabsf(destination_ne.x) < 1e-12 {
            VERTICAL_SLOPE
        } else {
            destination_ne.y / destination_ne.x
        },
        intercept: 0.0,
    };

    // line B is the course rotated by the tack angle, the direction of
    // the first reach
    let tan_theta = tanf(request.tack_theta_deg.to_radians());
    let line_b = Line2 {
        slope: if alpha_aw < alpha_p {
            (-line_a.slope + tan_theta) / (-tan_theta * line_a.slope - 1.0)
        } else {
            (-line_a.slope - tan_theta) / (tan_theta * line_a.slope - 1.0)
        },
        intercept: 0.0,
    };

    // distance along line B that puts the boat one leg spacing off the
    // course line
    let h = request.tack_leg_m / sinf(request.tack_theta_deg.to_radians());

    // line B passes through the origin, so intersecting it with the
    // circle of radius h collapses to a single square root
    let root_x = h / sqrtf(1.0 + line_b.slope * line_b.slope);
    let crossing = Vector2::new(root_x, line_b.slope * root_x);
    let opposite = -crossing;

    // the first tack point is the crossing closer to the destination
    let first = if (crossing - destination_ne).norm() < (opposite - destination_ne).norm() {
        crossing
    } else {
        opposite
    };
    if points.push(first).is_err() {
        return points;
    }

    // its perpendicular foot on the course line fixes the leg spacing
    let foot = projection(first, line_a);
    let spacing = 2.0 * foot.norm();

    // rails either side of the course that the remaining points
    // alternate between
    let rail_first = Line2 {
        slope: line_a.slope,
        intercept: -line_a.slope * first.x + first.y,
    };
    let rail_mirror = Line2 {
        slope: line_a.slope,
        intercept: 2.0 * line_a.intercept - rail_first.intercept,
    };

    let legs = floorf(destination_ne.norm() / spacing) as i32;
    let step = foot * 2.0;
    let on_first = projection(foot, rail_first);
    let on_mirror = projection(foot, rail_mirror);

    for z in 1..legs {
        let advanced = step * z as f32;
        let point = if z % 2 == 0 {
            on_first + advanced
        } else {
            on_mirror + advanced
        };
        if points.push(point).is_err() {
            break;
        }
    }

    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn north_leg_request() -> TackPlanRequest {
        let origin = Location::from_degrees(47.6, -122.3);
        TackPlanRequest {
            origin,
            destination: origin.offset_ne(100.0, 0.0),
            desired_heading_deg: 0.0,
            apparent_wind_deg: 30.0,
            tack_leg_m: 10.0,
            tack_theta_deg: 60.0,
        }
    }

    #[test]
    fn test_plan_north_leg_geometry() {
        let request = north_leg_request();
        let ne = plan_tack_points_ne(&request);

        // 100 m leg at 10 m spacing and 60 degrees: eight interior
        // points, first one a half spacing up the course, 10 m east
        assert_eq!(ne.len(), 8);
        assert!((ne[0].x - 5.7735).abs() < 0.01, "first {:?}", ne[0]);
        assert!((ne[0].y - 10.0).abs() < 0.01, "first {:?}", ne[0]);

        // the rest alternate rails, advancing one spacing each
        assert!((ne[1].x - 17.3205).abs() < 0.01, "second {:?}", ne[1]);
        assert!((ne[1].y + 10.0).abs() < 0.01, "second {:?}", ne[1]);
        assert!((ne[7].x - 86.6025).abs() < 0.01, "last {:?}", ne[7]);
        assert!((ne[7].y + 10.0).abs() < 0.01, "last {:?}", ne[7]);
    }

    #[test]
    fn test_plan_appends_destination_twice() {
        let request = north_leg_request();
        let geo = plan_tack_points(&request);
        assert_eq!(geo.len(), 10);
        assert_eq!(geo[8], request.destination);
        assert_eq!(geo[9], request.destination);

        // interior geodetic points line up with the planar plan
        let ne = plan_tack_points_ne(&request);
        let back = request.origin.ne_offset_to(&geo[0]);
        assert!((back.x - ne[0].x).abs() < 0.1, "north {}", back.x);
        assert!((back.y - ne[0].y).abs() < 0.1, "east {}", back.y);
    }

    #[test]
    fn test_plan_first_reach_side_follows_wind() {
        let mut request = north_leg_request();
        // wind attacking from the port side of the course starts the
        // zig-zag toward the other rail
        request.apparent_wind_deg = 330.0;
        let ne = plan_tack_points_ne(&request);
        assert!((ne[0].x - 5.7735).abs() < 0.01, "first {:?}", ne[0]);
        assert!((ne[0].y + 10.0).abs() < 0.01, "first {:?}", ne[0]);
        assert!((ne[1].y - 10.0).abs() < 0.01, "second {:?}", ne[1]);
    }

    #[test]
    fn test_plan_short_leg_keeps_only_first_point() {
        let mut request = north_leg_request();
        request.destination = request.origin.offset_ne(15.0, 0.0);
        let ne = plan_tack_points_ne(&request);
        assert_eq!(ne.len(), 1);

        let geo = plan_tack_points(&request);
        assert_eq!(geo.len(), 3);
        assert_eq!(geo[1], request.destination);
        assert_eq!(geo[2], request.destination);
    }

    #[test]
    fn test_plan_east_leg_uses_vertical_guard() {
        let origin = Location::from_degrees(47.6, -122.3);
        let request = TackPlanRequest {
            origin,
            destination: origin.offset_ne(0.0, 80.0),
            desired_heading_deg: 90.0,
            apparent_wind_deg: 60.0,
            tack_leg_m: 10.0,
            tack_theta_deg: 60.0,
        };
        let ne = plan_tack_points_ne(&request);
        assert_eq!(ne.len(), 6);
        // first reach leans north of the due-east course
        assert!((ne[0].x - 10.0).abs() < 0.01, "first {:?}", ne[0]);
        assert!((ne[0].y - 5.7735).abs() < 0.01, "first {:?}", ne[0]);

        let geo = plan_tack_points(&request);
        assert_eq!(geo.len(), 8);
        assert_eq!(geo[6], request.destination);
        assert_eq!(geo[7], request.destination);
    }

    #[test]
    fn test_plan_is_deterministic() {
        let request = north_leg_request();
        assert_eq!(plan_tack_points(&request), plan_tack_points(&request));
        assert_eq!(plan_tack_points_ne(&request), plan_tack_points_ne(&request));
    }

    #[test]
    fn test_plan_saturates_at_capacity() {
        let mut request = north_leg_request();
        // 1 m spacing over a 100 m leg wants 86 points, far beyond the
        // plan capacity
        request.tack_leg_m = 1.0;
        let ne = plan_tack_points_ne(&request);
        assert_eq!(ne.len(), MAX_INTERIOR_POINTS);

        let geo = plan_tack_points(&request);
        assert_eq!(geo.len(), MAX_TACK_POINTS);
        assert_eq!(geo[MAX_TACK_POINTS - 2], request.destination);
        assert_eq!(geo[MAX_TACK_POINTS - 1], request.destination);
    }
}
