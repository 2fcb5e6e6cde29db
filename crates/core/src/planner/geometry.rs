//! Slope/intercept line primitives for the tack planner
//!
//! Lines live in the local north/east plane with north as the free
//! axis, east = slope * north + intercept. A leg heading due east has
//! an unbounded slope in this form, so callers substitute a large
//! finite slope instead.

use libm::fabsf;
use nalgebra::Vector2;

/// Denominators below this magnitude are clamped to it before
/// dividing, bending degenerate geometry slightly instead of producing
/// infinities.
pub(crate) const GEOMETRY_EPSILON: f32 = 1e-10;

/// Stand-in slope for a line with no north extent.
pub(crate) const VERTICAL_SLOPE: f32 = 1e8;

/// A line in slope/intercept form over the north/east plane.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Line2 {
    pub slope: f32,
    pub intercept: f32,
}

/// Foot of the perpendicular from `point` onto `line`.
pub(crate) fn projection(point: Vector2<f32>, line: Line2) -> Vector2<f32> {
    let slope = clamp_away_from_zero(line.slope);
    let intercept = clamp_away_from_zero(line.intercept);

    // perpendicular through the point, then intersect the two lines
    let aux_slope = -1.0 / slope;
    let aux_intercept = -aux_slope * point.x + point.y;

    let x = (aux_intercept - intercept) / (slope - aux_slope);
    Vector2::new(x, slope * x + intercept)
}

fn clamp_away_from_zero(value: f32) -> f32 {
    if fabsf(value) < GEOMETRY_EPSILON {
        GEOMETRY_EPSILON
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_projection_onto_north_axis() {
        // slope and intercept of the north axis both clamp to epsilon
        let line = Line2 {
            slope: 0.0,
            intercept: 0.0,
        };
        let foot = projection(Vector2::new(3.0, 4.0), line);
        assert!((foot.x - 3.0).abs() < 1e-3, "foot {:?}", foot);
        assert!(foot.y.abs() < 1e-3, "foot {:?}", foot);
    }

    #[test]
    fn test_projection_onto_diagonal() {
        let line = Line2 {
            slope: 1.0,
            intercept: 0.0,
        };
        let foot = projection(Vector2::new(0.0, 2.0), line);
        assert!((foot.x - 1.0).abs() < 1e-3, "foot {:?}", foot);
        assert!((foot.y - 1.0).abs() < 1e-3, "foot {:?}", foot);
    }

    #[test]
    fn test_projection_onto_near_vertical_line() {
        // a due-east line through the origin carries the stand-in slope
        let line = Line2 {
            slope: VERTICAL_SLOPE,
            intercept: 0.0,
        };
        let foot = projection(Vector2::new(2.0, 5.0), line);
        assert!(foot.x.abs() < 1e-3, "foot {:?}", foot);
        assert!((foot.y - 5.0).abs() < 1e-3, "foot {:?}", foot);
    }

    #[test]
    fn test_projection_point_on_line_is_fixed() {
        let line = Line2 {
            slope: 0.5,
            intercept: 2.0,
        };
        let foot = projection(Vector2::new(4.0, 4.0), line);
        assert!((foot.x - 4.0).abs() < 1e-3);
        assert!((foot.y - 4.0).abs() < 1e-3);
    }
}
