//! Geometry kernel: distances, angles, circle tangents and arc measures.
//!
//! Everything here is a pure function of its arguments.

use glam::DVec2;

use crate::angle::{HALF_TURN, QUARTER_TURN};
use crate::errors::{GeometryError, Result};
use crate::types::{Circle, Point, Segment};

/// Euclidean distance between two points
pub fn distance(a: Point, b: Point) -> f64 {
    (b.x - a.x).hypot(b.y - a.y)
}

/// Signed angle of the vector `a -> b`, in (-π, π]
pub fn angle(a: Point, b: Point) -> f64 {
    (b.y - a.y).atan2(b.x - a.x)
}

/// Tangent between two circles that keeps them on opposite sides of the line.
///
/// `invert` picks which of the two such tangents is returned. With a
/// zero-radius circle this is the tangent from a point to the other circle.
/// Fails when the center distance is at most `r1 + r2`.
pub fn tangent(a: &Circle, b: &Circle, invert: bool) -> Result<Segment> {
    let delta = b.center.to_dvec2() - a.center.to_dvec2();
    let hypotenuse = delta.length();
    let short_side = a.radius + b.radius;
    if hypotenuse <= short_side {
        return Err(GeometryError::DegenerateTangent {
            center_distance: hypotenuse,
            limit: short_side,
        });
    }

    let sign = if invert { -1.0 } else { 1.0 };
    let base = delta.y.atan2(delta.x);
    let theta = base + sign * (short_side / hypotenuse).asin() - sign * QUARTER_TURN;

    Ok(Segment::new(a.point_at(theta), b.point_at(theta + HALF_TURN)))
}

/// Tangent that keeps both circles on the same side of the line.
///
/// Fails when one circle contains the other (center distance at most
/// `|r1 - r2|`).
pub fn outer_tangent(a: &Circle, b: &Circle, invert: bool) -> Result<Segment> {
    let delta = b.center.to_dvec2() - a.center.to_dvec2();
    let hypotenuse = delta.length();
    let radius_difference = (a.radius - b.radius).abs();
    if hypotenuse <= radius_difference {
        return Err(GeometryError::DegenerateTangent {
            center_distance: hypotenuse,
            limit: radius_difference,
        });
    }

    let sign = if invert { -1.0 } else { 1.0 };
    let base = delta.y.atan2(delta.x);
    let theta = base - sign * ((a.radius - b.radius) / hypotenuse).acos();

    Ok(Segment::new(a.point_at(theta), b.point_at(theta)))
}

/// Straight distance between the ends of an arc
pub fn arc_chord_length(radius: f64, angle: f64) -> f64 {
    radius * (angle / 2.0).sin() * 2.0
}

/// Height of an arc above its chord
pub fn arc_sagitta(radius: f64, angle: f64) -> f64 {
    radius - radius * (angle / 2.0).cos()
}

pub fn arc_length(radius: f64, angle: f64) -> f64 {
    angle.abs() * radius
}

pub fn arc_length_between(radius: f64, start_angle: f64, end_angle: f64) -> f64 {
    arc_length(radius, end_angle - start_angle)
}

/// Side opposite `angle` in a right triangle with the given hypotenuse
pub fn opposite_length(hypotenuse: f64, angle: f64) -> f64 {
    angle.sin() * hypotenuse
}

/// Side adjacent to `angle` in a right triangle with the given hypotenuse
pub fn adjacent_length(hypotenuse: f64, angle: f64) -> f64 {
    angle.cos() * hypotenuse
}

/// Cosine between a tangent segment and the radius reaching one of its ends.
///
/// Zero means the segment touches the circle at that end.
pub fn tangency_error(circle: &Circle, touch: Point, other_end: Point) -> f64 {
    let radius: DVec2 = touch.to_dvec2() - circle.center.to_dvec2();
    let along: DVec2 = other_end.to_dvec2() - touch.to_dvec2();
    if radius.length() == 0.0 || along.length() == 0.0 {
        return 0.0;
    }
    radius.normalize().dot(along.normalize())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPS: f64 = 1e-9;

    fn assert_touches(circle: &Circle, touch: Point, other: Point) {
        let r = distance(circle.center, touch);
        assert!(
            (r - circle.radius).abs() < EPS,
            "endpoint at {r}, expected radius {}",
            circle.radius
        );
        assert!(tangency_error(circle, touch, other).abs() < 1e-9);
    }

    #[test]
    fn distance_and_angle() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(3.0, 4.0);
        assert_eq!(distance(a, b), 5.0);
        assert!((angle(a, Point::new(0.0, 1.0)) - PI / 2.0).abs() < EPS);
        assert!((angle(a, Point::new(-1.0, 0.0)) - PI).abs() < EPS);
    }

    #[test]
    fn tangent_touches_both_circles() {
        let cases = [
            (Circle::new(805.0, 1360.0, 300.0), Circle::new(1200.0, 850.0, 320.0)),
            (Circle::new(0.0, 0.0, 10.0), Circle::new(100.0, 0.0, 10.0)),
            (Circle::new(-40.0, 25.0, 5.0), Circle::new(60.0, -80.0, 70.0)),
        ];
        for (a, b) in cases {
            for invert in [false, true] {
                let seg = tangent(&a, &b, invert).unwrap();
                assert_touches(&a, seg.p1, seg.p2);
                assert_touches(&b, seg.p2, seg.p1);
            }
        }
    }

    #[test]
    fn tangent_from_point_starts_at_point() {
        let foot = Circle::at_point(Point::new(200.0, 1325.0));
        let leg = Circle::new(805.0, 1360.0, 300.0);
        let seg = tangent(&foot, &leg, true).unwrap();
        assert!(distance(seg.p1, foot.center) < EPS);
        assert_touches(&leg, seg.p2, seg.p1);
    }

    #[test]
    fn tangent_invert_picks_the_other_side() {
        let a = Circle::new(0.0, 0.0, 10.0);
        let b = Circle::new(100.0, 0.0, 10.0);
        let one = tangent(&a, &b, false).unwrap();
        let two = tangent(&a, &b, true).unwrap();
        assert!((one.p1.y + two.p1.y).abs() < EPS);
        assert!(one.p1.y * one.p2.y < 0.0, "circles sit on opposite sides");
        // length of the crossing tangent: sqrt(d² - (r1 + r2)²)
        assert!((one.length() - (100.0f64 * 100.0 - 400.0).sqrt()).abs() < EPS);
    }

    #[test]
    fn tangent_rejects_overlap_touch_and_nesting() {
        let a = Circle::new(0.0, 0.0, 10.0);
        // touching: distance == r1 + r2 is degenerate
        assert!(matches!(
            tangent(&a, &Circle::new(20.0, 0.0, 10.0), false),
            Err(GeometryError::DegenerateTangent { .. })
        ));
        assert!(tangent(&a, &Circle::new(15.0, 0.0, 10.0), true).is_err());
        assert!(tangent(&a, &Circle::new(1.0, 1.0, 2.0), false).is_err());
        assert!(tangent(&Circle::at_point(Point::ORIGIN), &Circle::at_point(Point::ORIGIN), false).is_err());
    }

    #[test]
    fn outer_tangent_equal_radii() {
        let a = Circle::new(0.0, 0.0, 10.0);
        let b = Circle::new(100.0, 0.0, 10.0);
        let below = outer_tangent(&a, &b, false).unwrap();
        let above = outer_tangent(&a, &b, true).unwrap();
        assert!((below.p1.y + 10.0).abs() < EPS && (below.p2.y + 10.0).abs() < EPS);
        assert!((above.p1.y - 10.0).abs() < EPS && (above.p2.y - 10.0).abs() < EPS);
        assert!((above.length() - 100.0).abs() < EPS);
        assert!(above.p1.x.abs() < EPS && (above.p2.x - 100.0).abs() < EPS);
    }

    #[test]
    fn outer_tangent_touches_unequal_circles() {
        let a = Circle::new(0.0, 0.0, 30.0);
        let b = Circle::new(120.0, 50.0, 10.0);
        for invert in [false, true] {
            let seg = outer_tangent(&a, &b, invert).unwrap();
            assert_touches(&a, seg.p1, seg.p2);
            assert_touches(&b, seg.p2, seg.p1);
        }
        assert!(outer_tangent(&a, &Circle::new(5.0, 0.0, 10.0), false).is_err());
    }

    #[test]
    fn arc_measures() {
        let r = 300.0;
        assert!((arc_chord_length(r, PI) - 600.0).abs() < EPS);
        assert!((arc_sagitta(r, PI) - 300.0).abs() < EPS);
        assert!((arc_length(r, -1.0) - 300.0).abs() < EPS);
        assert!((arc_length_between(r, 2.0, 1.5) - 150.0).abs() < EPS);
        assert_eq!(arc_sagitta(r, 0.0), 0.0);
    }

    #[test]
    fn triangle_sides() {
        assert!((opposite_length(2.0, PI / 6.0) - 1.0).abs() < EPS);
        assert!((adjacent_length(2.0, PI / 3.0) - 1.0).abs() < EPS);
    }
}
