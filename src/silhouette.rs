//! Silhouette construction from the four control primitives.
//!
//! The silhouette runs from the foot point, tangent onto the leg circle, around
//! it, across to the back circle, around that one the other way, and up to the
//! head point: three tangents joined by two arcs forming an S.

use enum_dispatch::enum_dispatch;

use crate::angle::{HALF_TURN, Orientation, sweep};
use crate::errors::{GeometryError, Result};
use crate::geometry::{self, angle, tangent};
use crate::log::{debug, warn};
use crate::types::{Circle, Point, Segment};

/// Positions the host lets the user drag and resize
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlPrimitives {
    pub leg_circle: Circle,
    pub back_circle: Circle,
    pub foot_point: Point,
    pub head_point: Point,
}

impl Default for ControlPrimitives {
    fn default() -> Self {
        Self::armchair()
    }
}

impl ControlPrimitives {
    /// Reclined lounge chair
    pub fn armchair() -> Self {
        Self {
            leg_circle: Circle::new(805.0, 1360.0, 300.0),
            back_circle: Circle::new(1200.0, 850.0, 320.0),
            foot_point: Point::new(200.0, 1325.0),
            head_point: Point::new(1950.0, 705.0),
        }
    }

    /// Upright seat
    pub fn seat() -> Self {
        Self {
            leg_circle: Circle::new(805.0, 1277.0, 215.0),
            back_circle: Circle::new(1176.0, 578.0, 535.0),
            foot_point: Point::new(262.0, 1393.0),
            head_point: Point::new(1847.0, 514.0),
        }
    }

    /// Nearly flat daybed
    pub fn bed() -> Self {
        Self {
            leg_circle: Circle::new(805.0, 1365.0, 300.0),
            back_circle: Circle::new(1207.0, 108.0, 1000.0),
            foot_point: Point::new(185.0, 1253.0),
            head_point: Point::new(2110.0, 945.0),
        }
    }

    /// Reject non-finite coordinates and non-positive radii
    pub fn validate(&self) -> Result<()> {
        for (field, circle) in [("leg_circle", &self.leg_circle), ("back_circle", &self.back_circle)] {
            if !circle.center.is_finite() {
                return Err(GeometryError::invalid(field, "center is not finite"));
            }
            if !(circle.radius.is_finite() && circle.radius > 0.0) {
                return Err(GeometryError::invalid(field, format!("radius {} is not positive", circle.radius)));
            }
        }
        for (field, point) in [("foot_point", &self.foot_point), ("head_point", &self.head_point)] {
            if !point.is_finite() {
                return Err(GeometryError::invalid(field, "position is not finite"));
            }
        }
        Ok(())
    }
}

/// Common behavior of the links making up a path
#[enum_dispatch]
pub trait Link {
    fn start(&self) -> Point;
    fn end(&self) -> Point;
    fn length(&self) -> f64;
}

impl Link for Segment {
    fn start(&self) -> Point {
        self.p1
    }

    fn end(&self) -> Point {
        self.p2
    }

    fn length(&self) -> f64 {
        Segment::length(self)
    }
}

/// Part of a circle swept from `start_angle` to `end_angle`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcLink {
    pub circle: Circle,
    pub start_angle: f64,
    pub end_angle: f64,
    pub orientation: Orientation,
}

impl ArcLink {
    /// Signed sweep, positive when clockwise
    pub fn sweep(&self) -> f64 {
        sweep(self.start_angle, self.end_angle, self.orientation)
    }

    pub fn chord_length(&self) -> f64 {
        geometry::arc_chord_length(self.circle.radius, self.sweep().abs())
    }

    /// Height of the arc above its chord
    pub fn sagitta(&self) -> f64 {
        geometry::arc_sagitta(self.circle.radius, self.sweep().abs())
    }
}

impl Link for ArcLink {
    fn start(&self) -> Point {
        self.circle.point_at(self.start_angle)
    }

    fn end(&self) -> Point {
        self.circle.point_at(self.end_angle)
    }

    fn length(&self) -> f64 {
        geometry::arc_length(self.circle.radius, self.sweep())
    }
}

#[enum_dispatch(Link)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathLink {
    Straight(Segment),
    Arc(ArcLink),
}

/// A placement the silhouette tolerates but that usually means a handle was
/// dragged somewhere odd
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlacementIssue {
    /// The foot point is not left of the leg circle center
    FootPastLegCircle,
    /// The head point is not right of the back circle center
    HeadBeforeBackCircle,
    /// An arc wraps more than half a turn
    ArcOverHalfTurn { sweep: f64 },
}

/// The five links of one silhouette
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Silhouette {
    /// Foot point to leg circle
    pub leg_tangent: Segment,
    /// Around the leg circle, from the middle tangent down to the leg tangent
    pub leg_arc: ArcLink,
    /// Leg circle to back circle
    pub middle_tangent: Segment,
    /// Around the back circle, from the back tangent to the middle tangent
    pub back_arc: ArcLink,
    /// Back circle to head point
    pub back_tangent: Segment,
}

impl Silhouette {
    /// Build the silhouette, failing as a whole when any tangent is degenerate.
    ///
    /// Expects the foot left of the leg circle and the head right of the back
    /// circle; other placements still produce a path, see
    /// [`Silhouette::placement_issues`].
    pub fn construct(primitives: &ControlPrimitives) -> Result<Self> {
        primitives.validate()?;
        let leg = primitives.leg_circle;
        let back = primitives.back_circle;

        let leg_tangent = tangent(&Circle::at_point(primitives.foot_point), &leg, true)
            .inspect_err(|e| warn!("leg tangent: {}", e))?;
        let middle_tangent = tangent(&leg, &back, false).inspect_err(|e| warn!("middle tangent: {}", e))?;
        let back_tangent = tangent(&back, &Circle::at_point(primitives.head_point), true)
            .inspect_err(|e| warn!("back tangent: {}", e))?;

        let leg_arc = ArcLink {
            circle: leg,
            start_angle: angle(leg.center, middle_tangent.p1),
            end_angle: angle(leg.center, leg_tangent.p2),
            orientation: Orientation::CounterClockwise,
        };
        let back_arc = ArcLink {
            circle: back,
            start_angle: angle(back.center, back_tangent.p1),
            end_angle: angle(back.center, middle_tangent.p2),
            orientation: Orientation::Clockwise,
        };

        let silhouette = Silhouette {
            leg_tangent,
            leg_arc,
            middle_tangent,
            back_arc,
            back_tangent,
        };
        debug!(
            "silhouette: tangents {:.1}/{:.1}/{:.1}, arcs {:.3}/{:.3} rad",
            leg_tangent.length(),
            middle_tangent.length(),
            back_tangent.length(),
            leg_arc.sweep(),
            back_arc.sweep()
        );
        for issue in silhouette.placement_issues(primitives) {
            warn!("unusual silhouette placement: {:?}", issue);
        }
        Ok(silhouette)
    }

    /// Links from foot to head
    pub fn links(&self) -> [PathLink; 5] {
        [
            self.leg_tangent.into(),
            self.leg_arc.into(),
            self.middle_tangent.into(),
            self.back_arc.into(),
            self.back_tangent.into(),
        ]
    }

    /// Links in lath order, head to foot
    pub fn traversal(&self) -> [PathLink; 5] {
        let mut links = self.links();
        links.reverse();
        links
    }

    pub fn total_length(&self) -> f64 {
        self.links().iter().map(Link::length).sum()
    }

    pub fn placement_issues(&self, primitives: &ControlPrimitives) -> Vec<PlacementIssue> {
        let mut issues = Vec::new();
        if primitives.foot_point.x >= primitives.leg_circle.center.x {
            issues.push(PlacementIssue::FootPastLegCircle);
        }
        if primitives.head_point.x <= primitives.back_circle.center.x {
            issues.push(PlacementIssue::HeadBeforeBackCircle);
        }
        for arc in [&self.leg_arc, &self.back_arc] {
            let sweep = arc.sweep();
            if sweep.abs() > HALF_TURN {
                issues.push(PlacementIssue::ArcOverHalfTurn { sweep });
            }
        }
        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geometry::distance;

    const EPS: f64 = 1e-6;

    fn close(a: Point, b: Point) -> bool {
        distance(a, b) < EPS
    }

    #[test]
    fn presets_construct() {
        for primitives in [ControlPrimitives::armchair(), ControlPrimitives::seat(), ControlPrimitives::bed()] {
            let s = Silhouette::construct(&primitives).unwrap();
            assert!(s.placement_issues(&primitives).is_empty(), "{primitives:?}");
            assert!(s.total_length() > 0.0);
        }
    }

    #[test]
    fn links_are_continuous() {
        let s = Silhouette::construct(&ControlPrimitives::armchair()).unwrap();
        // leg tangent ends where the leg arc ends
        assert!(close(s.leg_tangent.p2, s.leg_arc.end()));
        assert!(close(s.leg_arc.start(), s.middle_tangent.p1));
        assert!(close(s.middle_tangent.p2, s.back_arc.end()));
        assert!(close(s.back_arc.start(), s.back_tangent.p1));
        assert!(close(s.leg_tangent.p1, ControlPrimitives::armchair().foot_point));
        assert!(close(s.back_tangent.p2, ControlPrimitives::armchair().head_point));
    }

    #[test]
    fn arcs_sweep_in_their_orientation() {
        let s = Silhouette::construct(&ControlPrimitives::armchair()).unwrap();
        assert!(s.leg_arc.sweep() < 0.0);
        assert!(s.back_arc.sweep() > 0.0);
        assert!((s.leg_arc.sweep() + 0.8393).abs() < 1e-3, "{}", s.leg_arc.sweep());
        assert!((s.back_arc.sweep() - 1.0025).abs() < 1e-3, "{}", s.back_arc.sweep());
    }

    #[test]
    fn traversal_starts_at_the_head() {
        let s = Silhouette::construct(&ControlPrimitives::armchair()).unwrap();
        let order = s.traversal();
        assert_eq!(order[0], PathLink::Straight(s.back_tangent));
        assert_eq!(order[4], PathLink::Straight(s.leg_tangent));
    }

    #[test]
    fn overlapping_circles_abort_construction() {
        let mut primitives = ControlPrimitives::armchair();
        primitives.back_circle = Circle::new(900.0, 1200.0, 320.0);
        assert!(matches!(
            Silhouette::construct(&primitives),
            Err(GeometryError::DegenerateTangent { .. })
        ));
    }

    #[test]
    fn point_inside_circle_aborts_construction() {
        let mut primitives = ControlPrimitives::armchair();
        primitives.foot_point = Point::new(805.0, 1300.0);
        assert!(Silhouette::construct(&primitives).is_err());
    }

    #[test]
    fn non_positive_radius_is_a_configuration_error() {
        let mut primitives = ControlPrimitives::armchair();
        primitives.leg_circle.radius = 0.0;
        assert!(matches!(
            Silhouette::construct(&primitives),
            Err(GeometryError::InvalidConfiguration { field: "leg_circle", .. })
        ));
    }

    #[test]
    fn odd_placement_is_reported() {
        let mut primitives = ControlPrimitives::armchair();
        primitives.head_point = Point::new(1100.0, 300.0);
        let s = Silhouette::construct(&primitives).unwrap();
        assert!(s.placement_issues(&primitives).contains(&PlacementIssue::HeadBeforeBackCircle));
    }
}
