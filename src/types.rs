//! Plane primitives shared by every module (millimetres, canvas orientation).
//!
//! Raw `f64` coordinates are fine inside geometry code; values entering from
//! the host go through the validating constructors here.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use glam::{DVec2, dvec2};

/// Error type for invalid numeric values
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum NumericError {
    /// Value is NaN
    #[error("value is NaN")]
    NaN,
    /// Value is infinite
    #[error("value is infinite")]
    Infinite,
    /// Value is zero when non-zero required
    #[error("value is zero")]
    Zero,
    /// Value is negative when positive required
    #[error("value is negative")]
    Negative,
}

/// Length in millimetres
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd, Default)]
#[repr(transparent)]
pub struct Length(pub f64);

impl Length {
    pub const ZERO: Length = Length(0.0);

    /// Create a Length with validation (rejects NaN/infinite)
    #[inline]
    pub fn try_new(val: f64) -> Result<Length, NumericError> {
        if val.is_nan() {
            Err(NumericError::NaN)
        } else if val.is_infinite() {
            Err(NumericError::Infinite)
        } else {
            Ok(Length(val))
        }
    }

    /// Create a non-negative Length with validation
    #[inline]
    pub fn try_non_negative(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_new(val)?;
        if len.0 < 0.0 {
            Err(NumericError::Negative)
        } else {
            Ok(len)
        }
    }

    /// Create a strictly positive Length with validation
    #[inline]
    pub fn try_positive(val: f64) -> Result<Length, NumericError> {
        let len = Self::try_non_negative(val)?;
        if len.0 == 0.0 {
            Err(NumericError::Zero)
        } else {
            Ok(len)
        }
    }

    /// Get the raw value in millimetres
    #[inline]
    pub fn raw(self) -> f64 {
        self.0
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}mm", self.0)
    }
}

/// A position on the drawing plane
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn midpoint(self, other: Point) -> Point {
        Point::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }

    #[inline]
    pub fn to_dvec2(self) -> DVec2 {
        dvec2(self.x, self.y)
    }

    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl From<DVec2> for Point {
    fn from(v: DVec2) -> Self {
        Point::new(v.x, v.y)
    }
}

impl From<Point> for DVec2 {
    fn from(p: Point) -> Self {
        p.to_dvec2()
    }
}

/// A displacement (drag deltas, measure offsets); Point + Vector = Point
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Vector {
    pub dx: f64,
    pub dy: f64,
}

impl Vector {
    pub const fn new(dx: f64, dy: f64) -> Self {
        Vector { dx, dy }
    }

    /// Vector of `length` pointing at `angle`
    pub fn from_polar(length: f64, angle: f64) -> Self {
        Vector::new(length * angle.cos(), length * angle.sin())
    }

    pub fn length(self) -> f64 {
        self.dx.hypot(self.dy)
    }
}

impl Add<Vector> for Point {
    type Output = Point;
    fn add(self, rhs: Vector) -> Point {
        Point::new(self.x + rhs.dx, self.y + rhs.dy)
    }
}

impl Sub<Vector> for Point {
    type Output = Point;
    fn sub(self, rhs: Vector) -> Point {
        Point::new(self.x - rhs.dx, self.y - rhs.dy)
    }
}

/// Subtract two points to get the displacement between them
impl Sub<Point> for Point {
    type Output = Vector;
    fn sub(self, rhs: Point) -> Vector {
        Vector::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vector {
    type Output = Vector;
    fn mul(self, rhs: f64) -> Vector {
        Vector::new(self.dx * rhs, self.dy * rhs)
    }
}

impl Neg for Vector {
    type Output = Vector;
    fn neg(self) -> Vector {
        Vector::new(-self.dx, -self.dy)
    }
}

/// A circle; radius 0 stands for a bare point in tangent computations
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Circle {
    pub center: Point,
    pub radius: f64,
}

impl Circle {
    pub const fn new(x: f64, y: f64, radius: f64) -> Self {
        Circle {
            center: Point::new(x, y),
            radius,
        }
    }

    /// Zero-radius circle at `point`
    pub const fn at_point(point: Point) -> Self {
        Circle {
            center: point,
            radius: 0.0,
        }
    }

    /// Point on the rim at `angle`
    pub fn point_at(&self, angle: f64) -> Point {
        self.center + Vector::from_polar(self.radius, angle)
    }
}

/// An oriented straight link from `p1` to `p2`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub p1: Point,
    pub p2: Point,
}

impl Segment {
    pub const fn new(p1: Point, p2: Point) -> Self {
        Segment { p1, p2 }
    }

    pub fn length(&self) -> f64 {
        (self.p2.to_dvec2() - self.p1.to_dvec2()).length()
    }

    /// Direction angle of `p1 -> p2`
    pub fn angle(&self) -> f64 {
        crate::geometry::angle(self.p1, self.p2)
    }

    pub fn reversed(&self) -> Segment {
        Segment::new(self.p2, self.p1)
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Size { width, height }
    }
}

/// Axis-aligned box: top-left corner plus extent
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl BoundingBox {
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Inclusive containment with a small tolerance for rounding
    pub fn contains(&self, p: Point) -> bool {
        const EPS: f64 = 1e-9;
        p.x >= self.x - EPS
            && p.x <= self.right() + EPS
            && p.y >= self.y - EPS
            && p.y <= self.bottom() + EPS
    }

    pub fn contains_box(&self, other: &BoundingBox) -> bool {
        self.contains(Point::new(other.x, other.y))
            && self.contains(Point::new(other.right(), other.bottom()))
    }
}

/// Accumulates points into the smallest enclosing box
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Bounds {
    min: DVec2,
    max: DVec2,
}

impl Default for Bounds {
    fn default() -> Self {
        Self::new()
    }
}

impl Bounds {
    /// Create empty bounds (will expand on first point)
    pub fn new() -> Self {
        Bounds {
            min: DVec2::splat(f64::MAX),
            max: DVec2::splat(f64::MIN),
        }
    }

    /// Check if the bounds are empty (never expanded)
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Expand to include a point
    pub fn expand_point(&mut self, p: Point) {
        let v = p.to_dvec2();
        self.min = self.min.min(v);
        self.max = self.max.max(v);
    }

    /// Expand to include a rectangle defined by center and size
    pub fn expand_rect(&mut self, center: Point, size: Size) {
        let half = Vector::new(size.width / 2.0, size.height / 2.0);
        self.expand_point(center - half);
        self.expand_point(center + half);
    }

    /// Empty bounds collapse to a zero box at the origin
    pub fn to_box(&self) -> BoundingBox {
        if self.is_empty() {
            return BoundingBox::default();
        }
        BoundingBox {
            x: self.min.x,
            y: self.min.y,
            width: self.max.x - self.min.x,
            height: self.max.y - self.min.y,
        }
    }
}
