//! Points, coordinate snapping and point-triple orientation.

use serde::{Deserialize, Serialize};
use std::ops::{Add, Sub};

use super::TOLERANCE;

/// A point in the plane, in one consistent length unit.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Point { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }

    /// Euclidean distance to `other`
    pub fn distance_to(&self, other: Point) -> f64 {
        (other.x - self.x).hypot(other.y - self.y)
    }

    /// Rotate counter-clockwise about the origin by `angle` radians.
    pub fn rotated(&self, angle: f64) -> Point {
        let (sin, cos) = angle.sin_cos();
        Point::new(self.x * cos - self.y * sin, self.x * sin + self.y * cos)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::new(x, y)
    }
}

impl Add for Point {
    type Output = Point;
    fn add(self, rhs: Point) -> Point {
        Point::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Point {
    type Output = Point;
    fn sub(self, rhs: Point) -> Point {
        Point::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Decimal rounding applied to coordinates so that equality tests between
/// computed points are exact.
///
/// ```rust
/// use section_core::geometry::Precision;
///
/// let p = Precision::new(9);
/// assert_eq!(p.snap(1.000_000_000_2), 1.0);
/// assert_eq!(p.snap(0.1 + 0.2), 0.3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Precision {
    pub decimals: i32,
}

/// Beyond this magnitude a scaled value no longer carries a fractional part.
const MAX_EXACT_SCALED: f64 = 4_503_599_627_370_496.0; // 2^52

impl Precision {
    pub const fn new(decimals: i32) -> Self {
        Precision { decimals }
    }

    fn scale(self) -> f64 {
        10f64.powi(self.decimals)
    }

    /// Round `value` to `decimals` places, half away from zero.
    pub fn snap(self, value: f64) -> f64 {
        let scale = self.scale();
        let scaled = value * scale;
        if !scaled.is_finite() || scaled.abs() >= MAX_EXACT_SCALED {
            return value;
        }
        scaled.round() / scale
    }

    pub fn snap_point(self, p: Point) -> Point {
        Point::new(self.snap(p.x), self.snap(p.y))
    }

    /// Smallest distinguishable step at this precision
    pub fn tolerance(self) -> f64 {
        10f64.powi(-self.decimals)
    }
}

impl Default for Precision {
    fn default() -> Self {
        Precision::new(12)
    }
}

/// Turn direction of an ordered point triple.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

impl Orientation {
    /// Orientation of `a -> b -> c`. Triples whose turn angle is below
    /// [`TOLERANCE`] (as a sine) count as collinear.
    pub fn of(a: Point, b: Point, c: Point) -> Self {
        let cross = cross(a, b, c);
        let scale = a.distance_to(b) * a.distance_to(c);
        if cross.abs() <= TOLERANCE * scale {
            Orientation::Collinear
        } else if cross > 0.0 {
            Orientation::CounterClockwise
        } else {
            Orientation::Clockwise
        }
    }
}

/// z-component of `(b - a) × (c - a)`
pub fn cross(a: Point, b: Point, c: Point) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}
