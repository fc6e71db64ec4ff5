//! Infinite lines and bounded line segments.
//!
//! Coordinates handed to these types during a shear cut are already snapped
//! (see [`Precision`](super::Precision)), so horizontal / vertical
//! classification uses exact comparisons. Collinearity and containment use
//! the angular [`TOLERANCE`].

use serde::{Deserialize, Serialize};

use super::point::{Orientation, Point};
use super::TOLERANCE;
use crate::errors::{SectionError, SectionResult};

/// An infinite straight line.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Line {
    /// `y = slope * x + intercept`
    Sloped { slope: f64, intercept: f64 },
    /// `x = x` (infinite slope)
    Vertical { x: f64 },
}

impl Line {
    /// Line through `p` making angle `theta` (radians) with the x-axis.
    pub fn from_point_angle(p: Point, theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        if cos.abs() <= TOLERANCE {
            return Line::Vertical { x: p.x };
        }
        let slope = sin / cos;
        Line::Sloped {
            slope,
            intercept: p.y - slope * p.x,
        }
    }

    /// Line `u·x + v·y + w = 0`.
    pub fn from_coefficients(u: f64, v: f64, w: f64) -> SectionResult<Self> {
        if u == 0.0 && v == 0.0 {
            return Err(SectionError::invalid_input(
                "coefficients",
                format!("({u}, {v}, {w})"),
                "u and v cannot both be zero",
            ));
        }
        if v == 0.0 {
            Ok(Line::Vertical { x: -w / u })
        } else {
            Ok(Line::Sloped {
                slope: -u / v,
                intercept: -w / v,
            })
        }
    }

    /// Line through two distinct points.
    pub fn through(p1: Point, p2: Point) -> SectionResult<Self> {
        if p1 == p2 {
            return Err(SectionError::invalid_input(
                "points",
                p1.to_string(),
                "A line needs two distinct points",
            ));
        }
        if p1.x == p2.x {
            return Ok(Line::Vertical { x: p1.x });
        }
        let slope = (p2.y - p1.y) / (p2.x - p1.x);
        Ok(Line::Sloped {
            slope,
            intercept: p1.y - slope * p1.x,
        })
    }

    pub fn horizontal(y: f64) -> Self {
        Line::Sloped {
            slope: 0.0,
            intercept: y,
        }
    }

    /// Slope `dy/dx`; infinite for a vertical line.
    pub fn slope(&self) -> f64 {
        match *self {
            Line::Sloped { slope, .. } => slope,
            Line::Vertical { .. } => f64::INFINITY,
        }
    }

    pub fn is_vertical(&self) -> bool {
        matches!(self, Line::Vertical { .. })
    }

    pub fn is_horizontal(&self) -> bool {
        matches!(self, Line::Sloped { slope, .. } if *slope == 0.0)
    }

    /// `y` at `x`; NaN for a vertical line.
    pub fn y_at(&self, x: f64) -> f64 {
        match *self {
            Line::Sloped { slope, intercept } => slope * x + intercept,
            Line::Vertical { .. } => f64::NAN,
        }
    }

    /// `x` at `y`; NaN for a horizontal line.
    pub fn x_at(&self, y: f64) -> f64 {
        match *self {
            Line::Sloped { slope, .. } if slope == 0.0 => f64::NAN,
            Line::Sloped { slope, intercept } => (y - intercept) / slope,
            Line::Vertical { x } => x,
        }
    }

    /// Perpendicular distance from `p` to the line.
    pub fn distance_to(&self, p: Point) -> f64 {
        match *self {
            Line::Sloped { slope, intercept } => {
                (slope * p.x - p.y + intercept).abs() / slope.hypot(1.0)
            }
            Line::Vertical { x } => (p.x - x).abs(),
        }
    }

    /// Intersection point, or `None` for parallel (or identical) lines.
    pub fn intersection(&self, other: &Line) -> Option<Point> {
        match (*self, *other) {
            (Line::Vertical { .. }, Line::Vertical { .. }) => None,
            (Line::Vertical { x }, sloped @ Line::Sloped { .. })
            | (sloped @ Line::Sloped { .. }, Line::Vertical { x }) => {
                Some(Point::new(x, sloped.y_at(x)))
            }
            (
                Line::Sloped { slope: m1, intercept: q1 },
                Line::Sloped { slope: m2, intercept: q2 },
            ) => {
                if m1 == m2 {
                    return None;
                }
                let x = (q2 - q1) / (m1 - m2);
                Some(Point::new(x, m1 * x + q1))
            }
        }
    }
}

/// A bounded piece of a line from `p1` to `p2`. Endpoint order is
/// significant: chains of segments are linked by `p2 == next.p1`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
}

impl LineSegment {
    pub fn new(p1: Point, p2: Point) -> Self {
        LineSegment { p1, p2 }
    }

    /// Supporting line, `None` for a zero-length segment.
    pub fn line(&self) -> Option<Line> {
        Line::through(self.p1, self.p2).ok()
    }

    pub fn slope(&self) -> f64 {
        self.line().map_or(f64::NAN, |line| line.slope())
    }

    pub fn is_degenerate(&self) -> bool {
        self.p1 == self.p2
    }

    pub fn is_horizontal(&self) -> bool {
        self.p1.y == self.p2.y
    }

    pub fn is_vertical(&self) -> bool {
        self.p1.x == self.p2.x
    }

    pub fn length(&self) -> f64 {
        self.p1.distance_to(self.p2)
    }

    /// Same segment with the endpoints swapped.
    pub fn reversed(&self) -> Self {
        LineSegment::new(self.p2, self.p1)
    }

    pub fn min_x(&self) -> f64 {
        self.p1.x.min(self.p2.x)
    }

    pub fn max_x(&self) -> f64 {
        self.p1.x.max(self.p2.x)
    }

    pub fn min_y(&self) -> f64 {
        self.p1.y.min(self.p2.y)
    }

    pub fn max_y(&self) -> f64 {
        self.p1.y.max(self.p2.y)
    }

    /// `x` where the segment reaches height `y`; `None` outside the segment's
    /// vertical bound or for a horizontal segment.
    pub fn x_at(&self, y: f64) -> Option<f64> {
        if self.is_horizontal() || y < self.min_y() || y > self.max_y() {
            return None;
        }
        if self.is_vertical() {
            return Some(self.p1.x);
        }
        let Point { x: x1, y: y1 } = self.p1;
        let Point { x: x2, y: y2 } = self.p2;
        Some(x1 + (y - y1) * (x2 - x1) / (y2 - y1))
    }

    /// `y` at abscissa `x`; `None` outside the horizontal bound or for a
    /// vertical segment.
    pub fn y_at(&self, x: f64) -> Option<f64> {
        if self.is_vertical() || x < self.min_x() || x > self.max_x() {
            return None;
        }
        if self.is_horizontal() {
            return Some(self.p1.y);
        }
        let Point { x: x1, y: y1 } = self.p1;
        let Point { x: x2, y: y2 } = self.p2;
        Some(y1 + (x - x1) * (y2 - y1) / (x2 - x1))
    }

    /// True when `p` lies on the segment, endpoints included.
    pub fn contains(&self, p: Point) -> bool {
        if self.is_degenerate() {
            return p == self.p1;
        }
        let slack = TOLERANCE * self.length();
        let in_bounds = p.x >= self.min_x() - slack
            && p.x <= self.max_x() + slack
            && p.y >= self.min_y() - slack
            && p.y <= self.max_y() + slack;
        in_bounds
            && self
                .line()
                .is_some_and(|line| line.distance_to(p) <= slack)
    }

    /// True when both segments lie on one line and share a stretch of
    /// positive length. Segments that only touch end-to-end do not coincide.
    pub fn coincides(&self, other: &LineSegment) -> bool {
        if self.is_degenerate() || other.is_degenerate() {
            return false;
        }
        let collinear = Orientation::of(self.p1, self.p2, other.p1) == Orientation::Collinear
            && Orientation::of(self.p1, self.p2, other.p2) == Orientation::Collinear;
        if !collinear {
            return false;
        }
        let dx = (self.p2.x - self.p1.x).abs();
        let dy = (self.p2.y - self.p1.y).abs();
        let overlap = if dx >= dy {
            self.max_x().min(other.max_x()) - self.min_x().max(other.min_x())
        } else {
            self.max_y().min(other.max_y()) - self.min_y().max(other.min_y())
        };
        overlap > TOLERANCE * self.length().max(other.length())
    }

    /// True when the interiors cross at a single point (no touching, no
    /// collinear overlap).
    pub fn crosses(&self, other: &LineSegment) -> bool {
        let o1 = Orientation::of(self.p1, self.p2, other.p1);
        let o2 = Orientation::of(self.p1, self.p2, other.p2);
        let o3 = Orientation::of(other.p1, other.p2, self.p1);
        let o4 = Orientation::of(other.p1, other.p2, self.p2);
        let any_collinear = [o1, o2, o3, o4].contains(&Orientation::Collinear);
        !any_collinear && o1 != o2 && o3 != o4
    }

    /// Intersection point of two non-parallel segments, if it lies on both.
    pub fn intersection(&self, other: &LineSegment) -> Option<Point> {
        let p = self.line()?.intersection(&other.line()?)?;
        (self.contains(p) && other.contains(p)).then_some(p)
    }
}
