//! # Polygon Section
//!
//! A simple polygon given by its vertices in counter-clockwise order. All
//! properties are computed once, on construction, with the closed-form
//! polygon integrals (Green's theorem over the edges).
//!
//! ```text
//!   (x3,y3) ┌────────┐ (x2,y2)
//!           │   ⊕    │        ⊕ = centroid
//!   (x0,y0) └────────┘ (x1,y1)
//! ```
//!
//! # Formulas
//! With `k_i = x_i·y_{i+1} − x_{i+1}·y_i`:
//! - A = ½ Σ k_i
//! - x_c = Σ k_i (x_i + x_{i+1}) / 6A, y_c = Σ k_i (y_i + y_{i+1}) / 6A
//! - I_xx = Σ k_i (y_i² + y_i y_{i+1} + y_{i+1}²) / 12 − A·y_c²
//! - I_yy = Σ k_i (x_i² + x_i x_{i+1} + x_{i+1}²) / 12 − A·x_c²
//! - I_xy = Σ k_i (x_i y_{i+1} + 2x_i y_i + 2x_{i+1} y_{i+1} + x_{i+1} y_i) / 24 − A·x_c·y_c
//!
//! ## Example
//!
//! ```rust
//! use section_core::section::{Polygon, SectionProperties};
//!
//! // 100 x 200 rectangle
//! let rect = Polygon::new(&[(0.0, 0.0), (100.0, 0.0), (100.0, 200.0), (0.0, 200.0)]).unwrap();
//! assert!((rect.area() - 20_000.0).abs() < 1e-9);
//! assert!((rect.i_xx() - 100.0 * 200f64.powi(3) / 12.0).abs() < 1e-3);
//! ```

use serde::Serialize;

use super::{Extent, PrincipalAxes, SecondMoments, SectionProperties};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::{LineSegment, Orientation, Point, Precision, TOLERANCE};

/// Simple, counter-clockwise polygon with cached section properties.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Polygon {
    /// Vertices in the input frame, open ring (first point not repeated)
    points: Vec<Point>,
    #[serde(skip)]
    precision: Precision,
    area: f64,
    centroid: Point,
    moments: SecondMoments,
    principal: PrincipalAxes,
}

impl Polygon {
    /// Build a polygon from counter-clockwise vertices, rounded to 12
    /// decimals.
    pub fn new<P: Into<Point> + Copy>(vertices: &[P]) -> SectionResult<Self> {
        Self::with_precision(vertices, Precision::default())
    }

    /// Build a polygon with an explicit coordinate rounding precision.
    ///
    /// # Errors
    /// - `InvalidInput` for non-finite coordinates, fewer than 3 distinct
    ///   vertices, a vertex repeated further along the ring, or vertices
    ///   that all lie on one line
    /// - `Geometry` for a zero-area or clockwise outline
    pub fn with_precision<P: Into<Point> + Copy>(
        vertices: &[P],
        precision: Precision,
    ) -> SectionResult<Self> {
        let points = snap_ring(vertices, precision)?;
        if let Some(p) = first_repeat(&points) {
            return Err(SectionError::invalid_input(
                "vertices",
                p.to_string(),
                "Vertex appears more than once in the outline",
            ));
        }
        Self::from_ring(points, precision)
    }

    /// Outline assembled by the shear cut. It may revisit a vertex where a
    /// there-and-back bridge joins two rings, so repeats are allowed.
    pub(crate) fn fragment(vertices: &[Point], precision: Precision) -> SectionResult<Self> {
        Self::from_ring(snap_ring(vertices, precision)?, precision)
    }

    fn from_ring(points: Vec<Point>, precision: Precision) -> SectionResult<Self> {
        if points.len() < 3 {
            return Err(SectionError::invalid_input(
                "vertices",
                points.len().to_string(),
                "At least 3 distinct vertices are required",
            ));
        }
        if all_collinear(&points) {
            return Err(SectionError::invalid_input(
                "vertices",
                points.len().to_string(),
                "All vertices lie on one line",
            ));
        }

        let (area, centroid, moments) = integrate(&points)?;
        Ok(Polygon {
            points,
            precision,
            area,
            centroid,
            moments,
            principal: moments.principal(),
        })
    }

    /// Vertices relative to the centroid.
    pub fn vertices(&self) -> Vec<Point> {
        self.points
            .iter()
            .map(|p| self.precision.snap_point(*p - self.centroid))
            .collect()
    }

    /// Vertices as given (after rounding and duplicate removal).
    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// Edges of the closed ring, in vertex order.
    pub fn edges(&self) -> impl Iterator<Item = LineSegment> + '_ {
        let n = self.points.len();
        (0..n).map(move |i| LineSegment::new(self.points[i], self.points[(i + 1) % n]))
    }

    /// A copy translated so that its centroid lands on `(x, y)`.
    pub fn shift(&self, x: f64, y: f64) -> Polygon {
        self.translated(x - self.centroid.x, y - self.centroid.y)
    }

    /// A copy translated by `(dx, dy)`. Centroidal properties are unchanged.
    pub fn translated(&self, dx: f64, dy: f64) -> Polygon {
        let offset = Point::new(dx, dy);
        Polygon {
            points: self
                .points
                .iter()
                .map(|p| self.precision.snap_point(*p + offset))
                .collect(),
            centroid: self.centroid + offset,
            ..self.clone()
        }
    }

    /// True when `p` is inside the polygon or on its boundary.
    pub fn contains_point(&self, p: Point) -> bool {
        if self.edges().any(|edge| edge.contains(p)) {
            return true;
        }
        let mut inside = false;
        for LineSegment { p1: a, p2: b } in self.edges() {
            if (a.y > p.y) != (b.y > p.y) {
                let x = a.x + (p.y - a.y) * (b.x - a.x) / (b.y - a.y);
                if p.x < x {
                    inside = !inside;
                }
            }
        }
        inside
    }
}

impl SectionProperties for Polygon {
    fn area(&self) -> f64 {
        self.area
    }

    fn centroid(&self) -> Point {
        self.centroid
    }

    fn second_moments(&self) -> SecondMoments {
        self.moments
    }

    fn extent(&self) -> Extent {
        Extent::of_points(self.vertices())
    }

    fn principal_axes(&self) -> PrincipalAxes {
        self.principal
    }
}

/// Rounded vertices with consecutive and closing duplicates collapsed.
fn snap_ring<P: Into<Point> + Copy>(
    vertices: &[P],
    precision: Precision,
) -> SectionResult<Vec<Point>> {
    let mut points: Vec<Point> = Vec::with_capacity(vertices.len());
    for (i, vertex) in vertices.iter().enumerate() {
        let p: Point = (*vertex).into();
        if !p.is_finite() {
            return Err(SectionError::invalid_input(
                format!("vertices[{i}]"),
                p.to_string(),
                "Coordinates must be finite",
            ));
        }
        let p = precision.snap_point(p);
        if points.last() != Some(&p) {
            points.push(p);
        }
    }
    while points.len() > 1 && points.first() == points.last() {
        points.pop();
    }
    Ok(points)
}

fn first_repeat(points: &[Point]) -> Option<Point> {
    points
        .iter()
        .enumerate()
        .find(|&(i, p)| points[i + 1..].contains(p))
        .map(|(_, p)| *p)
}

fn all_collinear(points: &[Point]) -> bool {
    let anchor = points[0];
    let far = points
        .iter()
        .copied()
        .max_by(|a, b| anchor.distance_to(*a).total_cmp(&anchor.distance_to(*b)))
        .unwrap_or(anchor);
    points
        .iter()
        .all(|p| Orientation::of(anchor, far, *p) == Orientation::Collinear)
}

/// Area, centroid and centroidal second moments of a closed ring.
///
/// Sums are taken relative to the first vertex to limit cancellation in the
/// parallel-axis shift.
fn integrate(points: &[Point]) -> SectionResult<(f64, Point, SecondMoments)> {
    let origin = points[0];
    let n = points.len();
    let (mut a2, mut sx, mut sy) = (0.0, 0.0, 0.0);
    let (mut sxx, mut syy, mut sxy) = (0.0, 0.0, 0.0);
    for i in 0..n {
        let Point { x: x0, y: y0 } = points[i] - origin;
        let Point { x: x1, y: y1 } = points[(i + 1) % n] - origin;
        let k = x0 * y1 - x1 * y0;
        a2 += k;
        sx += k * (x0 + x1);
        sy += k * (y0 + y1);
        sxx += k * (y0 * y0 + y0 * y1 + y1 * y1);
        syy += k * (x0 * x0 + x0 * x1 + x1 * x1);
        sxy += k * (x0 * y1 + 2.0 * x0 * y0 + 2.0 * x1 * y1 + x1 * y0);
    }
    let area = a2 / 2.0;

    let bounds = Extent::of_points(points.iter().copied());
    if area.abs() <= TOLERANCE * bounds.width() * bounds.depth() {
        return Err(SectionError::geometry(
            "Polygon::new",
            format!("outline encloses no area (signed area {area:e})"),
        ));
    }
    if area < 0.0 {
        return Err(SectionError::geometry(
            "Polygon::new",
            "vertices must be listed counter-clockwise (signed area is negative)",
        ));
    }

    let x_c = sx / (6.0 * area);
    let y_c = sy / (6.0 * area);
    let moments = SecondMoments {
        i_xx: sxx / 12.0 - area * y_c * y_c,
        i_yy: syy / 12.0 - area * x_c * x_c,
        i_xy: sxy / 24.0 - area * x_c * y_c,
    };
    Ok((area, origin + Point::new(x_c, y_c), moments))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::f64::consts::{PI, TAU};

    fn approx_eq(a: f64, b: f64, tol: f64) -> bool {
        (a - b).abs() <= tol * b.abs().max(1.0)
    }

    fn rotated_rectangle(w: f64, h: f64, angle: f64) -> Polygon {
        let corners = [
            Point::new(-w / 2.0, -h / 2.0),
            Point::new(w / 2.0, -h / 2.0),
            Point::new(w / 2.0, h / 2.0),
            Point::new(-w / 2.0, h / 2.0),
        ];
        let rotated: Vec<Point> = corners.iter().map(|p| p.rotated(angle)).collect();
        Polygon::new(&rotated).unwrap()
    }

    #[test]
    fn test_rectangle_properties() {
        // 2 wide, 6 tall, lower-left corner at (1, 1)
        let rect = Polygon::new(&[(1.0, 1.0), (3.0, 1.0), (3.0, 7.0), (1.0, 7.0)]).unwrap();
        assert!(approx_eq(rect.area(), 12.0, 1e-12));
        assert!(approx_eq(rect.centroid().x, 2.0, 1e-12));
        assert!(approx_eq(rect.centroid().y, 4.0, 1e-12));
        assert!(approx_eq(rect.i_xx(), 2.0 * 6f64.powi(3) / 12.0, 1e-12));
        assert!(approx_eq(rect.i_yy(), 6.0 * 2f64.powi(3) / 12.0, 1e-12));
        assert!(rect.i_xy().abs() < 1e-9);
        assert!(approx_eq(rect.polar_moment(), 40.0, 1e-12));

        let p = rect.principal_axes();
        assert!(approx_eq(p.i_max, 36.0, 1e-12));
        assert!(approx_eq(p.i_min, 4.0, 1e-12));
        assert!(p.theta.abs() < 1e-9);
    }

    #[test]
    fn test_rotated_rectangle_principal_angle() {
        let angle = PI / 6.0;
        let rect = rotated_rectangle(1.0, 3.0, angle);
        let p = rect.principal_axes();
        assert!(approx_eq(p.theta, angle, 1e-9), "theta = {}", p.theta);
        assert!(approx_eq(p.i_max, 27.0 / 12.0, 1e-9));
        assert!(approx_eq(p.i_min, 3.0 / 12.0, 1e-9));
        assert!(rect.i_xy().abs() > 0.1);
    }

    #[test]
    fn test_vertices_are_centroid_relative() {
        let rect = Polygon::new(&[(10.0, 20.0), (14.0, 20.0), (14.0, 22.0), (10.0, 22.0)]).unwrap();
        let v = rect.vertices();
        assert_eq!(v[0], Point::new(-2.0, -1.0));
        assert_eq!(v[2], Point::new(2.0, 1.0));
        let e = rect.extent();
        assert_eq!((e.x_min, e.x_max, e.y_min, e.y_max), (-2.0, 2.0, -1.0, 1.0));
    }

    #[test]
    fn test_closing_and_consecutive_duplicates_are_collapsed() {
        // L-shaped outline listed with a repeated closing vertex
        let poly = Polygon::new(&[
            (0.0, 0.0),
            (0.0, 400.0),
            (100.0, 400.0),
            (100.0, 100.0),
            (600.0, 100.0),
            (600.0, -300.0),
            (600.0, -300.0),
            (500.0, -300.0),
            (500.0, 0.0),
            (0.0, 0.0),
        ]);
        // this outline is clockwise
        assert!(poly.unwrap_err().is_geometry());

        let ccw = Polygon::new(&[
            (0.0, 0.0),
            (500.0, 0.0),
            (500.0, -300.0),
            (600.0, -300.0),
            (600.0, -300.0),
            (600.0, 100.0),
            (100.0, 100.0),
            (100.0, 400.0),
            (0.0, 400.0),
            (0.0, 0.0),
        ])
        .unwrap();
        assert_eq!(ccw.points().len(), 8);
        let expected_area = 100.0 * 400.0 + 500.0 * 100.0 + 100.0 * 300.0;
        assert!(approx_eq(ccw.area(), expected_area, 1e-12));
    }

    #[test]
    fn test_degenerate_input_is_rejected() {
        let too_few = Polygon::new(&[(0.0, 0.0), (1.0, 1.0)]).unwrap_err();
        assert_eq!(too_few.error_code(), "INVALID_INPUT");

        let duplicates =
            Polygon::new(&[(0.0, 0.0), (0.0, 0.0), (1.0, 1.0), (0.0, 0.0)]).unwrap_err();
        assert_eq!(duplicates.error_code(), "INVALID_INPUT");

        let collinear =
            Polygon::new(&[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0), (5.0, 5.0)]).unwrap_err();
        assert_eq!(collinear.error_code(), "INVALID_INPUT");

        let nan = Polygon::new(&[(0.0, 0.0), (f64::NAN, 1.0), (2.0, 0.0)]).unwrap_err();
        assert_eq!(nan.error_code(), "INVALID_INPUT");

        let bow_tie = Polygon::new(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0)]).unwrap_err();
        assert_eq!(bow_tie.error_code(), "GEOMETRY_ERROR");
    }

    #[test]
    fn test_repeated_vertex_is_invalid_input() {
        // (0, 0) comes back after (1, 0), not next to itself
        let err = Polygon::new(&[(0.0, 0.0), (1.0, 0.0), (0.0, 0.0), (0.0, 1.0)]).unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");
        assert!(err.to_string().contains("more than once"));

        // the same outline without the repeat is fine
        assert!(Polygon::new(&[(0.0, 0.0), (1.0, 0.0), (0.0, 1.0)]).is_ok());
    }

    #[test]
    fn test_clockwise_input_is_rejected() {
        let err = Polygon::new(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]).unwrap_err();
        assert!(err.is_geometry());
    }

    #[test]
    fn test_shift_moves_centroid_only() {
        let tri = Polygon::new(&[(0.0, 0.0), (3.0, 0.0), (0.0, 3.0)]).unwrap();
        let moved = tri.shift(10.0, -5.0);
        assert!(approx_eq(moved.centroid().x, 10.0, 1e-12));
        assert!(approx_eq(moved.centroid().y, -5.0, 1e-12));
        assert_eq!(moved.second_moments(), tri.second_moments());
        assert_eq!(moved.area(), tri.area());
        assert_eq!(moved.vertices(), tri.vertices());
        // the source polygon is untouched
        assert!(approx_eq(tri.centroid().x, 1.0, 1e-12));
    }

    #[test]
    fn test_contains_point() {
        let l_shape = Polygon::new(&[
            (0.0, 0.0),
            (4.0, 0.0),
            (4.0, 1.0),
            (1.0, 1.0),
            (1.0, 4.0),
            (0.0, 4.0),
        ])
        .unwrap();
        assert!(l_shape.contains_point(Point::new(0.5, 3.0)));
        assert!(l_shape.contains_point(Point::new(3.0, 0.5)));
        assert!(l_shape.contains_point(Point::new(4.0, 0.5)));
        assert!(!l_shape.contains_point(Point::new(3.0, 3.0)));
        assert!(!l_shape.contains_point(Point::new(-0.1, 0.5)));
    }

    #[test]
    fn test_inertia_matches_numerical_integration() {
        let trapezoid = Polygon::new(&[(0.0, 0.0), (6.0, 0.0), (4.0, 3.0), (1.0, 3.0)]).unwrap();
        let n = 400;
        let (dx, dy) = (6.0 / n as f64, 3.0 / n as f64);
        let mut cells = Vec::new();
        for i in 0..n {
            for j in 0..n {
                let p = Point::new((i as f64 + 0.5) * dx, (j as f64 + 0.5) * dy);
                if trapezoid.contains_point(p) {
                    cells.push(p);
                }
            }
        }
        let da = dx * dy;
        let area = cells.len() as f64 * da;
        let x_bar = cells.iter().map(|p| p.x).sum::<f64>() * da / area;
        let y_bar = cells.iter().map(|p| p.y).sum::<f64>() * da / area;
        let i_xx: f64 = cells.iter().map(|p| (p.y - y_bar).powi(2) * da).sum();
        let i_yy: f64 = cells.iter().map(|p| (p.x - x_bar).powi(2) * da).sum();

        assert!(approx_eq(trapezoid.area(), area, 0.01));
        assert!(approx_eq(trapezoid.i_xx(), i_xx, 0.01), "{} vs {}", trapezoid.i_xx(), i_xx);
        assert!(approx_eq(trapezoid.i_yy(), i_yy, 0.01), "{} vs {}", trapezoid.i_yy(), i_yy);
    }

    fn convex_vertices() -> impl Strategy<Value = Vec<Point>> {
        (
            prop::collection::vec(0.2f64..1.0, 3..12),
            0.0f64..TAU,
            1.0f64..100.0,
            -100.0f64..100.0,
            -100.0f64..100.0,
        )
            .prop_map(|(gaps, start, radius, cx, cy)| {
                let total: f64 = gaps.iter().sum();
                let mut angle = start;
                gaps.iter()
                    .map(|gap| {
                        let p = Point::new(cx + radius * angle.cos(), cy + radius * angle.sin());
                        angle += gap / total * TAU;
                        p
                    })
                    .collect()
            })
    }

    proptest! {
        #[test]
        fn prop_convex_area_matches_triangle_fan(vertices in convex_vertices()) {
            let poly = Polygon::new(&vertices).unwrap();
            let pts = poly.points();
            let fan: f64 = (1..pts.len() - 1)
                .map(|i| crate::geometry::cross(pts[0], pts[i], pts[i + 1]) / 2.0)
                .sum();
            prop_assert!((poly.area() - fan).abs() <= 1e-9 * fan.abs());
        }

        #[test]
        fn prop_cyclic_rotation_is_invariant(vertices in convex_vertices(), shift in 0usize..12) {
            let poly = Polygon::new(&vertices).unwrap();
            let mut rotated = vertices.clone();
            rotated.rotate_left(shift % vertices.len());
            let other = Polygon::new(&rotated).unwrap();

            let scale = poly.polar_moment();
            prop_assert!((poly.area() - other.area()).abs() <= 1e-9 * poly.area());
            let reach = 1.0 + poly.centroid().distance_to(Point::ORIGIN);
            prop_assert!(poly.centroid().distance_to(other.centroid()) <= 1e-9 * reach);
            prop_assert!((poly.i_xx() - other.i_xx()).abs() <= 1e-9 * scale);
            prop_assert!((poly.i_yy() - other.i_yy()).abs() <= 1e-9 * scale);
            prop_assert!((poly.i_xy() - other.i_xy()).abs() <= 1e-9 * scale);
        }
    }
}
