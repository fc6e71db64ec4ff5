//! # Hollow Polygon Section
//!
//! An outer polygon with one polygonal hole. The hole is always re-centred on
//! the outer centroid, so the composite centroid is the outer centroid and
//! the composite moments are a plain subtraction.
//!
//! # Formulas
//! - A = A_outer − A_inner
//! - I_xx = I_xx,outer − I_xx,inner (likewise I_yy, I_xy)
//!
//! ## Example
//!
//! ```rust
//! use section_core::section::{HollowPolygon, Polygon, SectionProperties};
//!
//! let outer = Polygon::new(&[(0.0, 0.0), (100.0, 0.0), (100.0, 200.0), (0.0, 200.0)]).unwrap();
//! // placement does not matter, the hole is moved to the outer centroid
//! let inner = Polygon::new(&[(0.0, 0.0), (80.0, 0.0), (80.0, 180.0), (0.0, 180.0)]).unwrap();
//! let tube = HollowPolygon::new(outer, inner).unwrap();
//! assert!((tube.area() - 5_600.0).abs() < 1e-9);
//! ```

use serde::Serialize;

use super::{Extent, Polygon, SecondMoments, SectionProperties};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::Point;

/// Outer polygon minus a centred inner polygon.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HollowPolygon {
    outer: Polygon,
    inner: Polygon,
}

impl HollowPolygon {
    /// # Errors
    /// `Geometry` when the inner polygon is not smaller than the outer one,
    /// or does not fit inside it once centred.
    pub fn new(outer: Polygon, inner: Polygon) -> SectionResult<Self> {
        if inner.area() >= outer.area() {
            return Err(SectionError::geometry(
                "HollowPolygon::new",
                format!(
                    "inner area {} must be smaller than outer area {}",
                    inner.area(),
                    outer.area()
                ),
            ));
        }

        let centre = outer.centroid();
        let inner = inner.shift(centre.x, centre.y);

        if let Some(p) = inner.points().iter().find(|p| !outer.contains_point(**p)) {
            return Err(SectionError::geometry(
                "HollowPolygon::new",
                format!("inner vertex {p} lies outside the outer polygon"),
            ));
        }
        let crossing = inner
            .edges()
            .any(|hole_edge| outer.edges().any(|edge| hole_edge.crosses(&edge)));
        if crossing {
            return Err(SectionError::geometry(
                "HollowPolygon::new",
                "inner polygon crosses the outer boundary",
            ));
        }

        Ok(HollowPolygon { outer, inner })
    }

    pub fn outer(&self) -> &Polygon {
        &self.outer
    }

    /// The hole, already centred on the outer centroid
    pub fn inner(&self) -> &Polygon {
        &self.inner
    }

    /// A copy translated so that its centroid lands on `(x, y)`.
    pub fn shift(&self, x: f64, y: f64) -> HollowPolygon {
        HollowPolygon {
            outer: self.outer.shift(x, y),
            inner: self.inner.shift(x, y),
        }
    }
}

impl SectionProperties for HollowPolygon {
    fn area(&self) -> f64 {
        self.outer.area() - self.inner.area()
    }

    fn centroid(&self) -> Point {
        self.outer.centroid()
    }

    fn second_moments(&self) -> SecondMoments {
        self.outer.second_moments() - self.inner.second_moments()
    }

    fn extent(&self) -> Extent {
        self.outer.extent()
    }
}
