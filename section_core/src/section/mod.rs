//! # Cross-Sections
//!
//! Section shapes and their geometric properties. Every shape implements
//! [`SectionProperties`]; the closed set of supported shapes is the
//! [`Section`] enum.
//!
//! ## Notation
//!
//! - `A` = area
//! - `I_xx`, `I_yy` = second moments of area about the centroidal x / y axes
//! - `I_xy` = product of inertia about the centroidal axes
//! - `J` = polar moment, `I_xx + I_yy`
//! - `θ` = angle from the x-axis to the major principal axis (CCW positive)
//! - `S` = elastic section modulus, `I / c`
//! - `r` = radius of gyration, `√(I / A)`
//!
//! ## Modules
//!
//! - [`polygon`] - simple polygon (the general case)
//! - [`hollow`] - outer polygon minus inner polygon
//! - [`circular`] - closed-form circle and annulus
//! - [`shapes`] - builders for I, C, Z, T, Π and hollow rectangular shapes
//! - [`definition`] - JSON description of any supported section

pub mod circular;
pub mod definition;
pub mod hollow;
pub mod polygon;
pub mod shapes;

use serde::{Deserialize, Serialize};
use std::ops::Sub;

use crate::geometry::Point;

pub use circular::{Annulus, Circle};
pub use definition::SectionDefinition;
pub use hollow::HollowPolygon;
pub use polygon::Polygon;

/// Second moments of area about the centroidal axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SecondMoments {
    pub i_xx: f64,
    pub i_yy: f64,
    pub i_xy: f64,
}

impl SecondMoments {
    /// Polar moment `J = I_xx + I_yy`
    pub fn polar(&self) -> f64 {
        self.i_xx + self.i_yy
    }

    /// Eigen-decomposition of the 2×2 inertia tensor.
    ///
    /// # Formula
    /// avg = (I_xx + I_yy)/2, d = (I_xx − I_yy)/2, R = √(d² + I_xy²)
    /// I_max = avg + R, I_min = avg − R, θ = ½·atan2(−I_xy, d)
    pub fn principal(&self) -> PrincipalAxes {
        let avg = (self.i_xx + self.i_yy) / 2.0;
        let diff = (self.i_xx - self.i_yy) / 2.0;
        let radius = diff.hypot(self.i_xy);
        PrincipalAxes {
            i_max: avg + radius,
            i_min: avg - radius,
            theta: (-self.i_xy).atan2(diff) / 2.0,
        }
    }
}

impl Sub for SecondMoments {
    type Output = SecondMoments;
    fn sub(self, rhs: SecondMoments) -> SecondMoments {
        SecondMoments {
            i_xx: self.i_xx - rhs.i_xx,
            i_yy: self.i_yy - rhs.i_yy,
            i_xy: self.i_xy - rhs.i_xy,
        }
    }
}

/// Principal moments of inertia and the orientation of the major axis.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PrincipalAxes {
    pub i_max: f64,
    pub i_min: f64,
    /// Radians from the x-axis to the major principal axis, CCW positive
    pub theta: f64,
}

/// Bounding box of a section relative to its centroid.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Extent {
    pub x_min: f64,
    pub x_max: f64,
    pub y_min: f64,
    pub y_max: f64,
}

impl Extent {
    /// Bounding box of `points`; all zero for an empty iterator.
    pub fn of_points(points: impl IntoIterator<Item = Point>) -> Self {
        let mut points = points.into_iter();
        let Some(first) = points.next() else {
            return Extent::default();
        };
        let start = Extent {
            x_min: first.x,
            x_max: first.x,
            y_min: first.y,
            y_max: first.y,
        };
        points.fold(start, |e, p| Extent {
            x_min: e.x_min.min(p.x),
            x_max: e.x_max.max(p.x),
            y_min: e.y_min.min(p.y),
            y_max: e.y_max.max(p.y),
        })
    }

    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    pub fn depth(&self) -> f64 {
        self.y_max - self.y_min
    }

    /// True when `y` lies strictly between the bottom and top fibres.
    pub fn spans_height(&self, y: f64) -> bool {
        y > self.y_min && y < self.y_max
    }
}

/// Elastic section moduli for the four extreme fibres.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SectionModuli {
    /// I_xx / y_max
    pub s_top: f64,
    /// I_xx / |y_min|
    pub s_bottom: f64,
    /// I_yy / |x_min|
    pub s_left: f64,
    /// I_yy / x_max
    pub s_right: f64,
}

/// Radii of gyration about the centroidal axes.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct RadiiOfGyration {
    pub r_x: f64,
    pub r_y: f64,
}

/// Serializable snapshot of every property of a section.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SectionSummary {
    pub area: f64,
    pub centroid: Point,
    pub i_xx: f64,
    pub i_yy: f64,
    pub i_xy: f64,
    pub polar_moment: f64,
    pub principal: PrincipalAxes,
    pub extent: Extent,
    pub section_moduli: SectionModuli,
    pub radii_of_gyration: RadiiOfGyration,
}

/// Common capability interface of every cross-section shape.
pub trait SectionProperties {
    fn area(&self) -> f64;

    /// Centroid in the coordinate frame the shape was defined in
    fn centroid(&self) -> Point;

    fn second_moments(&self) -> SecondMoments;

    /// Bounding box relative to the centroid
    fn extent(&self) -> Extent;

    fn i_xx(&self) -> f64 {
        self.second_moments().i_xx
    }

    fn i_yy(&self) -> f64 {
        self.second_moments().i_yy
    }

    fn i_xy(&self) -> f64 {
        self.second_moments().i_xy
    }

    fn polar_moment(&self) -> f64 {
        self.second_moments().polar()
    }

    fn principal_axes(&self) -> PrincipalAxes {
        self.second_moments().principal()
    }

    fn section_moduli(&self) -> SectionModuli {
        let m = self.second_moments();
        let e = self.extent();
        SectionModuli {
            s_top: m.i_xx / e.y_max,
            s_bottom: m.i_xx / -e.y_min,
            s_left: m.i_yy / -e.x_min,
            s_right: m.i_yy / e.x_max,
        }
    }

    fn radii_of_gyration(&self) -> RadiiOfGyration {
        let m = self.second_moments();
        let a = self.area();
        RadiiOfGyration {
            r_x: (m.i_xx / a).sqrt(),
            r_y: (m.i_yy / a).sqrt(),
        }
    }

    fn summary(&self) -> SectionSummary {
        let m = self.second_moments();
        SectionSummary {
            area: self.area(),
            centroid: self.centroid(),
            i_xx: m.i_xx,
            i_yy: m.i_yy,
            i_xy: m.i_xy,
            polar_moment: m.polar(),
            principal: self.principal_axes(),
            extent: self.extent(),
            section_moduli: self.section_moduli(),
            radii_of_gyration: self.radii_of_gyration(),
        }
    }
}

/// Closed set of supported cross-section shapes.
///
/// Only the polygonal variants support the shear cut; see
/// [`ShearCut`](crate::shear::ShearCut).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type")]
pub enum Section {
    Polygon(Polygon),
    Hollow(HollowPolygon),
    Circle(Circle),
    Annulus(Annulus),
}

impl Section {
    /// Get the shape kind as a string
    pub fn kind(&self) -> &'static str {
        match self {
            Section::Polygon(_) => "Polygon",
            Section::Hollow(_) => "HollowPolygon",
            Section::Circle(_) => "Circle",
            Section::Annulus(_) => "Annulus",
        }
    }

    fn properties(&self) -> &dyn SectionProperties {
        match self {
            Section::Polygon(p) => p,
            Section::Hollow(h) => h,
            Section::Circle(c) => c,
            Section::Annulus(a) => a,
        }
    }
}

impl SectionProperties for Section {
    fn area(&self) -> f64 {
        self.properties().area()
    }

    fn centroid(&self) -> Point {
        self.properties().centroid()
    }

    fn second_moments(&self) -> SecondMoments {
        self.properties().second_moments()
    }

    fn extent(&self) -> Extent {
        self.properties().extent()
    }

    fn principal_axes(&self) -> PrincipalAxes {
        self.properties().principal_axes()
    }
}

impl From<Polygon> for Section {
    fn from(p: Polygon) -> Self {
        Section::Polygon(p)
    }
}

impl From<HollowPolygon> for Section {
    fn from(h: HollowPolygon) -> Self {
        Section::Hollow(h)
    }
}

impl From<Circle> for Section {
    fn from(c: Circle) -> Self {
        Section::Circle(c)
    }
}

impl From<Annulus> for Section {
    fn from(a: Annulus) -> Self {
        Section::Annulus(a)
    }
}
