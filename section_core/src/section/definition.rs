//! # Section Definitions
//!
//! JSON-friendly description of any supported cross-section. A definition
//! holds only dimensions; [`SectionDefinition::build`] validates them and
//! produces the [`Section`].
//!
//! ## Example
//!
//! ```rust
//! use section_core::section::{SectionDefinition, SectionProperties};
//!
//! let json = r#"{"type": "HShape", "height": 240, "width": 300,
//!                "web_thickness": 15, "flange_thickness": 20}"#;
//! let def: SectionDefinition = serde_json::from_str(json).unwrap();
//! let section = def.build().unwrap();
//! assert_eq!(section.kind(), "Polygon");
//! assert!((section.area() - 15_000.0).abs() < 1e-9);
//! ```
//!
//! Polygon vertices may be written as `{"x": .., "y": ..}` objects or as
//! `[x, y]` pairs.

use serde::{Deserialize, Serialize};

use super::{shapes, Annulus, Circle, HollowPolygon, Polygon, Section};
use crate::errors::SectionResult;
use crate::geometry::Point;

/// Enum wrapper for every way of describing a section.
///
/// Orientation angles are in degrees, counter-clockwise positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SectionDefinition {
    /// Arbitrary counter-clockwise outline
    Polygon { vertices: Vec<Point> },
    /// Outline with one hole; the hole is centred on the outline's centroid
    HollowPolygon { outer: Vec<Point>, inner: Vec<Point> },
    Rectangle { width: f64, height: f64 },
    HShape {
        height: f64,
        width: f64,
        web_thickness: f64,
        flange_thickness: f64,
    },
    CShape {
        height: f64,
        width: f64,
        web_thickness: f64,
        flange_thickness: f64,
        #[serde(default)]
        orientation_deg: f64,
    },
    ZShape {
        width: f64,
        height: f64,
        web_thickness: f64,
        flange_thickness: f64,
        #[serde(default)]
        orientation_deg: f64,
    },
    TShape {
        width: f64,
        height: f64,
        web_thickness: f64,
        flange_thickness: f64,
    },
    PiShape {
        top_width: f64,
        bottom_width: f64,
        height: f64,
        web_thickness: f64,
        flange_thickness: f64,
    },
    HollowRectangle { width: f64, height: f64, thickness: f64 },
    Circle { radius: f64 },
    Annulus { outer_radius: f64, inner_radius: f64 },
}

impl SectionDefinition {
    /// Get the definition type as a string
    pub fn shape_type(&self) -> &'static str {
        match self {
            SectionDefinition::Polygon { .. } => "Polygon",
            SectionDefinition::HollowPolygon { .. } => "HollowPolygon",
            SectionDefinition::Rectangle { .. } => "Rectangle",
            SectionDefinition::HShape { .. } => "HShape",
            SectionDefinition::CShape { .. } => "CShape",
            SectionDefinition::ZShape { .. } => "ZShape",
            SectionDefinition::TShape { .. } => "TShape",
            SectionDefinition::PiShape { .. } => "PiShape",
            SectionDefinition::HollowRectangle { .. } => "HollowRectangle",
            SectionDefinition::Circle { .. } => "Circle",
            SectionDefinition::Annulus { .. } => "Annulus",
        }
    }

    /// Validate the dimensions and construct the section.
    pub fn build(&self) -> SectionResult<Section> {
        let section = match *self {
            SectionDefinition::Polygon { ref vertices } => Polygon::new(vertices)?.into(),
            SectionDefinition::HollowPolygon {
                ref outer,
                ref inner,
            } => HollowPolygon::new(Polygon::new(outer)?, Polygon::new(inner)?)?.into(),
            SectionDefinition::Rectangle { width, height } => {
                shapes::rectangle(width, height)?.into()
            }
            SectionDefinition::HShape {
                height,
                width,
                web_thickness,
                flange_thickness,
            } => shapes::h_shape(height, width, web_thickness, flange_thickness)?.into(),
            SectionDefinition::CShape {
                height,
                width,
                web_thickness,
                flange_thickness,
                orientation_deg,
            } => shapes::c_shape(
                height,
                width,
                web_thickness,
                flange_thickness,
                orientation_deg.to_radians(),
            )?
            .into(),
            SectionDefinition::ZShape {
                width,
                height,
                web_thickness,
                flange_thickness,
                orientation_deg,
            } => shapes::z_shape(
                width,
                height,
                web_thickness,
                flange_thickness,
                orientation_deg.to_radians(),
            )?
            .into(),
            SectionDefinition::TShape {
                width,
                height,
                web_thickness,
                flange_thickness,
            } => shapes::t_shape(width, height, web_thickness, flange_thickness)?.into(),
            SectionDefinition::PiShape {
                top_width,
                bottom_width,
                height,
                web_thickness,
                flange_thickness,
            } => shapes::pi_shape(top_width, bottom_width, height, web_thickness, flange_thickness)?
                .into(),
            SectionDefinition::HollowRectangle {
                width,
                height,
                thickness,
            } => shapes::hollow_rectangle(width, height, thickness)?.into(),
            SectionDefinition::Circle { radius } => Circle::new(radius)?.into(),
            SectionDefinition::Annulus {
                outer_radius,
                inner_radius,
            } => Annulus::new(outer_radius, inner_radius)?.into(),
        };
        Ok(section)
    }
}
