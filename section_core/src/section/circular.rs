//! # Circular Sections
//!
//! Solid circles and annuli with closed-form properties. Both are centred on
//! the origin and are symmetric about every centroidal axis, so `I_xy = 0`.
//!
//! # Formulas
//! - Circle: A = πr², I_xx = I_yy = πr⁴/4
//! - Annulus: A = π(R² − r²), I_xx = I_yy = π(R⁴ − r⁴)/4

use serde::Serialize;
use std::f64::consts::PI;

use super::{Extent, SecondMoments, SectionProperties};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::Point;

fn validate_radius(field: &str, radius: f64) -> SectionResult<()> {
    if !radius.is_finite() || radius <= 0.0 {
        return Err(SectionError::invalid_input(
            field,
            radius.to_string(),
            "Radius must be a positive, finite number",
        ));
    }
    Ok(())
}

fn symmetric_extent(radius: f64) -> Extent {
    Extent {
        x_min: -radius,
        x_max: radius,
        y_min: -radius,
        y_max: radius,
    }
}

/// Solid circle of the given radius.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Circle {
    radius: f64,
}

impl Circle {
    pub fn new(radius: f64) -> SectionResult<Self> {
        validate_radius("radius", radius)?;
        Ok(Circle { radius })
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }
}

impl SectionProperties for Circle {
    fn area(&self) -> f64 {
        PI * self.radius.powi(2)
    }

    fn centroid(&self) -> Point {
        Point::ORIGIN
    }

    fn second_moments(&self) -> SecondMoments {
        let i = PI * self.radius.powi(4) / 4.0;
        SecondMoments {
            i_xx: i,
            i_yy: i,
            i_xy: 0.0,
        }
    }

    fn extent(&self) -> Extent {
        symmetric_extent(self.radius)
    }
}

/// Circular ring between two concentric radii.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Annulus {
    outer_radius: f64,
    inner_radius: f64,
}

impl Annulus {
    /// # Errors
    /// - `InvalidInput` for a non-positive or non-finite radius
    /// - `Geometry` when the inner radius is not smaller than the outer one
    pub fn new(outer_radius: f64, inner_radius: f64) -> SectionResult<Self> {
        validate_radius("outer_radius", outer_radius)?;
        validate_radius("inner_radius", inner_radius)?;
        if inner_radius >= outer_radius {
            return Err(SectionError::geometry(
                "Annulus::new",
                format!(
                    "inner radius {inner_radius} must be smaller than outer radius {outer_radius}"
                ),
            ));
        }
        Ok(Annulus {
            outer_radius,
            inner_radius,
        })
    }

    pub fn outer_radius(&self) -> f64 {
        self.outer_radius
    }

    pub fn inner_radius(&self) -> f64 {
        self.inner_radius
    }
}

impl SectionProperties for Annulus {
    fn area(&self) -> f64 {
        PI * (self.outer_radius.powi(2) - self.inner_radius.powi(2))
    }

    fn centroid(&self) -> Point {
        Point::ORIGIN
    }

    fn second_moments(&self) -> SecondMoments {
        let i = PI * (self.outer_radius.powi(4) - self.inner_radius.powi(4)) / 4.0;
        SecondMoments {
            i_xx: i,
            i_yy: i,
            i_xy: 0.0,
        }
    }

    fn extent(&self) -> Extent {
        symmetric_extent(self.outer_radius)
    }
}
