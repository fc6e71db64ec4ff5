//! # Built-up Shape Builders
//!
//! Parametric vertex generation for common structural shapes. Every builder
//! checks that dimensions are positive and finite and that the plate
//! thicknesses fit the overall dimensions, then returns a counter-clockwise
//! [`Polygon`] (or [`HollowPolygon`]).
//!
//! ```text
//!    H-shape          C-shape         T-shape          Π-shape
//!  ┌───────┐        ┌──────┐      ┌─────────┐     ┌────────────┐
//!  └──┐ ┌──┘        │ ┌────┘      └──┐ ┌────┘     └─┐ ┌────┐ ┌─┘
//!     │ │           │ │              │ │             │ │    │ │
//!  ┌──┘ └──┐        │ └────┐         │ │             │ │    │ │
//!  └───────┘        └──────┘         └─┘             └─┘    └─┘
//! ```
//!
//! ## Example
//!
//! ```rust
//! use section_core::section::shapes::h_shape;
//! use section_core::section::SectionProperties;
//!
//! let beam = h_shape(240.0, 300.0, 15.0, 20.0).unwrap();
//! assert!((beam.i_xx() - 155.6e6).abs() < 1.0);
//! ```

use super::{HollowPolygon, Polygon};
use crate::errors::{SectionError, SectionResult};
use crate::geometry::Point;

fn positive(field: &str, value: f64) -> SectionResult<f64> {
    if !value.is_finite() || value <= 0.0 {
        return Err(SectionError::invalid_input(
            field,
            value.to_string(),
            "Dimension must be a positive, finite number",
        ));
    }
    Ok(value)
}

fn fits(ok: bool, field: &str, value: f64, reason: &str) -> SectionResult<()> {
    if ok {
        Ok(())
    } else {
        Err(SectionError::invalid_input(field, value.to_string(), reason))
    }
}

fn rotate_all(points: &mut [Point], orientation: f64) -> SectionResult<()> {
    if !orientation.is_finite() {
        return Err(SectionError::invalid_input(
            "orientation",
            orientation.to_string(),
            "Orientation must be finite",
        ));
    }
    if orientation != 0.0 {
        for p in points.iter_mut() {
            *p = p.rotated(orientation);
        }
    }
    Ok(())
}

/// Solid rectangle with its lower-left corner at the origin.
pub fn rectangle(width: f64, height: f64) -> SectionResult<Polygon> {
    let w = positive("width", width)?;
    let h = positive("height", height)?;
    Polygon::new(&[(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)])
}

/// Wide-flange (H / I) section: two flanges of `flange_thickness` joined by a
/// central web of `web_thickness`.
pub fn h_shape(
    height: f64,
    width: f64,
    web_thickness: f64,
    flange_thickness: f64,
) -> SectionResult<Polygon> {
    let h = positive("height", height)?;
    let w = positive("width", width)?;
    let tw = positive("web_thickness", web_thickness)?;
    let tf = positive("flange_thickness", flange_thickness)?;
    fits(tw < w, "web_thickness", tw, "Web must be narrower than the flanges")?;
    fits(2.0 * tf < h, "flange_thickness", tf, "Flanges must leave room for the web")?;

    let (left, right) = ((w - tw) / 2.0, (w + tw) / 2.0);
    Polygon::new(&[
        (w, 0.0),
        (w, tf),
        (right, tf),
        (right, h - tf),
        (w, h - tf),
        (w, h),
        (0.0, h),
        (0.0, h - tf),
        (left, h - tf),
        (left, tf),
        (0.0, tf),
        (0.0, 0.0),
    ])
}

/// Channel section. With `orientation = 0` the web is vertical on the left
/// and the flanges open to the right; `orientation` (radians) rotates the
/// section counter-clockwise.
pub fn c_shape(
    height: f64,
    width: f64,
    web_thickness: f64,
    flange_thickness: f64,
    orientation: f64,
) -> SectionResult<Polygon> {
    let h = positive("height", height)?;
    let w = positive("width", width)?;
    let tw = positive("web_thickness", web_thickness)?;
    let tf = positive("flange_thickness", flange_thickness)?;
    fits(tw < w, "web_thickness", tw, "Web must be thinner than the flange width")?;
    fits(2.0 * tf < h, "flange_thickness", tf, "Flanges must leave room for the web")?;

    let mut points = [
        Point::new(w, 0.0),
        Point::new(w, tf),
        Point::new(tw, tf),
        Point::new(tw, h - tf),
        Point::new(w, h - tf),
        Point::new(w, h),
        Point::new(0.0, h),
        Point::new(0.0, 0.0),
    ];
    rotate_all(&mut points, orientation)?;
    Polygon::new(&points)
}

/// Z section: a horizontal web of `web_thickness` spanning `width`, with a
/// vertical flange of `flange_thickness` rising `height` at the left edge and
/// one dropping at the right edge.
pub fn z_shape(
    width: f64,
    height: f64,
    web_thickness: f64,
    flange_thickness: f64,
    orientation: f64,
) -> SectionResult<Polygon> {
    let w = positive("width", width)?;
    let h = positive("height", height)?;
    let tw = positive("web_thickness", web_thickness)?;
    let tf = positive("flange_thickness", flange_thickness)?;
    fits(tw < h, "web_thickness", tw, "Web must be thinner than the flange height")?;
    fits(2.0 * tf < w, "flange_thickness", tf, "Flanges must leave room for the web")?;

    let mut points = [
        Point::new(0.0, 0.0),
        Point::new(w - tf, 0.0),
        Point::new(w - tf, -(h - tw)),
        Point::new(w, -(h - tw)),
        Point::new(w, tw),
        Point::new(tf, tw),
        Point::new(tf, h),
        Point::new(0.0, h),
    ];
    rotate_all(&mut points, orientation)?;
    Polygon::new(&points)
}

/// T section standing on its stem: a stem of `web_thickness` under a top
/// flange of `width` x `flange_thickness`.
pub fn t_shape(
    width: f64,
    height: f64,
    web_thickness: f64,
    flange_thickness: f64,
) -> SectionResult<Polygon> {
    let w = positive("width", width)?;
    let h = positive("height", height)?;
    let tw = positive("web_thickness", web_thickness)?;
    let tf = positive("flange_thickness", flange_thickness)?;
    fits(tw < w, "web_thickness", tw, "Stem must be narrower than the flange")?;
    fits(tf < h, "flange_thickness", tf, "Flange must be thinner than the height")?;

    let (left, right) = ((tw - w) / 2.0, (tw + w) / 2.0);
    Polygon::new(&[
        (0.0, 0.0),
        (tw, 0.0),
        (tw, h - tf),
        (right, h - tf),
        (right, h),
        (left, h),
        (left, h - tf),
        (0.0, h - tf),
    ])
}

/// Π section hanging from the origin: a top board of `top_width` x
/// `flange_thickness` carried by two legs of `web_thickness`, whose outer
/// faces are `bottom_width` apart and centred under the board.
pub fn pi_shape(
    top_width: f64,
    bottom_width: f64,
    height: f64,
    web_thickness: f64,
    flange_thickness: f64,
) -> SectionResult<Polygon> {
    let top = positive("top_width", top_width)?;
    let bottom = positive("bottom_width", bottom_width)?;
    let h = positive("height", height)?;
    let tw = positive("web_thickness", web_thickness)?;
    let tf = positive("flange_thickness", flange_thickness)?;
    fits(bottom <= top, "bottom_width", bottom, "Legs must fit under the top board")?;
    fits(2.0 * tw < bottom, "web_thickness", tw, "Legs must not overlap")?;
    fits(tf < h, "flange_thickness", tf, "Top board must be thinner than the height")?;

    let ww = (top - bottom) / 2.0;
    Polygon::new(&[
        (0.0, 0.0),
        (0.0, -tf),
        (ww, -tf),
        (ww, -h),
        (ww + tw, -h),
        (ww + tw, -tf),
        (ww + bottom - tw, -tf),
        (ww + bottom - tw, -h),
        (ww + bottom, -h),
        (ww + bottom, -tf),
        (top, -tf),
        (top, 0.0),
    ])
}

/// Rectangular tube with uniform wall `thickness`.
pub fn hollow_rectangle(width: f64, height: f64, thickness: f64) -> SectionResult<HollowPolygon> {
    let w = positive("width", width)?;
    let h = positive("height", height)?;
    let t = positive("thickness", thickness)?;
    fits(2.0 * t < w.min(h), "thickness", t, "Walls must leave an opening")?;
    HollowPolygon::new(rectangle(w, h)?, rectangle(w - 2.0 * t, h - 2.0 * t)?)
}
