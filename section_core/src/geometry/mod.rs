//! # Geometric Primitives
//!
//! Points, lines and line segments used to build polygons and to run the
//! horizontal shear cut.
//!
//! - [`Point`] - coordinate pair in one consistent length unit
//! - [`Precision`] - decimal snapping that makes point equality exact
//! - [`Orientation`] - turn direction of three points
//! - [`Line`] - infinite line (sloped or vertical)
//! - [`LineSegment`] - bounded line piece with containment and overlap tests

pub mod line;
pub mod point;

pub use line::{Line, LineSegment};
pub use point::{cross, Orientation, Point, Precision};

/// Relative tolerance for collinearity and containment tests (a sine of the
/// turn angle, or a fraction of a segment length).
pub const TOLERANCE: f64 = 1e-9;
