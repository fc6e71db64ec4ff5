//! # section_core - Cross-Section Analysis Engine
//!
//! `section_core` computes the geometric properties of plane cross-sections
//! (area, centroid, second moments, principal axes, section moduli) and the
//! transverse shear stress a shear force induces in them. All inputs and
//! outputs are JSON-serializable.
//!
//! ## Design Philosophy
//!
//! - **Immutable**: shapes compute their properties once, on construction
//! - **Unit-agnostic**: any consistent length / force unit
//! - **JSON-First**: definitions, results and errors implement serde
//! - **Rich Errors**: structured error types, not just strings
//!
//! ## Quick Start
//!
//! ```rust
//! use section_core::section::shapes::h_shape;
//! use section_core::section::SectionProperties;
//! use section_core::shear::TransverseShear;
//!
//! // 240 deep, 300 wide, 15 web, 20 flanges (mm); V = 80 kN
//! let beam = h_shape(240.0, 300.0, 15.0, 20.0).unwrap();
//! assert!((beam.i_xx() - 155.6e6).abs() < 1.0);
//!
//! let shear = TransverseShear::new(80_000.0, beam).unwrap();
//! let tau = shear.tau_max().unwrap(); // MPa
//! assert!((tau - 25.19).abs() < 0.01);
//! ```
//!
//! ## Modules
//!
//! - [`geometry`] - points, lines, segments and coordinate snapping
//! - [`section`] - polygon, hollow and circular sections, shape builders
//! - [`shear`] - horizontal shear cut and transverse shear stress
//! - [`errors`] - structured error types

pub mod errors;
pub mod geometry;
pub mod section;
pub mod shear;

// Re-export commonly used types at crate root for convenience
pub use errors::{SectionError, SectionResult};
pub use geometry::{Point, Precision};
pub use section::{HollowPolygon, Polygon, Section, SectionDefinition, SectionProperties};
pub use shear::{CutConfig, ShearCut, ShearCutResult, TransverseShear};
