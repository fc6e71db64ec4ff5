//! # Transverse Shear
//!
//! Shear stress distribution over a cross-section from the classical formula
//!
//! ```text
//! τ(y) = V·Q(y) / (I_xx·t(y))
//! ```
//!
//! where `Q(y)` is the first moment of the area beyond a horizontal cut at
//! height `y` (measured from the centroid) and `t(y)` is the material width
//! the cut crosses.
//!
//! - [`cut`] - the horizontal cut that extracts the fragment and its width
//! - [`transverse`] - `τ`, shear flow and stress profiles for a shear force

pub mod cut;
pub mod transverse;

pub use cut::{CutConfig, CutWidthKind, ShearCut, ShearCutResult};
pub use transverse::{ShearStressSample, TransverseShear};
