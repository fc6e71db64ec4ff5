//! # Transverse Shear Stress
//!
//! Shear flow and shear stress over the depth of a section carrying a
//! vertical shear force `V`.
//!
//! # Formula
//! - q(y) = V·Q(y) / I_xx
//! - τ(y) = q(y) / t(y)
//!
//! `I_xx` is the moment of inertia of the whole (uncut) section. `Q` and `t`
//! come from the horizontal cut at `y`, see [`ShearCut`].
//!
//! At the extreme fibres and beyond, the free surface carries no shear:
//! `shear_flow`, `tau` and `first_moment` return `0.0` there.
//!
//! ## Example
//!
//! ```rust
//! use section_core::section::shapes::rectangle;
//! use section_core::shear::TransverseShear;
//!
//! // 100 x 200 rectangle, V = 10 kN
//! let shear = TransverseShear::new(10_000.0, rectangle(100.0, 200.0).unwrap()).unwrap();
//! // τ_max = 1.5 V / A
//! assert!((shear.tau_max().unwrap() - 0.75).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::cut::{CutConfig, ShearCut, ShearCutResult};
use crate::errors::{SectionError, SectionResult};

/// One point of a shear stress profile.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ShearStressSample {
    /// Height above the centroid
    pub y: f64,
    /// Shear flow (force per unit length)
    pub q: f64,
    /// Shear stress
    pub tau: f64,
}

/// A shear force applied to a cuttable section.
#[derive(Debug, Clone)]
pub struct TransverseShear<S> {
    force: f64,
    shape: S,
    config: CutConfig,
}

impl<S: ShearCut> TransverseShear<S> {
    /// # Errors
    /// `InvalidInput` for a non-finite force.
    pub fn new(force: f64, shape: S) -> SectionResult<Self> {
        if !force.is_finite() {
            return Err(SectionError::invalid_input(
                "force",
                force.to_string(),
                "Shear force must be finite",
            ));
        }
        Ok(TransverseShear {
            force,
            shape,
            config: CutConfig::default(),
        })
    }

    /// # Errors
    /// `InvalidInput` when the config fails [`CutConfig::validate`].
    pub fn with_config(mut self, config: CutConfig) -> SectionResult<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    pub fn force(&self) -> f64 {
        self.force
    }

    pub fn shape(&self) -> &S {
        &self.shape
    }

    pub fn config(&self) -> &CutConfig {
        &self.config
    }

    /// Cut the section at `y`; errors outside the section like
    /// [`ShearCut::cut_at_height`].
    pub fn cut(&self, y: f64) -> SectionResult<ShearCutResult> {
        self.shape.cut_at_height(y, &self.config)
    }

    /// `None` at or beyond the extreme fibres.
    fn interior_cut(&self, y: f64) -> SectionResult<Option<ShearCutResult>> {
        if !y.is_finite() {
            return Err(SectionError::invalid_input(
                "y",
                y.to_string(),
                "Height must be finite",
            ));
        }
        let snapped = self.config.precision.snap(y);
        if !self.shape.extent().spans_height(snapped) {
            return Ok(None);
        }
        self.cut(y).map(Some)
    }

    /// First moment `Q` of the area beyond `y`.
    pub fn first_moment(&self, y: f64) -> SectionResult<f64> {
        Ok(self
            .interior_cut(y)?
            .map_or(0.0, |cut| cut.first_moment()))
    }

    /// Shear flow `q = V·Q / I_xx`.
    pub fn shear_flow(&self, y: f64) -> SectionResult<f64> {
        Ok(self.force * self.first_moment(y)? / self.shape.i_xx())
    }

    /// Shear stress `τ = V·Q / (I_xx·t)`.
    pub fn tau(&self, y: f64) -> SectionResult<f64> {
        let Some(cut) = self.interior_cut(y)? else {
            return Ok(0.0);
        };
        let flow = self.force * cut.first_moment() / self.shape.i_xx();
        Ok(flow / cut.width)
    }

    /// Shear stress at the centroid.
    ///
    /// This is the peak for sections whose width does not narrow away from
    /// the centroid (rectangles, I-sections, tubes). It is not a search over
    /// the depth; use [`profile`](Self::profile) for other shapes.
    pub fn tau_max(&self) -> SectionResult<f64> {
        self.tau(0.0)
    }

    /// `samples` evenly spaced points from the bottom fibre to the top fibre.
    ///
    /// # Errors
    /// `InvalidInput` when fewer than 2 samples are requested.
    pub fn profile(&self, samples: usize) -> SectionResult<Vec<ShearStressSample>> {
        if samples < 2 {
            return Err(SectionError::invalid_input(
                "samples",
                samples.to_string(),
                "A profile needs at least 2 samples",
            ));
        }
        let extent = self.shape.extent();
        let step = extent.depth() / (samples - 1) as f64;
        debug!(samples, step, "computing shear stress profile");

        (0..samples)
            .map(|i| {
                let y = if i == samples - 1 {
                    extent.y_max
                } else {
                    extent.y_min + step * i as f64
                };
                let (q, tau) = match self.interior_cut(y)? {
                    Some(cut) => {
                        let q = self.force * cut.first_moment() / self.shape.i_xx();
                        (q, q / cut.width)
                    }
                    None => (0.0, 0.0),
                };
                Ok(ShearStressSample { y, q, tau })
            })
            .collect()
    }
}
