//! Numerical and physical parameters for the simulation
//!
//! `Parameters` holds the physics settings fixed at scenario build time:
//! - gravitational constant `g` and the minimum-distance clamp,
//! - base tick duration (simulated seconds per tick at 1x),
//! - integrator choice and the merged-radius model.
//!
//! `SimSettings` holds what may change while running: time acceleration
//! and the pass-through values a renderer reads (scale, overlay, labels).

use crate::simulation::collisions::RadiusModel;
use crate::simulation::error::SimError;
use crate::simulation::integrator::IntegratorKind;

#[derive(Debug, Clone, PartialEq)]
pub struct Parameters {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // force clamp
    pub base_tick: f64, // step size before time acceleration
    pub integrator: IntegratorKind,
    pub radius_model: RadiusModel,
}

impl Default for Parameters {
    fn default() -> Self {
        Self {
            g: 1.0,
            min_distance: 1.0e-3,
            base_tick: 0.01,
            integrator: IntegratorKind::SemiImplicitEuler,
            radius_model: RadiusModel::Volume,
        }
    }
}

/// Require a finite, strictly positive value
pub(crate) fn positive(name: &'static str, value: f64) -> Result<f64, SimError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(SimError::InvalidParameter { name, value })
    }
}

impl Parameters {
    pub fn validate(&self) -> Result<(), SimError> {
        positive("g", self.g)?;
        positive("min_distance", self.min_distance)?;
        positive("base_tick", self.base_tick)?;
        if let RadiusModel::Density { density } = self.radius_model {
            positive("density", density)?;
        }
        Ok(())
    }
}

/// Runtime settings read by the loop each tick
#[derive(Debug, Clone, PartialEq)]
pub struct SimSettings {
    pub time_acceleration: f64, // dt multiplier
    pub scale_factor: f64, // view scale, passed through to the renderer
    pub overlay_zoom_factor: f64, // magnifier scale reduction
    pub drawing_overlay: bool,
    pub drawing_name_labels: bool,
}

impl Default for SimSettings {
    fn default() -> Self {
        Self {
            time_acceleration: 1.0,
            scale_factor: 1.0,
            overlay_zoom_factor: 1.0,
            drawing_overlay: false,
            drawing_name_labels: true,
        }
    }
}

impl SimSettings {
    pub fn validate(&self) -> Result<(), SimError> {
        positive("time_acceleration", self.time_acceleration)?;
        positive("scale_factor", self.scale_factor)?;
        positive("overlay_zoom_factor", self.overlay_zoom_factor)?;
        Ok(())
    }
}
