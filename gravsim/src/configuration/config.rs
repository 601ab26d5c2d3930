//! Configuration types for loading simulation scenarios from YAML.
//!
//! This module defines a thin, `serde`-deserializable representation of a
//! simulation scenario. A scenario consists of:
//!
//! - [`ParametersConfig`] – physical constants, tick size, integrator, radius model
//! - [`BodyConfig`]       – initial state for each body
//! - [`ScenarioConfig`]   – top-level wrapper with the view settings
//!
//! # YAML format
//!
//! ```yaml
//! name: "Binary collision"
//! time_acceleration: 2.0
//! overlay_zoom_factor: 4.0
//! initial_scale_factor: 0.05
//!
//! parameters:
//!   g: 1.0                  # gravitational constant
//!   min_distance: 1.0e-3    # force clamp for near-coincident bodies
//!   base_tick: 0.01         # simulated time per tick at 1x
//!   integrator: "euler"     # or "verlet"
//!   radius_model: volume    # or `!density { density: 2.0 }`
//!
//! bodies:
//!   - name: "Sun"
//!     m: 10.0
//!     radius: 1.0
//!     color: [255, 220, 0]
//!     x: [0.0, 0.0]
//!     v: [0.0, 0.0]
//! ```
//!
//! `radius_model` is an enum: `volume` is a plain string, the density model
//! takes a YAML tag, `radius_model: !density { density: 2.0 }`.
//!
//! Every field except `bodies[*].x`, `v`, `m` and `radius` has a default.
//! Validation happens when the runtime `Scenario` is built.

use serde::Deserialize;

use crate::simulation::collisions::RadiusModel;
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::states::Rgb;

fn one() -> f64 {
    1.0
}

fn white() -> Rgb {
    Rgb::WHITE
}

/// Global numerical and physical parameters for a scenario
#[derive(Deserialize, Debug, Clone)]
pub struct ParametersConfig {
    #[serde(default = "one")]
    pub g: f64,                       // gravitational constant
    #[serde(default = "ParametersConfig::default_min_distance")]
    pub min_distance: f64,            // r is never taken below this in the force law
    #[serde(default = "ParametersConfig::default_base_tick")]
    pub base_tick: f64,               // time step before time acceleration
    #[serde(default)]
    pub integrator: IntegratorKind,   // "euler" or "verlet"
    #[serde(default)]
    pub radius_model: RadiusModel,    // how merged bodies are sized
}

impl ParametersConfig {
    fn default_min_distance() -> f64 {
        1.0e-3
    }

    fn default_base_tick() -> f64 {
        0.01
    }
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            g: one(),
            min_distance: Self::default_min_distance(),
            base_tick: Self::default_base_tick(),
            integrator: IntegratorKind::default(),
            radius_model: RadiusModel::default(),
        }
    }
}

/// Configuration for a single body's initial state
#[derive(Deserialize, Debug, Clone)]
pub struct BodyConfig {
    #[serde(default)]
    pub name: String, // label, empty names are replaced by "body-<index>"
    pub x: Vec<f64>, // initial position [x, y]
    pub v: Vec<f64>, // initial velocity [vx, vy]
    pub m: f64,      // mass
    pub radius: f64, // collision radius
    #[serde(default = "white")]
    pub color: Rgb,
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone)]
pub struct ScenarioConfig {
    #[serde(default)]
    pub name: String,
    #[serde(default = "one")]
    pub time_acceleration: f64,
    #[serde(default = "one")]
    pub overlay_zoom_factor: f64,
    #[serde(default = "one")]
    pub initial_scale_factor: f64,
    #[serde(default)]
    pub parameters: ParametersConfig,
    pub bodies: Vec<BodyConfig>,
}

impl ScenarioConfig {
    pub fn from_yaml_str(s: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(s)
    }
}
