//! Build fully-initialized simulation scenarios from configuration
//!
//! Takes a `ScenarioConfig` (YAML-facing) and produces the runtime bundle
//! `Scenario` containing:
//! - numerical parameters (`Parameters`)
//! - runtime settings (`SimSettings`) seeded from the scenario's view values
//! - the initial entity list
//! - active force set (`AccelSet`)
//!
//! Every body is validated here, so a bad mass or radius fails before the
//! simulation starts.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::{Context, Result};
use log::info;

use crate::configuration::config::{BodyConfig, ScenarioConfig};
use crate::simulation::error::SimError;
use crate::simulation::forces::{AccelSet, NewtonianGravity};
use crate::simulation::params::{Parameters, SimSettings};
use crate::simulation::states::{Body, Entity, NVec2, Position};

/// The runtime bundle a [`Simulation`](crate::simulation::engine::Simulation) is built from
pub struct Scenario {
    pub name: String,
    pub parameters: Parameters,
    pub settings: SimSettings,
    pub entities: Vec<Entity>,
    pub forces: AccelSet,
}

fn pair(name: &str, field: &'static str, v: &[f64]) -> Result<(f64, f64), SimError> {
    match v {
        [a, b] => Ok((*a, *b)),
        _ => Err(SimError::InvalidVector {
            name: name.to_owned(),
            field,
            len: v.len(),
        }),
    }
}

fn build_entity(index: usize, bc: &BodyConfig) -> Result<Entity, SimError> {
    let name = if bc.name.is_empty() {
        format!("body-{index}")
    } else {
        bc.name.clone()
    };
    let (x, y) = pair(&name, "x", &bc.x)?;
    let (vx, vy) = pair(&name, "v", &bc.v)?;
    let body = Body::new(name, bc.m, bc.radius, bc.color)?;

    Ok(Entity::new(body, NVec2::new(vx, vy), Position::new(x, y)))
}

impl Scenario {
    pub fn build_scenario(cfg: ScenarioConfig) -> Result<Self, SimError> {
        // Bodies: map `BodyConfig` -> runtime `Entity`
        let entities = cfg
            .bodies
            .iter()
            .enumerate()
            .map(|(i, bc)| build_entity(i, bc))
            .collect::<Result<Vec<_>, _>>()?;

        // Parameters (runtime) from ParametersConfig
        let p_cfg = cfg.parameters;
        let parameters = Parameters {
            g: p_cfg.g,
            min_distance: p_cfg.min_distance,
            base_tick: p_cfg.base_tick,
            integrator: p_cfg.integrator,
            radius_model: p_cfg.radius_model,
        };
        parameters.validate()?;

        let settings = SimSettings {
            time_acceleration: cfg.time_acceleration,
            scale_factor: cfg.initial_scale_factor,
            overlay_zoom_factor: cfg.overlay_zoom_factor,
            ..SimSettings::default()
        };
        settings.validate()?;

        // Forces: construct an AccelSet and register Newtonian gravity
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_distance: parameters.min_distance,
        });

        info!(
            "built scenario `{}`: {} bodies, dt = {} x {}",
            cfg.name,
            entities.len(),
            parameters.base_tick,
            settings.time_acceleration
        );

        Ok(Self {
            name: cfg.name,
            parameters,
            settings,
            entities,
            forces,
        })
    }

    /// Assemble a scenario directly from entities, with Newtonian gravity
    pub fn from_entities(name: impl Into<String>, entities: Vec<Entity>, parameters: Parameters, settings: SimSettings) -> Result<Self, SimError> {
        parameters.validate()?;
        settings.validate()?;
        let forces = AccelSet::new().with(NewtonianGravity {
            g: parameters.g,
            min_distance: parameters.min_distance,
        });
        Ok(Self {
            name: name.into(),
            parameters,
            settings,
            entities,
            forces,
        })
    }
}

/// Read a YAML scenario file
pub fn load_scenario_config(path: &Path) -> Result<ScenarioConfig> {
    let file = File::open(path).with_context(|| format!("opening scenario {}", path.display()))?;
    let reader = BufReader::new(file);
    let cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("parsing scenario {}", path.display()))?;
    Ok(cfg)
}
