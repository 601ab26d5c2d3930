//! The simulation loop
//!
//! `Simulation` owns the authoritative entity list and advances it one tick
//! at a time: accumulate forces, integrate, resolve collisions, commit.
//! Work is done on a copy that replaces the live list only once the whole
//! tick has succeeded, so a caller never sees a half-applied step.
//! Renderers read a [`Frame`], which borrows the list immutably.

use log::{error, info, trace};

use crate::simulation::collisions::{resolve_collisions, CollisionReport};
use crate::simulation::error::SimError;
use crate::simulation::forces::{net_accelerations, AccelSet};
use crate::simulation::integrator::integrate;
use crate::simulation::params::{positive, Parameters, SimSettings};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Entity, NVec2, Position};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SimState {
    Idle,
    Running,
    Paused,
    Stopped,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TickOutcome {
    /// The loop is not running; nothing changed
    Skipped,
    Advanced(CollisionReport),
}

/// Read-only view handed to a renderer after each tick
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub entities: &'a [Entity],
    pub time: f64,
    pub tick: u64,
    pub scale_factor: f64,
    pub overlay_zoom_factor: f64,
    pub drawing_overlay: bool,
    pub drawing_name_labels: bool,
}

pub struct Simulation {
    name: String,
    parameters: Parameters,
    settings: SimSettings,
    forces: AccelSet,
    entities: Vec<Entity>,
    state: SimState,
    time: f64,
    tick: u64,
}

impl Simulation {
    pub fn new(scenario: Scenario) -> Self {
        Self {
            name: scenario.name,
            parameters: scenario.parameters,
            settings: scenario.settings,
            forces: scenario.forces,
            entities: scenario.entities,
            state: SimState::Idle,
            time: 0.0,
            tick: 0,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> SimState {
        self.state
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn parameters(&self) -> &Parameters {
        &self.parameters
    }

    pub fn settings(&self) -> &SimSettings {
        &self.settings
    }

    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn tick_count(&self) -> u64 {
        self.tick
    }

    fn transition(&mut self, allowed_from: &[SimState], to: SimState) -> Result<(), SimError> {
        if !allowed_from.contains(&self.state) {
            return Err(SimError::InvalidTransition { from: self.state, to });
        }
        info!("simulation `{}`: {:?} -> {:?}", self.name, self.state, to);
        self.state = to;
        Ok(())
    }

    pub fn start(&mut self) -> Result<(), SimError> {
        self.transition(&[SimState::Idle], SimState::Running)
    }

    pub fn pause(&mut self) -> Result<(), SimError> {
        self.transition(&[SimState::Running], SimState::Paused)
    }

    pub fn resume(&mut self) -> Result<(), SimError> {
        self.transition(&[SimState::Paused], SimState::Running)
    }

    pub fn stop(&mut self) -> Result<(), SimError> {
        self.transition(&[SimState::Idle, SimState::Running, SimState::Paused], SimState::Stopped)
    }

    pub fn set_time_acceleration(&mut self, factor: f64) -> Result<(), SimError> {
        self.settings.time_acceleration = positive("time_acceleration", factor)?;
        Ok(())
    }

    pub fn set_scale_factor(&mut self, scale: f64) -> Result<(), SimError> {
        self.settings.scale_factor = positive("scale_factor", scale)?;
        Ok(())
    }

    pub fn set_overlay_zoom_factor(&mut self, zoom: f64) -> Result<(), SimError> {
        self.settings.overlay_zoom_factor = positive("overlay_zoom_factor", zoom)?;
        Ok(())
    }

    pub fn set_drawing_overlay(&mut self, on: bool) {
        self.settings.drawing_overlay = on;
    }

    pub fn set_drawing_name_labels(&mut self, on: bool) {
        self.settings.drawing_name_labels = on;
    }

    /// Simulated time covered by the next tick
    pub fn dt(&self) -> f64 {
        self.parameters.base_tick * self.settings.time_acceleration
    }

    /// Advance one tick if running.
    ///
    /// On `Err` the entity list is left exactly as it was before the call.
    pub fn tick(&mut self) -> Result<TickOutcome, SimError> {
        if self.state != SimState::Running {
            return Ok(TickOutcome::Skipped);
        }

        let dt = self.dt();
        let accels = net_accelerations(&self.forces, self.time, &self.entities);

        let mut next = self.entities.clone();
        integrate(self.parameters.integrator, &mut next, &self.forces, self.time, &accels, dt);
        let report = resolve_collisions(&mut next, self.parameters.radius_model);

        if let Some(bad) = next.iter().find(|e| !e.is_finite()) {
            error!("tick {}: `{}` is not finite, step discarded: {:?}", self.tick, bad.body.name(), bad);
            return Err(SimError::NonFinite {
                name: bad.body.name().to_owned(),
                tick: self.tick,
            });
        }

        self.entities = next;
        self.time += dt;
        self.tick += 1;
        trace!("tick {}: t = {}, {} entities, {} merges", self.tick, self.time, self.entities.len(), report.merge_count());

        Ok(TickOutcome::Advanced(report))
    }

    /// Run up to `ticks` ticks, returning the number of merges
    pub fn run(&mut self, ticks: u64) -> Result<usize, SimError> {
        let mut merges = 0;
        for _ in 0..ticks {
            match self.tick()? {
                TickOutcome::Advanced(report) => merges += report.merge_count(),
                TickOutcome::Skipped => break,
            }
        }
        Ok(merges)
    }

    pub fn frame(&self) -> Frame<'_> {
        Frame {
            entities: &self.entities,
            time: self.time,
            tick: self.tick,
            scale_factor: self.settings.scale_factor,
            overlay_zoom_factor: self.settings.overlay_zoom_factor,
            drawing_overlay: self.settings.drawing_overlay,
            drawing_name_labels: self.settings.drawing_name_labels,
        }
    }

    pub fn total_mass(&self) -> f64 {
        self.entities.iter().map(Entity::mass).sum()
    }

    pub fn total_momentum(&self) -> NVec2 {
        self.entities.iter().fold(NVec2::zeros(), |acc, e| acc + e.momentum())
    }

    pub fn center_of_mass(&self) -> Position {
        let total = self.total_mass();
        if total == 0.0 {
            return Position::origin();
        }
        let weighted = self
            .entities
            .iter()
            .fold(NVec2::zeros(), |acc, e| acc + e.position.coords * e.mass());
        Position::from(weighted / total)
    }

    pub fn kinetic_energy(&self) -> f64 {
        self.entities
            .iter()
            .map(|e| 0.5 * e.mass() * e.velocity.norm_squared())
            .sum()
    }
}
