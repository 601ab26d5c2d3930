//! Core state types for the N-body simulation.
//!
//! Defines the value types shared by every stage of a tick:
//! - `NVec2`    displacement / velocity / acceleration (nalgebra vector)
//! - `Position` a point in simulation space (nalgebra point)
//! - `Rgb`      8-bit body color
//! - `Body`     physical descriptor (name, mass, radius, color)
//! - `Entity`   a live participant: body + velocity + position

use nalgebra::{Point2, Vector2};
use serde::Deserialize;

use crate::simulation::error::SimError;

pub type NVec2 = Vector2<f64>;
pub type Position = Point2<f64>;

/// Longest name label handed to a renderer
pub const LABEL_MAX_CHARS: usize = 40;

/// 8-bit RGB color, deserialized from `[r, g, b]`
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(from = "[u8; 3]")]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb { r: 255, g: 255, b: 255 };

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

impl From<[u8; 3]> for Rgb {
    fn from([r, g, b]: [u8; 3]) -> Self {
        Self { r, g, b }
    }
}

/// Physical descriptor of an entity.
///
/// Mass and radius are checked on construction and are strictly positive
/// and finite for the lifetime of the body. A body is never edited in
/// place; merges build a fresh one.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: f64,
    radius: f64,
    color: Rgb,
}

impl Body {
    pub fn new(name: impl Into<String>, mass: f64, radius: f64, color: Rgb) -> Result<Self, SimError> {
        let name = name.into();
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimError::NonPositiveMass { name, mass });
        }
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimError::NonPositiveRadius { name, radius });
        }
        Ok(Self { name, mass, radius, color })
    }

    /// Result of a merge. The sums can overflow, so the loop re-checks
    /// finiteness before committing.
    pub(crate) fn merged(name: String, mass: f64, radius: f64, color: Rgb) -> Self {
        Self { name, mass, radius, color }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mass(&self) -> f64 {
        self.mass
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn color(&self) -> Rgb {
        self.color
    }

    /// Name truncated to at most `max_chars` characters
    pub fn label(&self, max_chars: usize) -> &str {
        match self.name.char_indices().nth(max_chars) {
            Some((idx, _)) => &self.name[..idx],
            None => &self.name,
        }
    }
}

/// A live simulation participant
#[derive(Debug, Clone, PartialEq)]
pub struct Entity {
    pub body: Body,
    pub velocity: NVec2, // velocity
    pub position: Position, // position
}

impl Entity {
    pub fn new(body: Body, velocity: NVec2, position: Position) -> Self {
        Self { body, velocity, position }
    }

    /// Build from raw components, as the scenario loader does
    pub fn from_components(body: Body, vx: f64, vy: f64, x: f64, y: f64) -> Self {
        Self::new(body, NVec2::new(vx, vy), Position::new(x, y))
    }

    pub fn mass(&self) -> f64 {
        self.body.mass()
    }

    pub fn radius(&self) -> f64 {
        self.body.radius()
    }

    pub fn momentum(&self) -> NVec2 {
        self.velocity * self.body.mass()
    }

    pub fn set_position_directly(&mut self, x: f64, y: f64) {
        self.position.x = x;
        self.position.y = y;
    }

    pub fn distance_to(&self, other: &Entity) -> f64 {
        (other.position - self.position).norm()
    }

    /// Touching counts as overlapping
    pub fn overlaps(&self, other: &Entity) -> bool {
        self.distance_to(other) <= self.radius() + other.radius()
    }

    /// Position, velocity, mass and radius are all finite
    pub fn is_finite(&self) -> bool {
        self.body.mass().is_finite()
            && self.body.radius().is_finite()
            && self.position.x.is_finite()
            && self.position.y.is_finite()
            && self.velocity.x.is_finite()
            && self.velocity.y.is_finite()
    }
}
