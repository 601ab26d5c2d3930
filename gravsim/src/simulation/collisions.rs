//! Collision detection and merge resolution.
//!
//! Two entities collide when the distance between their centres is no
//! greater than the sum of their radii. A collision is perfectly inelastic:
//! the pair is replaced by a single entity carrying the combined mass and
//! momentum, sitting where the heavier body was, with a mass-weighted color.
//!
//! Resolution runs to a fixed point. After each merge the scan restarts, so
//! a freshly merged (and larger) entity is checked again against everything
//! left in the same tick.

use std::f64::consts::PI;

use log::debug;
use serde::Deserialize;

use crate::simulation::states::{Body, Entity, Rgb};

/// How a merged body is sized from its parents
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Default)]
#[serde(rename_all = "snake_case")]
pub enum RadiusModel {
    /// Volumes add: `r = cbrt(r_a³ + r_b³)`
    #[default]
    Volume,
    /// Constant density sphere: `r = cbrt(3m / 4πρ)`
    Density { density: f64 },
}

impl RadiusModel {
    pub fn merged_radius(&self, a: &Body, b: &Body) -> f64 {
        match *self {
            RadiusModel::Volume => (a.radius().powi(3) + b.radius().powi(3)).cbrt(),
            RadiusModel::Density { density } => {
                let mass = a.mass() + b.mass();
                (3.0 * mass / (4.0 * PI * density)).cbrt()
            }
        }
    }
}

/// One merge that happened during resolution
#[derive(Debug, Clone, PartialEq)]
pub struct MergeEvent {
    pub survivor: String,
    pub absorbed: String,
    pub mass: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    pub merges: Vec<MergeEvent>,
}

impl CollisionReport {
    pub fn merge_count(&self) -> usize {
        self.merges.len()
    }
}

/// Mass-weighted average of a single color channel, rounded and clamped
fn weighted_channel(m_a: f64, c_a: u8, m_b: f64, c_b: u8) -> u8 {
    let v = (m_a * f64::from(c_a) + m_b * f64::from(c_b)) / (m_a + m_b);
    v.round().clamp(0.0, 255.0) as u8
}

/// Blend the colors of two bodies weighted by their masses
pub fn blend_colors(a: &Body, b: &Body) -> Rgb {
    let (ma, mb) = (a.mass(), b.mass());
    let (ca, cb) = (a.color(), b.color());
    Rgb {
        r: weighted_channel(ma, ca.r, mb, cb.r),
        g: weighted_channel(ma, ca.g, mb, cb.g),
        b: weighted_channel(ma, ca.b, mb, cb.b),
    }
}

/// Order a colliding pair as (survivor, absorbed).
/// `a` is the lower-index entity and wins a mass tie.
pub fn dominant<'a>(a: &'a Entity, b: &'a Entity) -> (&'a Entity, &'a Entity) {
    if b.mass() > a.mass() { (b, a) } else { (a, b) }
}

/// Combine `a` and `b` into one entity
pub fn merge(a: &Entity, b: &Entity, radius_model: RadiusModel) -> Entity {
    let (ma, mb) = (a.mass(), b.mass());
    let mass = ma + mb;
    let (survivor, _) = dominant(a, b);

    let velocity = (a.velocity * ma + b.velocity * mb) / mass;
    let color = blend_colors(&a.body, &b.body);
    let radius = radius_model.merged_radius(&a.body, &b.body);

    let body = Body::merged(survivor.body.name().to_owned(), mass, radius, color);

    Entity::new(body, velocity, survivor.position)
}

/// First overlapping pair in `(i, j)` order, `i < j`
pub fn first_overlap(entities: &[Entity]) -> Option<(usize, usize)> {
    let n = entities.len();
    for i in 0..n {
        for j in (i + 1)..n {
            if entities[i].overlaps(&entities[j]) {
                return Some((i, j));
            }
        }
    }
    None
}

/// Merge overlapping entities until none overlap.
///
/// The merged entity takes the slot of the lower index and the other slot
/// is removed, so untouched entities keep their relative order.
pub fn resolve_collisions(entities: &mut Vec<Entity>, radius_model: RadiusModel) -> CollisionReport {
    let mut report = CollisionReport::default();

    while let Some((i, j)) = first_overlap(entities) {
        let merged = merge(&entities[i], &entities[j], radius_model);
        let (survivor, absorbed) = dominant(&entities[i], &entities[j]);
        debug!("merge: `{}` absorbed `{}`, mass now {}", survivor.body.name(), absorbed.body.name(), merged.mass());

        report.merges.push(MergeEvent {
            survivor: survivor.body.name().to_owned(),
            absorbed: absorbed.body.name().to_owned(),
            mass: merged.mass(),
        });

        entities[i] = merged;
        entities.remove(j);
    }

    report
}
