//! Force / acceleration contributors for the n-body engine
//!
//! Defines the acceleration trait, the `AccelSet` that sums its terms,
//! and direct Newtonian gravity with a minimum-distance clamp

use crate::simulation::states::{Entity, NVec2};

/// Collection of acceleration terms (gravity, drag, etc.)
/// Each term implements [`Acceleration`] and their contributions are summed
/// into a single acceleration vector per entity
pub struct AccelSet {
    terms: Vec<Box<dyn Acceleration + Send + Sync>>,
}

impl AccelSet {
    /// Create an empty acceleration set
    pub fn new() -> Self {
        Self {
            terms: Vec::new()
        }
    }

    /// Add an acceleration term
    pub fn with<T>(mut self, term: T) -> Self
    where
        T: Acceleration + Send + Sync + 'static,
    {
        self.terms.push(Box::new(term));
        self
    }

    pub fn len(&self) -> usize {
        self.terms.len()
    }

    /// Compute total accelerations at time `t` for all `entities`
    /// - `out[i]` will be set to the sum of contributions from all terms
    pub fn accumulate_accels(&self, t: f64, entities: &[Entity], out: &mut [NVec2]) {
        // Zero buffer
        for a in out.iter_mut() {
            *a = NVec2::zeros();
        }
        // Iterate over all acceleration contributors
        for term in &self.terms {
            term.acceleration(t, entities, out);
        }
    }
}

impl Default for AccelSet {
    fn default() -> Self {
        Self::new()
    }
}

/// Allocate and fill one net acceleration per entity
pub fn net_accelerations(forces: &AccelSet, t: f64, entities: &[Entity]) -> Vec<NVec2> {
    let mut out = vec![NVec2::zeros(); entities.len()];
    forces.accumulate_accels(t, entities, &mut out);
    out
}

/// Trait for acceleration sources operating on an entity slice
/// Implementations add their contribution into `out[i]` for each entity
pub trait Acceleration {
    fn acceleration(&self, t: f64, entities: &[Entity], out: &mut [NVec2]);
}

/// Newtonian gravity, `a = G m / r²` along the separation.
///
/// Separations below `min_distance` are clamped to it so near-coincident
/// bodies awaiting a merge cannot produce unbounded accelerations.
/// Exactly coincident bodies have no direction and contribute nothing.
pub struct NewtonianGravity {
    pub g: f64, // gravitational constant
    pub min_distance: f64, // clamp for r
}

impl Acceleration for NewtonianGravity {
    fn acceleration(&self, _t: f64, entities: &[Entity], out: &mut [NVec2]) {
        let n = entities.len();
        if n < 2 { // Nothing to attract
            return;
        }

        // Loop over each unordered pair (i, j) with i < j
        for i in 0..n {
            let ei = &entities[i];
            let mi = ei.mass();

            for j in (i + 1)..n {
                let ej = &entities[j];
                let mj = ej.mass();

                // d points from i to j: i is pulled along +d, j along -d
                let d = ej.position - ei.position;
                let dist = d.norm();
                if dist == 0.0 {
                    continue;
                }
                let dir = d / dist;

                let r = dist.max(self.min_distance);
                let coef = self.g / (r * r);

                // a_i +=  G m_j / r² * dir
                // a_j += -G m_i / r² * dir
                out[i] += coef * mj * dir;
                out[j] -= coef * mi * dir;
            }
        }
    }
}
