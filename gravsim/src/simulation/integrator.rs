//! Fixed-step time integrators for the N-body system
//!
//! Provides semi-implicit (symplectic) Euler, the default used by the
//! simulation loop, and velocity-Verlet. Both mutate entities in place.

use serde::Deserialize;

use super::forces::{net_accelerations, AccelSet};
use super::states::{Entity, NVec2};

/// Which integrator the simulation loop uses
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IntegratorKind {
    #[serde(rename = "euler")] // v += a dt, then x += v_new dt; one force evaluation
    #[default]
    SemiImplicitEuler,

    #[serde(rename = "verlet")] // kick-drift-kick; two force evaluations per step
    Verlet,
}

/// Advance every entity by `dt` using precomputed accelerations.
/// Velocity is updated first and the new velocity moves the position.
pub fn semi_implicit_euler(entities: &mut [Entity], accels: &[NVec2], dt: f64) {
    debug_assert_eq!(entities.len(), accels.len());

    for (e, a) in entities.iter_mut().zip(accels.iter()) {
        e.velocity += dt * *a;
        e.position += dt * e.velocity;
    }
}

/// Advance every entity by one step using velocity-Verlet.
/// `a_now` holds the accelerations at the current positions.
pub fn velocity_verlet(entities: &mut [Entity], forces: &AccelSet, t: f64, a_now: &[NVec2], dt: f64) {
    if entities.is_empty() {
        return;
    }
    let half_dt = 0.5 * dt;

    // Kick: v_n+1/2 = v_n + (1/2 * dt) * a_n
    for (e, a) in entities.iter_mut().zip(a_now.iter()) {
        e.velocity += half_dt * *a;
    }

    // Drift: x_n+1 = x_n + dt v_n+1/2
    for e in entities.iter_mut() {
        e.position += dt * e.velocity;
    }

    // a_n+1 from x_n+1
    let a_new = net_accelerations(forces, t + dt, entities);

    // Second kick: v_n+1 = v_n+1/2 + (dt/2) * a_n+1
    for (e, a) in entities.iter_mut().zip(a_new.iter()) {
        e.velocity += half_dt * *a;
    }
}

/// Run one integration step of `kind` given the accelerations at time `t`
pub fn integrate(kind: IntegratorKind, entities: &mut [Entity], forces: &AccelSet, t: f64, a_now: &[NVec2], dt: f64) {
    match kind {
        IntegratorKind::SemiImplicitEuler => semi_implicit_euler(entities, a_now, dt),
        IntegratorKind::Verlet => velocity_verlet(entities, forces, t, a_now, dt),
    }
}
