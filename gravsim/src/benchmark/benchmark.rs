use std::time::Instant;

use crate::simulation::engine::Simulation;
use crate::simulation::forces::{Acceleration, NewtonianGravity};
use crate::simulation::integrator::IntegratorKind;
use crate::simulation::params::{Parameters, SimSettings};
use crate::simulation::scenario::Scenario;
use crate::simulation::states::{Body, Entity, NVec2, Position, Rgb};

/// Helper to build `n` deterministic, non-overlapping entities
fn make_entities(n: usize) -> Vec<Entity> {
    (0..n)
        .map(|i| {
            let i_f = i as f64;
            // spiral so neighbours stay apart, no rand needed
            let angle = i_f * 0.37;
            let dist = 2.0 + i_f * 0.5;
            let body = Body::new(format!("b{i}"), 1.0, 0.01, Rgb::WHITE)
                .expect("benchmark bodies are valid");
            Entity::new(
                body,
                NVec2::new(-angle.sin(), angle.cos()) * 0.1,
                Position::new(angle.cos() * dist, angle.sin() * dist),
            )
        })
        .collect()
}

fn make_params(integrator: IntegratorKind) -> Parameters {
    Parameters {
        g: 0.1,
        min_distance: 1.0e-3,
        base_tick: 0.001,
        integrator,
        ..Parameters::default()
    }
}

fn make_simulation(n: usize, integrator: IntegratorKind) -> Simulation {
    let scenario = Scenario::from_entities("bench", make_entities(n), make_params(integrator), SimSettings::default())
        .expect("benchmark parameters are valid");
    let mut sim = Simulation::new(scenario);
    sim.start().expect("fresh simulation starts");
    sim
}

/// Time one O(n²) force pass for a range of n
pub fn bench_gravity() {
    let ns = [100, 200, 400, 800, 1600, 3200];

    for n in ns {
        let entities = make_entities(n);
        let params = make_params(IntegratorKind::SemiImplicitEuler);
        let gravity = NewtonianGravity {
            g: params.g,
            min_distance: params.min_distance,
        };
        let mut out = vec![NVec2::zeros(); n];

        // Warm up
        gravity.acceleration(0.0, &entities, &mut out);

        let t0 = Instant::now();
        gravity.acceleration(0.0, &entities, &mut out);
        let dt_direct = t0.elapsed().as_secs_f64();

        println!("N = {n:5}, direct = {:8.6} s", dt_direct);
    }
}

/// Time full ticks (forces, integration, collisions) for both integrators
pub fn bench_tick() {
    let ns = [100, 200, 400, 800, 1600];
    let steps = 5;

    for n in ns {
        let mut per_step = [0.0; 2];

        for (slot, kind) in [IntegratorKind::SemiImplicitEuler, IntegratorKind::Verlet].into_iter().enumerate() {
            let mut sim = make_simulation(n, kind);

            // Warm-up
            if let Err(e) = sim.tick() {
                println!("N = {n:5}, {kind:?} warm-up failed: {e}");
                continue;
            }

            let t0 = Instant::now();
            for _ in 0..steps {
                if let Err(e) = sim.tick() {
                    println!("N = {n:5}, {kind:?} failed: {e}");
                    break;
                }
            }
            per_step[slot] = t0.elapsed().as_secs_f64() / steps as f64;
        }

        println!("N = {:5}, euler tick = {:8.6} s,   verlet tick = {:8.6} s", n, per_step[0], per_step[1]);
    }
}

/// Tick time over a range of n as CSV
/// Paste output directly into a spreadsheet to graph
pub fn bench_tick_curve() {
    println!("N,euler_ms");

    for n in (100..=2000).step_by(100) {
        // Small n: average over a few steps to smooth noise
        let steps = if n <= 800 { 5 } else { 1 };
        let mut sim = make_simulation(n, IntegratorKind::SemiImplicitEuler);

        let t0 = Instant::now();
        for _ in 0..steps {
            if let Err(e) = sim.tick() {
                println!("N = {n:5}, tick failed: {e}");
                break;
            }
        }
        let ms = t0.elapsed().as_secs_f64() * 1000.0 / steps as f64;

        println!("{},{:.6}", n, ms);
    }
}
