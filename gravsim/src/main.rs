use gravsim::{Scenario, Simulation, Frame, LABEL_MAX_CHARS};
use gravsim::{bench_gravity, bench_tick, bench_tick_curve};
use gravsim::load_scenario_config;

use clap::Parser;
use anyhow::Result;
use log::info;

use std::path::PathBuf;

#[derive(Parser, Debug)]
struct Args {
    /// Scenario file under `scenarios/`
    #[arg(short, default_value = "binary_collision.yaml")]
    file_name: String,

    /// Number of ticks to run
    #[arg(short = 'n', default_value_t = 1000)]
    ticks: u64,

    /// Log a summary every this many ticks (0 = never)
    #[arg(long, default_value_t = 100)]
    report_every: u64,

    /// Run the benchmarks instead of a scenario
    #[arg(long)]
    bench: bool,
}

fn log_frame(frame: &Frame<'_>) {
    info!("tick {} (t = {:.4}): {} entities", frame.tick, frame.time, frame.entities.len());
}

fn print_frame(frame: &Frame<'_>) {
    println!("t = {:.4} after {} ticks, {} entities", frame.time, frame.tick, frame.entities.len());
    for e in frame.entities {
        let c = e.body.color();
        println!(
            "  {:<40} m = {:<12.6} r = {:<10.6} x = ({:.4}, {:.4}) v = ({:.4}, {:.4}) rgb = ({}, {}, {})",
            e.body.label(LABEL_MAX_CHARS),
            e.mass(),
            e.radius(),
            e.position.x,
            e.position.y,
            e.velocity.x,
            e.velocity.y,
            c.r,
            c.g,
            c.b,
        );
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_gravity();
        bench_tick();
        bench_tick_curve();
        return Ok(());
    }

    let config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name);
    let scenario_cfg = load_scenario_config(&config_path)?;
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    let mut sim = Simulation::new(scenario);
    let mass_before = sim.total_mass();
    sim.start()?;

    let mut merges = 0;
    for _ in 0..args.ticks {
        merges += sim.run(1)?;
        if args.report_every > 0 && sim.tick_count() % args.report_every == 0 {
            log_frame(&sim.frame());
        }
    }
    sim.stop()?;

    info!(
        "`{}` finished: {} merges, mass {} -> {}, kinetic energy {:.6}",
        sim.name(),
        merges,
        mass_before,
        sim.total_mass(),
        sim.kinetic_energy()
    );
    print_frame(&sim.frame());

    Ok(())
}
