pub mod simulation;
pub mod configuration;
pub mod benchmark;

pub use simulation::states::{Body, Entity, NVec2, Position, Rgb, LABEL_MAX_CHARS};
pub use simulation::error::SimError;
pub use simulation::forces::{Acceleration, AccelSet, NewtonianGravity, net_accelerations};
pub use simulation::integrator::{IntegratorKind, semi_implicit_euler, velocity_verlet};
pub use simulation::collisions::{RadiusModel, CollisionReport, MergeEvent, blend_colors, merge, resolve_collisions};
pub use simulation::params::{Parameters, SimSettings};
pub use simulation::engine::{Simulation, SimState, TickOutcome, Frame};
pub use simulation::scenario::{Scenario, load_scenario_config};

pub use configuration::config::{ParametersConfig, BodyConfig, ScenarioConfig};

pub use benchmark::benchmark::{bench_gravity, bench_tick, bench_tick_curve};
