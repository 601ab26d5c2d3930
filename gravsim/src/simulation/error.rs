//! Error type for scenario construction and the simulation loop

use thiserror::Error;

use crate::simulation::engine::SimState;

#[derive(Debug, Error, PartialEq)]
pub enum SimError {
    #[error("body `{name}` has non-positive mass {mass}")]
    NonPositiveMass { name: String, mass: f64 },

    #[error("body `{name}` has non-positive radius {radius}")]
    NonPositiveRadius { name: String, radius: f64 },

    #[error("body `{name}`: `{field}` needs 2 components, got {len}")]
    InvalidVector { name: String, field: &'static str, len: usize },

    #[error("parameter `{name}` must be finite and positive, got {value}")]
    InvalidParameter { name: &'static str, value: f64 },

    #[error("cannot go from {from:?} to {to:?}")]
    InvalidTransition { from: SimState, to: SimState },

    #[error("entity `{name}` reached a non-finite state at tick {tick}")]
    NonFinite { name: String, tick: u64 },
}
