//! Simulation engine for INTERDICTOR.
//!
//! Owns the hecs ECS world, runs systems once per tick,
//! and produces GameStateSnapshots for presentation.

pub mod engine;
pub mod flight;
pub mod input;
pub mod radar;
pub mod radio;
pub mod systems;
pub mod weapons;
pub mod world_setup;

pub use engine::{SimConfig, SimulationEngine};
pub use interdictor_core as core;
