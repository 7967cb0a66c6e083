//! INTERDICTOR runtime shell.
//!
//! Wires the simulation engine to a fixed-cadence game loop thread, the
//! narrative dispatcher and the headless autopilot used by the binary.

pub mod autopilot;
pub mod config;
pub mod game_loop;
pub mod narrative;
pub mod state;

pub use interdictor_core as core;
