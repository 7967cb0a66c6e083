//! Enemy AI for INTERDICTOR.
//!
//! Implements wander-and-seek steering around the player, return fire,
//! and spawn placement for new enemy craft.

pub mod seek;
pub mod spawn;

pub use interdictor_core as core;
