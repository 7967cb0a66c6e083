//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions that take `&mut World` (or `&World` for read-only).
//! They do not own state: entity state lives in components, player state
//! lives in the engine.

pub mod combat;
pub mod enemy_ai;
pub mod enemy_fire;
pub mod explosions;
pub mod projectiles;
pub mod snapshot;
pub mod spawner;
