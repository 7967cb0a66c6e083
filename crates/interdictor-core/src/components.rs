//! ECS components for hecs entities, plus the player-owned state cells.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use bitflags::bitflags;
use glam::{Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::Rotation;

/// World-space position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position(pub Vec3);

/// Per-tick displacement.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Velocity(pub Vec3);

/// Derived facing of an enemy craft.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Facing(pub Rotation);

/// Enemy craft state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Enemy {
    pub id: u64,
    pub kind: EnemyKind,
    pub health: i32,
    /// Point this enemy currently steers toward. Lives and dies with the enemy.
    pub target: Option<Vec3>,
    /// Clock time of the last shot fired by this enemy.
    pub last_shot_ms: Option<u64>,
}

/// Projectile state. Velocity is a separate component and never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Projectile {
    pub id: u64,
    pub owner: Owner,
    pub created_at_ms: u64,
}

/// Cosmetic explosion record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Explosion {
    pub id: u64,
    pub started_at_ms: u64,
    pub scale: f32,
}

/// Player craft transform, integrated by the flight model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerState {
    pub position: Vec3,
    pub rotation: Rotation,
    pub velocity: Vec3,
    /// Display-only banking angle.
    pub visual_roll: f32,
}

bitflags! {
    /// Held movement keys.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct MovementKeys: u8 {
        const FORWARD = 1 << 0;
        const BACK = 1 << 1;
        const STRAFE_LEFT = 1 << 2;
        const STRAFE_RIGHT = 1 << 3;
    }
}

impl From<MovementKey> for MovementKeys {
    fn from(key: MovementKey) -> Self {
        match key {
            MovementKey::Forward => MovementKeys::FORWARD,
            MovementKey::Back => MovementKeys::BACK,
            MovementKey::StrafeLeft => MovementKeys::STRAFE_LEFT,
            MovementKey::StrafeRight => MovementKeys::STRAFE_RIGHT,
        }
    }
}

/// Raw input folded into steering intent between ticks.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InputAccumulator {
    pub held: MovementKeys,
    /// Rotation velocity: x = pitch, y = yaw (radians per tick).
    pub rotation_velocity: Vec2,
}

impl Default for InputAccumulator {
    fn default() -> Self {
        Self {
            held: MovementKeys::empty(),
            rotation_velocity: Vec2::ZERO,
        }
    }
}
