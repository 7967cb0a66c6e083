//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Top-level game phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Waiting for the first pointer lock.
    #[default]
    Idle,
    /// Simulation advances every tick.
    Running,
    /// Player destroyed. Frozen until restart.
    GameOver,
}

/// Who fired a projectile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Owner {
    #[default]
    Player,
    Enemy,
}

/// Enemy airframe. Cosmetic only; all kinds share the same behaviour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyKind {
    #[default]
    Interceptor,
    Bomber,
}

/// A movement key the flight model understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MovementKey {
    Forward,
    Back,
    StrafeLeft,
    StrafeRight,
}

impl MovementKey {
    /// Map a raw key name (`w`, `a`, `s`, `d`, any case). Anything else is not a
    /// movement key.
    pub fn from_key_name(name: &str) -> Option<Self> {
        match name.to_ascii_lowercase().as_str() {
            "w" => Some(Self::Forward),
            "s" => Some(Self::Back),
            "a" => Some(Self::StrafeLeft),
            "d" => Some(Self::StrafeRight),
            _ => None,
        }
    }
}
