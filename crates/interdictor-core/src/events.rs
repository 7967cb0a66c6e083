//! Events emitted by the simulation for the host shell, audio and UI feedback.

use glam::Vec3;
use serde::{Deserialize, Serialize};

/// One-tick notifications carried in the snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum SimEvent {
    /// Pointer pressed while unlocked; the shell should request pointer lock.
    PointerLockRequested,
    /// A player shot was accepted.
    ShotFired { projectile_id: u64 },
    /// An enemy craft went down.
    EnemyDestroyed { enemy_id: u64, position: Vec3 },
    /// The player took a hit.
    PlayerHit { health: i32 },
    /// The player craft was destroyed.
    GameOver { score: u32 },
}

/// Combat happening the narrative service may comment on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatEvent {
    /// Restart generation the event belongs to.
    pub session: u64,
    pub tick: u64,
    pub description: String,
}
