//! Game state snapshot: the complete visible state handed to presentation each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::*;
use crate::events::SimEvent;
use crate::types::{Rotation, SimClock};

/// Complete game state published after each tick. Immutable once built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub clock: SimClock,
    pub phase: GamePhase,
    pub score: u32,
    /// Player hull, 0..=100.
    pub health: i32,
    /// Weapon energy, 0..=100.
    pub energy: f32,
    /// Normalized speed metric for display.
    pub speed: f32,
    pub is_game_over: bool,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub projectiles: Vec<ProjectileView>,
    pub explosions: Vec<ExplosionView>,
    /// Most recent radio lines, oldest first.
    pub radio_chatter: Vec<String>,
    pub radar: Vec<RadarBlip>,
    pub events: Vec<SimEvent>,
    /// Ambient track should play (pointer locked and not game over).
    pub music_playing: bool,
}

impl Default for GameStateSnapshot {
    fn default() -> Self {
        Self {
            clock: SimClock::default(),
            phase: GamePhase::default(),
            score: 0,
            health: PLAYER_MAX_HEALTH,
            energy: PLAYER_MAX_ENERGY,
            speed: INITIAL_SPEED_METRIC,
            is_game_over: false,
            player: PlayerView::default(),
            enemies: Vec::new(),
            projectiles: Vec::new(),
            explosions: Vec::new(),
            radio_chatter: vec![RADIO_OPENING_LINE.to_string()],
            radar: Vec::new(),
            events: Vec::new(),
            music_playing: false,
        }
    }
}

/// Player transform for the renderer and camera.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Vec3,
    pub rotation: Rotation,
    pub velocity: Vec3,
    pub visual_roll: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnemyView {
    pub id: u64,
    pub kind: EnemyKind,
    pub position: Vec3,
    pub rotation: Rotation,
    pub health: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProjectileView {
    pub id: u64,
    pub owner: Owner,
    pub position: Vec3,
    pub velocity: Vec3,
    pub created_at_ms: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExplosionView {
    pub id: u64,
    pub position: Vec3,
    pub started_at_ms: u64,
    pub scale: f32,
}

/// An enemy projected into player-local radar display coordinates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RadarBlip {
    pub enemy_id: u64,
    /// Display x (right of the player is positive).
    pub x: f32,
    /// Display z (ahead of the player is positive).
    pub z: f32,
    /// Pinned to the display boundary.
    pub out_of_range: bool,
}
