//! Player weapon: energy pool and rate-limited wing guns.

use glam::Vec3;

use interdictor_core::components::PlayerState;
use interdictor_core::constants::*;

/// Energy and fire-rate bookkeeping for the player's guns.
#[derive(Debug, Clone, PartialEq)]
pub struct Weapons {
    pub energy: f32,
    /// Clock time of the last accepted shot.
    pub last_shot_ms: Option<u64>,
}

/// Spawn parameters of an accepted shot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Shot {
    pub position: Vec3,
    pub velocity: Vec3,
}

impl Default for Weapons {
    fn default() -> Self {
        Self {
            energy: PLAYER_MAX_ENERGY,
            last_shot_ms: None,
        }
    }
}

impl Weapons {
    /// Try to fire at clock time `now_ms`.
    ///
    /// Rejected while the previous shot is under `FIRE_INTERVAL_MS` old or
    /// energy is below `FIRE_MIN_ENERGY`. Shots alternate between the two wing
    /// guns by the parity of `now_ms`.
    pub fn fire(&mut self, now_ms: u64, player: &PlayerState) -> Option<Shot> {
        if let Some(last) = self.last_shot_ms {
            if now_ms.saturating_sub(last) < FIRE_INTERVAL_MS {
                return None;
            }
        }
        if self.energy < FIRE_MIN_ENERGY {
            return None;
        }

        self.last_shot_ms = Some(now_ms);
        self.energy = (self.energy - FIRE_ENERGY_COST).max(0.0);

        let side = if now_ms % 2 == 0 {
            -WING_GUN_OFFSET_X
        } else {
            WING_GUN_OFFSET_X
        };
        let offset = player
            .rotation
            .apply(Vec3::new(side, WING_GUN_OFFSET_Y, 0.0));

        Some(Shot {
            position: player.position + offset,
            velocity: player.rotation.forward() * PLAYER_SHOT_SPEED,
        })
    }

    /// Passive regeneration, once per tick.
    pub fn regenerate(&mut self) {
        self.energy = (self.energy + ENERGY_REGEN_PER_TICK).min(PLAYER_MAX_ENERGY);
    }
}
