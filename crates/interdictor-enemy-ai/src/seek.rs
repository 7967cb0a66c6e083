//! Per-tick enemy behaviour: wander-target selection, seek steering and
//! return fire.
//!
//! Pure functions that compute the next position, facing and target for one
//! enemy from its situation. No ECS dependency; operates on plain data.

use glam::Vec3;
use rand::Rng;

use interdictor_core::constants::*;
use interdictor_core::types::Rotation;

/// Input to the seek behaviour for a single enemy.
pub struct EnemyContext {
    pub position: Vec3,
    pub target: Option<Vec3>,
    pub player_position: Vec3,
}

/// Output of the seek behaviour.
pub struct EnemyUpdate {
    pub new_position: Vec3,
    pub facing: Rotation,
    /// Target after this tick (always assigned).
    pub target: Vec3,
    pub retargeted: bool,
}

/// Evaluate one tick of seek behaviour.
///
/// A fresh target is drawn when the enemy has none, or otherwise with
/// `ENEMY_RETARGET_CHANCE` per tick. The enemy then moves a fixed step straight
/// at the target; there is no velocity smoothing.
pub fn evaluate<R: Rng + ?Sized>(ctx: &EnemyContext, rng: &mut R) -> EnemyUpdate {
    let (target, retargeted) = match ctx.target {
        Some(target) if !rng.gen_bool(ENEMY_RETARGET_CHANCE) => (target, false),
        _ => (pick_target(ctx.player_position, rng), true),
    };

    let (new_position, direction) = seek_step(ctx.position, target);

    EnemyUpdate {
        new_position,
        facing: Rotation::facing(direction),
        target,
        retargeted,
    }
}

/// Random point inside the wander box centred on the player.
pub fn pick_target<R: Rng + ?Sized>(player_position: Vec3, rng: &mut R) -> Vec3 {
    let offset = Vec3::new(
        rng.gen_range(-ENEMY_TARGET_SPREAD..ENEMY_TARGET_SPREAD),
        rng.gen_range(-ENEMY_TARGET_SPREAD..ENEMY_TARGET_SPREAD),
        rng.gen_range(-ENEMY_TARGET_SPREAD..ENEMY_TARGET_SPREAD),
    );
    player_position + offset
}

/// Move `ENEMY_STEP` toward `target`. Returns the new position and the unit
/// steering direction (zero when already on the target).
pub fn seek_step(position: Vec3, target: Vec3) -> (Vec3, Vec3) {
    let direction = (target - position).normalize_or_zero();
    (position + direction * ENEMY_STEP, direction)
}

/// Velocity of a return-fire shot, if this enemy should fire now.
///
/// Fires when the player is inside `ENEMY_FIRE_RANGE` and the enemy's own
/// cooldown has elapsed. The shot leads nothing; it is aimed at where the
/// player is this tick.
pub fn fire_solution(
    position: Vec3,
    player_position: Vec3,
    last_shot_ms: Option<u64>,
    now_ms: u64,
) -> Option<Vec3> {
    if let Some(last) = last_shot_ms {
        if now_ms.saturating_sub(last) < ENEMY_FIRE_INTERVAL_MS {
            return None;
        }
    }

    let to_player = player_position - position;
    if to_player.length() >= ENEMY_FIRE_RANGE {
        return None;
    }

    let direction = to_player.normalize_or_zero();
    if direction == Vec3::ZERO {
        return None;
    }
    Some(direction * ENEMY_SHOT_SPEED)
}
