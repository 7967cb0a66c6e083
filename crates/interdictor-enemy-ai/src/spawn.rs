//! Spawn placement for new enemy craft.

use glam::Vec3;
use rand::Rng;

use interdictor_core::constants::*;
use interdictor_core::enums::EnemyKind;
use interdictor_core::types::Rotation;

/// Where a new enemy appears: far ahead of the player, scattered around the
/// nose direction, expressed in world space.
pub fn spawn_position<R: Rng + ?Sized>(
    player_position: Vec3,
    player_rotation: &Rotation,
    rng: &mut R,
) -> Vec3 {
    let local_dir = Vec3::new(rng.gen_range(-0.5..0.5), rng.gen_range(-0.5..0.5), -1.0).normalize();
    let distance = ENEMY_SPAWN_DISTANCE + rng.gen_range(0.0..ENEMY_SPAWN_DISTANCE_JITTER);
    player_position + player_rotation.apply(local_dir) * distance
}

pub fn pick_kind<R: Rng + ?Sized>(rng: &mut R) -> EnemyKind {
    if rng.gen_bool(BOMBER_SPAWN_CHANCE) {
        EnemyKind::Bomber
    } else {
        EnemyKind::Interceptor
    }
}
