//! Entity spawn factories for the simulation world.
//!
//! Creates enemy, projectile and explosion entities with the right
//! component bundles. Ids come from the engine's shared counter.

use glam::Vec3;
use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use interdictor_core::components::*;
use interdictor_core::constants::*;
use interdictor_core::enums::{EnemyKind, Owner};
use interdictor_core::types::Rotation;

use interdictor_enemy_ai::spawn::{pick_kind, spawn_position};

/// Hand out the next entity id.
pub fn allocate_id(next_id: &mut u64) -> u64 {
    let id = *next_id;
    *next_id += 1;
    id
}

/// Spawn a fresh enemy far ahead of the player. Starts at full health with
/// no target.
pub fn spawn_enemy_near_player(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    player: &PlayerState,
) -> u64 {
    let position = spawn_position(player.position, &player.rotation, rng);
    let kind = pick_kind(rng);
    spawn_enemy(world, next_id, kind, position, ENEMY_MAX_HEALTH)
}

/// Spawn an enemy with explicit placement.
pub fn spawn_enemy(
    world: &mut World,
    next_id: &mut u64,
    kind: EnemyKind,
    position: Vec3,
    health: i32,
) -> u64 {
    let id = allocate_id(next_id);
    world.spawn((
        Enemy {
            id,
            kind,
            health,
            target: None,
            last_shot_ms: None,
        },
        Position(position),
        Facing(Rotation::default()),
    ));
    id
}

pub fn spawn_projectile(
    world: &mut World,
    next_id: &mut u64,
    owner: Owner,
    position: Vec3,
    velocity: Vec3,
    now_ms: u64,
) -> u64 {
    let id = allocate_id(next_id);
    world.spawn((
        Projectile {
            id,
            owner,
            created_at_ms: now_ms,
        },
        Position(position),
        Velocity(velocity),
    ));
    id
}

/// Spawn an explosion with a randomized scale.
pub fn spawn_explosion(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    position: Vec3,
    now_ms: u64,
) -> u64 {
    let id = allocate_id(next_id);
    let scale = EXPLOSION_BASE_SCALE + rng.gen_range(0.0..EXPLOSION_SCALE_JITTER);
    world.spawn((
        Explosion {
            id,
            started_at_ms: now_ms,
            scale,
        },
        Position(position),
    ));
    id
}
