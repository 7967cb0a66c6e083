//! Collision and combat resolution.
//!
//! Two-phase: hit pairs are collected from a consistent view of positions,
//! then damage and removals are applied. A projectile can hit at most one
//! target per tick; a target takes every projectile that hits it.

use glam::Vec3;
use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use interdictor_core::components::{Enemy, Position, Projectile};
use interdictor_core::constants::*;
use interdictor_core::enums::Owner;

use crate::world_setup;

/// A player shot striking an enemy.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hit {
    pub enemy: Entity,
    pub projectile: Entity,
}

/// An enemy removed this tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Kill {
    pub enemy_id: u64,
    pub position: Vec3,
    pub explosion_id: u64,
}

/// Match player shots against enemies. Enemies are checked in id order, so
/// a shot inside two hit spheres goes to the lower id.
pub fn collect_player_hits(world: &World) -> Vec<Hit> {
    let mut shots: Vec<(u64, Entity, Vec3)> = world
        .query::<(&Projectile, &Position)>()
        .iter()
        .filter(|(_, (projectile, _))| projectile.owner == Owner::Player)
        .map(|(entity, (projectile, pos))| (projectile.id, entity, pos.0))
        .collect();
    shots.sort_by_key(|(id, _, _)| *id);

    let mut enemies: Vec<(u64, Entity, Vec3)> = world
        .query::<(&Enemy, &Position)>()
        .iter()
        .map(|(entity, (enemy, pos))| (enemy.id, entity, pos.0))
        .collect();
    enemies.sort_by_key(|(id, _, _)| *id);

    shots
        .into_iter()
        .filter_map(|(_, projectile, shot_pos)| {
            enemies
                .iter()
                .find(|(_, _, enemy_pos)| enemy_pos.distance(shot_pos) < ENEMY_HIT_RADIUS)
                .map(|(_, enemy, _)| Hit {
                    enemy: *enemy,
                    projectile,
                })
        })
        .collect()
}

/// Apply collected hits: damage enemies and consume the projectiles.
pub fn apply_player_hits(world: &mut World, hits: &[Hit]) {
    for hit in hits {
        if let Ok(mut enemy) = world.get::<&mut Enemy>(hit.enemy) {
            enemy.health -= PLAYER_SHOT_DAMAGE;
        }
        let _ = world.despawn(hit.projectile);
    }
}

/// Remove every enemy at or below zero health, leaving an explosion where
/// it was. Each enemy is removed exactly once, so each is scored once.
pub fn remove_destroyed(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    now_ms: u64,
) -> Vec<Kill> {
    let mut destroyed: Vec<(u64, Entity, Vec3)> = world
        .query_mut::<(&Enemy, &Position)>()
        .into_iter()
        .filter(|(_, (enemy, _))| enemy.health <= 0)
        .map(|(entity, (enemy, pos))| (enemy.id, entity, pos.0))
        .collect();
    destroyed.sort_by_key(|(id, _, _)| *id);

    destroyed
        .into_iter()
        .map(|(enemy_id, entity, position)| {
            let _ = world.despawn(entity);
            let explosion_id =
                world_setup::spawn_explosion(world, rng, next_id, position, now_ms);
            Kill {
                enemy_id,
                position,
                explosion_id,
            }
        })
        .collect()
}

/// Consume every enemy shot within `PLAYER_HIT_RADIUS` of the player.
/// Returns the number of hits taken.
pub fn resolve_enemy_hits(
    world: &mut World,
    player_position: Vec3,
    despawn_buffer: &mut Vec<Entity>,
) -> u32 {
    despawn_buffer.clear();

    for (entity, (projectile, pos)) in world.query_mut::<(&Projectile, &Position)>() {
        if projectile.owner == Owner::Enemy && pos.0.distance(player_position) < PLAYER_HIT_RADIUS
        {
            despawn_buffer.push(entity);
        }
    }

    let hits = despawn_buffer.len() as u32;
    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
    hits
}
