//! Enemy return fire.

use glam::Vec3;
use hecs::World;

use interdictor_core::components::{Enemy, Position};
use interdictor_core::enums::Owner;

use interdictor_enemy_ai::seek::fire_solution;

use crate::world_setup;

/// Let every enemy with a firing solution shoot at the player.
/// Returns the number of shots fired.
pub fn run(world: &mut World, next_id: &mut u64, player_position: Vec3, now_ms: u64) -> usize {
    // Collect first; spawning needs the world unborrowed.
    let mut shots: Vec<(Vec3, Vec3)> = Vec::new();

    for (_entity, (enemy, pos)) in world.query_mut::<(&mut Enemy, &Position)>() {
        if let Some(velocity) = fire_solution(pos.0, player_position, enemy.last_shot_ms, now_ms) {
            enemy.last_shot_ms = Some(now_ms);
            shots.push((pos.0, velocity));
        }
    }

    for &(position, velocity) in &shots {
        world_setup::spawn_projectile(world, next_id, Owner::Enemy, position, velocity, now_ms);
    }
    shots.len()
}
