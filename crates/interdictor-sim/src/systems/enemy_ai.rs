//! Enemy AI system. Steers every enemy toward its wander target each tick.
//!
//! Calls the seek behaviour from interdictor-enemy-ai and writes the result
//! back into the enemy's components.

use glam::Vec3;
use hecs::World;
use rand_chacha::ChaCha8Rng;

use interdictor_core::components::{Enemy, Facing, Position};

use interdictor_enemy_ai::seek::{evaluate, EnemyContext};

pub fn run(world: &mut World, rng: &mut ChaCha8Rng, player_position: Vec3) {
    for (_entity, (enemy, pos, facing)) in
        world.query_mut::<(&mut Enemy, &mut Position, &mut Facing)>()
    {
        let ctx = EnemyContext {
            position: pos.0,
            target: enemy.target,
            player_position,
        };

        let update = evaluate(&ctx, rng);
        enemy.target = Some(update.target);
        pos.0 = update.new_position;
        facing.0 = update.facing;
    }
}
