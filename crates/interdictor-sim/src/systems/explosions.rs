//! Explosion cleanup. Explosions are cosmetic and only ever expire.

use hecs::{Entity, World};

use interdictor_core::components::Explosion;
use interdictor_core::constants::EXPLOSION_TTL_MS;
use interdictor_core::types::SimClock;

pub fn run(world: &mut World, clock: &SimClock, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, explosion) in world.query_mut::<&Explosion>() {
        if clock.age_of(explosion.started_at_ms) >= EXPLOSION_TTL_MS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}
