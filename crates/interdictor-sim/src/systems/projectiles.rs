//! Projectile lifecycle: time-to-live expiry and straight-line integration.

use hecs::{Entity, World};

use interdictor_core::components::{Position, Projectile, Velocity};
use interdictor_core::constants::PROJECTILE_TTL_MS;
use interdictor_core::types::SimClock;

/// Remove projectiles that reached their time-to-live, then advance the rest
/// by their fixed velocity. Expiry depends only on age, not distance flown.
pub fn run(world: &mut World, clock: &SimClock, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, projectile) in world.query_mut::<&Projectile>() {
        if clock.age_of(projectile.created_at_ms) >= PROJECTILE_TTL_MS {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    for (_entity, (pos, vel, _projectile)) in
        world.query_mut::<(&mut Position, &Velocity, &Projectile)>()
    {
        pos.0 += vel.0;
    }
}
