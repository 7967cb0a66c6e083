//! Population spawner. Keeps at least `MIN_ENEMY_COUNT` enemies alive.

use hecs::World;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use interdictor_core::components::{Enemy, PlayerState};
use interdictor_core::constants::MIN_ENEMY_COUNT;

use crate::world_setup;

/// Spawn at most one enemy per tick while the population is short.
/// Returns the id of the spawned enemy, if any.
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    next_id: &mut u64,
    player: &PlayerState,
) -> Option<u64> {
    let live = world.query_mut::<&Enemy>().into_iter().count();
    if live >= MIN_ENEMY_COUNT {
        return None;
    }

    let id = world_setup::spawn_enemy_near_player(world, rng, next_id, player);
    debug!(enemy_id = id, live = live + 1, "enemy spawned");
    Some(id)
}
