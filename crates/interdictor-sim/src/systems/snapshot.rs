//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only; it never modifies the world.

use hecs::World;

use interdictor_core::components::*;
use interdictor_core::enums::GamePhase;
use interdictor_core::events::SimEvent;
use interdictor_core::state::*;
use interdictor_core::types::SimClock;

use crate::radar;
use crate::radio::RadioLog;

/// Engine-side values that are not stored in the world.
pub struct SnapshotInputs<'a> {
    pub clock: SimClock,
    pub phase: GamePhase,
    pub player: &'a PlayerState,
    pub score: u32,
    pub health: i32,
    pub energy: f32,
    pub speed: f32,
    pub radio: &'a RadioLog,
    pub pointer_locked: bool,
}

/// Build a complete GameStateSnapshot from the current world state.
/// Entity lists are ordered by id.
pub fn build_snapshot(
    world: &World,
    inputs: SnapshotInputs<'_>,
    events: Vec<SimEvent>,
) -> GameStateSnapshot {
    let is_game_over = inputs.phase == GamePhase::GameOver;
    let enemies = build_enemies(world);
    let radar = enemies
        .iter()
        .map(|e| radar::project(inputs.player, e.id, e.position))
        .collect();

    GameStateSnapshot {
        clock: inputs.clock,
        phase: inputs.phase,
        score: inputs.score,
        health: inputs.health,
        energy: inputs.energy,
        speed: inputs.speed,
        is_game_over,
        player: PlayerView {
            position: inputs.player.position,
            rotation: inputs.player.rotation,
            velocity: inputs.player.velocity,
            visual_roll: inputs.player.visual_roll,
        },
        enemies,
        projectiles: build_projectiles(world),
        explosions: build_explosions(world),
        radio_chatter: inputs.radio.lines(),
        radar,
        events,
        music_playing: inputs.pointer_locked && !is_game_over,
    }
}

fn build_enemies(world: &World) -> Vec<EnemyView> {
    let mut enemies: Vec<EnemyView> = world
        .query::<(&Enemy, &Position, &Facing)>()
        .iter()
        .map(|(_, (enemy, pos, facing))| EnemyView {
            id: enemy.id,
            kind: enemy.kind,
            position: pos.0,
            rotation: facing.0,
            health: enemy.health,
        })
        .collect();
    enemies.sort_by_key(|e| e.id);
    enemies
}

fn build_projectiles(world: &World) -> Vec<ProjectileView> {
    let mut projectiles: Vec<ProjectileView> = world
        .query::<(&Projectile, &Position, &Velocity)>()
        .iter()
        .map(|(_, (projectile, pos, vel))| ProjectileView {
            id: projectile.id,
            owner: projectile.owner,
            position: pos.0,
            velocity: vel.0,
            created_at_ms: projectile.created_at_ms,
        })
        .collect();
    projectiles.sort_by_key(|p| p.id);
    projectiles
}

fn build_explosions(world: &World) -> Vec<ExplosionView> {
    let mut explosions: Vec<ExplosionView> = world
        .query::<(&Explosion, &Position)>()
        .iter()
        .map(|(_, (explosion, pos))| ExplosionView {
            id: explosion.id,
            position: pos.0,
            started_at_ms: explosion.started_at_ms,
            scale: explosion.scale,
        })
        .collect();
    explosions.sort_by_key(|e| e.id);
    explosions
}
