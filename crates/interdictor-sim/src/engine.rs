//! Simulation engine: the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, the player craft and its
//! input accumulator, processes queued player commands, runs all systems,
//! and produces `GameStateSnapshot`s. Completely headless, enabling
//! deterministic testing.

use std::collections::VecDeque;

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::{debug, info};

use interdictor_core::commands::PlayerCommand;
use interdictor_core::components::{InputAccumulator, PlayerState};
use interdictor_core::constants::*;
use interdictor_core::enums::{GamePhase, Owner};
use interdictor_core::events::{CombatEvent, SimEvent};
use interdictor_core::state::GameStateSnapshot;
use interdictor_core::types::SimClock;

use crate::radio::RadioLog;
use crate::systems;
use crate::systems::snapshot::SnapshotInputs;
use crate::weapons::Weapons;
use crate::{flight, input, world_setup};

/// Configuration for starting a new simulation.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed = same simulation.
    pub seed: u64,
    /// Whether enemies shoot back.
    pub enemy_fire: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            enemy_fire: true,
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    config: SimConfig,
    world: World,
    clock: SimClock,
    phase: GamePhase,
    rng: ChaCha8Rng,
    next_entity_id: u64,
    command_queue: VecDeque<PlayerCommand>,
    despawn_buffer: Vec<hecs::Entity>,
    events: Vec<SimEvent>,
    combat_events: Vec<CombatEvent>,
    pointer_locked: bool,
    /// Bumped on every restart so late radio replies can be discarded.
    session: u64,

    // --- Player ---
    player: PlayerState,
    input: InputAccumulator,
    weapons: Weapons,
    health: i32,
    score: u32,
    speed: f32,
    radio: RadioLog,
}

impl SimulationEngine {
    /// Create a new simulation engine with the given config.
    pub fn new(config: SimConfig) -> Self {
        debug!(seed = config.seed, enemy_fire = config.enemy_fire, "simulation engine created");
        Self {
            world: World::new(),
            clock: SimClock::default(),
            phase: GamePhase::default(),
            rng: ChaCha8Rng::seed_from_u64(config.seed),
            config,
            next_entity_id: 1,
            command_queue: VecDeque::new(),
            despawn_buffer: Vec::new(),
            events: Vec::new(),
            combat_events: Vec::new(),
            pointer_locked: false,
            session: 0,
            player: PlayerState::default(),
            input: InputAccumulator::default(),
            weapons: Weapons::default(),
            health: PLAYER_MAX_HEALTH,
            score: 0,
            speed: INITIAL_SPEED_METRIC,
            radio: RadioLog::default(),
        }
    }

    /// Queue a player command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: PlayerCommand) {
        self.command_queue.push_back(command);
    }

    /// Queue multiple commands.
    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = PlayerCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `elapsed_ms` is the wall time since the previous tick. It only moves
    /// the millisecond clock; motion is per tick.
    pub fn tick(&mut self, elapsed_ms: u64) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == GamePhase::Running {
            self.clock.advance(elapsed_ms);
            self.run_systems();
        }

        let events = std::mem::take(&mut self.events);
        self.build_snapshot(events)
    }

    /// Snapshot of the current state without advancing.
    pub fn snapshot(&self) -> GameStateSnapshot {
        self.build_snapshot(Vec::new())
    }

    /// Reset every piece of game state to its initial value.
    ///
    /// Held keys survive (they are still physically held); pointer lock
    /// decides whether play resumes immediately.
    pub fn restart(&mut self) {
        self.world.clear();
        self.clock = SimClock::default();
        self.events.clear();
        self.combat_events.clear();
        self.session += 1;

        self.player = PlayerState::default();
        self.input.rotation_velocity = glam::Vec2::ZERO;
        self.weapons = Weapons::default();
        self.health = PLAYER_MAX_HEALTH;
        self.score = 0;
        self.speed = INITIAL_SPEED_METRIC;
        self.radio = RadioLog::default();

        self.phase = if self.pointer_locked {
            GamePhase::Running
        } else {
            GamePhase::Idle
        };
        info!(phase = ?self.phase, session = self.session, "simulation restarted");
    }

    /// Take the combat events raised since the last call.
    pub fn drain_combat_events(&mut self) -> Vec<CombatEvent> {
        std::mem::take(&mut self.combat_events)
    }

    /// Append a radio line produced for a combat event of `session`.
    ///
    /// Lines from before a restart, or arriving after game over, are dropped.
    pub fn deliver_chatter(&mut self, session: u64, line: String) {
        if session != self.session {
            debug!(session, current = self.session, "stale radio line dropped");
            return;
        }
        if self.phase == GamePhase::GameOver {
            debug!("radio line dropped after game over");
            return;
        }
        self.radio.push(line);
    }

    /// Get the current game phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation clock.
    pub fn clock(&self) -> SimClock {
        self.clock
    }

    /// Current restart generation.
    pub fn session(&self) -> u64 {
        self.session
    }

    /// Get the player craft state.
    pub fn player(&self) -> &PlayerState {
        &self.player
    }

    /// Get the input accumulator.
    pub fn input(&self) -> &InputAccumulator {
        &self.input
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Spawn an enemy at a fixed position (for tests).
    #[cfg(test)]
    pub fn spawn_test_enemy(&mut self, position: glam::Vec3, health: i32) -> u64 {
        world_setup::spawn_enemy(
            &mut self.world,
            &mut self.next_entity_id,
            interdictor_core::enums::EnemyKind::Interceptor,
            position,
            health,
        )
    }

    /// Spawn a projectile stamped with the current clock (for tests).
    #[cfg(test)]
    pub fn spawn_test_projectile(
        &mut self,
        owner: Owner,
        position: glam::Vec3,
        velocity: glam::Vec3,
    ) -> u64 {
        world_setup::spawn_projectile(
            &mut self.world,
            &mut self.next_entity_id,
            owner,
            position,
            velocity,
            self.clock.now_ms,
        )
    }

    #[cfg(test)]
    pub fn set_health(&mut self, health: i32) {
        self.health = health;
    }

    /// Process all queued commands.
    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    /// Handle a single player command.
    fn handle_command(&mut self, command: PlayerCommand) {
        match command {
            PlayerCommand::KeyDown { key } => {
                input::key_down(&mut self.input, &key);
            }
            PlayerCommand::KeyUp { key } => {
                input::key_up(&mut self.input, &key);
            }
            PlayerCommand::PointerMove { dx, dy } => {
                if self.pointer_locked && self.phase == GamePhase::Running {
                    input::pointer_move(&mut self.input, dx, dy);
                }
            }
            PlayerCommand::PointerDown => {
                if !self.pointer_locked {
                    self.events.push(SimEvent::PointerLockRequested);
                } else if self.phase == GamePhase::Running {
                    self.fire();
                }
            }
            PlayerCommand::PointerLockChanged { locked } => {
                self.pointer_locked = locked;
                if locked && self.phase == GamePhase::Idle {
                    self.phase = GamePhase::Running;
                    info!("pointer locked, simulation running");
                } else {
                    debug!(locked, "pointer lock changed");
                }
            }
            PlayerCommand::Restart => self.restart(),
        }
    }

    fn fire(&mut self) {
        let now = self.clock.now_ms;
        if let Some(shot) = self.weapons.fire(now, &self.player) {
            let projectile_id = world_setup::spawn_projectile(
                &mut self.world,
                &mut self.next_entity_id,
                Owner::Player,
                shot.position,
                shot.velocity,
                now,
            );
            self.events.push(SimEvent::ShotFired { projectile_id });
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self) {
        let now = self.clock.now_ms;

        // 1. Flight model
        flight::integrate(&mut self.player, &mut self.input);
        self.speed = flight::speed_metric(&self.player);
        // 2. Projectile expiry + integration
        systems::projectiles::run(&mut self.world, &self.clock, &mut self.despawn_buffer);
        // 3. Explosion expiry
        systems::explosions::run(&mut self.world, &self.clock, &mut self.despawn_buffer);
        // 4. Enemy seek steering
        systems::enemy_ai::run(&mut self.world, &mut self.rng, self.player.position);
        // 5. Player shots vs enemies
        let hits = systems::combat::collect_player_hits(&self.world);
        systems::combat::apply_player_hits(&mut self.world, &hits);
        // 6. Casualties
        let kills = systems::combat::remove_destroyed(
            &mut self.world,
            &mut self.rng,
            &mut self.next_entity_id,
            now,
        );
        for kill in kills {
            self.score += KILL_SCORE;
            debug!(enemy_id = kill.enemy_id, score = self.score, "enemy destroyed");
            self.events.push(SimEvent::EnemyDestroyed {
                enemy_id: kill.enemy_id,
                position: kill.position,
            });
            self.combat_events.push(CombatEvent {
                session: self.session,
                tick: self.clock.tick,
                description: TARGET_DESTROYED_EVENT.to_string(),
            });
        }
        // 7. Population
        systems::spawner::run(
            &mut self.world,
            &mut self.rng,
            &mut self.next_entity_id,
            &self.player,
        );
        // 8. Return fire
        if self.config.enemy_fire {
            systems::enemy_fire::run(
                &mut self.world,
                &mut self.next_entity_id,
                self.player.position,
                now,
            );
        }
        // 9. Enemy shots vs player
        let taken = systems::combat::resolve_enemy_hits(
            &mut self.world,
            self.player.position,
            &mut self.despawn_buffer,
        );
        if taken > 0 {
            self.health = (self.health - ENEMY_SHOT_DAMAGE * taken as i32).max(0);
            self.events.push(SimEvent::PlayerHit {
                health: self.health,
            });
        }
        // 10. Energy
        self.weapons.regenerate();
        // 11. Game over
        if self.health <= 0 {
            self.phase = GamePhase::GameOver;
            self.events.push(SimEvent::GameOver { score: self.score });
            info!(score = self.score, tick = self.clock.tick, "player destroyed, game over");
        }
    }

    fn build_snapshot(&self, events: Vec<SimEvent>) -> GameStateSnapshot {
        systems::snapshot::build_snapshot(
            &self.world,
            SnapshotInputs {
                clock: self.clock,
                phase: self.phase,
                player: &self.player,
                score: self.score,
                health: self.health,
                energy: self.weapons.energy,
                speed: self.speed,
                radio: &self.radio,
                pointer_locked: self.pointer_locked,
            },
            events,
        )
    }
}
