//! Simulation constants and tuning parameters.
//!
//! Distances are world units, speeds are units per tick, times are
//! milliseconds of simulation clock.

/// Nominal tick rate of the scheduler (Hz).
pub const TICK_RATE: u32 = 60;

/// Nominal milliseconds per tick at `TICK_RATE`.
pub const NOMINAL_TICK_MS: u64 = 1000 / TICK_RATE as u64;

// --- Input ---

/// Rotation velocity added per pixel of pointer movement.
pub const POINTER_SENSITIVITY: f32 = 0.0008;

// --- Flight model ---

/// Pitch is clamped to +/- this value.
pub const PITCH_LIMIT: f32 = std::f32::consts::PI / 2.3;

/// Rotation velocity multiplier applied every tick.
pub const ROTATION_FRICTION: f32 = 0.85;

/// Target speed while any movement key is held.
pub const THRUST_SPEED: f32 = 6.5;

/// Target speed with no movement key held.
pub const IDLE_SPEED: f32 = 2.5;

/// Per-tick blend factor of velocity toward its target.
pub const VELOCITY_BLEND: f32 = 0.08;

/// Visual roll bias while strafing (radians).
pub const STRAFE_ROLL: f32 = 0.2;

/// Visual roll per unit of yaw velocity (applied negated).
pub const BANK_ROLL_GAIN: f32 = 15.0;

/// Per-tick blend factor of visual roll toward its target.
pub const ROLL_BLEND: f32 = 0.1;

// --- Player resources ---

pub const PLAYER_MAX_HEALTH: i32 = 100;
pub const PLAYER_MAX_ENERGY: f32 = 100.0;

/// Energy regained every tick.
pub const ENERGY_REGEN_PER_TICK: f32 = 0.6;

/// Speed metric shown at start, before the first tick.
pub const INITIAL_SPEED_METRIC: f32 = 0.1;

// --- Weapons ---

/// Minimum spacing between accepted player shots.
pub const FIRE_INTERVAL_MS: u64 = 120;

/// Energy required to fire.
pub const FIRE_MIN_ENERGY: f32 = 2.0;

/// Energy consumed per shot.
pub const FIRE_ENERGY_COST: f32 = 3.0;

/// Player projectile speed.
pub const PLAYER_SHOT_SPEED: f32 = 20.0;

/// Horizontal offset of the wing guns from the craft center.
pub const WING_GUN_OFFSET_X: f32 = 0.8;

/// Vertical offset of the wing guns from the craft center.
pub const WING_GUN_OFFSET_Y: f32 = -0.2;

/// Projectiles are removed once they reach this age.
pub const PROJECTILE_TTL_MS: u64 = 2200;

// --- Enemies ---

pub const ENEMY_MAX_HEALTH: i32 = 100;

/// Seek step applied every tick.
pub const ENEMY_STEP: f32 = 2.2;

/// Half extent of the wander box around the player.
pub const ENEMY_TARGET_SPREAD: f32 = 200.0;

/// Chance per tick that an enemy picks a fresh target.
pub const ENEMY_RETARGET_CHANCE: f64 = 0.02;

/// Spawner keeps at least this many enemies alive.
pub const MIN_ENEMY_COUNT: usize = 5;

/// Minimum spawn distance from the player.
pub const ENEMY_SPAWN_DISTANCE: f32 = 1500.0;

/// Random extra spawn distance on top of `ENEMY_SPAWN_DISTANCE`.
pub const ENEMY_SPAWN_DISTANCE_JITTER: f32 = 500.0;

/// Enemies only fire at a player closer than this.
pub const ENEMY_FIRE_RANGE: f32 = 600.0;

/// Minimum spacing between shots from one enemy.
pub const ENEMY_FIRE_INTERVAL_MS: u64 = 1800;

/// Enemy projectile speed.
pub const ENEMY_SHOT_SPEED: f32 = 12.0;

/// Share of spawned enemies flying the bomber airframe.
pub const BOMBER_SPAWN_CHANCE: f64 = 0.3;

// --- Combat ---

/// Player shot vs enemy hit distance.
pub const ENEMY_HIT_RADIUS: f32 = 15.0;

/// Enemy shot vs player hit distance.
pub const PLAYER_HIT_RADIUS: f32 = 6.0;

/// Damage dealt to an enemy by one player shot.
pub const PLAYER_SHOT_DAMAGE: i32 = 50;

/// Damage dealt to the player by one enemy shot.
pub const ENEMY_SHOT_DAMAGE: i32 = 10;

/// Score awarded per destroyed enemy.
pub const KILL_SCORE: u32 = 100;

// --- Explosions ---

pub const EXPLOSION_TTL_MS: u64 = 1000;
pub const EXPLOSION_BASE_SCALE: f32 = 2.0;
pub const EXPLOSION_SCALE_JITTER: f32 = 2.0;

// --- Radio ---

/// Number of radio lines retained.
pub const RADIO_LOG_CAPACITY: usize = 4;

pub const RADIO_OPENING_LINE: &str = "Command: Squadron deployed. Engage hostile craft.";

/// Event description handed to the narrative service on a kill.
pub const TARGET_DESTROYED_EVENT: &str = "Target destroyed. Commencing next sweep.";

/// Substituted when the narrative service returns no text.
pub const RADIO_FALLBACK_EMPTY: &str = "Command: Stay on target, pilot.";

/// Substituted when the narrative service fails.
pub const RADIO_FALLBACK_ERROR: &str = "Command: Connection lost. Maintain visual contact.";

// --- Radar ---

/// Range that maps onto `RADAR_DISPLAY_RADIUS`.
pub const RADAR_MAX_RANGE: f32 = 2000.0;

/// Display radius corresponding to `RADAR_MAX_RANGE`.
pub const RADAR_DISPLAY_RADIUS: f32 = 36.0;

/// Blips past this display radius are pinned to it and flagged.
pub const RADAR_CLAMP_RADIUS: f32 = 60.0;
