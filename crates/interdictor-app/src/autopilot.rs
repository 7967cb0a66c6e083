//! Scripted pilot for headless runs.
//!
//! Reads only what a player would see (the snapshot) and answers with the
//! same commands a player's devices would produce: it locks the pointer,
//! picks the nearest radar contact, mouse-steers onto it, closes in under
//! thrust and fires once the contact sits inside a narrow cone ahead.

use std::f32::consts::{PI, TAU};

use glam::Vec3;

use interdictor_core::commands::PlayerCommand;
use interdictor_core::constants::PITCH_LIMIT;
use interdictor_core::enums::GamePhase;
use interdictor_core::state::{EnemyView, GameStateSnapshot};

/// Pointer pixels per radian of heading error.
const STEER_GAIN: f32 = 14.0;

/// Largest pointer step sent in one snapshot.
const MAX_POINTER_STEP: f32 = 60.0;

/// Half-angle of the cone inside which the guns are fired.
const FIRE_CONE: f32 = 0.04;

/// Contacts beyond this are not worth a shot.
const FIRE_RANGE: f32 = 1200.0;

/// Thrust is held while the nearest contact is further than this.
const CLOSE_IN_RANGE: f32 = 500.0;

const THRUST_KEY: &str = "w";

#[derive(Debug, Default)]
pub struct Autopilot {
    engaged: bool,
    thrusting: bool,
    restarts: u32,
}

impl Autopilot {
    pub fn restarts(&self) -> u32 {
        self.restarts
    }

    /// Commands to send in response to `snapshot`.
    pub fn next_commands(&mut self, snapshot: &GameStateSnapshot) -> Vec<PlayerCommand> {
        let mut commands = Vec::new();
        if !self.engaged {
            self.engaged = true;
            commands.push(PlayerCommand::PointerLockChanged { locked: true });
        }

        if snapshot.is_game_over {
            self.restarts += 1;
            commands.push(PlayerCommand::Restart);
            return commands;
        }
        if snapshot.phase != GamePhase::Running {
            return commands;
        }

        let Some(target) = nearest_contact(snapshot) else {
            self.set_thrust(true, &mut commands);
            return commands;
        };

        let distance = target.position.distance(snapshot.player.position);
        self.set_thrust(distance > CLOSE_IN_RANGE, &mut commands);
        commands.extend(steer(snapshot, target.position));
        if distance < FIRE_RANGE && off_boresight(snapshot, target.position) < FIRE_CONE {
            commands.push(PlayerCommand::PointerDown);
        }
        commands
    }

    fn set_thrust(&mut self, on: bool, commands: &mut Vec<PlayerCommand>) {
        if on == self.thrusting {
            return;
        }
        self.thrusting = on;
        let key = THRUST_KEY.to_string();
        commands.push(if on {
            PlayerCommand::KeyDown { key }
        } else {
            PlayerCommand::KeyUp { key }
        });
    }
}

/// Enemy behind the radar blip closest to the scope centre.
pub fn nearest_contact(snapshot: &GameStateSnapshot) -> Option<&EnemyView> {
    let blip = snapshot.radar.iter().min_by(|a, b| {
        let da = a.x * a.x + a.z * a.z;
        let db = b.x * b.x + b.z * b.z;
        da.total_cmp(&db)
    })?;
    snapshot.enemies.iter().find(|e| e.id == blip.enemy_id)
}

/// Pointer movement that turns the nose toward `target`.
pub fn steer(snapshot: &GameStateSnapshot, target: Vec3) -> Option<PlayerCommand> {
    let player = &snapshot.player;
    let (pitch, yaw) = heading_to(target - player.position)?;

    let yaw_error = wrap_angle(yaw - player.rotation.yaw);
    let pitch_error = pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT) - player.rotation.pitch;

    // Yaw and pitch both grow with negative pointer deltas.
    let dx = (-yaw_error * STEER_GAIN).clamp(-MAX_POINTER_STEP, MAX_POINTER_STEP);
    let dy = (-pitch_error * STEER_GAIN).clamp(-MAX_POINTER_STEP, MAX_POINTER_STEP);
    if dx == 0.0 && dy == 0.0 {
        return None;
    }
    Some(PlayerCommand::PointerMove { dx, dy })
}

/// Angle between the nose and the line to `target`.
pub fn off_boresight(snapshot: &GameStateSnapshot, target: Vec3) -> f32 {
    let to_target = (target - snapshot.player.position).normalize_or_zero();
    if to_target == Vec3::ZERO {
        return 0.0;
    }
    snapshot.player.rotation.forward().angle_between(to_target)
}

/// Pitch and yaw whose forward axis points along `dir`, keeping pitch
/// inside +/- 90 degrees. `None` for a zero direction.
fn heading_to(dir: Vec3) -> Option<(f32, f32)> {
    let d = dir.normalize_or_zero();
    if d == Vec3::ZERO {
        return None;
    }
    // forward(pitch, yaw) = (-sin yaw, cos yaw sin pitch, -cos yaw cos pitch)
    let cos_yaw = (d.y * d.y + d.z * d.z).sqrt().copysign(-d.z);
    let yaw = (-d.x).atan2(cos_yaw);
    let pitch = if d.z <= 0.0 {
        d.y.atan2(-d.z)
    } else {
        (-d.y).atan2(d.z)
    };
    Some((pitch, yaw))
}

fn wrap_angle(a: f32) -> f32 {
    (a + PI).rem_euclid(TAU) - PI
}
