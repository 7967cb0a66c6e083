//! Player flight model.
//!
//! Frame-coupled integration: every call is one tick, velocities are in
//! units per tick and nothing is scaled by elapsed time.

use glam::Vec3;

use interdictor_core::components::{InputAccumulator, MovementKeys, PlayerState};
use interdictor_core::constants::*;
use interdictor_core::types::lerp;

/// Advance the player craft by one tick.
///
/// Rotation velocity is applied and then decayed by friction, giving
/// inertial steering. Velocity eases toward the thrust target instead of
/// snapping to it.
pub fn integrate(player: &mut PlayerState, input: &mut InputAccumulator) {
    // 1. Rotation
    let rv = input.rotation_velocity;
    player.rotation.yaw += rv.y;
    player.rotation.pitch = (player.rotation.pitch + rv.x).clamp(-PITCH_LIMIT, PITCH_LIMIT);

    // 2. Friction
    input.rotation_velocity *= ROTATION_FRICTION;

    // 3. Axes
    let forward = player.rotation.forward();
    let right = player.rotation.right();

    // 4. Desired direction + banking
    let held = input.held;
    let mut move_dir = Vec3::ZERO;
    if held.contains(MovementKeys::FORWARD) {
        move_dir += forward;
    }
    if held.contains(MovementKeys::BACK) {
        move_dir -= forward;
    }
    if held.contains(MovementKeys::STRAFE_LEFT) {
        move_dir -= right;
    }
    if held.contains(MovementKeys::STRAFE_RIGHT) {
        move_dir += right;
    }

    let roll_target = strafe_roll(held) - input.rotation_velocity.y * BANK_ROLL_GAIN;
    player.visual_roll = lerp(player.visual_roll, roll_target, ROLL_BLEND);

    // 5. Velocity
    let target_speed = if held.is_empty() {
        IDLE_SPEED
    } else {
        THRUST_SPEED
    };
    let target_velocity = move_dir.normalize_or_zero() * target_speed;
    player.velocity = player.velocity.lerp(target_velocity, VELOCITY_BLEND);

    // 6. Position
    player.position += player.velocity;
}

/// Roll bias from strafing. Opposite strafe keys cancel.
fn strafe_roll(held: MovementKeys) -> f32 {
    match (
        held.contains(MovementKeys::STRAFE_LEFT),
        held.contains(MovementKeys::STRAFE_RIGHT),
    ) {
        (true, false) => STRAFE_ROLL,
        (false, true) => -STRAFE_ROLL,
        _ => 0.0,
    }
}

/// Display speed metric: 1.0 at full thrust speed.
pub fn speed_metric(player: &PlayerState) -> f32 {
    player.velocity.length() / THRUST_SPEED
}
