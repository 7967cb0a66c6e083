//! Raw device input folded into the input accumulator.
//!
//! Nothing here can fail: unknown keys and repeated presses are no-ops.

use glam::Vec2;

use interdictor_core::components::{InputAccumulator, MovementKeys};
use interdictor_core::constants::POINTER_SENSITIVITY;
use interdictor_core::enums::MovementKey;

/// Mark a key as held. Returns true if it is a movement key.
pub fn key_down(input: &mut InputAccumulator, key: &str) -> bool {
    match MovementKey::from_key_name(key) {
        Some(key) => {
            input.held.insert(MovementKeys::from(key));
            true
        }
        None => false,
    }
}

/// Mark a key as released. Returns true if it is a movement key.
pub fn key_up(input: &mut InputAccumulator, key: &str) -> bool {
    match MovementKey::from_key_name(key) {
        Some(key) => {
            input.held.remove(MovementKeys::from(key));
            true
        }
        None => false,
    }
}

/// Accumulate pointer movement into rotation velocity.
///
/// Mouse-look convention: moving right yaws right, moving down pitches the
/// nose down, so both axes are subtracted.
pub fn pointer_move(input: &mut InputAccumulator, dx: f32, dy: f32) {
    if !dx.is_finite() || !dy.is_finite() {
        return;
    }
    input.rotation_velocity -= Vec2::new(dy, dx) * POINTER_SENSITIVITY;
}
