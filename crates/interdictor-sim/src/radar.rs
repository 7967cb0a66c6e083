//! Radar projection of enemy craft into player-local display coordinates.
//!
//! Read-only: used by the snapshot builder and by anything that wants a
//! player-relative picture (the headless autopilot, for one).

use glam::Vec3;

use interdictor_core::components::PlayerState;
use interdictor_core::constants::*;
use interdictor_core::state::RadarBlip;

/// Project one enemy onto the radar display.
///
/// The offset to the enemy is rotated into the player's frame, dropped onto
/// the horizontal plane, and scaled so `RADAR_MAX_RANGE` lands on
/// `RADAR_DISPLAY_RADIUS`. Anything past `RADAR_CLAMP_RADIUS` is pinned to
/// the rim and flagged rather than dropped.
pub fn project(player: &PlayerState, enemy_id: u64, enemy_position: Vec3) -> RadarBlip {
    let relative = player
        .rotation
        .apply_inverse(enemy_position - player.position);

    let scale = RADAR_DISPLAY_RADIUS / RADAR_MAX_RANGE;
    let x = relative.x * scale;
    let z = -relative.z * scale;

    let dist = (x * x + z * z).sqrt();
    if dist > RADAR_CLAMP_RADIUS {
        RadarBlip {
            enemy_id,
            x: x / dist * RADAR_CLAMP_RADIUS,
            z: z / dist * RADAR_CLAMP_RADIUS,
            out_of_range: true,
        }
    } else {
        RadarBlip {
            enemy_id,
            x,
            z,
            out_of_range: false,
        }
    }
}
