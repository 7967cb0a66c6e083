//! Fundamental geometric and simulation types.

use glam::{EulerRot, Quat, Vec3};
use serde::{Deserialize, Serialize};

/// World-space forward axis of an unrotated craft.
pub const FORWARD: Vec3 = Vec3::new(0.0, 0.0, -1.0);

/// World-space right axis of an unrotated craft.
pub const RIGHT: Vec3 = Vec3::new(1.0, 0.0, 0.0);

/// Euler rotation in radians, applied in intrinsic X-Y-Z order.
/// x = pitch, y = yaw, z = roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rotation {
    pub pitch: f32,
    pub yaw: f32,
    pub roll: f32,
}

/// Simulation clock. Physics is frame-coupled; the millisecond clock only
/// drives timestamps (fire rate, lifetimes).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimClock {
    /// Number of simulation ticks run since the last restart.
    pub tick: u64,
    /// Elapsed simulation time in milliseconds.
    pub now_ms: u64,
}

impl Rotation {
    pub fn new(pitch: f32, yaw: f32, roll: f32) -> Self {
        Self { pitch, yaw, roll }
    }

    pub fn quat(&self) -> Quat {
        Quat::from_euler(EulerRot::XYZ, self.pitch, self.yaw, self.roll)
    }

    /// Rotate a craft-local vector into world space.
    pub fn apply(&self, v: Vec3) -> Vec3 {
        self.quat() * v
    }

    /// Rotate a world-space vector into craft-local space.
    pub fn apply_inverse(&self, v: Vec3) -> Vec3 {
        self.quat().inverse() * v
    }

    pub fn forward(&self) -> Vec3 {
        self.apply(FORWARD)
    }

    pub fn right(&self) -> Vec3 {
        self.apply(RIGHT)
    }

    /// Facing that points along `dir`, matching the convention used for
    /// enemy craft: pitch from (y, z), yaw from (x, z), no roll.
    pub fn facing(dir: Vec3) -> Self {
        Self {
            pitch: dir.y.atan2(dir.z),
            yaw: dir.x.atan2(dir.z),
            roll: 0.0,
        }
    }
}

impl SimClock {
    /// Advance by one tick covering `elapsed_ms` of wall time.
    pub fn advance(&mut self, elapsed_ms: u64) {
        self.tick += 1;
        self.now_ms += elapsed_ms;
    }

    /// Age of something stamped at `stamp_ms`, saturating at zero.
    pub fn age_of(&self, stamp_ms: u64) -> u64 {
        self.now_ms.saturating_sub(stamp_ms)
    }
}

/// Scalar linear interpolation.
pub fn lerp(from: f32, to: f32, t: f32) -> f32 {
    from + (to - from) * t
}
