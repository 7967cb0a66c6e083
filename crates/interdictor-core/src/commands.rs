//! Player commands sent from the host shell to the simulation.
//!
//! Commands are queued and processed at the next tick boundary. Commands
//! that make no sense in the current phase are dropped without error.

use serde::{Deserialize, Serialize};

/// All raw input and control events the simulation accepts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum PlayerCommand {
    // --- Keyboard ---
    /// A key went down. Only `w`/`a`/`s`/`d` have an effect.
    KeyDown { key: String },
    /// A key went up.
    KeyUp { key: String },

    // --- Pointer ---
    /// Relative pointer movement since the last event, in pixels.
    PointerMove { dx: f32, dy: f32 },
    /// Primary button pressed: fires, or asks the shell for pointer lock.
    PointerDown,
    /// The host acquired or released pointer lock.
    PointerLockChanged { locked: bool },

    // --- Session ---
    /// Reset every piece of game state to its initial value.
    Restart,
}
