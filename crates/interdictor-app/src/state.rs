//! Messages and shared handles passed between the runner, the game loop
//! thread and the narrative dispatcher.

use std::sync::Arc;

use tokio::sync::watch;

use interdictor_core::commands::PlayerCommand;
use interdictor_core::state::GameStateSnapshot;

/// Commands sent to the game loop thread.
#[derive(Debug, Clone, PartialEq)]
pub enum GameLoopCommand {
    /// A player command to forward to the simulation engine.
    Player(PlayerCommand),
    /// A radio line produced for a combat event of `session`.
    RadioChatter { session: u64, line: String },
    /// Shut down the game loop thread gracefully.
    Shutdown,
}

/// Latest published snapshot. Replaced whole after every tick, so readers
/// never observe a half-updated state.
pub type SnapshotReceiver = watch::Receiver<Arc<GameStateSnapshot>>;
pub type SnapshotSender = watch::Sender<Arc<GameStateSnapshot>>;

/// Channel pair seeded with the initial snapshot.
pub fn snapshot_channel() -> (SnapshotSender, SnapshotReceiver) {
    watch::channel(Arc::new(GameStateSnapshot::default()))
}
