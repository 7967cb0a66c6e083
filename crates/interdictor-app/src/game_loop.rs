//! Game loop thread: runs the simulation engine at a fixed cadence and
//! publishes snapshots.
//!
//! The engine is created inside this thread because it's cleaner for ownership.
//! Commands arrive via `mpsc` channel. Snapshots are published through a
//! `watch` channel; combat events go out to the narrative dispatcher.

use std::sync::mpsc;
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::{Duration, Instant};

use tokio::sync::mpsc as tokio_mpsc;
use tracing::{debug, info};

use interdictor_core::commands::PlayerCommand;
use interdictor_core::events::CombatEvent;
use interdictor_sim::engine::{SimConfig, SimulationEngine};

use crate::state::{snapshot_channel, GameLoopCommand, SnapshotReceiver, SnapshotSender};

/// Owner-side handle to a running game loop.
pub struct GameLoopHandle {
    commands: mpsc::Sender<GameLoopCommand>,
    snapshots: SnapshotReceiver,
    thread: Option<JoinHandle<()>>,
}

impl GameLoopHandle {
    /// Forward a player command to the engine.
    ///
    /// Returns false once the loop has stopped.
    pub fn send(&self, command: PlayerCommand) -> bool {
        self.commands.send(GameLoopCommand::Player(command)).is_ok()
    }

    /// Sender for other producers (the narrative dispatcher).
    pub fn command_sender(&self) -> mpsc::Sender<GameLoopCommand> {
        self.commands.clone()
    }

    pub fn subscribe(&self) -> SnapshotReceiver {
        self.snapshots.clone()
    }

    /// Stop ticking and wait for the thread to exit. No tick runs after this
    /// returns.
    pub fn shutdown(mut self) -> std::thread::Result<()> {
        self.stop()
    }

    fn stop(&mut self) -> std::thread::Result<()> {
        let _ = self.commands.send(GameLoopCommand::Shutdown);
        match self.thread.take() {
            Some(thread) => thread.join(),
            None => Ok(()),
        }
    }
}

impl Drop for GameLoopHandle {
    fn drop(&mut self) {
        let _ = self.stop();
    }
}

/// Spawns the game loop in a new thread.
///
/// Combat events are forwarded to `combat_tx` when given.
pub fn spawn_game_loop(
    config: SimConfig,
    tick_interval: Duration,
    combat_tx: Option<tokio_mpsc::UnboundedSender<CombatEvent>>,
) -> std::io::Result<GameLoopHandle> {
    let (cmd_tx, cmd_rx) = mpsc::channel::<GameLoopCommand>();
    let (snapshot_tx, snapshot_rx) = snapshot_channel();

    let thread = std::thread::Builder::new()
        .name("interdictor-game-loop".into())
        .spawn(move || {
            run_game_loop(config, tick_interval, cmd_rx, snapshot_tx, combat_tx);
        })?;

    Ok(GameLoopHandle {
        commands: cmd_tx,
        snapshots: snapshot_rx,
        thread: Some(thread),
    })
}

/// The game loop. Runs until Shutdown command or channel disconnect.
fn run_game_loop(
    config: SimConfig,
    tick_interval: Duration,
    cmd_rx: mpsc::Receiver<GameLoopCommand>,
    snapshot_tx: SnapshotSender,
    combat_tx: Option<tokio_mpsc::UnboundedSender<CombatEvent>>,
) {
    info!(seed = config.seed, ?tick_interval, "game loop started");
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();
    let mut last_tick = Instant::now();

    loop {
        // 1. Drain all pending commands
        loop {
            match cmd_rx.try_recv() {
                Ok(GameLoopCommand::Player(cmd)) => engine.queue_command(cmd),
                Ok(GameLoopCommand::RadioChatter { session, line }) => {
                    engine.deliver_chatter(session, line);
                }
                Ok(GameLoopCommand::Shutdown) | Err(mpsc::TryRecvError::Disconnected) => {
                    info!(tick = engine.clock().tick, "game loop stopped");
                    return;
                }
                Err(mpsc::TryRecvError::Empty) => break,
            }
        }

        // 2. Advance one tick by the whole milliseconds elapsed; the
        //    remainder carries into the next tick.
        let elapsed_ms = last_tick.elapsed().as_millis() as u64;
        last_tick += Duration::from_millis(elapsed_ms);
        let snapshot = engine.tick(elapsed_ms);

        // 3. Hand combat events to the narrative side
        let combat = engine.drain_combat_events();
        if let Some(tx) = &combat_tx {
            for event in combat {
                if tx.send(event).is_err() {
                    debug!("narrative dispatcher gone, combat event dropped");
                }
            }
        }

        // 4. Publish
        snapshot_tx.send_replace(Arc::new(snapshot));

        // 5. Sleep until next tick
        next_tick_time += tick_interval;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > tick_interval * 2 {
            // Too far behind, reset to avoid a catch-up spiral
            next_tick_time = now;
        }
    }
}
