//! Radio chatter: turns combat events into command-channel lines.
//!
//! The simulation never waits on this. Combat events are drained from the
//! engine into a channel; the dispatcher asks a `NarrativeService` for a
//! line per event and posts the result back to the game loop as a
//! `GameLoopCommand::RadioChatter`. Replies can arrive late or out of order;
//! the engine drops lines from a previous session.

use std::sync::mpsc as std_mpsc;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use thiserror::Error;
use tokio::sync::mpsc;
use tracing::{debug, warn};

use interdictor_core::constants::{RADIO_FALLBACK_EMPTY, RADIO_FALLBACK_ERROR};
use interdictor_core::events::CombatEvent;

use crate::state::GameLoopCommand;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum NarrativeError {
    #[error("narrative request timed out")]
    Timeout,
    #[error("narrative transport failed: {0}")]
    Transport(String),
    #[error("narrative service returned no text")]
    Empty,
}

/// Port for whatever produces radio lines (a text generator, a script, ...).
#[async_trait]
pub trait NarrativeService: Send + Sync {
    async fn request_chatter(&self, event: &str) -> Result<String, NarrativeError>;
}

/// Offline service picking from a fixed set of lines.
pub struct CannedChatter {
    lines: Vec<String>,
    rng: Mutex<ChaCha8Rng>,
}

const CANNED_LINES: &[&str] = &[
    "Command: Splash one. Reform and sweep the sector.",
    "Command: Kill confirmed. More contacts inbound.",
    "Command: Good shooting. Keep your speed up.",
    "Command: Target down. Check your six.",
    "Command: Hostile eliminated. Stay sharp, pilot.",
];

impl CannedChatter {
    pub fn new(seed: u64) -> Self {
        Self::with_lines(seed, CANNED_LINES.iter().map(|s| s.to_string()).collect())
    }

    pub fn with_lines(seed: u64, lines: Vec<String>) -> Self {
        Self {
            lines,
            rng: Mutex::new(ChaCha8Rng::seed_from_u64(seed)),
        }
    }
}

#[async_trait]
impl NarrativeService for CannedChatter {
    async fn request_chatter(&self, _event: &str) -> Result<String, NarrativeError> {
        let mut rng = self
            .rng
            .lock()
            .map_err(|e| NarrativeError::Transport(e.to_string()))?;
        self.lines
            .choose(&mut *rng)
            .cloned()
            .ok_or(NarrativeError::Empty)
    }
}

/// Ask `service` for a line, bounded by `timeout`. Surrounding whitespace is
/// stripped and a blank reply counts as `Empty`.
pub async fn fetch_line(
    service: &dyn NarrativeService,
    event: &str,
    timeout: Duration,
) -> Result<String, NarrativeError> {
    let line = tokio::time::timeout(timeout, service.request_chatter(event))
        .await
        .map_err(|_| NarrativeError::Timeout)??;
    let line = line.trim();
    if line.is_empty() {
        return Err(NarrativeError::Empty);
    }
    Ok(line.to_string())
}

/// Line to show for a request outcome. Failures never reach the player as
/// errors, only as one of the fallback lines.
pub fn line_or_fallback(result: Result<String, NarrativeError>) -> String {
    match result {
        Ok(line) => line,
        Err(NarrativeError::Empty) => RADIO_FALLBACK_EMPTY.to_string(),
        Err(err) => {
            warn!(error = %err, "radio chatter unavailable");
            RADIO_FALLBACK_ERROR.to_string()
        }
    }
}

/// Consume combat events until the channel closes. Each event is handled
/// on its own task, so a slow reply never holds up later ones.
pub async fn run_dispatcher(
    service: Arc<dyn NarrativeService>,
    mut events: mpsc::UnboundedReceiver<CombatEvent>,
    loop_tx: std_mpsc::Sender<GameLoopCommand>,
    timeout: Duration,
) {
    let mut in_flight = tokio::task::JoinSet::new();

    while let Some(event) = events.recv().await {
        let service = Arc::clone(&service);
        let loop_tx = loop_tx.clone();
        in_flight.spawn(async move {
            let result = fetch_line(service.as_ref(), &event.description, timeout).await;
            let line = line_or_fallback(result);
            debug!(session = event.session, tick = event.tick, %line, "radio chatter");
            // The loop may already be gone during shutdown.
            let _ = loop_tx.send(GameLoopCommand::RadioChatter {
                session: event.session,
                line,
            });
        });

        while in_flight.try_join_next().is_some() {}
    }

    while in_flight.join_next().await.is_some() {}
    debug!("narrative dispatcher stopped");
}
