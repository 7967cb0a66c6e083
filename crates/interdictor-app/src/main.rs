use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;
use tokio::time::{sleep_until, Instant};

use interdictor_app::autopilot::Autopilot;
use interdictor_app::config::AppConfig;
use interdictor_app::game_loop::spawn_game_loop;
use interdictor_app::narrative::{run_dispatcher, CannedChatter, NarrativeService};
use interdictor_sim::engine::SimConfig;

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .init();
    }

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();
    init_tracing();

    let config = AppConfig::from_env().context("reading configuration")?;
    tracing::info!(?config, "starting headless run");

    // combat_tx/rx: kills flow from the game loop to the narrative dispatcher.
    let (combat_tx, combat_rx) = mpsc::unbounded_channel();

    let handle = spawn_game_loop(
        SimConfig {
            seed: config.seed,
            enemy_fire: config.enemy_fire,
        },
        config.tick_interval(),
        Some(combat_tx),
    )
    .context("spawning game loop thread")?;

    let service: Arc<dyn NarrativeService> = Arc::new(CannedChatter::new(config.seed));
    let dispatcher = tokio::spawn(run_dispatcher(
        service,
        combat_rx,
        handle.command_sender(),
        config.narrative_timeout,
    ));

    // Fly until the run time is up.
    let mut snapshots = handle.subscribe();
    let mut pilot = Autopilot::default();
    let deadline = Instant::now() + config.run_for;
    loop {
        tokio::select! {
            changed = snapshots.changed() => {
                if changed.is_err() {
                    tracing::warn!("game loop ended early");
                    break;
                }
                let snapshot = snapshots.borrow_and_update().clone();
                for command in pilot.next_commands(&snapshot) {
                    handle.send(command);
                }
            }
            _ = sleep_until(deadline) => break,
        }
    }

    let final_snapshot = snapshots.borrow().clone();
    tokio::task::spawn_blocking(move || handle.shutdown())
        .await
        .context("joining game loop")?
        .map_err(|_| anyhow::anyhow!("game loop thread panicked"))?;
    dispatcher.await.context("joining narrative dispatcher")?;

    let json = serde_json::to_string(final_snapshot.as_ref())?;
    tracing::debug!(snapshot = %json, "final snapshot");
    tracing::info!(
        score = final_snapshot.score,
        health = final_snapshot.health,
        ticks = final_snapshot.clock.tick,
        restarts = pilot.restarts(),
        radio = ?final_snapshot.radio_chatter,
        "run complete"
    );
    Ok(())
}
