//! Runtime configuration for the headless runner.
//!
//! Read from the process environment (after `.env` is loaded). Gameplay
//! tuning lives in `interdictor_core::constants`, not here.

use std::time::Duration;

use thiserror::Error;

pub const SEED_VAR: &str = "INTERDICTOR_SEED";
pub const TICK_HZ_VAR: &str = "INTERDICTOR_TICK_HZ";
pub const NARRATIVE_TIMEOUT_VAR: &str = "INTERDICTOR_NARRATIVE_TIMEOUT_MS";
pub const RUN_SECS_VAR: &str = "INTERDICTOR_RUN_SECS";
pub const ENEMY_FIRE_VAR: &str = "INTERDICTOR_ENEMY_FIRE";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} has invalid value {value:?}")]
    Invalid { key: &'static str, value: String },
    #[error("{key} must be greater than zero")]
    Zero { key: &'static str },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub seed: u64,
    pub tick_hz: u32,
    pub narrative_timeout: Duration,
    pub run_for: Duration,
    pub enemy_fire: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            tick_hz: interdictor_core::constants::TICK_RATE,
            narrative_timeout: Duration::from_millis(4000),
            run_for: Duration::from_secs(30),
            enemy_fire: true,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys take their default.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let seed = parse_or(&lookup, SEED_VAR, defaults.seed)?;
        let tick_hz: u32 = parse_or(&lookup, TICK_HZ_VAR, defaults.tick_hz)?;
        if tick_hz == 0 {
            return Err(ConfigError::Zero { key: TICK_HZ_VAR });
        }
        let timeout_ms = parse_or(
            &lookup,
            NARRATIVE_TIMEOUT_VAR,
            defaults.narrative_timeout.as_millis() as u64,
        )?;
        let run_secs = parse_or(&lookup, RUN_SECS_VAR, defaults.run_for.as_secs())?;
        let enemy_fire = match lookup(ENEMY_FIRE_VAR) {
            None => defaults.enemy_fire,
            Some(raw) => parse_flag(&raw).ok_or(ConfigError::Invalid {
                key: ENEMY_FIRE_VAR,
                value: raw,
            })?,
        };

        Ok(Self {
            seed,
            tick_hz,
            narrative_timeout: Duration::from_millis(timeout_ms),
            run_for: Duration::from_secs(run_secs),
            enemy_fire,
        })
    }

    /// Wall time between scheduler ticks.
    pub fn tick_interval(&self) -> Duration {
        Duration::from_nanos(1_000_000_000 / u64::from(self.tick_hz))
    }
}

fn parse_or<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
    default: T,
) -> Result<T, ConfigError> {
    match lookup(key) {
        None => Ok(default),
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { key, value: raw }),
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
