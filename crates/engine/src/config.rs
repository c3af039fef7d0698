//! Runtime configuration from `TETRIS_*` environment variables.

use std::time::Duration;

use log::{warn, LevelFilter};

use crate::types::{GRAVITY_MS, TICK_MS};

/// Loop timing, seed and logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Input polling / render interval
    pub tick: Duration,
    /// Time between gravity ticks
    pub gravity_interval: Duration,
    /// Fixed piece generator seed; `None` derives one from the clock
    pub seed: Option<u32>,
    /// Log file; logging is off when `None`
    pub log_path: Option<String>,
    pub log_level: LevelFilter,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(TICK_MS as u64),
            gravity_interval: Duration::from_millis(GRAVITY_MS as u64),
            seed: None,
            log_path: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GameConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Create from an arbitrary key lookup; unset or invalid values keep defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let tick = positive_ms(&lookup, "TETRIS_TICK_MS").unwrap_or(defaults.tick);
        let gravity_interval =
            positive_ms(&lookup, "TETRIS_GRAVITY_MS").unwrap_or(defaults.gravity_interval);

        let seed = lookup("TETRIS_SEED").and_then(|s| match s.trim().parse::<u32>() {
            Ok(seed) => Some(seed),
            Err(_) => {
                warn!("ignoring TETRIS_SEED={:?}: not a u32", s);
                None
            }
        });

        let log_path = lookup("TETRIS_LOG_PATH")
            .map(|s| s.trim().to_string())
            .and_then(|s| if s.is_empty() { None } else { Some(s) });

        let log_level = lookup("TETRIS_LOG_LEVEL")
            .and_then(|s| s.trim().parse::<LevelFilter>().ok())
            .unwrap_or(defaults.log_level);

        Self {
            tick,
            gravity_interval,
            seed,
            log_path,
            log_level,
        }
    }
}

fn positive_ms(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<Duration> {
    let raw = lookup(key)?;
    match raw.trim().parse::<u64>() {
        Ok(ms) if ms > 0 => Some(Duration::from_millis(ms)),
        _ => {
            warn!("ignoring {}={:?}: expected a positive number of milliseconds", key, raw);
            None
        }
    }
}
