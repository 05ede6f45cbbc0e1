//! Driver configuration
//!
//! Read once at startup from the environment; unset or malformed values fall
//! back to the defaults.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_PERIOD_MS;

/// Driver settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Seed for the session RNG
    pub seed: u64,
    /// Milliseconds between clock events
    pub tick_period_ms: u64,
    /// Finished runs before the driver exits
    pub max_sessions: u32,
    /// Emit the final snapshot and leaderboard as JSON on exit
    pub dump_json: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            seed: 7,
            tick_period_ms: TICK_PERIOD_MS,
            max_sessions: 1,
            dump_json: true,
        }
    }
}

impl Config {
    /// Build a config from `HOPCROSS_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            seed: env_or("HOPCROSS_SEED", defaults.seed),
            tick_period_ms: env_or("HOPCROSS_TICK_MS", defaults.tick_period_ms),
            max_sessions: env_or("HOPCROSS_MAX_SESSIONS", defaults.max_sessions),
            dump_json: env_or("HOPCROSS_DUMP_JSON", defaults.dump_json),
        }
    }
}

fn env_or<T: FromStr + Copy>(name: &str, default: T) -> T {
    match std::env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(value) => value,
            Err(_) => {
                log::warn!("ignoring unparseable {name}={raw:?}");
                default
            }
        },
        Err(_) => default,
    }
}
