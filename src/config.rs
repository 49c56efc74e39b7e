//! Gameplay tuning.
//!
//! Every field has a default matching the stock game, so a config file only
//! needs the values it changes.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::GameError;

/// Environment variable the GUI reads a config path from.
pub const CONFIG_ENV_VAR: &str = "HULOAD_CONFIG";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Grid seed; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub starting_fuel: i32,
    /// Fuel spent per directional input, blocked or not.
    pub move_fuel_cost: i32,
    pub fuel_drain_per_tick: i32,
    pub tick_interval_ms: u64,
    /// Minimum time between two automatic falls.
    pub auto_fall_interval_ms: u64,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: None,
            starting_fuel: 10_000,
            move_fuel_cost: 100,
            fuel_drain_per_tick: 1,
            tick_interval_ms: 400,
            auto_fall_interval_ms: 1_000,
        }
    }
}

impl GameConfig {
    pub fn from_json(s: &str) -> Result<Self, GameError> {
        Ok(serde_json::from_str(s)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, GameError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json(&raw)
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    pub fn auto_fall_interval(&self) -> Duration {
        Duration::from_millis(self.auto_fall_interval_ms)
    }
}
