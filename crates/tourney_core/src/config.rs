//! # Tournament Configuration
//!
//! Points awarded per result. The default is the two-point system
//! (win 2, draw 1, loss 0) that standings points are defined by; other
//! presets exist for events that score differently.
//!
//! ```rust
//! use tourney_core::config::{ScoringConfig, TournamentConfig};
//!
//! let config = TournamentConfig::default();
//! assert_eq!(config.scoring, ScoringConfig::two_point());
//! ```

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ScoringConfig {
    pub points_per_win: u32,
    pub points_per_draw: u32,
    #[serde(default)]
    pub points_per_loss: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self::two_point()
    }
}

impl ScoringConfig {
    pub fn two_point() -> Self {
        Self { points_per_win: 2, points_per_draw: 1, points_per_loss: 0 }
    }

    pub fn three_point() -> Self {
        Self { points_per_win: 3, points_per_draw: 1, points_per_loss: 0 }
    }

    /// Saturates at `u32::MAX`.
    pub fn points_for(&self, wins: u32, draws: u32, losses: u32) -> u32 {
        wins.saturating_mul(self.points_per_win)
            .saturating_add(draws.saturating_mul(self.points_per_draw))
            .saturating_add(losses.saturating_mul(self.points_per_loss))
    }

    /// A win must be worth more than a draw, and a draw at least a loss.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.points_per_win <= self.points_per_draw {
            return Err(ConfigError::InvalidScoring(format!(
                "win ({}) must be worth more than a draw ({})",
                self.points_per_win, self.points_per_draw
            )));
        }
        if self.points_per_draw < self.points_per_loss {
            return Err(ConfigError::InvalidScoring(format!(
                "draw ({}) must be worth at least a loss ({})",
                self.points_per_draw, self.points_per_loss
            )));
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct TournamentConfig {
    #[serde(default)]
    pub scoring: ScoringConfig,
}

impl TournamentConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: TournamentConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.scoring.validate()
    }

    pub fn load_from_path(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config = Self::from_json(&content)
            .with_context(|| format!("Failed to load config file: {}", path.display()))?;
        tracing::info!(path = %path.display(), scoring = ?config.scoring, "tournament config loaded");
        Ok(config)
    }
}
