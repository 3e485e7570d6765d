//! Session configuration

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::grid::CELLS_PER_BOT;

/// What to do when a bot fails to decide or returns an invalid move
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FailurePolicy {
    /// Abort the session with an error naming the bot
    Strict,
    /// Treat the bot's move as STAY for that round and carry on
    #[default]
    Lenient,
}

/// Configuration for a single session
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Number of rounds to run
    pub rounds: u32,
    /// Bot failure handling
    pub policy: FailurePolicy,
    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,
    /// Grid cells reserved per bot when sizing the grid
    pub cells_per_bot: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            rounds: 100,
            policy: FailurePolicy::Lenient,
            seed: None,
            cells_per_bot: CELLS_PER_BOT,
        }
    }
}

impl SessionConfig {
    /// Create config running the given number of rounds
    pub fn new(rounds: u32) -> Self {
        Self {
            rounds,
            ..Default::default()
        }
    }

    /// Abort on bot failures
    pub fn strict(mut self) -> Self {
        self.policy = FailurePolicy::Strict;
        self
    }

    /// Substitute STAY on bot failures
    pub fn lenient(mut self) -> Self {
        self.policy = FailurePolicy::Lenient;
        self
    }

    /// Set random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set grid cells per bot
    pub fn with_cells_per_bot(mut self, cells_per_bot: usize) -> Self {
        self.cells_per_bot = cells_per_bot;
        self
    }

    /// Parse from a JSON string. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load from a JSON file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_config_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.rounds, 100);
        assert_eq!(config.policy, FailurePolicy::Lenient);
        assert_eq!(config.seed, None);
        assert_eq!(config.cells_per_bot, 64);
    }

    #[test]
    fn test_builder_methods() {
        let config = SessionConfig::new(20).strict().with_seed(7).with_cells_per_bot(9);
        assert_eq!(config.rounds, 20);
        assert_eq!(config.policy, FailurePolicy::Strict);
        assert_eq!(config.seed, Some(7));
        assert_eq!(config.cells_per_bot, 9);
        assert_eq!(config.lenient().policy, FailurePolicy::Lenient);
    }

    #[test]
    fn test_from_json_partial() {
        let config = SessionConfig::from_json(r#"{"rounds": 12, "policy": "strict"}"#).unwrap();
        assert_eq!(config.rounds, 12);
        assert_eq!(config.policy, FailurePolicy::Strict);
        assert_eq!(config.cells_per_bot, 64);
    }

    #[test]
    fn test_from_json_rejects_unknown_policy() {
        let err = SessionConfig::from_json(r#"{"policy": "harsh"}"#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = SessionConfig::load(Path::new("/nonexistent/tilewar.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
