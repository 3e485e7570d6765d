//! Error types

use std::path::PathBuf;

use crate::grid::{BotId, Position};

/// Errors that abort a session run
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// A bot produced something other than one of the five moves
    #[error("bot {name} (id {id}) returned an invalid move: {token:?}")]
    InvalidMove {
        id: BotId,
        name: String,
        token: String,
    },

    /// A bot failed or panicked while deciding its move
    #[error("bot {name} (id {id}) failed to decide a move: {reason}")]
    DecisionFailure {
        id: BotId,
        name: String,
        reason: String,
    },

    /// The session could not be set up
    #[error(transparent)]
    Setup(#[from] SetupError),

    /// A strict-mode failure already ended this session
    #[error("session aborted in round {round}; set it up again to start over")]
    Aborted { round: u32 },
}

impl EngineError {
    /// Identity of the offending bot, if the error came from one
    pub fn bot_id(&self) -> Option<BotId> {
        match self {
            EngineError::InvalidMove { id, .. } | EngineError::DecisionFailure { id, .. } => {
                Some(*id)
            }
            EngineError::Setup(_) | EngineError::Aborted { .. } => None,
        }
    }

    /// Name of the offending bot, if the error came from one
    pub fn bot_name(&self) -> Option<&str> {
        match self {
            EngineError::InvalidMove { name, .. } | EngineError::DecisionFailure { name, .. } => {
                Some(name)
            }
            EngineError::Setup(_) | EngineError::Aborted { .. } => None,
        }
    }
}

/// Violated preconditions when building a session or world
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SetupError {
    #[error("at least one bot must be registered")]
    NoBots,

    #[error("cells per bot must be at least 1")]
    InvalidCellsPerBot,

    #[error("bot identity 0 is reserved for unclaimed tiles")]
    ReservedIdentity,

    #[error("bot identity {0} is already assigned")]
    DuplicateIdentity(BotId),

    #[error("bot {id} placed at ({}, {}) outside a grid of length {length}", .position.x, .position.y)]
    OutOfBounds {
        id: BotId,
        position: Position,
        length: usize,
    },
}

/// Failure to load a session configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}
