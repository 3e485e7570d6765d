//! Bot decision capability
//!
//! A bot sees the grid and every bot's position through shared references
//! and answers with one [`Move`]. Everything it wants to remember between
//! rounds goes into its [`BotStorage`] (or its own fields: each session
//! builds fresh bot instances).

use serde::{Deserialize, Serialize};

use crate::grid::{BotId, Grid, Position};
use crate::moves::{Move, ParseMoveError};
use crate::storage::BotStorage;

/// Identity and position of one bot, as seen by every bot
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BotView {
    pub id: BotId,
    pub position: Position,
}

/// Round metadata handed to bots
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundInfo {
    /// 0-based index of the round being decided
    pub round: u32,
    pub total_rounds: u32,
    pub grid_length: usize,
}

impl RoundInfo {
    /// Rounds left including the current one
    pub fn remaining(&self) -> u32 {
        self.total_rounds.saturating_sub(self.round)
    }
}

/// Read-only input to a decision
#[derive(Clone, Copy, Debug)]
pub struct DecisionContext<'a> {
    /// The deciding bot
    pub me: BotView,
    /// Grid at the start of the round
    pub grid: &'a Grid,
    /// All bots, the deciding one included, in registration order
    pub bots: &'a [BotView],
    pub round: RoundInfo,
}

impl<'a> DecisionContext<'a> {
    /// Every bot except the deciding one
    pub fn enemies(&self) -> impl Iterator<Item = &'a BotView> + 'a {
        let me = self.me.id;
        self.bots.iter().filter(move |b| b.id != me)
    }

    /// Where `mv` would take the deciding bot
    pub fn destination(&self, mv: Move) -> Position {
        self.me.position.offset_clamped(mv.vector(), self.grid.length())
    }
}

/// Why a bot could not produce a move
#[derive(Debug, thiserror::Error)]
pub enum DecisionError {
    #[error("invalid move {0:?}")]
    InvalidMove(String),

    #[error("{0}")]
    Failed(String),

    #[error("storage error: {0}")]
    Storage(#[from] serde_json::Error),
}

impl From<ParseMoveError> for DecisionError {
    fn from(err: ParseMoveError) -> Self {
        DecisionError::InvalidMove(err.0)
    }
}

/// A bot strategy
pub trait Bot: Send {
    /// Strategy name
    fn name(&self) -> &str;

    /// Decide this round's move. Must not assume any other bot has moved yet.
    fn determine_next_move(
        &mut self,
        ctx: &DecisionContext<'_>,
        storage: &mut BotStorage,
    ) -> Result<Move, DecisionError>;
}
