//! Bot that never moves

use crate::bot::{Bot, DecisionContext, DecisionError};
use crate::moves::Move;
use crate::storage::BotStorage;

/// Holds its starting tile forever
#[derive(Clone, Debug, Default)]
pub struct StayBot;

impl StayBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for StayBot {
    fn name(&self) -> &str {
        "stay"
    }

    fn determine_next_move(
        &mut self,
        _ctx: &DecisionContext<'_>,
        _storage: &mut BotStorage,
    ) -> Result<Move, DecisionError> {
        Ok(Move::Stay)
    }
}
