//! Bot replaying a fixed list of move tokens

use crate::bot::{Bot, DecisionContext, DecisionError};
use crate::moves::Move;
use crate::storage::BotStorage;

/// Replays its tokens in order, cycling once exhausted.
///
/// Tokens are parsed like any other move text, so an unrecognised token
/// surfaces as an invalid move in the round it is played.
#[derive(Clone, Debug)]
pub struct ScriptedBot {
    tokens: Vec<String>,
    cursor: usize,
}

impl ScriptedBot {
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tokens: tokens.into_iter().map(Into::into).collect(),
            cursor: 0,
        }
    }

    /// Parse a comma-separated script such as `"n,n,e,h"`
    pub fn from_script(script: &str) -> Self {
        Self::new(script.split(',').map(str::trim).filter(|t| !t.is_empty()))
    }

    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }
}

impl Bot for ScriptedBot {
    fn name(&self) -> &str {
        "scripted"
    }

    fn determine_next_move(
        &mut self,
        _ctx: &DecisionContext<'_>,
        _storage: &mut BotStorage,
    ) -> Result<Move, DecisionError> {
        if self.tokens.is_empty() {
            return Ok(Move::Stay);
        }
        let token = &self.tokens[self.cursor % self.tokens.len()];
        self.cursor += 1;
        Ok(token.parse::<Move>()?)
    }
}
