//! Registered bot instances

use std::fmt;
use std::time::Duration;

use crate::bot::{Bot, BotView};
use crate::grid::{BotId, Position};
use crate::moves::Move;

/// A bot taking part in a session, with its identity and position
pub struct Agent {
    pub(crate) id: BotId,
    pub(crate) name: String,
    pub(crate) display_index: usize,
    pub(crate) position: Position,
    pub(crate) next_move: Move,
    pub(crate) decision_time: Duration,
    pub(crate) bot: Box<dyn Bot>,
}

impl Agent {
    pub fn id(&self) -> BotId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Registration index, stable across sessions regardless of identity shuffling
    pub fn display_index(&self) -> usize {
        self.display_index
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Move decided in the most recent round
    pub fn next_move(&self) -> Move {
        self.next_move
    }

    /// Wall-clock time spent deciding, summed over all rounds
    pub fn decision_time(&self) -> Duration {
        self.decision_time
    }

    pub fn view(&self) -> BotView {
        BotView {
            id: self.id,
            position: self.position,
        }
    }
}

impl fmt::Debug for Agent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Agent")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("display_index", &self.display_index)
            .field("position", &self.position)
            .field("next_move", &self.next_move)
            .finish_non_exhaustive()
    }
}
