//! Row-by-row sweeper

use crate::bot::{Bot, DecisionContext, DecisionError};
use crate::moves::Move;
use crate::storage::BotStorage;

const HEADING_KEY: &str = "heading";
const VERTICAL_KEY: &str = "vertical";

/// Sweeps the grid boustrophedon style: along a row to the wall, one step
/// up (or down), then back along the next row. Reverses vertically at the
/// top and bottom edges.
#[derive(Clone, Debug, Default)]
pub struct SweeperBot;

impl SweeperBot {
    pub fn new() -> Self {
        Self
    }
}

impl Bot for SweeperBot {
    fn name(&self) -> &str {
        "sweeper"
    }

    fn determine_next_move(
        &mut self,
        ctx: &DecisionContext<'_>,
        storage: &mut BotStorage,
    ) -> Result<Move, DecisionError> {
        let last = ctx.round.grid_length.saturating_sub(1);
        let pos = ctx.me.position;
        let heading: Move = storage.get(HEADING_KEY).unwrap_or(Move::Right);
        let vertical: Move = storage.get(VERTICAL_KEY).unwrap_or(Move::Up);

        let at_wall = match heading {
            Move::Left => pos.x == 0,
            _ => pos.x >= last,
        };
        if !at_wall {
            return Ok(heading);
        }

        storage.insert(HEADING_KEY, heading.opposite())?;

        let vertical_blocked = match vertical {
            Move::Down => pos.y == 0,
            _ => pos.y >= last,
        };
        let vertical = if vertical_blocked {
            storage.insert(VERTICAL_KEY, vertical.opposite())?;
            vertical.opposite()
        } else {
            vertical
        };

        Ok(vertical)
    }
}
