//! Tile colour transition rule
//!
//! A bot landing on a tile repaints it according to the numeric distance
//! between its identity and the tile's current colour, modulo 3:
//!
//! | `(bot - floor) mod 3` | outcome |
//! |---|---|
//! | 0 | tile keeps its colour |
//! | 1 | tile becomes unclaimed |
//! | 2 | tile is captured by the bot |
//!
//! Unclaimed tiles are always claimed. The modulus is Euclidean, so the
//! outcome index is never negative even when `bot < floor`.

use serde::{Deserialize, Serialize};

use crate::grid::{BotId, Colour, UNCLAIMED};

/// What happens to a tile when a bot repaints it
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TileOutcome {
    /// Unclaimed tile taken by the bot
    Claim,
    /// Tile keeps its owner
    Keep,
    /// Tile reverts to unclaimed
    Clear,
    /// Tile taken from its owner by the bot
    Capture,
}

/// Classify a repaint of `floor` by `bot`
pub fn classify(floor: Colour, bot: BotId) -> TileOutcome {
    if floor == UNCLAIMED {
        return TileOutcome::Claim;
    }
    match outcome_index(floor, bot) {
        0 => TileOutcome::Keep,
        1 => TileOutcome::Clear,
        _ => TileOutcome::Capture,
    }
}

/// New colour of a tile with colour `floor` after `bot` lands on it
pub fn determine_new_tile_colour(floor: Colour, bot: BotId) -> Colour {
    if floor == UNCLAIMED {
        return bot;
    }
    [floor, UNCLAIMED, bot][outcome_index(floor, bot)]
}

fn outcome_index(floor: Colour, bot: BotId) -> usize {
    (bot as i64 - floor as i64).rem_euclid(3) as usize
}
