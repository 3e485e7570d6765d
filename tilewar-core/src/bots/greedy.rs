//! One-step lookahead painter

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bot::{Bot, DecisionContext, DecisionError};
use crate::grid::{BotId, Colour, Position};
use crate::moves::{Move, ALL_MOVES};
use crate::paint::{classify, TileOutcome};
use crate::storage::BotStorage;

const LAST_MOVE_KEY: &str = "last_move";

/// Steps onto the neighbouring tile with the best repaint outcome.
///
/// When no neighbour gains anything it heads for the nearest tile that
/// would, and remembers its previous move to avoid walking back and forth.
pub struct GreedyBot {
    rng: ChaCha8Rng,
}

impl GreedyBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

/// Value of repainting `floor` as `me`: claim/capture > clear > nothing
fn tile_value(floor: Colour, me: BotId) -> i32 {
    match classify(floor, me) {
        TileOutcome::Claim | TileOutcome::Capture => 2,
        TileOutcome::Clear => 1,
        TileOutcome::Keep => 0,
    }
}

/// Nearest tile worth repainting
fn nearest_target(ctx: &DecisionContext<'_>) -> Option<Position> {
    let here = ctx.me.position;
    ctx.grid
        .cells()
        .filter(|&(pos, colour)| pos != here && tile_value(colour, ctx.me.id) > 0)
        .min_by_key(|&(pos, _)| pos.distance_to(here))
        .map(|(pos, _)| pos)
}

fn step_towards(from: Position, to: Position) -> Move {
    if to.x > from.x {
        Move::Right
    } else if to.x < from.x {
        Move::Left
    } else if to.y > from.y {
        Move::Up
    } else if to.y < from.y {
        Move::Down
    } else {
        Move::Stay
    }
}

impl Bot for GreedyBot {
    fn name(&self) -> &str {
        "greedy"
    }

    fn determine_next_move(
        &mut self,
        ctx: &DecisionContext<'_>,
        storage: &mut BotStorage,
    ) -> Result<Move, DecisionError> {
        let last: Option<Move> = storage.get(LAST_MOVE_KEY);

        let mut best_value = i32::MIN;
        let mut best = Vec::with_capacity(ALL_MOVES.len());
        for mv in ALL_MOVES {
            let dest = ctx.destination(mv);
            // Walking into a wall is just a worse STAY
            if mv != Move::Stay && dest == ctx.me.position {
                continue;
            }

            let mut value = tile_value(ctx.grid[dest], ctx.me.id) * 2;
            if mv != Move::Stay && last == Some(mv.opposite()) {
                value -= 1;
            }

            if value > best_value {
                best_value = value;
                best.clear();
            }
            if value == best_value {
                best.push(mv);
            }
        }

        let mv = if best_value <= 0 {
            nearest_target(ctx)
                .map(|target| step_towards(ctx.me.position, target))
                .unwrap_or(Move::Stay)
        } else {
            best[self.rng.gen_range(0..best.len())]
        };

        storage.insert(LAST_MOVE_KEY, mv)?;
        Ok(mv)
    }
}
