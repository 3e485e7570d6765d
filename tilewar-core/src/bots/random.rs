//! Uniformly random walker

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::bot::{Bot, DecisionContext, DecisionError};
use crate::moves::{Move, ALL_MOVES};
use crate::storage::BotStorage;

/// Picks one of the five moves uniformly at random each round
pub struct RandomBot {
    rng: ChaCha8Rng,
}

impl RandomBot {
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl Bot for RandomBot {
    fn name(&self) -> &str {
        "random"
    }

    fn determine_next_move(
        &mut self,
        _ctx: &DecisionContext<'_>,
        _storage: &mut BotStorage,
    ) -> Result<Move, DecisionError> {
        Ok(ALL_MOVES[self.rng.gen_range(0..ALL_MOVES.len())])
    }
}
