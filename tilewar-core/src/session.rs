//! Session controller - setup and the round loop

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::config::SessionConfig;
use crate::error::{EngineError, SetupError};
use crate::grid::{grid_length_for, BotId, Grid, Position};
use crate::roster::Roster;
use crate::score::Scoreboard;
use crate::world::World;

/// Result of a complete session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionOutcome {
    pub rounds_played: u32,
    pub grid_length: usize,
    pub scoreboard: Scoreboard,
    pub grid: Grid,
}

/// Runs sessions of a roster: places bots, then steps the world round by round
pub struct Session {
    config: SessionConfig,
    roster: Roster,
    rng: ChaCha8Rng,
    world: Option<World>,
    display_order: FxHashMap<BotId, usize>,
    /// Round in which a strict-mode failure ended the current session
    aborted_in: Option<u32>,
}

impl Session {
    /// Create a session. Fails when the roster is empty or the grid sizing is invalid.
    pub fn new(config: SessionConfig, roster: Roster) -> Result<Self, SetupError> {
        if roster.is_empty() {
            return Err(SetupError::NoBots);
        }
        if config.cells_per_bot == 0 {
            return Err(SetupError::InvalidCellsPerBot);
        }

        let rng = match config.seed {
            Some(s) => ChaCha8Rng::seed_from_u64(s),
            None => ChaCha8Rng::from_entropy(),
        };

        Ok(Self {
            config,
            roster,
            rng,
            world: None,
            display_order: FxHashMap::default(),
            aborted_in: None,
        })
    }

    // ========================================================================
    // SETUP
    // ========================================================================

    /// Start a fresh session: new bot instances, shuffled identities, random
    /// positions (bots may share a starting cell) and round 0.
    pub fn setup(&mut self) -> Result<&mut World, SetupError> {
        let world = self.build_world()?;
        Ok(self.world.insert(world))
    }

    fn build_world(&mut self) -> Result<World, SetupError> {
        let bot_count = self.roster.len();
        let length = grid_length_for(bot_count, self.config.cells_per_bot);

        let mut ids: Vec<BotId> = (1..=bot_count as BotId).collect();
        ids.shuffle(&mut self.rng);

        let mut world = World::new(length, self.config.rounds, self.config.policy);
        self.display_order.clear();
        self.aborted_in = None;

        for (index, (entry, &id)) in self.roster.entries().iter().zip(&ids).enumerate() {
            let bot = entry.build(self.rng.gen());
            let position = Position::new(self.rng.gen_range(0..length), self.rng.gen_range(0..length));
            world.add_agent(id, entry.name(), position, bot)?;
            self.display_order.insert(id, index);
        }

        info!(
            bots = bot_count,
            grid_length = length,
            rounds = self.config.rounds,
            policy = ?self.config.policy,
            "session set up"
        );

        Ok(world)
    }

    // ========================================================================
    // ROUND LOOP
    // ========================================================================

    /// Play one round, setting up first if needed. Returns `true` once all rounds
    /// are played; further calls change nothing.
    ///
    /// A strict-mode failure is fatal: every later call returns
    /// [`EngineError::Aborted`] until [`Session::setup`] starts a new session.
    pub fn step(&mut self) -> Result<bool, EngineError> {
        if let Some(round) = self.aborted_in {
            return Err(EngineError::Aborted { round });
        }

        let world = match self.world.take() {
            Some(world) => world,
            None => self.build_world()?,
        };
        let world = self.world.insert(world);

        let result = world.step(&mut self.rng);
        if result.is_err() {
            self.aborted_in = Some(world.round());
        }
        result
    }

    /// Set up and play every configured round
    pub fn run(&mut self) -> Result<SessionOutcome, EngineError> {
        let mut world = self.build_world()?;
        let played = play_out(&mut world, &mut self.rng);

        let world = self.world.insert(world);
        if let Err(err) = played {
            self.aborted_in = Some(world.round());
            return Err(err);
        }

        let scoreboard = world.score();

        info!(
            rounds = world.round(),
            unclaimed = scoreboard.unclaimed,
            "session complete"
        );

        Ok(SessionOutcome {
            rounds_played: world.round(),
            grid_length: world.grid().length(),
            scoreboard,
            grid: world.grid().clone(),
        })
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    /// Tile counts, `None` before setup
    pub fn get_score(&self) -> Option<Scoreboard> {
        self.world.as_ref().map(World::score)
    }

    /// Current world, `None` before setup
    pub fn world(&self) -> Option<&World> {
        self.world.as_ref()
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// Identity -> registration index of the current session
    pub fn display_order(&self) -> &FxHashMap<BotId, usize> {
        &self.display_order
    }
}

fn play_out(world: &mut World, rng: &mut ChaCha8Rng) -> Result<(), EngineError> {
    while !world.step(rng)? {}
    Ok(())
}
