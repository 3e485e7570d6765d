//! Round engine
//!
//! One call to [`World::step`] plays a full round in three phases:
//!
//! 1. Decision collection: every bot is asked for a move, in a freshly
//!    shuffled order, against the same start-of-round snapshot.
//! 2. Move application: in registration order, each bot's move is added to
//!    its position and clamped to the grid.
//! 3. Repaint: in registration order, each bot repaints the tile it landed
//!    on, unless an earlier bot already repainted that tile this round.

use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use std::time::{Duration, Instant};

use rand::seq::SliceRandom;
use rand::Rng;
use rustc_hash::{FxHashMap, FxHashSet};
use tracing::{debug, warn};

use crate::agent::Agent;
use crate::bot::{Bot, BotView, DecisionContext, DecisionError, RoundInfo};
use crate::config::FailurePolicy;
use crate::error::{EngineError, SetupError};
use crate::grid::{BotId, Grid, Position, UNCLAIMED};
use crate::moves::Move;
use crate::paint::determine_new_tile_colour;
use crate::score::Scoreboard;
use crate::storage::BotStorage;

// ============================================================================
// WORLD
// ============================================================================

/// Grid, registered bots and round counter of one session
pub struct World {
    grid: Grid,
    /// Registration order
    agents: Vec<Agent>,
    storage: FxHashMap<BotId, BotStorage>,
    round: u32,
    total_rounds: u32,
    policy: FailurePolicy,
}

impl World {
    /// Create a world with an all-unclaimed grid
    pub fn new(length: usize, total_rounds: u32, policy: FailurePolicy) -> Self {
        Self::with_grid(Grid::new(length), total_rounds, policy)
    }

    /// Create a world on a prepared grid. Non-zero cells should name bots added afterwards.
    pub fn with_grid(grid: Grid, total_rounds: u32, policy: FailurePolicy) -> Self {
        Self {
            grid,
            agents: Vec::new(),
            storage: FxHashMap::default(),
            round: 0,
            total_rounds,
            policy,
        }
    }

    /// Register a bot. Registration order fixes move and repaint order.
    pub fn add_agent(
        &mut self,
        id: BotId,
        name: impl Into<String>,
        position: Position,
        bot: Box<dyn Bot>,
    ) -> Result<(), SetupError> {
        if id == UNCLAIMED {
            return Err(SetupError::ReservedIdentity);
        }
        if self.agents.iter().any(|a| a.id == id) {
            return Err(SetupError::DuplicateIdentity(id));
        }
        if !self.grid.contains(position) {
            return Err(SetupError::OutOfBounds {
                id,
                position,
                length: self.grid.length(),
            });
        }

        self.agents.push(Agent {
            id,
            name: name.into(),
            display_index: self.agents.len(),
            position,
            next_move: Move::Stay,
            decision_time: Duration::ZERO,
            bot,
        });
        self.storage.insert(id, BotStorage::new());
        Ok(())
    }

    // ========================================================================
    // ACCESSORS
    // ========================================================================

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Agents in registration order
    pub fn agents(&self) -> &[Agent] {
        &self.agents
    }

    pub fn agent(&self, id: BotId) -> Option<&Agent> {
        self.agents.iter().find(|a| a.id == id)
    }

    /// Scratch storage of a bot
    pub fn storage(&self, id: BotId) -> Option<&BotStorage> {
        self.storage.get(&id)
    }

    /// Rounds completed so far
    pub fn round(&self) -> u32 {
        self.round
    }

    pub fn total_rounds(&self) -> u32 {
        self.total_rounds
    }

    pub fn policy(&self) -> FailurePolicy {
        self.policy
    }

    /// Whether the configured round count has been reached
    pub fn is_finished(&self) -> bool {
        self.round >= self.total_rounds
    }

    /// Metadata for the round about to be played
    pub fn round_info(&self) -> RoundInfo {
        RoundInfo {
            round: self.round,
            total_rounds: self.total_rounds,
            grid_length: self.grid.length(),
        }
    }

    /// Identity and position of every bot, in registration order
    pub fn bot_views(&self) -> Vec<BotView> {
        self.agents.iter().map(Agent::view).collect()
    }

    /// Tile counts for the latest completed round
    pub fn score(&self) -> Scoreboard {
        Scoreboard::tally(&self.grid, &self.agents)
    }

    // ========================================================================
    // ROUND
    // ========================================================================

    /// Play one round. Returns `true` once the configured round count is reached;
    /// a finished world is left untouched.
    ///
    /// Under [`FailurePolicy::Strict`] a failing bot aborts the round before
    /// any position or tile changes.
    ///
    /// Bot panics are caught, but the process panic hook still runs for each
    /// one. Binaries that want quiet lenient runs install their own hook.
    pub fn step<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<bool, EngineError> {
        if self.is_finished() {
            return Ok(true);
        }

        self.collect_decisions(rng)?;
        self.apply_moves();
        let repainted = self.repaint();
        self.round += 1;

        debug!(
            round = self.round,
            total = self.total_rounds,
            repainted,
            "round complete"
        );

        Ok(self.is_finished())
    }

    /// Phase 1: ask every bot for a move against the start-of-round snapshot
    fn collect_decisions<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<(), EngineError> {
        let views = self.bot_views();
        let info = self.round_info();

        let mut order: Vec<usize> = (0..self.agents.len()).collect();
        order.shuffle(rng);

        for idx in order {
            let agent = &mut self.agents[idx];
            let storage = self.storage.entry(agent.id).or_default();
            let ctx = DecisionContext {
                me: views[idx],
                grid: &self.grid,
                bots: &views,
                round: info,
            };

            let started = Instant::now();
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| {
                agent.bot.determine_next_move(&ctx, storage)
            }));
            agent.decision_time += started.elapsed();

            agent.next_move = match resolve_decision(agent, outcome) {
                Ok(mv) => mv,
                Err(err) => match self.policy {
                    FailurePolicy::Strict => return Err(err),
                    FailurePolicy::Lenient => {
                        warn!(bot = agent.id, name = %agent.name, error = %err, "substituting STAY");
                        Move::Stay
                    }
                },
            };
        }

        Ok(())
    }

    /// Phase 2: move every bot from its own pre-round position
    fn apply_moves(&mut self) {
        let length = self.grid.length();
        for agent in &mut self.agents {
            agent.position = agent.position.offset_clamped(agent.next_move.vector(), length);
        }
    }

    /// Phase 3: repaint landed tiles, first bot per tile wins. Returns tiles repainted.
    fn repaint(&mut self) -> usize {
        let mut occupancy: FxHashSet<Position> = FxHashSet::default();

        for agent in &self.agents {
            if !occupancy.insert(agent.position) {
                continue;
            }
            let floor = self.grid[agent.position];
            self.grid
                .set(agent.position, determine_new_tile_colour(floor, agent.id));
        }

        occupancy.len()
    }
}

// ============================================================================
// DECISION HELPERS
// ============================================================================

fn resolve_decision(
    agent: &Agent,
    outcome: std::thread::Result<Result<Move, DecisionError>>,
) -> Result<Move, EngineError> {
    match outcome {
        Ok(Ok(mv)) => Ok(mv),
        Ok(Err(DecisionError::InvalidMove(token))) => Err(EngineError::InvalidMove {
            id: agent.id,
            name: agent.name.clone(),
            token,
        }),
        Ok(Err(err)) => Err(EngineError::DecisionFailure {
            id: agent.id,
            name: agent.name.clone(),
            reason: err.to_string(),
        }),
        Err(payload) => Err(EngineError::DecisionFailure {
            id: agent.id,
            name: agent.name.clone(),
            reason: format!("panicked: {}", panic_message(payload.as_ref())),
        }),
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bots::{RandomBot, ScriptedBot, StayBot};
    use crate::grid::Colour;
    use crate::moves::ALL_MOVES;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;
    use std::sync::{Arc, Mutex};

    struct FailingBot;

    impl Bot for FailingBot {
        fn name(&self) -> &str {
            "failing"
        }

        fn determine_next_move(
            &mut self,
            _ctx: &DecisionContext<'_>,
            _storage: &mut BotStorage,
        ) -> Result<Move, DecisionError> {
            Err(DecisionError::Failed("out of ideas".to_string()))
        }
    }

    struct PanickingBot;

    impl Bot for PanickingBot {
        fn name(&self) -> &str {
            "panicking"
        }

        fn determine_next_move(
            &mut self,
            _ctx: &DecisionContext<'_>,
            _storage: &mut BotStorage,
        ) -> Result<Move, DecisionError> {
            panic!("bot exploded")
        }
    }

    /// Records the round it was asked in and logs call order
    struct RecordingBot {
        log: Arc<Mutex<Vec<BotId>>>,
    }

    impl Bot for RecordingBot {
        fn name(&self) -> &str {
            "recording"
        }

        fn determine_next_move(
            &mut self,
            ctx: &DecisionContext<'_>,
            storage: &mut BotStorage,
        ) -> Result<Move, DecisionError> {
            let seen: u32 = storage.get("seen").unwrap_or(0);
            storage.insert("seen", seen + 1)?;
            storage.insert("round", ctx.round.round)?;
            storage.insert("bots", ctx.bots.len())?;
            self.log.lock().unwrap().push(ctx.me.id);
            Ok(Move::Right)
        }
    }

    type Sighting = (u32, BotId, Vec<BotView>, Grid);

    /// Logs the snapshot it decides on, then walks randomly
    struct SnapshotBot {
        rng: ChaCha8Rng,
        log: Arc<Mutex<Vec<Sighting>>>,
    }

    impl Bot for SnapshotBot {
        fn name(&self) -> &str {
            "snapshot"
        }

        fn determine_next_move(
            &mut self,
            ctx: &DecisionContext<'_>,
            storage: &mut BotStorage,
        ) -> Result<Move, DecisionError> {
            storage.insert("seen_at", ctx.grid[ctx.me.position])?;
            self.log
                .lock()
                .unwrap()
                .push((ctx.round.round, ctx.me.id, ctx.bots.to_vec(), ctx.grid.clone()));
            Ok(ALL_MOVES[self.rng.gen_range(0..ALL_MOVES.len())])
        }
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(42)
    }

    fn scripted(script: &str) -> Box<dyn Bot> {
        Box::new(ScriptedBot::from_script(script))
    }

    #[test]
    fn test_two_bots_stay_one_round() {
        let mut world = World::new(3, 1, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(0, 0), Box::new(StayBot::new())).unwrap();
        world.add_agent(2, "b", Position::new(2, 2), Box::new(StayBot::new())).unwrap();

        let done = world.step(&mut rng()).unwrap();

        assert!(done);
        assert_eq!(world.grid()[Position::new(0, 0)], 1);
        assert_eq!(world.grid()[Position::new(2, 2)], 2);
        let score = world.score().as_map();
        assert_eq!(score.get(&1), Some(&1));
        assert_eq!(score.get(&2), Some(&1));
        assert_eq!(world.score().unclaimed, 7);
    }

    #[test]
    fn test_mutual_destruction() {
        let grid = Grid::from_rows(&[vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        let mut world = World::with_grid(grid, 1, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(2, 2), Box::new(StayBot::new())).unwrap();
        world.add_agent(2, "b", Position::new(1, 0), scripted("w")).unwrap();

        world.step(&mut rng()).unwrap();

        assert_eq!(world.agent(2).unwrap().position(), Position::new(0, 0));
        assert_eq!(world.grid()[Position::new(0, 0)], UNCLAIMED);
        assert_eq!(world.score().tiles_for(1), Some(1));
        assert_eq!(world.score().tiles_for(2), Some(0));
    }

    #[test]
    fn test_self_revisit_keeps_colour() {
        let mut world = World::new(3, 3, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(0, 0), scripted("h,e,w")).unwrap();
        let mut rng = rng();

        world.step(&mut rng).unwrap();
        assert_eq!(world.grid()[Position::new(0, 0)], 1);
        world.step(&mut rng).unwrap();
        assert_eq!(world.grid()[Position::new(0, 0)], 1);
        assert_eq!(world.grid()[Position::new(1, 0)], 1);
        let done = world.step(&mut rng).unwrap();
        assert_eq!(world.grid()[Position::new(0, 0)], 1);
        assert_eq!(world.agent(1).unwrap().position(), Position::new(0, 0));
        assert!(done);
    }

    #[test]
    fn test_first_mover_wins_collision() {
        // Both bots land on (0, 0); the first registered one paints it
        let mut world = World::new(3, 1, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(0, 1), scripted("s")).unwrap();
        world.add_agent(2, "b", Position::new(1, 0), scripted("w")).unwrap();
        world.step(&mut rng()).unwrap();
        assert_eq!(world.grid()[Position::new(0, 0)], 1);
        assert_eq!(world.grid().count(2), 0);

        let mut world = World::new(3, 1, FailurePolicy::Strict);
        world.add_agent(2, "b", Position::new(1, 0), scripted("w")).unwrap();
        world.add_agent(1, "a", Position::new(0, 1), scripted("s")).unwrap();
        world.step(&mut rng()).unwrap();
        assert_eq!(world.grid()[Position::new(0, 0)], 2);
        assert_eq!(world.grid().count(1), 0);
    }

    #[test]
    fn test_collision_repaints_once() {
        // Tile owned by 1; bots 3 and 2 both land on it. Only bot 3
        // (registered first) applies the rule: (3 - 1) mod 3 == 2, capture.
        // A second repaint by bot 2 would give (2 - 3) mod 3 == 2 and flip it again.
        let grid = Grid::from_rows(&[vec![1, 0, 0], vec![0, 0, 0], vec![0, 0, 0]]).unwrap();
        let mut world = World::with_grid(grid, 1, FailurePolicy::Strict);
        world.add_agent(3, "c", Position::new(0, 1), scripted("s")).unwrap();
        world.add_agent(2, "b", Position::new(1, 0), scripted("w")).unwrap();
        world.add_agent(1, "a", Position::new(2, 2), Box::new(StayBot::new())).unwrap();

        world.step(&mut rng()).unwrap();

        assert_eq!(world.grid()[Position::new(0, 0)], 3);
    }

    #[test]
    fn test_moves_are_clamped() {
        let mut world = World::new(3, 4, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(0, 0), scripted("w,s")).unwrap();
        world.add_agent(2, "b", Position::new(2, 2), scripted("e,n")).unwrap();
        let mut rng = rng();

        while !world.step(&mut rng).unwrap() {}

        assert_eq!(world.agent(1).unwrap().position(), Position::new(0, 0));
        assert_eq!(world.agent(2).unwrap().position(), Position::new(2, 2));
    }

    #[test]
    fn test_boundary_containment_random_walk() {
        let mut world = World::new(5, 200, FailurePolicy::Strict);
        for id in 1..=6 {
            let pos = Position::new(id as usize % 5, (id as usize * 3) % 5);
            world
                .add_agent(id, "random", pos, Box::new(RandomBot::new(id as u64)))
                .unwrap();
        }
        let mut rng = rng();

        loop {
            let done = world.step(&mut rng).unwrap();
            for agent in world.agents() {
                assert!(world.grid().contains(agent.position()));
            }
            let score = world.score();
            assert_eq!(score.claimed() + score.unclaimed, 25);
            for (_, colour) in world.grid().cells() {
                assert!(colour == UNCLAIMED || world.agent(colour).is_some());
            }
            if done {
                break;
            }
        }
        assert_eq!(world.round(), 200);
    }

    #[test]
    fn test_moves_use_pre_round_positions() {
        // Bots swap places, each moving from its own start position
        let mut world = World::new(3, 1, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(0, 1), scripted("e")).unwrap();
        world.add_agent(2, "b", Position::new(1, 1), scripted("w")).unwrap();

        world.step(&mut rng()).unwrap();

        assert_eq!(world.agent(1).unwrap().position(), Position::new(1, 1));
        assert_eq!(world.agent(2).unwrap().position(), Position::new(0, 1));
        assert_eq!(world.grid()[Position::new(1, 1)], 1);
        assert_eq!(world.grid()[Position::new(0, 1)], 2);
    }

    #[test]
    fn test_decisions_see_start_of_round_snapshot() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut world = World::new(4, 12, FailurePolicy::Strict);
        for id in 1..=4 {
            let bot = SnapshotBot {
                rng: ChaCha8Rng::seed_from_u64(id as u64),
                log: Arc::clone(&log),
            };
            world.add_agent(id, "snapshot", Position::new(0, 0), Box::new(bot)).unwrap();
        }
        let mut rng = rng();

        let mut moved = false;
        for round in 0..12 {
            let views = world.bot_views();
            let grid = world.grid().clone();

            world.step(&mut rng).unwrap();

            let sightings: Vec<Sighting> = log.lock().unwrap().drain(..).collect();
            assert_eq!(sightings.len(), 4);
            for (seen_round, id, seen_views, seen_grid) in &sightings {
                assert_eq!(*seen_round, round);
                assert_eq!(seen_views, &views);
                assert_eq!(seen_grid, &grid);
                let me = views.iter().find(|v| v.id == *id).unwrap();
                assert_eq!(world.storage(*id).unwrap().get::<Colour>("seen_at"), Some(grid[me.position]));
            }
            moved |= world.bot_views() != views;
        }
        assert!(moved);
    }

    #[test]
    fn test_step_after_finish_is_a_no_op() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut world = World::new(3, 1, FailurePolicy::Strict);
        world
            .add_agent(1, "recording", Position::new(0, 0), Box::new(RecordingBot { log: Arc::clone(&log) }))
            .unwrap();
        let mut rng = rng();

        assert!(world.step(&mut rng).unwrap());
        let grid = world.grid().clone();
        for _ in 0..4 {
            assert!(world.step(&mut rng).unwrap());
        }

        assert_eq!(world.round(), 1);
        assert_eq!(world.grid(), &grid);
        assert_eq!(world.agent(1).unwrap().position(), Position::new(1, 0));
        assert_eq!(log.lock().unwrap().len(), 1);
    }

    #[test]
    fn test_zero_round_world_never_paints() {
        let mut world = World::new(3, 0, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(1, 1), Box::new(StayBot::new())).unwrap();

        assert!(world.is_finished());
        assert!(world.step(&mut rng()).unwrap());
        assert_eq!(world.round(), 0);
        assert_eq!(world.grid().unclaimed(), 9);
    }

    #[test]
    fn test_lenient_substitutes_stay() {
        let mut world = World::new(3, 2, FailurePolicy::Lenient);
        world.add_agent(1, "failing", Position::new(0, 0), Box::new(FailingBot)).unwrap();
        world.add_agent(2, "panicking", Position::new(1, 1), Box::new(PanickingBot)).unwrap();
        world.add_agent(3, "invalid", Position::new(2, 2), scripted("x")).unwrap();
        let mut rng = rng();

        assert!(!world.step(&mut rng).unwrap());
        assert!(world.step(&mut rng).unwrap());

        assert_eq!(world.agent(1).unwrap().position(), Position::new(0, 0));
        assert_eq!(world.agent(2).unwrap().position(), Position::new(1, 1));
        assert_eq!(world.agent(3).unwrap().position(), Position::new(2, 2));
        assert_eq!(world.agent(3).unwrap().next_move(), Move::Stay);
        assert_eq!(world.score().claimed(), 3);
    }

    #[test]
    fn test_strict_invalid_move_aborts() {
        let mut world = World::new(3, 2, FailurePolicy::Strict);
        world.add_agent(1, "stay", Position::new(0, 0), Box::new(StayBot::new())).unwrap();
        world.add_agent(2, "scripted", Position::new(2, 2), scripted("x")).unwrap();

        let err = world.step(&mut rng()).unwrap_err();

        assert!(matches!(
            err,
            EngineError::InvalidMove { id: 2, ref name, ref token } if name == "scripted" && token == "x"
        ));
        // Nothing applied
        assert_eq!(world.round(), 0);
        assert_eq!(world.grid().unclaimed(), 9);
    }

    #[test]
    fn test_strict_failure_and_panic_abort() {
        let mut world = World::new(3, 1, FailurePolicy::Strict);
        world.add_agent(4, "failing", Position::new(0, 0), Box::new(FailingBot)).unwrap();
        let err = world.step(&mut rng()).unwrap_err();
        assert!(matches!(err, EngineError::DecisionFailure { id: 4, ref reason, .. } if reason == "out of ideas"));

        let mut world = World::new(3, 1, FailurePolicy::Strict);
        world.add_agent(5, "panicking", Position::new(0, 0), Box::new(PanickingBot)).unwrap();
        let err = world.step(&mut rng()).unwrap_err();
        assert_eq!(err.bot_id(), Some(5));
        assert_eq!(err.bot_name(), Some("panicking"));
        assert!(err.to_string().contains("bot exploded"));
    }

    #[test]
    fn test_decision_order_is_shuffled() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut world = World::new(8, 20, FailurePolicy::Strict);
        for id in 1..=4 {
            let bot = RecordingBot { log: Arc::clone(&log) };
            world.add_agent(id, "recording", Position::new(0, id as usize), Box::new(bot)).unwrap();
        }
        let mut rng = rng();
        while !world.step(&mut rng).unwrap() {}

        let log = log.lock().unwrap();
        let rounds: Vec<&[BotId]> = log.chunks(4).collect();
        assert_eq!(rounds.len(), 20);
        for round in &rounds {
            let mut ids = round.to_vec();
            ids.sort();
            assert_eq!(ids, vec![1, 2, 3, 4]);
        }
        assert!(rounds.iter().any(|r| *r != rounds[0]));
    }

    #[test]
    fn test_storage_and_round_info_reach_bots() {
        let log = Arc::new(Mutex::new(Vec::new()));
        let mut world = World::new(4, 3, FailurePolicy::Strict);
        world
            .add_agent(1, "recording", Position::new(0, 0), Box::new(RecordingBot { log: Arc::clone(&log) }))
            .unwrap();
        world.add_agent(2, "stay", Position::new(3, 3), Box::new(StayBot::new())).unwrap();
        let mut rng = rng();
        while !world.step(&mut rng).unwrap() {}

        let storage = world.storage(1).unwrap();
        assert_eq!(storage.get::<u32>("seen"), Some(3));
        assert_eq!(storage.get::<u32>("round"), Some(2));
        assert_eq!(storage.get::<usize>("bots"), Some(2));
        assert!(world.storage(2).unwrap().is_empty());
        assert_eq!(world.agent(1).unwrap().position(), Position::new(3, 0));
    }

    #[test]
    fn test_add_agent_validation() {
        let mut world = World::new(3, 1, FailurePolicy::Lenient);
        assert_eq!(
            world.add_agent(0, "zero", Position::new(0, 0), Box::new(StayBot::new())),
            Err(SetupError::ReservedIdentity)
        );
        world.add_agent(1, "a", Position::new(0, 0), Box::new(StayBot::new())).unwrap();
        assert_eq!(
            world.add_agent(1, "again", Position::new(1, 0), Box::new(StayBot::new())),
            Err(SetupError::DuplicateIdentity(1))
        );
        assert!(matches!(
            world.add_agent(2, "far", Position::new(3, 0), Box::new(StayBot::new())),
            Err(SetupError::OutOfBounds { id: 2, length: 3, .. })
        ));
        assert_eq!(world.agents().len(), 1);
        assert_eq!(world.agents()[0].display_index(), 0);
    }

    #[test]
    fn test_decision_time_accumulates() {
        let mut world = World::new(3, 2, FailurePolicy::Strict);
        world.add_agent(1, "a", Position::new(0, 0), Box::new(StayBot::new())).unwrap();
        let mut rng = rng();
        world.step(&mut rng).unwrap();
        let first = world.agent(1).unwrap().decision_time();
        world.step(&mut rng).unwrap();
        assert!(world.agent(1).unwrap().decision_time() >= first);
    }
}
