//! Match play - multiple sessions of one roster
//!
//! Level 1 - Orchestration and Level 2 - Phases

use rayon::prelude::*;
use serde::Serialize;
use tilewar_core::{EngineError, Roster, Session, SessionOutcome};
use tracing::{debug, info};

use crate::config::MatchConfig;

/// Aggregate results of one roster entry across a match
#[derive(Clone, Debug, Serialize)]
pub struct Standing {
    /// Index of the entry in the roster
    pub index: usize,
    /// Name of the bot type
    pub name: String,
    /// Sessions finished as the sole tile leader
    pub wins: u32,
    /// Sessions finished tied for the lead
    pub shared_wins: u32,
    /// Tiles owned at the end of each session, summed
    pub total_tiles: usize,
    /// Sessions played
    pub sessions_played: u32,
}

impl Standing {
    fn new(index: usize, name: &str) -> Self {
        Self {
            index,
            name: name.to_string(),
            wins: 0,
            shared_wins: 0,
            total_tiles: 0,
            sessions_played: 0,
        }
    }

    /// Average tiles owned at session end
    pub fn avg_tiles(&self) -> f32 {
        if self.sessions_played == 0 {
            0.0
        } else {
            self.total_tiles as f32 / self.sessions_played as f32
        }
    }

    /// Win rate (sole wins only)
    pub fn win_rate(&self) -> f32 {
        if self.sessions_played == 0 {
            0.0
        } else {
            self.wins as f32 / self.sessions_played as f32
        }
    }
}

/// Result of a match
#[derive(Clone, Debug)]
pub struct MatchResult {
    /// Standings sorted by wins, then average tiles (descending)
    pub standings: Vec<Standing>,
    /// Outcome of every session, in seed order
    pub outcomes: Vec<SessionOutcome>,
}

impl MatchResult {
    /// Top standing
    pub fn winner(&self) -> Option<&Standing> {
        self.standings.first()
    }

    /// Standing for a roster index
    pub fn standing_for(&self, index: usize) -> Option<&Standing> {
        self.standings.iter().find(|s| s.index == index)
    }

    pub fn sessions_played(&self) -> usize {
        self.outcomes.len()
    }
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Play a match
///
/// 1. Play every session (parallel or sequential)
/// 2. Tally standings
pub fn play_match(roster: &Roster, config: &MatchConfig) -> Result<MatchResult, EngineError> {
    play_match_with_progress(roster, config, |_| {})
}

/// Play a match, calling `on_session` as each session finishes
pub fn play_match_with_progress<F>(
    roster: &Roster,
    config: &MatchConfig,
    on_session: F,
) -> Result<MatchResult, EngineError>
where
    F: Fn(&SessionOutcome) + Sync,
{
    let base_seed = config.session.seed.unwrap_or_else(rand::random);

    info!(
        bots = roster.len(),
        sessions = config.sessions,
        rounds = config.session.rounds,
        base_seed,
        "starting match"
    );

    let outcomes = play_sessions(roster, config, base_seed, &on_session)?;
    let result = tally_standings(roster, outcomes);

    if let Some(winner) = result.winner() {
        info!(winner = %winner.name, wins = winner.wins, "match complete");
    }

    Ok(result)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn play_sessions<F>(
    roster: &Roster,
    config: &MatchConfig,
    base_seed: u64,
    on_session: &F,
) -> Result<Vec<SessionOutcome>, EngineError>
where
    F: Fn(&SessionOutcome) + Sync,
{
    let run = |i: usize| -> Result<SessionOutcome, EngineError> {
        let outcome = play_session(roster, config, base_seed.wrapping_add(i as u64))?;
        on_session(&outcome);
        Ok(outcome)
    };

    if config.parallel {
        (0..config.sessions).into_par_iter().map(run).collect()
    } else {
        (0..config.sessions).map(run).collect()
    }
}

fn tally_standings(roster: &Roster, outcomes: Vec<SessionOutcome>) -> MatchResult {
    let mut standings: Vec<Standing> = roster
        .entries()
        .iter()
        .enumerate()
        .map(|(i, entry)| Standing::new(i, entry.name()))
        .collect();

    for outcome in &outcomes {
        for entry in &outcome.scoreboard.entries {
            if let Some(standing) = standings.get_mut(entry.display_index) {
                standing.total_tiles += entry.tiles;
                standing.sessions_played += 1;
            }
        }

        let leaders = outcome.scoreboard.leaders();
        let shared = leaders.len() > 1;
        for leader in leaders {
            if let Some(standing) = standings.get_mut(leader.display_index) {
                if shared {
                    standing.shared_wins += 1;
                } else {
                    standing.wins += 1;
                }
            }
        }
    }

    standings.sort_by(|a, b| {
        b.wins
            .cmp(&a.wins)
            .then(
                b.avg_tiles()
                    .partial_cmp(&a.avg_tiles())
                    .unwrap_or(std::cmp::Ordering::Equal),
            )
            .then(a.index.cmp(&b.index))
    });

    MatchResult {
        standings,
        outcomes,
    }
}

// ============================================================================
// LEVEL 3 - STEPS
// ============================================================================

fn play_session(roster: &Roster, config: &MatchConfig, seed: u64) -> Result<SessionOutcome, EngineError> {
    let session_config = config.session.clone().with_seed(seed);
    let mut session = Session::new(session_config, roster.clone())?;
    let outcome = session.run()?;
    debug!(seed, rounds = outcome.rounds_played, "session finished");
    Ok(outcome)
}
