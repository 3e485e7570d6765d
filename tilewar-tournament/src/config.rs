//! Configuration types for match play
//!
//! Level 4 - Utilities and configuration

use tilewar_core::{FailurePolicy, SessionConfig};

/// Match configuration
#[derive(Clone, Debug)]
pub struct MatchConfig {
    /// Number of independent sessions to play
    pub sessions: usize,
    /// Configuration shared by every session. Its seed is the base seed:
    /// session `i` runs with `seed + i`.
    pub session: SessionConfig,
    /// Whether to run sessions in parallel
    pub parallel: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            sessions: 10,
            session: SessionConfig::default(),
            parallel: true,
        }
    }
}

impl MatchConfig {
    /// Create config playing the given number of sessions
    pub fn new(sessions: usize) -> Self {
        Self {
            sessions,
            ..Default::default()
        }
    }

    /// Set rounds per session
    pub fn with_rounds(mut self, rounds: u32) -> Self {
        self.session.rounds = rounds;
        self
    }

    /// Set base random seed
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.session.seed = Some(seed);
        self
    }

    /// Set bot failure policy
    pub fn with_policy(mut self, policy: FailurePolicy) -> Self {
        self.session.policy = policy;
        self
    }

    /// Run sessions one after another
    pub fn sequential(mut self) -> Self {
        self.parallel = false;
        self
    }
}
