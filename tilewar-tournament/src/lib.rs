//! TILEWAR Tournament - Repeated sessions and standings
//!
//! This crate plays the same roster over many independently seeded
//! sessions and aggregates who ends up owning the most territory.
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: play_match (orchestration)
//! - Level 2: play_sessions, tally_standings (phases)
//! - Level 3: play_session (steps)
//! - Level 4: configuration

mod config;
mod match_play;

pub use config::MatchConfig;
pub use match_play::{play_match, play_match_with_progress, MatchResult, Standing};
