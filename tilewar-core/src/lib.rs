//! TILEWAR Core - Grid territory engine
//!
//! This crate provides the simulation core for TILEWAR:
//! - Square grid of tile colours and the repaint rule
//! - Bot decision trait, scratch storage and bot rosters
//! - Round engine (decide, move, repaint)
//! - Scoreboard and session controller
//! - Built-in bot strategies

pub mod agent;
pub mod bot;
pub mod bots;
pub mod config;
pub mod error;
pub mod grid;
pub mod moves;
pub mod paint;
pub mod roster;
pub mod score;
pub mod session;
pub mod storage;
pub mod world;

// Re-exports for convenient access
pub use agent::Agent;
pub use bot::{Bot, BotView, DecisionContext, DecisionError, RoundInfo};
pub use bots::{builtin, builtin_roster, UnknownBot, BUILTIN_BOTS};
pub use config::{FailurePolicy, SessionConfig};
pub use error::{ConfigError, EngineError, SetupError};
pub use grid::{grid_length_for, BotId, Colour, Grid, Position, CELLS_PER_BOT, UNCLAIMED};
pub use moves::{Move, ParseMoveError, ALL_MOVES};
pub use paint::{classify, determine_new_tile_colour, TileOutcome};
pub use roster::{BotFactory, Roster, RosterEntry};
pub use score::{ScoreEntry, Scoreboard};
pub use session::{Session, SessionOutcome};
pub use storage::BotStorage;
pub use world::World;
