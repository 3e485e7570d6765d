//! Run command - play a single session
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_config(), build_roster(), report_outcome()
//! - Level 3: text and JSON printers
//! - Level 4: seed utilities

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Args;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use tilewar_core::{builtin_roster, Colour, FailurePolicy, Roster, Session, SessionConfig, SessionOutcome};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct RunArgs {
    /// Bot to register (repeatable), e.g. `greedy` or `scripted:n,e,s`
    #[arg(long = "bot", value_name = "NAME", required = true)]
    pub bots: Vec<String>,

    /// Rounds to play (overrides the config file)
    #[arg(long)]
    pub rounds: Option<u32>,

    /// Abort on the first bot failure instead of substituting STAY
    #[arg(long)]
    pub strict: bool,

    /// Grid cells per bot (overrides the config file)
    #[arg(long)]
    pub cells_per_bot: Option<usize>,

    /// Session config JSON file
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run a single session
///
/// 1. Build config and roster
/// 2. Play every round
/// 3. Report the scoreboard
pub fn run(args: RunArgs, seed: Option<u64>) -> Result<()> {
    let config = build_config(&args, seed)?;
    let roster = build_roster(&args.bots)?;

    tracing::info!(
        "Starting session: {} bots, {} rounds, seed {:?}",
        roster.len(),
        config.rounds,
        config.seed
    );

    let mut session = Session::new(config.clone(), roster).context("Invalid session setup")?;
    let outcome = session.run().context("Session aborted")?;

    report_outcome(&outcome, &config, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

/// Merge config file, flags and seed. Flags win over the file.
fn build_config(args: &RunArgs, seed: Option<u64>) -> Result<SessionConfig> {
    let mut config = match &args.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("Failed to load session config: {}", path.display()))?,
        None => SessionConfig::default(),
    };

    if let Some(rounds) = args.rounds {
        config.rounds = rounds;
    }
    if let Some(cells) = args.cells_per_bot {
        config.cells_per_bot = cells;
    }
    if args.strict {
        config.policy = FailurePolicy::Strict;
    }

    config.seed = Some(resolve_seed(seed.or(config.seed)));
    Ok(config)
}

/// Build a roster from built-in bot specs
pub(crate) fn build_roster(specs: &[String]) -> Result<Roster> {
    builtin_roster(specs).context("Failed to build roster")
}

fn report_outcome(outcome: &SessionOutcome, config: &SessionConfig, json: bool) -> Result<()> {
    if json {
        print_json_outcome(outcome, config)
    } else {
        print_text_outcome(outcome, config);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - PRINTERS
// ============================================================================

#[derive(Serialize)]
struct JsonScore<'a> {
    id: u32,
    name: &'a str,
    tiles: usize,
}

#[derive(Serialize)]
struct JsonOutput<'a> {
    seed: Option<u64>,
    rounds_played: u32,
    grid_length: usize,
    unclaimed: usize,
    scores: Vec<JsonScore<'a>>,
    grid: Vec<Vec<Colour>>,
}

fn json_output<'a>(outcome: &'a SessionOutcome, config: &SessionConfig) -> JsonOutput<'a> {
    JsonOutput {
        seed: config.seed,
        rounds_played: outcome.rounds_played,
        grid_length: outcome.grid_length,
        unclaimed: outcome.scoreboard.unclaimed,
        scores: outcome
            .scoreboard
            .entries
            .iter()
            .map(|e| JsonScore {
                id: e.id,
                name: &e.name,
                tiles: e.tiles,
            })
            .collect(),
        grid: outcome.grid.to_rows(),
    }
}

fn print_json_outcome(outcome: &SessionOutcome, config: &SessionConfig) -> Result<()> {
    let json = serde_json::to_string_pretty(&json_output(outcome, config))?;
    println!("{}", json);
    Ok(())
}

fn print_text_outcome(outcome: &SessionOutcome, config: &SessionConfig) {
    let sb = &outcome.scoreboard;

    println!("\n=== Session Results ===");
    if let Some(seed) = config.seed {
        println!("Seed:        {}", seed);
    }
    println!("Rounds:      {}", outcome.rounds_played);
    println!("Grid:        {}x{}", outcome.grid_length, outcome.grid_length);
    println!("Unclaimed:   {} ({:.1}%)", sb.unclaimed, percent(sb.unclaimed, sb.total_cells));

    println!("\nScores:");
    for entry in sb.ranked() {
        println!(
            "  {:<12} (id {:>2}) {:>5} tiles ({:.1}%)",
            entry.name,
            entry.id,
            entry.tiles,
            percent(entry.tiles, sb.total_cells)
        );
    }

    let leaders = sb.leaders();
    match leaders.len() {
        0 => println!("\nNo tiles claimed"),
        1 => println!("\nWinner: {}", leaders[0].name),
        _ => {
            let names: Vec<_> = leaders.iter().map(|e| e.name.as_str()).collect();
            println!("\nTied: {}", names.join(", "));
        }
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

/// Use the given seed or draw one, so every run can be replayed
fn resolve_seed(seed: Option<u64>) -> u64 {
    seed.unwrap_or_else(|| ChaCha8Rng::from_entropy().gen())
}

pub(crate) fn percent(part: usize, total: usize) -> f32 {
    if total == 0 {
        0.0
    } else {
        part as f32 / total as f32 * 100.0
    }
}

// ============================================================================
// TESTS
// ============================================================================
