//! Match command - play many seeded sessions of one roster
//!
//! ## Architecture (4-layer granularity)
//!
//! - Level 1: run() - orchestration
//! - Level 2: build_match_config(), play_with_progress(), report_results()
//! - Level 3: text and JSON printers
//! - Level 4: progress bar

use anyhow::{Context, Result};
use clap::Args;
use indicatif::{ProgressBar, ProgressStyle};
use serde::Serialize;

use tilewar_core::{FailurePolicy, Roster};
use tilewar_tournament::{play_match_with_progress, MatchConfig, MatchResult, Standing};

use crate::run_cmd::{build_roster, percent};

// ============================================================================
// COMMAND ARGUMENTS (Level 4 - Configuration)
// ============================================================================

#[derive(Args)]
pub struct MatchArgs {
    /// Bot to register (repeatable)
    #[arg(long = "bot", value_name = "NAME", required = true)]
    pub bots: Vec<String>,

    /// Number of sessions to play
    #[arg(long, default_value = "10")]
    pub sessions: usize,

    /// Rounds per session
    #[arg(long, default_value = "100")]
    pub rounds: u32,

    /// Abort the match on the first bot failure
    #[arg(long)]
    pub strict: bool,

    /// Play sessions one at a time instead of in parallel
    #[arg(long)]
    pub sequential: bool,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// LEVEL 1 - ORCHESTRATION
// ============================================================================

/// Run match command
///
/// 1. Build the roster and match config
/// 2. Play every session behind a progress bar
/// 3. Report standings
pub fn run(args: MatchArgs, seed: Option<u64>) -> Result<()> {
    let roster = build_roster(&args.bots)?;
    let config = build_match_config(&args, seed);

    tracing::info!(
        "Starting match: {} ({} sessions, {} rounds)",
        roster.names().collect::<Vec<_>>().join(" vs "),
        config.sessions,
        config.session.rounds
    );

    let result = play_with_progress(&roster, &config, !args.json)?;

    report_results(&result, args.json)
}

// ============================================================================
// LEVEL 2 - PHASES
// ============================================================================

fn build_match_config(args: &MatchArgs, seed: Option<u64>) -> MatchConfig {
    let mut config = MatchConfig::new(args.sessions).with_rounds(args.rounds);
    if let Some(seed) = seed {
        config = config.with_seed(seed);
    }
    if args.strict {
        config = config.with_policy(FailurePolicy::Strict);
    }
    if args.sequential {
        config = config.sequential();
    }
    config
}

fn play_with_progress(roster: &Roster, config: &MatchConfig, show_progress: bool) -> Result<MatchResult> {
    let pb = if show_progress {
        create_progress_bar(config.sessions as u64)
    } else {
        ProgressBar::hidden()
    };

    let result = play_match_with_progress(roster, config, |_| pb.inc(1));
    pb.finish_and_clear();

    result.context("Match aborted")
}

fn report_results(result: &MatchResult, json: bool) -> Result<()> {
    if json {
        print_json_results(result)
    } else {
        print_text_results(result);
        Ok(())
    }
}

// ============================================================================
// LEVEL 3 - PRINTERS
// ============================================================================

#[derive(Serialize)]
struct JsonOutput<'a> {
    sessions: usize,
    standings: &'a [Standing],
    winner: Option<&'a str>,
}

fn print_json_results(result: &MatchResult) -> Result<()> {
    let output = JsonOutput {
        sessions: result.sessions_played(),
        standings: &result.standings,
        winner: result.winner().filter(|s| s.wins > 0).map(|s| s.name.as_str()),
    };
    println!("{}", serde_json::to_string_pretty(&output)?);
    Ok(())
}

fn print_text_results(result: &MatchResult) {
    let sessions = result.sessions_played();

    println!("\n=== Match Results ===");
    println!("Sessions: {}", sessions);
    println!();
    println!(
        "  {:<3} {:<12} {:>6} {:>7} {:>10} {:>8}",
        "#", "bot", "wins", "shared", "avg tiles", "win %"
    );
    for (rank, standing) in result.standings.iter().enumerate() {
        println!(
            "  {:<3} {:<12} {:>6} {:>7} {:>10.1} {:>7.1}%",
            rank + 1,
            standing.name,
            standing.wins,
            standing.shared_wins,
            standing.avg_tiles(),
            percent(standing.wins as usize, sessions)
        );
    }
}

// ============================================================================
// LEVEL 4 - UTILITIES
// ============================================================================

fn create_progress_bar(len: u64) -> ProgressBar {
    let pb = ProgressBar::new(len);
    if let Ok(style) = ProgressStyle::with_template("{bar:40} {pos}/{len} sessions [{elapsed_precise}]") {
        pb.set_style(style);
    }
    pb
}

// ============================================================================
// TESTS
// ============================================================================
