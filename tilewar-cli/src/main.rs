//! TILEWAR CLI - Command-line interface
//!
//! Commands:
//! - run: Play a single session
//! - match: Play many seeded sessions and rank the bot types
//! - bots: List the built-in bot types

mod match_cmd;
mod run_cmd;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tilewar")]
#[command(about = "TILEWAR grid territory bot simulator")]
struct Cli {
    /// Random seed for reproducible runs
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Enable debug logging (overridden by RUST_LOG)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play a single session
    Run(run_cmd::RunArgs),
    /// Play a match of many sessions
    Match(match_cmd::MatchArgs),
    /// List built-in bots
    Bots,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    init_logging(cli.verbose);
    install_panic_hook();

    match cli.command {
        Commands::Run(args) => run_cmd::run(args, cli.seed),
        Commands::Match(args) => match_cmd::run(args, cli.seed),
        Commands::Bots => {
            for name in tilewar_core::BUILTIN_BOTS {
                println!("{}", name);
            }
            Ok(())
        }
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Report panics through tracing. Lenient sessions catch bot panics every
/// round and would otherwise print a raw backtrace notice for each one.
fn install_panic_hook() {
    std::panic::set_hook(Box::new(|info| {
        let location = info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_default();
        tracing::warn!(%location, "panic: {}", panic_message(info.payload()));
    }));
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> &str {
    payload
        .downcast_ref::<&str>()
        .copied()
        .or_else(|| payload.downcast_ref::<String>().map(String::as_str))
        .unwrap_or("unknown panic")
}
