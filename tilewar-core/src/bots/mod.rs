//! Built-in bot strategies
//!
//! Each strategy is registered under a short name. `scripted` takes its
//! moves after a colon: `scripted:n,n,e,h`.

mod greedy;
mod random;
mod scripted;
mod stay;
mod sweeper;

pub use greedy::GreedyBot;
pub use random::RandomBot;
pub use scripted::ScriptedBot;
pub use stay::StayBot;
pub use sweeper::SweeperBot;

use std::sync::Arc;

use crate::bot::Bot;
use crate::roster::{BotFactory, Roster};

/// Names of the built-in strategies
pub const BUILTIN_BOTS: [&str; 5] = ["stay", "random", "greedy", "sweeper", "scripted"];

/// A bot name no built-in strategy answers to
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown bot {0:?} (available: stay, random, greedy, sweeper, scripted:<moves>)")]
pub struct UnknownBot(pub String);

/// Factory for a built-in strategy, by name
pub fn builtin(spec: &str) -> Result<BotFactory, UnknownBot> {
    let (name, arg) = match spec.split_once(':') {
        Some((name, arg)) => (name, Some(arg)),
        None => (spec, None),
    };

    let built = match (name, arg) {
        ("stay", None) => factory(|_| Box::new(StayBot::new())),
        ("random", None) => factory(|seed| Box::new(RandomBot::new(seed))),
        ("greedy", None) => factory(|seed| Box::new(GreedyBot::new(seed))),
        ("sweeper", None) => factory(|_| Box::new(SweeperBot::new())),
        ("scripted", script) => {
            let script = script.unwrap_or_default().to_string();
            factory(move |_| Box::new(ScriptedBot::from_script(&script)))
        }
        _ => return Err(UnknownBot(spec.to_string())),
    };

    Ok(built)
}

fn factory<F>(f: F) -> BotFactory
where
    F: Fn(u64) -> Box<dyn Bot> + Send + Sync + 'static,
{
    Arc::new(f)
}

/// Build a roster from built-in strategy names, in order
pub fn builtin_roster<I, S>(specs: I) -> Result<Roster, UnknownBot>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut roster = Roster::new();
    for spec in specs {
        let spec = spec.as_ref();
        let built = builtin(spec)?;
        let name = spec.split(':').next().unwrap_or(spec);
        roster.register_factory(name, built);
    }
    Ok(roster)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_builtin_resolves() {
        for name in BUILTIN_BOTS {
            let factory = builtin(name).unwrap();
            assert_eq!(factory(0).name(), name);
        }
    }

    #[test]
    fn test_scripted_with_moves() {
        let factory = builtin("scripted:n,e").unwrap();
        assert_eq!(factory(0).name(), "scripted");
    }

    #[test]
    fn test_unknown_bot() {
        assert!(matches!(builtin("teleporter"), Err(UnknownBot(ref n)) if n == "teleporter"));
        assert!(builtin("greedy:fast").is_err());
    }

    #[test]
    fn test_builtin_roster() {
        let roster = builtin_roster(&["greedy", "scripted:n", "stay"]).unwrap();
        assert_eq!(roster.names().collect::<Vec<_>>(), vec!["greedy", "scripted", "stay"]);
        assert!(builtin_roster(&["stay", "nope"]).is_err());
    }
}
