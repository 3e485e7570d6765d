//! Registered bot types

use std::fmt;
use std::sync::Arc;

use crate::bot::Bot;

/// Builds a fresh bot instance from a per-bot seed
pub type BotFactory = Arc<dyn Fn(u64) -> Box<dyn Bot> + Send + Sync>;

/// A named bot type
#[derive(Clone)]
pub struct RosterEntry {
    name: String,
    factory: BotFactory,
}

impl RosterEntry {
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Instantiate a fresh bot
    pub fn build(&self, seed: u64) -> Box<dyn Bot> {
        (self.factory)(seed)
    }
}

/// Ordered list of bot types taking part in a session.
///
/// Registration order is the order bots move and repaint in.
#[derive(Clone, Default)]
pub struct Roster {
    entries: Vec<RosterEntry>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a bot type
    pub fn register<F>(&mut self, name: impl Into<String>, factory: F)
    where
        F: Fn(u64) -> Box<dyn Bot> + Send + Sync + 'static,
    {
        self.register_factory(name, Arc::new(factory));
    }

    /// Register a bot type from an existing factory
    pub fn register_factory(&mut self, name: impl Into<String>, factory: BotFactory) {
        self.entries.push(RosterEntry {
            name: name.into(),
            factory,
        });
    }

    /// Builder-style [`register`](Self::register)
    pub fn with<F>(mut self, name: impl Into<String>, factory: F) -> Self
    where
        F: Fn(u64) -> Box<dyn Bot> + Send + Sync + 'static,
    {
        self.register(name, factory);
        self
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn entries(&self) -> &[RosterEntry] {
        &self.entries
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.entries.iter().map(|e| e.name.as_str())
    }
}

impl fmt::Debug for Roster {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.names()).finish()
    }
}
