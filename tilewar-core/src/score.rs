//! Per-bot tile counts derived from the grid

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::agent::Agent;
use crate::grid::{BotId, Grid, UNCLAIMED};

/// Tiles owned by one bot
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoreEntry {
    pub id: BotId,
    pub name: String,
    pub display_index: usize,
    pub tiles: usize,
}

/// Snapshot of tile ownership
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// One entry per registered bot, in display order
    pub entries: Vec<ScoreEntry>,
    pub unclaimed: usize,
    pub total_cells: usize,
}

impl Scoreboard {
    /// Count tiles for every agent in one pass over the grid
    pub fn tally(grid: &Grid, agents: &[Agent]) -> Self {
        let mut counts: FxHashMap<BotId, usize> = FxHashMap::default();
        for (_, colour) in grid.cells() {
            *counts.entry(colour).or_insert(0) += 1;
        }

        let mut entries: Vec<ScoreEntry> = agents
            .iter()
            .map(|agent| ScoreEntry {
                id: agent.id(),
                name: agent.name().to_string(),
                display_index: agent.display_index(),
                tiles: counts.get(&agent.id()).copied().unwrap_or(0),
            })
            .collect();
        entries.sort_by_key(|e| e.display_index);

        Self {
            entries,
            unclaimed: counts.get(&UNCLAIMED).copied().unwrap_or(0),
            total_cells: grid.cell_count(),
        }
    }

    /// Tiles owned by a bot
    pub fn tiles_for(&self, id: BotId) -> Option<usize> {
        self.entries.iter().find(|e| e.id == id).map(|e| e.tiles)
    }

    /// Identity -> tile count
    pub fn as_map(&self) -> FxHashMap<BotId, usize> {
        self.entries.iter().map(|e| (e.id, e.tiles)).collect()
    }

    /// Tiles owned by anyone
    pub fn claimed(&self) -> usize {
        self.entries.iter().map(|e| e.tiles).sum()
    }

    /// All entries sharing the highest tile count (empty when nobody owns anything)
    pub fn leaders(&self) -> Vec<&ScoreEntry> {
        let best = self.entries.iter().map(|e| e.tiles).max().unwrap_or(0);
        if best == 0 {
            return Vec::new();
        }
        self.entries.iter().filter(|e| e.tiles == best).collect()
    }

    /// Entries ordered by tiles, descending (display order breaks ties)
    pub fn ranked(&self) -> Vec<&ScoreEntry> {
        let mut ranked: Vec<_> = self.entries.iter().collect();
        ranked.sort_by(|a, b| b.tiles.cmp(&a.tiles).then(a.display_index.cmp(&b.display_index)));
        ranked
    }
}
