//! Square territory grid

use std::ops::Index;

use serde::{Deserialize, Serialize};

/// Cells reserved per bot when sizing the grid (an 8x8 patch each)
pub const CELLS_PER_BOT: usize = 8 * 8;

/// Bot identity. Always positive; 0 is reserved for unclaimed tiles.
pub type BotId = u32;

/// Tile colour: either [`UNCLAIMED`] or the identity of the owning bot
pub type Colour = BotId;

/// Colour of a tile nobody owns
pub const UNCLAIMED: Colour = 0;

/// Grid coordinates. `x` grows to the right, `y` grows upwards.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Position {
    pub x: usize,
    pub y: usize,
}

impl Position {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// Apply a displacement, clamping each axis independently to `[0, length - 1]`
    pub fn offset_clamped(self, (dx, dy): (i8, i8), length: usize) -> Position {
        let max = length.saturating_sub(1);
        Position::new(clamp_axis(self.x, dx, max), clamp_axis(self.y, dy, max))
    }

    /// Manhattan distance between two positions
    pub fn distance_to(self, other: Position) -> usize {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

fn clamp_axis(value: usize, delta: i8, max: usize) -> usize {
    let moved = value as i64 + delta as i64;
    moved.clamp(0, max as i64) as usize
}

/// Side length of the grid for `bot_count` bots: `ceil(sqrt(cells_per_bot * bot_count))`
pub fn grid_length_for(bot_count: usize, cells_per_bot: usize) -> usize {
    let cells = bot_count * cells_per_bot;
    let mut length = (cells as f64).sqrt().ceil() as usize;

    // Float sqrt can be off by one around perfect squares
    while length * length < cells {
        length += 1;
    }
    while length > 0 && (length - 1) * (length - 1) >= cells {
        length -= 1;
    }

    length
}

/// `length x length` matrix of tile colours, stored row-major (`[y][x]`)
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grid {
    length: usize,
    cells: Vec<Colour>,
}

impl Grid {
    /// Create an all-unclaimed grid
    pub fn new(length: usize) -> Self {
        Self {
            length,
            cells: vec![UNCLAIMED; length * length],
        }
    }

    /// Build a grid from rows indexed `[y][x]`. Returns `None` unless the rows form a square.
    pub fn from_rows(rows: &[Vec<Colour>]) -> Option<Self> {
        let length = rows.len();
        if rows.iter().any(|row| row.len() != length) {
            return None;
        }

        Some(Self {
            length,
            cells: rows.iter().flatten().copied().collect(),
        })
    }

    /// Side length
    pub fn length(&self) -> usize {
        self.length
    }

    /// Total number of cells (`length²`)
    pub fn cell_count(&self) -> usize {
        self.cells.len()
    }

    /// Check if a position lies on the grid
    pub fn contains(&self, pos: Position) -> bool {
        pos.x < self.length && pos.y < self.length
    }

    /// Colour at a position, `None` when off the grid
    pub fn get(&self, pos: Position) -> Option<Colour> {
        if self.contains(pos) {
            Some(self.cells[self.index_of(pos)])
        } else {
            None
        }
    }

    /// Overwrite a tile. Only the repaint phase calls this.
    pub(crate) fn set(&mut self, pos: Position, colour: Colour) {
        let idx = self.index_of(pos);
        self.cells[idx] = colour;
    }

    /// Number of tiles with the given colour
    pub fn count(&self, colour: Colour) -> usize {
        self.cells.iter().filter(|&&c| c == colour).count()
    }

    /// Number of unclaimed tiles
    pub fn unclaimed(&self) -> usize {
        self.count(UNCLAIMED)
    }

    /// Iterate rows, bottom row (`y == 0`) first
    pub fn rows(&self) -> impl Iterator<Item = &[Colour]> + '_ {
        self.cells.chunks(self.length.max(1))
    }

    /// Iterate every cell with its position
    pub fn cells(&self) -> impl Iterator<Item = (Position, Colour)> + '_ {
        let length = self.length;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &c)| (Position::new(i % length, i / length), c))
    }

    /// Copy out as nested rows, `[y][x]`
    pub fn to_rows(&self) -> Vec<Vec<Colour>> {
        self.rows().map(<[Colour]>::to_vec).collect()
    }

    fn index_of(&self, pos: Position) -> usize {
        pos.y * self.length + pos.x
    }
}

impl Index<Position> for Grid {
    type Output = Colour;

    fn index(&self, pos: Position) -> &Colour {
        &self.cells[self.index_of(pos)]
    }
}
