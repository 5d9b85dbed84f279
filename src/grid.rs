use serde::{Deserialize, Serialize};
use std::fmt;

/// Default side length for a new game.
pub const DEFAULT_SIZE: usize = 6;

/// Square board of tile values, row-major. `0` is an empty cell; any
/// positive value is a tile. Values are unsigned, so negative or fractional
/// cells are unrepresentable by construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Grid {
    size: usize,
    cells: Vec<u64>,
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(DEFAULT_SIZE)
    }
}

impl Grid {
    /// An all-empty grid of the given side length.
    #[inline]
    pub fn new(size: usize) -> Self {
        debug_assert!(size > 0);
        Self {
            size,
            cells: vec![0; size * size],
        }
    }

    /// Build a grid from explicit rows. Errors unless the input is square
    /// and non-empty.
    pub fn from_rows(rows: &[Vec<u64>]) -> Result<Self, String> {
        let size = rows.len();
        if size == 0 {
            return Err("Grid must have at least one row".to_string());
        }
        let mut cells = Vec::with_capacity(size * size);
        for (r, row) in rows.iter().enumerate() {
            if row.len() != size {
                return Err(format!(
                    "Row {} has {} cells, expected {} (grid must be square)",
                    r,
                    row.len(),
                    size
                ));
            }
            cells.extend_from_slice(row);
        }
        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn idx(&self, row: usize, col: usize) -> usize {
        debug_assert!(row < self.size && col < self.size);
        row * self.size + col
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u64 {
        self.cells[self.idx(row, col)]
    }

    #[inline]
    pub fn set(&mut self, row: usize, col: usize, value: u64) {
        let i = self.idx(row, col);
        self.cells[i] = value;
    }

    /// Reset every cell to empty.
    #[inline]
    pub fn clear(&mut self) {
        self.cells.fill(0);
    }

    /// Iterate all cell values row-major, zeros included.
    #[inline]
    pub fn values(&self) -> impl Iterator<Item = u64> + '_ {
        self.cells.iter().copied()
    }

    #[inline]
    pub fn count_empty(&self) -> usize {
        self.cells.iter().filter(|&&v| v == 0).count()
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.count_empty() == 0
    }

    /// Coordinates of all empty cells, row-major order.
    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::new();
        for row in 0..self.size {
            for col in 0..self.size {
                if self.get(row, col) == 0 {
                    out.push((row, col));
                }
            }
        }
        out
    }

    #[inline]
    pub fn highest_tile(&self) -> u64 {
        self.cells.iter().copied().max().unwrap_or(0)
    }

    /// Sum of all tile values. Merges conserve this; only spawns raise it.
    #[inline]
    pub fn tile_sum(&self) -> u64 {
        self.cells.iter().sum()
    }

    /// True iff some orthogonally-adjacent pair of non-empty cells holds
    /// equal raw values.
    pub fn has_equal_neighbors(&self) -> bool {
        let n = self.size;
        for row in 0..n {
            for col in 0..n {
                let v = self.get(row, col);
                if v == 0 {
                    continue;
                }
                if col + 1 < n && self.get(row, col + 1) == v {
                    return true;
                }
                if row + 1 < n && self.get(row + 1, col) == v {
                    return true;
                }
            }
        }
        false
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                let v = self.get(row, col);
                if v == 0 {
                    write!(f, "{:>6}", ".")?;
                } else {
                    write!(f, "{v:>6}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
