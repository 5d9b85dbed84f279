use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::engine::apply::apply_move;
use crate::engine::score::total_score;
use crate::grid::Grid;
use crate::rules::RuleSet;
use crate::types::Direction;

/// Position and value of a freshly spawned tile.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Spawn {
    pub row: usize,
    pub col: usize,
    pub value: u64,
}

/// Result of one full game step (move, conditional spawn, terminal check).
/// `merges` carries the resulting value of each merge for feedback layers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepOutcome {
    pub changed: bool,
    pub spawned: Option<Spawn>,
    pub terminal: bool,
    pub merges: Vec<u64>,
}

/// One game session: a grid, its score, and the active rule toggles.
///
/// The rule set is mutated only by explicit toggles and never triggers any
/// grid recomputation; already-merged tiles are never retroactively split.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub grid: Grid,
    pub score: u64,
    pub rules: RuleSet,
}

impl GameState {
    #[inline]
    pub fn new(size: usize, rules: RuleSet) -> Self {
        Self {
            grid: Grid::new(size),
            score: 0,
            rules,
        }
    }

    /// Adopt an existing grid, deriving its score from scratch.
    #[inline]
    pub fn with_grid(grid: Grid, rules: RuleSet) -> Self {
        let score = total_score(&grid);
        Self { grid, score, rules }
    }

    /// Zero the grid and the score. Rule toggles survive a reset.
    #[inline]
    pub fn reset(&mut self) {
        self.grid.clear();
        self.score = 0;
    }

    /// Reset and seed the opening position with two spawned tiles.
    pub fn start<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.reset();
        let _ = self.spawn_tile(rng);
        let _ = self.spawn_tile(rng);
    }

    #[inline]
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Spawn> {
        spawn_tile(&mut self.grid, rng)
    }

    /// One full step: apply the move; on change, adopt the new grid and
    /// recomputed score, then spawn a tile. A no-op move spawns nothing and
    /// leaves grid and score untouched.
    pub fn step<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> StepOutcome {
        let outcome = apply_move(&self.grid, direction, &self.rules);
        if !outcome.changed {
            return StepOutcome {
                changed: false,
                spawned: None,
                terminal: is_terminal(&self.grid),
                merges: Vec::new(),
            };
        }
        self.grid = outcome.grid;
        self.score = outcome.score;
        let spawned = self.spawn_tile(rng);
        StepOutcome {
            changed: true,
            spawned,
            terminal: is_terminal(&self.grid),
            merges: outcome.merges,
        }
    }

    #[inline]
    pub fn is_terminal(&self) -> bool {
        is_terminal(&self.grid)
    }

    /// Directions whose move would change the grid, in `Direction::all()`
    /// order. May disagree with `is_terminal` (see there); `is_terminal`
    /// stays authoritative for game over.
    pub fn legal_moves(&self) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|&d| apply_move(&self.grid, d, &self.rules).changed)
            .collect()
    }
}

/// Place a 1 (probability 0.5) or 2 into a uniformly random empty cell.
/// Returns `None` without mutating anything when the grid is full; callers
/// treat that as an expected result, not an error.
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<Spawn> {
    let empty = grid.empty_cells();
    if empty.is_empty() {
        return None;
    }
    let (row, col) = empty[rng.gen_range(0..empty.len())];
    let value = if rng.gen_bool(0.5) { 1 } else { 2 };
    grid.set(row, col, value);
    Some(Spawn { row, col, value })
}

/// Terminal iff the grid is full and no orthogonally-adjacent pair of cells
/// holds equal raw values.
///
/// The check is plain equality, deliberately independent of the ratio rules:
/// a full grid holding adjacent 2 and 4 is terminal even with ratio-2
/// enabled. This asymmetry with the merge rules is the authoritative
/// behavior, not a bug.
#[inline]
pub fn is_terminal(grid: &Grid) -> bool {
    grid.is_full() && !grid.has_equal_neighbors()
}

/// Re-export minimal surface for callers as free functions to align with the
/// planned API.
#[inline]
pub fn legal_moves(state: &GameState) -> Vec<Direction> {
    state.legal_moves()
}
