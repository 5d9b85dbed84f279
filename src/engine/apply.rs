use crate::engine::score::total_score;
use crate::grid::Grid;
use crate::rules::RuleSet;
use crate::types::Direction;

/// Result of applying a move as a pure transform.
///
/// `score` is the full-grid total of `grid`; when `changed` is false the
/// returned grid is identical to the input, so the score equals the pre-move
/// total and callers must neither spawn a tile nor update any display.
///
/// `merges` lists the resulting value of every merge in the order the merges
/// happened (lines in index order, merges within a line in scan order), for
/// feedback layers that react per merge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MoveOutcome {
    pub grid: Grid,
    pub changed: bool,
    pub score: u64,
    pub merges: Vec<u64>,
}

/// Slide and merge every line of `grid` toward `direction` under the active
/// ratio rules, returning the outcome without touching the input.
///
/// Each of the N rows (left/right) or columns (up/down) is processed
/// independently: extract in traversal order, drop zeros, run a single-pass
/// greedy merge, pad with zeros at the far end, write back.
pub fn apply_move(grid: &Grid, direction: Direction, rules: &RuleSet) -> MoveOutcome {
    let n = grid.size();
    let mut next = grid.clone();
    let mut merges = Vec::new();

    for line_idx in 0..n {
        let coords = line_coords(n, direction, line_idx);
        let mut line: Vec<u64> = coords
            .iter()
            .map(|&(r, c)| grid.get(r, c))
            .filter(|&v| v != 0)
            .collect();
        merge_line(&mut line, rules, &mut merges);
        for (k, &(r, c)) in coords.iter().enumerate() {
            let v = line.get(k).copied().unwrap_or(0);
            next.set(r, c, v);
        }
    }

    let changed = next != *grid;
    let score = total_score(&next);
    MoveOutcome {
        grid: next,
        changed,
        score,
        merges,
    }
}

/// Cell coordinates of one line in traversal order: the first coordinate is
/// the cell tiles slide toward.
fn line_coords(n: usize, direction: Direction, line_idx: usize) -> Vec<(usize, usize)> {
    match direction {
        Direction::Left => (0..n).map(|c| (line_idx, c)).collect(),
        Direction::Right => (0..n).rev().map(|c| (line_idx, c)).collect(),
        Direction::Up => (0..n).map(|r| (r, line_idx)).collect(),
        Direction::Down => (0..n).rev().map(|r| (r, line_idx)).collect(),
    }
}

/// Single-pass greedy merge over a compacted (zero-free) line.
///
/// When `line[i]` and `line[i+1]` merge, the scan stays at index `i`: the
/// merged tile is compared against its new right neighbor and may chain.
/// The trailing side of a merge is never revisited. Each merge result is
/// appended to `merges`.
fn merge_line(line: &mut Vec<u64>, rules: &RuleSet, merges: &mut Vec<u64>) {
    let mut i = 0;
    while i + 1 < line.len() {
        if rules.allows_merge(line[i], line[i + 1]) {
            line[i] += line[i + 1];
            line.remove(i + 1);
            merges.push(line[i]);
        } else {
            i += 1;
        }
    }
}
