#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)] // may be revisited

pub mod types;
pub mod rules;
pub mod grid;
pub mod state;
pub mod rng;

pub mod engine {
    pub mod apply;
    pub mod score;
}

// Re-exports: stable minimal API surface for external callers
pub use crate::engine::apply::{apply_move, MoveOutcome};
pub use crate::engine::score::{tile_score, total_score};
pub use crate::grid::{Grid, DEFAULT_SIZE};
pub use crate::rng::rng_for_game;
pub use crate::rules::{RuleSet, RULE_COUNT};
pub use crate::state::{is_terminal, legal_moves, spawn_tile, GameState, Spawn, StepOutcome};
pub use crate::types::Direction;
