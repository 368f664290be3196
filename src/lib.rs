#![cfg_attr(not(test), forbid(clippy::unwrap_used))]
#![doc = include_str!("../README.md")]

#[macro_export]
#[doc(hidden)]
macro_rules! impl_display_from_debug {
    (@single $Type: ident) => {
        impl ::std::fmt::Display for $Type {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{:?}", self)
            }
        }
    };
    ($($Type: ident)+) => {
        $(impl_display_from_debug!(@single $Type);)+
    };
}

/// Module containing collection datatypes used by this crate, including the
/// frontier containers shared by the search algorithms.
pub mod data_structures;

/// Interface for single-agent search problems consumed by graph search.
pub mod search_problem;

/// Interface for multi-agent games consumed by game tree search.
pub mod game_tree_search;

/// Directions, positions and grids of the Pacman world.
pub mod types;

/// Text layouts for mazes and game boards.
pub mod layout;

/// Search problems defined on a layout, and their heuristics.
pub mod problems;

/// The Pacman game state and its evaluation functions.
pub mod game;

/// Simple non-searching agents and the game loop.
pub mod agents;

/// Re-exports the `smallvec` crate
pub use smallvec;

/// Re-exports the `rand` create
pub use rand;

/// Re-exports the `rustc_hash` crate
pub use rustc_hash;

/// Re-exports the `thiserror` crate
pub use thiserror;

/// Re-exports the `enumset` crate
pub use enumset;

pub mod prelude {
    pub use crate::agents::{run_game, Agent, GameRecord, RandomGhost, ReflexAgent, RunGameError};
    pub use crate::data_structures::{ActionList, PriorityQueue, Queue, Stack};
    pub use crate::game::{
        better_evaluation, reflex_evaluation, score_evaluation, EvaluationFn, GameError, GhostState, PacmanGameState,
    };
    pub use crate::game_tree_search::{AgentIndex, Evaluator, MultiAgentGame, Value, PACMAN_INDEX};
    pub use crate::layout::{read_layout_from_file, Layout, LayoutError};
    pub use crate::problems::{
        euclidean_heuristic, food_heuristic, manhattan_heuristic, CostFunction, FoodSearchProblem, FoodState,
        PositionSearchProblem,
    };
    pub use crate::search_problem::{null_heuristic, Cost, Heuristic, NullHeuristic, SearchProblem, Successor};
    pub use crate::types::{Direction, Grid, Position};
}

#[cfg(test)]
mod tests;
