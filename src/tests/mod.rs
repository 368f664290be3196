use std::sync::Arc;

use crate::game::PacmanGameState;
use crate::game_tree_search::{AgentIndex, MultiAgentGame};
use crate::layout::Layout;
use crate::types::Direction;

pub mod game_rules;

pub mod prop_tests;

/// Panics: If the layout does not parse.
fn game_from(text: &str) -> PacmanGameState {
    let layout: Layout = text.parse().unwrap();
    PacmanGameState::new(Arc::new(layout))
}

impl PacmanGameState {
    /// Panics: If any move is rejected.
    fn advance_multiple<T: IntoIterator<Item = (AgentIndex, Direction)>>(&self, moves: T) -> PacmanGameState {
        let mut state = self.clone();
        for (agent, action) in moves {
            state = state.generate_successor(agent, action).unwrap();
        }
        state
    }
}
