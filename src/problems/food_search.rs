use std::sync::Arc;

use crate::{
    data_structures::ActionList,
    layout::Layout,
    search_problem::{Cost, SearchProblem, Successor},
    types::{Direction, Grid, Position},
};

/// Pacman's position together with the food still on the board.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FoodState {
    pub position: Position,
    pub food: Grid<bool>,
}

impl FoodState {
    #[inline]
    pub fn remaining(&self) -> usize {
        self.food.count_set()
    }
}

/// Eat every food dot on the board. Every step costs 1.
#[derive(Debug, Clone)]
pub struct FoodSearchProblem {
    layout: Arc<Layout>,
    start: FoodState,
}

impl FoodSearchProblem {
    pub fn new(layout: Arc<Layout>) -> Self {
        let start = FoodState {
            position: layout.pacman_start,
            food: layout.food.clone(),
        };
        Self { layout, start }
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }
}

impl SearchProblem for FoodSearchProblem {
    type State = FoodState;
    type Action = Direction;
    type Successors = ActionList<Successor<FoodState, Direction>>;

    fn start_state(&self) -> FoodState {
        self.start.clone()
    }

    fn is_goal_state(&self, state: &FoodState) -> bool {
        state.remaining() == 0
    }

    fn successors(&self, state: &FoodState) -> Self::Successors {
        self.layout
            .open_moves(state.position)
            .iter()
            .map(|d| {
                let position = state.position.step(d);
                let mut food = state.food.clone();
                food.set(position, false);
                Successor::new(FoodState { position, food }, d, 1.0)
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Option<Cost> {
        let mut pos = self.start.position;
        for &action in actions {
            if action == Direction::Stop {
                return None;
            }
            pos = pos.step(action);
            if self.layout.is_wall(pos) {
                return None;
            }
        }
        Some(actions.len() as Cost)
    }
}
