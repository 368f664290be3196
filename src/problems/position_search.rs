use std::{str::FromStr, sync::Arc};

use crate::{
    data_structures::ActionList,
    layout::Layout,
    search_problem::{Cost, SearchProblem, Successor},
    types::{Direction, Position},
};

/// Price of stepping onto a cell.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CostFunction {
    /// Every step costs 1.
    #[default]
    Unit,
    /// Cells to the east are cheaper: `0.5 ^ x`.
    StayEast,
    /// Cells to the west are cheaper: `2 ^ x`.
    StayWest,
}

impl CostFunction {
    #[inline]
    pub fn cost(self, pos: Position) -> Cost {
        match self {
            CostFunction::Unit => 1.0,
            CostFunction::StayEast => 0.5f64.powi(pos.x),
            CostFunction::StayWest => 2f64.powi(pos.x),
        }
    }
}

impl FromStr for CostFunction {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "unit" => Ok(Self::Unit),
            "stay-east" | "east" => Ok(Self::StayEast),
            "stay-west" | "west" => Ok(Self::StayWest),
            _ => Err("expected unit|stay-east|stay-west"),
        }
    }
}

/// Find a path from a start cell to a goal cell. The search state is Pacman's position.
#[derive(Debug, Clone)]
pub struct PositionSearchProblem {
    layout: Arc<Layout>,
    start: Position,
    goal: Position,
    cost_fn: CostFunction,
}

impl PositionSearchProblem {
    pub fn new(layout: Arc<Layout>, start: Position, goal: Position, cost_fn: CostFunction) -> Self {
        Self {
            layout,
            start,
            goal,
            cost_fn,
        }
    }

    /// Starts at the layout's Pacman position with its only food dot as the goal.
    /// Returns `None` unless the layout has exactly one food dot.
    pub fn from_layout(layout: Arc<Layout>, cost_fn: CostFunction) -> Option<Self> {
        let goal = {
            let mut food = layout.food.set_positions();
            let goal = food.next()?;
            if food.next().is_some() {
                return None;
            }
            goal
        };
        let start = layout.pacman_start;
        Some(Self::new(layout, start, goal, cost_fn))
    }

    #[inline]
    pub fn goal(&self) -> Position {
        self.goal
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn cost_fn(&self) -> CostFunction {
        self.cost_fn
    }
}

impl SearchProblem for PositionSearchProblem {
    type State = Position;
    type Action = Direction;
    type Successors = ActionList<Successor<Position, Direction>>;

    fn start_state(&self) -> Position {
        self.start
    }

    fn is_goal_state(&self, state: &Position) -> bool {
        *state == self.goal
    }

    fn successors(&self, state: &Position) -> Self::Successors {
        self.layout
            .open_moves(*state)
            .iter()
            .map(|d| {
                let next = state.step(d);
                Successor::new(next, d, self.cost_fn.cost(next))
            })
            .collect()
    }

    fn cost_of_actions(&self, actions: &[Direction]) -> Option<Cost> {
        let mut pos = self.start;
        let mut cost = 0.0;
        for &action in actions {
            if action == Direction::Stop {
                return None;
            }
            pos = pos.step(action);
            if self.layout.is_wall(pos) {
                return None;
            }
            cost += self.cost_fn.cost(pos);
        }
        Some(cost)
    }
}
