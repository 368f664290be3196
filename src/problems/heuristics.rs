use crate::{search_problem::Cost, types::Position};

use super::{FoodSearchProblem, FoodState, PositionSearchProblem};

/// Manhattan distance to the goal. Admissible under unit step costs.
pub fn manhattan_heuristic(state: &Position, problem: &PositionSearchProblem) -> Cost {
    state.manhattan_distance(problem.goal()) as Cost
}

/// Straight-line distance to the goal. Admissible under unit step costs.
pub fn euclidean_heuristic(state: &Position, problem: &PositionSearchProblem) -> Cost {
    state.euclidean_distance(problem.goal())
}

/// Manhattan distance to the farthest remaining food dot.
///
/// Every dot must still be reached, so this never overestimates.
pub fn food_heuristic(state: &FoodState, _problem: &FoodSearchProblem) -> Cost {
    state
        .food
        .set_positions()
        .map(|food| state.position.manhattan_distance(food))
        .max()
        .unwrap_or(0) as Cost
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::{
        layout::{Layout, TINY_MAZE},
        problems::CostFunction,
        search_problem::SearchProblem,
    };

    #[test]
    fn heuristics_are_zero_at_goal() {
        let problem =
            PositionSearchProblem::from_layout(Arc::new(TINY_MAZE.parse().unwrap()), CostFunction::Unit).unwrap();
        let goal = problem.goal();
        assert_eq!(0.0, manhattan_heuristic(&goal, &problem));
        assert_eq!(0.0, euclidean_heuristic(&goal, &problem));
        let start = problem.start_state();
        assert_eq!(8.0, manhattan_heuristic(&start, &problem));
        assert!(euclidean_heuristic(&start, &problem) <= manhattan_heuristic(&start, &problem));
    }

    #[test]
    fn food_heuristic_uses_farthest_dot() {
        let layout: Layout = "%%%%%%%\n%.P  .%\n%%%%%%%".parse().unwrap();
        let problem = FoodSearchProblem::new(Arc::new(layout));
        let start = problem.start_state();
        assert_eq!(3.0, food_heuristic(&start, &problem));
        let mut done = start.clone();
        done.food = crate::types::Grid::new(7, 3, false);
        assert_eq!(0.0, food_heuristic(&done, &problem));
    }
}
