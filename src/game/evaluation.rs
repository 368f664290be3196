use std::str::FromStr;

use crate::{
    game_tree_search::{Evaluator, MultiAgentGame, Value, PACMAN_INDEX},
    types::Direction,
};

use super::PacmanGameState;

/// The current game score. The default evaluation for adversarial search.
pub fn score_evaluation(state: &PacmanGameState) -> Value {
    state.score() as Value
}

/// Evaluation of a state built from the score plus distances to food, capsules and ghosts.
///
/// Features:
///  - remaining food and capsules are penalized, so eating is always an improvement;
///  - the closest food dot pulls Pacman towards it;
///  - active ghosts nearby are heavily penalized, scared ghosts Pacman can reach in time are rewarded.
pub fn better_evaluation(state: &PacmanGameState) -> Value {
    if state.is_over() {
        return state.score() as Value;
    }

    let pacman = state.pacman_position();
    let closest_food = state
        .food()
        .set_positions()
        .map(|f| pacman.manhattan_distance(f))
        .min()
        .unwrap_or(0) as Value;

    let mut ghost_feature = 0.0;
    for ghost in state.ghost_states() {
        let d = pacman.manhattan_distance(ghost.position) as Value;
        if ghost.is_scared() && (ghost.scared_timer as Value) > d {
            ghost_feature += 50.0 / (d + 1.0);
        } else if d <= 1.0 {
            ghost_feature -= 200.0;
        } else {
            ghost_feature -= 4.0 / d;
        }
    }

    state.score() as Value - 4.0 * state.num_food() as Value - 20.0 * state.capsules().len() as Value
        + 2.0 / (closest_food + 1.0)
        + ghost_feature
}

/// One-step lookahead evaluation of Pacman taking `action` in `state`, used by the reflex agent.
///
/// Illegal actions evaluate to negative infinity.
pub fn reflex_evaluation(state: &PacmanGameState, action: Direction) -> Value {
    let Ok(next) = state.generate_successor(PACMAN_INDEX, action) else {
        return Value::NEG_INFINITY;
    };
    let pacman = next.pacman_position();

    let ghost_distance = next
        .ghost_positions()
        .map(|g| pacman.manhattan_distance(g))
        .min()
        .map(|d| d as Value);
    let closest_food_distance = next
        .food()
        .set_positions()
        .map(|f| pacman.manhattan_distance(f))
        .min()
        .unwrap_or(0) as Value;
    let scared_time = next
        .ghost_states()
        .iter()
        .map(|g| g.scared_timer)
        .min()
        .unwrap_or(0) as Value;

    // Remaining food is the dominant term.
    let remaining_food_feature = -(next.num_food() as Value);
    let ghost_distance_feature = match ghost_distance {
        None => 0.0,
        Some(d) if scared_time == 0.0 => -2.0 / (d + 1.0),
        Some(d) => 0.5 / (d + 1.0),
    };
    let closest_food_feature = 0.5 / (closest_food_distance + 1.0);
    let power_pellets_feature = scared_time * 0.5;

    remaining_food_feature + ghost_distance_feature + closest_food_feature + power_pellets_feature
}

/// Named evaluation functions selectable from the command line.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EvaluationFn {
    #[default]
    Score,
    Better,
}

impl FromStr for EvaluationFn {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "score" => Ok(Self::Score),
            "better" => Ok(Self::Better),
            _ => Err("expected score|better"),
        }
    }
}

impl Evaluator<PacmanGameState> for EvaluationFn {
    #[inline]
    fn evaluate(&self, state: &PacmanGameState) -> Value {
        match self {
            EvaluationFn::Score => score_evaluation(state),
            EvaluationFn::Better => better_evaluation(state),
        }
    }
}
