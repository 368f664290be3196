use std::{fmt::Debug, hash::Hash};

/// Path and step cost.
pub type Cost = f64;

/// A state reachable from another state by taking `action` at a price of `cost`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Successor<S, A> {
    pub state: S,
    pub action: A,
    pub cost: Cost,
}

impl<S, A> Successor<S, A> {
    #[inline]
    pub fn new(state: S, action: A, cost: Cost) -> Self {
        Self { state, action, cost }
    }
}

/// A single-agent search problem: a start state, a goal test and a successor function.
///
/// Implementations are treated as immutable value producers. `successors` must not
/// change the problem, only describe the states reachable from `state`.
pub trait SearchProblem {
    /// States are compared and hashed for the visited set.
    type State: Clone + Eq + Hash + Debug;
    type Action: Clone + Debug;
    type Successors: IntoIterator<Item = Successor<Self::State, Self::Action>>;

    fn start_state(&self) -> Self::State;

    fn is_goal_state(&self, state: &Self::State) -> bool;

    /// Step costs are expected to be non-negative.
    fn successors(&self, state: &Self::State) -> Self::Successors;

    /// Total cost of a sequence of actions taken from the start state.
    /// Returns `None` if the sequence contains an illegal move.
    fn cost_of_actions(&self, actions: &[Self::Action]) -> Option<Cost>;
}

/// Estimate of the remaining cost from a state to the nearest goal.
///
/// Admissible heuristics never overestimate the true remaining cost.
pub trait Heuristic<P: SearchProblem> {
    fn estimate(&self, state: &P::State, problem: &P) -> Cost;
}

impl<P, F> Heuristic<P> for F
where
    P: SearchProblem,
    F: Fn(&P::State, &P) -> Cost,
{
    #[inline]
    fn estimate(&self, state: &P::State, problem: &P) -> Cost {
        self(state, problem)
    }
}

/// The trivial heuristic. Reduces A* to uniform cost search.
#[derive(Debug, Default, Copy, Clone)]
pub struct NullHeuristic;

impl<P: SearchProblem> Heuristic<P> for NullHeuristic {
    #[inline]
    fn estimate(&self, _state: &P::State, _problem: &P) -> Cost {
        0.0
    }
}

pub fn null_heuristic<P: SearchProblem>(_state: &P::State, _problem: &P) -> Cost {
    0.0
}
