use std::str::FromStr;

use instant::Instant;
use itertools::Itertools;

use pacman_sim::{
    rustc_hash::FxHashSet,
    search_problem::{Cost, Heuristic, NullHeuristic, SearchProblem},
};

use crate::{SearchCounter, SearchLimits};

mod fringe;
mod path;

use fringe::Fringe;
pub use path::*;

/// Frontier discipline of a graph search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Strategy {
    DepthFirst,
    BreadthFirst,
    UniformCost,
    #[default]
    AStar,
}

impl Strategy {
    pub const VALUES: [Strategy; 4] = [
        Strategy::DepthFirst,
        Strategy::BreadthFirst,
        Strategy::UniformCost,
        Strategy::AStar,
    ];

    /// Whether the frontier is ordered by path cost. The result is then a cheapest path,
    /// for A* only when the heuristic is consistent.
    #[inline]
    pub fn is_optimal(self) -> bool {
        matches!(self, Strategy::UniformCost | Strategy::AStar)
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Strategy::DepthFirst => "dfs",
            Strategy::BreadthFirst => "bfs",
            Strategy::UniformCost => "ucs",
            Strategy::AStar => "astar",
        };
        write!(f, "{name}")
    }
}

impl FromStr for Strategy {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "dfs" | "depthfirst" | "depthfirstsearch" => Ok(Strategy::DepthFirst),
            "bfs" | "breadthfirst" | "breadthfirstsearch" => Ok(Strategy::BreadthFirst),
            "ucs" | "uniformcost" | "uniformcostsearch" => Ok(Strategy::UniformCost),
            "astar" | "a*" | "astarsearch" => Ok(Strategy::AStar),
            _ => Err("expected dfs|bfs|ucs|astar"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum SearchError {
    /// The frontier was exhausted without reaching a goal.
    #[error("no solution: every reachable state was expanded without reaching a goal")]
    NoSolution,
    #[error("step cost must be non-negative, found {0}")]
    NegativeStepCost(Cost),
    #[error("heuristic estimate must be non-negative, found {0}")]
    NegativeHeuristic(Cost),
    #[error("search limit reached after {expansions} expansions")]
    LimitReached { expansions: u64 },
}

/// A solution: the actions from the start state to a goal and their total cost.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PathResult<A> {
    pub actions: Vec<A>,
    pub cost: Cost,
    pub counter: SearchCounter,
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSearchConfig {
    pub strategy: Strategy,
    pub limits: Option<SearchLimits>,
    pub debug: bool,
}

#[derive(Debug, Default, Copy, Clone)]
pub struct GraphSearch {
    pub config: GraphSearchConfig,
}

impl GraphSearch {
    pub fn new(config: GraphSearchConfig) -> Self {
        Self { config }
    }

    /// Finds a path from the start state to a goal state.
    ///
    /// The heuristic only affects `Strategy::AStar`.
    pub fn solve<P, H>(&self, problem: &P, heuristic: &H) -> Result<PathResult<P::Action>, SearchError>
    where
        P: SearchProblem,
        H: Heuristic<P> + ?Sized,
    {
        let start_time = Instant::now();
        let res = graph_search(problem, heuristic, &self.config, start_time);
        let dt_ns = start_time.elapsed().as_nanos();
        match &res {
            Ok(PathResult { actions, cost, counter }) => {
                log::debug!(
                    "{}: found {} actions, cost={cost} {}",
                    self.config.strategy,
                    actions.len(),
                    counter.summary(dt_ns)
                );
                if self.config.debug {
                    let actions = actions.iter().map(|a| format!("{a:?}")).join(", ");
                    println!(" - {}: cost={cost} actions=[{actions}]", self.config.strategy);
                    println!("   {}", counter.summary(dt_ns));
                }
            }
            Err(e) => {
                log::debug!("{}: {e}", self.config.strategy);
                if self.config.debug {
                    println!(" - {}: {e}", self.config.strategy);
                }
            }
        }
        res
    }
}

#[inline]
fn check_step_cost(cost: Cost) -> Result<Cost, SearchError> {
    if cost >= 0.0 {
        Ok(cost)
    } else {
        Err(SearchError::NegativeStepCost(cost))
    }
}

#[inline]
fn estimate<P, H>(
    heuristic: &H,
    state: &P::State,
    problem: &P,
    counter: &mut SearchCounter,
) -> Result<Cost, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    counter.evals += 1;
    let h = heuristic.estimate(state, problem);
    if h >= 0.0 {
        Ok(h)
    } else {
        Err(SearchError::NegativeHeuristic(h))
    }
}

fn graph_search<P, H>(
    problem: &P,
    heuristic: &H,
    config: &GraphSearchConfig,
    start_time: Instant,
) -> Result<PathResult<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let strategy = config.strategy;
    let mut counter = SearchCounter::ZERO;
    let mut visited: FxHashSet<P::State> = FxHashSet::default();
    let mut fringe: Fringe<Path<P::State, P::Action>> = Fringe::for_strategy(strategy);

    let start = problem.start_state();
    let priority = match strategy {
        Strategy::AStar => estimate(heuristic, &start, problem, &mut counter)?,
        _ => 0.0,
    };
    fringe.push(Path::start(start), priority);

    while let Some(path) = fringe.pop() {
        let state = path.last_state();
        if visited.contains(state) {
            counter.skipped += 1;
            continue;
        }
        if let Some(limits) = &config.limits {
            if limits.should_terminate(start_time, counter.expansions) {
                return Err(SearchError::LimitReached {
                    expansions: counter.expansions,
                });
            }
        }
        visited.insert(state.clone());

        if problem.is_goal_state(state) {
            return Ok(PathResult {
                actions: path.actions(),
                cost: path.cost(),
                counter,
            });
        }

        counter.expansions += 1;
        log::trace!("expanding {state:?} cost={} fringe={}", path.cost(), fringe.len());
        for successor in problem.successors(state) {
            counter.states_visited += 1;
            let step_cost = check_step_cost(successor.cost)?;
            if visited.contains(&successor.state) {
                continue;
            }
            let priority = match strategy {
                Strategy::DepthFirst | Strategy::BreadthFirst => 0.0,
                Strategy::UniformCost => path.cost() + step_cost,
                Strategy::AStar => {
                    path.cost() + step_cost + estimate(heuristic, &successor.state, problem, &mut counter)?
                }
            };
            fringe.push(path.extended(successor.state, successor.action, step_cost), priority);
        }
    }

    Err(SearchError::NoSolution)
}

/// Finds a path to a goal with the given strategy. `heuristic` is only consulted by A*.
///
/// Returns the empty sequence when the start state is a goal, and `SearchError::NoSolution`
/// when no goal is reachable.
pub fn search<P, H>(problem: &P, strategy: Strategy, heuristic: &H) -> Result<Vec<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    let config = GraphSearchConfig {
        strategy,
        ..Default::default()
    };
    graph_search(problem, heuristic, &config, Instant::now()).map(|res| res.actions)
}

/// Expands the deepest frontier node first.
pub fn depth_first_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>, SearchError> {
    search(problem, Strategy::DepthFirst, &NullHeuristic)
}

/// Expands the shallowest frontier node first.
pub fn breadth_first_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>, SearchError> {
    search(problem, Strategy::BreadthFirst, &NullHeuristic)
}

/// Expands the frontier node of least total path cost first.
pub fn uniform_cost_search<P: SearchProblem>(problem: &P) -> Result<Vec<P::Action>, SearchError> {
    search(problem, Strategy::UniformCost, &NullHeuristic)
}

/// Expands the frontier node of least path cost plus heuristic estimate first.
///
/// States are never reopened, so the path is cheapest only for a consistent heuristic:
/// `h(s) <= cost(s, s') + h(s')` along every edge. An admissible but inconsistent
/// heuristic can close a state through a costlier path first.
pub fn astar_search<P, H>(problem: &P, heuristic: &H) -> Result<Vec<P::Action>, SearchError>
where
    P: SearchProblem,
    H: Heuristic<P> + ?Sized,
{
    search(problem, Strategy::AStar, heuristic)
}
