use std::{fs::File, path::PathBuf, str::FromStr, sync::Arc};
use structopt::StructOpt;

use pacman_sim::prelude::*;
use pacman_sim_search::{
    graph_search::{GraphSearch, GraphSearchConfig, PathResult, SearchError, Strategy},
    multi_agent::{MultiAgentConfig, MultiAgentSearch, SearchMode, DEFAULT_DEPTH},
    SearchLimits,
};

pub type PositionHeuristic = fn(&Position, &PositionSearchProblem) -> Cost;
pub type FoodHeuristic = fn(&FoodState, &FoodSearchProblem) -> Cost;

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ProblemKind {
    /// Reach the single food dot of the layout.
    #[default]
    Position,
    /// Eat every food dot of the layout.
    Food,
}

impl FromStr for ProblemKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "position" | "pos" => Ok(Self::Position),
            "food" => Ok(Self::Food),
            _ => Err("expected position|food"),
        }
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HeuristicName {
    Null,
    Manhattan,
    Euclidean,
    Food,
}

impl FromStr for HeuristicName {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "null" | "none" => Ok(Self::Null),
            "manhattan" => Ok(Self::Manhattan),
            "euclidean" => Ok(Self::Euclidean),
            "food" => Ok(Self::Food),
            _ => Err("expected null|manhattan|euclidean|food"),
        }
    }
}

impl HeuristicName {
    pub fn position_heuristic(self) -> Option<PositionHeuristic> {
        match self {
            HeuristicName::Null => Some(null_heuristic::<PositionSearchProblem> as PositionHeuristic),
            HeuristicName::Manhattan => Some(manhattan_heuristic as PositionHeuristic),
            HeuristicName::Euclidean => Some(euclidean_heuristic as PositionHeuristic),
            HeuristicName::Food => None,
        }
    }

    pub fn food_heuristic(self) -> Option<FoodHeuristic> {
        match self {
            HeuristicName::Null => Some(null_heuristic::<FoodSearchProblem> as FoodHeuristic),
            HeuristicName::Food => Some(food_heuristic as FoodHeuristic),
            HeuristicName::Manhattan | HeuristicName::Euclidean => None,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error("failed to load layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("position search needs a layout with exactly one food dot")]
    NoSingleGoal,
    #[error("heuristic {heuristic:?} does not apply to {problem:?} search")]
    HeuristicMismatch {
        heuristic: HeuristicName,
        problem: ProblemKind,
    },
    #[error(transparent)]
    Search(#[from] SearchError),
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct LayoutOpts {
    #[structopt(
        short = "l",
        long = "--layout",
        help = "Built-in layout: tiny_maze|small_maze|tiny_search|test_classic|minimax_classic|trapped_classic"
    )]
    pub layout: Option<String>,

    #[structopt(long = "--layout-file", parse(from_os_str), help = "Path to a layout file")]
    pub layout_file: Option<PathBuf>,
}

impl LayoutOpts {
    /// Loads `--layout-file` if given, otherwise the named built-in layout.
    pub fn get_layout(&self, default_name: &str) -> Result<Arc<Layout>, LayoutError> {
        let layout = match &self.layout_file {
            Some(path) => read_layout_from_file(File::open(path)?)?,
            None => Layout::builtin(self.layout.as_deref().unwrap_or(default_name))?,
        };
        Ok(Arc::new(layout))
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    #[structopt(
        short = "s",
        long = "--strategy",
        help = "dfs|bfs|ucs|astar: frontier discipline of the graph search. Defaults to astar."
    )]
    pub strategy: Option<Strategy>,

    #[structopt(
        short = "p",
        long = "--problem",
        help = "position|food: reach the single food dot, or eat all of them"
    )]
    pub problem: Option<ProblemKind>,

    #[structopt(
        short = "H",
        long = "--heuristic",
        help = "null|manhattan|euclidean|food: A* heuristic. Defaults to manhattan for position search, food for food search."
    )]
    pub heuristic: Option<HeuristicName>,

    #[structopt(
        short = "c",
        long = "--cost",
        help = "unit|stay-east|stay-west: step cost of position search"
    )]
    pub cost_fn: Option<CostFunction>,

    #[structopt(long = "--max-expansions", help = "Give up after this many expansions")]
    pub max_expansions: Option<u64>,

    #[structopt(short = "T", long = "--time-limit-ms", help = "Give up after this many milliseconds")]
    pub time_limit_ms: Option<u128>,

    #[structopt(short = "D", long = "--debug", help = "Print debug info")]
    pub debug: bool,
}

impl SearchConfig {
    pub const DEFAULT_LAYOUT: &'static str = "tiny_maze";

    pub fn problem(&self) -> ProblemKind {
        self.problem.unwrap_or_default()
    }

    pub fn heuristic(&self) -> HeuristicName {
        self.heuristic.unwrap_or(match self.problem() {
            ProblemKind::Position => HeuristicName::Manhattan,
            ProblemKind::Food => HeuristicName::Food,
        })
    }

    pub fn get_limits(&self) -> Option<SearchLimits> {
        if self.time_limit_ms.is_none() && self.max_expansions.is_none() {
            return None;
        }
        Some(SearchLimits {
            max_time_ms: self.time_limit_ms,
            max_expansions: self.max_expansions,
        })
    }

    pub fn make_search(&self) -> GraphSearch {
        GraphSearch::new(GraphSearchConfig {
            strategy: self.strategy.unwrap_or_default(),
            limits: self.get_limits(),
            debug: self.debug,
        })
    }

    /// Builds the configured problem on `layout` and solves it.
    pub fn solve(&self, layout: Arc<Layout>) -> Result<PathResult<Direction>, CliError> {
        let search = self.make_search();
        let problem_kind = self.problem();
        let mismatch = || CliError::HeuristicMismatch {
            heuristic: self.heuristic(),
            problem: problem_kind,
        };
        let res = match problem_kind {
            ProblemKind::Position => {
                let cost_fn = self.cost_fn.unwrap_or_default();
                let problem = PositionSearchProblem::from_layout(layout, cost_fn).ok_or(CliError::NoSingleGoal)?;
                let heuristic = self.heuristic().position_heuristic().ok_or_else(mismatch)?;
                search.solve(&problem, &heuristic)?
            }
            ProblemKind::Food => {
                let problem = FoodSearchProblem::new(layout);
                let heuristic = self.heuristic().food_heuristic().ok_or_else(mismatch)?;
                search.solve(&problem, &heuristic)?
            }
        };
        Ok(res)
    }
}

#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PacmanAgentKind {
    #[default]
    Search,
    Reflex,
}

impl FromStr for PacmanAgentKind {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "search" => Ok(Self::Search),
            "reflex" => Ok(Self::Reflex),
            _ => Err("expected search|reflex"),
        }
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AgentConfig {
    #[structopt(short = "a", long = "--agent", help = "search|reflex: Pacman agent")]
    pub agent: Option<PacmanAgentKind>,

    #[structopt(
        short = "m",
        long = "--mode",
        help = "minimax|alpha-beta|expectimax: game tree search used by the search agent"
    )]
    pub mode: Option<SearchMode>,

    #[structopt(short = "d", long = "--depth", help = "Search depth in full rounds of play")]
    pub search_depth: Option<u8>,

    #[structopt(short = "e", long = "--evaluation", help = "score|better: evaluation function")]
    pub evaluation: Option<EvaluationFn>,

    #[structopt(short = "D", long = "--debug", help = "Print debug info")]
    pub debug: bool,
}

impl AgentConfig {
    pub fn make_config(&self) -> MultiAgentConfig {
        MultiAgentConfig {
            depth: self.search_depth.unwrap_or(DEFAULT_DEPTH),
            mode: self.mode.unwrap_or_default(),
            debug: self.debug,
        }
    }

    pub fn make_search(&self) -> MultiAgentSearch<EvaluationFn> {
        MultiAgentSearch::new(self.make_config(), self.evaluation.unwrap_or_default())
    }

    pub fn make_pacman(&self, seed: u64) -> Box<dyn Agent<PacmanGameState>> {
        match self.agent.unwrap_or_default() {
            PacmanAgentKind::Search => Box::new(self.make_search()),
            PacmanAgentKind::Reflex => Box::new(ReflexAgent::seeded(seed)),
        }
    }
}

#[derive(Debug, StructOpt, Clone, Default)]
pub struct PlayOpts {
    #[structopt(flatten)]
    pub layout: LayoutOpts,

    #[structopt(flatten)]
    pub agent: AgentConfig,

    #[structopt(short = "n", long = "--games", help = "Number of games to play")]
    pub games: Option<u32>,

    #[structopt(short = "S", long = "--seed", help = "Random seed of the ghosts")]
    pub seed: Option<u64>,

    #[structopt(short = "M", long = "--max-moves", help = "Stop a game after this many moves")]
    pub max_moves: Option<usize>,
}

impl PlayOpts {
    pub const DEFAULT_LAYOUT: &'static str = "test_classic";
    pub const DEFAULT_MAX_MOVES: usize = 2000;

    pub fn get_layout(&self) -> Result<Arc<Layout>, LayoutError> {
        self.layout.get_layout(Self::DEFAULT_LAYOUT)
    }

    pub fn games(&self) -> u32 {
        self.games.unwrap_or(1)
    }

    pub fn max_moves(&self) -> usize {
        self.max_moves.unwrap_or(Self::DEFAULT_MAX_MOVES)
    }

    /// Pacman as configured followed by one random ghost per ghost start position.
    pub fn make_agents(&self, num_agents: usize, game_index: u32) -> Vec<Box<dyn Agent<PacmanGameState>>> {
        let seed = self.seed.unwrap_or_default().wrapping_add(u64::from(game_index));
        let mut agents = vec![self.agent.make_pacman(seed)];
        for index in 1..num_agents {
            let ghost_seed = seed.wrapping_mul(num_agents as u64).wrapping_add(index as u64);
            agents.push(Box::new(RandomGhost::seeded(index, ghost_seed)));
        }
        agents
    }
}
