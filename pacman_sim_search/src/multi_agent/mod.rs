use std::str::FromStr;

use instant::Instant;

use pacman_sim::{
    agents::Agent,
    game_tree_search::{Evaluator, MultiAgentGame, Value, PACMAN_INDEX},
};

use crate::SearchCounter;

mod search;

use search::{search_value, SearchContext};

/// How the non-maximizing agents are modelled.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchMode {
    /// Adversaries minimize.
    #[default]
    Minimax,
    /// Minimax with alpha-beta pruning. Same action and value as `Minimax`.
    AlphaBeta,
    /// Adversaries choose uniformly at random among their legal actions.
    Expectimax,
}

impl SearchMode {
    pub const VALUES: [SearchMode; 3] = [SearchMode::Minimax, SearchMode::AlphaBeta, SearchMode::Expectimax];
}

impl std::fmt::Display for SearchMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            SearchMode::Minimax => "minimax",
            SearchMode::AlphaBeta => "alphabeta",
            SearchMode::Expectimax => "expectimax",
        };
        write!(f, "{name}")
    }
}

impl FromStr for SearchMode {
    type Err = &'static str;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().replace(['-', '_'], "").as_str() {
            "minimax" => Ok(SearchMode::Minimax),
            "alphabeta" | "ab" => Ok(SearchMode::AlphaBeta),
            "expectimax" => Ok(SearchMode::Expectimax),
            _ => Err("expected minimax|alphabeta|expectimax"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameTreeError {
    #[error("game has no agents")]
    NoAgents,
    #[error("search depth must be at least 1")]
    InvalidDepth,
    #[error("the maximizing agent has no legal action")]
    NoLegalActions,
    #[error("successor generation failed: {0}")]
    Successor(String),
}

pub const DEFAULT_DEPTH: u8 = 2;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultiAgentConfig {
    /// Number of full rounds through all agents.
    pub depth: u8,
    pub mode: SearchMode,
    pub debug: bool,
}

impl Default for MultiAgentConfig {
    fn default() -> Self {
        Self {
            depth: DEFAULT_DEPTH,
            mode: SearchMode::default(),
            debug: false,
        }
    }
}

/// The maximizer's chosen action and the value of the root.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Decision<A> {
    pub action: A,
    pub value: Value,
    pub counter: SearchCounter,
}

/// Fixed-depth game tree search for agent 0.
#[derive(Debug, Clone)]
pub struct MultiAgentSearch<E> {
    pub config: MultiAgentConfig,
    pub evaluator: E,
}

impl<E> MultiAgentSearch<E> {
    pub fn new(config: MultiAgentConfig, evaluator: E) -> Self {
        Self { config, evaluator }
    }

    pub fn search<G>(&self, game: &G) -> Result<Decision<G::Action>, GameTreeError>
    where
        G: MultiAgentGame,
        E: Evaluator<G>,
    {
        search_root(game, self.config, &self.evaluator)
    }
}

fn search_root<G, E>(game: &G, config: MultiAgentConfig, evaluator: &E) -> Result<Decision<G::Action>, GameTreeError>
where
    G: MultiAgentGame,
    E: Evaluator<G>,
{
    let num_agents = game.num_agents();
    if num_agents == 0 {
        return Err(GameTreeError::NoAgents);
    }
    if config.depth == 0 {
        return Err(GameTreeError::InvalidDepth);
    }

    let start_time = Instant::now();
    let mut ctx = SearchContext::new(config, num_agents, evaluator);
    let full_window = (Value::NEG_INFINITY, Value::INFINITY);
    let (value, action) = search_value(game, PACMAN_INDEX, 0, full_window, &mut ctx)?;
    let Some(action) = action else {
        return Err(GameTreeError::NoLegalActions);
    };

    let dt_ns = start_time.elapsed().as_nanos();
    log::debug!(
        "{} depth={}: {action:?} value={value} {}",
        config.mode,
        config.depth,
        ctx.counter.summary(dt_ns)
    );
    if config.debug {
        println!(" - {} depth={}: action={action:?}, value={value}", config.mode, config.depth);
        println!("   {}", ctx.counter.summary(dt_ns));
    }

    Ok(Decision {
        action,
        value,
        counter: ctx.counter,
    })
}

/// Chooses agent 0's action in `game` by searching `depth` full rounds.
pub fn choose_action<G, E>(game: &G, depth: u8, evaluator: &E, mode: SearchMode) -> Result<G::Action, GameTreeError>
where
    G: MultiAgentGame,
    E: Evaluator<G>,
{
    let config = MultiAgentConfig {
        depth,
        mode,
        debug: false,
    };
    search_root(game, config, evaluator).map(|d| d.action)
}

impl<G, E> Agent<G> for MultiAgentSearch<E>
where
    G: MultiAgentGame,
    E: Evaluator<G>,
{
    fn get_action(&mut self, state: &G) -> Option<G::Action> {
        match self.search(state) {
            Ok(decision) => Some(decision.action),
            Err(e) => {
                log::warn!("{} search failed: {e}", self.config.mode);
                None
            }
        }
    }
}
