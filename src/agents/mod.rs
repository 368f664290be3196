use std::fmt::Debug;

use rand::{rngs::SmallRng, seq::SliceRandom, Rng, SeedableRng};

use crate::{
    data_structures::ActionList,
    game::{reflex_evaluation, PacmanGameState},
    game_tree_search::{AgentIndex, MultiAgentGame, PACMAN_INDEX},
    types::Direction,
};

/// Anything that picks a move for one agent of a game.
pub trait Agent<G: MultiAgentGame> {
    /// `None` when the agent has no move to make.
    fn get_action(&mut self, state: &G) -> Option<G::Action>;
}

/// Picks the move whose immediate successor scores best under `reflex_evaluation`.
/// Ties are broken at random.
#[derive(Debug, Clone)]
pub struct ReflexAgent<R: Rng = SmallRng> {
    rng: R,
}

impl ReflexAgent<SmallRng> {
    pub fn seeded(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> ReflexAgent<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> Agent<PacmanGameState> for ReflexAgent<R> {
    fn get_action(&mut self, state: &PacmanGameState) -> Option<Direction> {
        let legal = state.legal_actions(PACMAN_INDEX);
        let scores: ActionList<f64> = legal.iter().map(|&a| reflex_evaluation(state, a)).collect();
        let best = scores.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let best_indices: ActionList<usize> = (0..scores.len()).filter(|&i| scores[i] == best).collect();
        best_indices.choose(&mut self.rng).map(|&i| legal[i])
    }
}

/// Chooses uniformly among its legal moves.
#[derive(Debug, Clone)]
pub struct RandomGhost<R: Rng = SmallRng> {
    index: AgentIndex,
    rng: R,
}

impl RandomGhost<SmallRng> {
    pub fn seeded(index: AgentIndex, seed: u64) -> Self {
        Self::new(index, SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomGhost<R> {
    pub fn new(index: AgentIndex, rng: R) -> Self {
        Self { index, rng }
    }

    #[inline]
    pub fn index(&self) -> AgentIndex {
        self.index
    }
}

impl<G: MultiAgentGame, R: Rng> Agent<G> for RandomGhost<R> {
    fn get_action(&mut self, state: &G) -> Option<G::Action> {
        let legal: ActionList<G::Action> = state.legal_actions(self.index).into_iter().collect();
        legal.choose(&mut self.rng).copied()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum RunGameError<E: Debug> {
    #[error("the game has {expected} agents but {found} were provided")]
    AgentCount { expected: usize, found: usize },
    #[error("agent {agent} made a move the game rejected: {error:?}")]
    Successor { agent: AgentIndex, error: E },
}

#[derive(Debug, Clone)]
pub struct GameRecord<G: MultiAgentGame> {
    pub final_state: G,
    pub moves: Vec<(AgentIndex, G::Action)>,
}

impl<G: MultiAgentGame> GameRecord<G> {
    /// Number of moves made by agent 0.
    pub fn turns(&self) -> usize {
        self.moves.iter().filter(|(agent, _)| *agent == PACMAN_INDEX).count()
    }
}

/// Plays `start` out with `agents[i]` controlling agent `i`.
///
/// Stops when the agent to move has no legal action, an agent declines to move,
/// or `max_moves` moves have been made.
pub fn run_game<G: MultiAgentGame>(
    start: G,
    agents: &mut [Box<dyn Agent<G> + '_>],
    max_moves: usize,
) -> Result<GameRecord<G>, RunGameError<G::Error>> {
    let num_agents = start.num_agents();
    if agents.len() != num_agents {
        return Err(RunGameError::AgentCount {
            expected: num_agents,
            found: agents.len(),
        });
    }

    let mut state = start;
    let mut moves = vec![];
    let mut agent = PACMAN_INDEX;
    while moves.len() < max_moves {
        if state.legal_actions(agent).into_iter().next().is_none() {
            break;
        }
        let Some(action) = agents[agent].get_action(&state) else {
            log::debug!("agent {agent} declined to move");
            break;
        };
        state = state
            .generate_successor(agent, action)
            .map_err(|error| RunGameError::Successor { agent, error })?;
        log::trace!("agent {agent} played {action:?}");
        moves.push((agent, action));
        agent = (agent + 1) % num_agents;
    }

    Ok(GameRecord {
        final_state: state,
        moves,
    })
}
