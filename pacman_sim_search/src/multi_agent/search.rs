use pacman_sim::{
    data_structures::ActionList,
    game_tree_search::{AgentIndex, Evaluator, MultiAgentGame, Value, PACMAN_INDEX},
};

use crate::SearchCounter;

use super::{GameTreeError, MultiAgentConfig, SearchMode};

pub(crate) struct SearchContext<'e, E> {
    pub config: MultiAgentConfig,
    pub counter: SearchCounter,
    pub num_agents: usize,
    pub evaluator: &'e E,
}

impl<'e, E> SearchContext<'e, E> {
    pub fn new(config: MultiAgentConfig, num_agents: usize, evaluator: &'e E) -> Self {
        Self {
            config,
            counter: SearchCounter::ZERO,
            num_agents,
            evaluator,
        }
    }

    #[inline]
    fn eval_position<G>(&mut self, game: &G) -> Value
    where
        E: Evaluator<G>,
    {
        self.counter.evals += 1;
        self.evaluator.evaluate(game)
    }

    #[inline]
    fn pruning(&self) -> bool {
        self.config.mode == SearchMode::AlphaBeta
    }

    #[inline]
    fn next_agent(&self, agent: AgentIndex) -> AgentIndex {
        (agent + 1) % self.num_agents
    }
}

/// Value of `game` with `agent` to move after `ply` full rounds, and the chosen action
/// if `agent` is the maximizer.
///
/// `ab` is the (alpha, beta) window and is only narrowed in alpha-beta mode.
pub(crate) fn search_value<G, E>(
    game: &G,
    agent: AgentIndex,
    ply: u8,
    ab: (Value, Value),
    ctx: &mut SearchContext<E>,
) -> Result<(Value, Option<G::Action>), GameTreeError>
where
    G: MultiAgentGame,
    E: Evaluator<G>,
{
    if agent == PACMAN_INDEX && ply >= ctx.config.depth {
        return Ok((ctx.eval_position(game), None));
    }

    let actions: ActionList<G::Action> = game.legal_actions(agent).into_iter().collect();
    if actions.is_empty() {
        return Ok((ctx.eval_position(game), None));
    }

    ctx.counter.expansions += 1;
    if agent == PACMAN_INDEX {
        max_value(game, &actions, ply, ab, ctx)
    } else if ctx.config.mode == SearchMode::Expectimax {
        chance_value(game, agent, &actions, ply, ab, ctx).map(|v| (v, None))
    } else {
        min_value(game, agent, &actions, ply, ab, ctx).map(|v| (v, None))
    }
}

#[inline]
fn successor<G: MultiAgentGame, E>(
    game: &G,
    agent: AgentIndex,
    action: G::Action,
    ctx: &mut SearchContext<E>,
) -> Result<G, GameTreeError> {
    let next = game
        .generate_successor(agent, action)
        .map_err(|e| GameTreeError::Successor(format!("agent {agent}, action {action:?}: {e:?}")))?;
    ctx.counter.states_visited += 1;
    Ok(next)
}

fn max_value<G, E>(
    game: &G,
    actions: &[G::Action],
    ply: u8,
    ab: (Value, Value),
    ctx: &mut SearchContext<E>,
) -> Result<(Value, Option<G::Action>), GameTreeError>
where
    G: MultiAgentGame,
    E: Evaluator<G>,
{
    let (mut alpha, beta) = ab;
    let next_agent = ctx.next_agent(PACMAN_INDEX);
    let mut best = Value::NEG_INFINITY;
    let mut best_move = None;
    for &action in actions {
        let next = successor(game, PACMAN_INDEX, action, ctx)?;
        let (value, _) = search_value(&next, next_agent, ply + 1, (alpha, beta), ctx)?;

        // Ties keep the first action seen.
        if best_move.is_none() || value > best {
            best = value;
            best_move = Some(action);
        }

        if ctx.pruning() {
            if value >= beta {
                ctx.counter.prunes += 1;
                break;
            }
            alpha = alpha.max(value);
        }
    }
    Ok((best, best_move))
}

fn min_value<G, E>(
    game: &G,
    agent: AgentIndex,
    actions: &[G::Action],
    ply: u8,
    ab: (Value, Value),
    ctx: &mut SearchContext<E>,
) -> Result<Value, GameTreeError>
where
    G: MultiAgentGame,
    E: Evaluator<G>,
{
    let (alpha, mut beta) = ab;
    let next_agent = ctx.next_agent(agent);
    let mut best = Value::INFINITY;
    for &action in actions {
        let next = successor(game, agent, action, ctx)?;
        let (value, _) = search_value(&next, next_agent, ply, (alpha, beta), ctx)?;
        best = best.min(value);

        if ctx.pruning() {
            if value <= alpha {
                ctx.counter.prunes += 1;
                break;
            }
            beta = beta.min(value);
        }
    }
    Ok(best)
}

/// Mean of the children's values, each legal action being equally likely.
fn chance_value<G, E>(
    game: &G,
    agent: AgentIndex,
    actions: &[G::Action],
    ply: u8,
    ab: (Value, Value),
    ctx: &mut SearchContext<E>,
) -> Result<Value, GameTreeError>
where
    G: MultiAgentGame,
    E: Evaluator<G>,
{
    let next_agent = ctx.next_agent(agent);
    let mut total = 0.0;
    for &action in actions {
        let next = successor(game, agent, action, ctx)?;
        let (value, _) = search_value(&next, next_agent, ply, ab, ctx)?;
        total += value;
    }
    Ok(total / actions.len() as Value)
}
