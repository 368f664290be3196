use std::fmt::Debug;

/// Index of an agent within a game. Agent `0` is the maximizer.
pub type AgentIndex = usize;

/// Static evaluation of a game state. Higher is better for the maximizer.
pub type Value = f64;

/// Pacman is always agent 0.
pub const PACMAN_INDEX: AgentIndex = 0;

/// A turn-based game with any number of agents.
///
/// Turn order is strictly increasing modulo `num_agents`, and one ply is a full
/// round through all agents.
pub trait MultiAgentGame: Debug + Clone {
    type Action: Copy + Clone + Debug + PartialEq + Eq;
    type Actions: IntoIterator<Item = Self::Action>;
    type Error: Debug;

    fn num_agents(&self) -> usize;

    /// Legal actions for `agent`. Empty when the game is over for this agent.
    fn legal_actions(&self, agent: AgentIndex) -> Self::Actions;

    /// Returns the state after `agent` takes `action`. Never modifies `self`.
    fn generate_successor(&self, agent: AgentIndex, action: Self::Action) -> Result<Self, Self::Error>;
}

/// Static evaluation function used at the leaves of the game tree.
pub trait Evaluator<G> {
    fn evaluate(&self, state: &G) -> Value;
}

impl<G, F> Evaluator<G> for F
where
    F: Fn(&G) -> Value,
{
    #[inline]
    fn evaluate(&self, state: &G) -> Value {
        self(state)
    }
}
