use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
    action_list,
    data_structures::ActionList,
    game_tree_search::{AgentIndex, MultiAgentGame, PACMAN_INDEX},
    layout::Layout,
    types::{Direction, Grid, Position},
};

/// Number of ghost moves a ghost stays scared after Pacman eats a capsule.
pub const SCARED_TIME: u32 = 40;
/// Points lost for every Pacman move.
pub const TIME_PENALTY: i32 = 1;
pub const FOOD_SCORE: i32 = 10;
/// Bonus for clearing the board.
pub const WIN_SCORE: i32 = 500;
/// Penalty for being caught by an active ghost.
pub const LOSE_PENALTY: i32 = 500;
pub const GHOST_EATEN_SCORE: i32 = 200;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GhostState {
    pub start: Position,
    pub position: Position,
    pub direction: Direction,
    pub scared_timer: u32,
}

impl GhostState {
    pub fn new(start: Position) -> Self {
        Self {
            start,
            position: start,
            direction: Direction::Stop,
            scared_timer: 0,
        }
    }

    #[inline]
    pub fn is_scared(&self) -> bool {
        self.scared_timer > 0
    }

    fn respawn(&mut self) {
        *self = Self::new(self.start);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    Win,
    Lose,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("agent {0} does not exist")]
    NoSuchAgent(AgentIndex),
    #[error("the game is already over")]
    GameOver,
    #[error("illegal action {action} for agent {agent}")]
    IllegalAction { agent: AgentIndex, action: Direction },
}

/// Full state of a Pacman game: agent positions, remaining food and capsules, and the score.
///
/// Successor states are independent values; the static layout is shared.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PacmanGameState {
    layout: Arc<Layout>,
    pacman: Position,
    pacman_direction: Direction,
    ghosts: SmallVec<[GhostState; 4]>,
    food: Grid<bool>,
    capsules: SmallVec<[Position; 4]>,
    score: i32,
    outcome: Option<Outcome>,
}

impl PacmanGameState {
    pub fn new(layout: Arc<Layout>) -> Self {
        let ghosts = layout.ghost_starts.iter().copied().map(GhostState::new).collect();
        Self {
            pacman: layout.pacman_start,
            pacman_direction: Direction::Stop,
            ghosts,
            food: layout.food.clone(),
            capsules: layout.capsules.iter().copied().collect(),
            score: 0,
            outcome: None,
            layout,
        }
    }

    #[inline]
    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    #[inline]
    pub fn pacman_position(&self) -> Position {
        self.pacman
    }

    #[inline]
    pub fn pacman_direction(&self) -> Direction {
        self.pacman_direction
    }

    #[inline]
    pub fn ghost_states(&self) -> &[GhostState] {
        &self.ghosts
    }

    /// Ghost `agent - 1`. `None` for Pacman or an unknown index.
    #[inline]
    pub fn ghost_state(&self, agent: AgentIndex) -> Option<&GhostState> {
        agent.checked_sub(1).and_then(|i| self.ghosts.get(i))
    }

    pub fn ghost_positions(&self) -> impl Iterator<Item = Position> + '_ {
        self.ghosts.iter().map(|g| g.position)
    }

    #[inline]
    pub fn food(&self) -> &Grid<bool> {
        &self.food
    }

    #[inline]
    pub fn num_food(&self) -> usize {
        self.food.count_set()
    }

    #[inline]
    pub fn has_food(&self, pos: Position) -> bool {
        self.food.is_set(pos)
    }

    #[inline]
    pub fn capsules(&self) -> &[Position] {
        &self.capsules
    }

    #[inline]
    pub fn score(&self) -> i32 {
        self.score
    }

    #[inline]
    pub fn outcome(&self) -> Option<Outcome> {
        self.outcome
    }

    #[inline]
    pub fn is_win(&self) -> bool {
        self.outcome == Some(Outcome::Win)
    }

    #[inline]
    pub fn is_lose(&self) -> bool {
        self.outcome == Some(Outcome::Lose)
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Pacman may move into any open cell or stay.
    pub fn legal_pacman_actions(&self) -> ActionList<Direction> {
        if self.is_over() {
            return action_list![];
        }
        let mut actions: ActionList<Direction> = self.layout.open_moves(self.pacman).iter().collect();
        actions.push(Direction::Stop);
        actions
    }

    /// Ghosts never stop, and only turn back at a dead end.
    pub fn legal_ghost_actions(&self, ghost: usize) -> ActionList<Direction> {
        let Some(g) = self.ghosts.get(ghost) else {
            return action_list![];
        };
        if self.is_over() {
            return action_list![];
        }
        let mut moves = self.layout.open_moves(g.position);
        if moves.is_empty() {
            return action_list![Direction::Stop];
        }
        let reverse = g.direction.reverse();
        if g.direction != Direction::Stop && moves.len() > 1 {
            moves.remove(reverse);
        }
        moves.iter().collect()
    }

    fn apply_pacman_move(&mut self, action: Direction) {
        self.pacman = self.pacman.step(action);
        if action != Direction::Stop {
            self.pacman_direction = action;
        }
        self.score -= TIME_PENALTY;

        if self.food.is_set(self.pacman) {
            self.food.set(self.pacman, false);
            self.score += FOOD_SCORE;
            if self.food.count_set() == 0 {
                self.score += WIN_SCORE;
                self.outcome = Some(Outcome::Win);
            }
        }

        if let Some(i) = self.capsules.iter().position(|&c| c == self.pacman) {
            self.capsules.remove(i);
            for ghost in self.ghosts.iter_mut() {
                ghost.scared_timer = SCARED_TIME;
            }
        }

        for i in 0..self.ghosts.len() {
            self.check_collision(i);
        }
    }

    fn apply_ghost_move(&mut self, ghost: usize, action: Direction) {
        let g = &mut self.ghosts[ghost];
        g.position = g.position.step(action);
        g.direction = action;
        g.scared_timer = g.scared_timer.saturating_sub(1);
        self.check_collision(ghost);
    }

    fn check_collision(&mut self, ghost: usize) {
        if self.ghosts[ghost].position != self.pacman {
            return;
        }
        if self.ghosts[ghost].is_scared() {
            self.score += GHOST_EATEN_SCORE;
            self.ghosts[ghost].respawn();
        } else if self.outcome.is_none() {
            self.score -= LOSE_PENALTY;
            self.outcome = Some(Outcome::Lose);
        }
    }
}

impl MultiAgentGame for PacmanGameState {
    type Action = Direction;
    type Actions = ActionList<Direction>;
    type Error = GameError;

    #[inline]
    fn num_agents(&self) -> usize {
        1 + self.ghosts.len()
    }

    fn legal_actions(&self, agent: AgentIndex) -> ActionList<Direction> {
        if agent == PACMAN_INDEX {
            self.legal_pacman_actions()
        } else {
            self.legal_ghost_actions(agent - 1)
        }
    }

    fn generate_successor(&self, agent: AgentIndex, action: Direction) -> Result<Self, GameError> {
        if agent >= self.num_agents() {
            return Err(GameError::NoSuchAgent(agent));
        }
        if self.is_over() {
            return Err(GameError::GameOver);
        }
        if !self.legal_actions(agent).contains(&action) {
            return Err(GameError::IllegalAction { agent, action });
        }

        let mut next = self.clone();
        if agent == PACMAN_INDEX {
            next.apply_pacman_move(action);
        } else {
            next.apply_ghost_move(agent - 1, action);
        }
        Ok(next)
    }
}

impl std::fmt::Display for PacmanGameState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for y in 0..self.layout.height() as i32 {
            let row: String = (0..self.layout.width() as i32)
                .map(|x| {
                    let pos = Position::new(x, y);
                    if self.layout.is_wall(pos) {
                        Layout::WALL
                    } else if pos == self.pacman {
                        Layout::PACMAN
                    } else if self.ghost_positions().any(|g| g == pos) {
                        Layout::GHOST
                    } else if self.capsules.contains(&pos) {
                        Layout::CAPSULE
                    } else if self.food.is_set(pos) {
                        Layout::FOOD
                    } else {
                        Layout::EMPTY
                    }
                })
                .collect();
            writeln!(f, "{row}")?;
        }
        write!(f, "Score: {}", self.score)
    }
}
