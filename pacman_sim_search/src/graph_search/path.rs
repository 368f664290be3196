use pacman_sim::search_problem::Cost;

/// One entry of a path. The first step of every path has no action.
#[derive(Debug, Clone, PartialEq)]
pub struct Step<S, A> {
    pub state: S,
    pub action: Option<A>,
    /// Cost of the step leading into `state`.
    pub cost: Cost,
}

/// Sequence of steps from the start state, owned by a single frontier entry.
///
/// Never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct Path<S, A> {
    steps: Vec<Step<S, A>>,
    cost: Cost,
}

impl<S: Clone, A: Clone> Path<S, A> {
    pub fn start(state: S) -> Self {
        Self {
            steps: vec![Step {
                state,
                action: None,
                cost: 0.0,
            }],
            cost: 0.0,
        }
    }

    #[inline]
    pub fn last_state(&self) -> &S {
        &self.steps[self.steps.len() - 1].state
    }

    /// Cumulative cost of all steps.
    #[inline]
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// Number of actions taken.
    #[inline]
    pub fn len(&self) -> usize {
        self.steps.len() - 1
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    #[inline]
    pub fn steps(&self) -> &[Step<S, A>] {
        &self.steps
    }

    /// A copy of this path with one more step.
    pub fn extended(&self, state: S, action: A, cost: Cost) -> Self {
        let mut steps = Vec::with_capacity(self.steps.len() + 1);
        steps.extend_from_slice(&self.steps);
        steps.push(Step {
            state,
            action: Some(action),
            cost,
        });
        Self {
            steps,
            cost: self.cost + cost,
        }
    }

    /// Actions from the start state, without the placeholder first step.
    pub fn actions(&self) -> Vec<A> {
        self.steps.iter().skip(1).filter_map(|s| s.action.clone()).collect()
    }
}
