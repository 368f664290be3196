use std::sync::Arc;

use pacman_sim::{
    game_tree_search::{AgentIndex, MultiAgentGame, Value},
    search_problem::{Cost, SearchProblem, Successor},
};



pub mod prop_tests;

/// Explicit directed graph. Actions are edge indices.
#[derive(Debug, Clone)]
pub struct GraphProblem {
    pub num_nodes: usize,
    pub start: usize,
    pub goals: Vec<usize>,
    /// `(from, to, cost)`
    pub edges: Vec<(usize, usize, Cost)>,
}

impl GraphProblem {
    pub fn new(num_nodes: usize, start: usize, goals: Vec<usize>, edges: Vec<(usize, usize, Cost)>) -> Self {
        Self {
            num_nodes,
            start,
            goals,
            edges,
        }
    }

    /// Cheapest path cost from every node to the nearest goal, by repeated relaxation.
    pub fn costs_to_goal(&self) -> Vec<Cost> {
        let mut dist = vec![Cost::INFINITY; self.num_nodes];
        for &g in &self.goals {
            dist[g] = 0.0;
        }
        for _ in 0..self.num_nodes {
            for &(from, to, cost) in &self.edges {
                if dist[to] + cost < dist[from] {
                    dist[from] = dist[to] + cost;
                }
            }
        }
        dist
    }

    /// Fewest edges from the start to a goal.
    pub fn fewest_steps_to_goal(&self) -> Option<usize> {
        let unit = GraphProblem {
            edges: self.edges.iter().map(|&(f, t, _)| (f, t, 1.0)).collect(),
            ..self.clone()
        };
        let d = unit.costs_to_goal()[self.start];
        d.is_finite().then_some(d as usize)
    }

    /// Node reached by following `actions` from the start.
    pub fn follow(&self, actions: &[usize]) -> Option<usize> {
        let mut node = self.start;
        for &edge in actions {
            let &(from, to, _) = self.edges.get(edge)?;
            if from != node {
                return None;
            }
            node = to;
        }
        Some(node)
    }
}

impl SearchProblem for GraphProblem {
    type State = usize;
    type Action = usize;
    type Successors = Vec<Successor<usize, usize>>;

    fn start_state(&self) -> usize {
        self.start
    }

    fn is_goal_state(&self, state: &usize) -> bool {
        self.goals.contains(state)
    }

    fn successors(&self, state: &usize) -> Self::Successors {
        self.edges
            .iter()
            .enumerate()
            .filter(|(_, (from, _, _))| from == state)
            .map(|(i, &(_, to, cost))| Successor::new(to, i, cost))
            .collect()
    }

    fn cost_of_actions(&self, actions: &[usize]) -> Option<Cost> {
        let mut node = self.start;
        let mut total = 0.0;
        for &edge in actions {
            let &(from, to, cost) = self.edges.get(edge)?;
            if from != node {
                return None;
            }
            node = to;
            total += cost;
        }
        Some(total)
    }
}

#[derive(Debug, Clone)]
pub struct TreeNode {
    pub children: Vec<usize>,
    pub value: Value,
}

/// Explicit game tree. Actions are child indices, every agent moves along the same tree.
#[derive(Debug, Clone)]
pub struct TreeGame {
    pub nodes: Arc<Vec<TreeNode>>,
    pub node: usize,
    pub num_agents: usize,
}

impl TreeGame {
    pub fn new(nodes: Vec<TreeNode>, num_agents: usize) -> Self {
        Self {
            nodes: Arc::new(nodes),
            node: 0,
            num_agents,
        }
    }

    /// Builds a tree from nested `(value, children)` pairs, root first.
    pub fn from_nested(root: &Nested, num_agents: usize) -> Self {
        fn push(n: &Nested, nodes: &mut Vec<TreeNode>) -> usize {
            let index = nodes.len();
            nodes.push(TreeNode {
                children: vec![],
                value: n.0,
            });
            for child in &n.1 {
                let c = push(child, nodes);
                nodes[index].children.push(c);
            }
            index
        }
        let mut nodes = vec![];
        push(root, &mut nodes);
        Self::new(nodes, num_agents)
    }

    pub fn value(&self) -> Value {
        self.nodes[self.node].value
    }
}

/// `(value, children)`
#[derive(Debug, Clone)]
pub struct Nested(pub Value, pub Vec<Nested>);

pub fn leaf(value: Value) -> Nested {
    Nested(value, vec![])
}

pub fn node(children: Vec<Nested>) -> Nested {
    Nested(0.0, children)
}

pub fn tree_value(game: &TreeGame) -> Value {
    game.value()
}

impl MultiAgentGame for TreeGame {
    type Action = usize;
    type Actions = std::ops::Range<usize>;
    type Error = usize;

    fn num_agents(&self) -> usize {
        self.num_agents
    }

    fn legal_actions(&self, _agent: AgentIndex) -> Self::Actions {
        0..self.nodes[self.node].children.len()
    }

    fn generate_successor(&self, _agent: AgentIndex, action: usize) -> Result<Self, usize> {
        let Some(&child) = self.nodes[self.node].children.get(action) else {
            return Err(action);
        };
        Ok(Self {
            node: child,
            ..self.clone()
        })
    }
}
