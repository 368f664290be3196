use proptest::prelude::*;

use pacman_sim::rand::{rngs::SmallRng, Rng, SeedableRng};
use pacman_sim::search_problem::Cost;

use crate::tests::{GraphProblem, TreeGame, TreeNode};

prop_compose! {
    /// Random directed multigraph with non-negative integer costs, starting at node 0.
    pub fn arb_graph_problem()(num_nodes in 2usize..12)(
        edges in proptest::collection::vec((0..num_nodes, 0..num_nodes, 0u8..6), 0..40),
        goals in proptest::collection::vec(0..num_nodes, 1..3),
        num_nodes in Just(num_nodes),
    ) -> GraphProblem {
        let edges = edges.into_iter().map(|(from, to, cost)| (from, to, cost as Cost)).collect();
        GraphProblem::new(num_nodes, 0, goals, edges)
    }
}

fn grow(nodes: &mut Vec<TreeNode>, rng: &mut SmallRng, remaining_depth: u8) -> usize {
    let index = nodes.len();
    nodes.push(TreeNode {
        children: vec![],
        value: rng.gen_range(-20..=20) as f64,
    });
    if remaining_depth > 0 {
        let branching = rng.gen_range(0..=3);
        for _ in 0..branching {
            let child = grow(nodes, rng, remaining_depth - 1);
            nodes[index].children.push(child);
        }
    }
    index
}

prop_compose! {
    /// Random game tree with values on every node, so cut-off and leaf evaluations both occur.
    pub fn arb_tree_game()(
        seed in any::<u64>(),
        height in 1u8..7,
        num_agents in 1usize..4,
    ) -> TreeGame {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut nodes = vec![];
        grow(&mut nodes, &mut rng, height);
        if nodes[0].children.is_empty() {
            grow(&mut nodes, &mut rng, 0);
            nodes[0].children.push(1);
        }
        TreeGame::new(nodes, num_agents)
    }
}
