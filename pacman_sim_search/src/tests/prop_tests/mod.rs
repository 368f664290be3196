mod generator;
use generator::*;

use proptest::prelude::*;

use pacman_sim::search_problem::{Cost, NullHeuristic, SearchProblem};

use crate::graph_search::*;
use crate::graph_search::Strategy;
use crate::multi_agent::*;
use crate::tests::{tree_value, GraphProblem};

const CASES: u32 = 512;

fn decide(game: &crate::tests::TreeGame, depth: u8, mode: SearchMode) -> Decision<usize> {
    let config = MultiAgentConfig {
        depth,
        mode,
        debug: false,
    };
    MultiAgentSearch::new(config, tree_value).search(game).unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn breadth_first_finds_fewest_steps(problem in arb_graph_problem()) {
        match (breadth_first_search(&problem), problem.fewest_steps_to_goal()) {
            (Ok(actions), Some(steps)) => assert_eq!(steps, actions.len()),
            (Err(SearchError::NoSolution), None) => {}
            (res, expected) => panic!("{res:?} but expected {expected:?} steps"),
        }
    }

    #[test]
    fn uniform_cost_and_astar_find_cheapest_cost(problem in arb_graph_problem()) {
        let expected = problem.costs_to_goal();
        let heuristic = |state: &usize, _: &GraphProblem| expected[*state];
        for (strategy, res) in [
            (Strategy::UniformCost, search(&problem, Strategy::UniformCost, &NullHeuristic)),
            (Strategy::AStar, search(&problem, Strategy::AStar, &NullHeuristic)),
            (Strategy::AStar, search(&problem, Strategy::AStar, &heuristic)),
        ] {
            match res {
                Ok(actions) => assert_eq!(Some(expected[problem.start]), problem.cost_of_actions(&actions), "{strategy}"),
                Err(e) => {
                    assert_eq!(SearchError::NoSolution, e);
                    assert_eq!(Cost::INFINITY, expected[problem.start], "{strategy}");
                }
            }
        }
    }

    #[test]
    fn every_strategy_returns_a_valid_path(problem in arb_graph_problem()) {
        let reachable = problem.fewest_steps_to_goal().is_some();
        for strategy in Strategy::VALUES {
            match search(&problem, strategy, &NullHeuristic) {
                Ok(actions) => {
                    let end = problem.follow(&actions).unwrap();
                    assert!(problem.is_goal_state(&end), "{strategy}");
                    assert!(problem.cost_of_actions(&actions).is_some());
                }
                Err(e) => {
                    assert_eq!(SearchError::NoSolution, e);
                    assert!(!reachable, "{strategy}");
                }
            }
        }
    }

    #[test]
    fn search_is_deterministic(problem in arb_graph_problem()) {
        for strategy in Strategy::VALUES {
            let config = GraphSearchConfig { strategy, ..Default::default() };
            let a = GraphSearch::new(config).solve(&problem, &NullHeuristic);
            let b = GraphSearch::new(config).solve(&problem, &NullHeuristic);
            assert_eq!(a, b);
        }
    }

    #[test]
    fn alpha_beta_matches_minimax(game in arb_tree_game(), depth in 1u8..5) {
        let minimax = decide(&game, depth, SearchMode::Minimax);
        let alpha_beta = decide(&game, depth, SearchMode::AlphaBeta);
        assert_eq!(minimax.action, alpha_beta.action);
        assert_eq!(minimax.value, alpha_beta.value);
        assert!(alpha_beta.counter.evals <= minimax.counter.evals);
    }

    #[test]
    fn expectimax_is_never_below_minimax(game in arb_tree_game(), depth in 1u8..5) {
        let minimax = decide(&game, depth, SearchMode::Minimax);
        let expectimax = decide(&game, depth, SearchMode::Expectimax);
        assert!(expectimax.value >= minimax.value - 1e-9);
        if game.num_agents == 1 {
            assert_eq!(minimax, Decision { counter: minimax.counter, ..expectimax });
        }
    }
}
