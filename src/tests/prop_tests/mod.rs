mod generator;
use generator::*;

use proptest::prelude::*;

use crate::game::GameError;
use crate::game_tree_search::{MultiAgentGame, PACMAN_INDEX};
use crate::layout::Layout;
use crate::types::Direction;

#[cfg(feature = "serde")]
pub mod serialization;

const CASES: u32 = 256;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: CASES,
        ..ProptestConfig::default()
    })]

    #[test]
    fn legal_actions_should_be_performable_for_every_agent((gs, _) in arb_reachable_game_state()) {
        for agent in 0..gs.num_agents() {
            for action in gs.legal_actions(agent) {
                if let Err(e) = gs.generate_successor(agent, action) {
                    dbg!(&gs);
                    dbg!(&action);
                    dbg!(&e);
                    panic!("Action is not performable.");
                }
            }
        }
    }

    #[test]
    fn successors_do_not_modify_the_state((gs, agent) in arb_reachable_game_state_on_random_layout()) {
        let before = gs.clone();
        for action in gs.legal_actions(agent) {
            let _ = gs.generate_successor(agent, action);
        }
        assert_eq!(before, gs);
    }

    #[test]
    fn only_finished_games_run_out_of_moves((gs, agent) in arb_reachable_game_state_on_random_layout()) {
        if gs.is_over() {
            for agent in 0..gs.num_agents() {
                assert!(gs.legal_actions(agent).is_empty());
            }
            assert_eq!(Err(GameError::GameOver), gs.generate_successor(agent, Direction::Stop));
        } else {
            assert!(!gs.legal_actions(agent).is_empty());
            assert!(gs.legal_actions(PACMAN_INDEX).contains(&Direction::Stop));
        }
    }

    #[test]
    fn food_and_capsules_never_reappear((gs, agent) in arb_reachable_game_state_on_random_layout()) {
        for action in gs.legal_actions(agent) {
            let next = gs.generate_successor(agent, action).unwrap();
            assert!(next.num_food() <= gs.num_food());
            assert!(next.capsules().len() <= gs.capsules().len());
            if agent == PACMAN_INDEX {
                assert_eq!(gs.pacman_position().step(action), next.pacman_position());
            }
        }
    }

    #[test]
    fn layout_display_reproduces_text(text in arb_layout_text()) {
        let layout: Layout = text.parse().unwrap();
        assert_eq!(text, layout.to_string());
    }

    #[test]
    fn open_moves_never_enter_walls(text in arb_layout_text()) {
        let layout: Layout = text.parse().unwrap();
        for pos in layout.walls.positions_where(|&w| !w) {
            for dir in layout.open_moves(pos) {
                assert_ne!(Direction::Stop, dir);
                assert!(!layout.is_wall(pos.step(dir)));
            }
        }
    }
}
