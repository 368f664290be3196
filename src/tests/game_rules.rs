use crate::game::{GameError, Outcome, FOOD_SCORE, GHOST_EATEN_SCORE, LOSE_PENALTY, SCARED_TIME, TIME_PENALTY};
use crate::game_tree_search::{MultiAgentGame, PACMAN_INDEX};
use crate::types::{Direction::*, Position};

use super::*;

const CAPSULE_CORRIDOR: &str = "\
%%%%%%%%
%Po   G%
%.%%%%%%
%%%%%%%%";

const GHOST_NEXT_DOOR: &str = "\
%%%%%
%P G%
%.%%%
%%%%%";

const DEAD_END: &str = "\
%%%%%%%
% G  %%
%P%%%%%
%.%%%%%
%%%%%%%";

#[test]
fn eating_food_scores_and_clears_the_dot() {
    let gs = game_from("%%%%%%\n%P..%%\n%%%%%%");
    let gs1 = gs.generate_successor(PACMAN_INDEX, East).unwrap();
    assert_eq!(FOOD_SCORE - TIME_PENALTY, gs1.score());
    assert_eq!(1, gs1.num_food());
    assert!(!gs1.has_food(Position::new(2, 1)));
    assert!(!gs1.is_over());
}

#[test]
fn generating_a_successor_leaves_the_state_unchanged() {
    let gs = game_from(GHOST_NEXT_DOOR);
    let before = gs.clone();
    for action in gs.legal_actions(PACMAN_INDEX) {
        gs.generate_successor(PACMAN_INDEX, action).unwrap();
    }
    assert_eq!(before, gs);
}

#[test]
fn pacman_can_stop_but_not_walk_into_walls() {
    let gs = game_from(GHOST_NEXT_DOOR);
    let actions = gs.legal_actions(PACMAN_INDEX);
    assert!(actions.contains(&Stop));
    assert!(actions.contains(&East));
    assert!(actions.contains(&South));
    assert!(!actions.contains(&North));
    assert_eq!(
        Err(GameError::IllegalAction {
            agent: PACMAN_INDEX,
            action: North
        }),
        gs.generate_successor(PACMAN_INDEX, North)
    );
}

#[test]
fn unknown_agent_is_rejected() {
    let gs = game_from(GHOST_NEXT_DOOR);
    assert_eq!(2, gs.num_agents());
    assert_eq!(Err(GameError::NoSuchAgent(5)), gs.generate_successor(5, North));
}

#[test]
fn active_ghost_collision_loses() {
    let gs = game_from(GHOST_NEXT_DOOR).advance_multiple([(0, East), (1, West)]);
    assert_eq!(Some(Outcome::Lose), gs.outcome());
    assert_eq!(-TIME_PENALTY - LOSE_PENALTY, gs.score());
    for agent in 0..gs.num_agents() {
        assert!(gs.legal_actions(agent).is_empty());
    }
    assert_eq!(Err(GameError::GameOver), gs.generate_successor(PACMAN_INDEX, Stop));
}

#[test]
fn capsule_scares_ghosts_and_scared_ghost_can_be_eaten() {
    let gs = game_from(CAPSULE_CORRIDOR).advance_multiple([(0, East)]);
    assert!(gs.capsules().is_empty());
    assert_eq!(SCARED_TIME, gs.ghost_states()[0].scared_timer);

    let gs = gs.advance_multiple([(1, West), (0, East), (1, West)]);
    assert_eq!(SCARED_TIME - 2, gs.ghost_states()[0].scared_timer);
    assert_eq!(Position::new(4, 1), gs.ghost_states()[0].position);

    let gs = gs.advance_multiple([(0, East)]);
    let ghost = gs.ghost_states()[0];
    assert_eq!(GHOST_EATEN_SCORE - 3 * TIME_PENALTY, gs.score());
    assert_eq!(ghost.start, ghost.position);
    assert!(!ghost.is_scared());
    assert!(!gs.is_over());
}

#[test]
fn ghosts_only_turn_back_at_dead_ends() {
    let gs = game_from(DEAD_END);
    assert_eq!(&[East, West][..], &gs.legal_actions(1)[..]);

    let gs = gs.advance_multiple([(0, Stop), (1, East), (0, Stop)]);
    assert_eq!(&[East][..], &gs.legal_actions(1)[..]);

    let gs = gs.advance_multiple([(1, East), (0, Stop)]);
    assert_eq!(&[West][..], &gs.legal_actions(1)[..]);
    assert!(!gs.legal_actions(1).contains(&Stop));
}

#[test]
fn clearing_the_board_wins() {
    let gs = game_from("%%%%%\n%P.G%\n%%%%%").advance_multiple([(0, East)]);
    assert!(gs.is_win());
    assert!(gs.legal_actions(1).is_empty());
}

#[test]
fn display_shows_board_and_score() {
    let gs = game_from(GHOST_NEXT_DOOR);
    assert_eq!(format!("{GHOST_NEXT_DOOR}\nScore: 0"), gs.to_string());
}
