use std::ops::Range;
use std::sync::Arc;

use proptest::prelude::*;
use rand::{rngs::SmallRng, Rng, SeedableRng};

use crate::data_structures::ActionList;
use crate::game::PacmanGameState;
use crate::game_tree_search::{AgentIndex, MultiAgentGame};
use crate::layout::{Layout, BUILTIN_LAYOUTS};

pub fn arb_builtin_layout() -> impl Strategy<Value = Arc<Layout>> {
    (0..BUILTIN_LAYOUTS.len()).prop_map(|i| {
        let (name, _) = BUILTIN_LAYOUTS[i];
        Arc::new(Layout::builtin(name).unwrap())
    })
}

prop_compose! {
    /// Bordered board with random inner walls, food and capsules, and Pacman on an open cell.
    pub fn arb_layout_text()(
        width in 3usize..10,
        height in 3usize..8,
    )(
        cells in proptest::collection::vec(
            prop_oneof![4 => Just(' '), 3 => Just('.'), 2 => Just('%'), 1 => Just('o'), 1 => Just('G')],
            width * height,
        ),
        pacman in 0..width * height,
        width in Just(width),
        height in Just(height),
    ) -> String {
        let mut rows = vec!["%".repeat(width + 2)];
        for y in 0..height {
            let mut row = String::from("%");
            for x in 0..width {
                let i = y * width + x;
                row.push(if i == pacman { 'P' } else { cells[i] });
            }
            row.push('%');
            rows.push(row);
        }
        rows.push("%".repeat(width + 2));
        rows.join("\n")
    }
}

pub struct ArbReachableGameState<T: Strategy<Value = Arc<Layout>>> {
    pub steps: Range<usize>,
    pub arb_layout: T,
    pub arb_seed: <u64 as Arbitrary>::Strategy,
}

impl<T: Strategy<Value = Arc<Layout>>> ArbReachableGameState<T> {
    const MAX_STEPS: usize = 60usize;

    pub fn new(arb_layout: T) -> Self {
        Self {
            steps: 0..Self::MAX_STEPS,
            arb_layout,
            arb_seed: u64::arbitrary(),
        }
    }

    /// A state reached by random legal play, and the agent to move next.
    pub fn arb(self) -> impl Strategy<Value = (PacmanGameState, AgentIndex)> {
        (self.steps, self.arb_seed, self.arb_layout).prop_map(|(steps, seed, layout)| {
            let mut rng = SmallRng::seed_from_u64(seed);
            let mut gs = PacmanGameState::new(layout);
            let mut agent = 0;
            for _ in 0usize..steps {
                let acts: ActionList<_> = gs.legal_actions(agent).into_iter().collect();
                if acts.is_empty() {
                    break;
                }
                let act = acts[rng.gen_range(0..acts.len())];
                gs = match gs.generate_successor(agent, act) {
                    Ok(next) => next,
                    Err(e) => {
                        dbg!(&gs);
                        dbg!(&act);
                        panic!("{e:?}");
                    }
                };
                agent = (agent + 1) % gs.num_agents();
            }
            (gs, agent)
        })
    }
}

pub fn arb_reachable_game_state() -> impl Strategy<Value = (PacmanGameState, AgentIndex)> {
    ArbReachableGameState::new(arb_builtin_layout()).arb()
}

pub fn arb_reachable_game_state_on_random_layout() -> impl Strategy<Value = (PacmanGameState, AgentIndex)> {
    let arb_layout = arb_layout_text().prop_map(|text| Arc::new(text.parse::<Layout>().unwrap()));
    ArbReachableGameState::new(arb_layout).arb()
}
