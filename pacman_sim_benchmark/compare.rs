use std::sync::Arc;

use instant::Instant;

use pacman_sim::prelude::*;
use pacman_sim_cli_utils::cli_args::{AgentConfig, CliError, SearchConfig};
use pacman_sim_search::prelude::*;

use crate::RunError;

#[derive(Debug, Clone, serde::Serialize)]
pub struct StrategyEntry {
    pub strategy: Strategy,
    pub result: Result<PathResult<Direction>, String>,
    pub dt_ns: u128,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct ModeEntry {
    pub mode: SearchMode,
    pub result: Result<Decision<Direction>, String>,
    pub dt_ns: u128,
}

/// Solves the configured problem with every strategy.
pub fn compare_strategies(layout: &Arc<Layout>, search: &SearchConfig) -> Vec<StrategyEntry> {
    Strategy::VALUES
        .into_iter()
        .map(|strategy| {
            let config = SearchConfig {
                strategy: Some(strategy),
                ..search.clone()
            };
            let t0 = Instant::now();
            let result = config.solve(layout.clone()).map_err(|e: CliError| e.to_string());
            let dt_ns = t0.elapsed().as_nanos();
            StrategyEntry { strategy, result, dt_ns }
        })
        .collect()
}

/// Picks Pacman's first move with every game tree search mode.
pub fn compare_modes(layout: &Arc<Layout>, agent: &AgentConfig) -> Vec<ModeEntry> {
    let state = PacmanGameState::new(layout.clone());
    SearchMode::VALUES
        .into_iter()
        .map(|mode| {
            let config = AgentConfig {
                mode: Some(mode),
                ..agent.clone()
            };
            let t0 = Instant::now();
            let result = config.make_search().search(&state).map_err(|e| e.to_string());
            let dt_ns = t0.elapsed().as_nanos();
            ModeEntry { mode, result, dt_ns }
        })
        .collect()
}

pub fn main_compare(
    layout: &Arc<Layout>,
    search: &SearchConfig,
    agent: &AgentConfig,
    modes: bool,
    json: bool,
) -> Result<(), RunError> {
    if modes {
        let entries = compare_modes(layout, agent);
        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }
        let mut total_counter = SearchCounter::ZERO;
        let mut total_dt_ns = 0;
        for ModeEntry { mode, result, dt_ns } in entries {
            let name = mode.to_string();
            total_dt_ns += dt_ns;
            match result {
                Ok(Decision { action, value, counter }) => {
                    total_counter.add_in_place(&counter);
                    println!("{name:>12}: {action} v={value:.2} | {}", counter.summary(dt_ns))
                }
                Err(e) => println!("{name:>12}: error: {e}"),
            }
        }
        println!("{:>12}: {}", "total", total_counter.summary(total_dt_ns));
    } else {
        let entries = compare_strategies(layout, search);
        if json {
            println!("{}", serde_json::to_string_pretty(&entries)?);
            return Ok(());
        }
        let mut total_counter = SearchCounter::ZERO;
        let mut total_dt_ns = 0;
        for StrategyEntry { strategy, result, dt_ns } in entries {
            // Starred strategies order the frontier by path cost.
            let name = if strategy.is_optimal() {
                format!("{strategy}*")
            } else {
                strategy.to_string()
            };
            total_dt_ns += dt_ns;
            match result {
                Ok(PathResult { actions, cost, counter }) => {
                    total_counter.add_in_place(&counter);
                    println!(
                        "{name:>6}: {:4} actions cost={cost:8.2} | {}",
                        actions.len(),
                        counter.summary(dt_ns)
                    )
                }
                Err(e) => println!("{name:>6}: error: {e}"),
            }
        }
        println!("{:>6}: {}", "total", total_counter.summary(total_dt_ns));
    }
    Ok(())
}
