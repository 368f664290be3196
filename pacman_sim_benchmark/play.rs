use std::sync::Arc;

use instant::{Duration, Instant};

use pacman_sim::game::Outcome;
use pacman_sim::prelude::*;
use pacman_sim_cli_utils::cli_args::PlayOpts;

use crate::RunError;

#[derive(Debug, Clone, serde::Serialize)]
pub struct GameReport {
    pub game: u32,
    pub outcome: Option<Outcome>,
    pub score: i32,
    pub turns: usize,
    pub food_left: usize,
    pub dt_ms: u128,
}

#[derive(Debug, Clone, serde::Serialize)]
pub struct PlayReport {
    pub layout: String,
    pub wins: u32,
    pub losses: u32,
    pub average_score: f64,
    pub games: Vec<GameReport>,
}

pub fn play_game(opts: &PlayOpts, layout: &Arc<Layout>, game: u32) -> Result<(GameReport, Duration), RunError> {
    let t0 = Instant::now();
    let state = PacmanGameState::new(layout.clone());
    let mut agents = opts.make_agents(state.num_agents(), game);
    let record = run_game(state, &mut agents, opts.max_moves())?;
    let dt = t0.elapsed();
    let final_state = &record.final_state;
    let report = GameReport {
        game,
        outcome: final_state.outcome(),
        score: final_state.score(),
        turns: record.turns(),
        food_left: final_state.num_food(),
        dt_ms: dt.as_millis(),
    };
    Ok((report, dt))
}

pub fn main_play(opts: &PlayOpts, json: bool) -> Result<(), RunError> {
    let layout = opts.get_layout()?;
    let layout_name = opts
        .layout
        .layout
        .clone()
        .unwrap_or_else(|| PlayOpts::DEFAULT_LAYOUT.to_string());
    let t0 = Instant::now();
    let mut games = vec![];
    for i in 0..opts.games() {
        let (report, dt) = play_game(opts, &layout, i)?;
        if !json {
            let outcome = match report.outcome {
                Some(Outcome::Win) => "win ",
                Some(Outcome::Lose) => "lose",
                None => "----",
            };
            println!(
                "- Game {:3} ... {outcome} score={:5} turns={:4} dt={:6.2}ms",
                i + 1,
                report.score,
                report.turns,
                dt.as_secs_f64() * 1e3
            );
        }
        games.push(report);
    }

    let wins = games.iter().filter(|g| g.outcome == Some(Outcome::Win)).count() as u32;
    let losses = games.iter().filter(|g| g.outcome == Some(Outcome::Lose)).count() as u32;
    let average_score = if games.is_empty() {
        0.0
    } else {
        games.iter().map(|g| g.score as f64).sum::<f64>() / games.len() as f64
    };
    let report = PlayReport {
        layout: layout_name,
        wins,
        losses,
        average_score,
        games,
    };
    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!(
            "Wins: {}/{}, average score: {:.2}, {:.2}ms",
            report.wins,
            report.games.len(),
            report.average_score,
            t0.elapsed().as_secs_f64() * 1e3
        );
    }
    Ok(())
}
