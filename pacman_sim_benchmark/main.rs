use instant::Instant;
use structopt::StructOpt;

use pacman_sim::prelude::*;
use pacman_sim_cli_utils::cli_args::{AgentConfig, CliError, LayoutOpts, PlayOpts, SearchConfig};
use pacman_sim_search::prelude::*;

mod compare;
mod play;

#[derive(Debug, StructOpt, Clone)]
#[structopt(about = "Pacman search and multi-agent simulator")]
pub enum BenchmarkOpts {
    #[structopt(help = "Solve a search problem on a layout and print the path.")]
    Search {
        #[structopt(long = "--json", short = "-j")]
        json: bool,
        #[structopt(flatten)]
        layout: LayoutOpts,
        #[structopt(flatten)]
        search: SearchConfig,
    },
    #[structopt(help = "Compare every graph search strategy, or every game tree search mode with --modes.")]
    Compare {
        #[structopt(long = "--json", short = "-j")]
        json: bool,
        #[structopt(long = "--modes", help = "Compare game tree search modes on the first move")]
        modes: bool,
        #[structopt(flatten)]
        layout: LayoutOpts,
        #[structopt(flatten)]
        search: SearchConfig,
        #[structopt(long = "--mode-depth", help = "Search depth used with --modes")]
        depth: Option<u8>,
    },
    #[structopt(help = "Play games of Pacman against random ghosts.")]
    Play {
        #[structopt(long = "--json", short = "-j")]
        json: bool,
        #[structopt(flatten)]
        play: PlayOpts,
    },
    #[structopt(help = "Print a built-in layout.")]
    Show {
        #[structopt(flatten)]
        layout: LayoutOpts,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum RunError {
    #[error(transparent)]
    Cli(#[from] CliError),
    #[error("failed to load layout: {0}")]
    Layout(#[from] LayoutError),
    #[error("game failed: {0}")]
    Game(#[from] RunGameError<GameError>),
    #[error("failed to write JSON: {0}")]
    Json(#[from] serde_json::Error),
}

fn main_search(layout: &LayoutOpts, search: &SearchConfig, json: bool) -> Result<(), RunError> {
    let layout = layout.get_layout(SearchConfig::DEFAULT_LAYOUT)?;
    let t0 = Instant::now();
    let res = search.solve(layout)?;
    let dt_ns = t0.elapsed().as_nanos();
    if json {
        println!("{}", serde_json::to_string_pretty(&res)?);
        return Ok(());
    }
    let PathResult { actions, cost, counter } = res;
    let strategy = search.strategy.unwrap_or_default();
    println!("{strategy}: {} actions, cost={cost:.2}", actions.len());
    for (i, action) in actions.iter().enumerate() {
        println!("--> {i:3} {action}");
    }
    println!("{:?} {}", counter, counter.summary(dt_ns));
    Ok(())
}

fn main() -> Result<(), RunError> {
    env_logger::init();
    let opts = BenchmarkOpts::from_args();
    match &opts {
        BenchmarkOpts::Search { json, layout, search } => main_search(layout, search, *json)?,
        BenchmarkOpts::Compare {
            json,
            modes,
            layout,
            search,
            depth,
        } => {
            let default_layout = if *modes {
                PlayOpts::DEFAULT_LAYOUT
            } else {
                SearchConfig::DEFAULT_LAYOUT
            };
            let layout = layout.get_layout(default_layout)?;
            let agent = AgentConfig {
                search_depth: *depth,
                debug: search.debug,
                ..Default::default()
            };
            compare::main_compare(&layout, search, &agent, *modes, *json)?
        }
        BenchmarkOpts::Play { json, play } => play::main_play(play, *json)?,
        BenchmarkOpts::Show { layout } => {
            let layout = layout.get_layout(SearchConfig::DEFAULT_LAYOUT)?;
            log::info!("{}x{} layout with {} ghosts", layout.width(), layout.height(), layout.num_ghosts());
            println!("{layout}");
        }
    };

    Ok(())
}
