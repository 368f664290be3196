mod food_search;
mod heuristics;
mod position_search;

pub use food_search::*;
pub use heuristics::*;
pub use position_search::*;
