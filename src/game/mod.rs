mod evaluation;
mod game_state;

pub use evaluation::*;
pub use game_state::*;
