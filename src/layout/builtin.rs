use super::{Layout, LayoutError};

pub const TINY_MAZE: &str = "\
%%%%%%%
%    P%
% %%% %
%  %  %
%%   %%
%. %%%%
%%%%%%%";

pub const SMALL_MAZE: &str = "\
%%%%%%%%%%%%
%P   %     %
% %% % %%% %
% %    %   %
% %%%%% % %%
%     %   .%
%%%%%%%%%%%%";

pub const TINY_SEARCH: &str = "\
%%%%%%%%%
%..   ..%
%%%%.%% %
%   P   %
%.%% %%.%
%.%.   .%
%%%%%%%%%";

pub const TEST_CLASSIC: &str = "\
%%%%%
% . %
%.G.%
% . %
%. .%
%   %
%  .%
%   %
%P .%
%%%%%";

pub const MINIMAX_CLASSIC: &str = "\
%%%%%%%%%
%.P    G%
% %.%G%%%
%G %%%%%%
%%%%%%%%%";

pub const TRAPPED_CLASSIC: &str = "\
%%%%%%%%
%   P G%
%G%%%%%%
%....  %
%%%%%%%%";

pub const BUILTIN_LAYOUTS: [(&str, &str); 6] = [
    ("tiny_maze", TINY_MAZE),
    ("small_maze", SMALL_MAZE),
    ("tiny_search", TINY_SEARCH),
    ("test_classic", TEST_CLASSIC),
    ("minimax_classic", MINIMAX_CLASSIC),
    ("trapped_classic", TRAPPED_CLASSIC),
];

impl Layout {
    /// Looks up a built-in layout by name. Accepts `tinyMaze` as well as `tiny_maze`.
    pub fn builtin(name: &str) -> Result<Layout, LayoutError> {
        let normalized = normalize_name(name);
        let Some((_, text)) = BUILTIN_LAYOUTS.iter().find(|(n, _)| *n == normalized) else {
            return Err(LayoutError::UnknownLayout(name.to_string()));
        };
        text.parse()
    }
}

fn normalize_name(name: &str) -> String {
    let mut out = String::with_capacity(name.len() + 4);
    for ch in name.trim().chars() {
        if ch.is_ascii_uppercase() {
            if !out.is_empty() {
                out.push('_');
            }
            out.push(ch.to_ascii_lowercase());
        } else if ch == '-' {
            out.push('_');
        } else {
            out.push(ch);
        }
    }
    out
}
