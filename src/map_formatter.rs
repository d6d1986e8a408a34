use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::{Contents, MapCell, Pos};
use crate::state::State;

/// Renders a board, optionally with a state, in XSB.
pub struct MapFormatter<'a> {
    board: &'a Board,
    state: Option<&'a State>,
}

impl<'a> MapFormatter<'a> {
    pub(crate) fn new(board: &'a Board, state: Option<&'a State>) -> Self {
        Self { board, state }
    }

    fn write_to_formatter(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let grid = self.board.grid();
        let mut state_grid = grid.scratchpad_with_default(Contents::Empty);
        if let Some(state) = self.state {
            for &b in &state.boxes {
                state_grid[b] = Contents::Box;
            }
            state_grid[state.player_pos] = Contents::Player;
        }

        for r in 0..grid.rows() as i32 {
            // don't print trailing empty cells to match the input level strings
            let last_non_empty = (0..grid.cols() as i32).rev().find(|&c| {
                let pos = Pos::new(r, c);
                grid[pos] != MapCell::Empty || state_grid[pos] != Contents::Empty
            });

            if let Some(last) = last_non_empty {
                for c in 0..=last {
                    let pos = Pos::new(r, c);
                    Self::write_cell(grid[pos], state_grid[pos], f)?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }

    fn write_cell(cell: MapCell, contents: Contents, f: &mut Formatter<'_>) -> fmt::Result {
        match (cell, contents) {
            (MapCell::Empty, Contents::Empty) => write!(f, " "),
            (MapCell::Empty, Contents::Box) => write!(f, "$"),
            (MapCell::Empty, Contents::Player) => write!(f, "@"),
            (MapCell::Wall, Contents::Empty) => write!(f, "#"),
            (MapCell::Wall, _) => unreachable!("Wall with non-empty contents"),
            (MapCell::Goal, Contents::Empty) => write!(f, "."),
            (MapCell::Goal, Contents::Box) => write!(f, "*"),
            (MapCell::Goal, Contents::Player) => write!(f, "+"),
        }
    }
}

impl<'a> Display for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.write_to_formatter(f)
    }
}

impl<'a> Debug for MapFormatter<'a> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
