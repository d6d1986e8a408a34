use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solver::expand::step;
use crate::state::State;

/// Prints the level after every push (or every move if `include_steps`).
pub struct SolutionFormatter<'a> {
    board: &'a Board,
    initial_state: &'a State,
    moves: &'a Moves,
    include_steps: bool,
}

impl<'a> SolutionFormatter<'a> {
    pub(crate) fn new(
        board: &'a Board,
        initial_state: &'a State,
        moves: &'a Moves,
        include_steps: bool,
    ) -> Self {
        Self {
            board,
            initial_state,
            moves,
            include_steps,
        }
    }
}

impl Display for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", MapFormatter::new(self.board, Some(self.initial_state)))?;

        let mut last_state = self.initial_state.clone();
        for (i, mov) in self.moves.iter().enumerate() {
            // moves could come from a different level
            let new_state = match step(self.board, &last_state, mov.dir) {
                Some((actual, new_state)) if actual.is_push == mov.is_push => new_state,
                _ => return writeln!(f, "Move {} ({}) is not possible", i + 1, mov),
            };
            if mov.is_push || self.include_steps {
                writeln!(f, "{}", MapFormatter::new(self.board, Some(&new_state)))?;
            }
            last_state = new_state;
        }
        Ok(())
    }
}

impl Debug for SolutionFormatter<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
