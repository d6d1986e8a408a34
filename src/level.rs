use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use crate::board::Board;
use crate::data::Dir;
use crate::map_formatter::MapFormatter;
use crate::moves::Moves;
use crate::solution_formatter::SolutionFormatter;
use crate::solver::expand::step;
use crate::solver::SolverErr;
use crate::state::State;

/// A board with a valid initial state.
#[derive(Clone)]
pub struct Level {
    board: Board,
    state: State,
}

impl Level {
    pub fn new(board: Board, state: State) -> Result<Self, SolverErr> {
        // the fields of State are public so it might not be sorted
        let state = State::new(state.player_pos, state.boxes);

        if !board.contains(state.player_pos) {
            return Err(SolverErr::PlayerOutOfBounds);
        }
        if board.is_wall(state.player_pos) {
            return Err(SolverErr::PlayerOnWall);
        }
        for &b in &state.boxes {
            if !board.contains(b) {
                return Err(SolverErr::BoxOutOfBounds);
            }
            if board.is_wall(b) {
                return Err(SolverErr::BoxOnWall);
            }
        }
        if state.boxes.windows(2).any(|pair| pair[0] == pair[1]) {
            return Err(SolverErr::DuplicateBox);
        }
        if state.has_box(state.player_pos) {
            return Err(SolverErr::PlayerOnBox);
        }

        Ok(Level { board, state })
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> &State {
        &self.state
    }

    /// Every box is on a goal. Goals without boxes don't matter.
    pub fn is_solved(&self, state: &State) -> bool {
        state.boxes.iter().all(|&b| self.board.is_goal(b))
    }

    /// Applies the moves one by one starting from the initial state.
    pub fn replay<I: IntoIterator<Item = Dir>>(&self, dirs: I) -> Result<State, IllegalMove> {
        let mut state = self.state.clone();
        for (index, dir) in dirs.into_iter().enumerate() {
            state = match step(&self.board, &state, dir) {
                Some((_, new_state)) => new_state,
                None => return Err(IllegalMove { index, dir }),
            };
        }
        Ok(state)
    }

    pub fn xsb(&self) -> MapFormatter<'_> {
        MapFormatter::new(&self.board, Some(&self.state))
    }

    pub fn format_solution<'a>(&'a self, moves: &'a Moves, include_steps: bool) -> SolutionFormatter<'a> {
        SolutionFormatter::new(&self.board, &self.state, moves, include_steps)
    }
}

impl Display for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.xsb())
    }
}

impl Debug for Level {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.xsb())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMove {
    pub index: usize,
    pub dir: Dir,
}

impl Display for IllegalMove {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "Move {} ({}) is not possible", self.index + 1, self.dir)
    }
}

impl Error for IllegalMove {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::{MapCell, Pos};
    use crate::vec2d::Vec2d;

    fn small_board() -> Board {
        let grid = Vec2d::new(&[
            vec![MapCell::Wall; 5],
            vec![MapCell::Wall, MapCell::Empty, MapCell::Empty, MapCell::Goal, MapCell::Wall],
            vec![MapCell::Wall; 5],
        ]);
        Board::new(grid).unwrap()
    }

    #[test]
    fn formatting_level() {
        let xsb = r"
*###*
#@$.#
*###*#
"
        .trim_start_matches('\n');

        let level: Level = xsb.parse().unwrap();
        assert_eq!(level.to_string(), xsb);
        assert_eq!(level.xsb().to_string(), xsb);
        assert_eq!(format!("{}", level), xsb);
        assert_eq!(format!("{:?}", level), xsb);
    }

    #[test]
    fn invalid_states() {
        let board = small_board();
        let check = |player_pos, boxes| Level::new(board.clone(), State::new(player_pos, boxes));

        assert!(check(Pos::new(1, 1), vec![Pos::new(1, 2)]).is_ok());
        assert_eq!(
            check(Pos::new(3, 1), vec![]).unwrap_err(),
            SolverErr::PlayerOutOfBounds
        );
        assert_eq!(
            check(Pos::new(0, 1), vec![]).unwrap_err(),
            SolverErr::PlayerOnWall
        );
        assert_eq!(
            check(Pos::new(1, 1), vec![Pos::new(1, 7)]).unwrap_err(),
            SolverErr::BoxOutOfBounds
        );
        assert_eq!(
            check(Pos::new(1, 1), vec![Pos::new(1, 4)]).unwrap_err(),
            SolverErr::BoxOnWall
        );
        assert_eq!(
            check(Pos::new(1, 1), vec![Pos::new(1, 2), Pos::new(1, 2)]).unwrap_err(),
            SolverErr::DuplicateBox
        );
        assert_eq!(
            check(Pos::new(1, 2), vec![Pos::new(1, 2)]).unwrap_err(),
            SolverErr::PlayerOnBox
        );
    }

    #[test]
    fn unsorted_boxes_are_normalized() {
        let state = State {
            player_pos: Pos::new(1, 1),
            boxes: vec![Pos::new(1, 3), Pos::new(1, 2)],
        };
        let level = Level::new(small_board(), state).unwrap();
        assert_eq!(level.state().boxes, vec![Pos::new(1, 2), Pos::new(1, 3)]);
    }

    #[test]
    fn replaying() {
        let level: Level = "#@$ .#".parse().unwrap();

        let state = level.replay(vec![Dir::Right, Dir::Right]).unwrap();
        assert_eq!(state.player_pos, Pos::new(0, 3));
        assert!(level.is_solved(&state));

        let moves: Moves = "rrl".parse().unwrap();
        let state = level.replay(moves.dirs()).unwrap();
        assert_eq!(state.player_pos, Pos::new(0, 2));
        assert!(level.is_solved(&state));

        assert_eq!(
            level.replay(vec![Dir::Left]).unwrap_err(),
            IllegalMove {
                index: 0,
                dir: Dir::Left
            }
        );
        assert_eq!(
            level.replay(vec![Dir::Right, Dir::Right, Dir::Right]).unwrap_err(),
            IllegalMove {
                index: 2,
                dir: Dir::Right
            }
        );
        assert!(!level.is_solved(level.state()));
    }
}
