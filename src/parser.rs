use std::error::Error;
use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::board::Board;
use crate::data::{MapCell, Pos, MAX_SIZE};
use crate::level::Level;
use crate::solver::SolverErr;
use crate::state::State;
use crate::vec2d::Vec2d;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParserErr {
    Pos(usize, usize),
    TooLarge,
    MultiplePlayers,
    NoPlayer,
    Level(SolverErr),
}

impl Display for ParserErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            ParserErr::Pos(r, c) => write!(f, "Invalid cell at pos: [{}, {}]", r, c),
            ParserErr::TooLarge => write!(f, "Map larger than {} rows/columns", MAX_SIZE),
            ParserErr::MultiplePlayers => write!(f, "More than one player"),
            ParserErr::NoPlayer => write!(f, "No player"),
            ParserErr::Level(err) => write!(f, "Invalid level: {}", err),
        }
    }
}

impl Error for ParserErr {}

impl From<SolverErr> for ParserErr {
    fn from(err: SolverErr) -> Self {
        ParserErr::Level(err)
    }
}

impl FromStr for Level {
    type Err = ParserErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse(s)
    }
}

/// Parses (a subset of) the format described [here](http://www.sokobano.de/wiki/index.php?title=Level_format)
pub(crate) fn parse(level: &str) -> Result<Level, ParserErr> {
    // trim so we can specify levels using raw strings more easily
    let level = level.trim_matches('\n').trim_end();

    let mut grid = Vec::new();
    let mut boxes = Vec::new();
    let mut player_pos = None;

    for (r, line) in level.lines().enumerate() {
        if r >= MAX_SIZE {
            return Err(ParserErr::TooLarge);
        }
        let mut line_tiles = Vec::new();
        for (c, cur_char) in line.chars().enumerate() {
            if c >= MAX_SIZE {
                return Err(ParserErr::TooLarge);
            }
            let pos = Pos::new(r as i32, c as i32);

            let tile = match cur_char {
                '#' => MapCell::Wall,
                'p' | '@' | 'P' | '+' => {
                    if player_pos.is_some() {
                        return Err(ParserErr::MultiplePlayers);
                    }
                    player_pos = Some(pos);
                    if cur_char == 'P' || cur_char == '+' {
                        MapCell::Goal
                    } else {
                        MapCell::Empty
                    }
                }
                'b' | '$' => {
                    boxes.push(pos);
                    MapCell::Empty
                }
                'B' | '*' => {
                    boxes.push(pos);
                    MapCell::Goal
                }
                '.' => MapCell::Goal,
                ' ' | '-' | '_' => MapCell::Empty,
                _ => return Err(ParserErr::Pos(r, c)),
            };
            line_tiles.push(tile);
        }
        grid.push(line_tiles);
    }

    let player_pos = player_pos.ok_or(ParserErr::NoPlayer)?;
    let board = Board::new(Vec2d::new(&grid))?;
    Ok(Level::new(board, State::new(player_pos, boxes))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fail_empty() {
        assert_failure("", ParserErr::NoPlayer);
    }

    #[test]
    fn fail_no_player() {
        let level = r"
#####
#$ .#
#####
";
        assert_failure(level, ParserErr::NoPlayer);
    }

    #[test]
    fn fail_multiple_players() {
        let level = r"
######
#@$.+#
######
";
        assert_failure(level, ParserErr::MultiplePlayers);
    }

    #[test]
    fn fail_invalid_char() {
        let level = r"
#####
#@$x#
#####
";
        assert_failure(level, ParserErr::Pos(1, 3));
    }

    #[test]
    fn fail_too_large() {
        let wide = format!("@{}", " ".repeat(MAX_SIZE - 1) + "#");
        assert_failure(&wide, ParserErr::TooLarge);

        let tall = format!("@\n{}", "#\n".repeat(MAX_SIZE));
        assert_failure(&tall, ParserErr::TooLarge);

        let just_fits = format!("@{}", " ".repeat(MAX_SIZE - 2) + "#");
        assert!(just_fits.parse::<Level>().is_ok());
    }

    #[test]
    fn ragged_rows() {
        let level = r"
  ####
###  #
#@$ .#
######
";
        let level: Level = level.parse().unwrap();
        assert_eq!(level.board().rows(), 4);
        assert_eq!(level.board().cols(), 6);
        assert_eq!(level.board().goals(), &[Pos::new(2, 4)]);
        assert_eq!(level.state().player_pos, Pos::new(2, 1));
        assert_eq!(level.state().boxes, vec![Pos::new(2, 2)]);
    }

    #[test]
    fn alternative_chars() {
        let level = r"
#######
#--b_.#
#PB   #
#######
";
        let level: Level = level.parse().unwrap();
        assert_eq!(level.state().player_pos, Pos::new(2, 1));
        assert_eq!(level.state().boxes, vec![Pos::new(1, 3), Pos::new(2, 2)]);
        assert_eq!(
            level.board().goals(),
            &[Pos::new(1, 5), Pos::new(2, 1), Pos::new(2, 2)]
        );
    }

    fn assert_failure(level: &str, expected_err: ParserErr) {
        assert_eq!(level.parse::<Level>().unwrap_err(), expected_err);
    }
}
