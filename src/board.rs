use std::fmt::{self, Debug, Display, Formatter};

use crate::data::{MapCell, Pos, MAX_SIZE};
use crate::solver::deadlocks::find_dead_ends;
use crate::solver::SolverErr;
use crate::vec2d::Vec2d;

/// Everything about a level that doesn't change while solving it.
///
/// Never mutated after construction so one board can be shared by any number of solves.
#[derive(Clone)]
pub struct Board {
    grid: Vec2d<MapCell>,
    goals: Vec<Pos>,
    dead_ends: Vec2d<bool>,
}

impl Board {
    /// Computes the static dead ends from corner geometry.
    pub fn new(grid: Vec2d<MapCell>) -> Result<Self, SolverErr> {
        check_size(&grid)?;
        let dead_ends = find_dead_ends(&grid);
        Ok(Self::from_parts(grid, dead_ends))
    }

    /// Uses dead ends computed elsewhere. They have to cover the whole grid
    /// and must never mark a goal.
    pub fn with_dead_ends(grid: Vec2d<MapCell>, dead_ends: Vec2d<bool>) -> Result<Self, SolverErr> {
        check_size(&grid)?;
        if dead_ends.rows() != grid.rows() || dead_ends.cols() != grid.cols() {
            return Err(SolverErr::DeadEndsMismatch);
        }
        if grid
            .positions()
            .any(|pos| grid[pos] == MapCell::Goal && dead_ends[pos])
        {
            return Err(SolverErr::DeadEndsMismatch);
        }
        Ok(Self::from_parts(grid, dead_ends))
    }

    fn from_parts(grid: Vec2d<MapCell>, dead_ends: Vec2d<bool>) -> Self {
        let goals = grid
            .positions()
            .filter(|&pos| grid[pos] == MapCell::Goal)
            .collect();
        Board {
            grid,
            goals,
            dead_ends,
        }
    }

    pub fn rows(&self) -> usize {
        self.grid.rows()
    }

    pub fn cols(&self) -> usize {
        self.grid.cols()
    }

    pub fn grid(&self) -> &Vec2d<MapCell> {
        &self.grid
    }

    pub fn goals(&self) -> &[Pos] {
        &self.goals
    }

    pub fn dead_ends(&self) -> &Vec2d<bool> {
        &self.dead_ends
    }

    pub fn contains(&self, pos: Pos) -> bool {
        self.grid.contains(pos)
    }

    /// Anything outside the grid counts as wall.
    pub fn is_wall(&self, pos: Pos) -> bool {
        self.grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall)
    }

    pub fn is_goal(&self, pos: Pos) -> bool {
        self.grid.get(pos) == Some(&MapCell::Goal)
    }

    pub fn is_dead_end(&self, pos: Pos) -> bool {
        self.dead_ends.get(pos).cloned().unwrap_or(false)
    }
}

fn check_size(grid: &Vec2d<MapCell>) -> Result<(), SolverErr> {
    if grid.rows() > MAX_SIZE || grid.cols() > MAX_SIZE {
        Err(SolverErr::TooLarge)
    } else {
        Ok(())
    }
}

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.grid)
    }
}

impl Debug for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self)
    }
}
