mod brute_force;
pub mod deadlocks;
pub mod expand;
mod heuristic;
mod search;
mod stats;

use std::error::Error;
use std::fmt::{self, Debug, Display, Formatter};

use log::{debug, info};

use crate::config::{SolverConfig, Strategy};
use crate::level::Level;
use crate::moves::Moves;
use crate::Solve;

use self::search::{PriorityQueue, Queue, SearchNode, Stack};

pub use self::stats::Stats;

/// Problems with the input - the solver refuses to start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolverErr {
    TooLarge,
    PlayerOutOfBounds,
    PlayerOnWall,
    PlayerOnBox,
    BoxOutOfBounds,
    BoxOnWall,
    DuplicateBox,
    DeadEndsMismatch,
}

impl Display for SolverErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            SolverErr::TooLarge => write!(f, "Map larger than 100 rows/columns"),
            SolverErr::PlayerOutOfBounds => write!(f, "Player is outside the map"),
            SolverErr::PlayerOnWall => write!(f, "Player is inside a wall"),
            SolverErr::PlayerOnBox => write!(f, "Player is on the same cell as a box"),
            SolverErr::BoxOutOfBounds => write!(f, "Box is outside the map"),
            SolverErr::BoxOnWall => write!(f, "Box is inside a wall"),
            SolverErr::DuplicateBox => write!(f, "Multiple boxes on the same cell"),
            SolverErr::DeadEndsMismatch => write!(
                f,
                "Dead ends don't match the map - wrong size or a goal marked as dead end"
            ),
        }
    }
}

impl Error for SolverErr {}

/// Why a search stopped before exhausting the state space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Depth,
    States,
    Cancelled,
}

impl Display for Limit {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Limit::Depth => write!(f, "depth limit reached"),
            Limit::States => write!(f, "state limit reached"),
            Limit::Cancelled => write!(f, "cancelled"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Solved(Moves),
    /// Every reachable state was searched - the level can't be solved.
    NoSolution,
    /// Nothing found within the limits, a solution might still exist.
    GaveUp(Limit),
}

pub struct SolverOk {
    pub outcome: Outcome,
    pub stats: Stats,
    pub strategy: Strategy,
}

impl SolverOk {
    fn new(outcome: Outcome, stats: Stats, strategy: Strategy) -> Self {
        Self {
            outcome,
            stats,
            strategy,
        }
    }

    pub fn is_solved(&self) -> bool {
        match self.outcome {
            Outcome::Solved(_) => true,
            Outcome::NoSolution | Outcome::GaveUp(_) => false,
        }
    }

    /// The solution or an empty path if there's none.
    pub fn moves(&self) -> Moves {
        match self.outcome {
            Outcome::Solved(ref moves) => moves.clone(),
            Outcome::NoSolution | Outcome::GaveUp(_) => Moves::default(),
        }
    }
}

impl Debug for SolverOk {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self.outcome {
            Outcome::Solved(ref moves) => writeln!(f, "{}: {}", self.strategy, moves)?,
            Outcome::NoSolution => writeln!(f, "{}: No solution", self.strategy)?,
            Outcome::GaveUp(limit) => writeln!(f, "{}: Gave up - {}", self.strategy, limit)?,
        }
        write!(f, "{:?}", self.stats)
    }
}

impl Solve for Level {
    fn solve(&self, config: &SolverConfig) -> SolverOk {
        solve(self, config)
    }
}

fn solve(level: &Level, config: &SolverConfig) -> SolverOk {
    let mut stats = Stats::new();

    let box_cnt = level.state().boxes.len();
    let goal_cnt = level.board().goals().len();
    if box_cnt > goal_cnt {
        info!(
            "{} boxes but only {} goals - no solution possible",
            box_cnt, goal_cnt
        );
        return SolverOk::new(Outcome::NoSolution, stats, config.strategy);
    }

    debug!(
        "Solving using {} (deadlock pruning: {})",
        config.strategy, config.prune_deadlocks
    );
    let outcome = match config.strategy {
        Strategy::BruteForce => brute_force::search(level, config, &mut stats),
        Strategy::Bfs => search::search(level, config, &mut stats, Queue::default()),
        Strategy::Dfs => search::search(level, config, &mut stats, Stack::default()),
        Strategy::AStar => search::search(
            level,
            config,
            &mut stats,
            PriorityQueue::new(|node: &SearchNode| node.cost + node.h),
        ),
        Strategy::Greedy => search::search(
            level,
            config,
            &mut stats,
            PriorityQueue::new(|node: &SearchNode| node.h),
        ),
    };

    match outcome {
        Outcome::Solved(ref moves) => info!(
            "{} found a solution with {} moves and {} pushes",
            config.strategy,
            moves.move_cnt(),
            moves.push_cnt()
        ),
        Outcome::NoSolution => info!("{} found no solution", config.strategy),
        Outcome::GaveUp(limit) => info!("{} gave up: {}", config.strategy, limit),
    }

    SolverOk::new(outcome, stats, config.strategy)
}
