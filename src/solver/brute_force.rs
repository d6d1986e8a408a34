use log::debug;

use crate::config::SolverConfig;
use crate::data::DIRECTIONS;
use crate::level::Level;
use crate::moves::Moves;
use crate::state::State;

use super::deadlocks::is_dead_push;
use super::expand::step;
use super::stats::Stats;
use super::{Limit, Outcome};

struct Frame {
    state: State,
    /// Index into `DIRECTIONS` of the next move to try.
    next_dir: usize,
}

impl Frame {
    fn new(state: State) -> Self {
        Frame { state, next_dir: 0 }
    }
}

/// Plain backtracking without remembering visited states.
///
/// Revisits the same states over and over so the only thing that stops it
/// on unsolvable levels is `config.max_depth`. Uses an explicit stack
/// so memory stays proportional to the depth.
pub(crate) fn search(level: &Level, config: &SolverConfig, stats: &mut Stats) -> Outcome {
    let board = level.board();

    stats.add_created(0);
    stats.add_visited(0);
    if level.is_solved(level.state()) {
        return Outcome::Solved(Moves::default());
    }

    // always one more frame than moves - the initial state has no move leading to it
    let mut stack = vec![Frame::new(level.state().clone())];
    let mut moves = Moves::default();
    let mut hit_depth_limit = false;

    while let Some(frame) = stack.last_mut() {
        if config.is_cancelled() {
            debug!("Cancelled");
            return Outcome::GaveUp(Limit::Cancelled);
        }

        if frame.next_dir == DIRECTIONS.len() {
            stack.pop();
            moves.pop();
            continue;
        }
        let dir = DIRECTIONS[frame.next_dir];
        frame.next_dir += 1;

        let (mov, new_state) = match step(board, &frame.state, dir) {
            Some(successor) => successor,
            None => continue,
        };
        if mov.is_push
            && config.prune_deadlocks
            && is_dead_push(board, &new_state, new_state.player_pos + mov.dir)
        {
            stats.add_pruned_deadlock();
            continue;
        }

        let depth = stack.len();
        stats.add_created(depth);
        if level.is_solved(&new_state) {
            moves.add(mov);
            debug!("Solved at depth {}", depth);
            return Outcome::Solved(moves);
        }

        if depth >= config.max_depth {
            hit_depth_limit = true;
            continue;
        }

        if let Some(max_states) = config.max_states {
            if stats.total_visited() >= max_states as u64 {
                debug!("Expanded {} states, giving up", stats.total_visited());
                return Outcome::GaveUp(Limit::States);
            }
        }

        if stats.add_visited(depth) && config.print_status {
            println!("Visited new depth: {}", depth);
            println!("{:?}", stats);
        }
        moves.add(mov);
        stack.push(Frame::new(new_state));
    }

    if hit_depth_limit {
        debug!("No solution within {} moves", config.max_depth);
        Outcome::GaveUp(Limit::Depth)
    } else {
        Outcome::NoSolution
    }
}
