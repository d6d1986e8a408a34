use crate::board::Board;
use crate::state::State;

/// Sum of distances of each box to its closest goal - less is better.
///
/// Boxes are matched independently so several boxes may count the same goal.
/// One move changes at most one box by one cell, so the estimate never drops by more
/// than the cost of the move.
pub(crate) fn heuristic(board: &Board, state: &State) -> u32 {
    let mut goal_dist_sum = 0;
    for &box_pos in &state.boxes {
        if board.is_goal(box_pos) {
            continue;
        }
        let mut min = u32::max_value();
        for &goal in board.goals() {
            let dist = box_pos.dist(goal);
            if dist < min {
                min = dist;
            }
        }
        goal_dist_sum += min;
    }
    goal_dist_sum
}
