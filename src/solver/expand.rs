use crate::board::Board;
use crate::data::{Dir, DIRECTIONS};
use crate::moves::Move;
use crate::state::State;

// Terminology:
// move = changing player position by one cell
// push = a move that changes a box position
// step = a move that doesn't change a box position

/// Applies one move if it's legal.
///
/// Walking into a wall is never legal, walking into a box pushes it
/// unless there's a wall or another box behind it.
pub fn step(board: &Board, state: &State, dir: Dir) -> Option<(Move, State)> {
    let new_player_pos = state.player_pos + dir;
    if board.is_wall(new_player_pos) {
        return None;
    }

    if !state.has_box(new_player_pos) {
        let new_state = State {
            player_pos: new_player_pos,
            boxes: state.boxes.clone(),
        };
        return Some((Move::new(dir, false), new_state));
    }

    let push_dest = new_player_pos + dir;
    if board.is_wall(push_dest) || state.has_box(push_dest) {
        return None;
    }

    let mut new_state = state.with_box_moved(new_player_pos, push_dest);
    new_state.player_pos = new_player_pos;
    Some((Move::new(dir, true), new_state))
}

/// All legal moves in the order up, down, left, right.
pub fn expand(board: &Board, state: &State) -> Vec<(Move, State)> {
    DIRECTIONS
        .iter()
        .filter_map(|&dir| step(board, state, dir))
        .collect()
}
