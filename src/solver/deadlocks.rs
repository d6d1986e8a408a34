use crate::board::Board;
use crate::data::{Dir, MapCell, Pos};
use crate::state::State;
use crate::vec2d::Vec2d;

/// Marks cells from which a box can never be pushed out: empty cells
/// with a wall on two perpendicular sides. Cells outside the grid count as walls.
pub(crate) fn find_dead_ends(grid: &Vec2d<MapCell>) -> Vec2d<bool> {
    let is_wall = |pos: Pos| grid.get(pos).map_or(true, |&cell| cell == MapCell::Wall);

    let mut dead_ends = grid.scratchpad();
    for pos in grid.positions() {
        // walls can't hold a box and goals are never dead
        if grid[pos] != MapCell::Empty {
            continue;
        }

        let vertical = is_wall(pos + Dir::Up) || is_wall(pos + Dir::Down);
        let horizontal = is_wall(pos + Dir::Left) || is_wall(pos + Dir::Right);
        if vertical && horizontal {
            dead_ends[pos] = true;
        }
    }
    dead_ends
}

/// Checks whether the box just pushed to `box_pos` is part of a 2x2 square
/// where every cell is either a wall or a box. None of those boxes can ever move again.
pub fn is_deadlock_after_push(board: &Board, state: &State, box_pos: Pos) -> bool {
    if board.is_goal(box_pos) {
        return false;
    }

    let blocked = |pos: Pos| board.is_wall(pos) || state.has_box(pos);

    // top left corners of the 4 squares containing the box
    let corners = [
        Pos::new(box_pos.r - 1, box_pos.c - 1),
        Pos::new(box_pos.r - 1, box_pos.c),
        Pos::new(box_pos.r, box_pos.c - 1),
        box_pos,
    ];
    corners.iter().any(|&corner| {
        let square = [
            corner,
            corner + Dir::Right,
            corner + Dir::Down,
            corner + Dir::Down + Dir::Right,
        ];
        square
            .iter()
            .filter(|&&pos| pos != box_pos)
            .all(|&pos| blocked(pos))
    })
}

/// Static dead end or frozen square.
pub fn is_dead_push(board: &Board, state: &State, box_pos: Pos) -> bool {
    board.is_dead_end(box_pos) || is_deadlock_after_push(board, state, box_pos)
}
