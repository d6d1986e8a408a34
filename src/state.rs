use std::hash::{Hash, Hasher};
use std::iter;

use fnv::FnvHasher;

use crate::data::Pos;

/// Player position and box positions - everything that changes during a search.
///
/// Boxes are kept sorted so two states with the same physical arrangement
/// compare and hash equal no matter in which order the boxes were moved.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct State {
    pub player_pos: Pos,
    pub boxes: Vec<Pos>,
}

impl State {
    pub fn new(player_pos: Pos, mut boxes: Vec<Pos>) -> State {
        boxes.sort();
        State { player_pos, boxes }
    }

    pub fn has_box(&self, pos: Pos) -> bool {
        self.boxes.binary_search(&pos).is_ok()
    }

    /// Returns a copy with the box at `from` moved to `to`, the player is left where it was.
    pub(crate) fn with_box_moved(&self, from: Pos, to: Pos) -> State {
        let mut boxes = self.boxes.clone();
        let index = boxes
            .binary_search(&from)
            .expect("Moving a box which doesn't exist");
        boxes.remove(index);
        let index = boxes.binary_search(&to).unwrap_or_else(|i| i);
        boxes.insert(index, to);
        State {
            player_pos: self.player_pos,
            boxes,
        }
    }

    /// FNV-1a over the player position followed by the sorted boxes,
    /// each as little-endian row then column.
    pub fn fingerprint(&self) -> u64 {
        let mut hasher = FnvHasher::default();
        for pos in iter::once(&self.player_pos).chain(&self.boxes) {
            hasher.write(&pos.r.to_le_bytes());
            hasher.write(&pos.c.to_le_bytes());
        }
        hasher.finish()
    }
}

impl Hash for State {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_u64(self.fingerprint());
    }
}

#[cfg(test)]
mod tests {
    use fnv::FnvHashSet;

    use super::*;

    #[test]
    fn box_order_doesnt_matter() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(2, 3), Pos::new(1, 2)]);
        let b = State::new(Pos::new(1, 1), vec![Pos::new(1, 2), Pos::new(2, 3)]);
        assert_eq!(a, b);
        assert_eq!(a.fingerprint(), b.fingerprint());

        let mut visited = FnvHashSet::default();
        assert!(visited.insert(a));
        assert!(!visited.insert(b));
    }

    #[test]
    fn player_is_part_of_identity() {
        let a = State::new(Pos::new(1, 1), vec![Pos::new(1, 2)]);
        let b = State::new(Pos::new(1, 2), vec![Pos::new(1, 1)]);
        assert_ne!(a, b);
        // the combine is order dependent so swapping player and box changes the value
        assert_ne!(a.fingerprint(), b.fingerprint());
    }

    #[test]
    fn fingerprint_values() {
        let no_boxes = State {
            player_pos: Pos::new(0, 0),
            boxes: vec![],
        };
        assert_eq!(no_boxes.fingerprint(), 0xa8c7_f832_281a_39c5);

        let one_row = State::new(Pos::new(0, 1), vec![Pos::new(0, 2)]);
        assert_eq!(one_row.fingerprint(), 0xd2d1_f429_b29c_a4d6);

        let two_boxes = State::new(Pos::new(4, 1), vec![Pos::new(2, 3), Pos::new(2, 2)]);
        assert_eq!(two_boxes.fingerprint(), 0x5676_e55f_1293_9781);
    }

    #[test]
    fn moving_boxes_keeps_them_sorted() {
        let state = State::new(Pos::new(0, 0), vec![Pos::new(1, 1), Pos::new(3, 3)]);
        let moved = state.with_box_moved(Pos::new(1, 1), Pos::new(4, 0));
        assert_eq!(moved.boxes, vec![Pos::new(3, 3), Pos::new(4, 0)]);
        assert!(moved.has_box(Pos::new(4, 0)));
        assert!(!moved.has_box(Pos::new(1, 1)));
        assert_eq!(moved.player_pos, state.player_pos);
    }
}
