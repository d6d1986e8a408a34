use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, VecDeque};
use std::hash::{Hash, Hasher};

use fnv::FnvHashSet;
use log::{debug, trace};

use crate::config::SolverConfig;
use crate::level::Level;
use crate::moves::{Move, Moves};
use crate::state::State;

use super::deadlocks::is_dead_push;
use super::expand::expand;
use super::heuristic::heuristic;
use super::stats::Stats;
use super::{Limit, Outcome};

/// A state together with how we got there.
///
/// Only the state takes part in equality and hashing.
#[derive(Debug, Clone)]
pub(crate) struct SearchNode {
    pub(crate) state: State,
    pub(crate) moves: Moves,
    pub(crate) cost: u32,
    pub(crate) h: u32,
}

impl SearchNode {
    fn new(state: State, h: u32) -> Self {
        SearchNode {
            state,
            moves: Moves::default(),
            cost: 0,
            h,
        }
    }

    fn child(&self, mov: Move, state: State, h: u32) -> Self {
        let mut moves = self.moves.clone();
        moves.add(mov);
        SearchNode {
            state,
            moves,
            cost: self.cost + 1,
            h,
        }
    }

    fn depth(&self) -> usize {
        self.cost as usize
    }
}

impl PartialEq for SearchNode {
    fn eq(&self, other: &Self) -> bool {
        self.state == other.state
    }
}

impl Eq for SearchNode {}

impl Hash for SearchNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.state.hash(state);
    }
}

/// Decides the order in which states are expanded.
pub(crate) trait Frontier {
    fn push(&mut self, node: SearchNode);
    fn pop(&mut self) -> Option<SearchNode>;
}

/// FIFO - breadth first.
#[derive(Default)]
pub(crate) struct Queue(VecDeque<SearchNode>);

impl Frontier for Queue {
    fn push(&mut self, node: SearchNode) {
        self.0.push_back(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop_front()
    }
}

/// LIFO - depth first.
#[derive(Default)]
pub(crate) struct Stack(Vec<SearchNode>);

impl Frontier for Stack {
    fn push(&mut self, node: SearchNode) {
        self.0.push(node);
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.0.pop()
    }
}

struct Prioritized {
    priority: u32,
    order: u64,
    node: SearchNode,
}

impl PartialEq for Prioritized {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Prioritized {}

impl PartialOrd for Prioritized {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Prioritized {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.priority, self.order).cmp(&(other.priority, other.order))
    }
}

/// Lowest priority first, ties are broken by insertion order so results are reproducible.
pub(crate) struct PriorityQueue<P> {
    heap: BinaryHeap<Reverse<Prioritized>>,
    priority: P,
    pushed: u64,
}

impl<P: Fn(&SearchNode) -> u32> PriorityQueue<P> {
    pub(crate) fn new(priority: P) -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            priority,
            pushed: 0,
        }
    }
}

impl<P: Fn(&SearchNode) -> u32> Frontier for PriorityQueue<P> {
    fn push(&mut self, node: SearchNode) {
        let priority = (self.priority)(&node);
        self.heap.push(Reverse(Prioritized {
            priority,
            order: self.pushed,
            node,
        }));
        self.pushed += 1;
    }

    fn pop(&mut self) -> Option<SearchNode> {
        self.heap.pop().map(|Reverse(prioritized)| prioritized.node)
    }
}

/// Graph search shared by BFS, DFS, A* and greedy - they only differ in the frontier.
///
/// States are closed when they're taken out of the frontier, not when they're discovered,
/// so the first time a state is expanded it's through the best path the frontier knows about.
pub(crate) fn search<F: Frontier>(
    level: &Level,
    config: &SolverConfig,
    stats: &mut Stats,
    mut to_visit: F,
) -> Outcome {
    let board = level.board();
    let informed = config.strategy.is_informed();
    let estimate = |state: &State| if informed { heuristic(board, state) } else { 0 };

    let mut closed = FnvHashSet::default();

    let start = SearchNode::new(level.state().clone(), estimate(level.state()));
    stats.add_created(start.depth());
    to_visit.push(start);

    while let Some(cur_node) = to_visit.pop() {
        if config.is_cancelled() {
            debug!("Cancelled");
            return Outcome::GaveUp(Limit::Cancelled);
        }

        if closed.contains(&cur_node.state) {
            stats.add_reached_duplicate(cur_node.depth());
            continue;
        }

        if let Some(max_states) = config.max_states {
            if closed.len() >= max_states {
                debug!("Visited {} states, giving up", closed.len());
                return Outcome::GaveUp(Limit::States);
            }
        }

        if stats.add_visited(cur_node.depth()) && config.print_status {
            println!("Visited new depth: {}", cur_node.depth());
            println!("{:?}", stats);
        }

        if level.is_solved(&cur_node.state) {
            debug!("Solved at depth {}", cur_node.depth());
            return Outcome::Solved(cur_node.moves);
        }

        for (mov, new_state) in expand(board, &cur_node.state) {
            if mov.is_push && config.prune_deadlocks {
                let box_pos = new_state.player_pos + mov.dir;
                if is_dead_push(board, &new_state, box_pos) {
                    trace!("Pruned deadlock - box pushed to {:?}", box_pos);
                    stats.add_pruned_deadlock();
                    continue;
                }
            }
            if closed.contains(&new_state) {
                continue;
            }

            let h = estimate(&new_state);
            let next_node = cur_node.child(mov, new_state, h);
            stats.add_created(next_node.depth());
            to_visit.push(next_node);
        }

        closed.insert(cur_node.state);
    }

    debug!("Searched all {} reachable states", closed.len());
    Outcome::NoSolution
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::Pos;

    fn node(r: i32, cost: u32, h: u32) -> SearchNode {
        SearchNode {
            state: State::new(Pos::new(r, 0), vec![]),
            moves: Moves::default(),
            cost,
            h,
        }
    }

    fn pop_rows<F: Frontier>(mut frontier: F) -> Vec<i32> {
        let mut rows = Vec::new();
        while let Some(node) = frontier.pop() {
            rows.push(node.state.player_pos.r);
        }
        rows
    }

    #[test]
    fn frontier_orders() {
        let nodes = vec![node(0, 2, 2), node(1, 1, 3), node(2, 3, 0), node(3, 1, 1)];

        let mut queue = Queue::default();
        let mut stack = Stack::default();
        let mut a_star = PriorityQueue::new(|n: &SearchNode| n.cost + n.h);
        let mut greedy = PriorityQueue::new(|n: &SearchNode| n.h);
        for n in nodes {
            queue.push(n.clone());
            stack.push(n.clone());
            a_star.push(n.clone());
            greedy.push(n);
        }

        assert_eq!(pop_rows(queue), vec![0, 1, 2, 3]);
        assert_eq!(pop_rows(stack), vec![3, 2, 1, 0]);
        // f = 4, 4, 3, 2 - equal f in insertion order
        assert_eq!(pop_rows(a_star), vec![3, 2, 0, 1]);
        assert_eq!(pop_rows(greedy), vec![2, 3, 0, 1]);
    }

    #[test]
    fn node_identity_ignores_path() {
        let a = node(1, 5, 7);
        let mut b = node(1, 2, 0);
        b.moves = "uurR".parse().unwrap();
        assert_eq!(a, b);

        let mut set = FnvHashSet::default();
        assert!(set.insert(a));
        assert!(!set.insert(b));
        assert!(set.insert(node(2, 5, 7)));
    }
}
