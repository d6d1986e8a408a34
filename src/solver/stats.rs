use std::fmt::{self, Debug, Display, Formatter};

use separator::Separatable;

/// Counts of states by depth (number of moves from the initial state).
#[derive(Clone, PartialEq, Eq, Default)]
pub struct Stats {
    created_states: Vec<u64>,
    visited_states: Vec<u64>,
    duplicate_states: Vec<u64>,
    pruned_deadlocks: u64,
}

impl Stats {
    pub fn new() -> Self {
        Stats::default()
    }

    pub fn total_created(&self) -> u64 {
        self.created_states.iter().sum()
    }

    pub fn total_visited(&self) -> u64 {
        self.visited_states.iter().sum()
    }

    pub fn total_reached_duplicates(&self) -> u64 {
        self.duplicate_states.iter().sum()
    }

    pub fn total_pruned_deadlocks(&self) -> u64 {
        self.pruned_deadlocks
    }

    pub(crate) fn add_created(&mut self, depth: usize) -> bool {
        Self::add(&mut self.created_states, depth)
    }

    /// Returns true if this is the first visited state at this depth.
    pub(crate) fn add_visited(&mut self, depth: usize) -> bool {
        Self::add(&mut self.visited_states, depth)
    }

    pub(crate) fn add_reached_duplicate(&mut self, depth: usize) -> bool {
        Self::add(&mut self.duplicate_states, depth)
    }

    pub(crate) fn add_pruned_deadlock(&mut self) {
        self.pruned_deadlocks += 1;
    }

    fn add(counts: &mut Vec<u64>, depth: usize) -> bool {
        let mut ret = false;

        // while because some depths might be skipped by greedy searches
        while depth >= counts.len() {
            counts.push(0);
            ret = true;
        }
        counts[depth] += 1;
        ret
    }
}

impl Debug for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "total created / visited / reached duplicates / pruned deadlocks:")?;
        writeln!(
            f,
            "{:<16}{:<16}{:<16}{}",
            self.total_created().separated_string(),
            self.total_visited().separated_string(),
            self.total_reached_duplicates().separated_string(),
            self.total_pruned_deadlocks().separated_string(),
        )
    }
}

impl Display for Stats {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let created = self.total_created();
        let visited = self.total_visited();
        let duplicates = self.total_reached_duplicates();
        let left = created.saturating_sub(visited + duplicates);
        writeln!(f, "States created total: {}", created.separated_string())?;
        writeln!(f, "States visited total: {}", visited.separated_string())?;
        writeln!(f, "Reached duplicates total: {}", duplicates.separated_string())?;
        writeln!(f, "Created but not reached total: {}", left.separated_string())?;
        writeln!(
            f,
            "Pruned deadlocks total: {}",
            self.pruned_deadlocks.separated_string()
        )?;
        writeln!(f)?;

        writeln!(
            f,
            "{:<15}{:<15}{:<15}{:<15}Unknown (not reached)",
            "Depth", "Created", "Visited", "Duplicates"
        )?;
        // created_states is the longest, everything else is created first
        for depth in 0..self.created_states.len() {
            let created = self.created_states[depth];
            let visited = self.visited_states.get(depth).cloned().unwrap_or(0);
            let duplicates = self.duplicate_states.get(depth).cloned().unwrap_or(0);
            let left = created.saturating_sub(visited + duplicates);
            writeln!(
                f,
                "{:<15}{:<15}{:<15}{:<15}{}",
                format!("{}:", depth),
                created.separated_string(),
                visited.separated_string(),
                duplicates.separated_string(),
                left.separated_string(),
            )?;
        }
        Ok(())
    }
}
