use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Strategy {
    BruteForce,
    Bfs,
    Dfs,
    AStar,
    Greedy,
}

impl Strategy {
    pub const ALL: [Strategy; 5] = [
        Strategy::BruteForce,
        Strategy::Bfs,
        Strategy::Dfs,
        Strategy::AStar,
        Strategy::Greedy,
    ];

    /// Whether the strategy needs the heuristic.
    pub fn is_informed(self) -> bool {
        match self {
            Strategy::AStar | Strategy::Greedy => true,
            Strategy::BruteForce | Strategy::Bfs | Strategy::Dfs => false,
        }
    }
}

impl Display for Strategy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match *self {
            Strategy::BruteForce => write!(f, "brute-force"),
            Strategy::Bfs => write!(f, "bfs"),
            Strategy::Dfs => write!(f, "dfs"),
            Strategy::AStar => write!(f, "a-star"),
            Strategy::Greedy => write!(f, "greedy"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrategyParseErr(pub String);

impl Display for StrategyParseErr {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Unknown strategy '{}' - expected one of brute-force, bfs, dfs, a-star, greedy",
            self.0
        )
    }
}

impl std::error::Error for StrategyParseErr {}

impl FromStr for Strategy {
    type Err = StrategyParseErr;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "brute-force" | "bruteforce" => Ok(Strategy::BruteForce),
            "bfs" => Ok(Strategy::Bfs),
            "dfs" => Ok(Strategy::Dfs),
            "a-star" | "astar" => Ok(Strategy::AStar),
            "greedy" => Ok(Strategy::Greedy),
            _ => Err(StrategyParseErr(s.to_string())),
        }
    }
}

/// Depth bound of brute force when nothing else is specified.
pub const DEFAULT_MAX_DEPTH: usize = 15;

#[derive(Debug, Clone)]
pub struct SolverConfig {
    pub strategy: Strategy,
    /// Discard pushes into static dead ends and frozen 2x2 squares.
    pub prune_deadlocks: bool,
    /// Maximum path length explored by brute force, ignored by other strategies.
    pub max_depth: usize,
    /// Give up after visiting this many states.
    pub max_states: Option<usize>,
    /// Checked on every expansion, setting it makes the solve give up.
    pub cancel: Option<Arc<AtomicBool>>,
    pub print_status: bool,
}

impl SolverConfig {
    pub fn new(strategy: Strategy) -> Self {
        SolverConfig {
            strategy,
            prune_deadlocks: true,
            max_depth: DEFAULT_MAX_DEPTH,
            max_states: None,
            cancel: None,
            print_status: false,
        }
    }

    pub fn prune_deadlocks(mut self, prune: bool) -> Self {
        self.prune_deadlocks = prune;
        self
    }

    pub fn max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub fn max_states(mut self, max_states: usize) -> Self {
        self.max_states = Some(max_states);
        self
    }

    pub fn cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn print_status(mut self, print_status: bool) -> Self {
        self.print_status = print_status;
        self
    }

    pub(crate) fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for SolverConfig {
    fn default() -> Self {
        SolverConfig::new(Strategy::AStar)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strategy_names_round_trip() {
        for &strategy in &Strategy::ALL {
            assert_eq!(strategy.to_string().parse::<Strategy>(), Ok(strategy));
        }
        assert_eq!("AStar".parse::<Strategy>(), Ok(Strategy::AStar));
        assert_eq!(
            "ida".parse::<Strategy>(),
            Err(StrategyParseErr("ida".to_string()))
        );
    }

    #[test]
    fn builder() {
        let config = SolverConfig::new(Strategy::BruteForce)
            .prune_deadlocks(false)
            .max_depth(6)
            .max_states(1000);
        assert_eq!(config.strategy, Strategy::BruteForce);
        assert!(!config.prune_deadlocks);
        assert_eq!(config.max_depth, 6);
        assert_eq!(config.max_states, Some(1000));
        assert!(!config.is_cancelled());

        let flag = Arc::new(AtomicBool::new(false));
        let config = SolverConfig::default().cancel_flag(flag.clone());
        assert_eq!(config.strategy, Strategy::AStar);
        assert!(!config.is_cancelled());
        flag.store(true, Ordering::Relaxed);
        assert!(config.is_cancelled());
    }
}
