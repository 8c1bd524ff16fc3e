//! Search configuration.

use crate::error::{NQueensError, Result};

/// Options for one N-Queens search run.
///
/// The queen count doubles as the board size. The two generation flags pick
/// one of the four [`Strategy`](super::Strategy) variants; `depth_first`
/// picks the frontier discipline.
///
/// # Examples
///
/// ```
/// use nqueens_search::search::SearchOptions;
///
/// let options = SearchOptions::default()
///     .with_queen_count(8)
///     .with_constraint_filtering(true)
///     .with_row_ordering(true)
///     .with_depth_first(true);
/// assert!(options.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchOptions {
    /// Number of queens to place; also the board side length. Must be >= 1.
    pub queen_count: usize,

    /// Discard children that are not valid positions while generating them.
    pub use_constraint_filtering: bool,

    /// Only place queens in the next empty row instead of any empty cell.
    pub use_row_ordering: bool,

    /// Take the most recently generated sibling first (LIFO frontier).
    /// When false, siblings are taken in generation order (FIFO).
    pub depth_first: bool,

    /// Stop at the first new goal instead of exhausting the search space.
    pub stop_at_first_goal: bool,

    /// Shuffle each generated frontier.
    pub randomize_frontier: bool,

    /// Log every state change, backtrack push, and backtrack at trace level.
    pub verbose: bool,

    /// Seed for frontier shuffling. `None` draws a fresh seed per run.
    pub seed: Option<u64>,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            queen_count: 4,
            use_constraint_filtering: false,
            use_row_ordering: false,
            depth_first: false,
            stop_at_first_goal: false,
            randomize_frontier: false,
            verbose: false,
            seed: None,
        }
    }
}

impl SearchOptions {
    pub fn with_queen_count(mut self, n: usize) -> Self {
        self.queen_count = n;
        self
    }

    pub fn with_constraint_filtering(mut self, enabled: bool) -> Self {
        self.use_constraint_filtering = enabled;
        self
    }

    pub fn with_row_ordering(mut self, enabled: bool) -> Self {
        self.use_row_ordering = enabled;
        self
    }

    pub fn with_depth_first(mut self, enabled: bool) -> Self {
        self.depth_first = enabled;
        self
    }

    pub fn with_stop_at_first_goal(mut self, enabled: bool) -> Self {
        self.stop_at_first_goal = enabled;
        self
    }

    pub fn with_randomize_frontier(mut self, enabled: bool) -> Self {
        self.randomize_frontier = enabled;
        self
    }

    pub fn with_verbose(mut self, enabled: bool) -> Self {
        self.verbose = enabled;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.queen_count < 1 {
            return Err(NQueensError::InvalidSize(self.queen_count));
        }
        Ok(())
    }
}
