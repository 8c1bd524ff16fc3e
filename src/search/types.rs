//! Core generation trait, strategy selection, and search events.

use super::config::SearchOptions;
use super::generators::{
    ExhaustiveFiltered, ExhaustiveUnfiltered, RowOrderedFiltered, RowOrderedUnfiltered,
};
use crate::board::BitBoard;
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::Duration;

mod sealed {
    pub trait Sealed {}

    impl Sealed for super::ExhaustiveUnfiltered {}
    impl Sealed for super::ExhaustiveFiltered {}
    impl Sealed for super::RowOrderedUnfiltered {}
    impl Sealed for super::RowOrderedFiltered {}
    impl Sealed for super::Strategy {}
}

/// Produces the positions reachable from a board by adding one queen.
///
/// Sealed: the four variants in this crate (and the [`Strategy`] enum that
/// dispatches between them) are the only implementations.
///
/// Every child returned has exactly one more queen than its parent, and a
/// board that already holds `size` queens has no children.
pub trait StateGenerator: sealed::Sealed {
    /// Short name used in log output.
    fn name(&self) -> &'static str;

    /// Children of `board` in increasing order of the newly set cell.
    ///
    /// `board` itself is never modified.
    fn expand(&self, board: &BitBoard) -> Vec<BitBoard>;

    /// Children of `board`, shuffled when `options.randomize_frontier` is set.
    fn possible_states<R: Rng + ?Sized>(
        &self,
        board: &BitBoard,
        options: &SearchOptions,
        rng: &mut R,
    ) -> Vec<BitBoard> {
        let mut states = self.expand(board);
        if options.randomize_frontier {
            states.shuffle(rng);
        }
        states
    }
}

/// Runtime choice among the four generator variants.
///
/// Placement scope (whole board or next row) and filtering (eager
/// validity check or none) are independent axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strategy {
    ExhaustiveUnfiltered(ExhaustiveUnfiltered),
    ExhaustiveFiltered(ExhaustiveFiltered),
    RowOrderedUnfiltered(RowOrderedUnfiltered),
    RowOrderedFiltered(RowOrderedFiltered),
}

impl Strategy {
    /// Picks the variant named by `use_constraint_filtering` and `use_row_ordering`.
    pub fn from_options(options: &SearchOptions) -> Self {
        match (options.use_row_ordering, options.use_constraint_filtering) {
            (false, false) => Strategy::ExhaustiveUnfiltered(ExhaustiveUnfiltered),
            (false, true) => Strategy::ExhaustiveFiltered(ExhaustiveFiltered),
            (true, false) => Strategy::RowOrderedUnfiltered(RowOrderedUnfiltered),
            (true, true) => Strategy::RowOrderedFiltered(RowOrderedFiltered),
        }
    }
}

impl StateGenerator for Strategy {
    fn name(&self) -> &'static str {
        match self {
            Strategy::ExhaustiveUnfiltered(g) => g.name(),
            Strategy::ExhaustiveFiltered(g) => g.name(),
            Strategy::RowOrderedUnfiltered(g) => g.name(),
            Strategy::RowOrderedFiltered(g) => g.name(),
        }
    }

    fn expand(&self, board: &BitBoard) -> Vec<BitBoard> {
        match self {
            Strategy::ExhaustiveUnfiltered(g) => g.expand(board),
            Strategy::ExhaustiveFiltered(g) => g.expand(board),
            Strategy::RowOrderedUnfiltered(g) => g.expand(board),
            Strategy::RowOrderedFiltered(g) => g.expand(board),
        }
    }
}

/// Where the driver currently is in its state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchPhase {
    /// Committing candidates and descending.
    Exploring,
    /// Restoring a saved board and frontier from history.
    Backtracking,
    /// Finished, either exhausted or stopped at the first goal.
    Done,
}

/// A goal position seen for the first time.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GoalFound {
    /// 1-based position of this goal among the distinct goals found.
    pub index: usize,
    /// Canonical rendering of the goal board.
    pub board: String,
    /// Step count at which the goal was reached.
    pub step: usize,
    /// Time since the search started.
    pub elapsed: Duration,
}

impl GoalFound {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Summary emitted once the search space is exhausted.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchComplete {
    /// Number of distinct goals found.
    pub goal_count: usize,
    /// Number of states committed.
    pub step_count: usize,
    /// Total search time.
    pub elapsed: Duration,
}

impl SearchComplete {
    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed.as_secs_f64()
    }
}

/// Events produced by [`SearchDriver`](super::SearchDriver).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SearchEvent {
    GoalFound(GoalFound),
    SearchComplete(SearchComplete),
}
