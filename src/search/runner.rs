//! Backtracking search driver.
//!
//! # Algorithm
//!
//! 1. Start from the empty board with its children as the frontier
//! 2. At each iteration:
//!    a. If the board holds `N` queens and is valid, report it (once per
//!       distinct board) and backtrack
//!    b. While the frontier is empty, restore the last saved board and
//!       frontier from history; with nothing left to restore, finish
//!    c. Save the board and its remaining frontier, commit the next
//!       candidate, and generate the new frontier from it
//! 3. Terminate when history is exhausted, or at the first goal when
//!    `stop_at_first_goal` is set
//!
//! Every committed board has one more queen than the board it came from,
//! so history never grows deeper than `N` frames.

use super::config::SearchOptions;
use super::frontier::Frontier;
use super::registry::GoalRegistry;
use super::types::{
    GoalFound, SearchComplete, SearchEvent, SearchPhase, StateGenerator, Strategy,
};
use crate::board::BitBoard;
use crate::error::Result;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::iter::FusedIterator;
use std::time::{Duration, Instant};

/// A saved search position: the board and the siblings not yet tried from it.
#[derive(Debug, Clone)]
pub struct BacktrackFrame {
    board: BitBoard,
    frontier: Frontier,
}

impl BacktrackFrame {
    pub fn board(&self) -> &BitBoard {
        &self.board
    }

    pub fn frontier(&self) -> &Frontier {
        &self.frontier
    }
}

/// Explicit-stack backtracking search over board states.
///
/// The driver is an iterator of [`SearchEvent`]s: each new goal is yielded
/// as it is found, followed by one [`SearchEvent::SearchComplete`] when the
/// space is exhausted. With `stop_at_first_goal` the iterator ends right
/// after the first goal instead.
///
/// # Examples
///
/// ```
/// use nqueens_search::search::{SearchDriver, SearchEvent, SearchOptions};
///
/// let options = SearchOptions::default()
///     .with_queen_count(6)
///     .with_constraint_filtering(true)
///     .with_row_ordering(true)
///     .with_depth_first(true);
///
/// let goals = SearchDriver::new(options)
///     .unwrap()
///     .filter(|e| matches!(e, SearchEvent::GoalFound(_)))
///     .count();
/// assert_eq!(goals, 4);
/// ```
pub struct SearchDriver<G: StateGenerator = Strategy> {
    options: SearchOptions,
    generator: G,
    board: BitBoard,
    frontier: Frontier,
    history: Vec<BacktrackFrame>,
    goals: GoalRegistry,
    steps: usize,
    phase: SearchPhase,
    rng: StdRng,
    started: Instant,
}

impl SearchDriver<Strategy> {
    /// Creates a driver using the generator variant selected by `options`.
    pub fn new(options: SearchOptions) -> Result<Self> {
        let generator = Strategy::from_options(&options);
        Self::with_generator(options, generator)
    }
}

impl<G: StateGenerator> SearchDriver<G> {
    /// Creates a driver with an explicit generator.
    ///
    /// The generation flags in `options` are ignored; the other options
    /// apply as usual.
    pub fn with_generator(options: SearchOptions, generator: G) -> Result<Self> {
        options.validate()?;

        let mut rng = match options.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };

        let board = BitBoard::new(options.queen_count)?;
        let frontier = Frontier::from_states(
            generator.possible_states(&board, &options, &mut rng),
            options.depth_first,
        );

        log::debug!(
            "searching {n}-queens: generator={}, {}, once={}, random={}",
            generator.name(),
            if options.depth_first { "dfs" } else { "bfs" },
            options.stop_at_first_goal,
            options.randomize_frontier,
            n = options.queen_count,
        );

        Ok(Self {
            options,
            generator,
            board,
            frontier,
            history: Vec::new(),
            goals: GoalRegistry::new(),
            steps: 0,
            phase: SearchPhase::Exploring,
            rng,
            started: Instant::now(),
        })
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn phase(&self) -> SearchPhase {
        self.phase
    }

    /// The board the search currently stands on.
    pub fn board(&self) -> &BitBoard {
        &self.board
    }

    /// Number of states committed so far.
    pub fn step_count(&self) -> usize {
        self.steps
    }

    /// Number of distinct goals found so far.
    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }

    pub fn goals(&self) -> &GoalRegistry {
        &self.goals
    }

    /// Number of saved frames; never exceeds the queen count.
    pub fn history_depth(&self) -> usize {
        self.history.len()
    }

    /// Saved frames, oldest first.
    pub fn history(&self) -> &[BacktrackFrame] {
        &self.history
    }

    /// Pending siblings of the current board.
    pub fn frontier_len(&self) -> usize {
        self.frontier.len()
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    fn is_goal(&self) -> bool {
        self.board.queen_count() == self.options.queen_count && self.board.all_valid()
    }

    /// Registers the current board; `Some` only the first time it is seen.
    fn record_goal(&mut self) -> Option<GoalFound> {
        let key = self.board.to_canonical_string();
        if self.goals.contains(&key) {
            return None;
        }
        self.goals.insert(key.clone());

        let goal = GoalFound {
            index: self.goals.len(),
            board: key,
            step: self.steps,
            elapsed: self.elapsed(),
        };
        log::debug!(
            "goal {} found @ step {} in {:.6} seconds\n{}",
            goal.index,
            goal.step,
            goal.elapsed_seconds(),
            goal.board
        );
        Some(goal)
    }

    /// Restores the most recent frame. Returns `false` when history is empty.
    fn backtrack(&mut self) -> bool {
        match self.history.pop() {
            Some(frame) => {
                self.board = frame.board;
                self.frontier = frame.frontier;
                self.phase = SearchPhase::Backtracking;
                if self.options.verbose {
                    log::trace!("backtrack to last valid state");
                }
                true
            }
            None => false,
        }
    }

    /// Saves the current position and moves to `next`.
    fn commit(&mut self, next: BitBoard) {
        let previous = std::mem::replace(&mut self.board, next);
        let remaining = std::mem::replace(
            &mut self.frontier,
            Frontier::new(self.options.depth_first),
        );

        // A frame without siblings left would only be popped straight away.
        if !remaining.is_empty() {
            if self.options.verbose {
                log::trace!("add backtrack state");
            }
            self.history.push(BacktrackFrame {
                board: previous,
                frontier: remaining,
            });
        }
        debug_assert!(self.history.len() <= self.options.queen_count);

        self.steps += 1;
        self.phase = SearchPhase::Exploring;
        if self.options.verbose {
            log::trace!("change state to\n{}", self.board);
        }

        let children = self
            .generator
            .possible_states(&self.board, &self.options, &mut self.rng);
        self.frontier = Frontier::from_states(children, self.options.depth_first);
    }

    fn complete(&mut self) -> SearchComplete {
        self.phase = SearchPhase::Done;
        let summary = SearchComplete {
            goal_count: self.goals.len(),
            step_count: self.steps,
            elapsed: self.elapsed(),
        };
        log::debug!(
            "done: found {} goal states in {} steps and {:.6} seconds",
            summary.goal_count,
            summary.step_count,
            summary.elapsed_seconds()
        );
        summary
    }
}

impl<G: StateGenerator> Iterator for SearchDriver<G> {
    type Item = SearchEvent;

    fn next(&mut self) -> Option<SearchEvent> {
        while self.phase != SearchPhase::Done {
            if self.is_goal() {
                let found = self.record_goal();
                if found.is_some() && self.options.stop_at_first_goal {
                    self.phase = SearchPhase::Done;
                    return found.map(SearchEvent::GoalFound);
                }
                // A full board has no children; resume from its parent.
                self.backtrack();
                if let Some(goal) = found {
                    return Some(SearchEvent::GoalFound(goal));
                }
            }

            while self.frontier.is_empty() {
                if !self.backtrack() {
                    return Some(SearchEvent::SearchComplete(self.complete()));
                }
            }

            if let Some(next) = self.frontier.pop() {
                self.commit(next);
            }
        }
        None
    }
}

impl<G: StateGenerator> FusedIterator for SearchDriver<G> {}

/// Result of a complete search run.
#[derive(Debug, Clone)]
pub struct SearchResult {
    /// Distinct goals in the order they were found.
    pub goals: Vec<GoalFound>,

    /// Number of states committed.
    pub steps: usize,

    /// Wall time of the run.
    pub elapsed: Duration,

    /// Whether the whole space was explored (false when stopped at the
    /// first goal).
    pub exhausted: bool,
}

impl SearchResult {
    pub fn goal_count(&self) -> usize {
        self.goals.len()
    }
}

/// Runs a search to its end and collects the goals.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search described by `options`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nqueens_search::search::{SearchOptions, SearchRunner};
    ///
    /// let options = SearchOptions::default()
    ///     .with_queen_count(8)
    ///     .with_constraint_filtering(true)
    ///     .with_row_ordering(true)
    ///     .with_depth_first(true);
    ///
    /// let result = SearchRunner::run(&options).unwrap();
    /// assert_eq!(result.goal_count(), 92);
    /// assert!(result.exhausted);
    /// ```
    pub fn run(options: &SearchOptions) -> Result<SearchResult> {
        let driver = SearchDriver::new(options.clone())?;
        Ok(Self::collect(driver))
    }

    /// Runs the search with an explicit generator.
    pub fn run_with<G: StateGenerator>(
        options: &SearchOptions,
        generator: G,
    ) -> Result<SearchResult> {
        let driver = SearchDriver::with_generator(options.clone(), generator)?;
        Ok(Self::collect(driver))
    }

    fn collect<G: StateGenerator>(mut driver: SearchDriver<G>) -> SearchResult {
        let mut goals = Vec::new();
        let mut exhausted = false;
        for event in driver.by_ref() {
            match event {
                SearchEvent::GoalFound(goal) => goals.push(goal),
                SearchEvent::SearchComplete(_) => exhausted = true,
            }
        }
        SearchResult {
            goals,
            steps: driver.step_count(),
            elapsed: driver.elapsed(),
            exhausted,
        }
    }
}
