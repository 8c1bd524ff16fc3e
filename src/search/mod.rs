//! Bitboard backtracking search for N-Queens.
//!
//! # Key Components
//!
//! - [`StateGenerator`]: children of a board, one added queen each. Four
//!   sealed variants cover the {exhaustive, row-ordered} x {unfiltered,
//!   constraint-filtered} combinations; [`Strategy`] picks one at runtime
//! - [`SearchDriver`]: explicit-stack backtracking engine yielding
//!   [`SearchEvent`]s
//! - [`SearchRunner`]: runs a driver to the end and returns a [`SearchResult`]
//! - [`SearchOptions`]: immutable run configuration
//!
//! # Exploration order
//!
//! Siblings wait in a [`Frontier`]. Depth-first runs take the last generated
//! sibling first, breadth-first runs the first. Either way a sibling's whole
//! subtree is explored before the next sibling, because history is a stack
//! of [`BacktrackFrame`]s.

mod config;
mod frontier;
mod generators;
mod registry;
mod runner;
mod types;

pub use config::SearchOptions;
pub use frontier::Frontier;
pub use generators::{
    ExhaustiveFiltered, ExhaustiveUnfiltered, RowOrderedFiltered, RowOrderedUnfiltered,
};
pub use registry::GoalRegistry;
pub use runner::{BacktrackFrame, SearchDriver, SearchResult, SearchRunner};
pub use types::{GoalFound, SearchComplete, SearchEvent, SearchPhase, StateGenerator, Strategy};
