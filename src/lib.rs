//! N-Queens solver built on bitboard backtracking.
//!
//! Places `N` non-attacking queens on an `N x N` board, enumerating every
//! solution or stopping at the first one.
//!
//! - **Board**: [`board::BitBoard`] packs placements into a bit vector and
//!   checks rows, columns, and diagonals on demand.
//! - **Generation**: four state generators, exhaustive or row-ordered, each
//!   with or without eager constraint filtering.
//! - **Search**: an explicit-stack backtracking driver with depth-first or
//!   breadth-first sibling order, reporting each distinct goal as an event.
//!
//! # Examples
//!
//! ```
//! use nqueens_search::search::{SearchOptions, SearchRunner};
//!
//! let options = SearchOptions::default()
//!     .with_queen_count(5)
//!     .with_row_ordering(true)
//!     .with_constraint_filtering(true);
//!
//! let result = SearchRunner::run(&options).unwrap();
//! assert_eq!(result.goal_count(), 10);
//! ```
//!
//! The library never prints. Goals and completion come back as
//! [`search::SearchEvent`]s, and progress is reported through the `log`
//! facade.

pub mod board;
pub mod error;
pub mod search;

pub use error::{NQueensError, Result};
