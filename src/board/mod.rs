//! Board representation.
//!
//! A [`BitBoard`] packs queen placements for an `N x N` board into a bit
//! vector and answers row, column, and diagonal validity questions about
//! them on demand.

mod bitboard;

pub use bitboard::BitBoard;
