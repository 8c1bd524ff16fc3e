//! Pending sibling states.

use crate::board::BitBoard;
use std::collections::VecDeque;

/// Candidate boards waiting to be explored from one position.
///
/// With `depth_first` the most recently pushed board is taken first (LIFO);
/// otherwise boards come out in the order they were pushed (FIFO).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Frontier {
    states: VecDeque<BitBoard>,
    depth_first: bool,
}

impl Frontier {
    pub fn new(depth_first: bool) -> Self {
        Self {
            states: VecDeque::new(),
            depth_first,
        }
    }

    /// Builds a frontier holding `states` in push order.
    pub fn from_states(states: Vec<BitBoard>, depth_first: bool) -> Self {
        Self {
            states: states.into(),
            depth_first,
        }
    }

    pub fn push(&mut self, board: BitBoard) {
        self.states.push_back(board);
    }

    /// Removes the next board to explore.
    pub fn pop(&mut self) -> Option<BitBoard> {
        if self.depth_first {
            self.states.pop_back()
        } else {
            self.states.pop_front()
        }
    }

    pub fn len(&self) -> usize {
        self.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn is_depth_first(&self) -> bool {
        self.depth_first
    }
}
