//! Bit-vector chessboard with on-demand constraint checks.

use crate::error::{NQueensError, Result};
use std::fmt;
use std::str::FromStr;

const WORD_BITS: usize = u64::BITS as usize;

/// An `N x N` board packed into a bit vector.
///
/// Cell `(row, col)` lives at bit `row * N + col`; a set bit is a queen.
/// The number of cells is fixed at construction. Whether the placement is
/// legal is never maintained incrementally: it is evaluated on demand by
/// [`all_valid`](Self::all_valid).
///
/// # Examples
///
/// ```
/// use nqueens_search::board::BitBoard;
///
/// let mut board = BitBoard::new(4).unwrap();
/// board.set(0, 1);
/// board.set(1, 3);
/// assert_eq!(board.queen_count(), 2);
/// assert!(board.all_valid());
///
/// board.set(2, 2); // shares a diagonal with (1, 3)
/// assert!(!board.all_valid());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct BitBoard {
    size: usize,
    words: Vec<u64>,
}

impl BitBoard {
    /// Creates an empty `size x size` board.
    ///
    /// Fails with [`NQueensError::InvalidSize`] when `size` is 0.
    pub fn new(size: usize) -> Result<Self> {
        if size < 1 {
            return Err(NQueensError::InvalidSize(size));
        }
        let cells = size
            .checked_mul(size)
            .ok_or(NQueensError::InvalidSize(size))?;
        Ok(Self {
            size,
            words: vec![0; cells.div_ceil(WORD_BITS)],
        })
    }

    /// Creates a board with a queen on each `(row, col)` position.
    pub fn from_queens(size: usize, queens: &[(usize, usize)]) -> Result<Self> {
        let mut board = Self::new(size)?;
        for &(row, col) in queens {
            if row >= size || col >= size {
                return Err(NQueensError::MalformedBoard(format!(
                    "queen ({row}, {col}) is outside a {size}x{size} board"
                )));
            }
            board.set(row, col);
        }
        Ok(board)
    }

    /// Side length of the board.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Total number of cells (`size * size`).
    pub fn cell_count(&self) -> usize {
        self.size * self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        debug_assert!(
            row < self.size && col < self.size,
            "({row}, {col}) outside {0}x{0} board",
            self.size
        );
        row * self.size + col
    }

    /// Places a queen on `(row, col)`.
    pub fn set(&mut self, row: usize, col: usize) {
        let cell = self.index(row, col);
        self.set_cell(cell);
    }

    /// Removes the queen on `(row, col)`, if any.
    pub fn clear(&mut self, row: usize, col: usize) {
        let cell = self.index(row, col);
        debug_assert!(cell < self.cell_count());
        self.words[cell / WORD_BITS] &= !(1u64 << (cell % WORD_BITS));
    }

    /// Whether a queen occupies `(row, col)`.
    pub fn is_queen(&self, row: usize, col: usize) -> bool {
        self.is_set(self.index(row, col))
    }

    #[inline]
    pub(crate) fn set_cell(&mut self, cell: usize) {
        debug_assert!(cell < self.cell_count());
        self.words[cell / WORD_BITS] |= 1u64 << (cell % WORD_BITS);
    }

    #[inline]
    pub(crate) fn is_set(&self, cell: usize) -> bool {
        debug_assert!(cell < self.cell_count());
        self.words[cell / WORD_BITS] & (1u64 << (cell % WORD_BITS)) != 0
    }

    /// Number of queens on the board (population count).
    pub fn queen_count(&self) -> usize {
        self.words.iter().map(|w| w.count_ones() as usize).sum()
    }

    /// Queen positions as `(row, col)`, in row-major order.
    pub fn queens(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..self.cell_count())
            .filter(|&cell| self.is_set(cell))
            .map(|cell| (cell / self.size, cell % self.size))
    }

    fn at_most_one(&self, cells: impl IntoIterator<Item = usize>) -> bool {
        let mut seen = false;
        for cell in cells {
            if self.is_set(cell) {
                if seen {
                    return false;
                }
                seen = true;
            }
        }
        true
    }

    /// Whether `row` holds at most one queen.
    pub fn valid_row(&self, row: usize) -> bool {
        let start = self.index(row, 0);
        self.at_most_one(start..start + self.size)
    }

    /// Whether `col` holds at most one queen.
    pub fn valid_column(&self, col: usize) -> bool {
        let start = self.index(0, col);
        self.at_most_one((0..self.size).map(|row| start + row * self.size))
    }

    /// Cells of the diagonal that starts at column `index` of the top
    /// (`from_top`) or bottom edge and runs right (`to_right`) or left.
    ///
    /// Walks step by `size + 1` or `size - 1` cells. Over `index in 0..size`
    /// the four edge/direction pairs cover every diagonal of both families;
    /// the main diagonal and main anti-diagonal are walked twice.
    pub fn diagonal_cells(
        &self,
        from_top: bool,
        to_right: bool,
        index: usize,
    ) -> impl Iterator<Item = usize> {
        let n = self.size;
        debug_assert!(index < n, "diagonal index {index} outside 0..{n}");
        let len = if to_right { n - index } else { index + 1 };
        let stride = if from_top == to_right { n + 1 } else { n - 1 };
        let start = if from_top { index } else { index + (n - 1) * n };
        (0..len).map(move |i| {
            if from_top {
                start + stride * i
            } else {
                start - stride * i
            }
        })
    }

    /// Whether the diagonal picked out by `(from_top, to_right, index)`
    /// holds at most one queen. See [`diagonal_cells`](Self::diagonal_cells).
    pub fn valid_diagonal(&self, from_top: bool, to_right: bool, index: usize) -> bool {
        self.at_most_one(self.diagonal_cells(from_top, to_right, index))
    }

    /// Full re-scan: every row, column, and diagonal holds at most one queen.
    pub fn all_valid(&self) -> bool {
        (0..self.size).all(|i| {
            self.valid_row(i)
                && self.valid_column(i)
                && self.valid_diagonal(true, true, i)
                && self.valid_diagonal(true, false, i)
                && self.valid_diagonal(false, true, i)
                && self.valid_diagonal(false, false, i)
        })
    }

    /// Whether `candidate` would be a legal position.
    ///
    /// Only the candidate is inspected; `self` is borrowed immutably and
    /// stays exactly as it was whatever the outcome.
    pub fn is_valid_state(&self, candidate: &BitBoard) -> bool {
        debug_assert_eq!(self.size, candidate.size);
        candidate.all_valid()
    }

    /// Row-major rendering used as the goal deduplication key.
    ///
    /// Cells are `1` (queen) or `0`, separated by a space; rows are
    /// separated by `\n` with no trailing newline.
    pub fn to_canonical_string(&self) -> String {
        self.to_string()
    }

    /// Parses the text produced by [`to_canonical_string`](Self::to_canonical_string).
    pub fn from_string(s: &str) -> Result<Self> {
        s.parse()
    }
}

impl fmt::Display for BitBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..self.size {
            if row > 0 {
                f.write_str("\n")?;
            }
            for col in 0..self.size {
                if col > 0 {
                    f.write_str(" ")?;
                }
                f.write_str(if self.is_queen(row, col) { "1" } else { "0" })?;
            }
        }
        Ok(())
    }
}

impl FromStr for BitBoard {
    type Err = NQueensError;

    /// Accepts rows of `0`/`1` cells, optionally space-separated, one row per line.
    fn from_str(s: &str) -> Result<Self> {
        let rows: Vec<Vec<bool>> = s
            .trim()
            .lines()
            .map(|line| {
                line.chars()
                    .filter(|c| !c.is_whitespace())
                    .map(|c| match c {
                        '0' => Ok(false),
                        '1' => Ok(true),
                        other => Err(NQueensError::MalformedBoard(format!(
                            "unexpected character {other:?}"
                        ))),
                    })
                    .collect::<Result<Vec<bool>>>()
            })
            .collect::<Result<_>>()?;

        let size = rows.len();
        if size == 0 {
            return Err(NQueensError::MalformedBoard("empty board".into()));
        }
        let mut board = Self::new(size)?;
        for (row, cells) in rows.iter().enumerate() {
            if cells.len() != size {
                return Err(NQueensError::MalformedBoard(format!(
                    "row {row} has {} cells, expected {size}",
                    cells.len()
                )));
            }
            for (col, &queen) in cells.iter().enumerate() {
                if queen {
                    board.set(row, col);
                }
            }
        }
        Ok(board)
    }
}
