//! The four state generation variants.
//!
//! | Variant                  | Cells scanned          | Validity check |
//! |--------------------------|------------------------|----------------|
//! | [`ExhaustiveUnfiltered`] | every cell             | none           |
//! | [`ExhaustiveFiltered`]   | every cell             | eager          |
//! | [`RowOrderedUnfiltered`] | row `queen_count()`    | none           |
//! | [`RowOrderedFiltered`]   | row `queen_count()`    | eager          |
//!
//! The row-ordered variants assume queens were placed one per row from the
//! top, so the next empty row is `queen_count()`. Both of them only ever
//! produce boards that keep that property.

use super::types::StateGenerator;
use crate::board::BitBoard;
use std::ops::Range;

/// Clones `board` once per empty cell in `cells`, placing a queen there.
///
/// With `filtered`, children that are not valid positions are dropped.
fn place_each(board: &BitBoard, cells: Range<usize>, filtered: bool) -> Vec<BitBoard> {
    cells
        .filter(|&cell| !board.is_set(cell))
        .filter_map(|cell| {
            let mut next = board.clone();
            next.set_cell(cell);
            (!filtered || board.is_valid_state(&next)).then_some(next)
        })
        .collect()
}

fn is_full(board: &BitBoard) -> bool {
    board.queen_count() >= board.size()
}

fn next_row(board: &BitBoard) -> Range<usize> {
    let size = board.size();
    let start = board.queen_count() * size;
    start..start + size
}

/// Places a queen on any empty cell; pruning is left to the goal test.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveUnfiltered;

impl StateGenerator for ExhaustiveUnfiltered {
    fn name(&self) -> &'static str {
        "exhaustive"
    }

    fn expand(&self, board: &BitBoard) -> Vec<BitBoard> {
        if is_full(board) {
            return Vec::new();
        }
        place_each(board, 0..board.cell_count(), false)
    }
}

/// Places a queen on any empty cell that leaves a valid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExhaustiveFiltered;

impl StateGenerator for ExhaustiveFiltered {
    fn name(&self) -> &'static str {
        "exhaustive-csp"
    }

    fn expand(&self, board: &BitBoard) -> Vec<BitBoard> {
        if is_full(board) {
            return Vec::new();
        }
        place_each(board, 0..board.cell_count(), true)
    }
}

/// Places a queen on any cell of the next empty row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOrderedUnfiltered;

impl StateGenerator for RowOrderedUnfiltered {
    fn name(&self) -> &'static str {
        "ordered"
    }

    fn expand(&self, board: &BitBoard) -> Vec<BitBoard> {
        if is_full(board) {
            return Vec::new();
        }
        place_each(board, next_row(board), false)
    }
}

/// Places a queen on cells of the next empty row that leave a valid position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowOrderedFiltered;

impl StateGenerator for RowOrderedFiltered {
    fn name(&self) -> &'static str {
        "ordered-csp"
    }

    fn expand(&self, board: &BitBoard) -> Vec<BitBoard> {
        if is_full(board) {
            return Vec::new();
        }
        place_each(board, next_row(board), true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::Strategy as Variant;
    use proptest::prelude::*;

    fn all_strategies() -> [Variant; 4] {
        [
            Variant::ExhaustiveUnfiltered(ExhaustiveUnfiltered),
            Variant::ExhaustiveFiltered(ExhaustiveFiltered),
            Variant::RowOrderedUnfiltered(RowOrderedUnfiltered),
            Variant::RowOrderedFiltered(RowOrderedFiltered),
        ]
    }

    /// Builds a row-by-row partial placement from column choices.
    fn row_filled(size: usize, cols: &[usize]) -> BitBoard {
        let queens: Vec<_> = cols.iter().enumerate().map(|(r, &c)| (r, c)).collect();
        BitBoard::from_queens(size, &queens).unwrap()
    }

    #[test]
    fn test_exhaustive_empty_board() {
        let board = BitBoard::new(3).unwrap();
        let children = ExhaustiveUnfiltered.expand(&board);
        assert_eq!(children.len(), 9);
        for (cell, child) in children.iter().enumerate() {
            assert!(child.is_queen(cell / 3, cell % 3));
            assert_eq!(child.queen_count(), 1);
        }
    }

    #[test]
    fn test_exhaustive_skips_occupied() {
        let board = BitBoard::from_queens(3, &[(1, 1)]).unwrap();
        assert_eq!(ExhaustiveUnfiltered.expand(&board).len(), 8);
    }

    #[test]
    fn test_exhaustive_filtered_drops_attacked_cells() {
        // Queen in the centre of a 3x3 attacks every other cell
        let board = BitBoard::from_queens(3, &[(1, 1)]).unwrap();
        assert!(ExhaustiveFiltered.expand(&board).is_empty());

        // Corner queen on 4x4 leaves 6 safe cells
        let board = BitBoard::from_queens(4, &[(0, 0)]).unwrap();
        let children = ExhaustiveFiltered.expand(&board);
        assert_eq!(children.len(), 6);
        assert!(children.iter().all(BitBoard::all_valid));
    }

    #[test]
    fn test_row_ordered_uses_next_row() {
        let board = row_filled(4, &[1]);
        let children = RowOrderedUnfiltered.expand(&board);
        assert_eq!(children.len(), 4);
        for (col, child) in children.iter().enumerate() {
            assert!(child.is_queen(1, col));
        }
    }

    #[test]
    fn test_row_ordered_filtered() {
        let board = row_filled(4, &[1]);
        let children = RowOrderedFiltered.expand(&board);
        assert_eq!(children, vec![row_filled(4, &[1, 3])]);

        let board = row_filled(4, &[0, 2]);
        assert!(RowOrderedFiltered.expand(&board).is_empty());
    }

    #[test]
    fn test_full_board_has_no_children() {
        let board = row_filled(4, &[1, 3, 0, 2]);
        for strategy in all_strategies() {
            assert!(strategy.expand(&board).is_empty(), "{}", strategy.name());
        }
        // Invalid but fully populated boards have no children either
        let board = row_filled(3, &[0, 0, 0]);
        for strategy in all_strategies() {
            assert!(strategy.expand(&board).is_empty(), "{}", strategy.name());
        }
    }

    #[test]
    fn test_single_cell_board() {
        let board = BitBoard::new(1).unwrap();
        for strategy in all_strategies() {
            let children = strategy.expand(&board);
            assert_eq!(children.len(), 1, "{}", strategy.name());
            assert!(children[0].is_queen(0, 0));
        }
    }

    fn arb_row_filled() -> impl Strategy<Value = BitBoard> {
        (1usize..=7).prop_flat_map(|n| {
            proptest::collection::vec(0..n, 0..=n).prop_map(move |cols| row_filled(n, &cols))
        })
    }

    proptest! {
        #[test]
        fn prop_children_add_exactly_one_queen(board in arb_row_filled(), pick in 0usize..4) {
            let strategy = all_strategies()[pick];
            let before = board.clone();
            let children = strategy.expand(&board);
            prop_assert_eq!(&board, &before);
            if board.queen_count() == board.size() {
                prop_assert!(children.is_empty());
            }
            for child in &children {
                prop_assert_eq!(child.queen_count(), board.queen_count() + 1);
            }
        }

        #[test]
        fn prop_row_ordered_places_in_next_row(board in arb_row_filled(), filtered in any::<bool>()) {
            let children = if filtered {
                RowOrderedFiltered.expand(&board)
            } else {
                RowOrderedUnfiltered.expand(&board)
            };
            let row = board.queen_count();
            for child in &children {
                let added: Vec<_> = child.queens().filter(|&(r, c)| !board.is_queen(r, c)).collect();
                prop_assert_eq!(added.len(), 1);
                prop_assert_eq!(added[0].0, row);
            }
        }

        #[test]
        fn prop_filtered_children_are_valid(board in arb_row_filled()) {
            for child in ExhaustiveFiltered.expand(&board) {
                prop_assert!(child.all_valid());
            }
            for child in RowOrderedFiltered.expand(&board) {
                prop_assert!(child.all_valid());
            }
        }
    }
}
