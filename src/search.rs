//! The recursive depth-first tour search.
//!
//! [`Board::tour`] resets the board, walks the recursion and reports the
//! terminal state. `place_knight` is the backtracking step itself: it marks
//! the square and tries every ranked candidate, undoing each dead end.

use log::debug;

use crate::board::{Board, Square, TourPolicy, TourStatus};

/// Error from [`Board::tour`]. Exhausting the search space is not an error;
/// that is the `Ok(false)` outcome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TourError {
    #[error("start square ({row}, {column}) is outside the {rows}x{columns} board")]
    OutOfBounds {
        row: u16,
        column: u16,
        rows: u16,
        columns: u16,
    },
}

/// Read-only snapshot of the search, handed to the progress callback.
/// The borrow ends with the call, so a callback cannot stash the view.
#[derive(Clone, Copy, Debug)]
pub struct TourProgress<'a> {
    pub status: TourStatus,
    /// Placement attempts so far, dead ends included.
    pub total_moves: u64,
    pub rows: u16,
    pub columns: u16,
    /// The candidate square being tried or unwound.
    pub square: Square,
    /// Row-major occupancy grid, 0 for unvisited squares.
    pub occupancy: &'a [u32],
}

/// Progress callbacks return `true` to let the search continue. The value
/// is accepted but not yet honored; aborting mid-search is reserved.
pub type ProgressCallback<'a> = Box<dyn FnMut(&TourProgress<'_>) -> bool + 'a>;

impl<'a> Board<'a> {
    /// Searches for a knight's tour of the whole board starting on
    /// `(start_row, start_column)`.
    ///
    /// Returns `Ok(true)` when a tour was found, with the visit order
    /// readable from [`occupancy`](Board::occupancy), and `Ok(false)` when
    /// the search space was exhausted without one. Each call resets all
    /// search state except the distance grid, so repeating a call produces
    /// the same result.
    ///
    /// Recursion depth equals the tour length; boards beyond a few hundred
    /// squares can overflow the stack. That bound is inherited from the
    /// algorithm and is not checked here.
    pub fn tour(
        &mut self,
        start_row: u16,
        start_column: u16,
        policy: TourPolicy,
    ) -> Result<bool, TourError> {
        if start_row >= self.rows() || start_column >= self.columns() {
            return Err(TourError::OutOfBounds {
                row: start_row,
                column: start_column,
                rows: self.rows(),
                columns: self.columns(),
            });
        }
        let start = Square::new(start_row, start_column);
        self.reset_for_tour(policy, start);
        debug!(
            "starting {:?} tour of the {}x{} board from {}",
            policy,
            self.rows(),
            self.columns(),
            start
        );
        let solved = self.place_knight(start);
        self.report_progress();
        debug!(
            "tour {} after {} attempts",
            if solved { "found" } else { "not found" },
            self.total_moves()
        );
        Ok(solved)
    }

    fn place_knight(&mut self, square: Square) -> bool {
        self.register_placement(square);
        if self.is_solved() {
            self.set_status(TourStatus::Solved);
            return true;
        }
        for candidate in self.ranked_candidates(square) {
            self.advance(candidate);
            self.report_progress();
            if self.place_knight(candidate) {
                return true;
            }
            self.retreat(candidate);
            self.report_progress();
            self.erase_placement(candidate);
        }
        self.set_status(TourStatus::Failed);
        false
    }

    fn is_solved(&self) -> bool {
        self.occupancy().iter().all(|&mark| mark != 0)
    }
}
