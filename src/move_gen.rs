use arrayvec::ArrayVec;

use crate::board::{Board, Square};
use crate::move_order::MoveRanker;

/// The eight knight jumps as (row, column) deltas, counter-clockwise
/// starting from east-north-east. Candidate generation follows this order,
/// which is also the try order under the fixed policy.
pub(crate) const KNIGHT_JUMPS: [(i16, i16); 8] = [
    (-1, 2),
    (-2, 1),
    (-2, -1),
    (-1, -2),
    (1, -2),
    (2, -1),
    (2, 1),
    (1, 2),
];

impl Board<'_> {
    /// A square can be landed on if it lies on the board and is unvisited.
    pub(crate) fn is_available(&self, square: Square) -> bool {
        square.row() < self.rows()
            && square.column() < self.columns()
            && self.occupancy()[self.square_index(square)] == 0
    }

    /// Collects the available squares one knight jump away from `from`,
    /// claiming one accessibility unit from each (the path standing on
    /// `from` is one of the remaining ways into it), then ranks them into
    /// try order.
    pub(crate) fn ranked_candidates(&mut self, from: Square) -> ArrayVec<Square, 8> {
        let mut candidates = ArrayVec::new();
        for (row_delta, column_delta) in KNIGHT_JUMPS {
            if let Some(next) = from.offset(row_delta, column_delta) {
                if self.is_available(next) {
                    self.adjust_accessibility(next, -1);
                    candidates.push(next);
                }
            }
        }
        let ranker = MoveRanker::new(self);
        candidates.sort_by(|&a, &b| ranker.compare(a, b));
        candidates
    }
}
