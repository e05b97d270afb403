//! Knight's tour board state, along with all required data types.

use std::fmt;
use std::ops::Index;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::search::{ProgressCallback, TourProgress};

pub mod square;

pub use square::Square;

/// Move-ordering strategy for the tour search.
///
/// Both policies explore the same search space exhaustively; the policy only
/// decides which candidate is tried first at every depth, and with it which
/// tour is found and how much backtracking happens on the way.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TourPolicy {
    /// Try knight jumps in their fixed generation order.
    #[default]
    Fixed,
    /// Warnsdorff ordering: prefer squares with fewer remaining ways in,
    /// breaking ties towards squares farther from the board center.
    Heuristic,
}

/// Search state as reported through the progress callback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum TourStatus {
    /// A knight was just placed on the reported square.
    Placing,
    /// The placement on the reported square dead-ended and is being undone.
    Backtracking,
    /// Every square has been visited.
    Solved,
    /// The search space is exhausted and no tour exists.
    Failed,
}

/// Accessibility seed values, indexed by distance-from-edge class
/// (0 = on the edge, 1 = next to it, 2 = interior) on each axis.
const ACCESSIBILITY_CLASSES: [[i32; 3]; 3] = [[2, 3, 4], [3, 4, 6], [4, 6, 8]];

const fn edge_class(coordinate: u16, extent: u16) -> usize {
    let low = coordinate;
    let high = extent - 1 - coordinate;
    let nearest = if low < high { low } else { high };
    if nearest > 2 {
        2
    } else {
        nearest as usize
    }
}

/// Search state for a knight's tour on a `rows` × `columns` board.
///
/// The occupancy and accessibility grids are rebuilt by every call to
/// [`tour`](Board::tour); the distance grid is filled in once here and never
/// changes afterwards. The lifetime parameter is the progress callback's:
/// a board without one can be used as `Board<'static>`.
pub struct Board<'a> {
    rows: u16,
    columns: u16,
    size: usize,
    policy: TourPolicy,
    status: TourStatus,
    total_moves: u64,
    move_index: u32,
    last_touched: Square,
    occupancy: Vec<u32>,
    accessibility: Vec<i32>,
    distance: Vec<f64>,
    callback: Option<ProgressCallback<'a>>,
}

impl<'a> Board<'a> {
    pub fn new(rows: u16, columns: u16) -> Self {
        Self::build(rows, columns, None)
    }

    /// Creates a board whose tours report progress through `callback`.
    ///
    /// The callback runs synchronously inside the search, once per placement
    /// attempt, once per backtrack and once with the terminal state. Its
    /// return value is accepted but currently ignored; `true` means continue.
    pub fn with_callback<F>(rows: u16, columns: u16, callback: F) -> Self
    where
        F: FnMut(&TourProgress<'_>) -> bool + 'a,
    {
        Self::build(rows, columns, Some(Box::new(callback)))
    }

    fn build(rows: u16, columns: u16, callback: Option<ProgressCallback<'a>>) -> Self {
        let size = rows as usize * columns as usize;
        let mut board = Board {
            rows,
            columns,
            size,
            policy: TourPolicy::default(),
            status: TourStatus::Placing,
            total_moves: 0,
            move_index: 1,
            last_touched: Square::default(),
            occupancy: vec![0; size],
            accessibility: vec![0; size],
            distance: vec![0.0; size],
            callback,
        };
        board.seed_accessibility();
        board.seed_distance();
        board
    }

    pub const fn rows(&self) -> u16 {
        self.rows
    }

    pub const fn columns(&self) -> u16 {
        self.columns
    }

    pub const fn size(&self) -> usize {
        self.size
    }

    pub const fn policy(&self) -> TourPolicy {
        self.policy
    }

    pub const fn status(&self) -> TourStatus {
        self.status
    }

    /// Placement attempts made by the last tour, dead ends included.
    pub const fn total_moves(&self) -> u64 {
        self.total_moves
    }

    /// Row-major visit grid: 0 is unvisited, otherwise the 1-based index of
    /// the move that entered the square.
    pub fn occupancy(&self) -> &[u32] {
        &self.occupancy
    }

    /// Row-major Warnsdorff counters. Rebuilt from the seed table on every
    /// tour, then adjusted as the search claims and releases squares.
    pub fn accessibility(&self) -> &[i32] {
        &self.accessibility
    }

    /// Row-major Euclidean distance of each square from the board center.
    /// Computed at construction and immutable for the board's lifetime.
    pub fn distance(&self) -> &[f64] {
        &self.distance
    }

    /// Row-major index of a coordinate pair: `row * columns + column`.
    pub const fn flat_index(&self, row: u16, column: u16) -> usize {
        row as usize * self.columns as usize + column as usize
    }

    pub(crate) fn square_index(&self, square: Square) -> usize {
        square.flat_index(self.columns)
    }

    fn seed_accessibility(&mut self) {
        for row in 0..self.rows {
            let row_class = edge_class(row, self.rows);
            for column in 0..self.columns {
                let index = self.flat_index(row, column);
                self.accessibility[index] =
                    ACCESSIBILITY_CLASSES[row_class][edge_class(column, self.columns)];
            }
        }
    }

    fn seed_distance(&mut self) {
        if self.size == 0 {
            return;
        }
        let center_row = (self.rows - 1) as f64 / 2.0;
        let center_column = (self.columns - 1) as f64 / 2.0;
        for row in 0..self.rows {
            for column in 0..self.columns {
                let vertical = row as f64 - center_row;
                let horizontal = column as f64 - center_column;
                let index = self.flat_index(row, column);
                self.distance[index] = (horizontal * horizontal + vertical * vertical).sqrt();
            }
        }
    }

    pub(crate) fn reset_for_tour(&mut self, policy: TourPolicy, start: Square) {
        self.policy = policy;
        self.status = TourStatus::Placing;
        self.total_moves = 0;
        self.move_index = 1;
        self.last_touched = start;
        self.occupancy.fill(0);
        self.seed_accessibility();
    }

    /// Counts the attempt and marks the square with the current path index.
    pub(crate) fn register_placement(&mut self, square: Square) {
        self.total_moves += 1;
        let index = self.square_index(square);
        debug_assert_eq!(
            self.occupancy[index], 0,
            "placed a knight on an occupied square {}",
            square
        );
        self.occupancy[index] = self.move_index;
    }

    /// Undoes a placement: the square becomes unvisited again and gets back
    /// the single accessibility unit its own candidacy consumed.
    pub(crate) fn erase_placement(&mut self, square: Square) {
        let index = self.square_index(square);
        debug_assert_ne!(self.occupancy[index], 0);
        self.occupancy[index] = 0;
        self.accessibility[index] += 1;
    }

    pub(crate) fn adjust_accessibility(&mut self, square: Square, delta: i32) {
        let index = self.square_index(square);
        self.accessibility[index] += delta;
    }

    pub(crate) fn advance(&mut self, square: Square) {
        self.move_index += 1;
        self.last_touched = square;
        self.status = TourStatus::Placing;
    }

    pub(crate) fn retreat(&mut self, square: Square) {
        debug_assert!(self.move_index > 1);
        self.move_index -= 1;
        self.last_touched = square;
        self.status = TourStatus::Backtracking;
    }

    pub(crate) fn set_status(&mut self, status: TourStatus) {
        self.status = status;
    }

    /// Hands the callback a read-only view of the current search state.
    /// Returns the callback's verdict, `true` when no callback is installed.
    pub(crate) fn report_progress(&mut self) -> bool {
        match self.callback.as_mut() {
            Some(callback) => {
                let progress = TourProgress {
                    status: self.status,
                    total_moves: self.total_moves,
                    rows: self.rows,
                    columns: self.columns,
                    square: self.last_touched,
                    occupancy: &self.occupancy,
                };
                callback(&progress)
            }
            None => true,
        }
    }
}

impl Index<Square> for Board<'_> {
    type Output = u32;

    fn index(&self, square: Square) -> &Self::Output {
        debug_assert!(
            square.row() < self.rows && square.column() < self.columns,
            "square {} is outside the {}x{} board",
            square,
            self.rows,
            self.columns
        );
        &self.occupancy[square.flat_index(self.columns)]
    }
}

impl fmt::Debug for Board<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> Result<(), fmt::Error> {
        for row in 0..self.rows {
            for column in 0..self.columns {
                match self.occupancy[self.flat_index(row, column)] {
                    0 => write!(f, "   .")?,
                    mark => write!(f, "{:4}", mark)?,
                }
            }
            writeln!(f)?;
        }
        writeln!(
            f,
            "{}x{} board, {:?} policy, {:?} after {} attempts.",
            self.rows, self.columns, self.policy, self.status, self.total_moves
        )
    }
}
