use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A location on the board. Can be used to index a `Board`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square {
    row: u16,
    column: u16,
}

impl Square {
    pub const fn new(row: u16, column: u16) -> Self {
        Square { row, column }
    }

    pub const fn row(self) -> u16 {
        self.row
    }

    pub const fn column(self) -> u16 {
        self.column
    }

    /// Applies a jump offset. Returns `None` if either coordinate would
    /// leave the representable range; the board's upper bounds are checked
    /// at candidate generation, not here.
    pub const fn offset(self, row_delta: i16, column_delta: i16) -> Option<Self> {
        match (
            self.row.checked_add_signed(row_delta),
            self.column.checked_add_signed(column_delta),
        ) {
            (Some(row), Some(column)) => Some(Square { row, column }),
            _ => None,
        }
    }

    /// Row-major index into a grid with `columns` columns per row.
    pub(crate) const fn flat_index(self, columns: u16) -> usize {
        self.row as usize * columns as usize + self.column as usize
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}
