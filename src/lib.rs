//! Knight's tour solver for rectangular boards: a depth-first backtracking
//! search with in-place undo, optionally guided by Warnsdorff's rule. The
//! entry point is [`Board::tour`](board::Board::tour).

pub mod board;
mod move_gen;
pub mod move_order;
pub mod search;
mod tests;
