
#[cfg(test)]
use crate::board::{Board, Square};

#[cfg(test)]
fn is_knight_jump(a: Square, b: Square) -> bool {
    let row_delta = (a.row() as i32 - b.row() as i32).abs();
    let column_delta = (a.column() as i32 - b.column() as i32).abs();
    (row_delta == 1 && column_delta == 2) || (row_delta == 2 && column_delta == 1)
}

/// Checks that the board's occupancy grid records a complete knight's tour:
/// every square visited exactly once, consecutive visits a knight jump apart.
#[cfg(test)]
fn assert_valid_tour(board: &Board<'_>) {
    let size = board.size();
    let mut path: Vec<Option<Square>> = vec![None; size];
    for row in 0..board.rows() {
        for column in 0..board.columns() {
            let square = Square::new(row, column);
            let mark = board[square] as usize;
            assert!(
                mark >= 1 && mark <= size,
                "mark {} on {} is outside 1..={}",
                mark,
                square,
                size
            );
            assert!(
                path[mark - 1].is_none(),
                "squares {:?} and {} share mark {}",
                path[mark - 1],
                square,
                mark
            );
            path[mark - 1] = Some(square);
        }
    }
    for pair in path.windows(2) {
        let (a, b) = (pair[0].unwrap(), pair[1].unwrap());
        assert!(is_knight_jump(a, b), "{} -> {} is not a knight jump", a, b);
    }
}
