use crate::board::Board;
use itertools::Itertools;

/// A row or column may be missing values while the puzzle is in progress,
/// but it may never repeat one or hold a value outside 1..=size.
fn values_legal(values: &[u16], size: usize) -> bool {
    if values
        .iter()
        .any(|&value| value != Board::EMPTY && !(1..=size as u16).contains(&value))
    {
        return false;
    }
    let repeats = values
        .iter()
        .filter(|&&value| value != Board::EMPTY)
        .counts()
        .into_values()
        .max()
        .unwrap_or(0);
    repeats <= 1
}

pub fn row_valid(board: &Board, row: usize) -> bool {
    let size = board.size();
    let values = (0..size).map(|column| board.get(row, column)).collect_vec();
    if !values_legal(&values, size) {
        return false;
    }
    // inequalities only apply once both cells are filled
    (0..size - 1).all(|column| {
        let left = board.get(row, column);
        let right = board.get(row, column + 1);
        left == Board::EMPTY
            || right == Board::EMPTY
            || board.horizontal_constraint(row, column).satisfied(left, right)
    })
}

pub fn column_valid(board: &Board, column: usize) -> bool {
    let size = board.size();
    let values = (0..size).map(|row| board.get(row, column)).collect_vec();
    if !values_legal(&values, size) {
        return false;
    }
    (0..size - 1).all(|row| {
        let top = board.get(row, column);
        let bottom = board.get(row + 1, column);
        top == Board::EMPTY
            || bottom == Board::EMPTY
            || board.vertical_constraint(row, column).satisfied(top, bottom)
    })
}

pub fn is_valid(board: &Board) -> bool {
    let size = board.size();
    (0..size).all(|row| row_valid(board, row)) && (0..size).all(|column| column_valid(board, column))
}

pub fn is_solved(board: &Board) -> bool {
    let size = board.size();
    (0..size)
        .cartesian_product(0..size)
        .all(|(row, column)| board.get(row, column) != Board::EMPTY)
        && is_valid(board)
}
