use crate::{
    board::Board,
    validator::{is_solved, is_valid},
};
use itertools::Itertools;
use log::debug;
use rayon::prelude::*;

/// Below this many remaining cells a subtree is cheaper to finish in place
/// than to split into scheduled tasks.
const FORK_THRESHOLD: usize = 20;

/// Depth-first backtracking over the cells in row-major order, trying
/// candidate values in ascending order. Returns the first completion found,
/// or `None` when the puzzle has no solution.
pub fn solve(board: Board) -> Option<Board> {
    solve_from(board, 0)
}

fn solve_from(board: Board, spot: usize) -> Option<Board> {
    let size = board.size();
    if spot == size * size {
        return if is_solved(&board) { Some(board) } else { None };
    }
    let row = spot / size;
    let column = spot % size;
    if board.get(row, column) != Board::EMPTY {
        // a given clue, move on
        return solve_from(board, spot + 1);
    }
    for value in 1..=size as u16 {
        let mut next = board.clone();
        next.set(row, column, value);
        if is_valid(&next) {
            if let Some(solution) = solve_from(next, spot + 1) {
                return Some(solution);
            }
        }
    }
    None
}

/// Fork/join variant of [`solve`]. While enough of the board remains to
/// amortize task scheduling, every legal candidate for the current cell
/// becomes its own concurrently explored branch; small subtrees fall back
/// to the sequential solver. Returns the same board [`solve`] would.
pub fn solve_parallel(board: Board) -> Option<Board> {
    solve_unit(board, 0)
}

fn solve_unit(board: Board, spot: usize) -> Option<Board> {
    let size = board.size();
    if size * size - spot < FORK_THRESHOLD {
        return solve_from(board, spot);
    }
    let row = spot / size;
    let column = spot % size;
    if board.get(row, column) != Board::EMPTY {
        return solve_unit(board, spot + 1);
    }
    let branches = (1..=size as u16)
        .filter_map(|value| {
            let mut next = board.clone();
            next.set(row, column, value);
            if is_valid(&next) {
                Some(next)
            } else {
                None
            }
        })
        .collect_vec();
    debug!("spot {spot}: forking {} branches", branches.len());
    // The join waits for every branch, and the scan adopts results in
    // candidate order, so the answer does not depend on which sibling
    // happens to finish first.
    let results: Vec<Option<Board>> = branches
        .into_par_iter()
        .map(|next| solve_unit(next, spot + 1))
        .collect();
    results.into_iter().flatten().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constraint::Constraint;

    #[test]
    fn solve_empty_board_works() {
        let board = Board::new(4);
        let solution = solve(board).unwrap();
        println!("{solution}");
        assert!(is_solved(&solution));
        // candidates are tried in ascending order, so the first row of the
        // first completion comes out sorted
        let first_row = (0..4).map(|column| solution.get(0, column)).collect_vec();
        assert_eq!(first_row, vec![1, 2, 3, 4]);
    }

    #[test]
    fn solve_keeps_given_values() {
        let mut board = Board::new(4);
        for column in 0..4 {
            board.set(0, column, column as u16 + 1);
        }
        let solution = solve(board).unwrap();
        println!("{solution}");
        assert!(is_solved(&solution));
        for column in 0..4 {
            assert_eq!(solution.get(0, column), column as u16 + 1);
        }
    }

    #[test]
    fn solve_reports_impossible_constraint() {
        // nothing in 1..=4 is greater than 4
        let mut board = Board::new(4);
        board.set(0, 0, 4);
        board.add_horizontal_constraint(0, 0, Constraint::Less);
        assert_eq!(solve(board), None);
    }

    #[test]
    fn solve_reports_duplicate_givens() {
        let mut board = Board::new(4);
        board.set(0, 0, 2);
        board.set(0, 1, 2);
        assert!(!is_valid(&board));
        assert_eq!(solve(board), None);
    }

    #[test]
    fn solution_satisfies_vertical_constraint() {
        let mut board = Board::new(4);
        board.add_vertical_constraint(0, 0, Constraint::Greater);
        let solution = solve(board).unwrap();
        println!("{solution}");
        assert!(is_solved(&solution));
        assert!(solution.get(0, 0) > solution.get(1, 0));
    }

    #[test]
    fn solve_parallel_works() {
        // 5x5 so the search starts above the fork threshold
        let mut board = Board::new(5);
        board.add_horizontal_constraint(0, 0, Constraint::Less);
        board.add_vertical_constraint(2, 3, Constraint::Greater);
        let solution = solve_parallel(board).unwrap();
        println!("{solution}");
        assert!(is_solved(&solution));
        assert!(solution.get(0, 0) < solution.get(0, 1));
        assert!(solution.get(2, 3) > solution.get(3, 3));
    }

    #[test]
    fn solve_parallel_keeps_given_values() {
        let mut board = Board::new(5);
        board.set(2, 2, 5);
        board.set(4, 0, 1);
        let solution = solve_parallel(board).unwrap();
        assert!(is_solved(&solution));
        assert_eq!(solution.get(2, 2), 5);
        assert_eq!(solution.get(4, 0), 1);
    }

    #[test]
    fn sequential_and_parallel_solvers_agree() {
        let mut board = Board::new(5);
        board.set(0, 0, 3);
        board.set(2, 2, 5);
        board.add_horizontal_constraint(1, 1, Constraint::Greater);
        board.add_vertical_constraint(0, 4, Constraint::Less);
        let expected = solve(board.clone()).unwrap();
        let parallel = solve_parallel(board).unwrap();
        assert_eq!(expected, parallel);
    }

    #[test]
    fn solve_parallel_reports_impossible_puzzle() {
        let mut board = Board::new(5);
        board.set(0, 0, 5);
        board.add_horizontal_constraint(0, 0, Constraint::Less);
        assert_eq!(solve_parallel(board), None);
    }
}
