mod board;
mod constraint;
mod solver;
mod validator;

pub use board::Board;
pub use constraint::Constraint;
pub use solver::{solve, solve_parallel};
pub use validator::{column_valid, is_solved, is_valid, row_valid};
