use colored::Colorize;
use futoshiki_solver::{solve, solve_parallel, Board};
use std::{env, fs, time::Instant};

fn main() {
    env_logger::init();
    let path = env::args().nth(1).expect("No puzzle file given.");
    let strategy = env::args().nth(2).unwrap_or_else(|| "sequential".to_string());
    let text = match fs::read_to_string(&path) {
        Ok(text) => text,
        Err(err) => {
            println!("{}", format!("Unable to read {path}: {err}").red());
            return;
        }
    };
    match Board::from_text(&text) {
        Ok(board) => {
            println!("Input:\n{board}");
            let start = Instant::now();
            let solution = match strategy.as_str() {
                "sequential" => {
                    println!("Solving sequentially...");
                    solve(board)
                }
                "parallel" => {
                    println!("Solving with fork/join on {} threads...", num_cpus::get());
                    solve_parallel(board)
                }
                other => {
                    println!("{}", format!("Unknown strategy: {other}").red());
                    return;
                }
            };
            match solution {
                Some(solved) => {
                    println!("Found a solution in {:.3?}.\n{solved}", start.elapsed());
                }
                None => {
                    println!("{}", format!("Impossible to solve ({:.3?})", start.elapsed()).red());
                }
            }
        }
        Err(err) => {
            println!("{}", format!("{err}").red());
        }
    }
}
