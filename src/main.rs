use std::env;

use anyhow::Context;
use crossterm::style::Stylize;
use rand::rngs::StdRng;
use rand::SeedableRng;

use npuzzle_search::config::{Config, Mode, USAGE};
use npuzzle_search::moves::to_letters;
use npuzzle_search::problem::{read_problem, solve_file};
use npuzzle_search::{Puzzle, SearchEngine, Solution};

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = Config::from_args(env::args().skip(1)).context("invalid arguments")?;
    if config.help {
        println!("{}", USAGE);
        return Ok(());
    }

    match &config.mode {
        Mode::File { input, output } => {
            let solution = solve_file(input, output, config.max_depth)
                .with_context(|| format!("failed to solve {}", input.display()))?;
            println!("{}", solution.render());

            if config.show {
                let initial = read_problem(input)?.board();
                print_walkthrough(&initial, &solution);
            }
        }
        Mode::Random {
            size,
            walk,
            seed,
            algorithm,
        } => {
            let mut rng = match seed {
                Some(seed) => StdRng::seed_from_u64(*seed),
                None => StdRng::from_entropy(),
            };

            let mut puzzle = Puzzle::new(*size);
            match walk {
                Some(steps) => puzzle.scramble(&mut rng, *steps),
                None => puzzle.shuffle(&mut rng),
            }
            println!("Shuffled Puzzle:\n{}", styled_board(&puzzle));

            let solution = SearchEngine::new(puzzle.clone())
                .with_max_depth(config.max_depth)
                .solve(*algorithm)
                .with_context(|| format!("{} failed", algorithm))?;
            println!(
                "{} found {} moves ({} developed, cost {}): {}",
                solution.algorithm,
                solution.path.len(),
                solution.developed_nodes,
                solution.cost,
                to_letters(&solution.path)
            );

            if config.show {
                print_walkthrough(&puzzle, &solution);
            }
        }
    }

    Ok(())
}

fn print_walkthrough(initial: &Puzzle, solution: &Solution) {
    let mut board = initial.clone();
    for &item in &solution.path {
        board.apply_move(item);
        println!("{}\n{}", item, styled_board(&board));
    }
}

/// Tiles already on their goal cell are green, misplaced ones yellow.
fn styled_board(puzzle: &Puzzle) -> String {
    let size = puzzle.size();
    let goal = Puzzle::new(size);
    let width = (size * size - 1).to_string().len();

    let mut out = String::new();
    for row in 0..size {
        for col in 0..size {
            let value = puzzle.tile(row, col);
            let cell = format!("{:>width$} ", value, width = width);
            let styled = if value == 0 {
                cell.dark_grey()
            } else if value == goal.tile(row, col) {
                cell.green()
            } else {
                cell.yellow()
            };
            out.push_str(&styled.to_string());
        }
        out.push('\n');
    }
    out
}
