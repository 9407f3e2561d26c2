//! Command-line interface of the Sudoku engine.
//!
//! The binary exposes four subcommands that are thin glue around the library:
//!
//! ```text
//! # Generate a medium 9x9 puzzle and print a difficulty report
//! sudoku gen --difficulty medium --rate
//!
//! # Generate a hard 16x16 puzzle as a compact one-line code
//! sudoku generate --size 16 --difficulty hard --format string
//!
//! # Solve a puzzle given as a code or piped through standard input
//! sudoku solve "53..7....6..195....98....6.8...6...34..8.3..17...2...6.6....28....419..5....8..79"
//! cat puzzle.txt | sudoku solve -
//!
//! # Rate a puzzle
//! sudoku rate ".1.32..........." --size 4
//!
//! # Check a candidate solution against a puzzle
//! sudoku validate "$(cat puzzle.txt)" "$(cat solution.txt)"
//! ```
//!
//! Exit codes: 0 on success, 1 when a puzzle has no solution, 2 on malformed
//! input or a failed validation.

use std::io::Read;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};

use sudoku_forge::{Difficulty, SudokuGrid};
use sudoku_forge::generator::{Generator, ReduceOptions, Reducer};
use sudoku_forge::rating;
use sudoku_forge::solver::{BacktrackingSolver, Solver};

const EXIT_NO_SOLUTION: u8 = 1;
const EXIT_INVALID: u8 = 2;

/// The output representation of a board.
#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {

    /// A pretty box-drawing rendering.
    Ascii,

    /// The compact one-line code accepted by the puzzle arguments.
    String
}

#[derive(Parser, Debug)]
#[command(name = "sudoku", version,
    about = "Generates, solves, rates and validates Sudoku puzzles")]
struct Cli {
    #[clap(subcommand)]
    command: Commands
}

#[derive(Subcommand, Debug)]
enum Commands {

    /// Generate a puzzle with a unique solution.
    #[command(alias = "gen")]
    Generate {
        /// The board size. Must be a perfect square, e.g. 4, 9, 16, or 25.
        #[arg(short, long, default_value_t = 9)]
        size: usize,

        /// Controls the fraction of cells the generator tries to clear.
        #[arg(short, long, value_enum, default_value_t = Difficulty::Medium)]
        difficulty: Difficulty,

        /// The minimum number of clues the puzzle keeps. Generation stops
        /// early rather than crossing this floor.
        #[arg(long, default_value_t = 24)]
        min_clues: usize,

        /// Remove clues individually instead of in point-symmetric pairs.
        #[arg(long)]
        no_symmetry: bool,

        /// The output representation of the board.
        #[arg(short, long, value_enum, default_value = "ascii")]
        format: OutputFormat,

        /// Also print the difficulty rating of the puzzle as JSON.
        #[arg(long)]
        rate: bool
    },

    /// Solve a puzzle. Prints the solution, or exits with code 1 if the
    /// puzzle is invalid or has no solution.
    Solve {
        /// The puzzle code (size * size characters, `.` or `0` for empty
        /// cells), or `-` to read it from standard input.
        puzzle: String,

        /// The board size of the puzzle code.
        #[arg(short, long, default_value_t = 9)]
        size: usize,

        /// The output representation of the board.
        #[arg(short, long, value_enum, default_value = "ascii")]
        format: OutputFormat
    },

    /// Rate the difficulty of a puzzle and print the report as JSON.
    Rate {
        /// The puzzle code, or `-` to read it from standard input.
        puzzle: String,

        /// The board size of the puzzle code.
        #[arg(short, long, default_value_t = 9)]
        size: usize
    },

    /// Check that a candidate solution correctly completes a puzzle. Prints
    /// `OK` or `INVALID`; the latter comes with exit code 2.
    Validate {
        /// The puzzle code.
        puzzle: String,

        /// The candidate solution code.
        solution: String,

        /// The board size of both codes.
        #[arg(short, long, default_value_t = 9)]
        size: usize
    }
}

fn read_grid(arg: &str, size: usize) -> Result<SudokuGrid, String> {
    let code = if arg == "-" {
        let mut buffer = String::new();

        if let Err(e) = std::io::stdin().read_to_string(&mut buffer) {
            return Err(format!("cannot read standard input: {}", e));
        }

        buffer
    }
    else {
        arg.to_string()
    };

    SudokuGrid::parse(code.as_str(), size)
        .map_err(|e| format!("malformed board: {:?}", e))
}

fn print_grid(grid: &SudokuGrid, format: OutputFormat) {
    match format {
        OutputFormat::Ascii => println!("{}", grid),
        OutputFormat::String => println!("{}", grid.to_parseable_string())
    }
}

fn print_rating(puzzle: &SudokuGrid) {
    let rating = rating::rate(puzzle);
    println!("{}", serde_json::to_string_pretty(&rating).unwrap());
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            size,
            difficulty,
            min_clues,
            no_symmetry,
            format,
            rate
        } => {
            let mut generator = Generator::new_default();
            let mut puzzle = match generator.generate(size) {
                Ok(grid) => grid,
                Err(e) => {
                    eprintln!("generation failed: {:?}", e);
                    return ExitCode::from(EXIT_INVALID);
                }
            };
            let options = ReduceOptions {
                difficulty,
                min_clues,
                symmetry: !no_symmetry
            };
            let mut reducer = Reducer::new_default();
            reducer.reduce(&mut puzzle, &options);
            print_grid(&puzzle, format);

            if rate {
                print_rating(&puzzle);
            }

            ExitCode::SUCCESS
        }

        Commands::Solve { puzzle, size, format } => {
            let grid = match read_grid(puzzle.as_str(), size) {
                Ok(grid) => grid,
                Err(message) => {
                    eprintln!("{}", message);
                    return ExitCode::from(EXIT_INVALID);
                }
            };

            match BacktrackingSolver.solve(&grid) {
                Some(solution) => {
                    print_grid(&solution, format);
                    ExitCode::SUCCESS
                }
                None => {
                    eprintln!("no solution found");
                    ExitCode::from(EXIT_NO_SOLUTION)
                }
            }
        }

        Commands::Rate { puzzle, size } => {
            match read_grid(puzzle.as_str(), size) {
                Ok(grid) => {
                    print_rating(&grid);
                    ExitCode::SUCCESS
                }
                Err(message) => {
                    eprintln!("{}", message);
                    ExitCode::from(EXIT_INVALID)
                }
            }
        }

        Commands::Validate { puzzle, solution, size } => {
            let puzzle_grid = match read_grid(puzzle.as_str(), size) {
                Ok(grid) => grid,
                Err(message) => {
                    eprintln!("{}", message);
                    return ExitCode::from(EXIT_INVALID);
                }
            };
            let solution_grid = match read_grid(solution.as_str(), size) {
                Ok(grid) => grid,
                Err(message) => {
                    eprintln!("{}", message);
                    return ExitCode::from(EXIT_INVALID);
                }
            };

            // Both grids were parsed with the same size, so the dimension
            // check cannot fail.
            if puzzle_grid.is_solution(&solution_grid).unwrap() {
                println!("OK");
                ExitCode::SUCCESS
            }
            else {
                println!("INVALID");
                ExitCode::from(EXIT_INVALID)
            }
        }
    }
}
