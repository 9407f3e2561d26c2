//! This module contains logic for generating random Sudoku.
//!
//! Generation of Sudoku puzzles is done by first generating a full grid with
//! a [Generator] and then removing some clues using a [Reducer], which checks
//! after every removal that the puzzle still has exactly one solution.

use crate::{Difficulty, SudokuGrid};
use crate::error::{SudokuError, SudokuResult};
use crate::solver::{BacktrackingSolver, Solver};

use rand::Rng;
use rand::rngs::ThreadRng;

use rand_distr::Normal;

use std::f64::consts;

/// A generator randomly generates a full [SudokuGrid], that is, a grid with
/// no missing digits. It uses a random number generator to decide the
/// content. For most cases, sensible defaults are provided by
/// [Generator::new_default]; to make generation reproducible, pass a seeded
/// random number generator to [Generator::new].
pub struct Generator<R: Rng> {
    rng: R
}

impl Generator<ThreadRng> {

    /// Creates a new generator that uses a [ThreadRng] to generate the
    /// random digits.
    pub fn new_default() -> Generator<ThreadRng> {
        Generator::new(rand::thread_rng())
    }
}

pub(crate) fn shuffle<T>(rng: &mut impl Rng, values: impl Iterator<Item = T>)
        -> Vec<T> {
    let mut vec: Vec<T> = values.collect();
    let len = vec.len();

    if len == 0 {
        return vec;
    }

    for i in 0..(len - 1) {
        let j = rng.gen_range(i..len);
        vec.swap(i, j);
    }

    vec
}

impl<R: Rng> Generator<R> {

    /// Creates a new generator that uses the given random number generator
    /// to generate random digits.
    pub fn new(rng: R) -> Generator<R> {
        Generator {
            rng
        }
    }

    fn fill_rec(&mut self, grid: &mut SudokuGrid, column: usize, row: usize)
            -> bool {
        let size = grid.size();

        if row == size {
            return true;
        }

        let next_column = (column + 1) % size;
        let next_row = if next_column == 0 { row + 1 } else { row };

        if grid.get_cell(column, row).unwrap().is_some() {
            return self.fill_rec(grid, next_column, next_row);
        }

        // The digit order is shuffled anew for every cell; a deterministic
        // order would bias the structure of generated boards.
        for digit in shuffle(&mut self.rng, 1..=size) {
            if grid.candidates(column, row).unwrap().contains(digit) {
                grid.set_cell(column, row, digit).unwrap();

                if self.fill_rec(grid, next_column, next_row) {
                    return true;
                }

                grid.clear_cell(column, row).unwrap();
            }
        }

        false
    }

    /// Fills the given [SudokuGrid] with random digits that satisfy the
    /// Sudoku constraint and match all already present digits. If that is not
    /// possible, an error will be returned.
    ///
    /// If no error is returned, it is guaranteed that [SudokuGrid::is_valid]
    /// returns `true` and [SudokuGrid::is_full] returns `true` on `grid`
    /// after this operation. Otherwise, it remains unchanged.
    ///
    /// # Errors
    ///
    /// * `SudokuError::UnsatisfiableGrid` If there is no set of digits that
    ///   can be entered into the empty cells without violating the Sudoku
    ///   constraint.
    pub fn fill(&mut self, grid: &mut SudokuGrid) -> SudokuResult<()> {
        if self.fill_rec(grid, 0, 0) {
            Ok(())
        }
        else {
            Err(SudokuError::UnsatisfiableGrid)
        }
    }

    /// Generates a new random [SudokuGrid] with all digits filled in.
    ///
    /// It is guaranteed that [SudokuGrid::is_valid] returns `true` on the
    /// result.
    ///
    /// # Arguments
    ///
    /// * `size`: The total width and height of the generated grid. Must be a
    ///   supported perfect square (see [SudokuGrid::new]).
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If `size` is invalid.
    /// * `SudokuError::UnsatisfiableGrid` If no full grid with the given
    ///   size exists. This cannot happen for valid sizes; it is reported
    ///   rather than silently returning a partially filled board.
    pub fn generate(&mut self, size: usize) -> SudokuResult<SudokuGrid> {
        let mut grid = SudokuGrid::new(size)?;
        self.fill(&mut grid)?;
        Ok(grid)
    }
}

/// A trait for types which can prioritize the order in which [Removal]s
/// shall be applied to a grid being reduced. Note that there is some random
/// element to the ordering (see [RemovalPrioritizer::rough_priority] for
/// details on the mathematics). It is blanket-implemented for all types
/// implementing `Fn(&R) -> f64`.
pub trait RemovalPrioritizer<R> {

    /// Determines the approximate priority of the given removal. Lower
    /// numbers indicate removals that are applied first. When determining
    /// the order of two removals, each of these scores is added to a
    /// normally distributed random number with a standard deviation of
    /// `1 / sqrt(2)`. The removal with the lower sum will be applied first.
    ///
    /// For simple priorization where all removals of some kind are applied
    /// first, separate them by differences of at least 10 to ensure a
    /// negligible probability of overlap.
    ///
    /// This method must _always_ return finite numbers or infinities.
    fn rough_priority(&mut self, removal: &R) -> f64;
}

struct EqualPrioritizer;

impl<R> RemovalPrioritizer<R> for EqualPrioritizer {
    fn rough_priority(&mut self, _: &R) -> f64 {
        0.0
    }
}

impl<R, F: Fn(&R) -> f64> RemovalPrioritizer<R> for F {
    fn rough_priority(&mut self, removal: &R) -> f64 {
        self(removal)
    }
}

/// An enumeration of the clue removals that can be attempted on a grid being
/// reduced.
pub enum Removal {

    /// Clear the digit in the specified cell.
    Digit {

        /// The column of the cell whose digit to remove.
        column: usize,

        /// The row of the cell whose digit to remove.
        row: usize
    },

    /// Clear the digit in the specified cell and in its point-symmetric
    /// mirror cell `(size - 1 - column, size - 1 - row)`. For the center
    /// cell of an odd-sized grid, which is its own mirror, only one digit is
    /// cleared.
    DigitPair {

        /// The column of one of the two cells whose digits to remove.
        column: usize,

        /// The row of one of the two cells whose digits to remove.
        row: usize
    }
}

impl Removal {
    fn cells(&self, size: usize) -> Vec<(usize, usize)> {
        match *self {
            Removal::Digit { column, row } => vec![(column, row)],
            Removal::DigitPair { column, row } => {
                let mirror = (size - 1 - column, size - 1 - row);
                let mut cells = vec![(column, row)];

                if mirror != (column, row) {
                    cells.push(mirror);
                }

                cells
            }
        }
    }

    /// Clears the affected cells if the grid stays uniquely solvable,
    /// otherwise restores them. Returns the number of cells that remained
    /// cleared.
    fn apply(&self, grid: &mut SudokuGrid, solver: &impl Solver) -> usize {
        let size = grid.size();
        let mut removed = Vec::new();

        for (column, row) in self.cells(size) {
            if let Some(digit) = grid.get_cell(column, row).unwrap() {
                grid.clear_cell(column, row).unwrap();
                removed.push((column, row, digit));
            }
        }

        if removed.is_empty() {
            return 0;
        }

        if solver.count_solutions(grid, 2) == 1 {
            removed.len()
        }
        else {
            for &(column, row, digit) in removed.iter() {
                grid.set_cell(column, row, digit).unwrap();
            }

            0
        }
    }
}

fn removals(grid: &SudokuGrid, symmetry: bool) -> Vec<Removal> {
    let size = grid.size();
    let mut result = Vec::new();

    for row in 0..size {
        for column in 0..size {
            if symmetry {
                let mirror_index =
                    (size - 1 - row) * size + (size - 1 - column);

                // Every mirror pair is enumerated once, by its first cell in
                // row-major order.
                if row * size + column <= mirror_index {
                    result.push(Removal::DigitPair {
                        column,
                        row
                    });
                }
            }
            else {
                result.push(Removal::Digit {
                    column,
                    row
                });
            }
        }
    }

    result
}

fn prioritize<REM, P, RNG>(removal: &REM, prioritizer: &mut P, rng: &mut RNG)
    -> f64
where
    P: RemovalPrioritizer<REM>,
    RNG: Rng
{
    let distr = Normal::new(0.0, consts::FRAC_1_SQRT_2).unwrap();
    prioritizer.rough_priority(removal) + rng.sample(distr)
}

/// The parameters controlling a [Reducer] run.
pub struct ReduceOptions {

    /// The difficulty whose [removal
    /// fraction](crate::Difficulty::removal_fraction) determines how many
    /// cells the reducer attempts to clear in total.
    pub difficulty: Difficulty,

    /// The minimum number of clues the reduced puzzle keeps. The reducer
    /// stops before attempting a removal that would cross this floor, so the
    /// requested difficulty may not be reached exactly. This is a degraded
    /// success, not an error.
    pub min_clues: usize,

    /// Whether clues are removed in point-symmetric pairs.
    pub symmetry: bool
}

impl Default for ReduceOptions {

    /// Medium difficulty, a minimum of 24 clues (a sensible floor for the
    /// ordinary 9x9 grid), and symmetric removal.
    fn default() -> ReduceOptions {
        ReduceOptions {
            difficulty: Difficulty::Medium,
            min_clues: 24,
            symmetry: true
        }
    }
}

/// A reducer can be applied to the output of a [Generator] to remove digits
/// from the grid as long as it stays uniquely solvable according to the
/// wrapped [Solver]. A random number generator decides which digits are
/// removed.
///
/// [Reducer::new_default] will yield a reducer with a [BacktrackingSolver]
/// and a [ThreadRng].
pub struct Reducer<S: Solver, R: Rng> {
    solver: S,
    rng: R
}

impl Reducer<BacktrackingSolver, ThreadRng> {

    /// Generates a new reducer with a [BacktrackingSolver] to check unique
    /// solvability and a [ThreadRng] to decide which digits are removed.
    pub fn new_default() -> Reducer<BacktrackingSolver, ThreadRng> {
        Reducer::new(BacktrackingSolver, rand::thread_rng())
    }
}

impl<S: Solver, R: Rng> Reducer<S, R> {

    /// Creates a new reducer with the given solver and random number
    /// generator.
    ///
    /// # Arguments
    ///
    /// * `solver`: A [Solver] to be used to check whether a reduced grid is
    ///   still uniquely solvable.
    /// * `rng`: A random number generator that decides which digits are
    ///   removed.
    pub fn new(solver: S, rng: R) -> Reducer<S, R> {
        Reducer {
            solver,
            rng
        }
    }

    /// Reduces the given grid to a puzzle according to `options`: removals
    /// are attempted in a uniformly random order until the difficulty's
    /// removal target is reached, every removal that would leave the puzzle
    /// without a unique solution is reverted, and the reducer halts before
    /// crossing the minimum-clue floor.
    ///
    /// It is expected that the given `grid` is full, i.e. contains no empty
    /// cells.
    pub fn reduce(&mut self, grid: &mut SudokuGrid, options: &ReduceOptions) {
        self.reduce_with_priority(grid, options, EqualPrioritizer)
    }

    /// Reduces the given grid to a puzzle like [Reducer::reduce], but the
    /// order in which removals are attempted is influenced by the given
    /// `prioritizer`. See the documentation of [RemovalPrioritizer].
    pub fn reduce_with_priority<P>(&mut self, grid: &mut SudokuGrid,
        options: &ReduceOptions, mut prioritizer: P)
    where
        P: RemovalPrioritizer<Removal>
    {
        let size = grid.size();
        let total_cells = size * size;
        let target_removed = (total_cells as f64
            * options.difficulty.removal_fraction()) as usize;
        let mut ordered = removals(grid, options.symmetry)
            .into_iter()
            .map(|r| (prioritize(&r, &mut prioritizer, &mut self.rng), r))
            .collect::<Vec<_>>();
        ordered.sort_by(|(p1, _), (p2, _)| p1.partial_cmp(p2).unwrap());
        let mut removed = 0;

        for (_, removal) in ordered {
            if removed >= target_removed {
                break;
            }

            let pending = removal.cells(size).len();

            if total_cells - removed - pending < options.min_clues {
                break;
            }

            removed += removal.apply(grid, &self.solver);
        }
    }
}
