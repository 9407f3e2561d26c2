//! This module contains the logic for solving Sudoku.
//!
//! Most importantly, this module contains the definition of the [Solver]
//! trait and the [BacktrackingSolver] as a generally usable implementation
//! that can solve every solvable board and count solutions up to a cap. The
//! propagation strategies it uses to narrow the search live in the
//! [strategy] submodule.

pub mod strategy;

use crate::SudokuGrid;
use crate::solver::strategy::{
    HiddenSingleStrategy,
    NakedSingleStrategy,
    Strategy
};
use crate::util::DigitSet;

/// A trait for types which have the ability to solve Sudoku puzzles.
///
/// An unsolvable or invalid board is a completely ordinary input for a
/// solver: it yields `None` or a count of 0, never a panic or an error value.
/// Callers that want to distinguish "invalid" from "valid but unsolvable" can
/// check [SudokuGrid::is_valid] themselves before solving.
pub trait Solver {

    /// Finds a completion of the given board, that is, a full, valid grid
    /// that agrees with every filled cell of `grid`. If the board admits
    /// multiple completions, an arbitrary one is returned. If it admits none,
    /// or violates the Sudoku constraint to begin with, `None` is returned.
    fn solve(&self, grid: &SudokuGrid) -> Option<SudokuGrid>;

    /// Counts the completions of the given board, short-circuiting as soon as
    /// `limit` of them have been found. The most common use is `limit = 2`,
    /// which decides between "no solution", "unique solution", and "multiple
    /// solutions" without paying for a full enumeration.
    fn count_solutions(&self, grid: &SudokuGrid, limit: usize) -> usize;
}

/// A perfect [Solver] based on recursive backtracking.
///
/// Before every branching step, [naked
/// singles](strategy::NakedSingleStrategy) and [hidden
/// singles](strategy::HiddenSingleStrategy) are applied to a fixpoint on a
/// private copy, which fills all forced cells without guessing. Branching
/// then picks the empty cell with the fewest candidates
/// (most-constrained-variable) and tries its candidates in
/// least-constraining-value order. Each branch operates on its own copy of
/// the grid, so sibling branches never observe each other's digits.
///
/// Its worst-case runtime is exponential, but the strategy pass and the two
/// heuristics keep the number of visited branches small for all but
/// adversarial boards.
pub struct BacktrackingSolver;

/// Finds the empty cell with the fewest candidates, ties broken by
/// left-to-right, top-to-bottom encounter order. Returns `None` if the grid
/// is full.
fn find_most_constrained(grid: &SudokuGrid)
        -> Option<(usize, usize, DigitSet)> {
    let size = grid.size();
    let mut best: Option<(usize, usize, DigitSet)> = None;

    'scan: for row in 0..size {
        for column in 0..size {
            if grid.get_cell(column, row).unwrap().is_some() {
                continue;
            }

            let candidates = grid.candidates(column, row).unwrap();
            let better = match &best {
                None => true,
                Some((_, _, best_candidates)) =>
                    candidates.len() < best_candidates.len()
            };

            if better {
                let len = candidates.len();
                best = Some((column, row, candidates));

                // A single candidate cannot be beaten by anything but a dead
                // end, and both stop the scan.
                if len <= 1 {
                    break 'scan;
                }
            }
        }
    }

    best
}

/// Returns all cells sharing a row, column, or box with the given cell,
/// without the cell itself and without duplicates.
fn peers(grid: &SudokuGrid, column: usize, row: usize) -> Vec<(usize, usize)> {
    let size = grid.size();
    let box_size = grid.box_size();
    let mut result = Vec::new();

    for c in 0..size {
        if c != column {
            result.push((c, row));
        }
    }

    for r in 0..size {
        if r != row {
            result.push((column, r));
        }
    }

    let block_column = (column / box_size) * box_size;
    let block_row = (row / box_size) * box_size;

    for r in block_row..(block_row + box_size) {
        for c in block_column..(block_column + box_size) {
            if r != row && c != column {
                result.push((c, r));
            }
        }
    }

    result
}

/// Orders the candidates of the given cell by the least-constraining-value
/// heuristic: digits admitted by fewer empty peer cells are tried first,
/// since placing them takes the fewest options away from the neighbors. Ties
/// are broken by ascending digit order.
fn order_candidates(grid: &SudokuGrid, column: usize, row: usize,
        candidates: DigitSet) -> Vec<usize> {
    let peers = peers(grid, column, row);
    let mut ordered: Vec<usize> = candidates.iter().collect();

    // Filled peers have an empty candidate set, so they never count.
    ordered.sort_by_key(|&digit| peers.iter()
        .filter(|&&(c, r)| grid.candidates(c, r).unwrap().contains(digit))
        .count());

    ordered
}

impl BacktrackingSolver {

    fn propagate(grid: &mut SudokuGrid) -> usize {
        let mut total = 0;

        loop {
            let placed = NakedSingleStrategy.apply(grid)
                + HiddenSingleStrategy.apply(grid);

            if placed == 0 {
                return total;
            }

            total += placed;
        }
    }

    fn solve_rec(mut grid: SudokuGrid) -> Option<SudokuGrid> {
        BacktrackingSolver::propagate(&mut grid);

        let (column, row, candidates) = match find_most_constrained(&grid) {
            Some(cell) => cell,
            None => return Some(grid)
        };

        if candidates.is_empty() {
            return None;
        }

        for digit in order_candidates(&grid, column, row, candidates) {
            let mut branch = grid.clone();
            branch.set_cell(column, row, digit).unwrap();

            if let Some(solution) = BacktrackingSolver::solve_rec(branch) {
                return Some(solution);
            }
        }

        None
    }

    fn count_rec(mut grid: SudokuGrid, limit: usize) -> usize {
        BacktrackingSolver::propagate(&mut grid);

        let (column, row, candidates) = match find_most_constrained(&grid) {
            Some(cell) => cell,
            None => return 1
        };

        if candidates.is_empty() {
            return 0;
        }

        let mut count = 0;

        for digit in order_candidates(&grid, column, row, candidates) {
            let mut branch = grid.clone();
            branch.set_cell(column, row, digit).unwrap();
            count += BacktrackingSolver::count_rec(branch, limit - count);

            if count >= limit {
                break;
            }
        }

        count
    }
}

impl Solver for BacktrackingSolver {
    fn solve(&self, grid: &SudokuGrid) -> Option<SudokuGrid> {
        if !grid.is_valid() {
            return None;
        }

        BacktrackingSolver::solve_rec(grid.clone())
    }

    fn count_solutions(&self, grid: &SudokuGrid, limit: usize) -> usize {
        if limit == 0 || !grid.is_valid() {
            return 0;
        }

        BacktrackingSolver::count_rec(grid.clone(), limit)
    }
}
