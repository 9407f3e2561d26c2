//! This module contains the deterministic propagation strategies of the
//! engine. A strategy fills cells whose digit is logically forced by the
//! current board state, without ever guessing.
//!
//! Strategies serve two purposes: the
//! [BacktrackingSolver](crate::solver::BacktrackingSolver) runs them to a
//! fixpoint before every branching step to shrink the search space, and
//! [rating](crate::rating) counts their placements as a difficulty signal.
//!
//! The strategies are sound (a placed digit occurs in every completion of the
//! board) and terminate, since each application fills at least one of the
//! finitely many empty cells or changes nothing.
//!
//! Additionally, this module offers [naked_pair_eliminations], which does
//! *not* fill any cells. It only counts the candidate eliminations the
//! naked-pair rule would license and exists purely as a rating signal, since
//! candidates are derived from the grid on demand and eliminations cannot be
//! stored.

use crate::SudokuGrid;
use crate::util::DigitSet;

/// A trait for strategies which fill logically forced digits into a
/// [SudokuGrid].
pub trait Strategy {

    /// Applies this strategy to the given grid, entering every digit it can
    /// derive, and returns the number of cells that were filled. A return
    /// value of 0 indicates that the strategy found nothing; applying it
    /// again without other changes to the grid will find nothing as well.
    fn apply(&self, grid: &mut SudokuGrid) -> usize;
}

/// A [Strategy] which detects naked singles, that is, cells which have
/// exactly one candidate left, and enters that candidate.
///
/// As a small example, take a look at the following grid:
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║ X │   ║   │ 2 ║
/// ╟───┼───╫───┼───╢
/// ║   │ 1 ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║ 3 │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// The cell marked with X cannot be a 1 because of the 1 in its box, nor a 2
/// because of the 2 in its row, and also cannot be a 3 because of the 3 in
/// its column. Consequently, it can only be a 4.
///
/// Since entering a digit can create new naked singles in the affected units,
/// a single application repeats its scan until no naked single remains.
#[derive(Clone)]
pub struct NakedSingleStrategy;

impl Strategy for NakedSingleStrategy {

    fn apply(&self, grid: &mut SudokuGrid) -> usize {
        let size = grid.size();
        let mut filled = 0;
        let mut progress = true;

        while progress {
            progress = false;

            for row in 0..size {
                for column in 0..size {
                    if grid.get_cell(column, row).unwrap().is_some() {
                        continue;
                    }

                    let candidates = grid.candidates(column, row).unwrap();

                    if candidates.len() == 1 {
                        let digit = candidates.iter().next().unwrap();
                        grid.set_cell(column, row, digit).unwrap();
                        filled += 1;
                        progress = true;
                    }
                }
            }
        }

        filled
    }
}

#[derive(Clone)]
enum Location {
    None,
    One(usize, usize),
    Multiple
}

impl Location {
    fn union(&self, column: usize, row: usize) -> Location {
        match self {
            Location::None => Location::One(column, row),
            Location::One(_, _) => Location::Multiple,
            Location::Multiple => Location::Multiple
        }
    }
}

/// Returns the cell lists of all units of the grid: all rows, then all
/// columns, then all boxes.
fn units(grid: &SudokuGrid) -> Vec<Vec<(usize, usize)>> {
    let size = grid.size();
    let box_size = grid.box_size();
    let mut units = Vec::with_capacity(3 * size);

    for row in 0..size {
        units.push((0..size).map(|column| (column, row)).collect());
    }

    for column in 0..size {
        units.push((0..size).map(|row| (column, row)).collect());
    }

    for block_row in (0..size).step_by(box_size) {
        for block_column in (0..size).step_by(box_size) {
            units.push((0..box_size)
                .flat_map(|r| (0..box_size)
                    .map(move |c| (block_column + c, block_row + r)))
                .collect());
        }
    }

    units
}

/// A [Strategy] which detects hidden singles, that is, situations in which a
/// digit has only one possible cell left within a unit, even though that cell
/// may have other candidates too.
///
/// As a visualization, the cell marked with X in the following example is the
/// only one in its box that can hold a 2.
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║   │   ║   │ 2 ║
/// ╟───┼───╫───┼───╢
/// ║ X │ 1 ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// One application scans all rows, then all columns, then all boxes. Each
/// placement takes effect immediately, so later unit scans of the same
/// application observe it.
#[derive(Clone)]
pub struct HiddenSingleStrategy;

fn place_hidden_singles(grid: &mut SudokuGrid, cells: &[(usize, usize)])
        -> usize {
    let size = grid.size();
    let mut locations = vec![Location::None; size + 1];

    for &(column, row) in cells {
        if grid.get_cell(column, row).unwrap().is_some() {
            continue;
        }

        for digit in grid.candidates(column, row).unwrap().iter() {
            locations[digit] = locations[digit].union(column, row);
        }
    }

    let mut placed = 0;

    for (digit, location) in locations.into_iter().enumerate() {
        if let Location::One(column, row) = location {
            // A placement earlier in this unit may have filled the cell or
            // invalidated the digit in the meantime.
            if grid.get_cell(column, row).unwrap().is_none() &&
                    grid.candidates(column, row).unwrap().contains(digit) {
                grid.set_cell(column, row, digit).unwrap();
                placed += 1;
            }
        }
    }

    placed
}

impl Strategy for HiddenSingleStrategy {

    fn apply(&self, grid: &mut SudokuGrid) -> usize {
        let mut placed = 0;

        for unit in units(grid) {
            placed += place_hidden_singles(grid, &unit);
        }

        placed
    }
}

fn unit_pair_eliminations(grid: &SudokuGrid, cells: &[(usize, usize)])
        -> usize {
    let entries: Vec<((usize, usize), DigitSet)> = cells.iter()
        .copied()
        .filter(|&(column, row)|
            grid.get_cell(column, row).unwrap().is_none())
        .map(|(column, row)|
            ((column, row), grid.candidates(column, row).unwrap()))
        .collect();
    let mut seen: Vec<DigitSet> = Vec::new();
    let mut eliminations = 0;

    for &(_, options) in entries.iter() {
        if options.len() != 2 || seen.contains(&options) {
            continue;
        }

        seen.push(options);
        let holders = entries.iter()
            .filter(|(_, other)| other == &options)
            .count();

        // Three or more cells sharing the same two candidates mean the board
        // is contradictory; that is the solver's business, not ours.
        if holders != 2 {
            continue;
        }

        for &(_, other) in entries.iter() {
            if other != options {
                eliminations += (other & options).len();
            }
        }
    }

    eliminations
}

/// Counts the candidate eliminations licensed by the naked-pair rule: if two
/// cells of a unit share the identical two-element candidate set `{a, b}`,
/// no other cell of that unit can hold `a` or `b`.
///
/// In contrast to the [Strategy] implementations of this module, this
/// function never modifies the grid. Candidates are recomputed from the grid
/// on demand, so eliminations cannot be persisted; the count is used solely
/// as a difficulty signal by [rating](crate::rating).
pub fn naked_pair_eliminations(grid: &SudokuGrid) -> usize {
    units(grid).iter()
        .map(|unit| unit_pair_eliminations(grid, unit))
        .sum()
}
