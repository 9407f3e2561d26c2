// Code lints

#![warn(trivial_casts)]
#![warn(trivial_numeric_casts)]
#![warn(unreachable_pub)]
#![warn(unused_import_braces)]
#![warn(unused_lifetimes)]
#![warn(unused_qualifications)]

// Doc lints

#![warn(rustdoc::broken_intra_doc_links)]
#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![warn(rustdoc::invalid_codeblock_attributes)]

//! This crate implements a Sudoku engine for square boards of any supported
//! size (4x4, 9x9, 16x16, ...). It supports the following key features:
//!
//! * Parsing and printing Sudoku grids
//! * Checking validity of boards and of puzzle/solution pairs
//! * Solving puzzles with a strategy-accelerated backtracking algorithm and
//!   counting solutions up to a cap
//! * Generating puzzles with a provably unique solution, with optional point
//!   symmetry, a difficulty knob, and a minimum-clue floor
//! * Rating the difficulty of a puzzle with a heuristic score
//!
//! Note in this introduction we will mostly be using 4x4 Sudoku due to their
//! simpler nature. These are divided in 4 2x2 boxes, each with the digits 1
//! to 4, just like each row and column.
//!
//! # Parsing and printing grids
//!
//! See [SudokuGrid::parse] for the exact format of a grid code.
//!
//! Codes can be used to exchange Sudoku, while pretty prints can be used to
//! display a grid in a clearer manner. An example of how to parse and
//! display a grid is provided below.
//!
//! ```
//! use sudoku_forge::SudokuGrid;
//!
//! let grid = SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap();
//! println!("{}", grid);
//! ```
//!
//! # Checking validity
//!
//! A board is valid if no row, column, or box contains a duplicate digit.
//! Empty cells never count as duplicates.
//!
//! ```
//! use sudoku_forge::SudokuGrid;
//!
//! // A board for which it is totally unclear whether it is valid.
//! let grid = SudokuGrid::parse("1111111111111111", 4).unwrap();
//! assert!(!grid.is_valid());
//! ```
//!
//! # Solving puzzles
//!
//! The [solver] module offers a [Solver](solver::Solver) trait for types that
//! can solve puzzles and count their solutions. The provided
//! [BacktrackingSolver](solver::BacktrackingSolver) finds a solution to every
//! solvable puzzle.
//!
//! ```
//! use sudoku_forge::SudokuGrid;
//! use sudoku_forge::solver::{BacktrackingSolver, Solver};
//!
//! // ╔═══╤═══╦═══╤═══╗
//! // ║   │   ║   │ 4 ║
//! // ╟───┼───╫───┼───╢
//! // ║   │ 4 ║ 3 │   ║
//! // ╠═══╪═══╬═══╪═══╣
//! // ║   │ 3 ║   │   ║
//! // ╟───┼───╫───┼───╢
//! // ║   │   ║ 1 │   ║
//! // ╚═══╧═══╩═══╧═══╝
//! let puzzle = SudokuGrid::parse("...4.43..3....1.", 4).unwrap();
//! let solution = BacktrackingSolver.solve(&puzzle).unwrap();
//!
//! assert_eq!("3124243113424213", solution.to_parseable_string());
//! ```
//!
//! For puzzles without a solution, [Solver::solve](solver::Solver::solve)
//! returns `None`. This is an ordinary outcome, not an error.
//!
//! # Generating puzzles
//!
//! Generation happens in two steps: a [Generator](generator::Generator)
//! builds a random, fully solved board and a [Reducer](generator::Reducer)
//! removes clues from it as long as the puzzle keeps a unique solution.
//!
//! ```
//! use sudoku_forge::SudokuGrid;
//! use sudoku_forge::generator::{Generator, ReduceOptions, Reducer};
//! use sudoku_forge::solver::{BacktrackingSolver, Solver};
//!
//! let mut generator = Generator::new_default();
//! let mut puzzle = generator.generate(9).unwrap();
//!
//! let mut reducer = Reducer::new_default();
//! reducer.reduce(&mut puzzle, &ReduceOptions::default());
//!
//! assert_eq!(1, BacktrackingSolver.count_solutions(&puzzle, 2));
//! ```
//!
//! The amount of removed clues is controlled by a [Difficulty]. The
//! difficulty a human solver actually experiences is estimated separately by
//! [rating::rate].
//!
//! # Note regarding performance
//!
//! Generating puzzles requires one solution-count per attempted clue removal.
//! This is fast for 9x9 boards, but larger boards may take noticeably longer.
//! It is strongly recommended to use at least `opt-level = 2`, even in tests
//! that generate Sudoku.

pub mod error;
pub mod generator;
pub mod rating;
pub mod solver;
pub mod util;

use clap::ValueEnum;

use crate::error::{SudokuError, SudokuParseError, SudokuParseResult, SudokuResult};
use crate::util::{contains_duplicate_digit, DigitSet};

use serde::Serialize;

use std::fmt::{self, Display, Formatter};

/// The maximum supported grid size. The textual codec writes each cell as a
/// single character (digits `1`-`9`, then letters `A`-`Z`), which covers
/// digits up to 35; the largest perfect square below that is 25.
const MAX_SIZE: usize = 25;

/// A knob that controls how hard generated puzzles are and in which bucket a
/// rated puzzle falls. Higher difficulties remove a larger fraction of cells
/// at generation time.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {

    /// Few removed clues, much of the puzzle can be filled by propagation
    /// alone.
    Easy,

    /// The default middle ground.
    Medium,

    /// Many removed clues, solving usually requires some guessing.
    Hard
}

impl Difficulty {

    /// The fraction of all cells that the
    /// [Reducer](crate::generator::Reducer) attempts to clear for this
    /// difficulty.
    pub fn removal_fraction(self) -> f64 {
        match self {
            Difficulty::Easy => 0.45,
            Difficulty::Medium => 0.6,
            Difficulty::Hard => 0.7
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard"
        })
    }
}

/// A Sudoku grid is a square matrix of cells that is organized into square
/// boxes in a way that makes the number of boxes along each axis equal to the
/// box dimension. Each cell may or may not be occupied by a digit from 1 to
/// the grid size.
///
/// In ordinary Sudoku, the size is 9 and the boxes are 3x3. A 4x4 grid with
/// 2x2 boxes looks like this:
///
/// ```text
/// ╔═══╤═══╦═══╤═══╗
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╠═══╪═══╬═══╪═══╣
/// ║   │   ║   │   ║
/// ╟───┼───╫───┼───╢
/// ║   │   ║   │   ║
/// ╚═══╧═══╩═══╧═══╝
/// ```
///
/// Both a puzzle and a solution are represented by this type; a solution is
/// simply a grid that is [full](SudokuGrid::is_full) and
/// [valid](SudokuGrid::is_valid).
///
/// Besides the cells, the grid maintains one bit mask of used digits per row,
/// column, and box, updated on every write, which makes
/// [candidates](SudokuGrid::candidates) a constant-time bitwise combination.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct SudokuGrid {
    box_size: usize,
    size: usize,
    cells: Vec<Option<usize>>,

    // These masks track each unit as a set, so they are only exact while no
    // unit holds a duplicate digit. Every writer in this crate preserves
    // that; is_valid reads the cells, not the masks.
    row_used: Vec<DigitSet>,
    column_used: Vec<DigitSet>,
    block_used: Vec<DigitSet>
}

pub(crate) fn index(column: usize, row: usize, size: usize) -> usize {
    row * size + column
}

fn digit_char(number: usize) -> char {
    if number <= 9 {
        (b'0' + number as u8) as char
    }
    else {
        (b'A' + (number - 10) as u8) as char
    }
}

fn digit_value(c: char) -> Option<usize> {
    match c {
        '1'..='9' => Some(c as usize - '0' as usize),
        'A'..='Z' => Some(c as usize - 'A' as usize + 10),
        _ => None
    }
}

fn line(grid: &SudokuGrid, start: char, thick_sep: char, thin_sep: char,
        segment: impl Fn(usize) -> char, pad: char, end: char, newline: bool)
        -> String {
    let size = grid.size();
    let mut result = String::new();

    for x in 0..size {
        if x == 0 {
            result.push(start);
        }
        else if x % grid.box_size == 0 {
            result.push(thick_sep);
        }
        else {
            result.push(thin_sep);
        }

        result.push(pad);
        result.push(segment(x));
        result.push(pad);
    }

    result.push(end);

    if newline {
        result.push('\n');
    }

    result
}

fn top_row(grid: &SudokuGrid) -> String {
    line(grid, '╔', '╦', '╤', |_| '═', '═', '╗', true)
}

fn thin_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╟', '╫', '┼', |_| '─', '─', '╢', true)
}

fn thick_separator_line(grid: &SudokuGrid) -> String {
    line(grid, '╠', '╬', '╪', |_| '═', '═', '╣', true)
}

fn bottom_row(grid: &SudokuGrid) -> String {
    line(grid, '╚', '╩', '╧', |_| '═', '═', '╝', false)
}

fn content_row(grid: &SudokuGrid, y: usize) -> String {
    line(grid, '║', '║', '│',
        |x| grid.get_cell(x, y).unwrap().map(digit_char).unwrap_or(' '), ' ',
        '║', true)
}

impl Display for SudokuGrid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size();
        let top_row = top_row(self);
        let thin_separator_line = thin_separator_line(self);
        let thick_separator_line = thick_separator_line(self);
        let bottom_row = bottom_row(self);

        for y in 0..size {
            if y == 0 {
                f.write_str(top_row.as_str())?;
            }
            else if y % self.box_size == 0 {
                f.write_str(thick_separator_line.as_str())?;
            }
            else {
                f.write_str(thin_separator_line.as_str())?;
            }

            f.write_str(content_row(self, y).as_str())?;
        }

        f.write_str(bottom_row.as_str())?;
        Ok(())
    }
}

impl SudokuGrid {

    /// Creates a new, empty Sudoku grid with the given size (the number of
    /// cells along one axis).
    ///
    /// # Arguments
    ///
    /// * `size`: The total width and height of the grid. Must be a perfect
    ///   square no greater than 25, since the box dimension is its square
    ///   root and the textual codec writes each cell as one character.
    ///
    /// # Errors
    ///
    /// If `size` is zero, not a perfect square, or too large. In that case,
    /// `SudokuError::InvalidDimensions` is returned.
    pub fn new(size: usize) -> SudokuResult<SudokuGrid> {
        if size == 0 || size > MAX_SIZE {
            return Err(SudokuError::InvalidDimensions);
        }

        let box_size = (size as f64).sqrt() as usize;

        if box_size * box_size != size {
            return Err(SudokuError::InvalidDimensions);
        }

        let empty_mask = DigitSet::new(size).unwrap();

        Ok(SudokuGrid {
            box_size,
            size,
            cells: vec![None; size * size],
            row_used: vec![empty_mask; size],
            column_used: vec![empty_mask; size],
            block_used: vec![empty_mask; size]
        })
    }

    /// Creates a grid from its rows, given in top-to-bottom order with cells
    /// in left-to-right order. A cell value of 0 denotes an empty cell.
    ///
    /// # Errors
    ///
    /// * `SudokuError::InvalidDimensions` If the rows do not form a supported
    ///   square (see [SudokuGrid::new]).
    /// * `SudokuError::InvalidNumber` If any cell value is greater than the
    ///   grid size.
    pub fn from_rows(rows: &[Vec<usize>]) -> SudokuResult<SudokuGrid> {
        let size = rows.len();
        let mut grid = SudokuGrid::new(size)?;

        for (row, row_values) in rows.iter().enumerate() {
            if row_values.len() != size {
                return Err(SudokuError::InvalidDimensions);
            }

            for (column, &number) in row_values.iter().enumerate() {
                if number != 0 {
                    grid.set_cell(column, row, number)?;
                }
            }
        }

        Ok(grid)
    }

    /// Parses a code encoding a Sudoku grid of the given size. The code must
    /// consist of exactly `size * size` non-whitespace characters in
    /// left-to-right, top-to-bottom order, where each row is completed before
    /// the next one is started. Every character is either `.` or `0` for an
    /// empty cell or a digit: `1` to `9`, continued by the letters `A` (10)
    /// to `Z` (35) for grids larger than 9x9. Whitespace is ignored to allow
    /// for more intuitive formatting.
    ///
    /// As an example, the code `1.2..3.4..3..1.2` will parse to the
    /// following grid:
    ///
    /// ```text
    /// ╔═══╤═══╦═══╤═══╗
    /// ║ 1 │   ║ 2 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║   │ 3 ║   │ 4 ║
    /// ╠═══╪═══╬═══╪═══╣
    /// ║   │   ║ 3 │   ║
    /// ╟───┼───╫───┼───╢
    /// ║ 1 │   ║   │ 2 ║
    /// ╚═══╧═══╩═══╧═══╝
    /// ```
    ///
    /// # Errors
    ///
    /// Any specialization of `SudokuParseError` (see that documentation).
    pub fn parse(code: &str, size: usize) -> SudokuParseResult<SudokuGrid> {
        let mut grid = match SudokuGrid::new(size) {
            Ok(grid) => grid,
            Err(_) => return Err(SudokuParseError::InvalidDimensions)
        };
        let cells: Vec<char> =
            code.chars().filter(|c| !c.is_whitespace()).collect();

        if cells.len() != size * size {
            return Err(SudokuParseError::WrongLength);
        }

        for (i, &c) in cells.iter().enumerate() {
            if c == '.' || c == '0' {
                continue;
            }

            let number =
                digit_value(c).ok_or(SudokuParseError::InvalidCharacter)?;

            if number > size {
                return Err(SudokuParseError::InvalidNumber);
            }

            grid.set_cell(i % size, i / size, number).unwrap();
        }

        Ok(grid)
    }

    /// Converts the grid into a `String` in a way that is consistent with
    /// [SudokuGrid::parse]. That is, a grid that is converted to a string and
    /// parsed again will not change, as is illustrated below. Empty cells are
    /// written as `.` and the result contains exactly `size * size`
    /// characters without any separators.
    ///
    /// ```
    /// use sudoku_forge::SudokuGrid;
    ///
    /// let mut grid = SudokuGrid::new(4).unwrap();
    ///
    /// // Just some arbitrary changes to create some content.
    /// grid.set_cell(1, 1, 4).unwrap();
    /// grid.set_cell(1, 2, 2).unwrap();
    ///
    /// let code = grid.to_parseable_string();
    /// assert_eq!(".....4...2......", code.as_str());
    /// assert_eq!(grid, SudokuGrid::parse(code.as_str(), 4).unwrap());
    /// ```
    pub fn to_parseable_string(&self) -> String {
        self.cells.iter()
            .map(|&cell| cell.map(digit_char).unwrap_or('.'))
            .collect()
    }

    /// Gets the total size of the grid on one axis (horizontally or
    /// vertically). Since a square grid is enforced at construction time,
    /// this is guaranteed to be valid for both axes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Gets the dimension of one box of the grid, that is, the square root of
    /// its [size](SudokuGrid::size). For an ordinary Sudoku grid, this is 3.
    pub fn box_size(&self) -> usize {
        self.box_size
    }

    fn block_index(&self, column: usize, row: usize) -> usize {
        (row / self.box_size) * self.box_size + column / self.box_size
    }

    /// Gets the content of the cell at the specified position.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    ///   the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    ///   range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn get_cell(&self, column: usize, row: usize)
            -> SudokuResult<Option<usize>> {
        let size = self.size();

        if column >= size || row >= size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.cells[index(column, row, size)])
        }
    }

    /// Sets the content of the cell at the specified position to the given
    /// digit. If the cell was not empty, the old digit will be overwritten.
    ///
    /// Note that this method does *not* check the Sudoku constraint; entering
    /// a digit that already occurs in the cell's row, column, or box is the
    /// responsibility of the caller to avoid.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the assigned cell. Must be in
    ///   the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the assigned cell. Must be in the
    ///   range `[0, size[`.
    /// * `number`: The digit to assign to the specified cell. Must be in the
    ///   range `[1, size]`.
    ///
    /// # Errors
    ///
    /// * `SudokuError::OutOfBounds` If either `column` or `row` are not in
    ///   the specified range.
    /// * `SudokuError::InvalidNumber` If `number` is not in the specified
    ///   range.
    pub fn set_cell(&mut self, column: usize, row: usize, number: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        if number == 0 || number > size {
            return Err(SudokuError::InvalidNumber);
        }

        let index = index(column, row, size);
        let block = self.block_index(column, row);

        if let Some(old) = self.cells[index] {
            self.row_used[row].remove(old).unwrap();
            self.column_used[column].remove(old).unwrap();
            self.block_used[block].remove(old).unwrap();
        }

        self.row_used[row].insert(number).unwrap();
        self.column_used[column].insert(number).unwrap();
        self.block_used[block].insert(number).unwrap();
        self.cells[index] = Some(number);
        Ok(())
    }

    /// Clears the content of the cell at the specified position, that is, if
    /// it contains a digit, that digit is removed. If the cell is already
    /// empty, it will be left that way.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the cleared cell. Must be in
    ///   the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the cleared cell. Must be in the
    ///   range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn clear_cell(&mut self, column: usize, row: usize)
            -> SudokuResult<()> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        let index = index(column, row, size);

        if let Some(old) = self.cells[index] {
            let block = self.block_index(column, row);
            self.row_used[row].remove(old).unwrap();
            self.column_used[column].remove(old).unwrap();
            self.block_used[block].remove(old).unwrap();
            self.cells[index] = None;
        }

        Ok(())
    }

    /// Gets the set of digits currently occupying cells of the given row.
    ///
    /// # Errors
    ///
    /// If `row` is greater than or equal to the grid size. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn row_values(&self, row: usize) -> SudokuResult<DigitSet> {
        if row >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.row_used[row])
        }
    }

    /// Gets the set of digits currently occupying cells of the given column.
    ///
    /// # Errors
    ///
    /// If `column` is greater than or equal to the grid size. In that case,
    /// `SudokuError::OutOfBounds` is returned.
    pub fn column_values(&self, column: usize) -> SudokuResult<DigitSet> {
        if column >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.column_used[column])
        }
    }

    /// Gets the set of digits currently occupying cells of the box that
    /// contains the cell at the specified position.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are greater than or equal to the grid
    /// size. In that case, `SudokuError::OutOfBounds` is returned.
    pub fn block_values(&self, column: usize, row: usize)
            -> SudokuResult<DigitSet> {
        if column >= self.size || row >= self.size {
            Err(SudokuError::OutOfBounds)
        }
        else {
            Ok(self.block_used[self.block_index(column, row)])
        }
    }

    /// Gets the set of digits that could be entered into the cell at the
    /// specified position without duplicating a digit in its row, column, or
    /// box. For a filled cell, the empty set is returned.
    ///
    /// This is the single most performance-sensitive query of the engine; it
    /// is answered by combining the per-unit bit masks the grid maintains on
    /// every write.
    ///
    /// # Arguments
    ///
    /// * `column`: The column (x-coordinate) of the desired cell. Must be in
    ///   the range `[0, size[`.
    /// * `row`: The row (y-coordinate) of the desired cell. Must be in the
    ///   range `[0, size[`.
    ///
    /// # Errors
    ///
    /// If either `column` or `row` are not in the specified range. In that
    /// case, `SudokuError::OutOfBounds` is returned.
    pub fn candidates(&self, column: usize, row: usize)
            -> SudokuResult<DigitSet> {
        let size = self.size();

        if column >= size || row >= size {
            return Err(SudokuError::OutOfBounds);
        }

        if self.cells[index(column, row, size)].is_some() {
            return Ok(DigitSet::new(size).unwrap());
        }

        let used = self.row_used[row] | self.column_used[column]
            | self.block_used[self.block_index(column, row)];
        Ok(DigitSet::range(size).unwrap() - used)
    }

    /// Counts the number of clues given by this grid. This is the number of
    /// non-empty cells. While on average Sudoku with less clues are harder,
    /// this is *not* a reliable measure of difficulty; see
    /// [rating::rate](crate::rating::rate) for that.
    pub fn count_clues(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_some()).count()
    }

    /// Indicates whether this grid is full, i.e. every cell is filled with a
    /// digit. In this case, [SudokuGrid::count_clues] returns the square of
    /// [SudokuGrid::size].
    pub fn is_full(&self) -> bool {
        !self.cells.iter().any(|c| c == &None)
    }

    /// Indicates whether this grid satisfies the Sudoku constraint, that is,
    /// no row, column, or box contains a duplicate digit. Empty cells are
    /// ignored, so a partial board can be valid.
    pub fn is_valid(&self) -> bool {
        let size = self.size;
        let box_size = self.box_size;

        for i in 0..size {
            let row = (0..size)
                .filter_map(|column| self.cells[index(column, i, size)]);
            let column = (0..size)
                .filter_map(|row| self.cells[index(i, row, size)]);

            if contains_duplicate_digit(size, row) ||
                    contains_duplicate_digit(size, column) {
                return false;
            }
        }

        for block_row in (0..size).step_by(box_size) {
            for block_column in (0..size).step_by(box_size) {
                let block = (0..box_size)
                    .flat_map(|r| (0..box_size)
                        .map(move |c| (block_column + c, block_row + r)))
                    .filter_map(|(column, row)|
                        self.cells[index(column, row, size)]);

                if contains_duplicate_digit(size, block) {
                    return false;
                }
            }
        }

        true
    }

    fn verify_dimensions(&self, other: &SudokuGrid) -> SudokuResult<()> {
        if self.size != other.size {
            Err(SudokuError::InvalidDimensions)
        }
        else {
            Ok(())
        }
    }

    /// Indicates whether this grid configuration is a subset of another one.
    /// That is, all cells filled in this grid with some digit must be filled
    /// in `other` with the same digit. If this condition is met, `true` is
    /// returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` grid are not the same. In that
    /// case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_subset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        self.verify_dimensions(other)?;
        Ok(self.cells.iter()
            .zip(other.cells.iter())
            .all(|(self_cell, other_cell)| match self_cell {
                Some(self_number) => Some(self_number) == other_cell.as_ref(),
                None => true
            }))
    }

    /// Indicates whether this grid configuration is a superset of another
    /// one. That is, all cells filled in the `other` grid with some digit
    /// must be filled in this one with the same digit. If this condition is
    /// met, `true` is returned, and `false` otherwise.
    ///
    /// # Errors
    ///
    /// If the sizes of this and the `other` grid are not the same. In that
    /// case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_superset(&self, other: &SudokuGrid) -> SudokuResult<bool> {
        other.is_subset(self)
    }

    /// Indicates whether the given grid is a valid solution of this puzzle.
    /// That is the case if and only if `solution` is full, satisfies the
    /// Sudoku constraint, and agrees with every filled cell of this grid.
    ///
    /// # Errors
    ///
    /// If the sizes of this grid and the `solution` grid are not the same. In
    /// that case, `SudokuError::InvalidDimensions` is returned.
    pub fn is_solution(&self, solution: &SudokuGrid) -> SudokuResult<bool> {
        Ok(self.is_subset(solution)? &&
            solution.is_full() &&
            solution.is_valid())
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    use crate::set;

    #[test]
    fn parse_ok() {
        let grid = SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap();

        assert_eq!(4, grid.size());
        assert_eq!(2, grid.box_size());
        assert_eq!(Some(2), grid.get_cell(0, 0).unwrap());
        assert_eq!(None, grid.get_cell(1, 0).unwrap());
        assert_eq!(Some(3), grid.get_cell(2, 0).unwrap());
        assert_eq!(Some(1), grid.get_cell(1, 1).unwrap());
        assert_eq!(Some(1), grid.get_cell(0, 2).unwrap());
        assert_eq!(Some(4), grid.get_cell(3, 2).unwrap());
        assert_eq!(Some(2), grid.get_cell(1, 3).unwrap());
        assert_eq!(Some(3), grid.get_cell(3, 3).unwrap());
        assert_eq!(None, grid.get_cell(0, 3).unwrap());
    }

    #[test]
    fn parse_strips_whitespace() {
        let spread = SudokuGrid::parse("2.3.
            .1..
            1..4
            .2.3", 4).unwrap();
        let compact = SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap();
        assert_eq!(compact, spread);
    }

    #[test]
    fn parse_accepts_zero_as_empty() {
        let with_zeros = SudokuGrid::parse("2030010010040203", 4).unwrap();
        let with_dots = SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap();
        assert_eq!(with_dots, with_zeros);
    }

    #[test]
    fn parse_wrong_length() {
        assert_eq!(Err(SudokuParseError::WrongLength),
            SudokuGrid::parse("2.3..1..1..4.2.", 4));
        assert_eq!(Err(SudokuParseError::WrongLength),
            SudokuGrid::parse("2.3..1..1..4.2.33", 4));
    }

    #[test]
    fn parse_invalid_dimensions() {
        assert_eq!(Err(SudokuParseError::InvalidDimensions),
            SudokuGrid::parse("...", 0));
        assert_eq!(Err(SudokuParseError::InvalidDimensions),
            SudokuGrid::parse("........", 5));
        assert_eq!(Err(SudokuParseError::InvalidDimensions),
            SudokuGrid::parse(".", 36));
    }

    #[test]
    fn parse_invalid_character() {
        assert_eq!(Err(SudokuParseError::InvalidCharacter),
            SudokuGrid::parse("2.3..1..1..4.2.#", 4));
    }

    #[test]
    fn parse_invalid_number() {
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse("2.3..5..1..4.2.3", 4));
        assert_eq!(Err(SudokuParseError::InvalidNumber),
            SudokuGrid::parse("A...............", 4));
    }

    #[test]
    fn to_parseable_string_round_trip() {
        let code = "2.3..1..1..4.2.3";
        let grid = SudokuGrid::parse(code, 4).unwrap();
        assert_eq!(code, grid.to_parseable_string().as_str());
    }

    #[test]
    fn codec_uses_letters_beyond_nine() {
        let mut grid = SudokuGrid::new(16).unwrap();
        grid.set_cell(0, 0, 10).unwrap();
        grid.set_cell(5, 3, 16).unwrap();
        let code = grid.to_parseable_string();

        assert_eq!(256, code.len());
        assert_eq!(Some('A'), code.chars().next());
        assert_eq!(Some('G'), code.chars().nth(index(5, 3, 16)));
        assert_eq!(grid, SudokuGrid::parse(code.as_str(), 16).unwrap());
    }

    #[test]
    fn new_grid_requires_perfect_square() {
        assert!(SudokuGrid::new(4).is_ok());
        assert!(SudokuGrid::new(9).is_ok());
        assert!(SudokuGrid::new(16).is_ok());
        assert!(SudokuGrid::new(25).is_ok());
        assert_eq!(Err(SudokuError::InvalidDimensions), SudokuGrid::new(0));
        assert_eq!(Err(SudokuError::InvalidDimensions), SudokuGrid::new(6));
        assert_eq!(Err(SudokuError::InvalidDimensions), SudokuGrid::new(36));
    }

    #[test]
    fn from_rows_ok() {
        let grid = SudokuGrid::from_rows(&[
            vec![2, 0, 3, 0],
            vec![0, 1, 0, 0],
            vec![1, 0, 0, 4],
            vec![0, 2, 0, 3]
        ]).unwrap();
        assert_eq!(SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap(), grid);
    }

    #[test]
    fn from_rows_requires_square() {
        let result = SudokuGrid::from_rows(&[
            vec![1, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0]
        ]);
        assert_eq!(Err(SudokuError::InvalidDimensions), result);
    }

    #[test]
    fn from_rows_rejects_large_digits() {
        let result = SudokuGrid::from_rows(&[
            vec![5, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0],
            vec![0, 0, 0, 0]
        ]);
        assert_eq!(Err(SudokuError::InvalidNumber), result);
    }

    #[test]
    fn cell_access_out_of_bounds() {
        let mut grid = SudokuGrid::new(4).unwrap();
        assert_eq!(Err(SudokuError::OutOfBounds), grid.get_cell(4, 0));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.set_cell(0, 4, 1));
        assert_eq!(Err(SudokuError::OutOfBounds), grid.clear_cell(4, 4));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 5));
        assert_eq!(Err(SudokuError::InvalidNumber), grid.set_cell(0, 0, 0));
    }

    #[test]
    fn unit_values_track_writes() {
        let mut grid = SudokuGrid::new(9).unwrap();
        grid.set_cell(3, 1, 7).unwrap();

        assert_eq!(set!(9; 7), grid.row_values(1).unwrap());
        assert_eq!(set!(9; 7), grid.column_values(3).unwrap());
        assert_eq!(set!(9; 7), grid.block_values(4, 2).unwrap());
        assert!(grid.row_values(0).unwrap().is_empty());
        assert!(grid.block_values(0, 0).unwrap().is_empty());

        grid.set_cell(3, 1, 2).unwrap();

        assert_eq!(set!(9; 2), grid.row_values(1).unwrap());

        grid.clear_cell(3, 1).unwrap();

        assert!(grid.row_values(1).unwrap().is_empty());
        assert!(grid.column_values(3).unwrap().is_empty());
        assert!(grid.block_values(4, 2).unwrap().is_empty());
    }

    fn assert_candidate_invariants(grid: &SudokuGrid) {
        let size = grid.size();

        for row in 0..size {
            for column in 0..size {
                let candidates = grid.candidates(column, row).unwrap();

                if grid.get_cell(column, row).unwrap().is_some() {
                    assert!(candidates.is_empty());
                    continue;
                }

                let used = grid.row_values(row).unwrap()
                    | grid.column_values(column).unwrap()
                    | grid.block_values(column, row).unwrap();

                for digit in candidates.iter() {
                    assert!(digit >= 1 && digit <= size);
                    assert!(!used.contains(digit));
                }
            }
        }
    }

    #[test]
    fn candidates_respect_units() {
        let grid_4 = SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap();
        let grid_9 = SudokuGrid::parse("\
            53..7....\
            6..195...\
            .98....6.\
            8...6...3\
            4..8.3..1\
            7...2...6\
            .6....28.\
            ...419..5\
            ....8..79", 9).unwrap();
        let mut grid_16 = SudokuGrid::new(16).unwrap();
        grid_16.set_cell(0, 0, 10).unwrap();
        grid_16.set_cell(8, 2, 16).unwrap();
        grid_16.set_cell(15, 15, 1).unwrap();

        assert_candidate_invariants(&grid_4);
        assert_candidate_invariants(&grid_9);
        assert_candidate_invariants(&grid_16);
    }

    #[test]
    fn candidates_concrete() {
        let grid = SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap();

        // The top-right cell sees 2 and 3 in its row, 4 and 3 in its column,
        // and 3 in its box, leaving only the 1.
        assert_eq!(set!(4; 1), grid.candidates(3, 0).unwrap());
        assert!(grid.candidates(0, 0).unwrap().is_empty());
    }

    #[test]
    fn count_clues_and_full() {
        let empty = SudokuGrid::new(4).unwrap();
        let partial = SudokuGrid::parse("1.32.4........1.", 4).unwrap();
        let full = SudokuGrid::parse("2341143241233214", 4).unwrap();

        assert_eq!(0, empty.count_clues());
        assert_eq!(5, partial.count_clues());
        assert_eq!(16, full.count_clues());

        assert!(!empty.is_full());
        assert!(!partial.is_full());
        assert!(full.is_full());
    }

    #[test]
    fn valid_boards() {
        assert!(SudokuGrid::new(9).unwrap().is_valid());
        assert!(SudokuGrid::parse("2.3..1..1..4.2.3", 4).unwrap().is_valid());
        assert!(SudokuGrid::parse("2341143241233214", 4).unwrap().is_valid());
    }

    #[test]
    fn row_duplicate_invalid() {
        let grid = SudokuGrid::parse("1..1............", 4).unwrap();
        assert!(!grid.is_valid());
    }

    #[test]
    fn column_duplicate_invalid() {
        let grid = SudokuGrid::parse("1.......1.......", 4).unwrap();
        assert!(!grid.is_valid());
    }

    #[test]
    fn block_duplicate_invalid() {
        let grid = SudokuGrid::parse("1....1..........", 4).unwrap();
        assert!(!grid.is_valid());
    }

    fn assert_subset_relation(a: &SudokuGrid, b: &SudokuGrid, a_subset_b: bool,
            b_subset_a: bool) {
        assert!(a.is_subset(b).unwrap() == a_subset_b);
        assert!(a.is_superset(b).unwrap() == b_subset_a);
        assert!(b.is_subset(a).unwrap() == b_subset_a);
        assert!(b.is_superset(a).unwrap() == a_subset_b);
    }

    #[test]
    fn empty_is_subset() {
        let empty = SudokuGrid::new(4).unwrap();
        let non_empty = SudokuGrid::parse("1...............", 4).unwrap();
        let full = SudokuGrid::parse("1234341221434321", 4).unwrap();

        assert_subset_relation(&empty, &empty, true, true);
        assert_subset_relation(&empty, &non_empty, true, false);
        assert_subset_relation(&empty, &full, true, false);
    }

    #[test]
    fn true_subset() {
        let sparse = SudokuGrid::parse("1.3..2...4...3..", 4).unwrap();
        let dense = SudokuGrid::parse("123..2.1.4...3..", 4).unwrap();
        assert_subset_relation(&sparse, &dense, true, false);
    }

    #[test]
    fn unrelated_grids_not_subsets() {
        // The grids differ in the third digit of the first row.
        let a = SudokuGrid::parse("1.3..2...4...3..", 4).unwrap();
        let b = SudokuGrid::parse("1.4..2...4...3..", 4).unwrap();
        assert_subset_relation(&a, &b, false, false);
    }

    #[test]
    fn subset_requires_equal_dimensions() {
        let small = SudokuGrid::new(4).unwrap();
        let large = SudokuGrid::new(9).unwrap();
        assert_eq!(Err(SudokuError::InvalidDimensions),
            small.is_subset(&large));
    }

    fn solution_example_puzzle() -> SudokuGrid {
        SudokuGrid::parse("\
            2...\
            ..3.\
            ...4\
            .2..", 4).unwrap()
    }

    #[test]
    fn solution_not_full() {
        let puzzle = solution_example_puzzle();
        let solution = SudokuGrid::parse("2341143.31244213", 4).unwrap();
        assert!(!puzzle.is_solution(&solution).unwrap());
    }

    #[test]
    fn solution_not_superset() {
        let puzzle = solution_example_puzzle();
        let solution = SudokuGrid::parse("2341143232144123", 4).unwrap();
        assert!(!puzzle.is_solution(&solution).unwrap());
    }

    #[test]
    fn solution_violates_rules() {
        let puzzle = solution_example_puzzle();
        let solution = SudokuGrid::parse("2341133231244213", 4).unwrap();
        assert!(!puzzle.is_solution(&solution).unwrap());
    }

    #[test]
    fn solution_correct() {
        let puzzle = solution_example_puzzle();
        let solution = SudokuGrid::parse("2341143231244213", 4).unwrap();
        assert!(puzzle.is_solution(&solution).unwrap());
    }
}
