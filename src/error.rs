//! This module contains some error and result definitions used in this crate.

/// Miscellaneous errors that can occur on some methods in the
/// [root module](../index.html). This does not include errors that occur when
/// parsing a grid, see [SudokuParseError](enum.SudokuParseError.html) for
/// that.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuError {

    /// Indicates that the size specified for a created grid is invalid. This
    /// is the case if it is not a supported perfect square (see
    /// [SudokuGrid::new](../struct.SudokuGrid.html#method.new)).
    InvalidDimensions,

    /// Indicates that some digit is invalid for the size of the grid in
    /// question. This is the case if it is less than 1 or greater than the
    /// size.
    InvalidNumber,

    /// Indicates that the specified coordinates (column and row) lie outside
    /// the grid in question. This is the case if they are greater than or
    /// equal to the size.
    OutOfBounds,

    /// An error that is raised whenever it is attempted to fill a grid whose
    /// present digits cannot be extended to any complete, valid board.
    UnsatisfiableGrid
}

/// Syntactic sugar for `Result<V, SudokuError>`.
pub type SudokuResult<V> = Result<V, SudokuError>;

/// An enumeration of the errors that may occur when parsing a `SudokuGrid`
/// from its compact textual code.
#[derive(Debug, Eq, PartialEq)]
pub enum SudokuParseError {

    /// Indicates that the code does not contain exactly `size * size`
    /// non-whitespace characters.
    WrongLength,

    /// Indicates that the requested grid size is not a supported perfect
    /// square.
    InvalidDimensions,

    /// Indicates that the code contains a character that does not denote a
    /// digit or an empty cell.
    InvalidCharacter,

    /// Indicates that a cell is filled with a digit that is too large for the
    /// grid size.
    InvalidNumber
}

/// Syntactic sugar for `Result<V, SudokuParseError>`.
pub type SudokuParseResult<V> = Result<V, SudokuParseError>;
