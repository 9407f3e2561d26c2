//! This module estimates how difficult a puzzle is for a human solver.
//!
//! The clue count alone is a poor predictor of difficulty, and the removal
//! fraction used by the [Reducer](crate::generator::Reducer) only controls
//! how many clues are dropped. The rating in this module instead measures
//! how far the deterministic [strategies](crate::solver::strategy) carry a
//! solver and how much guessing remains afterwards.
//!
//! The score is a heuristic: the weights and bucket thresholds below are a
//! policy choice, not a structural invariant. What is guaranteed is the
//! shape of the measure: less progress by propagation and more required
//! guessing always yield a higher score.

use crate::{Difficulty, SudokuGrid};
use crate::solver::strategy::{
    naked_pair_eliminations,
    HiddenSingleStrategy,
    NakedSingleStrategy,
    Strategy
};

use serde::Serialize;

const NAKED_SINGLE_WEIGHT: usize = 1;
const HIDDEN_SINGLE_WEIGHT: usize = 2;
const NAKED_PAIR_WEIGHT: usize = 3;
const GUESS_WEIGHT: usize = 5;

const MEDIUM_THRESHOLD: usize = 20;
const HARD_THRESHOLD: usize = 45;

/// The raw counts that flow into a [Rating]. All counts refer to a single
/// instrumented propagation pass over a private copy of the rated puzzle.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Features {

    /// The number of cells filled by the
    /// [NakedSingleStrategy](crate::solver::strategy::NakedSingleStrategy).
    pub naked_singles: usize,

    /// The number of cells filled by the
    /// [HiddenSingleStrategy](crate::solver::strategy::HiddenSingleStrategy)
    /// afterwards.
    pub hidden_singles: usize,

    /// The number of candidate eliminations licensed by
    /// [naked_pair_eliminations](crate::solver::strategy::naked_pair_eliminations)
    /// on the propagated board.
    pub naked_pair_eliminations: usize,

    /// The minimum candidate count over all cells still empty after
    /// propagation, as a proxy for how much guessing a solver needs. Zero if
    /// propagation alone completes the puzzle.
    pub min_remaining_candidates: usize
}

/// The result of [rate]: a heuristic difficulty score, the bucket it falls
/// into, and the [Features] it was computed from. Serializable, so the CLI
/// can print it as a JSON report.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct Rating {

    /// The weighted sum of the features.
    pub score: usize,

    /// The difficulty bucket the score falls into.
    pub level: Difficulty,

    /// The raw counts the score was computed from.
    pub features: Features
}

fn level(score: usize) -> Difficulty {
    if score < MEDIUM_THRESHOLD {
        Difficulty::Easy
    }
    else if score < HARD_THRESHOLD {
        Difficulty::Medium
    }
    else {
        Difficulty::Hard
    }
}

/// Rates the difficulty of the given puzzle. The puzzle itself is not
/// modified; all strategies run on a private copy.
pub fn rate(puzzle: &SudokuGrid) -> Rating {
    let mut grid = puzzle.clone();
    let size = grid.size();
    let naked_singles = NakedSingleStrategy.apply(&mut grid);
    let hidden_singles = HiddenSingleStrategy.apply(&mut grid);
    let pair_eliminations = naked_pair_eliminations(&grid);
    let mut min_remaining_candidates = 0;

    if !grid.is_full() {
        let mut min = size + 1;

        for row in 0..size {
            for column in 0..size {
                if grid.get_cell(column, row).unwrap().is_none() {
                    let candidates =
                        grid.candidates(column, row).unwrap().len();
                    min = min.min(candidates);
                }
            }
        }

        min_remaining_candidates = min;
    }

    let score = naked_singles * NAKED_SINGLE_WEIGHT
        + hidden_singles * HIDDEN_SINGLE_WEIGHT
        + pair_eliminations * NAKED_PAIR_WEIGHT
        + min_remaining_candidates * GUESS_WEIGHT;

    Rating {
        score,
        level: level(score),
        features: Features {
            naked_singles,
            hidden_singles,
            naked_pair_eliminations: pair_eliminations,
            min_remaining_candidates
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn complete_board_rates_easy() {
        let solved = SudokuGrid::parse("2341143231244213", 4).unwrap();
        let rating = rate(&solved);

        assert_eq!(0, rating.score);
        assert_eq!(Difficulty::Easy, rating.level);
        assert_eq!(0, rating.features.naked_singles);
        assert_eq!(0, rating.features.min_remaining_candidates);
    }

    #[test]
    fn rating_does_not_modify_the_puzzle() {
        let code = "2.3..1..1..4.2.3";
        let puzzle = SudokuGrid::parse(code, 4).unwrap();
        rate(&puzzle);

        assert_eq!(code, puzzle.to_parseable_string().as_str());
    }

    #[test]
    fn singles_only_puzzle_rates_easy() {
        // Ten cleared cells, all of which are recovered by naked singles, so
        // the score is exactly 10.
        let puzzle = SudokuGrid::parse("\
            5.4678912\
            67219534.\
            19.342567\
            8597.1423\
            .2685379.\
            71392485.\
            9615372.4\
            2.7419635\
            34528.179", 9).unwrap();
        let rating = rate(&puzzle);

        assert_eq!(Difficulty::Easy, rating.level);
        assert_eq!(10, rating.score);
        assert_eq!(10, rating.features.naked_singles);
        assert_eq!(0, rating.features.hidden_singles);
        assert_eq!(0, rating.features.min_remaining_candidates);
    }

    #[test]
    fn empty_board_rates_hard() {
        // Nothing is forced on an empty 9x9 board, so the rating consists
        // entirely of the guessing proxy: 9 candidates everywhere.
        let empty = SudokuGrid::new(9).unwrap();
        let rating = rate(&empty);

        assert_eq!(45, rating.score);
        assert_eq!(Difficulty::Hard, rating.level);
        assert_eq!(0, rating.features.naked_singles);
        assert_eq!(0, rating.features.hidden_singles);
        assert_eq!(0, rating.features.naked_pair_eliminations);
        assert_eq!(9, rating.features.min_remaining_candidates);
    }

    #[test]
    fn more_guessing_rates_higher() {
        let empty_4 = SudokuGrid::new(4).unwrap();
        let empty_9 = SudokuGrid::new(9).unwrap();

        assert!(rate(&empty_4).score < rate(&empty_9).score);
    }
}
