use criterion::{criterion_group, criterion_main, Criterion};

use sudoku_forge::SudokuGrid;
use sudoku_forge::solver::{BacktrackingSolver, Solver};
use sudoku_forge::solver::strategy::{
    HiddenSingleStrategy,
    NakedSingleStrategy,
    Strategy
};

// Explanation of benchmark classes:
//
// propagation: The naked-single and hidden-single strategies applied to a
//              fixpoint, without any backtracking.
// solve:       The full backtracking solver in find-first mode. The easy
//              puzzle is mostly resolved by propagation, the hard one
//              requires actual search.
// count:       The solution counter capped at 2, as used by the generator
//              for every attempted clue removal.

const EASY_PUZZLE: &str = "\
    53..7....\
    6..195...\
    .98....6.\
    8...6...3\
    4..8.3..1\
    7...2...6\
    .6....28.\
    ...419..5\
    ....8..79";

const HARD_PUZZLE: &str = "\
    4.....8.5\
    .3.......\
    ...7.....\
    .2.....6.\
    ....8.4..\
    ....1....\
    ...6.3.7.\
    5..2.....\
    1.4......";

fn benchmark_propagation(c: &mut Criterion) {
    let puzzle = SudokuGrid::parse(EASY_PUZZLE, 9).unwrap();

    c.bench_function("propagation to fixpoint", |b| b.iter(|| {
        let mut grid = puzzle.clone();

        loop {
            let placed = NakedSingleStrategy.apply(&mut grid)
                + HiddenSingleStrategy.apply(&mut grid);

            if placed == 0 {
                break;
            }
        }

        grid
    }));
}

fn benchmark_solve(c: &mut Criterion) {
    let easy = SudokuGrid::parse(EASY_PUZZLE, 9).unwrap();
    let hard = SudokuGrid::parse(HARD_PUZZLE, 9).unwrap();

    c.bench_function("solve easy 9x9",
        |b| b.iter(|| BacktrackingSolver.solve(&easy)));
    c.bench_function("solve hard 9x9",
        |b| b.iter(|| BacktrackingSolver.solve(&hard)));
}

fn benchmark_count(c: &mut Criterion) {
    let easy = SudokuGrid::parse(EASY_PUZZLE, 9).unwrap();

    c.bench_function("uniqueness check capped at 2",
        |b| b.iter(|| BacktrackingSolver.count_solutions(&easy, 2)));
}

criterion_group!(benches, benchmark_propagation, benchmark_solve,
    benchmark_count);
criterion_main!(benches);
