use std::collections::HashSet;

use life_engine::{Engine, Grid, PATTERNS, Rules, patterns};
use rand::SeedableRng;
use rand::rngs::StdRng;

fn engine() -> Engine {
    Engine::new(Rules::default()).unwrap()
}

fn live_set(grid: &Grid) -> HashSet<(usize, usize)> {
    grid.iter()
        .filter(|&(_, _, alive)| alive)
        .map(|(row, col, _)| (row, col))
        .collect()
}

fn pattern(name: &str) -> &'static life_engine::Pattern {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name == name)
        .expect("known pattern")
}

#[test]
fn blinker_oscillates_with_period_two() {
    let engine = engine();
    let mut grid = Grid::new(50, 50).unwrap();
    patterns::apply(&mut grid, pattern("Blinker")).unwrap();
    let horizontal = live_set(&grid);

    engine.advance(&mut grid).unwrap();
    let vertical = live_set(&grid);
    let expected: HashSet<_> = [(24, 25), (25, 25), (26, 25)].into_iter().collect();
    assert_eq!(vertical, expected);

    engine.advance(&mut grid).unwrap();
    assert_eq!(live_set(&grid), horizontal);
}

#[test]
fn block_is_a_still_life() {
    let engine = engine();
    let mut grid = Grid::new(10, 10).unwrap();
    for (row, col) in [(4, 4), (4, 5), (5, 4), (5, 5)] {
        grid.set(row, col, true).unwrap();
    }
    let block = live_set(&grid);
    for _ in 0..10 {
        engine.advance(&mut grid).unwrap();
        assert_eq!(live_set(&grid), block);
    }
}

#[test]
fn glider_travels_one_cell_per_four_generations() {
    let engine = engine();
    let mut grid = Grid::new(50, 50).unwrap();
    patterns::apply(&mut grid, pattern("Glider")).unwrap();
    let start = live_set(&grid);

    for _ in 0..4 {
        engine.advance(&mut grid).unwrap();
    }

    let shifted: HashSet<_> = start
        .into_iter()
        .map(|(row, col)| (row + 1, col + 1))
        .collect();
    assert_eq!(live_set(&grid), shifted);
}

#[test]
fn sparse_debris_goes_extinct() {
    let engine = engine();
    let mut grid = Grid::new(9, 9).unwrap();
    for (row, col) in [(0, 0), (4, 4), (8, 8)] {
        grid.set(row, col, true).unwrap();
    }
    engine.advance(&mut grid).unwrap();
    assert_eq!(grid.live_cells(), 0);
    engine.advance(&mut grid).unwrap();
    assert_eq!(grid.live_cells(), 0);
}

#[test]
fn random_runs_are_reproducible() {
    for seed in [11u64, 22, 33] {
        let mut first = Grid::random(24, 24, 0.35, &mut StdRng::seed_from_u64(seed)).unwrap();
        let mut second = Grid::random(24, 24, 0.35, &mut StdRng::seed_from_u64(seed)).unwrap();

        let engine_a = engine();
        let engine_b = engine();
        for _ in 0..8 {
            engine_a.advance(&mut first).unwrap();
            engine_b.advance(&mut second).unwrap();
        }
        assert_eq!(
            live_set(&first),
            live_set(&second),
            "live-set mismatch for seed {seed}"
        );
    }
}
