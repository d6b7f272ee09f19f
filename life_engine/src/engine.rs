//! Generation advance with one cooperative row coroutine per grid row.

use std::sync::Arc;

use crate::error::{EngineError, GridError};
use crate::grid::Grid;
use crate::rules::Rules;

/// The 8 grid-adjacent offsets; a cell is not its own neighbor.
const NEIGHBOR_OFFSETS: [(i64, i64); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Advances a [`Grid`] one generation at a time.
///
/// Holds the rule thresholds and the tokio runtime the row coroutines run
/// on; it carries no grid state of its own, so one engine can drive any
/// number of grids.
#[derive(Debug)]
pub struct Engine {
    rules: Rules,
    runtime: tokio::runtime::Runtime,
}

impl Engine {
    pub fn new(rules: Rules) -> Result<Self, EngineError> {
        rules.warn_if_unsatisfiable();
        let runtime = tokio::runtime::Runtime::new()?;
        Ok(Self { rules, runtime })
    }

    pub fn rules(&self) -> Rules {
        self.rules
    }

    /// Counts live cells among the in-bounds neighbors of `(row, col)`.
    ///
    /// Edges are hard boundaries: a corner cell sees 3 candidate
    /// positions, a non-corner edge cell 5, an interior cell 8. Fails with
    /// `OutOfBounds` when `(row, col)` itself is outside the grid.
    pub fn live_neighbors(grid: &Grid, row: usize, col: usize) -> Result<u8, GridError> {
        grid.get(row, col)?;
        Ok(count_live(grid, row, col))
    }

    /// Computes the next generation in place.
    ///
    /// One coroutine per row reads a shared snapshot of the current
    /// generation, so every neighbor count sees pre-advance state no
    /// matter how the tasks interleave. Finished rows are written back
    /// into `grid`, which holds the complete new generation when the call
    /// returns.
    pub fn advance(&self, grid: &mut Grid) -> Result<(), EngineError> {
        let snapshot = Arc::new(grid.clone());
        let rules = self.rules;

        self.runtime.block_on(async {
            let mut handles = Vec::with_capacity(snapshot.height());
            for row in 0..snapshot.height() {
                handles.push(tokio::spawn(next_row(Arc::clone(&snapshot), rules, row)));
            }
            for handle in handles {
                let (row, states) = handle.await?;
                grid.store_row(row, &states);
            }
            Ok(())
        })
    }
}

/// Row coroutine: computes the next state of every cell in `row` from the
/// snapshot, yielding cooperatively between cells.
async fn next_row(snapshot: Arc<Grid>, rules: Rules, row: usize) -> (usize, Vec<bool>) {
    let mut states = Vec::with_capacity(snapshot.width());
    for col in 0..snapshot.width() {
        let live = count_live(&snapshot, row, col);
        states.push(rules.next_state(snapshot.alive_unchecked(row, col), live));
        tokio::task::yield_now().await;
    }
    (row, states)
}

fn count_live(grid: &Grid, row: usize, col: usize) -> u8 {
    let height = grid.height() as i64;
    let width = grid.width() as i64;
    let mut count = 0;
    for (row_off, col_off) in NEIGHBOR_OFFSETS {
        let neighbor_row = row as i64 + row_off;
        let neighbor_col = col as i64 + col_off;
        if (0..height).contains(&neighbor_row)
            && (0..width).contains(&neighbor_col)
            && grid.alive_unchecked(neighbor_row as usize, neighbor_col as usize)
        {
            count += 1;
        }
    }
    count
}
