//! Grid storage for the automaton.

use rand::Rng;

use crate::error::GridError;

/// Rectangular field of cells in row-major order, `(0, 0)` top-left.
///
/// Dimensions are fixed for the grid's lifetime; the only mutable state is
/// the per-cell alive flag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    height: usize,
    width: usize,
    cells: Vec<bool>,
}

impl Grid {
    /// Creates an all-dead grid.
    pub fn new(height: usize, width: usize) -> Result<Self, GridError> {
        if height < 1 || width < 1 {
            return Err(GridError::InvalidDimension { height, width });
        }
        Ok(Self {
            height,
            width,
            cells: vec![false; height * width],
        })
    }

    /// Creates a grid with an explicit per-cell initializer.
    pub fn from_fn(
        height: usize,
        width: usize,
        mut init: impl FnMut(usize, usize) -> bool,
    ) -> Result<Self, GridError> {
        let mut grid = Self::new(height, width)?;
        for row in 0..height {
            for col in 0..width {
                grid.cells[row * width + col] = init(row, col);
            }
        }
        Ok(grid)
    }

    /// Creates a grid where each cell starts alive with probability
    /// `density`, clamped to `[0, 1]`.
    pub fn random<R: Rng>(
        height: usize,
        width: usize,
        density: f64,
        rng: &mut R,
    ) -> Result<Self, GridError> {
        let density = density.clamp(0.0, 1.0);
        Self::from_fn(height, width, |_, _| rng.gen_bool(density))
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn width(&self) -> usize {
        self.width
    }

    fn index(&self, row: usize, col: usize) -> Result<usize, GridError> {
        if row >= self.height || col >= self.width {
            return Err(GridError::OutOfBounds {
                row,
                col,
                height: self.height,
                width: self.width,
            });
        }
        Ok(row * self.width + col)
    }

    pub fn get(&self, row: usize, col: usize) -> Result<bool, GridError> {
        Ok(self.cells[self.index(row, col)?])
    }

    pub fn set(&mut self, row: usize, col: usize, alive: bool) -> Result<(), GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = alive;
        Ok(())
    }

    /// Flips one cell and returns its new state.
    pub fn toggle(&mut self, row: usize, col: usize) -> Result<bool, GridError> {
        let idx = self.index(row, col)?;
        self.cells[idx] = !self.cells[idx];
        Ok(self.cells[idx])
    }

    /// Kills every cell; dimensions are unchanged.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    /// Current population.
    pub fn live_cells(&self) -> usize {
        self.cells.iter().filter(|&&alive| alive).count()
    }

    /// Row-major iteration over `(row, col, alive)`.
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(|(idx, &alive)| (idx / self.width, idx % self.width, alive))
    }

    pub(crate) fn alive_unchecked(&self, row: usize, col: usize) -> bool {
        self.cells[row * self.width + col]
    }

    pub(crate) fn store_row(&mut self, row: usize, states: &[bool]) {
        let start = row * self.width;
        self.cells[start..start + self.width].copy_from_slice(states);
    }
}
