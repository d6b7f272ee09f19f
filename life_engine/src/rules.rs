//! Birth/survival thresholds.

/// Three-threshold rule table; the defaults are Conway's B3/S23.
///
/// The thresholds are independent. An empty survive interval
/// (`min > max`) is not repaired: the table is applied literally and no
/// cell survives. [`Rules::warn_if_unsatisfiable`] surfaces that case.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rules {
    /// Fewest live neighbors an alive cell needs to survive.
    pub min_neighbors_to_live: u8,
    /// Most live neighbors an alive cell tolerates before dying.
    pub max_neighbors_to_live: u8,
    /// Exact live-neighbor count that births a dead cell.
    pub neighbors_to_start: u8,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            min_neighbors_to_live: 2,
            max_neighbors_to_live: 3,
            neighbors_to_start: 3,
        }
    }
}

impl Rules {
    /// Applies the rule table to a single cell.
    pub fn next_state(&self, alive: bool, live_neighbors: u8) -> bool {
        if alive {
            live_neighbors >= self.min_neighbors_to_live
                && live_neighbors <= self.max_neighbors_to_live
        } else {
            live_neighbors == self.neighbors_to_start
        }
    }

    /// Logs a warning when the survive interval is empty.
    pub fn warn_if_unsatisfiable(&self) {
        if self.min_neighbors_to_live > self.max_neighbors_to_live {
            log::warn!(
                "survive interval [{}, {}] is empty; no live cell can survive a generation",
                self.min_neighbors_to_live,
                self.max_neighbors_to_live
            );
        }
    }
}
