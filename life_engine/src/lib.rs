//! Cellular-automaton core: grid storage, birth/survival thresholds, and a
//! row-coroutine generation engine.
//!
//! The crate knows nothing about rendering or input. A driver owns a
//! [`Grid`], seeds it, and calls [`Engine::advance`] once per simulation
//! tick; a renderer reads cell states back through [`Grid::iter`].

pub mod engine;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod rules;

pub use engine::Engine;
pub use error::{EngineError, GridError};
pub use grid::Grid;
pub use patterns::{PATTERNS, Pattern};
pub use rules::Rules;
