//! Game of Life core functionality

pub mod grid;
pub mod io;
pub mod packed;
pub mod pattern;
pub mod rules;

pub use grid::{Cell, Snapshot, Universe, DEFAULT_PARALLEL_THRESHOLD};
pub use io::{create_example_patterns, load_universe_from_file, save_universe_to_file};
pub use packed::PackedCells;
pub use pattern::InitialPattern;
pub use rules::GameOfLifeRules;
