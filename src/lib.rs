//! Toroidal Game of Life engine
//!
//! The [`Universe`] holds a bit-packed grid whose edges wrap around. A host
//! drives it one generation at a time: borrow [`Universe::cells`] to draw,
//! then call [`Universe::tick`]. [`Universe::toggle_cell`] flips single cells
//! between ticks.

pub mod config;
pub mod driver;
pub mod error;
pub mod game_of_life;
pub mod utils;

pub use config::Settings;
pub use error::EngineError;
pub use game_of_life::{Cell, InitialPattern, Universe};

use anyhow::Result;

/// Build a universe from settings and drive it with the configured output format
pub fn run_simulation<W: std::io::Write>(settings: &Settings, out: W) -> Result<Universe> {
    let mut universe = settings.build_universe()?;
    let mut sink = driver::sink_for(settings.output.format, out);
    driver::FrameDriver::new()
        .with_frame_delay(std::time::Duration::from_millis(settings.output.frame_delay_ms))
        .run(&mut universe, sink.as_mut(), settings.simulation.generations)?;
    Ok(universe)
}
