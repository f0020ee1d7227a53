//! Borrowed per-frame view and the loop that produces it

use crate::game_of_life::{Snapshot, Universe};
use anyhow::Result;
use itertools::iproduct;
use log::{debug, info};
use std::time::Duration;

/// One frame of packed state, borrowed from a [`Universe`] for the duration of a draw.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub cells: &'a [u8],
}

impl<'a> Frame<'a> {
    pub fn from_universe(universe: &'a Universe) -> Self {
        Self {
            width: universe.width(),
            height: universe.height(),
            generation: universe.generation(),
            cells: universe.cells(),
        }
    }

    /// Decode one cell straight from the packed bytes.
    ///
    /// `row` must be below `height` and `col` below `width`.
    #[inline]
    pub fn is_alive(&self, row: usize, col: usize) -> bool {
        debug_assert!(
            row < self.height && col < self.width,
            "({}, {}) outside {}x{} frame",
            row,
            col,
            self.width,
            self.height
        );
        let idx = row * self.width + col;
        let mask = 1u8 << (idx % 8);
        self.cells[idx / 8] & mask == mask
    }

    pub fn living_count(&self) -> usize {
        self.cells.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Coordinates of live cells, row-major
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| self.is_alive(row, col))
            .collect()
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            generation: self.generation,
            living: self.living_cells(),
            cells: self.cells.to_vec(),
        }
    }
}

/// Consumer of frames, e.g. a terminal or file renderer
pub trait FrameSink {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()>;
}

/// Drives a universe frame by frame: read, draw, tick.
#[derive(Debug, Clone, Default)]
pub struct FrameDriver {
    frame_delay: Option<Duration>,
}

impl FrameDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep between frames; zero disables the delay
    pub fn with_frame_delay(mut self, delay: Duration) -> Self {
        self.frame_delay = (!delay.is_zero()).then_some(delay);
        self
    }

    /// Run `ticks` steps, drawing before each step and once more after the last.
    pub fn run<S: FrameSink + ?Sized>(
        &self,
        universe: &mut Universe,
        sink: &mut S,
        ticks: usize,
    ) -> Result<()> {
        info!(
            "driving {}x{} universe for {} generations",
            universe.width(),
            universe.height(),
            ticks
        );

        for _ in 0..ticks {
            sink.draw(&Frame::from_universe(universe))?;
            universe.tick();
            if let Some(delay) = self.frame_delay {
                std::thread::sleep(delay);
            }
        }
        sink.draw(&Frame::from_universe(universe))?;

        debug!(
            "finished at generation {} with {} live cells",
            universe.generation(),
            universe.living_count()
        );
        Ok(())
    }
}
