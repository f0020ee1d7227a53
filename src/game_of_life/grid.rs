//! Toroidal bit-packed universe

use super::packed::{byte_len, PackedCells};
use super::pattern::InitialPattern;
use super::rules::GameOfLifeRules;
use crate::error::{EngineError, Result};
use itertools::iproduct;
use log::{debug, trace};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Grids with at least this many cells compute `tick` in parallel by default
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1 << 16;

#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Dead = 0,
    Alive = 1,
}

impl From<bool> for Cell {
    fn from(alive: bool) -> Self {
        if alive {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

impl From<u8> for Cell {
    fn from(x: u8) -> Self {
        if x == 1 {
            Cell::Alive
        } else {
            Cell::Dead
        }
    }
}

/// A Game of Life grid whose edges wrap around to the opposite side.
///
/// State is held in two bit-packed buffers. `front` names the current
/// generation; `tick` writes the next generation into the other buffer and
/// flips `front`, so stepping never allocates.
#[derive(Debug, Clone)]
pub struct Universe {
    width: usize,
    height: usize,
    buffers: [PackedCells; 2],
    front: usize,
    generation: u64,
    parallel_threshold: usize,
}

/// Owned copy of a universe's state, for serialization
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub width: usize,
    pub height: usize,
    pub generation: u64,
    pub living: Vec<(usize, usize)>,
    pub cells: Vec<u8>,
}

impl Universe {
    /// Create a universe seeded with `pattern`, or with [`InitialPattern::default`]
    /// when none is given.
    pub fn new(width: usize, height: usize, pattern: Option<&InitialPattern>) -> Result<Self> {
        let size = match width.checked_mul(height) {
            Some(size) if width > 0 && height > 0 => size,
            _ => return Err(EngineError::InvalidDimension { width, height }),
        };

        let default_pattern = InitialPattern::default();
        let pattern = pattern.unwrap_or(&default_pattern);

        let mut front = PackedCells::new(size);
        pattern.apply(&mut front, width, height)?;

        debug!(
            "created {}x{} universe ({} bytes per buffer, {} alive)",
            width,
            height,
            byte_len(size),
            front.count_ones()
        );

        Ok(Self {
            width,
            height,
            buffers: [front, PackedCells::new(size)],
            front: 0,
            generation: 0,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        })
    }

    /// Create a universe with every cell dead
    pub fn empty(width: usize, height: usize) -> Result<Self> {
        Self::new(width, height, Some(&InitialPattern::Empty))
    }

    /// Create a universe from rows of booleans. All rows must have the same length.
    pub fn from_rows(rows: Vec<Vec<bool>>) -> anyhow::Result<Self> {
        if rows.is_empty() {
            anyhow::bail!("Grid cannot be empty");
        }

        let height = rows.len();
        let width = rows[0].len();

        if width == 0 {
            anyhow::bail!("Grid width cannot be zero");
        }

        for (i, row) in rows.iter().enumerate() {
            if row.len() != width {
                anyhow::bail!("Row {} has length {}, expected {}", i, row.len(), width);
            }
        }

        let mut universe = Self::empty(width, height)?;
        let front = universe.front_mut();
        for (i, alive) in rows.into_iter().flatten().enumerate() {
            front.set(i, alive);
        }
        Ok(universe)
    }

    /// Set the cell count at or above which `tick` fans out across threads.
    /// Zero keeps every tick on the calling thread.
    pub fn with_parallel_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of ticks since construction
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Borrow the packed state of the current generation.
    ///
    /// Bit `row * width + col` of the slice (byte `i / 8`, mask `1 << (i % 8)`)
    /// is set when that cell is alive. The slice is always
    /// `ceil(width * height / 8)` bytes long and unused trailing bits are zero.
    /// The borrow ends before the next `tick` or `toggle_cell` can run.
    pub fn cells(&self) -> &[u8] {
        self.front().as_bytes()
    }

    /// Advance one generation.
    pub fn tick(&mut self) {
        let (width, height) = (self.width, self.height);
        let parallel = self.parallel_threshold > 0 && width * height >= self.parallel_threshold;

        let (current, next) = self.split_buffers();
        let bytes = next.as_bytes_mut();
        if parallel {
            bytes
                .par_iter_mut()
                .enumerate()
                .for_each(|(i, byte)| *byte = next_byte(current, width, height, i));
        } else {
            for (i, byte) in bytes.iter_mut().enumerate() {
                *byte = next_byte(current, width, height, i);
            }
        }

        self.front ^= 1;
        self.generation += 1;
        trace!("generation {} (parallel: {})", self.generation, parallel);
    }

    /// Flip a single cell regardless of the rule.
    pub fn toggle_cell(&mut self, row: usize, col: usize) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.front_mut().flip(idx);
        Ok(())
    }

    pub fn set_cell(&mut self, row: usize, col: usize, cell: Cell) -> Result<()> {
        let idx = self.checked_index(row, col)?;
        self.front_mut().set(idx, cell == Cell::Alive);
        Ok(())
    }

    /// Mark every listed cell alive. Nothing is written unless all coordinates are in bounds.
    pub fn set_cells(&mut self, cells: &[(usize, usize)]) -> Result<()> {
        let indices = cells
            .iter()
            .map(|&(row, col)| self.checked_index(row, col))
            .collect::<Result<Vec<_>>>()?;

        let front = self.front_mut();
        for idx in indices {
            front.set(idx, true);
        }
        Ok(())
    }

    pub fn is_alive(&self, row: usize, col: usize) -> Result<bool> {
        let idx = self.checked_index(row, col)?;
        Ok(self.front().get(idx))
    }

    /// Every cell of the current generation, row-major
    pub fn get_cells(&self) -> Vec<Cell> {
        let front = self.front();
        (0..front.len()).map(|i| Cell::from(front.get(i))).collect()
    }

    /// Coordinates of live cells, row-major
    pub fn living_cells(&self) -> Vec<(usize, usize)> {
        let front = self.front();
        iproduct!(0..self.height, 0..self.width)
            .filter(|&(row, col)| front.get(row * self.width + col))
            .collect()
    }

    pub fn living_count(&self) -> usize {
        self.front().count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.living_count() == 0
    }

    /// Kill every cell in place
    pub fn clear(&mut self) {
        self.front_mut().clear();
    }

    /// Live neighbors of `(row, col)` in the toroidal Moore neighborhood
    pub fn live_neighbor_count(&self, row: usize, col: usize) -> Result<u8> {
        self.checked_index(row, col)?;
        Ok(live_neighbor_count(
            self.front(),
            self.width,
            self.height,
            row,
            col,
        ))
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            width: self.width,
            height: self.height,
            generation: self.generation,
            living: self.living_cells(),
            cells: self.cells().to_vec(),
        }
    }

    #[inline]
    fn checked_index(&self, row: usize, col: usize) -> Result<usize> {
        if row >= self.height || col >= self.width {
            return Err(EngineError::IndexOutOfBounds {
                row,
                col,
                width: self.width,
                height: self.height,
            });
        }
        Ok(row * self.width + col)
    }

    #[inline]
    fn front(&self) -> &PackedCells {
        &self.buffers[self.front]
    }

    #[inline]
    fn front_mut(&mut self) -> &mut PackedCells {
        &mut self.buffers[self.front]
    }

    /// (current, next)
    fn split_buffers(&mut self) -> (&PackedCells, &mut PackedCells) {
        let [a, b] = &mut self.buffers;
        if self.front == 0 {
            (&*a, b)
        } else {
            (&*b, a)
        }
    }
}

/// Count live neighbors with wrap-around.
///
/// Offsets are biased by `size - 1` so the arithmetic stays unsigned; the
/// centre position is skipped by position, not by value, so on a grid one
/// cell wide a cell sees its own wrapped copies as neighbors.
fn live_neighbor_count(
    cells: &PackedCells,
    width: usize,
    height: usize,
    row: usize,
    col: usize,
) -> u8 {
    let mut count = 0;
    for dr in 0..3 {
        let neighbor_row = (row + height - 1 + dr) % height;
        for dc in 0..3 {
            if dr == 1 && dc == 1 {
                continue;
            }
            let neighbor_col = (col + width - 1 + dc) % width;
            count += cells.get(neighbor_row * width + neighbor_col) as u8;
        }
    }
    debug_assert!(count <= GameOfLifeRules::max_neighbor_count());
    count
}

/// Compute one byte (up to eight cells) of the next generation
fn next_byte(current: &PackedCells, width: usize, height: usize, byte_index: usize) -> u8 {
    let start = byte_index * 8;
    let end = (start + 8).min(current.len());

    let mut out = 0u8;
    for idx in start..end {
        let row = idx / width;
        let col = idx % width;
        let neighbors = live_neighbor_count(current, width, height, row, col);
        if GameOfLifeRules::should_be_alive(current.get(idx), neighbors) {
            out |= 1 << (idx - start);
        }
    }
    out
}

impl fmt::Display for Universe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let front = self.front();
        for row in 0..self.height {
            for col in 0..self.width {
                let symbol = if front.get(row * self.width + col) { '■' } else { '□' };
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
