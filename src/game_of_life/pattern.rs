//! Deterministic initial patterns

use super::packed::PackedCells;
use crate::error::{EngineError, Result};
use serde::{Deserialize, Serialize};

/// How a freshly constructed universe is seeded.
///
/// Every variant is deterministic so repeated runs start from the same state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InitialPattern {
    /// All cells dead
    Empty,
    /// Cell with row-major index `i` is alive when `i % m == 0` for any listed `m`.
    /// Zero moduli are ignored.
    Modular { moduli: Vec<usize> },
    /// Exactly the listed `(row, col)` cells are alive
    Live { cells: Vec<(usize, usize)> },
}

impl Default for InitialPattern {
    fn default() -> Self {
        InitialPattern::Modular { moduli: vec![2, 7] }
    }
}

impl InitialPattern {
    /// Write this pattern into `cells`, which must be all-dead and sized `width * height`.
    pub(crate) fn apply(&self, cells: &mut PackedCells, width: usize, height: usize) -> Result<()> {
        match self {
            InitialPattern::Empty => {}
            InitialPattern::Modular { moduli } => {
                let moduli: Vec<usize> = moduli.iter().copied().filter(|&m| m > 0).collect();
                for i in 0..cells.len() {
                    if moduli.iter().any(|&m| i % m == 0) {
                        cells.set(i, true);
                    }
                }
            }
            InitialPattern::Live { cells: live } => {
                if let Some(&(row, col)) = live.iter().find(|&&(r, c)| r >= height || c >= width) {
                    return Err(EngineError::IndexOutOfBounds {
                        row,
                        col,
                        width,
                        height,
                    });
                }
                for &(row, col) in live {
                    cells.set(row * width + col, true);
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_modular_pattern() {
        let mut cells = PackedCells::new(16);
        InitialPattern::default().apply(&mut cells, 4, 4).unwrap();
        let alive: Vec<usize> = cells.ones().collect();
        assert_eq!(alive, vec![0, 2, 4, 6, 7, 8, 10, 12, 14]);
    }

    #[test]
    fn test_zero_modulus_ignored() {
        let mut cells = PackedCells::new(6);
        InitialPattern::Modular { moduli: vec![0, 3] }
            .apply(&mut cells, 3, 2)
            .unwrap();
        assert_eq!(cells.ones().collect::<Vec<_>>(), vec![0, 3]);
    }

    #[test]
    fn test_live_pattern_rejects_out_of_range() {
        let mut cells = PackedCells::new(9);
        let pattern = InitialPattern::Live {
            cells: vec![(0, 0), (1, 3)],
        };
        let err = pattern.apply(&mut cells, 3, 3).unwrap_err();
        assert_eq!(
            err,
            EngineError::IndexOutOfBounds {
                row: 1,
                col: 3,
                width: 3,
                height: 3
            }
        );
        assert_eq!(cells.count_ones(), 0);
    }

    #[test]
    fn test_yaml_representation() {
        let pattern: InitialPattern =
            serde_yaml::from_str("kind: live\ncells:\n  - [0, 1]\n  - [2, 2]\n").unwrap();
        assert_eq!(
            pattern,
            InitialPattern::Live {
                cells: vec![(0, 1), (2, 2)]
            }
        );

        let empty: InitialPattern = serde_yaml::from_str("kind: empty").unwrap();
        assert_eq!(empty, InitialPattern::Empty);
    }
}
