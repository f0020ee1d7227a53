//! Plain-text pattern files
//!
//! Each line is a row, with '1' for alive cells and '0' for dead cells.

use super::Universe;
use anyhow::{Context, Result};
use std::path::Path;

/// Load a universe from a text file
pub fn load_universe_from_file<P: AsRef<Path>>(path: P) -> Result<Universe> {
    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read pattern file: {}", path.as_ref().display()))?;

    parse_universe_from_string(&content)
        .with_context(|| format!("Failed to parse pattern file: {}", path.as_ref().display()))
}

/// Parse a universe from its text representation
pub fn parse_universe_from_string(content: &str) -> Result<Universe> {
    let lines: Vec<&str> = content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty())
        .collect();

    if lines.is_empty() {
        anyhow::bail!("Pattern is empty or contains no valid rows");
    }

    let width = lines[0].len();
    let mut rows = Vec::with_capacity(lines.len());

    for (row_idx, line) in lines.iter().enumerate() {
        if line.len() != width {
            anyhow::bail!(
                "Row {} has length {}, expected {} (all rows must have the same length)",
                row_idx,
                line.len(),
                width
            );
        }

        let row = line
            .chars()
            .enumerate()
            .map(|(col_idx, ch)| match ch {
                '0' => Ok(false),
                '1' => Ok(true),
                _ => anyhow::bail!(
                    "Invalid character '{}' at position ({}, {}). Only '0' and '1' are allowed",
                    ch,
                    row_idx,
                    col_idx
                ),
            })
            .collect::<Result<Vec<bool>>>()?;
        rows.push(row);
    }

    Universe::from_rows(rows)
}

/// Save the current generation of a universe to a text file
pub fn save_universe_to_file<P: AsRef<Path>>(universe: &Universe, path: P) -> Result<()> {
    let content = universe_to_string(universe);

    if let Some(parent) = path.as_ref().parent() {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
    }

    std::fs::write(&path, content)
        .with_context(|| format!("Failed to write pattern to file: {}", path.as_ref().display()))?;

    Ok(())
}

pub fn universe_to_string(universe: &Universe) -> String {
    let mut result = String::with_capacity(universe.height() * (universe.width() + 1));
    let cells = universe.get_cells();

    for row in cells.chunks(universe.width()) {
        for &cell in row {
            result.push(if cell == super::Cell::Alive { '1' } else { '0' });
        }
        result.push('\n');
    }

    result
}

/// Write the bundled example patterns into `output_dir`
pub fn create_example_patterns<P: AsRef<Path>>(output_dir: P) -> Result<()> {
    let dir = output_dir.as_ref();
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create directory: {}", dir.display()))?;

    let examples = [
        ("glider.txt", "01000000\n00100000\n11100000\n00000000\n00000000\n00000000\n00000000\n00000000\n"),
        ("blinker.txt", "00000\n00000\n01110\n00000\n00000\n"),
        ("block.txt", "0000\n0110\n0110\n0000\n"),
        ("beacon.txt", "000000\n011000\n011000\n000110\n000110\n000000\n"),
    ];

    for (name, content) in examples {
        std::fs::write(dir.join(name), content)
            .with_context(|| format!("Failed to write {}", name))?;
    }

    Ok(())
}
