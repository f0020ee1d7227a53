//! Display and output formatting utilities

use crate::driver::Frame;
use crate::game_of_life::Universe;
use itertools::Itertools;

/// Text renderings of packed frames
pub struct GridFormatter;

impl GridFormatter {
    /// One character per cell
    pub fn format_frame_compact(frame: &Frame<'_>) -> String {
        let mut output = String::with_capacity(frame.height * (frame.width + 1) * 3);
        for row in 0..frame.height {
            for col in 0..frame.width {
                output.push(if frame.is_alive(row, col) { '█' } else { '·' });
            }
            output.push('\n');
        }
        output
    }

    /// Two characters per cell, with row and column numbers
    pub fn format_frame_with_coords(frame: &Frame<'_>) -> String {
        let mut output = String::new();

        output.push_str("   ");
        for col in 0..frame.width {
            output.push_str(&format!("{:2}", col % 10));
        }
        output.push('\n');

        for row in 0..frame.height {
            output.push_str(&format!("{:2} ", row % 100));
            for col in 0..frame.width {
                output.push_str(if frame.is_alive(row, col) { "██" } else { "··" });
            }
            output.push('\n');
        }

        output
    }

    /// Short statistics block for a universe
    pub fn format_statistics(universe: &Universe) -> String {
        let total = universe.width() * universe.height();
        let living = universe.living_count();
        let preview = universe
            .living_cells()
            .iter()
            .take(8)
            .map(|(row, col)| format!("({}, {})", row, col))
            .join(", ");

        let mut output = String::new();
        output.push_str("Grid Statistics:\n");
        output.push_str(&format!("  Size: {}x{}\n", universe.width(), universe.height()));
        output.push_str(&format!("  Generation: {}\n", universe.generation()));
        output.push_str(&format!("  Living cells: {}\n", living));
        output.push_str(&format!(
            "  Density: {:.1}%\n",
            living as f64 / total as f64 * 100.0
        ));
        output.push_str(&format!("  Packed size: {} bytes\n", universe.cells().len()));
        if living > 0 {
            let more = if living > 8 { ", ..." } else { "" };
            output.push_str(&format!("  First live cells: {}{}\n", preview, more));
        }
        output
    }
}

/// Color output utilities
pub struct ColorOutput;

impl ColorOutput {
    /// Format text with color (if terminal supports it)
    pub fn colored(text: &str, color: Color) -> String {
        if Self::supports_color() {
            format!("\x1b[{}m{}\x1b[0m", color.code(), text)
        } else {
            text.to_string()
        }
    }

    fn supports_color() -> bool {
        std::env::var("NO_COLOR").is_err() && (std::env::var("TERM").unwrap_or_default() != "dumb")
    }

    pub fn success(text: &str) -> String {
        Self::colored(text, Color::Green)
    }

    pub fn error(text: &str) -> String {
        Self::colored(text, Color::Red)
    }

    pub fn warning(text: &str) -> String {
        Self::colored(text, Color::Yellow)
    }

    pub fn info(text: &str) -> String {
        Self::colored(text, Color::Blue)
    }
}

#[derive(Debug, Clone, Copy)]
pub enum Color {
    Red,
    Green,
    Yellow,
    Blue,
}

impl Color {
    fn code(self) -> u8 {
        match self {
            Color::Red => 31,
            Color::Green => 32,
            Color::Yellow => 33,
            Color::Blue => 34,
        }
    }
}
