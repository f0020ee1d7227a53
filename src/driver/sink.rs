//! Frame sinks writing to any `io::Write`

use super::frame::{Frame, FrameSink};
use crate::config::OutputFormat;
use crate::utils::GridFormatter;
use anyhow::{Context, Result};
use std::io::Write;

/// Writes each frame as text, compact or with coordinates
pub struct TerminalSink<W: Write> {
    out: W,
    with_coords: bool,
}

impl<W: Write> TerminalSink<W> {
    pub fn new(out: W, with_coords: bool) -> Self {
        Self { out, with_coords }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for TerminalSink<W> {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        let body = if self.with_coords {
            GridFormatter::format_frame_with_coords(frame)
        } else {
            GridFormatter::format_frame_compact(frame)
        };
        writeln!(
            self.out,
            "Generation {} (Living: {}):\n{}",
            frame.generation,
            frame.living_count(),
            body
        )
        .context("Failed to write frame")?;
        Ok(())
    }
}

/// Writes each frame as one JSON [`Snapshot`](crate::game_of_life::Snapshot) per line
pub struct JsonSink<W: Write> {
    out: W,
}

impl<W: Write> JsonSink<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> FrameSink for JsonSink<W> {
    fn draw(&mut self, frame: &Frame<'_>) -> Result<()> {
        serde_json::to_writer(&mut self.out, &frame.snapshot()).context("Failed to serialize frame")?;
        writeln!(self.out).context("Failed to write frame")?;
        Ok(())
    }
}

/// Pick the sink matching an output format
pub fn sink_for<'w, W: Write + 'w>(format: OutputFormat, out: W) -> Box<dyn FrameSink + 'w> {
    match format {
        OutputFormat::Text => Box::new(TerminalSink::new(out, false)),
        OutputFormat::Visual => Box::new(TerminalSink::new(out, true)),
        OutputFormat::Json => Box::new(JsonSink::new(out)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game_of_life::{Snapshot, Universe};

    fn blinker() -> Universe {
        let mut universe = Universe::empty(3, 3).unwrap();
        universe.set_cells(&[(1, 0), (1, 1), (1, 2)]).unwrap();
        universe
    }

    #[test]
    fn test_terminal_sink() {
        let universe = blinker();
        let mut sink = TerminalSink::new(Vec::new(), false);
        sink.draw(&Frame::from_universe(&universe)).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        assert!(text.starts_with("Generation 0 (Living: 3):\n"));
        assert!(text.contains("···\n███\n···\n"));
    }

    #[test]
    fn test_json_sink_writes_snapshots() {
        let mut universe = Universe::empty(5, 5).unwrap();
        universe.set_cells(&[(2, 1), (2, 2), (2, 3)]).unwrap();
        let mut sink = JsonSink::new(Vec::new());
        sink.draw(&Frame::from_universe(&universe)).unwrap();
        universe.tick();
        sink.draw(&Frame::from_universe(&universe)).unwrap();

        let text = String::from_utf8(sink.into_inner()).unwrap();
        let snapshots: Vec<Snapshot> = text
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect();
        assert_eq!(snapshots.len(), 2);

        assert_eq!(snapshots[0].generation, 0);
        assert_eq!(snapshots[0].width, 5);
        assert_eq!(snapshots[0].living, vec![(2, 1), (2, 2), (2, 3)]);
        assert_eq!(snapshots[0].cells, vec![0, 0b0011_1000, 0, 0]);

        assert_eq!(snapshots[1], universe.snapshot());
        assert_eq!(snapshots[1].living, vec![(1, 2), (2, 2), (3, 2)]);
    }

    #[test]
    fn test_sink_for_format() {
        let universe = blinker();
        let mut out = Vec::new();
        {
            let mut sink = sink_for(OutputFormat::Visual, &mut out);
            sink.draw(&Frame::from_universe(&universe)).unwrap();
        }
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("    0 1 2\n"));
        assert!(text.contains(" 1 ██████\n"));
    }
}
