//! Host-side frame loop around the engine

pub mod frame;
pub mod sink;

pub use frame::{Frame, FrameDriver, FrameSink};
pub use sink::{sink_for, JsonSink, TerminalSink};
