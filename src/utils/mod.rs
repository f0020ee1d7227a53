//! Output helpers shared by the CLI and frame sinks

pub mod display;

pub use display::{Color, ColorOutput, GridFormatter};
