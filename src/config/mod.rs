//! Configuration management for the life simulator

pub mod settings;

pub use settings::{
    CliOverrides, InputConfig, OutputConfig, OutputFormat, Settings, SimulationConfig,
};
