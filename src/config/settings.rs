//! Configuration settings for the life simulator

use crate::game_of_life::{load_universe_from_file, InitialPattern, Universe, DEFAULT_PARALLEL_THRESHOLD};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub input: InputConfig,
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub width: usize,
    pub height: usize,
    pub generations: usize,
    #[serde(default)]
    pub pattern: InitialPattern,
    #[serde(default = "default_parallel_threshold")]
    pub parallel_threshold: usize,
}

fn default_parallel_threshold() -> usize {
    DEFAULT_PARALLEL_THRESHOLD
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    /// Plain-text pattern; when set, its dimensions replace `width` and `height`
    pub pattern_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
    pub frame_delay_ms: u64,
    /// Base directory for relative save paths
    pub output_directory: PathBuf,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
    Visual,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            simulation: SimulationConfig {
                width: 64,
                height: 64,
                generations: 100,
                pattern: InitialPattern::default(),
                parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            },
            input: InputConfig::default(),
            output: OutputConfig {
                format: OutputFormat::Text,
                frame_delay_ms: 0,
                output_directory: PathBuf::from("output"),
            },
        }
    }
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file(path: &PathBuf) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = serde_yaml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        settings.validate()?;
        Ok(settings)
    }

    /// Save settings to a YAML file
    pub fn to_file(&self, path: &PathBuf) -> Result<()> {
        let content = serde_yaml::to_string(self).context("Failed to serialize settings")?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate the settings
    pub fn validate(&self) -> Result<()> {
        if let Some(ref pattern_file) = self.input.pattern_file {
            if !pattern_file.exists() {
                anyhow::bail!("Pattern file does not exist: {}", pattern_file.display());
            }
        } else if self.simulation.width == 0 || self.simulation.height == 0 {
            anyhow::bail!(
                "Grid dimensions must be positive, got {}x{}",
                self.simulation.width,
                self.simulation.height
            );
        }

        Ok(())
    }

    /// Merge settings with command line overrides
    pub fn merge_with_cli(&mut self, cli_overrides: &CliOverrides) {
        if let Some(width) = cli_overrides.width {
            self.simulation.width = width;
        }
        if let Some(height) = cli_overrides.height {
            self.simulation.height = height;
        }
        if let Some(generations) = cli_overrides.generations {
            self.simulation.generations = generations;
        }
        if let Some(ref pattern_file) = cli_overrides.pattern_file {
            self.input.pattern_file = Some(pattern_file.clone());
        }
        if let Some(format) = cli_overrides.format {
            self.output.format = format;
        }
        if let Some(delay) = cli_overrides.frame_delay_ms {
            self.output.frame_delay_ms = delay;
        }
        if let Some(ref output_dir) = cli_overrides.output_dir {
            self.output.output_directory = output_dir.clone();
        }
    }

    /// Place a relative output path under `output.output_directory`; absolute paths are kept
    pub fn resolve_output_path(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.output.output_directory.join(path)
        }
    }

    /// Build the starting universe described by these settings
    pub fn build_universe(&self) -> Result<Universe> {
        let universe = match self.input.pattern_file {
            Some(ref path) => load_universe_from_file(path)?,
            None => Universe::new(
                self.simulation.width,
                self.simulation.height,
                Some(&self.simulation.pattern),
            )
            .context("Failed to construct universe from settings")?,
        };
        Ok(universe.with_parallel_threshold(self.simulation.parallel_threshold))
    }
}

/// Command line overrides for settings
#[derive(Debug, Default)]
pub struct CliOverrides {
    pub width: Option<usize>,
    pub height: Option<usize>,
    pub generations: Option<usize>,
    pub pattern_file: Option<PathBuf>,
    pub format: Option<OutputFormat>,
    pub frame_delay_ms: Option<u64>,
    pub output_dir: Option<PathBuf>,
}
