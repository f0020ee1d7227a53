//! Command line driver for the toroidal life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{debug, LevelFilter};
use simple_logger::SimpleLogger;
use std::path::PathBuf;
use std::time::Instant;
use toroidal_life::{
    config::{CliOverrides, OutputFormat, Settings},
    game_of_life::{create_example_patterns, load_universe_from_file, save_universe_to_file},
    run_simulation,
    utils::{ColorOutput, GridFormatter},
    InitialPattern,
};

#[derive(Parser)]
#[command(name = "toroidal_life")]
#[command(about = "Bit-packed toroidal Game of Life")]
#[command(version)]
struct Cli {
    /// Verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Visual,
}

impl From<FormatArg> for OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => OutputFormat::Text,
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Visual => OutputFormat::Visual,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Run a simulation and print every frame
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Grid width (overrides config)
        #[arg(long)]
        width: Option<usize>,

        /// Grid height (overrides config)
        #[arg(long)]
        height: Option<usize>,

        /// Number of generations (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Starting pattern file (overrides config)
        #[arg(short, long)]
        pattern: Option<PathBuf>,

        /// Frame output format (overrides config)
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,

        /// Delay between frames in milliseconds (overrides config)
        #[arg(short, long)]
        delay: Option<u64>,

        /// Base directory for relative --save paths (overrides config)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Write the final generation to this pattern file
        #[arg(short, long)]
        save: Option<PathBuf>,
    },

    /// Create example configuration and pattern files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },

    /// Show a pattern file and its statistics
    Inspect {
        /// Pattern file
        pattern: PathBuf,

        /// Also show the state after this many generations
        #[arg(short, long, default_value_t = 0)]
        generations: usize,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let level = if cli.verbose { LevelFilter::Debug } else { LevelFilter::Warn };
    SimpleLogger::new()
        .with_level(level)
        .init()
        .context("Failed to initialize logger")?;
    debug!("toroidal_life v{}", env!("CARGO_PKG_VERSION"));

    match cli.command {
        Commands::Run {
            config,
            width,
            height,
            generations,
            pattern,
            format,
            delay,
            output,
            save,
        } => {
            let overrides = CliOverrides {
                width,
                height,
                generations,
                pattern_file: pattern,
                format: format.map(OutputFormat::from),
                frame_delay_ms: delay,
                output_dir: output,
            };
            run_command(config, overrides, save)
        }
        Commands::Setup { directory, force } => setup_command(directory, force),
        Commands::Inspect {
            pattern,
            generations,
        } => inspect_command(pattern, generations),
    }
}

fn load_settings(config_path: &PathBuf) -> Result<Settings> {
    if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))
    } else {
        eprintln!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Ok(Settings::default())
    }
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, save: Option<PathBuf>) -> Result<()> {
    let mut settings = load_settings(&config_path)?;
    settings.merge_with_cli(&overrides);
    settings
        .validate()
        .context("Configuration validation failed")?;

    let start_time = Instant::now();
    let stdout = std::io::stdout();
    let universe = run_simulation(&settings, stdout.lock())?;
    debug!(
        "{} generations in {:.3}s",
        universe.generation(),
        start_time.elapsed().as_secs_f64()
    );

    if let Some(path) = save {
        let path = settings.resolve_output_path(&path);
        save_universe_to_file(&universe, &path)?;
        eprintln!(
            "{}",
            ColorOutput::success(&format!("Final state saved to {}", path.display()))
        );
    }

    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    let patterns_dir = directory.join("patterns");

    for dir in [&config_dir, &patterns_dir] {
        std::fs::create_dir_all(dir)
            .with_context(|| format!("Failed to create directory {}", dir.display()))?;
    }

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    create_example_patterns(&patterns_dir).context("Failed to create example patterns")?;
    println!("Created example patterns in: {}", patterns_dir.display());

    let examples_dir = config_dir.join("examples");

    let mut glider = Settings::default();
    glider.simulation.generations = 32;
    glider.input.pattern_file = Some(PathBuf::from("patterns/glider.txt"));
    glider.output.frame_delay_ms = 100;
    glider.to_file(&examples_dir.join("glider.yaml"))?;

    let mut blinker = Settings::default();
    blinker.simulation.width = 7;
    blinker.simulation.height = 7;
    blinker.simulation.generations = 4;
    blinker.simulation.pattern = InitialPattern::Live {
        cells: vec![(3, 2), (3, 3), (3, 4)],
    };
    blinker.output.format = OutputFormat::Visual;
    blinker.to_file(&examples_dir.join("blinker.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));

    Ok(())
}

fn inspect_command(pattern_path: PathBuf, generations: usize) -> Result<()> {
    let mut universe = load_universe_from_file(&pattern_path)
        .with_context(|| format!("Failed to load pattern from {}", pattern_path.display()))?;

    let frame = toroidal_life::driver::Frame::from_universe(&universe);
    println!("Pattern ({}x{}):", universe.width(), universe.height());
    println!("{}", GridFormatter::format_frame_with_coords(&frame));
    println!("{}", GridFormatter::format_statistics(&universe));

    if generations > 0 {
        for _ in 0..generations {
            universe.tick();
        }
        let frame = toroidal_life::driver::Frame::from_universe(&universe);
        println!("After {} generations:", generations);
        println!("{}", GridFormatter::format_frame_with_coords(&frame));
        println!("{}", GridFormatter::format_statistics(&universe));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::try_parse_from([
            "toroidal_life",
            "run",
            "--config",
            "test.yaml",
            "--generations",
            "5",
            "--format",
            "json",
        ]);
        assert!(cli.is_ok());

        let cli = Cli::try_parse_from(["toroidal_life", "run", "--format", "svg"]);
        assert!(cli.is_err());
    }

    #[test]
    fn test_setup_command() {
        let temp_dir = tempdir().unwrap();
        setup_command(temp_dir.path().to_path_buf(), false).unwrap();

        assert!(temp_dir.path().join("config/default.yaml").exists());
        assert!(temp_dir.path().join("config/examples/blinker.yaml").exists());
        assert!(temp_dir.path().join("patterns/glider.txt").exists());

        let blinker =
            Settings::from_file(&temp_dir.path().join("config/examples/blinker.yaml")).unwrap();
        assert_eq!(blinker.simulation.width, 7);
    }

    #[test]
    fn test_run_command_saves_final_state() {
        let temp_dir = tempdir().unwrap();
        let pattern = temp_dir.path().join("blinker.txt");
        std::fs::write(&pattern, "00000\n00000\n01110\n00000\n00000\n").unwrap();
        let output_dir = temp_dir.path().join("out");

        let overrides = CliOverrides {
            generations: Some(1),
            pattern_file: Some(pattern),
            output_dir: Some(output_dir.clone()),
            ..Default::default()
        };
        run_command(
            temp_dir.path().join("missing.yaml"),
            overrides,
            Some(PathBuf::from("states/final.txt")),
        )
        .unwrap();

        let saved = std::fs::read_to_string(output_dir.join("states/final.txt")).unwrap();
        assert_eq!(saved, "00000\n00100\n00100\n00100\n00000\n");
    }
}
