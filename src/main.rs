//! Terminal driver for the Game of Life engine

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use game_of_life_engine::{
    build_grid,
    automaton::SeedPattern,
    config::{CliOverrides, Settings},
    runner::SimulationRunner,
    utils::{save_snapshot, ColorOutput, GridFormatter},
};
use std::path::{Path, PathBuf};
use std::time::Duration;

#[derive(Parser)]
#[command(name = "game_of_life_engine")]
#[command(about = "Conway's Game of Life simulation engine")]
#[command(version = "0.1.0")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the simulation on a fixed cadence
    Run {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<SeedPattern>,

        /// Grid rows (overrides config)
        #[arg(long)]
        rows: Option<usize>,

        /// Grid columns (overrides config)
        #[arg(long)]
        cols: Option<usize>,

        /// Number of generations to run (overrides config)
        #[arg(short, long)]
        generations: Option<usize>,

        /// Step interval in milliseconds (overrides config)
        #[arg(short, long)]
        interval_ms: Option<u64>,

        /// Cells placed by the random pattern (overrides config)
        #[arg(long)]
        random_cells: Option<usize>,

        /// Save per-generation snapshots to this directory
        #[arg(short, long)]
        snapshots: Option<PathBuf>,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Advance a seeded grid without sleeping and print the result
    Step {
        /// Configuration file path
        #[arg(short, long, default_value = "config/default.yaml")]
        config: PathBuf,

        /// Seed pattern (overrides config)
        #[arg(short, long)]
        pattern: Option<SeedPattern>,

        /// Generations to advance
        #[arg(short, long, default_value_t = 1)]
        generations: usize,

        /// Print every intermediate generation
        #[arg(long)]
        show_evolution: bool,
    },

    /// List the recognized seed patterns
    Patterns,

    /// Create example configuration files
    Setup {
        /// Directory to create files in
        #[arg(short, long, default_value = ".")]
        directory: PathBuf,

        /// Force overwrite existing files
        #[arg(short, long)]
        force: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Run {
            config,
            pattern,
            rows,
            cols,
            generations,
            interval_ms,
            random_cells,
            snapshots,
            verbose,
        } => {
            let overrides = CliOverrides {
                rows,
                cols,
                pattern,
                random_cells,
                generations,
                interval_ms,
                snapshot_directory: snapshots,
            };
            run_command(config, overrides, verbose)
        }
        Commands::Step {
            config,
            pattern,
            generations,
            show_evolution,
        } => step_command(config, pattern, generations, show_evolution),
        Commands::Patterns => patterns_command(),
        Commands::Setup { directory, force } => setup_command(directory, force),
    }
}

/// Load settings from the given path, falling back to defaults when the
/// file does not exist, then apply CLI overrides.
fn load_settings(config_path: &Path, overrides: &CliOverrides) -> Result<Settings> {
    let mut settings = if config_path.exists() {
        Settings::from_file(config_path)
            .with_context(|| format!("Failed to load config from {}", config_path.display()))?
    } else {
        println!(
            "{}",
            ColorOutput::warning(&format!(
                "Config file {} not found, using defaults",
                config_path.display()
            ))
        );
        Settings::default()
    };

    settings.merge_with_cli(overrides);
    settings.validate().context("Configuration validation failed")?;
    Ok(settings)
}

fn run_command(config_path: PathBuf, overrides: CliOverrides, verbose: bool) -> Result<()> {
    let settings = load_settings(&config_path, &overrides)?;

    if verbose {
        println!("Configuration:");
        println!("  Grid: {}x{}", settings.grid.rows, settings.grid.cols);
        println!("  Pattern: {}", settings.simulation.pattern);
        println!("  Interval: {}ms", settings.simulation.interval_ms);
        match settings.simulation.generations {
            Some(generations) => println!("  Generations: {}", generations),
            None => println!("  Generations: unbounded"),
        }
        println!();
    }

    let grid = build_grid(&settings).context("Failed to build grid")?;
    let cols = settings.grid.cols;

    println!(
        "{}",
        ColorOutput::info(&format!(
            "Seeded {}x{} grid with '{}'",
            settings.grid.rows, settings.grid.cols, settings.simulation.pattern
        ))
    );
    println!("Generation 0:");
    println!("{}", GridFormatter::format_statuses_colored(&grid.cell_statuses(), cols));

    let interval = Duration::from_millis(settings.simulation.interval_ms);
    let mut runner = SimulationRunner::new(grid, interval);
    let output = settings.output.clone();

    runner.run(settings.simulation.generations, |generation, snapshot| {
        println!("Generation {}:", generation);
        println!("{}", GridFormatter::format_statuses_colored(snapshot, cols));

        if output.save_snapshots {
            if let Err(error) = save_snapshot(
                snapshot,
                cols,
                generation,
                &output.snapshot_directory,
                output.format,
            ) {
                eprintln!("{}", ColorOutput::warning(&format!("Snapshot not saved: {error:#}")));
            }
        }

        true
    });

    println!(
        "{}",
        ColorOutput::success(&format!("Stopped after {} generation(s)", runner.generation()))
    );
    Ok(())
}

fn step_command(
    config_path: PathBuf,
    pattern: Option<SeedPattern>,
    generations: usize,
    show_evolution: bool,
) -> Result<()> {
    let overrides = CliOverrides {
        pattern,
        ..Default::default()
    };
    let settings = load_settings(&config_path, &overrides)?;

    let mut grid = build_grid(&settings).context("Failed to build grid")?;
    let cols = settings.grid.cols;

    println!("Generation 0 ({} living):", grid.living_count());
    println!("{}", GridFormatter::format_statuses(&grid.cell_statuses(), cols));

    for generation in 1..=generations {
        grid.live();
        if show_evolution || generation == generations {
            println!("Generation {} ({} living):", generation, grid.living_count());
            println!("{}", GridFormatter::format_statuses(&grid.cell_statuses(), cols));
        }
    }

    Ok(())
}

fn patterns_command() -> Result<()> {
    println!("Recognized seed patterns:");
    for pattern in SeedPattern::ALL {
        println!("  {}", pattern);
    }
    Ok(())
}

fn setup_command(directory: PathBuf, force: bool) -> Result<()> {
    println!("{}", ColorOutput::info("Setting up project structure..."));

    let config_dir = directory.join("config");
    std::fs::create_dir_all(&config_dir)
        .with_context(|| format!("Failed to create directory {}", config_dir.display()))?;

    let config_path = config_dir.join("default.yaml");
    if !config_path.exists() || force {
        Settings::default()
            .to_file(&config_path)
            .context("Failed to create default configuration")?;
        println!("Created: {}", config_path.display());
    } else {
        println!("Skipped: {} (already exists)", config_path.display());
    }

    let examples_dir = config_dir.join("examples");
    std::fs::create_dir_all(&examples_dir)?;

    // A quick bounded run for trying the engine out
    let mut quick_config = Settings::default();
    quick_config.simulation.pattern = SeedPattern::Plus;
    quick_config.simulation.generations = Some(20);
    quick_config.simulation.interval_ms = 250;
    quick_config.to_file(&examples_dir.join("quick.yaml"))?;

    // A larger grid seeded with the cross pattern, snapshots enabled
    let mut cross_config = Settings::default();
    cross_config.grid.rows = 25;
    cross_config.grid.cols = 25;
    cross_config.simulation.pattern = SeedPattern::Cross;
    cross_config.output.save_snapshots = true;
    cross_config.to_file(&examples_dir.join("cross.yaml"))?;

    println!("Created example configurations in: {}", examples_dir.display());
    println!("\n{}", ColorOutput::success("Setup complete!"));
    println!("\nNext steps:");
    println!("1. Edit configuration files in {}", config_dir.display());
    println!("2. Run: cargo run -- run --config config/default.yaml");

    Ok(())
}
