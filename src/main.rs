use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::time::Instant;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use spk_rank::config::Dataset;
use spk_rank::model::CalculationMethod;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_CONFIG: i32 = 4;
const EXIT_INPUT: i32 = 5;

#[derive(ValueEnum, Clone, Copy, Debug, Default)]
enum OutputFormat {
    /// Aligned table with the top candidate highlighted
    #[default]
    Table,
    /// Tab-separated values with a header line
    Tsv,
    /// Pretty JSON, full precision
    Json,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Rank candidates (default if no subcommand)
    Rank {
        /// Scoring method; overrides the dataset's `method`
        #[arg(short, long, value_enum)]
        method: Option<CalculationMethod>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Rank with both SAW and SMART and show them side by side
    Compare,
    /// Show raw and normalized criterion weights
    Weights,
    /// Check the dataset and report every problem found
    Validate,
    /// Write a starter dataset (demo scholarship data)
    Init {
        /// Write the demo dataset without prompting, replacing any existing file
        #[arg(short, long)]
        force: bool,
    },
}

#[derive(Parser, Debug)]
#[command(name = "spk-rank")]
#[command(about = "Rank candidates against weighted criteria with SAW or SMART", long_about = None)]
#[command(version)]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to dataset file (defaults to ~/.config/spk-rank/dataset.yaml)
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

/// Logs go to stderr. `--verbose` forces debug; otherwise RUST_LOG, then warn.
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("spk_rank=debug,warn")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().compact().with_writer(std::io::stderr))
        .init();
}

fn load_dataset(path: Option<PathBuf>) -> Dataset {
    match spk_rank::config::load_config(path) {
        Ok(d) => d,
        Err(e) => {
            eprintln!("Config error: {:#}", e);
            std::process::exit(EXIT_CONFIG);
        }
    }
}

/// Report validation problems and exit if the dataset cannot be ranked
fn check_dataset(dataset: &Dataset) {
    for warning in spk_rank::scoring::unknown_value_keys(&dataset.criteria, &dataset.candidates) {
        warn!("{}", warning);
    }
    if let Err(errors) = spk_rank::scoring::validate_dataset(&dataset.criteria, &dataset.candidates) {
        eprintln!("Dataset errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let command = cli.command.unwrap_or(Commands::Rank {
        method: None,
        format: OutputFormat::Table,
    });
    let config_path = cli.config.map(PathBuf::from);
    let start_time = Instant::now();
    let use_colors = spk_rank::output::should_use_colors();

    match command {
        Commands::Init { force } => match spk_rank::config::run_init(config_path, force) {
            Ok(Some(path)) if force => println!("Dataset written to {}", path.display()),
            Ok(_) => {}
            Err(e) => {
                eprintln!("Init failed: {:#}", e);
                std::process::exit(EXIT_IO);
            }
        },
        Commands::Validate => {
            let dataset = load_dataset(config_path);
            for warning in
                spk_rank::scoring::unknown_value_keys(&dataset.criteria, &dataset.candidates)
            {
                println!("warning: {}", warning);
            }
            match spk_rank::scoring::validate_dataset(&dataset.criteria, &dataset.candidates) {
                Ok(()) => println!(
                    "Dataset OK: {} criteria, {} candidates, total weight {}",
                    dataset.criteria.len(),
                    dataset.candidates.len(),
                    spk_rank::output::format_weight(spk_rank::scoring::total_weight(
                        &dataset.criteria
                    ))
                ),
                Err(errors) => {
                    for error in errors {
                        println!("error: {}", error);
                    }
                    std::process::exit(EXIT_INPUT);
                }
            }
        }
        Commands::Weights => {
            let dataset = load_dataset(config_path);
            if spk_rank::scoring::total_weight(&dataset.criteria) == 0.0 {
                warn!("total weight is 0, every final score will be 0");
            }
            println!(
                "{}",
                spk_rank::output::format_weights(&dataset.criteria, use_colors)
            );
        }
        Commands::Compare => {
            let dataset = load_dataset(config_path);
            check_dataset(&dataset);
            let rows = spk_rank::scoring::compare_methods(&dataset.criteria, &dataset.candidates);
            println!("{}", spk_rank::output::format_comparison(&rows, use_colors));
        }
        Commands::Rank { method, format } => {
            let dataset = load_dataset(config_path);
            check_dataset(&dataset);

            let method = dataset.effective_method(method);
            debug!(%method, "selected method");

            let results = spk_rank::calculate(method, &dataset.criteria, &dataset.candidates);

            match format {
                OutputFormat::Table => {
                    if let Some(banner) = spk_rank::output::format_winner(&results, use_colors) {
                        println!("{}", banner);
                        println!();
                    }
                    println!(
                        "{}",
                        spk_rank::output::format_result_table(
                            &results,
                            &dataset.criteria,
                            method,
                            use_colors
                        )
                    );
                }
                OutputFormat::Tsv => {
                    println!(
                        "{}",
                        spk_rank::output::format_tsv(&results, &dataset.criteria)
                    );
                }
                OutputFormat::Json => match spk_rank::output::format_json(&results) {
                    Ok(json) => println!("{}", json),
                    Err(e) => {
                        eprintln!("Output error: {:#}", e);
                        std::process::exit(EXIT_IO);
                    }
                },
            }

            debug!(
                results = results.len(),
                elapsed = ?start_time.elapsed(),
                "ranking complete"
            );
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
