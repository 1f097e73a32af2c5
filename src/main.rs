//! vehicle-eval: Match evaluation for vehicle recognition runs
//!
//! Scores predicted vehicle descriptions against ground truth and
//! aggregates per-row verdicts into batch metrics.

#![allow(clippy::too_many_lines)]

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use vehicle_eval::{
    cli,
    config::{AnalyzeConfig, BehaviorConfig, InputSource, MatchingOptions, OutputConfig},
    reports::ReportFormat,
};

#[derive(Parser)]
#[command(name = "vehicle-eval")]
#[command(version)]
#[command(about = "Match evaluation for vehicle recognition runs", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Analysis completed (accuracy at or above --fail-under, if given)
    1  Accuracy below --fail-under, no rows to analyse, or an error occurred

EXAMPLES:
    # Analyse the newest CSV under ./results
    vehicle-eval analyze

    # Analyse a specific run with a stricter model threshold
    vehicle-eval analyze run.csv --fuzzy-preset strict

    # CI gate: fail the build below 90% accuracy
    vehicle-eval analyze run.csv -o json --fail-under 90")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `analyze` subcommand
#[derive(Parser)]
struct AnalyzeArgs {
    /// Results file (CSV or JSON). Defaults to the newest CSV under --results-dir.
    input: Option<PathBuf>,

    /// Directory searched for the newest `*.csv` when no input is given
    #[arg(long, default_value = "results")]
    results_dir: PathBuf,

    /// Lexicon file (YAML or JSON) replacing the built-in vocabulary
    #[arg(long, env = "VEHICLE_EVAL_LEXICON")]
    lexicon: Option<PathBuf>,

    /// Fuzzy matching preset (strict, balanced, permissive)
    #[arg(long, default_value = "balanced")]
    fuzzy_preset: String,

    /// Explicit model-match threshold (0.0-1.0), overrides the preset
    #[arg(long)]
    threshold: Option<f64>,

    /// Output format (auto detects TTY: summary if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Exit with code 1 if accuracy (percent) falls below this value
    #[arg(long)]
    fail_under: Option<f64>,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a results file and report batch metrics
    Analyze(AnalyzeArgs),

    /// Show or initialize the normalization lexicon
    Lexicon {
        #[command(subcommand)]
        action: LexiconAction,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },
}

/// Sub-subcommands for the `lexicon` command
#[derive(Subcommand)]
enum LexiconAction {
    /// Print the effective lexicon (given file, or built-ins) as YAML
    Show {
        /// Lexicon file to display instead of the built-ins
        #[arg(long)]
        lexicon: Option<PathBuf>,
    },
    /// Write the built-in lexicon to a file as a customization starting point
    Init {
        /// Target path (default: ./vehicle-lexicon.yaml)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        Commands::Analyze(args) => {
            let input = match args.input {
                Some(path) => InputSource::File(path),
                None => InputSource::LatestIn(args.results_dir),
            };

            let config = AnalyzeConfig {
                input,
                lexicon_path: args.lexicon,
                matching: MatchingOptions {
                    fuzzy_preset: args.fuzzy_preset,
                    threshold: args.threshold,
                },
                output: OutputConfig {
                    format: args.output,
                    file: args.output_file,
                    no_color: cli.no_color,
                },
                behavior: BehaviorConfig {
                    quiet: cli.quiet,
                    fail_under: args.fail_under,
                },
            };

            let exit_code = cli::run_analyze(config)?;
            if exit_code != 0 {
                std::process::exit(exit_code);
            }
            Ok(())
        }

        Commands::Lexicon { action } => match action {
            LexiconAction::Show { lexicon } => cli::run_lexicon_show(lexicon.as_deref()),
            LexiconAction::Init { output } => cli::run_lexicon_init(output),
        },

        Commands::Completions { shell } => {
            generate(shell, &mut Cli::command(), "vehicle-eval", &mut io::stdout());
            Ok(())
        }
    }
}
