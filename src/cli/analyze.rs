//! Analyze command handler.
//!
//! Implements the `analyze` subcommand: load records, evaluate every
//! row, aggregate, render the report, and map the result to an exit
//! code.

use crate::cli::exit_codes;
use crate::config::{AnalyzeConfig, InputSource};
use crate::eval::{Report, RowEvaluator};
use crate::input::{latest_csv, load_records};
use crate::lexicon::Lexicon;
use crate::reports::{render, ReportFormat};
use anyhow::{Context, Result};
use std::io::{IsTerminal, Write};
use std::path::PathBuf;

/// Run the analyze command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_analyze(config: AnalyzeConfig) -> Result<i32> {
    let quiet = config.behavior.quiet;

    let input_path = resolve_input(&config.input)?;
    let lexicon = load_lexicon(config.lexicon_path.as_deref())?;
    let match_config = config.matching.resolve()?;
    let records = load_records(&input_path)?;

    if !quiet {
        tracing::info!(
            "evaluating {} records from {} (model threshold {})",
            records.len(),
            input_path.display(),
            match_config.model_threshold
        );
    }

    let evaluator = RowEvaluator::new(lexicon, match_config);
    let verdicts = evaluator.evaluate_all(&records);
    let report = Report::from_verdicts(&verdicts);

    if !quiet && report.comparable_rows < report.total_rows {
        tracing::warn!(
            "{} of {} rows had unparseable descriptions; field comparisons skipped for those rows",
            report.total_rows - report.comparable_rows,
            report.total_rows
        );
    }

    output_report(&config, &report, &input_path)?;

    Ok(determine_exit_code(&config, &report))
}

/// Resolve the input source to a concrete file path.
fn resolve_input(input: &InputSource) -> Result<PathBuf> {
    match input {
        InputSource::File(path) => Ok(path.clone()),
        InputSource::LatestIn(dir) => {
            let picked = latest_csv(dir)
                .with_context(|| format!("searching for results under {}", dir.display()))?;
            tracing::info!("auto-picked {}", picked.display());
            Ok(picked)
        }
    }
}

/// Load the lexicon file, or fall back to the built-in vocabulary.
fn load_lexicon(path: Option<&std::path::Path>) -> Result<Lexicon> {
    match path {
        Some(path) => {
            let lexicon = Lexicon::load(path)
                .with_context(|| format!("loading lexicon from {}", path.display()))?;
            tracing::debug!("loaded lexicon from {}", path.display());
            Ok(lexicon)
        }
        None => Ok(Lexicon::with_builtins()),
    }
}

/// Render the report and route it to stdout or the output file.
fn output_report(config: &AnalyzeConfig, report: &Report, input_path: &std::path::Path) -> Result<()> {
    let to_terminal = config.output.file.is_none() && std::io::stdout().is_terminal();
    let format = config.output.format.resolve(to_terminal);
    let colored = format == ReportFormat::Summary && to_terminal && !config.output.no_color;

    let rendered = render(report, format, &input_path.display().to_string(), colored)?;

    match &config.output.file {
        Some(path) => {
            std::fs::write(path, rendered.as_bytes())
                .with_context(|| format!("writing report to {}", path.display()))?;
            if !config.behavior.quiet {
                tracing::info!("report written to {}", path.display());
            }
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            writeln!(stdout, "{rendered}")?;
        }
    }
    Ok(())
}

/// Determine the exit code from the `--fail-under` threshold.
///
/// An empty batch has no accuracy at all, which cannot demonstrate that
/// the threshold is met, so it also fails.
fn determine_exit_code(config: &AnalyzeConfig, report: &Report) -> i32 {
    let Some(fail_under) = config.behavior.fail_under else {
        return exit_codes::SUCCESS;
    };

    match report.accuracy {
        Some(accuracy) if accuracy * 100.0 >= fail_under => exit_codes::SUCCESS,
        Some(accuracy) => {
            tracing::warn!(
                "accuracy {:.3}% below required {:.3}%",
                accuracy * 100.0,
                fail_under
            );
            exit_codes::BELOW_THRESHOLD
        }
        None => {
            tracing::warn!("no rows analysed; cannot satisfy --fail-under {fail_under}");
            exit_codes::BELOW_THRESHOLD
        }
    }
}
