//! Record loading from verifier results files.
//!
//! The engine itself only needs an iterable of [`Record`]s; this module
//! is the file-based collaborator that supplies them. CSV and JSON
//! inputs are supported, detected by file extension. Failure to obtain
//! the sequence at all (missing file, missing columns, no results
//! directory) is fatal; blank per-row text fields are not.

use crate::error::{ErrorContext, InputErrorKind, Result, VehicleEvalError};
use crate::eval::{parse_flag, Record};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Load records from a results file, auto-detecting the format.
pub fn load_records(path: &Path) -> Result<Vec<Record>> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "csv" => load_csv(path),
        "json" => load_json(path),
        _ => Err(VehicleEvalError::input(
            format!("at {}", path.display()),
            InputErrorKind::UnknownFormat,
        )),
    }
}

/// Find the most recently modified `*.csv` under a results directory.
///
/// Reproduces the analyzer's historical default of picking the newest
/// verifier output when no explicit input path is given.
pub fn latest_csv(dir: &Path) -> Result<PathBuf> {
    let no_input = || {
        VehicleEvalError::input(
            "no explicit input path given",
            InputErrorKind::NoInputFound {
                dir: dir.display().to_string(),
            },
        )
    };

    let entries = std::fs::read_dir(dir).map_err(|e| VehicleEvalError::io(dir, e))?;

    let mut newest: Option<(std::time::SystemTime, PathBuf)> = None;
    for entry in entries {
        let entry = entry.map_err(|e| VehicleEvalError::io(dir, e))?;
        let path = entry.path();
        let is_csv = path
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
        if !is_csv {
            continue;
        }
        let modified = entry
            .metadata()
            .and_then(|m| m.modified())
            .map_err(|e| VehicleEvalError::io(&path, e))?;
        if newest.as_ref().map_or(true, |(t, _)| modified > *t) {
            newest = Some((modified, path));
        }
    }

    newest.map(|(_, path)| path).ok_or_else(no_input)
}

/// Raw row as it appears on disk, before flag parsing.
#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(default)]
    ground_truth: String,
    #[serde(default)]
    predicted: String,
    #[serde(default)]
    expected: Option<Flag>,
    #[serde(default)]
    is_match: Option<Flag>,
}

/// Boolean-like field: JSON carries real booleans, CSV carries strings.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Flag {
    Bool(bool),
    Text(String),
}

impl Flag {
    fn as_bool(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Text(s) => parse_flag(Some(s)),
        }
    }
}

impl From<RawRow> for Record {
    fn from(raw: RawRow) -> Self {
        Self {
            ground_truth: raw.ground_truth,
            predicted: raw.predicted,
            expected: raw.expected.as_ref().is_some_and(Flag::as_bool),
            observed: raw.is_match.as_ref().is_some_and(Flag::as_bool),
        }
    }
}

fn load_csv(path: &Path) -> Result<Vec<Record>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)
        .map_err(|e| match e.into_kind() {
            csv::ErrorKind::Io(io) => VehicleEvalError::io(path, io),
            other => VehicleEvalError::input(
                format!("at {}", path.display()),
                InputErrorKind::InvalidCsv(format!("{other:?}")),
            ),
        })?;

    // Text columns must exist in the header; label columns are optional
    // and default to false, matching the historical analyzer.
    let headers = reader.headers()?.clone();
    for column in ["ground_truth", "predicted"] {
        if !headers.iter().any(|h| h == column) {
            return Err(VehicleEvalError::missing_column(
                column,
                format!("at {}", path.display()),
            ));
        }
    }

    let mut records = Vec::new();
    for row in reader.deserialize::<RawRow>() {
        let raw = row.with_context(|| format!("reading {}", path.display()))?;
        records.push(raw.into());
    }

    tracing::debug!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn load_json(path: &Path) -> Result<Vec<Record>> {
    let content = std::fs::read_to_string(path).map_err(|e| VehicleEvalError::io(path, e))?;
    let rows: Vec<RawRow> = serde_json::from_str(&content)
        .with_context(|| format!("reading {}", path.display()))?;

    tracing::debug!("loaded {} records from {}", rows.len(), path.display());
    Ok(rows.into_iter().map(Record::from).collect())
}
