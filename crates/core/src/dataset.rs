//! Industry dataset loading
//!
//! Reads the yearly industry CSV into a [`TimeSeriesTable`], or builds the
//! built-in sample table when no usable file is available.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::industry::{Industry, MetricRole};
use crate::domain::table::TimeSeriesTable;
use crate::errors::{ApplicationError, DomainError};

/// Accepted names for the year column, in lookup order.
pub const YEAR_COLUMNS: [&str; 2] = ["연도", "year"];

pub const SAMPLE_SEED: u64 = 42;
pub const SAMPLE_FIRST_YEAR: i32 = 2016;
pub const SAMPLE_LAST_YEAR: i32 = 2024;

#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("failed to read dataset file {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("dataset has no header row")]
    MissingHeader,
    #[error("dataset has no year column (expected `연도` or `year`)")]
    MissingYearColumn,
    #[error("dataset has no production column (expected one of {expected})")]
    MissingProductionColumn { expected: String },
    #[error("dataset has no rows with a numeric year")]
    Empty,
    #[error("dataset lists year {0} more than once")]
    DuplicateYear(i32),
    #[error(transparent)]
    Table(#[from] DomainError),
}

impl From<DatasetError> for ApplicationError {
    fn from(value: DatasetError) -> Self {
        match value {
            DatasetError::Table(error) => Self::Domain(error),
            other => Self::Dataset(other.to_string()),
        }
    }
}

/// Where the working table came from.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DataSource {
    File { path: PathBuf },
    Sample { reason: String },
}

impl DataSource {
    pub fn describe(&self) -> String {
        match self {
            Self::File { path } => format!("file {}", path.display()),
            Self::Sample { reason } => format!("built-in sample ({reason})"),
        }
    }

    pub fn is_sample(&self) -> bool {
        matches!(self, Self::Sample { .. })
    }
}

#[derive(Clone, Debug)]
pub struct LoadedDataset {
    pub table: TimeSeriesTable,
    pub source: DataSource,
}

/// Parses UTF-8 CSV text. Rows whose year cell is not numeric are dropped,
/// and empty or non-numeric cells become missing values. Rows are sorted by
/// year.
pub fn parse_csv(text: &str) -> Result<TimeSeriesTable, DatasetError> {
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text.lines().filter(|line| !line.trim().is_empty());

    let header = split_record(lines.next().ok_or(DatasetError::MissingHeader)?);
    let year_index = YEAR_COLUMNS
        .iter()
        .find_map(|name| header.iter().position(|column| column == name))
        .ok_or(DatasetError::MissingYearColumn)?;

    let production_columns =
        Industry::ALL.map(|industry| industry.column_for(MetricRole::Production));
    if !header.iter().any(|column| production_columns.contains(column)) {
        return Err(DatasetError::MissingProductionColumn {
            expected: production_columns.join(", "),
        });
    }

    let mut rows: Vec<(i32, Vec<String>)> = Vec::new();
    for (offset, line) in lines.enumerate() {
        let record = split_record(line);
        let Some(year) = record.get(year_index).and_then(|cell| parse_year(cell)) else {
            debug!(
                event_name = "dataset.csv.row_dropped",
                record = offset + 1,
                "row without numeric year dropped"
            );
            continue;
        };
        rows.push((year, record));
    }
    if rows.is_empty() {
        return Err(DatasetError::Empty);
    }

    rows.sort_by_key(|(year, _)| *year);
    if let Some(pair) = rows.windows(2).find(|pair| pair[0].0 == pair[1].0) {
        return Err(DatasetError::DuplicateYear(pair[0].0));
    }

    let years = rows.iter().map(|(year, _)| *year).collect();
    let mut table = TimeSeriesTable::new(years)?;
    for (index, name) in header.iter().enumerate() {
        if index == year_index || name.is_empty() {
            continue;
        }
        let values =
            rows.iter().map(|(_, record)| record.get(index).and_then(|c| parse_value(c))).collect();
        table.insert_column(name.as_str(), values)?;
    }

    debug!(
        event_name = "dataset.csv.parsed",
        rows = table.len(),
        columns = header.len() - 1,
        "dataset parsed"
    );
    Ok(table)
}

pub fn load_csv(path: &Path) -> Result<TimeSeriesTable, DatasetError> {
    let text = fs::read_to_string(path)
        .map_err(|source| DatasetError::ReadFile { path: path.to_path_buf(), source })?;
    parse_csv(&text)
}

/// Loads the configured CSV, falling back to [`sample_table`] when no path is
/// given or the file cannot be used.
pub fn load_or_sample(path: Option<&Path>) -> LoadedDataset {
    let Some(path) = path else {
        return LoadedDataset {
            table: sample_table(),
            source: DataSource::Sample { reason: "no dataset configured".to_string() },
        };
    };

    match load_csv(path) {
        Ok(table) => LoadedDataset { table, source: DataSource::File { path: path.to_path_buf() } },
        Err(error) => {
            warn!(
                event_name = "dataset.load.fallback",
                path = %path.display(),
                error = %error,
                "dataset unusable, using built-in sample"
            );
            LoadedDataset {
                table: sample_table(),
                source: DataSource::Sample { reason: error.to_string() },
            }
        }
    }
}

struct SampleSeries {
    column: &'static str,
    start: f64,
    end: f64,
    jitter: f64,
}

const SAMPLE_SERIES: [SampleSeries; 8] = [
    SampleSeries { column: "반도체_생산(조원)", start: 250.0, end: 420.0, jitter: 8.0 },
    SampleSeries { column: "반도체_시장점유율(퍼센트)", start: 16.0, end: 20.0, jitter: 0.4 },
    SampleSeries { column: "반도체_수출(억불)", start: 800.0, end: 1180.0, jitter: 25.0 },
    SampleSeries { column: "DRAM_가격(달러)", start: 3.0, end: 4.5, jitter: 0.2 },
    SampleSeries { column: "디스플레이_생산(조원)", start: 90.0, end: 110.0, jitter: 3.0 },
    SampleSeries { column: "디스플레이_시장점유율(퍼센트)", start: 30.0, end: 28.0, jitter: 0.3 },
    SampleSeries { column: "디스플레이_수출(억불)", start: 350.0, end: 320.0, jitter: 10.0 },
    SampleSeries {
        column: "액정표시장치(LCD)_평균가격(달러)",
        start: 1.2,
        end: 0.7,
        jitter: 0.05,
    },
];

/// Deterministic 2016-2024 table with every column for both industries: a
/// straight line from start to end per series plus seeded uniform jitter.
pub fn sample_table() -> TimeSeriesTable {
    let years: Vec<i32> = (SAMPLE_FIRST_YEAR..=SAMPLE_LAST_YEAR).collect();
    let steps = (years.len() - 1) as f64;
    let mut rng = StdRng::seed_from_u64(SAMPLE_SEED);

    let mut columns = BTreeMap::new();
    for series in &SAMPLE_SERIES {
        let values = (0..years.len())
            .map(|index| {
                let trend = series.start + (series.end - series.start) * index as f64 / steps;
                let noise = rng.gen_range(-series.jitter..=series.jitter);
                Some(((trend + noise) * 100.0).round() / 100.0)
            })
            .collect();
        columns.insert(series.column.to_string(), values);
    }
    TimeSeriesTable::from_trusted_parts(years, columns)
}

fn parse_year(cell: &str) -> Option<i32> {
    let cell = cell.trim();
    if let Ok(year) = cell.parse::<i32>() {
        return Some(year);
    }
    // Spreadsheet exports sometimes write years as `2020.0`.
    let value = cell.parse::<f64>().ok()?;
    (value.is_finite() && value.fract() == 0.0).then_some(value as i32)
}

fn parse_value(cell: &str) -> Option<f64> {
    let cell = cell.trim();
    if cell.is_empty() {
        return None;
    }
    cell.replace(',', "").parse::<f64>().ok().filter(|value| value.is_finite())
}

/// Splits one CSV record. Double-quoted fields may contain commas and `""`
/// escapes; fields are trimmed.
fn split_record(line: &str) -> Vec<String> {
    let mut fields = Vec::new();
    let mut current = String::new();
    let mut quoted = false;
    let mut chars = line.trim_end_matches('\r').chars().peekable();

    while let Some(ch) = chars.next() {
        match ch {
            '"' if quoted && chars.peek() == Some(&'"') => {
                current.push('"');
                chars.next();
            }
            '"' => quoted = !quoted,
            ',' if !quoted => fields.push(std::mem::take(&mut current).trim().to_string()),
            _ => current.push(ch),
        }
    }
    fields.push(current.trim().to_string());
    fields
}
