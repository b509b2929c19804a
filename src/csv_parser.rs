//! Climate CSV parser.
//!
//! Parses comma-delimited station observations into [`ClimateRecord`]s. The
//! first non-empty line is a header; column positions are resolved from it
//! once, so reordered columns parse the same. Header matching is
//! case-insensitive and accepts the common aliases (`rh`/`rh_mean`/`rhmean`,
//! `sunshine`/`sun`).
//!
//! Two entry points:
//! - [`parse_climate_csv`]: lenient. Short rows and bad dates are skipped,
//!   unparseable numeric fields become `f64::NAN` and propagate through the
//!   downstream physics unchanged.
//! - [`parse_climate_csv_strict`]: rejects the whole input on the first
//!   malformed row instead.

use chrono::NaiveDate;
use thiserror::Error;
use tracing::{debug, warn};

use crate::climate::ClimateRecord;

/// Minimum number of fields a data row must have to be considered.
const MIN_FIELDS: usize = 6;

const DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Error, Debug)]
pub enum ClimateCsvError {
    #[error("Missing required column: {0}")]
    MissingColumn(&'static str),

    #[error("Row {row}: expected at least {MIN_FIELDS} fields, found {found}")]
    ShortRow { row: usize, found: usize },

    #[error("Row {row}: invalid {field} value: '{value}'")]
    InvalidNumber {
        row: usize,
        field: &'static str,
        value: String,
    },

    #[error("Row {row}: invalid date: '{value}'")]
    InvalidDate { row: usize, value: String },
}

/// Recognized input columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Date,
    Tmax,
    Tmin,
    RhMean,
    Wind,
    Sunshine,
}

impl Field {
    const ALL: [Field; 6] = [
        Field::Date,
        Field::Tmax,
        Field::Tmin,
        Field::RhMean,
        Field::Wind,
        Field::Sunshine,
    ];

    fn name(self) -> &'static str {
        match self {
            Field::Date => "date",
            Field::Tmax => "tmax",
            Field::Tmin => "tmin",
            Field::RhMean => "rh",
            Field::Wind => "wind",
            Field::Sunshine => "sunshine",
        }
    }

    /// Header aliases, matched against an already-lowercased token.
    fn matches(self, token: &str) -> bool {
        match self {
            Field::Date => token == "date",
            Field::Tmax => token == "tmax",
            Field::Tmin => token == "tmin",
            Field::RhMean => matches!(token, "rh" | "rh_mean" | "rhmean"),
            Field::Wind => token == "wind",
            Field::Sunshine => matches!(token, "sunshine" | "sun"),
        }
    }
}

/// Column positions resolved from the header, built once per parse call.
#[derive(Debug)]
struct ColumnMap {
    indices: [usize; 6],
}

impl ColumnMap {
    fn resolve(header: &str) -> Result<Self, ClimateCsvError> {
        let tokens: Vec<String> = header
            .split(',')
            .map(|t| t.trim().to_ascii_lowercase())
            .collect();

        let mut indices = [0usize; 6];
        for field in Field::ALL {
            match tokens.iter().position(|t| field.matches(t)) {
                Some(idx) => indices[field as usize] = idx,
                None => return Err(ClimateCsvError::MissingColumn(field.name())),
            }
        }
        Ok(Self { indices })
    }

    /// Value for `field`, or "" when the row is shorter than the header.
    fn get<'a>(&self, row: &'a [&str], field: Field) -> &'a str {
        row.get(self.indices[field as usize]).copied().unwrap_or("")
    }
}

/// Parse climate observations leniently.
///
/// Rows with fewer than [`MIN_FIELDS`] fields are dropped silently; numeric
/// fields that fail to parse become `f64::NAN`. An empty or header-only input
/// yields an empty vec, never an error. Output order matches input row order;
/// no sorting or deduplication is applied. An empty result is the caller's
/// cue that nothing usable was found.
pub fn parse_climate_csv(text: &str) -> Vec<ClimateRecord> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let Some(header) = lines.next() else {
        return Vec::new();
    };
    let columns = match ColumnMap::resolve(header) {
        Ok(columns) => columns,
        Err(e) => {
            warn!("Unusable climate CSV header: {e}");
            return Vec::new();
        }
    };

    let mut records = Vec::new();
    let mut skipped_rows = 0;
    let mut row_count = 0;

    for line in lines {
        row_count += 1;
        let row: Vec<&str> = line.split(',').map(str::trim).collect();

        if row.len() < MIN_FIELDS {
            debug!(
                "Row {} has {} fields (need {}), skipping: {}",
                row_count,
                row.len(),
                MIN_FIELDS,
                line
            );
            skipped_rows += 1;
            continue;
        }

        let date_value = columns.get(&row, Field::Date);
        let date = match NaiveDate::parse_from_str(date_value, DATE_FORMAT) {
            Ok(date) => date,
            Err(_) => {
                warn!("Row {row_count}: unparseable date '{date_value}', skipping");
                skipped_rows += 1;
                continue;
            }
        };

        records.push(ClimateRecord {
            date,
            tmax: lenient_number(columns.get(&row, Field::Tmax)),
            tmin: lenient_number(columns.get(&row, Field::Tmin)),
            rh_mean: lenient_number(columns.get(&row, Field::RhMean)),
            wind: lenient_number(columns.get(&row, Field::Wind)),
            sunshine: lenient_number(columns.get(&row, Field::Sunshine)),
        });
    }

    if skipped_rows > 0 {
        warn!("Skipped {skipped_rows} unusable rows out of {row_count}");
    }
    debug!("Parsed {} climate records from {} rows", records.len(), row_count);

    records
}

/// Parse climate observations strictly, rejecting the input on the first
/// malformed row.
///
/// Empty or header-only input is still an empty vec, matching the lenient
/// parser.
pub fn parse_climate_csv_strict(text: &str) -> Result<Vec<ClimateRecord>, ClimateCsvError> {
    let mut lines = text.lines().map(str::trim).filter(|l| !l.is_empty());

    let Some(header) = lines.next() else {
        return Ok(Vec::new());
    };
    let columns = ColumnMap::resolve(header)?;

    let mut records = Vec::new();
    for (i, line) in lines.enumerate() {
        let row_num = i + 1;
        let row: Vec<&str> = line.split(',').map(str::trim).collect();

        if row.len() < MIN_FIELDS {
            return Err(ClimateCsvError::ShortRow {
                row: row_num,
                found: row.len(),
            });
        }

        let date_value = columns.get(&row, Field::Date);
        let date = NaiveDate::parse_from_str(date_value, DATE_FORMAT).map_err(|_| {
            ClimateCsvError::InvalidDate {
                row: row_num,
                value: date_value.to_string(),
            }
        })?;

        records.push(ClimateRecord {
            date,
            tmax: strict_number(&columns, &row, Field::Tmax, row_num)?,
            tmin: strict_number(&columns, &row, Field::Tmin, row_num)?,
            rh_mean: strict_number(&columns, &row, Field::RhMean, row_num)?,
            wind: strict_number(&columns, &row, Field::Wind, row_num)?,
            sunshine: strict_number(&columns, &row, Field::Sunshine, row_num)?,
        });
    }

    Ok(records)
}

fn lenient_number(value: &str) -> f64 {
    value.parse().unwrap_or(f64::NAN)
}

fn strict_number(
    columns: &ColumnMap,
    row: &[&str],
    field: Field,
    row_num: usize,
) -> Result<f64, ClimateCsvError> {
    let value = columns.get(row, field);
    value.parse().map_err(|_| ClimateCsvError::InvalidNumber {
        row: row_num,
        field: field.name(),
        value: value.to_string(),
    })
}
